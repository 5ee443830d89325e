use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "progress_photo")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub weight_entry_id: Option<i32>,
    /// Path relative to the configured upload directory.
    pub file_path: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub caption: Option<String>,
    pub taken_at: DateTimeUtc,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::weight_entry::Entity",
        from = "Column::WeightEntryId",
        to = "super::weight_entry::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    WeightEntry,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::weight_entry::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WeightEntry.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
