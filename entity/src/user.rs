use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub email: String,
    pub name: String,
    /// One of `light`, `dark` or `system`.
    pub theme: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::weight_entry::Entity")]
    WeightEntry,
    #[sea_orm(has_many = "super::progress_photo::Entity")]
    ProgressPhoto,
}

impl Related<super::weight_entry::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WeightEntry.def()
    }
}

impl Related<super::progress_photo::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProgressPhoto.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
