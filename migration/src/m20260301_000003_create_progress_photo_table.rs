use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000001_create_user_table::User,
    m20260301_000002_create_weight_entry_table::WeightEntry,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProgressPhoto::Table)
                    .if_not_exists()
                    .col(pk_auto(ProgressPhoto::Id))
                    .col(integer(ProgressPhoto::UserId))
                    .col(integer_null(ProgressPhoto::WeightEntryId))
                    .col(string(ProgressPhoto::FilePath))
                    .col(text_null(ProgressPhoto::Caption))
                    .col(timestamp(ProgressPhoto::TakenAt))
                    .col(
                        timestamp(ProgressPhoto::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_progress_photo_user_id")
                            .from(ProgressPhoto::Table, ProgressPhoto::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_progress_photo_weight_entry_id")
                            .from(ProgressPhoto::Table, ProgressPhoto::WeightEntryId)
                            .to(WeightEntry::Table, WeightEntry::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProgressPhoto::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ProgressPhoto {
    Table,
    Id,
    UserId,
    WeightEntryId,
    FilePath,
    Caption,
    TakenAt,
    CreatedAt,
}
