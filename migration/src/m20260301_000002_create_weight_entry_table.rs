use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WeightEntry::Table)
                    .if_not_exists()
                    .col(pk_auto(WeightEntry::Id))
                    .col(integer(WeightEntry::UserId))
                    .col(double(WeightEntry::Weight))
                    .col(text_null(WeightEntry::Note))
                    .col(timestamp(WeightEntry::RecordedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_weight_entry_user_id")
                            .from(WeightEntry::Table, WeightEntry::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_weight_entry_user_recorded")
                    .table(WeightEntry::Table)
                    .col(WeightEntry::UserId)
                    .col(WeightEntry::RecordedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WeightEntry::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum WeightEntry {
    Table,
    Id,
    UserId,
    Weight,
    Note,
    RecordedAt,
}
