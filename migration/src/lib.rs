pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_user_table;
mod m20260301_000002_create_weight_entry_table;
mod m20260301_000003_create_progress_photo_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_user_table::Migration),
            Box::new(m20260301_000002_create_weight_entry_table::Migration),
            Box::new(m20260301_000003_create_progress_photo_table::Migration),
        ]
    }
}
