//! Weight entry repository.

use crate::server::model::weight_entry::WeightEntry;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

pub struct WeightEntryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WeightEntryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a user's most recent entries, newest first.
    ///
    /// # Arguments
    /// - `user_id` - Owner of the entries
    /// - `limit` - Maximum number of entries to return
    ///
    /// # Returns
    /// - `Ok(Vec<WeightEntry>)` - Up to `limit` entries ordered by `recorded_at` descending
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_recent_by_user(
        &self,
        user_id: i32,
        limit: u64,
    ) -> Result<Vec<WeightEntry>, DbErr> {
        let entities = entity::prelude::WeightEntry::find()
            .filter(entity::weight_entry::Column::UserId.eq(user_id))
            .order_by_desc(entity::weight_entry::Column::RecordedAt)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(WeightEntry::from_entity).collect())
    }
}
