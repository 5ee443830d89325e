//! Progress photo repository.

use crate::server::model::progress_photo::ProgressPhoto;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait};

/// Repository providing database operations for progress photos.
pub struct ProgressPhotoRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProgressPhotoRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a photo by primary key.
    ///
    /// # Returns
    /// - `Ok(Some(ProgressPhoto))` - Photo found
    /// - `Ok(None)` - No photo with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, photo_id: i32) -> Result<Option<ProgressPhoto>, DbErr> {
        let entity = entity::prelude::ProgressPhoto::find_by_id(photo_id)
            .one(self.db)
            .await?;

        Ok(entity.map(ProgressPhoto::from_entity))
    }

    /// Deletes a photo row.
    ///
    /// # Returns
    /// - `Ok(true)` - Row deleted
    /// - `Ok(false)` - No photo with that ID
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, photo_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::ProgressPhoto::delete_by_id(photo_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
