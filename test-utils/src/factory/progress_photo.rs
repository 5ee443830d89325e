//! Progress photo factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating progress photos.
///
/// Only the database row is created; no file is written to disk unless the test does it.
pub struct ProgressPhotoFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    weight_entry_id: Option<i32>,
    file_path: String,
    caption: Option<String>,
}

impl<'a> ProgressPhotoFactory<'a> {
    /// Creates a new factory for a photo owned by `user_id`.
    ///
    /// Defaults:
    /// - weight_entry_id: `None`
    /// - file_path: `"photos/photo_{id}.jpg"`
    /// - caption: `None`
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            weight_entry_id: None,
            file_path: format!("photos/photo_{}.jpg", next_id()),
            caption: None,
        }
    }

    pub fn weight_entry_id(mut self, weight_entry_id: i32) -> Self {
        self.weight_entry_id = Some(weight_entry_id);
        self
    }

    pub fn file_path(mut self, file_path: impl Into<String>) -> Self {
        self.file_path = file_path.into();
        self
    }

    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    /// Builds and inserts the photo row.
    ///
    /// # Returns
    /// - `Ok(entity::progress_photo::Model)` - Created photo
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::progress_photo::Model, DbErr> {
        let now = Utc::now();
        entity::progress_photo::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            weight_entry_id: ActiveValue::Set(self.weight_entry_id),
            file_path: ActiveValue::Set(self.file_path),
            caption: ActiveValue::Set(self.caption),
            taken_at: ActiveValue::Set(now),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a photo with default values for `user_id`.
pub async fn create_photo(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::progress_photo::Model, DbErr> {
    ProgressPhotoFactory::new(db, user_id).build().await
}
