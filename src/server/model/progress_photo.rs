//! Progress photo domain model and parameters.

use chrono::{DateTime, Utc};

/// Photo a user uploaded to document their progress.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressPhoto {
    pub id: i32,
    pub user_id: i32,
    pub weight_entry_id: Option<i32>,
    /// Path relative to the upload directory.
    pub file_path: String,
    pub caption: Option<String>,
    pub taken_at: DateTime<Utc>,
}

impl ProgressPhoto {
    pub fn from_entity(entity: entity::progress_photo::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            weight_entry_id: entity.weight_entry_id,
            file_path: entity.file_path,
            caption: entity.caption,
            taken_at: entity.taken_at,
        }
    }
}

/// Parameters for deleting a photo on behalf of a user.
#[derive(Debug, Clone)]
pub struct DeletePhotoParam {
    pub photo_id: i32,
    /// User requesting the deletion; must own the photo.
    pub user_id: i32,
}
