//! Weight tracking service.
//!
//! Reads a user's weight history and manages their progress photos. Photo rows are the
//! source of truth; files under the upload directory are removed on a best-effort basis.

use std::path::{Component, Path, PathBuf};

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{progress_photo::ProgressPhotoRepository, weight_entry::WeightEntryRepository},
    error::{auth::AuthError, AppError},
    model::{progress_photo::DeletePhotoParam, weight_entry::WeightEntry},
};

/// Number of entries shown in the dashboard's recent history.
pub const RECENT_ENTRIES_LIMIT: u64 = 5;

pub struct WeightService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> WeightService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a user's most recent weight entries, newest first.
    pub async fn recent_entries(
        &self,
        user_id: i32,
        limit: u64,
    ) -> Result<Vec<WeightEntry>, AppError> {
        let entry_repo = WeightEntryRepository::new(self.db);
        let entries = entry_repo.get_recent_by_user(user_id, limit).await?;
        Ok(entries)
    }

    /// Deletes a progress photo owned by the requesting user.
    ///
    /// The row is deleted first. The file at `upload_dir/file_path` is removed afterwards
    /// and a failure to remove it is only logged.
    ///
    /// # Arguments
    /// - `param` - Photo ID and the requesting user's ID
    /// - `upload_dir` - Directory photo file paths are relative to
    ///
    /// # Returns
    /// - `Ok(())` - Photo deleted
    /// - `Err(AppError::NotFound)` - No photo with that ID
    /// - `Err(AppError::AuthErr(AuthError::AccessDenied))` - Photo belongs to another user
    /// - `Err(AppError::DbErr)` - Database error during lookup or delete
    pub async fn delete_photo(
        &self,
        param: DeletePhotoParam,
        upload_dir: &Path,
    ) -> Result<(), AppError> {
        let photo_repo = ProgressPhotoRepository::new(self.db);

        let Some(photo) = photo_repo.find_by_id(param.photo_id).await? else {
            return Err(AppError::NotFound("Photo not found".to_string()));
        };

        if photo.user_id != param.user_id {
            return Err(AuthError::AccessDenied(
                param.user_id,
                format!(
                    "User attempted to delete photo {} owned by user {}",
                    photo.id, photo.user_id
                ),
            )
            .into());
        }

        if !photo_repo.delete(photo.id).await? {
            return Err(AppError::NotFound("Photo not found".to_string()));
        }

        remove_photo_file(upload_dir, &photo.file_path).await;

        Ok(())
    }
}

async fn remove_photo_file(upload_dir: &Path, file_path: &str) {
    let Some(path) = resolve_upload_path(upload_dir, file_path) else {
        tracing::warn!(file_path, "Refusing to remove photo file outside upload directory");
        return;
    };

    if let Err(e) = tokio::fs::remove_file(&path).await {
        tracing::warn!(path = %path.display(), "Failed to remove photo file: {}", e);
    }
}

/// Joins a stored relative path onto the upload directory.
///
/// Returns `None` unless every component of `file_path` is a plain name, so stored paths
/// cannot escape `upload_dir`.
fn resolve_upload_path(upload_dir: &Path, file_path: &str) -> Option<PathBuf> {
    let relative = Path::new(file_path);
    let mut components = relative.components().peekable();

    components.peek()?;
    if !components.all(|c| matches!(c, Component::Normal(_))) {
        return None;
    }

    Some(upload_dir.join(relative))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_nested_relative_path() {
        let path = resolve_upload_path(Path::new("/srv/uploads"), "photos/1.jpg");
        assert_eq!(path, Some(PathBuf::from("/srv/uploads/photos/1.jpg")));
    }

    #[test]
    fn rejects_escaping_paths() {
        let dir = Path::new("/srv/uploads");
        assert_eq!(resolve_upload_path(dir, "../etc/passwd"), None);
        assert_eq!(resolve_upload_path(dir, "/etc/passwd"), None);
        assert_eq!(resolve_upload_path(dir, ""), None);
    }
}
