//! Account settings service.
//!
//! Owns the user preferences this application stores. Only the theme preference token is
//! persisted; the resolved light or dark scheme is a client concern.

use sea_orm::DatabaseConnection;

use crate::{
    model::theme::Theme,
    server::{data::user::UserRepository, error::AppError, model::user::UpdateThemeParam},
};

pub struct SettingsService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> SettingsService<'a> {
    /// Creates a new SettingsService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a user's theme preference.
    ///
    /// # Arguments
    /// - `param` - User ID and the new preference
    ///
    /// # Returns
    /// - `Ok(Theme)` - The stored preference
    /// - `Err(AppError::NotFound)` - No user with that ID
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn update_theme(&self, param: UpdateThemeParam) -> Result<Theme, AppError> {
        let user_repo = UserRepository::new(self.db);

        let updated = user_repo.update_theme(param.user_id, param.theme).await?;
        if !updated {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        tracing::debug!(user_id = param.user_id, theme = %param.theme, "Theme preference updated");

        Ok(param.theme)
    }
}
