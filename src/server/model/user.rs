//! User domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::{theme::Theme, user::UserDto};

/// Application user as seen by controllers and services.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub name: String,
    /// Stored preference; unrecognised stored values read back as `Theme::System`.
    pub theme: Theme,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            name: entity.name,
            theme: Theme::from_stored(&entity.theme),
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            email: self.email,
            theme: self.theme,
        }
    }
}

/// Parameters for changing a user's theme preference.
#[derive(Debug, Clone)]
pub struct UpdateThemeParam {
    pub user_id: i32,
    pub theme: Theme,
}
