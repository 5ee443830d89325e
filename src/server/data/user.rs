//! User data repository for database operations.
//!
//! Accounts are created by the authentication subsystem; this repository only reads
//! users and updates the preferences this application owns.

use crate::{model::theme::Theme, server::model::user::User};
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

/// Repository providing database operations for users.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a user by primary key.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Stores a new theme preference for a user.
    ///
    /// Only the preference token is written, never a resolved color scheme.
    ///
    /// # Arguments
    /// - `user_id` - ID of the user to update
    /// - `theme` - New preference
    ///
    /// # Returns
    /// - `Ok(true)` - Preference stored
    /// - `Ok(false)` - No user with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_theme(&self, user_id: i32, theme: Theme) -> Result<bool, DbErr> {
        let result = entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(user_id))
            .col_expr(
                entity::user::Column::Theme,
                sea_orm::sea_query::Expr::value(theme.as_str()),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
