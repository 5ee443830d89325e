//! Weight entry factory.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating weight entries.
///
/// # Example
///
/// ```rust,ignore
/// let entry = WeightEntryFactory::new(&db, user.id)
///     .weight(81.5)
///     .recorded_at(Utc::now() - Duration::days(1))
///     .build()
///     .await?;
/// ```
pub struct WeightEntryFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    weight: f64,
    note: Option<String>,
    recorded_at: DateTime<Utc>,
}

impl<'a> WeightEntryFactory<'a> {
    /// Creates a new factory for an entry owned by `user_id`.
    ///
    /// Defaults:
    /// - weight: `80.0`
    /// - note: `None`
    /// - recorded_at: now
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            weight: 80.0,
            note: None,
            recorded_at: Utc::now(),
        }
    }

    pub fn weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn recorded_at(mut self, recorded_at: DateTime<Utc>) -> Self {
        self.recorded_at = recorded_at;
        self
    }

    /// Builds and inserts the weight entry.
    ///
    /// # Returns
    /// - `Ok(entity::weight_entry::Model)` - Created entry
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::weight_entry::Model, DbErr> {
        entity::weight_entry::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            weight: ActiveValue::Set(self.weight),
            note: ActiveValue::Set(self.note),
            recorded_at: ActiveValue::Set(self.recorded_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a weight entry with default values for `user_id`.
pub async fn create_weight_entry(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::weight_entry::Model, DbErr> {
    WeightEntryFactory::new(db, user_id).build().await
}
