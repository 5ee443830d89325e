//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

use crate::factory::{progress_photo::ProgressPhotoFactory, user, weight_entry};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user, one weight entry for them, and a photo attached to that entry.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, weight_entry, progress_photo))` - All created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_photo_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::weight_entry::Model,
        entity::progress_photo::Model,
    ),
    DbErr,
> {
    let user = user::create_user(db).await?;
    let entry = weight_entry::create_weight_entry(db, user.id).await?;
    let photo = ProgressPhotoFactory::new(db, user.id)
        .weight_entry_id(entry.id)
        .build()
        .await?;

    Ok((user, entry, photo))
}
