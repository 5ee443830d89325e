use super::*;
use chrono::{Duration, Utc};

/// Tests that recent entries are limited and ordered newest first.
///
/// Expected: Two newest entries of the requesting user only
#[tokio::test]
async fn returns_newest_entries_for_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;
    let now = Utc::now();

    for (days_ago, weight) in [(3, 82.0), (1, 81.0), (2, 81.5)] {
        factory::weight_entry::WeightEntryFactory::new(db, user.id)
            .weight(weight)
            .recorded_at(now - Duration::days(days_ago))
            .build()
            .await?;
    }
    factory::weight_entry::WeightEntryFactory::new(db, other.id)
        .weight(60.0)
        .recorded_at(now)
        .build()
        .await?;

    let entries = WeightService::new(db).recent_entries(user.id, 2).await?;

    let weights: Vec<f64> = entries.iter().map(|e| e.weight).collect();
    assert_eq!(weights, vec![81.0, 81.5]);
    assert!(entries.iter().all(|e| e.user_id == user.id));

    Ok(())
}
