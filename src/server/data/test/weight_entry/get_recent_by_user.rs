use super::*;

/// Tests that entries come back newest first and limited.
///
/// Expected: The two most recent entries in descending order
#[tokio::test]
async fn returns_newest_entries_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let now = Utc::now();
    for (days_ago, weight) in [(3, 84.0), (1, 82.5), (2, 83.1)] {
        factory::weight_entry::WeightEntryFactory::new(db, user.id)
            .weight(weight)
            .recorded_at(now - Duration::days(days_ago))
            .build()
            .await?;
    }

    let repo = WeightEntryRepository::new(db);
    let entries = repo.get_recent_by_user(user.id, 2).await?;

    let weights: Vec<f64> = entries.iter().map(|e| e.weight).collect();
    assert_eq!(weights, vec![82.5, 83.1]);

    Ok(())
}

/// Tests that other users' entries are excluded.
///
/// Expected: Only the requesting user's entry
#[tokio::test]
async fn excludes_other_users() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;
    factory::weight_entry::create_weight_entry(db, user.id).await?;
    factory::weight_entry::create_weight_entry(db, other.id).await?;

    let repo = WeightEntryRepository::new(db);
    let entries = repo.get_recent_by_user(user.id, 10).await?;

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].user_id, user.id);

    Ok(())
}
