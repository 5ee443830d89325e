use super::*;

/// Tests storing a new theme preference.
///
/// Expected: Ok(true) and the new token persisted
#[tokio::test]
async fn stores_theme_token() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    let updated = repo.update_theme(created.id, Theme::Light).await?;

    assert!(updated);
    let user = repo.find_by_id(created.id).await?.unwrap();
    assert_eq!(user.theme, Theme::Light);

    Ok(())
}

/// Tests that only the targeted user is updated.
///
/// Expected: Other users keep their preference
#[tokio::test]
async fn leaves_other_users_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let target = factory::user::create_user(db).await?;
    let other = factory::user::UserFactory::new(db)
        .theme("dark")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    repo.update_theme(target.id, Theme::Light).await?;

    let other = repo.find_by_id(other.id).await?.unwrap();
    assert_eq!(other.theme, Theme::Dark);

    Ok(())
}

/// Tests updating a user that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn reports_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let updated = repo.update_theme(999, Theme::Dark).await?;

    assert!(!updated);

    Ok(())
}
