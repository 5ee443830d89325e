use super::*;

/// Tests finding an existing user.
///
/// Expected: Ok(Some) with the stored fields and parsed theme
#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .name("Dana")
        .theme("dark")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_id(created.id).await?.unwrap();

    assert_eq!(user.id, created.id);
    assert_eq!(user.name, "Dana");
    assert_eq!(user.theme, Theme::Dark);

    Ok(())
}

/// Tests that an unknown stored theme reads back as the system preference.
///
/// Expected: Ok(Some) with Theme::System
#[tokio::test]
async fn unknown_stored_theme_reads_as_system() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .theme("sepia")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_id(created.id).await?.unwrap();

    assert_eq!(user.theme, Theme::System);

    Ok(())
}

/// Tests looking up a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.find_by_id(424242).await?;

    assert!(user.is_none());

    Ok(())
}
