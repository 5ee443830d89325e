use super::*;

/// Tests storing a new preference for an existing user.
///
/// Expected: Ok(Theme::Dark) and the stored preference reads back as dark
#[tokio::test]
async fn stores_preference() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let service = SettingsService::new(db);
    let theme = service
        .update_theme(UpdateThemeParam {
            user_id: user.id,
            theme: Theme::Dark,
        })
        .await?;

    assert_eq!(theme, Theme::Dark);
    let stored = UserRepository::new(db).find_by_id(user.id).await?.unwrap();
    assert_eq!(stored.theme, Theme::Dark);

    Ok(())
}

/// Tests that system is stored as a preference and not resolved.
///
/// Expected: Raw column value is "system"
#[tokio::test]
async fn stores_system_token_verbatim() -> Result<(), AppError> {
    use sea_orm::EntityTrait;

    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db).theme("dark").build().await?;

    SettingsService::new(db)
        .update_theme(UpdateThemeParam {
            user_id: user.id,
            theme: Theme::System,
        })
        .await?;

    let row = entity::prelude::User::find_by_id(user.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(row.theme, "system");

    Ok(())
}

/// Tests updating the preference of a user that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_missing_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = SettingsService::new(db)
        .update_theme(UpdateThemeParam {
            user_id: 4242,
            theme: Theme::Light,
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
