use super::*;

/// Tests that anonymous sessions yield no current user.
///
/// Expected: Ok(None)
#[tokio::test]
async fn anonymous_session_has_no_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    assert!(AuthGuard::new(db, session).current().await?.is_none());

    Ok(())
}

/// Tests that a stale user ID is treated as anonymous rather than an error.
///
/// Expected: Ok(None)
#[tokio::test]
async fn stale_user_id_is_anonymous() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session).set_user_id(31337).await?;

    assert!(AuthGuard::new(db, session).current().await?.is_none());

    Ok(())
}

/// Tests that the logged-in user is returned.
///
/// Expected: Ok(Some(User))
#[tokio::test]
async fn returns_logged_in_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::create_user(db).await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let current = AuthGuard::new(db, session).current().await?;

    assert_eq!(current.map(|u| u.id), Some(user.id));

    Ok(())
}
