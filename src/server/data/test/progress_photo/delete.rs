use super::*;

/// Tests deleting an existing photo.
///
/// Expected: Ok(true) and the row gone
#[tokio::test]
async fn deletes_existing_photo() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let photo = factory::progress_photo::create_photo(db, user.id).await?;

    let repo = ProgressPhotoRepository::new(db);
    let deleted = repo.delete(photo.id).await?;

    assert!(deleted);
    assert!(repo.find_by_id(photo.id).await?.is_none());

    Ok(())
}

/// Tests that deleting one photo keeps the user's other photos.
///
/// Expected: Sibling photo still present
#[tokio::test]
async fn keeps_sibling_photos() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let first = factory::progress_photo::create_photo(db, user.id).await?;
    let second = factory::progress_photo::create_photo(db, user.id).await?;

    let repo = ProgressPhotoRepository::new(db);
    repo.delete(first.id).await?;

    assert!(repo.find_by_id(second.id).await?.is_some());

    Ok(())
}

/// Tests deleting a photo that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn reports_missing_photo() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProgressPhotoRepository::new(db);

    assert!(!repo.delete(12345).await?);

    Ok(())
}
