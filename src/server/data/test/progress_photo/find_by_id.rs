use super::*;

/// Tests finding a photo attached to a weight entry.
///
/// Expected: Ok(Some) with owner and entry populated
#[tokio::test]
async fn finds_photo_with_entry() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, entry, created) = factory::helpers::create_photo_with_dependencies(db).await?;

    let repo = ProgressPhotoRepository::new(db);
    let photo = repo.find_by_id(created.id).await?.unwrap();

    assert_eq!(photo.user_id, user.id);
    assert_eq!(photo.weight_entry_id, Some(entry.id));
    assert_eq!(photo.file_path, created.file_path);

    Ok(())
}

/// Tests looking up a photo that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_photo() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProgressPhotoRepository::new(db);

    assert!(repo.find_by_id(77).await?.is_none());

    Ok(())
}
