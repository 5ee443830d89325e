use super::*;

/// Tests that the owner can delete their photo and its file is removed.
///
/// Expected: Ok(()), row gone, file gone
#[tokio::test]
async fn owner_deletes_photo_and_file() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let upload_dir = tempfile::tempdir()?;

    let user = factory::user::create_user(db).await?;
    let photo = factory::progress_photo::ProgressPhotoFactory::new(db, user.id)
        .file_path("photos/front.jpg")
        .build()
        .await?;

    let file = upload_dir.path().join("photos/front.jpg");
    tokio::fs::create_dir_all(file.parent().unwrap()).await?;
    tokio::fs::write(&file, b"jpeg").await?;

    WeightService::new(db)
        .delete_photo(
            DeletePhotoParam {
                photo_id: photo.id,
                user_id: user.id,
            },
            upload_dir.path(),
        )
        .await?;

    assert!(ProgressPhotoRepository::new(db)
        .find_by_id(photo.id)
        .await?
        .is_none());
    assert!(!file.exists());

    Ok(())
}

/// Tests that a missing file does not fail the deletion.
///
/// Expected: Ok(()) and the row gone
#[tokio::test]
async fn missing_file_is_tolerated() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let upload_dir = tempfile::tempdir()?;

    let (user, _entry, photo) = factory::helpers::create_photo_with_dependencies(db).await?;

    WeightService::new(db)
        .delete_photo(
            DeletePhotoParam {
                photo_id: photo.id,
                user_id: user.id,
            },
            upload_dir.path(),
        )
        .await?;

    assert!(ProgressPhotoRepository::new(db)
        .find_by_id(photo.id)
        .await?
        .is_none());

    Ok(())
}

/// Tests that another user's photo cannot be deleted.
///
/// Expected: Err(AuthError::AccessDenied) and the row kept
#[tokio::test]
async fn denies_non_owner() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let upload_dir = tempfile::tempdir()?;

    let owner = factory::user::create_user(db).await?;
    let intruder = factory::user::create_user(db).await?;
    let photo = factory::progress_photo::create_photo(db, owner.id).await?;

    let result = WeightService::new(db)
        .delete_photo(
            DeletePhotoParam {
                photo_id: photo.id,
                user_id: intruder.id,
            },
            upload_dir.path(),
        )
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(user_id, _))) => {
            assert_eq!(user_id, intruder.id)
        }
        other => panic!("Expected AccessDenied, got {:?}", other),
    }
    assert!(ProgressPhotoRepository::new(db)
        .find_by_id(photo.id)
        .await?
        .is_some());

    Ok(())
}

/// Tests deleting a photo that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_missing_photo() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let upload_dir = tempfile::tempdir()?;

    let user = factory::user::create_user(db).await?;

    let result = WeightService::new(db)
        .delete_photo(
            DeletePhotoParam {
                photo_id: 999,
                user_id: user.id,
            },
            upload_dir.path(),
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
