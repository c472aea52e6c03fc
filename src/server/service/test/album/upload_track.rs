use super::*;

/// Tests uploading a file without readable tags.
///
/// Expected: object stored under the album folder, title derived from the file name,
/// appended after the existing tracks
#[tokio::test]
async fn stores_object_and_appends_track() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let storage = MemoryStore::new();

    let album = factory::create_album_named(db, "Demos").await?;
    factory::create_track_at(db, &album.id, 0).await?;

    let track = AlbumService::new(db, &storage)
        .upload_track(
            &album.id,
            upload("02 - Second Take.mp3", Some("audio/mpeg"), b"not really audio"),
            None,
        )
        .await?;

    assert_eq!(track.file_key, "Demos/02 - Second Take.mp3");
    assert_eq!(track.title, "Second Take");
    assert_eq!(track.position, 1);
    assert_eq!(track.codec.as_deref(), Some("mp3"));
    assert!(storage.contains("Demos/02 - Second Take.mp3"));

    Ok(())
}

/// Tests that a provided title overrides the extracted one.
///
/// Expected: track title equals the provided title
#[tokio::test]
async fn uses_provided_title() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let storage = MemoryStore::new();

    let album = factory::create_album(db).await?;

    let track = AlbumService::new(db, &storage)
        .upload_track(
            &album.id,
            upload("take.flac", None, b"flac"),
            Some(" Final Mix ".to_string()),
        )
        .await?;

    assert_eq!(track.title, "Final Mix");
    assert_eq!(track.position, 0);

    Ok(())
}

/// Tests uploads that are not accepted as tracks.
///
/// Expected: Err(BadRequest) for non-audio and duplicate file names, only the first
/// upload stored
#[tokio::test]
async fn rejects_non_audio_and_duplicates() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let storage = MemoryStore::new();

    let album = factory::create_album_named(db, "Demos").await?;
    let service = AlbumService::new(db, &storage);

    let result = service
        .upload_track(&album.id, upload("cover.jpg", Some("image/jpeg"), b"jpg"), None)
        .await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    service
        .upload_track(&album.id, upload("song.mp3", None, b"one"), None)
        .await?;
    let result = service
        .upload_track(&album.id, upload("song.mp3", None, b"two"), None)
        .await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    assert_eq!(storage.keys(), vec!["Demos/song.mp3".to_string()]);

    Ok(())
}

/// Tests uploading into an album that does not exist.
///
/// Expected: Err(NotFound), nothing stored
#[tokio::test]
async fn fails_for_missing_album() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let storage = MemoryStore::new();

    let result = AlbumService::new(db, &storage)
        .upload_track("missing", upload("song.mp3", None, b"one"), None)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert!(storage.keys().is_empty());

    Ok(())
}
