use super::*;

/// Tests importing a new folder.
///
/// Verifies only direct audio children become tracks, ordered by key, with titles
/// derived from file names when tags are unreadable.
///
/// Expected: one album "Demos" with "First" at 0 and "Second" at 1
#[tokio::test]
async fn imports_new_folder() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_playlist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let storage = seeded_store();

    let report = SyncService::new(db, &storage).run().await?;

    assert_eq!(report.albums_added, 1);
    assert_eq!(report.tracks_added, 2);
    assert!(report.failures.is_empty());

    let album = AlbumRepository::new(db)
        .find_by_name("Demos")
        .await?
        .expect("album imported");
    assert_eq!(album.title, "Demos");

    let tracks: Vec<(String, String, i32)> = AlbumService::new(db, &storage)
        .get_by_id(&album.id)
        .await?
        .tracks
        .into_iter()
        .map(|track| (track.title, track.file_key, track.position))
        .collect();
    assert_eq!(
        tracks,
        vec![
            ("First".to_string(), "Demos/01 First.mp3".to_string(), 0),
            ("Second".to_string(), "Demos/02 Second.flac".to_string(), 1),
        ]
    );

    Ok(())
}

/// Tests that the gallery folder never becomes an album.
///
/// Expected: "Demos" is the only album
#[tokio::test]
async fn skips_gallery_folder() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_playlist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let storage = seeded_store();

    SyncService::new(db, &storage).run().await?;

    let names: Vec<String> = AlbumRepository::new(db)
        .get_all()
        .await?
        .into_iter()
        .map(|album| album.name)
        .collect();
    assert_eq!(names, vec!["Demos".to_string()]);

    Ok(())
}

/// Tests that a second run without storage changes does nothing.
///
/// Expected: empty report, track ids unchanged
#[tokio::test]
async fn second_run_is_noop() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_playlist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let storage = seeded_store();

    let service = SyncService::new(db, &storage);
    service.run().await?;

    let album = AlbumRepository::new(db)
        .find_by_name("Demos")
        .await?
        .expect("album imported");
    let albums = AlbumService::new(db, &storage);
    let before = albums.get_by_id(&album.id).await?.tracks;

    let report = service.run().await?;

    assert_eq!(report, SyncReport::default());
    assert_eq!(albums.get_by_id(&album.id).await?.tracks, before);

    Ok(())
}

/// Tests that existing albums are left alone even when new files appear.
///
/// Expected: no tracks added to the existing album
#[tokio::test]
async fn leaves_existing_albums_untouched() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_playlist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let storage = MemoryStore::new();
    storage.put("Live/01 Opener.mp3", "audio/mpeg", &b"mp3"[..]);

    let album = factory::create_album_named(db, "Live").await?;

    let report = SyncService::new(db, &storage).run().await?;

    assert_eq!(report, SyncReport::default());
    assert!(AlbumService::new(db, &storage)
        .get_by_id(&album.id)
        .await?
        .tracks
        .is_empty());

    Ok(())
}

/// Tests that folders without direct audio files are not imported.
///
/// Verifies a folder holding only artwork and a folder whose audio sits in a
/// subfolder both stay without an album.
///
/// Expected: no albums, empty report
#[tokio::test]
async fn skips_folder_without_audio() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_playlist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let storage = MemoryStore::new();
    storage.put("Artwork/cover.jpg", "image/jpeg", &b"jpg"[..]);
    storage.put("Nested/extra/01 Deep.mp3", "audio/mpeg", &b"mp3"[..]);

    let report = SyncService::new(db, &storage).run().await?;

    assert_eq!(report, SyncReport::default());
    assert!(AlbumRepository::new(db).get_all().await?.is_empty());

    Ok(())
}
