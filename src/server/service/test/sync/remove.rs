use super::*;

/// Tests that an album whose folder disappeared is removed with its tracks.
///
/// Expected: album and both tracks removed, reported once
#[tokio::test]
async fn removes_album_without_folder() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_playlist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let storage = seeded_store();

    let service = SyncService::new(db, &storage);
    service.run().await?;

    storage.remove_prefix("Demos/");
    let report = service.run().await?;

    assert_eq!(report.albums_removed, 1);
    assert_eq!(report.tracks_removed, 2);
    assert!(AlbumRepository::new(db)
        .find_by_name("Demos")
        .await?
        .is_none());

    Ok(())
}

/// Tests that playlist entries of removed tracks are deleted too.
///
/// Expected: playlist survives with no entries
#[tokio::test]
async fn removes_playlist_entries_of_removed_tracks() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_playlist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let storage = MemoryStore::new();

    let owner = factory::create_user(db).await?;
    let (_, tracks) = factory::helpers::create_album_with_tracks(db, 2).await?;
    let playlist = factory::create_playlist(db, &owner.id).await?;
    factory::create_playlist_track(db, &playlist.id, &tracks[0].id, 0).await?;

    let report = SyncService::new(db, &storage).run().await?;

    assert_eq!(report.albums_removed, 1);
    let entries = crate::server::data::playlist_track::PlaylistTrackRepository::new(db)
        .get_by_playlist(&playlist.id)
        .await?;
    assert!(entries.is_empty());

    Ok(())
}

/// Tests that albums created without tracks survive a sync.
///
/// Expected: empty album kept, nothing reported
#[tokio::test]
async fn keeps_empty_albums() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_playlist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let storage = MemoryStore::new();

    let album = factory::create_album_named(db, "Upcoming").await?;

    let report = SyncService::new(db, &storage).run().await?;

    assert_eq!(report, SyncReport::default());
    assert!(AlbumRepository::new(db)
        .find_by_id(&album.id)
        .await?
        .is_some());

    Ok(())
}
