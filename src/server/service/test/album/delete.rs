use super::*;
use crate::server::data::playlist_track::PlaylistTrackRepository;

/// Tests that deleting an album removes tracks, playlist entries and storage objects.
///
/// Expected: album gone, playlist emptied, uploaded object deleted
#[tokio::test]
async fn removes_tracks_entries_and_objects() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_playlist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let storage = MemoryStore::new();

    let owner = factory::create_user(db).await?;
    let album = factory::create_album_named(db, "Demos").await?;
    let service = AlbumService::new(db, &storage);

    let track = service
        .upload_track(&album.id, upload("01 Intro.mp3", Some("audio/mpeg"), b"riff"), None)
        .await?;
    let playlist = factory::create_playlist(db, &owner.id).await?;
    factory::create_playlist_track(db, &playlist.id, &track.id, 0).await?;

    service.delete(&album.id).await?;

    assert!(matches!(
        service.get_by_id(&album.id).await,
        Err(AppError::NotFound(_))
    ));
    assert!(PlaylistTrackRepository::new(db)
        .get_by_playlist(&playlist.id)
        .await?
        .is_empty());
    assert!(!storage.contains("Demos/01 Intro.mp3"));

    Ok(())
}

/// Tests that a missing storage object does not fail the delete.
///
/// Expected: Ok(()) even though the track's object was never stored
#[tokio::test]
async fn tolerates_missing_objects() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_playlist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let storage = MemoryStore::new();

    let (album, _) = factory::helpers::create_album_with_tracks(db, 2).await?;

    AlbumService::new(db, &storage).delete(&album.id).await?;

    Ok(())
}

/// Tests deleting an album that does not exist.
///
/// Expected: Err(NotFound), storage untouched
#[tokio::test]
async fn fails_for_missing_album() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_playlist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let storage = MemoryStore::new();
    storage.put("Other/a.mp3", "audio/mpeg", &b"riff"[..]);

    let result = AlbumService::new(db, &storage).delete("missing").await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert!(storage.contains("Other/a.mp3"));

    Ok(())
}
