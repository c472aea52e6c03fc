use super::*;

/// Tests that entries are joined with their track and album titles.
///
/// Expected: Ok with entries in position order carrying track and album data
#[tokio::test]
async fn joins_track_and_album() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_playlist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let playlist = factory::create_playlist(db, &owner.id).await?;
    let album = factory::create_album_named(db, "Basement Tapes").await?;
    let track = factory::track::TrackFactory::new(db, &album.id)
        .title("Opener")
        .position(0)
        .build()
        .await?;
    factory::create_playlist_track(db, &playlist.id, &track.id, 3).await?;
    factory::create_playlist_track(db, &playlist.id, &track.id, 1).await?;

    let entries = PlaylistTrackRepository::new(db)
        .get_by_playlist(&playlist.id)
        .await?;

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].position, 1);
    assert_eq!(entries[1].position, 3);
    assert_eq!(entries[0].track_title, "Opener");
    assert_eq!(entries[0].album_title, "Basement Tapes");
    assert_eq!(entries[0].file_key, track.file_key);

    Ok(())
}
