use super::*;

/// Tests that tracks come back ordered by position, not insertion order.
///
/// Expected: Ok with tracks sorted by position
#[tokio::test]
async fn orders_tracks_by_position() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let album = factory::create_album(db).await?;
    let last = factory::create_track_at(db, &album.id, 9).await?;
    let first = factory::create_track_at(db, &album.id, 0).await?;
    let middle = factory::create_track_at(db, &album.id, 4).await?;

    let tracks = TrackRepository::new(db).get_by_album(&album.id).await?;

    let ids: Vec<&str> = tracks.iter().map(|track| track.id.as_str()).collect();
    assert_eq!(ids, vec![first.id.as_str(), middle.id.as_str(), last.id.as_str()]);

    Ok(())
}

/// Tests that tracks of other albums are excluded.
///
/// Expected: Ok with only the requested album's tracks
#[tokio::test]
async fn excludes_other_albums() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (album, _) = factory::helpers::create_album_with_tracks(db, 2).await?;
    factory::helpers::create_album_with_tracks(db, 3).await?;

    let tracks = TrackRepository::new(db).get_by_album(&album.id).await?;

    assert_eq!(tracks.len(), 2);
    assert!(tracks.iter().all(|track| track.album_id == album.id));

    Ok(())
}
