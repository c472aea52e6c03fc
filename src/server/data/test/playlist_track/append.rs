use super::*;

/// Tests that appends go to the end and the same track may appear twice.
///
/// Expected: Ok with positions 0 and 1 for the same track
#[tokio::test]
async fn appends_duplicates_in_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_playlist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let playlist = factory::create_playlist(db, &owner.id).await?;
    let album = factory::create_album(db).await?;
    let track = factory::create_track_at(db, &album.id, 0).await?;

    let repo = PlaylistTrackRepository::new(db);
    let first = repo.append(&playlist.id, &track.id).await?.unwrap();
    let second = repo.append(&playlist.id, &track.id).await?.unwrap();

    assert_eq!(
        repo.get_positions(&playlist.id).await?,
        vec![(first, 0), (second, 1)]
    );

    Ok(())
}

/// Tests appending behind an entry at the largest `i32`.
///
/// Expected: Ok(None), no entry inserted
#[tokio::test]
async fn refuses_to_append_after_i32_max() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_playlist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let playlist = factory::create_playlist(db, &owner.id).await?;
    let album = factory::create_album(db).await?;
    let track = factory::create_track_at(db, &album.id, 0).await?;
    let last = factory::create_playlist_track(db, &playlist.id, &track.id, i32::MAX).await?;

    let repo = PlaylistTrackRepository::new(db);
    let appended = repo.append(&playlist.id, &track.id).await?;

    assert_eq!(appended, None);
    assert_eq!(
        repo.get_positions(&playlist.id).await?,
        vec![(last.id, i32::MAX)]
    );

    Ok(())
}
