use super::*;

/// Tests removing entries that point at deleted tracks across playlists.
///
/// Expected: Ok with only entries of the named tracks removed
#[tokio::test]
async fn removes_entries_for_tracks_in_every_playlist() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_playlist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let first = factory::create_playlist(db, &owner.id).await?;
    let second = factory::create_playlist(db, &owner.id).await?;
    let (_, tracks) = factory::helpers::create_album_with_tracks(db, 2).await?;

    factory::create_playlist_track(db, &first.id, &tracks[0].id, 0).await?;
    factory::create_playlist_track(db, &first.id, &tracks[1].id, 1).await?;
    factory::create_playlist_track(db, &second.id, &tracks[0].id, 0).await?;

    let repo = PlaylistTrackRepository::new(db);
    let deleted = repo.delete_by_tracks(vec![tracks[0].id.clone()]).await?;

    assert_eq!(deleted, 2);
    assert_eq!(repo.get_positions(&first.id).await?.len(), 1);
    assert!(repo.get_positions(&second.id).await?.is_empty());

    Ok(())
}

/// Tests that an empty id list is a no-op.
///
/// Expected: Ok(0)
#[tokio::test]
async fn empty_list_deletes_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_playlist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_playlist_with_entries(db, 2).await?;

    assert_eq!(
        PlaylistTrackRepository::new(db)
            .delete_by_tracks(Vec::new())
            .await?,
        0
    );

    Ok(())
}
