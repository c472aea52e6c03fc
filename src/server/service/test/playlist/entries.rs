use super::*;

/// Tests appending the same track twice.
///
/// Expected: two entries at positions 0 and 1 pointing at the same track
#[tokio::test]
async fn appends_duplicate_tracks() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_playlist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = as_user(factory::create_user(db).await?);
    let playlist = factory::create_playlist(db, &owner.id).await?;
    let album = factory::create_album(db).await?;
    let track = factory::create_track(db, &album.id).await?;

    let service = PlaylistService::new(db);
    service.add_track(&owner, &playlist.id, &track.id).await?;
    let result = service.add_track(&owner, &playlist.id, &track.id).await?;

    let positions: Vec<(String, i32)> = result
        .entries
        .into_iter()
        .map(|entry| (entry.track_id, entry.position))
        .collect();
    assert_eq!(
        positions,
        vec![(track.id.clone(), 0), (track.id.clone(), 1)]
    );

    Ok(())
}

/// Tests adding a track that does not exist.
///
/// Expected: Err(NotFound), playlist unchanged
#[tokio::test]
async fn rejects_missing_track() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_playlist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = as_user(factory::create_user(db).await?);
    let playlist = factory::create_playlist(db, &owner.id).await?;

    let service = PlaylistService::new(db);
    let result = service.add_track(&owner, &playlist.id, "missing").await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert!(service.get_by_id(&playlist.id).await?.entries.is_empty());

    Ok(())
}

/// Tests removing an entry through a playlist it does not belong to.
///
/// Expected: Err(NotFound), entry kept
#[tokio::test]
async fn rejects_entry_of_other_playlist() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_playlist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, playlist, entries) =
        factory::helpers::create_playlist_with_entries(db, 2).await?;
    let owner = as_user(owner);
    let other = factory::create_playlist(db, &owner.id).await?;

    let service = PlaylistService::new(db);
    let result = service
        .remove_entry(&owner, &other.id, &entries[0].id)
        .await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    service
        .remove_entry(&owner, &playlist.id, &entries[0].id)
        .await?;
    let remaining: Vec<(String, i32)> = service
        .get_by_id(&playlist.id)
        .await?
        .entries
        .into_iter()
        .map(|entry| (entry.id, entry.position))
        .collect();
    assert_eq!(remaining, vec![(entries[1].id.clone(), 1)]);

    Ok(())
}
