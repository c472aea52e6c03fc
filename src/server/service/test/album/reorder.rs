use super::*;

/// Tests moving the last track to the front of an album.
///
/// Verifies the full two-phase update passes the unique `(album_id, position)` index.
///
/// Expected: titles ordered Track 3, Track 1, Track 2
#[tokio::test]
async fn moves_last_track_to_front() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let storage = MemoryStore::new();

    let (album, tracks) = factory::helpers::create_album_with_tracks(db, 3).await?;

    let service = AlbumService::new(db, &storage);
    service
        .reorder(
            &album.id,
            vec![
                item(&tracks[2].id, 0),
                item(&tracks[0].id, 1),
                item(&tracks[1].id, 2),
            ],
        )
        .await?;

    assert_eq!(
        titles_by_position(&service, &album.id).await?,
        vec![
            ("Track 3".to_string(), 0),
            ("Track 1".to_string(), 1),
            ("Track 2".to_string(), 2),
        ]
    );

    Ok(())
}

/// Tests swapping two tracks while leaving the third alone.
///
/// Expected: Track 2 at 0, Track 1 at 1, Track 3 unchanged at 2
#[tokio::test]
async fn swaps_subset_of_tracks() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let storage = MemoryStore::new();

    let (album, tracks) = factory::helpers::create_album_with_tracks(db, 3).await?;

    let service = AlbumService::new(db, &storage);
    service
        .reorder(
            &album.id,
            vec![item(&tracks[0].id, 1), item(&tracks[1].id, 0)],
        )
        .await?;

    assert_eq!(
        titles_by_position(&service, &album.id).await?,
        vec![
            ("Track 2".to_string(), 0),
            ("Track 1".to_string(), 1),
            ("Track 3".to_string(), 2),
        ]
    );

    Ok(())
}

/// Tests that a request colliding with an unnamed track writes nothing.
///
/// Expected: Err(BadRequest), positions unchanged
#[tokio::test]
async fn rejects_collision_without_writing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let storage = MemoryStore::new();

    let (album, tracks) = factory::helpers::create_album_with_tracks(db, 3).await?;

    let service = AlbumService::new(db, &storage);
    let before = titles_by_position(&service, &album.id).await?;

    let result = service
        .reorder(&album.id, vec![item(&tracks[0].id, 2)])
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(titles_by_position(&service, &album.id).await?, before);

    Ok(())
}

/// Tests that a track from another album is rejected.
///
/// Expected: Err(BadRequest), neither album changed
#[tokio::test]
async fn rejects_track_of_other_album() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let storage = MemoryStore::new();

    let (album, tracks) = factory::helpers::create_album_with_tracks(db, 2).await?;
    let (other, other_tracks) = factory::helpers::create_album_with_tracks(db, 2).await?;

    let service = AlbumService::new(db, &storage);
    let result = service
        .reorder(
            &album.id,
            vec![item(&tracks[0].id, 1), item(&other_tracks[0].id, 0)],
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(
        titles_by_position(&service, &other.id).await?,
        vec![("Track 1".to_string(), 0), ("Track 2".to_string(), 1)]
    );

    Ok(())
}

/// Tests that an empty request is accepted and changes nothing.
///
/// Expected: Ok(()), positions unchanged
#[tokio::test]
async fn empty_request_is_noop() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let storage = MemoryStore::new();

    let (album, _) = factory::helpers::create_album_with_tracks(db, 2).await?;

    let service = AlbumService::new(db, &storage);
    service.reorder(&album.id, Vec::new()).await?;

    assert_eq!(
        titles_by_position(&service, &album.id).await?,
        vec![("Track 1".to_string(), 0), ("Track 2".to_string(), 1)]
    );

    Ok(())
}

/// Tests reordering an album that does not exist.
///
/// Expected: Err(NotFound)
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
        .reorder("missing", vec![item("t1", 0)])
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Every ordering of `0..n`, built by inserting each index at every slot.
fn permutations(n: usize) -> Vec<Vec<usize>> {
    (0..n).fold(vec![Vec::new()], |orders, index| {
        orders
            .iter()
            .flat_map(|order| {
                (0..=order.len()).map(move |slot| {
                    let mut next = order.clone();
                    next.insert(slot, index);
                    next
                })
            })
            .collect()
    })
}

/// Tests every ordering of a four-track album, one after another on the same album.
///
/// Each reorder starts from the order the previous one left behind, so the staging
/// phase is exercised against every arrangement of the unique `(album_id, position)`
/// index.
///
/// Expected: after each of the 24 reorders the album lists the tracks in exactly the
/// requested order at positions 0..4
#[tokio::test]
async fn applies_every_permutation() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let storage = MemoryStore::new();

    let (album, tracks) = factory::helpers::create_album_with_tracks(db, 4).await?;
    let service = AlbumService::new(db, &storage);

    let orders = permutations(tracks.len());
    assert_eq!(orders.len(), 24);

    for order in orders {
        let request = order
            .iter()
            .enumerate()
            .map(|(position, &index)| item(&tracks[index].id, position as i32))
            .collect();

        service.reorder(&album.id, request).await?;

        let expected: Vec<(String, i32)> = order
            .iter()
            .enumerate()
            .map(|(position, &index)| (tracks[index].title.clone(), position as i32))
            .collect();
        assert_eq!(titles_by_position(&service, &album.id).await?, expected);
    }

    Ok(())
}

/// Tests the highest position a reorder accepts and what appending after it does.
///
/// Expected: Err(BadRequest) for `i32::MAX`; a reorder to `MAX_POSITION` succeeds, the
/// next upload lands on `i32::MAX`, and the one after that is rejected before anything
/// is stored
#[tokio::test]
async fn appends_stop_at_i32_max() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let storage = MemoryStore::new();

    let (album, tracks) = factory::helpers::create_album_with_tracks(db, 2).await?;
    let service = AlbumService::new(db, &storage);

    let result = service
        .reorder(&album.id, vec![item(&tracks[1].id, i32::MAX)])
        .await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    service
        .reorder(&album.id, vec![item(&tracks[1].id, MAX_POSITION)])
        .await?;

    let appended = service
        .upload_track(&album.id, upload("late.mp3", None, b"late"), None)
        .await?;
    assert_eq!(appended.position, i32::MAX);

    let result = service
        .upload_track(&album.id, upload("later.mp3", None, b"later"), None)
        .await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert!(!storage.contains(&format!("{}/later.mp3", album.name)));

    let positions: Vec<i32> = titles_by_position(&service, &album.id)
        .await?
        .into_iter()
        .map(|(_, position)| position)
        .collect();
    assert_eq!(positions, vec![0, MAX_POSITION, i32::MAX]);

    Ok(())
}
