use super::*;

/// Tests reversing a playlist as its owner.
///
/// Expected: entries in reverse order at positions 0..3
#[tokio::test]
async fn reverses_entries() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_playlist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, playlist, entries) =
        factory::helpers::create_playlist_with_entries(db, 3).await?;
    let owner = as_user(owner);

    let service = PlaylistService::new(db);
    service
        .reorder(
            &owner,
            &playlist.id,
            entries
                .iter()
                .rev()
                .enumerate()
                .map(|(position, entry)| ReorderItem {
                    id: entry.id.clone(),
                    position: position as i32,
                })
                .collect(),
        )
        .await?;

    let ordered: Vec<String> = service
        .get_by_id(&playlist.id)
        .await?
        .entries
        .into_iter()
        .map(|entry| entry.id)
        .collect();
    let expected: Vec<String> = entries.iter().rev().map(|entry| entry.id.clone()).collect();
    assert_eq!(ordered, expected);

    Ok(())
}

/// Tests that two entries may not target the same position.
///
/// Expected: Err(BadRequest), order unchanged
#[tokio::test]
async fn rejects_duplicate_targets() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_playlist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, playlist, entries) =
        factory::helpers::create_playlist_with_entries(db, 2).await?;
    let owner = as_user(owner);

    let service = PlaylistService::new(db);
    let result = service
        .reorder(
            &owner,
            &playlist.id,
            vec![
                ReorderItem {
                    id: entries[0].id.clone(),
                    position: 5,
                },
                ReorderItem {
                    id: entries[1].id.clone(),
                    position: 5,
                },
            ],
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let positions: Vec<i32> = service
        .get_by_id(&playlist.id)
        .await?
        .entries
        .into_iter()
        .map(|entry| entry.position)
        .collect();
    assert_eq!(positions, vec![0, 1]);

    Ok(())
}

/// Tests appending to a playlist whose last entry was moved to the highest position.
///
/// Expected: Err(BadRequest) for a reorder to `i32::MAX`; after a reorder to
/// `MAX_POSITION` one more entry fits at `i32::MAX` and the next add is rejected
#[tokio::test]
async fn appends_stop_at_i32_max() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_playlist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, playlist, entries) =
        factory::helpers::create_playlist_with_entries(db, 2).await?;
    let owner = as_user(owner);
    let service = PlaylistService::new(db);

    let result = service
        .reorder(
            &owner,
            &playlist.id,
            vec![ReorderItem {
                id: entries[1].id.clone(),
                position: i32::MAX,
            }],
        )
        .await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    service
        .reorder(
            &owner,
            &playlist.id,
            vec![ReorderItem {
                id: entries[1].id.clone(),
                position: MAX_POSITION,
            }],
        )
        .await?;

    let updated = service
        .add_track(&owner, &playlist.id, &entries[0].track_id)
        .await?;
    let last = updated.entries.last().map(|entry| entry.position);
    assert_eq!(last, Some(i32::MAX));

    let result = service
        .add_track(&owner, &playlist.id, &entries[0].track_id)
        .await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(service.get_by_id(&playlist.id).await?.entries.len(), 3);

    Ok(())
}
