use super::*;

/// Tests reversing a playlist through staging positions.
///
/// Expected: Ok with entries stored in reverse order
#[tokio::test]
async fn reverses_playlist() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_playlist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, playlist, entries) = factory::helpers::create_playlist_with_entries(db, 3).await?;

    let plan = PositionPlan {
        staging: entries
            .iter()
            .enumerate()
            .map(|(rank, entry)| (entry.id.clone(), -(rank as i32 + 1)))
            .collect(),
        targets: entries
            .iter()
            .enumerate()
            .map(|(rank, entry)| (entry.id.clone(), 2 - rank as i32))
            .collect(),
    };

    let txn = db.begin().await?;
    PlaylistTrackRepository::new(&txn)
        .apply_positions(&playlist.id, &plan)
        .await?;
    txn.commit().await?;

    let order: Vec<String> = PlaylistTrackRepository::new(db)
        .get_positions(&playlist.id)
        .await?
        .into_iter()
        .map(|(id, _)| id)
        .collect();
    let expected: Vec<String> = entries.iter().rev().map(|entry| entry.id.clone()).collect();
    assert_eq!(order, expected);

    Ok(())
}

/// Tests that an entry of another playlist is not updated.
///
/// Expected: Err(DbErr::RecordNotUpdated)
#[tokio::test]
async fn rejects_entry_of_other_playlist() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_playlist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, playlist, _) = factory::helpers::create_playlist_with_entries(db, 1).await?;
    let (_, _, foreign) = factory::helpers::create_playlist_with_entries(db, 1).await?;

    let plan = PositionPlan {
        staging: vec![(foreign[0].id.clone(), -1)],
        targets: vec![(foreign[0].id.clone(), 4)],
    };

    let txn = db.begin().await?;
    let result = PlaylistTrackRepository::new(&txn)
        .apply_positions(&playlist.id, &plan)
        .await;
    txn.rollback().await?;

    assert!(matches!(result, Err(DbErr::RecordNotUpdated)));

    Ok(())
}
