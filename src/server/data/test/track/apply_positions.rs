use super::*;

/// Tests the album reorder example end to end at the repository level.
///
/// Verifies that `t1@0, t2@1, t3@2` reordered to `t3, t1, t2` is stored exactly,
/// passing through staging positions without tripping the unique index.
///
/// Expected: Ok with stored order t3, t1, t2
#[tokio::test]
async fn applies_full_permutation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let album = factory::create_album_named(db, "abbey-road").await?;
    let t1 = factory::create_track_at(db, &album.id, 0).await?;
    let t2 = factory::create_track_at(db, &album.id, 1).await?;
    let t3 = factory::create_track_at(db, &album.id, 2).await?;

    let txn = db.begin().await?;
    TrackRepository::new(&txn)
        .apply_positions(
            &album.id,
            &plan(
                &[(&t3.id, -3), (&t1.id, -1), (&t2.id, -2)],
                &[(&t3.id, 0), (&t1.id, 1), (&t2.id, 2)],
            ),
        )
        .await?;
    txn.commit().await?;

    let order: Vec<String> = TrackRepository::new(db)
        .get_by_album(&album.id)
        .await?
        .into_iter()
        .map(|track| track.id)
        .collect();
    assert_eq!(order, vec![t3.id, t1.id, t2.id]);

    Ok(())
}

/// Tests that writing targets without staging collides with the unique index.
///
/// Verifies the constraint the two-phase update exists for: moving t2 onto t1's
/// position directly fails.
///
/// Expected: Err from the unique index
#[tokio::test]
async fn direct_swap_violates_unique_index() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (album, tracks) = factory::helpers::create_album_with_tracks(db, 2).await?;

    let txn = db.begin().await?;
    let result = TrackRepository::new(&txn)
        .apply_positions(&album.id, &plan(&[], &[(&tracks[1].id, 0), (&tracks[0].id, 1)]))
        .await;
    txn.rollback().await?;

    assert!(result.is_err());

    Ok(())
}

/// Tests that a member of another album is never touched.
///
/// Verifies that naming a track of album B while reordering album A fails with
/// `RecordNotUpdated` and that rolling back leaves both albums as they were.
///
/// Expected: Err(DbErr::RecordNotUpdated) and unchanged positions
#[tokio::test]
async fn rejects_member_of_other_album() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (album_a, tracks_a) = factory::helpers::create_album_with_tracks(db, 2).await?;
    let (album_b, tracks_b) = factory::helpers::create_album_with_tracks(db, 2).await?;

    let txn = db.begin().await?;
    let result = TrackRepository::new(&txn)
        .apply_positions(
            &album_a.id,
            &plan(
                &[(&tracks_a[0].id, -1), (&tracks_b[0].id, -2)],
                &[(&tracks_a[0].id, 1), (&tracks_b[0].id, 0)],
            ),
        )
        .await;
    txn.rollback().await?;

    assert!(matches!(result, Err(DbErr::RecordNotUpdated)));

    let repo = TrackRepository::new(db);
    assert_eq!(
        repo.get_positions(&album_a.id).await?,
        vec![(tracks_a[0].id.clone(), 0), (tracks_a[1].id.clone(), 1)]
    );
    assert_eq!(
        repo.get_positions(&album_b.id).await?,
        vec![(tracks_b[0].id.clone(), 0), (tracks_b[1].id.clone(), 1)]
    );

    Ok(())
}

/// Tests that a failing update rolls back the staging phase.
///
/// Verifies that after a failure in the target phase no track is left at a
/// negative staging position.
///
/// Expected: Ok with original positions after rollback
#[tokio::test]
async fn rollback_discards_staged_positions() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (album, tracks) = factory::helpers::create_album_with_tracks(db, 3).await?;

    let txn = db.begin().await?;
    let result = TrackRepository::new(&txn)
        .apply_positions(
            &album.id,
            &plan(
                &[(&tracks[0].id, -1), (&tracks[1].id, -2)],
                // The second target collides with the first
                &[(&tracks[0].id, 5), (&tracks[1].id, 5)],
            ),
        )
        .await;
    txn.rollback().await?;

    assert!(result.is_err());

    let positions: Vec<i32> = TrackRepository::new(db)
        .get_positions(&album.id)
        .await?
        .into_iter()
        .map(|(_, position)| position)
        .collect();
    assert_eq!(positions, vec![0, 1, 2]);

    Ok(())
}
