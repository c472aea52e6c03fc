use super::*;

/// Tests deleting every track of one album.
///
/// Expected: Ok with count of deleted rows and other albums untouched
#[tokio::test]
async fn deletes_only_that_album() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (album, _) = factory::helpers::create_album_with_tracks(db, 3).await?;
    let (other, _) = factory::helpers::create_album_with_tracks(db, 2).await?;

    let repo = TrackRepository::new(db);
    let deleted = repo.delete_by_album(&album.id).await?;

    assert_eq!(deleted, 3);
    assert!(repo.get_by_album(&album.id).await?.is_empty());
    assert_eq!(repo.get_by_album(&other.id).await?.len(), 2);

    Ok(())
}

/// Tests deleting a single track leaves a gap in the positions.
///
/// Expected: Ok with remaining positions 0 and 2
#[tokio::test]
async fn single_delete_leaves_gap() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (album, tracks) = factory::helpers::create_album_with_tracks(db, 3).await?;

    let repo = TrackRepository::new(db);
    assert!(repo.delete(&tracks[1].id).await?);
    assert!(!repo.delete(&tracks[1].id).await?);

    let positions: Vec<i32> = repo
        .get_positions(&album.id)
        .await?
        .into_iter()
        .map(|(_, position)| position)
        .collect();
    assert_eq!(positions, vec![0, 2]);

    Ok(())
}
