use super::*;

/// Tests inserting the first track of an album at its next position.
///
/// Verifies that an empty album starts numbering at position 0 and that the
/// metadata is stored as given.
///
/// Expected: Ok with track at position 0
#[tokio::test]
async fn first_track_goes_to_zero() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let album = factory::create_album(db).await?;
    let repo = TrackRepository::new(db);

    let position = repo.next_position(&album.id).await?.unwrap();
    let track = repo
        .create_at(
            CreateTrackParam {
                album_id: album.id.clone(),
                file_key: format!("{}/01 Intro.flac", album.name),
                metadata: metadata("Intro"),
            },
            position,
        )
        .await?;

    assert_eq!(track.position, 0);
    assert_eq!(track.title, "Intro");
    assert_eq!(track.codec.as_deref(), Some("flac"));
    assert_eq!(track.sample_rate, Some(44100));

    Ok(())
}

/// Tests the next position after a gap left by deletions.
///
/// Verifies that appends use the highest existing position plus one rather than
/// the track count.
///
/// Expected: Ok(Some(8))
#[tokio::test]
async fn follows_highest_position() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let album = factory::create_album(db).await?;
    factory::create_track_at(db, &album.id, 0).await?;
    factory::create_track_at(db, &album.id, 7).await?;

    let position = TrackRepository::new(db).next_position(&album.id).await?;

    assert_eq!(position, Some(8));

    Ok(())
}

/// Tests that positions are counted per album.
///
/// Expected: Ok(Some(0)) for the second album
#[tokio::test]
async fn numbers_each_album_independently() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _) = factory::helpers::create_album_with_tracks(db, 3).await?;
    let other = factory::create_album(db).await?;

    let position = TrackRepository::new(db).next_position(&other.id).await?;

    assert_eq!(position, Some(0));

    Ok(())
}

/// Tests an album whose last track sits at the largest `i32`.
///
/// Expected: Ok(None) instead of an overflowing position
#[tokio::test]
async fn none_after_i32_max() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let album = factory::create_album(db).await?;
    factory::create_track_at(db, &album.id, i32::MAX).await?;

    let position = TrackRepository::new(db).next_position(&album.id).await?;

    assert_eq!(position, None);

    Ok(())
}
