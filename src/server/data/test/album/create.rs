use super::*;

/// Tests creating an album.
///
/// Verifies that the album is stored with every field and can be found by its
/// folder name afterwards.
///
/// Expected: Ok with album retrievable by name
#[tokio::test]
async fn creates_album() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AlbumRepository::new(db);
    let album = repo
        .create(CreateAlbumParam {
            name: "garage-sessions".to_string(),
            title: "Garage Sessions".to_string(),
            artist: Some("The Band".to_string()),
            year: Some(2019),
            description: Some("Recorded in *one* weekend".to_string()),
        })
        .await?;

    let found = repo.find_by_name("garage-sessions").await?.unwrap();
    assert_eq!(found, album);
    assert_eq!(found.year, Some(2019));

    Ok(())
}

/// Tests that album names are unique.
///
/// Expected: Err on the second insert with the same name
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_album_named(db, "demos").await?;

    let result = AlbumRepository::new(db)
        .create(CreateAlbumParam {
            name: "demos".to_string(),
            title: "Other".to_string(),
            artist: None,
            year: None,
            description: None,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
