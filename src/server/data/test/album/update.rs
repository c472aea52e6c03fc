use super::*;

/// Tests updating the descriptive fields of an album.
///
/// Verifies that the folder name is kept while the other fields change.
///
/// Expected: Ok(Some) with new values and unchanged name
#[tokio::test]
async fn updates_fields_but_not_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let album = factory::create_album_named(db, "live-2021").await?;

    let updated = AlbumRepository::new(db)
        .update(UpdateAlbumParam {
            id: album.id.clone(),
            title: "Live at the Pier".to_string(),
            artist: Some("The Band".to_string()),
            year: Some(2021),
            description: None,
        })
        .await?
        .unwrap();

    assert_eq!(updated.name, "live-2021");
    assert_eq!(updated.title, "Live at the Pier");
    assert_eq!(updated.year, Some(2021));

    Ok(())
}

/// Tests updating an album that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_album() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = AlbumRepository::new(db)
        .update(UpdateAlbumParam {
            id: "missing".to_string(),
            title: "Nothing".to_string(),
            artist: None,
            year: None,
            description: None,
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
