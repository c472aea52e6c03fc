use super::*;

/// Tests creating and updating a playlist.
///
/// Expected: Ok with stored fields and updated name
#[tokio::test]
async fn creates_and_renames_playlist() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_playlist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let repo = PlaylistRepository::new(db);

    let playlist = repo
        .create(CreatePlaylistParam {
            owner_id: owner.id.clone(),
            name: "Setlist".to_string(),
            description: None,
        })
        .await?;
    assert_eq!(playlist.owner_id, owner.id);

    let renamed = repo
        .update(UpdatePlaylistParam {
            id: playlist.id.clone(),
            name: "Setlist (summer)".to_string(),
            description: Some("Outdoor shows".to_string()),
        })
        .await?
        .unwrap();

    assert_eq!(renamed.name, "Setlist (summer)");
    assert_eq!(renamed.description.as_deref(), Some("Outdoor shows"));

    Ok(())
}

/// Tests deleting a playlist that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn delete_reports_missing_playlist() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_playlist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!PlaylistRepository::new(db).delete("missing").await?);

    Ok(())
}
