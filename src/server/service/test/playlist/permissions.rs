use super::*;

fn rename(id: &str) -> UpdatePlaylistParam {
    UpdatePlaylistParam {
        id: id.to_string(),
        name: "Renamed".to_string(),
        description: None,
    }
}

/// Tests that members cannot change another member's playlist.
///
/// Expected: Err(Forbidden) for rename, delete, add and reorder
#[tokio::test]
async fn rejects_other_member() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_playlist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let other = as_user(factory::create_user(db).await?);
    let playlist = factory::create_playlist(db, &owner.id).await?;
    let album = factory::create_album(db).await?;
    let track = factory::create_track(db, &album.id).await?;

    let service = PlaylistService::new(db);

    assert!(matches!(
        service.update(&other, rename(&playlist.id)).await,
        Err(AppError::Forbidden(_))
    ));
    assert!(matches!(
        service.add_track(&other, &playlist.id, &track.id).await,
        Err(AppError::Forbidden(_))
    ));
    assert!(matches!(
        service.reorder(&other, &playlist.id, Vec::new()).await,
        Err(AppError::Forbidden(_))
    ));
    assert!(matches!(
        service.delete(&other, &playlist.id).await,
        Err(AppError::Forbidden(_))
    ));
    assert_eq!(service.get_by_id(&playlist.id).await?.playlist.name, playlist.name);

    Ok(())
}

/// Tests that admins can change any playlist.
///
/// Expected: rename succeeds, delete removes the playlist
#[tokio::test]
async fn allows_admin() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_playlist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let admin = as_user(factory::create_admin(db).await?);
    let playlist = factory::create_playlist(db, &owner.id).await?;

    let service = PlaylistService::new(db);

    let renamed = service.update(&admin, rename(&playlist.id)).await?;
    assert_eq!(renamed.name, "Renamed");

    service.delete(&admin, &playlist.id).await?;
    assert!(matches!(
        service.get_by_id(&playlist.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests that an empty name is rejected before any lookup.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_blank_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_playlist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = as_user(factory::create_user(db).await?);
    let playlist = factory::create_playlist(db, &owner.id).await?;

    let result = PlaylistService::new(db)
        .update(
            &owner,
            UpdatePlaylistParam {
                id: playlist.id,
                name: "   ".to_string(),
                description: None,
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
