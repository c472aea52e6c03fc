use super::*;
use crate::server::model::album::CreateAlbumParam;

fn param(name: &str, title: &str) -> CreateAlbumParam {
    CreateAlbumParam {
        name: name.to_string(),
        title: title.to_string(),
        artist: Some("  ".to_string()),
        year: Some(2024),
        description: None,
    }
}

/// Tests that a blank title falls back to the folder name.
///
/// Expected: title equals name, blank artist stored as None
#[tokio::test]
async fn defaults_title_to_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let storage = MemoryStore::new();

    let album = AlbumService::new(db, &storage)
        .create(param(" Rehearsals ", ""))
        .await?;

    assert_eq!(album.name, "Rehearsals");
    assert_eq!(album.title, "Rehearsals");
    assert_eq!(album.artist, None);
    assert_eq!(album.year, Some(2024));

    Ok(())
}

/// Tests names that cannot be used as storage folders.
///
/// Expected: Err(BadRequest) for empty, nested, reserved and duplicate names
#[tokio::test]
async fn rejects_invalid_names() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let storage = MemoryStore::new();

    factory::create_album_named(db, "Live").await?;

    let service = AlbumService::new(db, &storage);
    for name in ["", "a/b", "Gallery", "Live"] {
        let result = service.create(param(name, "Title")).await;
        assert!(
            matches!(result, Err(AppError::BadRequest(_))),
            "expected {:?} to be rejected",
            name
        );
    }

    Ok(())
}
