use super::*;

/// Tests paging through albums ordered by title with track counts.
///
/// Expected: Ok with titles in order, correct counts and total
#[tokio::test]
async fn pages_albums_by_title_with_counts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let charlie = factory::create_album_named(db, "charlie").await?;
    let alpha = factory::create_album_named(db, "alpha").await?;
    factory::create_album_named(db, "bravo").await?;
    factory::create_track_at(db, &alpha.id, 0).await?;
    factory::create_track_at(db, &alpha.id, 1).await?;
    factory::create_track_at(db, &charlie.id, 0).await?;

    let repo = AlbumRepository::new(db);

    let (first_page, total) = repo.get_paginated(0, 2).await?;
    assert_eq!(total, 3);
    let titles: Vec<&str> = first_page
        .iter()
        .map(|item| item.album.title.as_str())
        .collect();
    assert_eq!(titles, vec!["alpha", "bravo"]);
    assert_eq!(first_page[0].track_count, 2);
    assert_eq!(first_page[1].track_count, 0);

    let (second_page, _) = repo.get_paginated(1, 2).await?;
    assert_eq!(second_page.len(), 1);
    assert_eq!(second_page[0].album.id, charlie.id);
    assert_eq!(second_page[0].track_count, 1);

    Ok(())
}

/// Tests paging with no albums.
///
/// Expected: Ok with empty page and zero total
#[tokio::test]
async fn returns_empty_page() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (albums, total) = AlbumRepository::new(db).get_paginated(0, 10).await?;

    assert!(albums.is_empty());
    assert_eq!(total, 0);

    Ok(())
}
