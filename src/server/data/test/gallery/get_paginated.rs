use super::*;

/// Tests paging through gallery items.
///
/// Expected: Ok with page sizes respected and total count
#[tokio::test]
async fn pages_items() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let uploader = factory::create_user(db).await?;
    for _ in 0..3 {
        factory::create_gallery_item(db, &uploader.id).await?;
    }

    let repo = GalleryRepository::new(db);
    let (first, total) = repo.get_paginated(0, 2).await?;
    let (second, _) = repo.get_paginated(1, 2).await?;

    assert_eq!(total, 3);
    assert_eq!(first.len(), 2);
    assert_eq!(second.len(), 1);

    Ok(())
}

/// Tests clearing a caption.
///
/// Expected: Ok(Some) with caption removed
#[tokio::test]
async fn clears_caption() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let uploader = factory::create_user(db).await?;
    let item = factory::gallery_item::GalleryItemFactory::new(db, &uploader.id)
        .caption("Old caption")
        .build()
        .await?;

    let updated = GalleryRepository::new(db)
        .update_caption(&item.id, None)
        .await?
        .unwrap();

    assert!(updated.caption.is_none());

    Ok(())
}
