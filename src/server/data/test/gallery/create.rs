use super::*;

/// Tests recording an uploaded video.
///
/// Expected: Ok with kind stored as "video"
#[tokio::test]
async fn records_video_item() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let uploader = factory::create_user(db).await?;
    let id = uuid::Uuid::new_v4().to_string();

    let item = GalleryRepository::new(db)
        .create(CreateGalleryItemParam {
            id: id.clone(),
            uploader_id: uploader.id.clone(),
            kind: GalleryKind::Video,
            file_key: format!("gallery/{}.mp4", id),
            content_type: "video/mp4".to_string(),
            size_bytes: 1024,
            caption: Some("Soundcheck".to_string()),
        })
        .await?;

    assert_eq!(item.id, id);
    assert_eq!(item.kind, "video");
    assert_eq!(item.caption.as_deref(), Some("Soundcheck"));

    let found = GalleryRepository::new(db).find_by_id(&id).await?.unwrap();
    assert_eq!(found, item);

    Ok(())
}
