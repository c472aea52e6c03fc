use super::*;

/// Tests editing a comment.
///
/// Expected: Ok(Some) with new body and bumped `updated_at`
#[tokio::test]
async fn replaces_body_and_bumps_timestamp() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let album = factory::create_album(db).await?;
    let comment = factory::create_comment(db, &album.id, &author.id).await?;

    let updated = CommentRepository::new(db)
        .update_body(&comment.id, "Edited".to_string())
        .await?
        .unwrap();

    assert_eq!(updated.body, "Edited");
    assert!(updated.updated_at >= comment.updated_at);

    Ok(())
}

/// Tests editing a missing comment.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_comment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CommentRepository::new(db)
        .update_body("missing", "Edited".to_string())
        .await?;

    assert!(result.is_none());

    Ok(())
}
