use super::*;

/// Tests creating a comment.
///
/// Verifies that the author's display name is joined in and both timestamps match.
///
/// Expected: Ok with author name set
#[tokio::test]
async fn creates_comment_with_author_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::UserFactory::new(db)
        .display_name("Bassist")
        .build()
        .await?;
    let album = factory::create_album(db).await?;

    let comment = CommentRepository::new(db)
        .create(CreateCommentParam {
            album_id: album.id.clone(),
            author_id: author.id.clone(),
            body: "Great take on track 3".to_string(),
        })
        .await?;

    assert_eq!(comment.author_name, "Bassist");
    assert_eq!(comment.created_at, comment.updated_at);

    Ok(())
}
