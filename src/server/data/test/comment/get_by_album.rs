use super::*;
use chrono::{Duration, Utc};

/// Tests listing comments newest first.
///
/// Expected: Ok with comments ordered by descending creation time
#[tokio::test]
async fn lists_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let album = factory::create_album(db).await?;
    let other_album = factory::create_album(db).await?;

    let older = factory::comment::CommentFactory::new(db, &album.id, &author.id)
        .created_at(Utc::now() - Duration::hours(2))
        .build()
        .await?;
    let newer = factory::comment::CommentFactory::new(db, &album.id, &author.id)
        .created_at(Utc::now())
        .build()
        .await?;
    factory::create_comment(db, &other_album.id, &author.id).await?;

    let comments = CommentRepository::new(db).get_by_album(&album.id).await?;

    let ids: Vec<&str> = comments.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec![newer.id.as_str(), older.id.as_str()]);

    Ok(())
}
