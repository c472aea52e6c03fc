//! Comment factory for creating album comments.

use crate::factory::helpers::{new_uuid, next_id};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating comments on an album.
pub struct CommentFactory<'a> {
    db: &'a DatabaseConnection,
    album_id: String,
    author_id: String,
    body: String,
    created_at: chrono::DateTime<Utc>,
}

impl<'a> CommentFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, album_id: &str, author_id: &str) -> Self {
        Self {
            db,
            album_id: album_id.to_string(),
            author_id: author_id.to_string(),
            body: format!("Comment {}", next_id()),
            created_at: Utc::now(),
        }
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Overrides the creation timestamp, useful for ordering tests.
    pub fn created_at(mut self, created_at: chrono::DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the comment into the database.
    pub async fn build(self) -> Result<entity::comment::Model, DbErr> {
        entity::comment::ActiveModel {
            id: ActiveValue::Set(new_uuid()),
            album_id: ActiveValue::Set(self.album_id),
            author_id: ActiveValue::Set(self.author_id),
            body: ActiveValue::Set(self.body),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a comment with a default body.
pub async fn create_comment(
    db: &DatabaseConnection,
    album_id: &str,
    author_id: &str,
) -> Result<entity::comment::Model, DbErr> {
    CommentFactory::new(db, album_id, author_id).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        builder::TestBuilder,
        factory::{album::create_album, user::create_user},
    };

    #[tokio::test]
    async fn creates_comment_with_matching_timestamps() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user = create_user(db).await?;
        let album = create_album(db).await?;
        let comment = CommentFactory::new(db, &album.id, &user.id)
            .body("Great mix")
            .build()
            .await?;

        assert_eq!(comment.body, "Great mix");
        assert_eq!(comment.author_id, user.id);
        assert_eq!(comment.created_at, comment.updated_at);

        Ok(())
    }
}
