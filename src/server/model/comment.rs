//! Comment domain models.

use chrono::{DateTime, Utc};

use crate::model::comment::CommentDto;

/// Comment on an album, with the author's display name resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: String,
    pub album_id: String,
    pub author_id: String,
    pub author_name: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Comment {
    pub fn into_dto(self) -> CommentDto {
        CommentDto {
            id: self.id,
            album_id: self.album_id,
            author_id: self.author_id,
            author_name: self.author_name,
            body: self.body,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Converts a comment row, taking the display name from the joined author row.
    ///
    /// A missing author (only possible mid-deletion) yields an empty name.
    pub fn from_entity(
        entity: entity::comment::Model,
        author: Option<entity::user::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            album_id: entity.album_id,
            author_id: entity.author_id,
            author_name: author.map(|a| a.display_name).unwrap_or_default(),
            body: entity.body,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCommentParam {
    pub album_id: String,
    pub author_id: String,
    pub body: String,
}
