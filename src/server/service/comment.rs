//! Comment service for business logic.
//!
//! Any member may comment on an album. Only the author may edit a comment; the author
//! or an admin may delete it.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{album::AlbumRepository, comment::CommentRepository},
    error::AppError,
    model::{
        comment::{Comment, CreateCommentParam},
        user::User,
    },
};

/// Maximum comment length in characters.
const MAX_COMMENT_LENGTH: usize = 2000;

/// Trims a comment body and checks its length.
fn validate_body(body: &str) -> Result<String, AppError> {
    let body = body.trim();
    let length = body.chars().count();

    if length == 0 {
        return Err(AppError::BadRequest("Comment must not be empty".to_string()));
    }
    if length > MAX_COMMENT_LENGTH {
        return Err(AppError::BadRequest(format!(
            "Comment must be at most {} characters",
            MAX_COMMENT_LENGTH
        )));
    }

    Ok(body.to_string())
}

pub struct CommentService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> CommentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the comments of an album, newest first.
    ///
    /// # Returns
    /// - `Ok(Vec<Comment>)` - Comments, possibly empty
    /// - `Err(AppError::NotFound)` - No album with that id
    pub async fn get_by_album(&self, album_id: &str) -> Result<Vec<Comment>, AppError> {
        if AlbumRepository::new(self.db)
            .find_by_id(album_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Album not found".to_string()));
        }

        Ok(CommentRepository::new(self.db).get_by_album(album_id).await?)
    }

    /// Adds a comment to an album.
    ///
    /// # Returns
    /// - `Ok(Comment)` - Created comment
    /// - `Err(AppError::BadRequest)` - Body empty or longer than 2000 characters
    /// - `Err(AppError::NotFound)` - No album with that id
    pub async fn create(&self, param: CreateCommentParam) -> Result<Comment, AppError> {
        let body = validate_body(&param.body)?;

        if AlbumRepository::new(self.db)
            .find_by_id(&param.album_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Album not found".to_string()));
        }

        let comment = CommentRepository::new(self.db)
            .create(CreateCommentParam {
                album_id: param.album_id,
                author_id: param.author_id,
                body,
            })
            .await?;

        Ok(comment)
    }

    /// Replaces the body of a comment. Only the author may edit.
    ///
    /// # Returns
    /// - `Ok(Comment)` - Updated comment
    /// - `Err(AppError::BadRequest)` - Invalid body
    /// - `Err(AppError::NotFound)` - No comment with that id
    /// - `Err(AppError::Forbidden)` - `user` is not the author
    pub async fn update(&self, user: &User, id: &str, body: &str) -> Result<Comment, AppError> {
        let body = validate_body(body)?;
        let comment_repo = CommentRepository::new(self.db);

        let comment = comment_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Comment not found".to_string()))?;

        if comment.author_id != user.id {
            return Err(AppError::Forbidden(
                "Only the author can edit this comment".to_string(),
            ));
        }

        comment_repo
            .update_body(id, body)
            .await?
            .ok_or_else(|| AppError::NotFound("Comment not found".to_string()))
    }

    /// Deletes a comment. Allowed for the author and for admins.
    ///
    /// # Returns
    /// - `Ok(())` - Comment deleted
    /// - `Err(AppError::NotFound)` - No comment with that id
    /// - `Err(AppError::Forbidden)` - `user` is neither author nor admin
    pub async fn delete(&self, user: &User, id: &str) -> Result<(), AppError> {
        let comment_repo = CommentRepository::new(self.db);

        let comment = comment_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Comment not found".to_string()))?;

        if comment.author_id != user.id && !user.admin {
            return Err(AppError::Forbidden(
                "Only the author or an admin can delete this comment".to_string(),
            ));
        }

        comment_repo.delete(id).await?;

        Ok(())
    }
}
