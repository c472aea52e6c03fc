//! Comment data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::comment::{Comment, CreateCommentParam};

pub struct CommentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a comment with matching created and updated timestamps.
    pub async fn create(&self, param: CreateCommentParam) -> Result<Comment, DbErr> {
        let now = Utc::now();
        let entity = entity::comment::ActiveModel {
            id: ActiveValue::Set(uuid::Uuid::new_v4().to_string()),
            album_id: ActiveValue::Set(param.album_id),
            author_id: ActiveValue::Set(param.author_id.clone()),
            body: ActiveValue::Set(param.body),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        let author = entity::prelude::User::find_by_id(param.author_id)
            .one(self.db)
            .await?;

        Ok(Comment::from_entity(entity, author))
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Comment>, DbErr> {
        let row = entity::prelude::Comment::find_by_id(id.to_string())
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?;

        Ok(row.map(|(comment, author)| Comment::from_entity(comment, author)))
    }

    /// Gets the comments of an album, newest first.
    pub async fn get_by_album(&self, album_id: &str) -> Result<Vec<Comment>, DbErr> {
        let rows = entity::prelude::Comment::find()
            .filter(entity::comment::Column::AlbumId.eq(album_id))
            .order_by_desc(entity::comment::Column::CreatedAt)
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(comment, author)| Comment::from_entity(comment, author))
            .collect())
    }

    /// Replaces the body of a comment and bumps `updated_at`.
    ///
    /// # Returns
    /// - `Ok(Some(Comment))` - Updated comment
    /// - `Ok(None)` - No comment with that id
    pub async fn update_body(&self, id: &str, body: String) -> Result<Option<Comment>, DbErr> {
        let Some(comment) = entity::prelude::Comment::find_by_id(id.to_string())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::comment::ActiveModel = comment.into();
        active_model.body = ActiveValue::Set(body);
        active_model.updated_at = ActiveValue::Set(Utc::now());
        active_model.update(self.db).await?;

        self.find_by_id(id).await
    }

    pub async fn delete(&self, id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Comment::delete_by_id(id.to_string())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
