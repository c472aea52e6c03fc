//! Gallery item data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryOrder,
};

use crate::server::model::gallery::{CreateGalleryItemParam, GalleryItem};

pub struct GalleryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GalleryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateGalleryItemParam) -> Result<GalleryItem, DbErr> {
        let entity = entity::gallery_item::ActiveModel {
            id: ActiveValue::Set(param.id),
            uploader_id: ActiveValue::Set(param.uploader_id),
            kind: ActiveValue::Set(param.kind.as_str().to_string()),
            file_key: ActiveValue::Set(param.file_key),
            content_type: ActiveValue::Set(param.content_type),
            size_bytes: ActiveValue::Set(param.size_bytes),
            caption: ActiveValue::Set(param.caption),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(GalleryItem::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<GalleryItem>, DbErr> {
        let entity = entity::prelude::GalleryItem::find_by_id(id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(GalleryItem::from_entity))
    }

    /// Gets a page of gallery items, newest first.
    ///
    /// # Returns
    /// - `Ok((items, total))` - Items on the page and the total item count
    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<GalleryItem>, u64), DbErr> {
        let paginator = entity::prelude::GalleryItem::find()
            .order_by_desc(entity::gallery_item::Column::CreatedAt)
            .order_by_desc(entity::gallery_item::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let items = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(GalleryItem::from_entity)
            .collect();

        Ok((items, total))
    }

    /// Replaces the caption of an item.
    ///
    /// # Returns
    /// - `Ok(Some(GalleryItem))` - Updated item
    /// - `Ok(None)` - No item with that id
    pub async fn update_caption(
        &self,
        id: &str,
        caption: Option<String>,
    ) -> Result<Option<GalleryItem>, DbErr> {
        let Some(item) = entity::prelude::GalleryItem::find_by_id(id.to_string())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::gallery_item::ActiveModel = item.into();
        active_model.caption = ActiveValue::Set(caption);
        let updated = active_model.update(self.db).await?;

        Ok(Some(GalleryItem::from_entity(updated)))
    }

    pub async fn delete(&self, id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::GalleryItem::delete_by_id(id.to_string())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
