//! Gallery item factory.

use crate::factory::helpers::new_uuid;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating gallery items uploaded by a user.
///
/// Defaults to a small JPEG image stored under `gallery/{uuid}.jpg`.
pub struct GalleryItemFactory<'a> {
    db: &'a DatabaseConnection,
    uploader_id: String,
    kind: String,
    content_type: String,
    extension: String,
    size_bytes: i64,
    caption: Option<String>,
}

impl<'a> GalleryItemFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, uploader_id: &str) -> Self {
        Self {
            db,
            uploader_id: uploader_id.to_string(),
            kind: "image".to_string(),
            content_type: "image/jpeg".to_string(),
            extension: "jpg".to_string(),
            size_bytes: 1024,
            caption: None,
        }
    }

    /// Switches the item to an MP4 video.
    pub fn video(mut self) -> Self {
        self.kind = "video".to_string();
        self.content_type = "video/mp4".to_string();
        self.extension = "mp4".to_string();
        self
    }

    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    /// Builds and inserts the gallery item into the database.
    pub async fn build(self) -> Result<entity::gallery_item::Model, DbErr> {
        let id = new_uuid();
        let file_key = format!("gallery/{}.{}", id, self.extension);

        entity::gallery_item::ActiveModel {
            id: ActiveValue::Set(id),
            uploader_id: ActiveValue::Set(self.uploader_id),
            kind: ActiveValue::Set(self.kind),
            file_key: ActiveValue::Set(file_key),
            content_type: ActiveValue::Set(self.content_type),
            size_bytes: ActiveValue::Set(self.size_bytes),
            caption: ActiveValue::Set(self.caption),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an image gallery item with default values.
pub async fn create_gallery_item(
    db: &DatabaseConnection,
    uploader_id: &str,
) -> Result<entity::gallery_item::Model, DbErr> {
    GalleryItemFactory::new(db, uploader_id).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{builder::TestBuilder, factory::user::create_user};
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_video_item_under_gallery_prefix() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(User)
            .with_table(GalleryItem)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let user = create_user(db).await?;
        let item = GalleryItemFactory::new(db, &user.id)
            .video()
            .caption("Soundcheck")
            .build()
            .await?;

        assert_eq!(item.kind, "video");
        assert!(item.file_key.starts_with("gallery/"));
        assert!(item.file_key.ends_with(".mp4"));
        assert_eq!(item.caption.as_deref(), Some("Soundcheck"));

        Ok(())
    }
}
