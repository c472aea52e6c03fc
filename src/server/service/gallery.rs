//! Gallery service for business logic.
//!
//! Members upload photos and videos into the `gallery/` storage folder. The content type
//! is sniffed from the file's magic bytes with `infer`, falling back to the type the
//! client declared. Anything that is not an image or a video is rejected.

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::gallery::GalleryRepository,
    error::AppError,
    model::{
        gallery::{CreateGalleryItemParam, GalleryItem, GalleryKind, PaginatedGalleryItems},
        upload::UploadedFile,
        user::User,
    },
    service::album::non_blank,
    storage::{ObjectStore, GALLERY_FOLDER},
    util::audio::extension,
};

/// Largest accepted gallery upload, 200 MiB.
pub const MAX_GALLERY_UPLOAD_BYTES: usize = 200 * 1024 * 1024;

/// Determines the content type and file extension of an upload.
///
/// # Returns
/// - `Some((content_type, extension))` - Sniffed or declared type
/// - `None` - Neither sniffing nor the declared type produced a usable type
fn detect_type(file: &UploadedFile) -> Option<(String, String)> {
    if let Some(kind) = infer::get(&file.data) {
        return Some((kind.mime_type().to_string(), kind.extension().to_string()));
    }

    let content_type = file.content_type.clone()?;
    let ext = extension(&file.file_name)
        .or_else(|| {
            content_type
                .split_once('/')
                .map(|(_, subtype)| subtype.to_ascii_lowercase())
        })
        .unwrap_or_else(|| "bin".to_string());

    Some((content_type, ext))
}

fn can_modify(user: &User, item: &GalleryItem) -> Result<(), AppError> {
    if item.uploader_id != user.id && !user.admin {
        return Err(AppError::Forbidden(
            "Only the uploader or an admin can change this item".to_string(),
        ));
    }
    Ok(())
}

pub struct GalleryService<'a> {
    pub db: &'a DatabaseConnection,
    pub storage: &'a dyn ObjectStore,
}

impl<'a> GalleryService<'a> {
    pub fn new(db: &'a DatabaseConnection, storage: &'a dyn ObjectStore) -> Self {
        Self { db, storage }
    }

    /// Gets a page of gallery items, newest first.
    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedGalleryItems, AppError> {
        let (items, total) = GalleryRepository::new(self.db)
            .get_paginated(page, per_page)
            .await?;

        Ok(PaginatedGalleryItems {
            items,
            total,
            page,
            per_page,
        })
    }

    /// Stores an uploaded photo or video and records it.
    ///
    /// The object key is `gallery/{id}.{ext}`. When the row cannot be inserted the
    /// uploaded object is removed again.
    ///
    /// # Returns
    /// - `Ok(GalleryItem)` - Created item
    /// - `Err(AppError::BadRequest)` - Empty, larger than 200 MiB, or not an image or video
    pub async fn upload(
        &self,
        user: &User,
        file: UploadedFile,
        caption: Option<String>,
    ) -> Result<GalleryItem, AppError> {
        if file.data.is_empty() {
            return Err(AppError::BadRequest("Uploaded file is empty".to_string()));
        }
        if file.data.len() > MAX_GALLERY_UPLOAD_BYTES {
            return Err(AppError::BadRequest(
                "Gallery uploads are limited to 200 MiB".to_string(),
            ));
        }

        let (content_type, ext) = detect_type(&file)
            .ok_or_else(|| AppError::BadRequest("Unrecognized file type".to_string()))?;
        let kind = GalleryKind::from_content_type(&content_type).ok_or_else(|| {
            AppError::BadRequest("Only images and videos can be uploaded".to_string())
        })?;

        let id = uuid::Uuid::new_v4().to_string();
        let key = format!("{}/{}.{}", GALLERY_FOLDER, id, ext);
        let size_bytes = file.data.len() as i64;

        self.storage.upload(&key, &content_type, file.data).await?;

        let result = GalleryRepository::new(self.db)
            .create(CreateGalleryItemParam {
                id,
                uploader_id: user.id.clone(),
                kind,
                file_key: key.clone(),
                content_type,
                size_bytes,
                caption: non_blank(caption),
            })
            .await;

        match result {
            Ok(item) => Ok(item),
            Err(e) => {
                if let Err(storage_err) = self.storage.delete(&key).await {
                    tracing::warn!("Failed to remove orphaned upload {}: {}", key, storage_err);
                }
                Err(e.into())
            }
        }
    }

    /// Replaces the caption of an item. Allowed for the uploader and for admins.
    ///
    /// # Returns
    /// - `Ok(GalleryItem)` - Updated item
    /// - `Err(AppError::NotFound)` - No item with that id
    /// - `Err(AppError::Forbidden)` - `user` is neither uploader nor admin
    pub async fn update_caption(
        &self,
        user: &User,
        id: &str,
        caption: Option<String>,
    ) -> Result<GalleryItem, AppError> {
        let gallery_repo = GalleryRepository::new(self.db);

        let item = gallery_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Gallery item not found".to_string()))?;
        can_modify(user, &item)?;

        gallery_repo
            .update_caption(id, non_blank(caption))
            .await?
            .ok_or_else(|| AppError::NotFound("Gallery item not found".to_string()))
    }

    /// Deletes an item and its storage object. Allowed for the uploader and for admins.
    ///
    /// # Returns
    /// - `Ok(())` - Item deleted
    /// - `Err(AppError::NotFound)` - No item with that id
    /// - `Err(AppError::Forbidden)` - `user` is neither uploader nor admin
    pub async fn delete(&self, user: &User, id: &str) -> Result<(), AppError> {
        let gallery_repo = GalleryRepository::new(self.db);

        let item = gallery_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Gallery item not found".to_string()))?;
        can_modify(user, &item)?;

        gallery_repo.delete(id).await?;

        if let Err(e) = self.storage.delete(&item.file_key).await {
            tracing::warn!("Failed to delete storage object {}: {}", item.file_key, e);
        }

        Ok(())
    }
}
