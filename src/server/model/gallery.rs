//! Gallery domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::gallery::{GalleryItemDto, PaginatedGalleryDto},
    server::util::pagination::total_pages,
};

/// Kind of media held by a gallery item, derived from its content type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryKind {
    Image,
    Video,
}

impl GalleryKind {
    /// Classifies a MIME type, returning `None` for anything but `image/*` and `video/*`.
    pub fn from_content_type(content_type: &str) -> Option<Self> {
        let top_level = content_type.split('/').next()?;
        match top_level.to_ascii_lowercase().as_str() {
            "image" => Some(Self::Image),
            "video" => Some(Self::Video),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GalleryItem {
    pub id: String,
    pub uploader_id: String,
    pub kind: String,
    pub file_key: String,
    pub content_type: String,
    pub size_bytes: i64,
    pub caption: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl GalleryItem {
    pub fn into_dto(self) -> GalleryItemDto {
        GalleryItemDto {
            id: self.id,
            uploader_id: self.uploader_id,
            kind: self.kind,
            file_key: self.file_key,
            content_type: self.content_type,
            size_bytes: self.size_bytes,
            caption: self.caption,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::gallery_item::Model) -> Self {
        Self {
            id: entity.id,
            uploader_id: entity.uploader_id,
            kind: entity.kind,
            file_key: entity.file_key,
            content_type: entity.content_type,
            size_bytes: entity.size_bytes,
            caption: entity.caption,
            created_at: entity.created_at,
        }
    }
}

/// One page of gallery items, newest first.
#[derive(Debug, Clone)]
pub struct PaginatedGalleryItems {
    pub items: Vec<GalleryItem>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
}

impl PaginatedGalleryItems {
    pub fn into_dto(self) -> PaginatedGalleryDto {
        PaginatedGalleryDto {
            items: self.items.into_iter().map(GalleryItem::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: total_pages(self.total, self.per_page),
        }
    }
}

/// Parameters for recording an uploaded gallery object.
///
/// The id is chosen before upload because it is part of the object key.
#[derive(Debug, Clone)]
pub struct CreateGalleryItemParam {
    pub id: String,
    pub uploader_id: String,
    pub kind: GalleryKind,
    pub file_key: String,
    pub content_type: String,
    pub size_bytes: i64,
    pub caption: Option<String>,
}
