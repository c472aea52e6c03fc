use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

use crate::model::track::TrackDto;

/// Full album with its tracks ordered by position.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct AlbumDto {
    pub id: String,
    /// Storage folder name.
    pub name: String,
    pub title: String,
    pub artist: Option<String>,
    pub year: Option<i32>,
    /// Markdown description.
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub tracks: Vec<TrackDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct AlbumListItemDto {
    pub id: String,
    pub name: String,
    pub title: String,
    pub artist: Option<String>,
    pub year: Option<i32>,
    pub track_count: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct PaginatedAlbumsDto {
    pub albums: Vec<AlbumListItemDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct CreateAlbumDto {
    pub name: String,
    pub title: String,
    pub artist: Option<String>,
    pub year: Option<i32>,
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct UpdateAlbumDto {
    pub title: String,
    pub artist: Option<String>,
    pub year: Option<i32>,
    pub description: Option<String>,
}
