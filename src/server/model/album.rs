//! Album domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::album::{AlbumDto, AlbumListItemDto, PaginatedAlbumsDto},
    server::{
        model::track::{Track, TrackMetadata},
        util::pagination::total_pages,
    },
};

/// Album backed by one top-level storage folder.
#[derive(Debug, Clone, PartialEq)]
pub struct Album {
    pub id: String,
    /// Storage folder name, unique across albums.
    pub name: String,
    pub title: String,
    pub artist: Option<String>,
    pub year: Option<i32>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Album {
    /// Converts the album and its tracks into the detail DTO.
    ///
    /// Tracks are expected in position order.
    pub fn into_dto(self, tracks: Vec<Track>) -> AlbumDto {
        AlbumDto {
            id: self.id,
            name: self.name,
            title: self.title,
            artist: self.artist,
            year: self.year,
            description: self.description,
            created_at: self.created_at,
            tracks: tracks.into_iter().map(Track::into_dto).collect(),
        }
    }

    pub fn from_entity(entity: entity::album::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            title: entity.title,
            artist: entity.artist,
            year: entity.year,
            description: entity.description,
            created_at: entity.created_at,
        }
    }
}

/// Album together with its tracks ordered by position.
#[derive(Debug, Clone)]
pub struct AlbumWithTracks {
    pub album: Album,
    pub tracks: Vec<Track>,
}

impl AlbumWithTracks {
    pub fn into_dto(self) -> AlbumDto {
        self.album.into_dto(self.tracks)
    }
}

/// Album row for list views.
#[derive(Debug, Clone)]
pub struct AlbumListItem {
    pub album: Album,
    pub track_count: u64,
}

impl AlbumListItem {
    pub fn into_dto(self) -> AlbumListItemDto {
        AlbumListItemDto {
            id: self.album.id,
            name: self.album.name,
            title: self.album.title,
            artist: self.album.artist,
            year: self.album.year,
            track_count: self.track_count,
        }
    }
}

/// One page of albums ordered by title.
#[derive(Debug, Clone)]
pub struct PaginatedAlbums {
    pub albums: Vec<AlbumListItem>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
}

impl PaginatedAlbums {
    pub fn into_dto(self) -> PaginatedAlbumsDto {
        PaginatedAlbumsDto {
            albums: self.albums.into_iter().map(AlbumListItem::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: total_pages(self.total, self.per_page),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateAlbumParam {
    pub name: String,
    pub title: String,
    pub artist: Option<String>,
    pub year: Option<i32>,
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct UpdateAlbumParam {
    pub id: String,
    pub title: String,
    pub artist: Option<String>,
    pub year: Option<i32>,
    pub description: Option<String>,
}

/// A storage folder being imported as a new album.
///
/// Tracks are inserted at positions `0..n` in the order given.
#[derive(Debug, Clone)]
pub struct ImportAlbumParam {
    pub name: String,
    pub tracks: Vec<(String, TrackMetadata)>,
}
