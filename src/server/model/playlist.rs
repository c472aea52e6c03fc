//! Playlist domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::playlist::{PlaylistDto, PlaylistEntryDto, PlaylistSummaryDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Playlist {
    pub id: String,
    pub owner_id: String,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Playlist {
    pub fn into_dto(self, entries: Vec<PlaylistEntry>) -> PlaylistDto {
        PlaylistDto {
            id: self.id,
            owner_id: self.owner_id,
            name: self.name,
            description: self.description,
            created_at: self.created_at,
            entries: entries.into_iter().map(PlaylistEntry::into_dto).collect(),
        }
    }

    pub fn from_entity(entity: entity::playlist::Model) -> Self {
        Self {
            id: entity.id,
            owner_id: entity.owner_id,
            name: entity.name,
            description: entity.description,
            created_at: entity.created_at,
        }
    }
}

/// Playlist row for list views.
#[derive(Debug, Clone)]
pub struct PlaylistSummary {
    pub playlist: Playlist,
    pub entry_count: u64,
}

impl PlaylistSummary {
    pub fn into_dto(self) -> PlaylistSummaryDto {
        PlaylistSummaryDto {
            id: self.playlist.id,
            owner_id: self.playlist.owner_id,
            name: self.playlist.name,
            description: self.playlist.description,
            entry_count: self.entry_count,
            created_at: self.playlist.created_at,
        }
    }
}

/// Playlist slot joined with the track and album it points at.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaylistEntry {
    pub id: String,
    pub playlist_id: String,
    pub track_id: String,
    pub position: i32,
    pub track_title: String,
    pub album_id: String,
    pub album_title: String,
    pub file_key: String,
    pub duration_seconds: f64,
}

impl PlaylistEntry {
    pub fn into_dto(self) -> PlaylistEntryDto {
        PlaylistEntryDto {
            id: self.id,
            track_id: self.track_id,
            position: self.position,
            track_title: self.track_title,
            album_id: self.album_id,
            album_title: self.album_title,
            file_key: self.file_key,
            duration_seconds: self.duration_seconds,
        }
    }

    /// Builds an entry from its row and the joined track and album rows.
    pub fn from_entity(
        entry: entity::playlist_track::Model,
        track: entity::track::Model,
        album_title: String,
    ) -> Self {
        Self {
            id: entry.id,
            playlist_id: entry.playlist_id,
            track_id: entry.track_id,
            position: entry.position,
            track_title: track.title,
            album_id: track.album_id,
            album_title,
            file_key: track.file_key,
            duration_seconds: track.duration_seconds,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PlaylistWithEntries {
    pub playlist: Playlist,
    pub entries: Vec<PlaylistEntry>,
}

impl PlaylistWithEntries {
    pub fn into_dto(self) -> PlaylistDto {
        self.playlist.into_dto(self.entries)
    }
}

#[derive(Debug, Clone)]
pub struct CreatePlaylistParam {
    pub owner_id: String,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct UpdatePlaylistParam {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
}
