//! Track domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::track::TrackDto;

/// Audio file belonging to an album, ordered by `position`.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    pub id: String,
    pub album_id: String,
    pub title: String,
    pub file_key: String,
    pub duration_seconds: f64,
    pub position: i32,
    pub codec: Option<String>,
    pub bitrate_kbps: Option<i32>,
    pub sample_rate: Option<i32>,
    pub channels: Option<i32>,
    pub created_at: DateTime<Utc>,
}

impl Track {
    pub fn into_dto(self) -> TrackDto {
        TrackDto {
            id: self.id,
            album_id: self.album_id,
            title: self.title,
            file_key: self.file_key,
            duration_seconds: self.duration_seconds,
            position: self.position,
            codec: self.codec,
            bitrate_kbps: self.bitrate_kbps,
            sample_rate: self.sample_rate,
            channels: self.channels,
        }
    }

    pub fn from_entity(entity: entity::track::Model) -> Self {
        Self {
            id: entity.id,
            album_id: entity.album_id,
            title: entity.title,
            file_key: entity.file_key,
            duration_seconds: entity.duration_seconds,
            position: entity.position,
            codec: entity.codec,
            bitrate_kbps: entity.bitrate_kbps,
            sample_rate: entity.sample_rate,
            channels: entity.channels,
            created_at: entity.created_at,
        }
    }
}

/// Technical properties and tag title read from an audio file.
///
/// Produced by the metadata service; when tags cannot be read the title is derived
/// from the file name and every other field is empty.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackMetadata {
    pub title: String,
    pub duration_seconds: f64,
    pub codec: Option<String>,
    pub bitrate_kbps: Option<i32>,
    pub sample_rate: Option<i32>,
    pub channels: Option<i32>,
}

/// Parameters for inserting a track. The repository assigns the id and, for
/// appends, the position.
#[derive(Debug, Clone)]
pub struct CreateTrackParam {
    pub album_id: String,
    pub file_key: String,
    pub metadata: TrackMetadata,
}
