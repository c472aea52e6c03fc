use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct TrackDto {
    pub id: String,
    pub album_id: String,
    pub title: String,
    /// Object key, streamable through `/api/media/{file_key}`.
    pub file_key: String,
    pub duration_seconds: f64,
    pub position: i32,
    pub codec: Option<String>,
    pub bitrate_kbps: Option<i32>,
    pub sample_rate: Option<i32>,
    pub channels: Option<i32>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct UpdateTrackDto {
    pub title: String,
}
