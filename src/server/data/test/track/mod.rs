use crate::server::{
    data::track::TrackRepository,
    model::{
        reorder::PositionPlan,
        track::{CreateTrackParam, TrackMetadata},
    },
};
use sea_orm::{DbErr, TransactionTrait};
use test_utils::{builder::TestBuilder, factory};

mod apply_positions;
mod delete_by_album;
mod get_by_album;
mod next_position;

fn metadata(title: &str) -> TrackMetadata {
    TrackMetadata {
        title: title.to_string(),
        duration_seconds: 200.5,
        codec: Some("flac".to_string()),
        bitrate_kbps: Some(900),
        sample_rate: Some(44100),
        channels: Some(2),
    }
}

fn plan(staging: &[(&str, i32)], targets: &[(&str, i32)]) -> PositionPlan {
    let owned = |pairs: &[(&str, i32)]| {
        pairs
            .iter()
            .map(|(id, position)| (id.to_string(), *position))
            .collect()
    };
    PositionPlan {
        staging: owned(staging),
        targets: owned(targets),
    }
}
