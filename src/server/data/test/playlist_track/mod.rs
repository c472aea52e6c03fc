use crate::server::{data::playlist_track::PlaylistTrackRepository, model::reorder::PositionPlan};
use sea_orm::{DbErr, TransactionTrait};
use test_utils::{builder::TestBuilder, factory};

mod append;
mod apply_positions;
mod delete_by_tracks;
mod get_by_playlist;
