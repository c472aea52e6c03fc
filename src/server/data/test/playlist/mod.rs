use crate::server::{
    data::playlist::PlaylistRepository,
    model::playlist::{CreatePlaylistParam, UpdatePlaylistParam},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_all;
