use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::AppError,
    model::{playlist::UpdatePlaylistParam, reorder::ReorderItem},
    service::{playlist::PlaylistService, reorder::MAX_POSITION, test::as_user},
};

mod entries;
mod permissions;
mod reorder;
