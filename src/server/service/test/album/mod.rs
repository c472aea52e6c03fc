use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::AppError,
    model::reorder::ReorderItem,
    service::{album::AlbumService, reorder::MAX_POSITION, test::upload},
    storage::memory::MemoryStore,
};

mod create;
mod delete;
mod reorder;
mod upload_track;

fn item(id: &str, position: i32) -> ReorderItem {
    ReorderItem {
        id: id.to_string(),
        position,
    }
}

/// Current `(title, position)` pairs of an album in position order.
async fn titles_by_position(
    service: &AlbumService<'_>,
    album_id: &str,
) -> Result<Vec<(String, i32)>, AppError> {
    Ok(service
        .get_by_id(album_id)
        .await?
        .tracks
        .into_iter()
        .map(|track| (track.title, track.position))
        .collect())
}
