//! Track service for business logic.

use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{playlist_track::PlaylistTrackRepository, track::TrackRepository},
    error::AppError,
    model::track::Track,
    storage::ObjectStore,
};

/// Service providing business logic for individual tracks.
pub struct TrackService<'a> {
    pub db: &'a DatabaseConnection,
    pub storage: &'a dyn ObjectStore,
}

impl<'a> TrackService<'a> {
    pub fn new(db: &'a DatabaseConnection, storage: &'a dyn ObjectStore) -> Self {
        Self { db, storage }
    }

    /// Gets a track by id.
    ///
    /// # Returns
    /// - `Ok(Track)` - Track found
    /// - `Err(AppError::NotFound)` - No track with that id
    pub async fn get_by_id(&self, id: &str) -> Result<Track, AppError> {
        TrackRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Track not found".to_string()))
    }

    /// Renames a track.
    ///
    /// # Returns
    /// - `Ok(Track)` - Updated track
    /// - `Err(AppError::BadRequest)` - Empty title
    /// - `Err(AppError::NotFound)` - No track with that id
    pub async fn update_title(&self, id: &str, title: &str) -> Result<Track, AppError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(AppError::BadRequest("Track title is required".to_string()));
        }

        TrackRepository::new(self.db)
            .update_title(id, title.to_string())
            .await?
            .ok_or_else(|| AppError::NotFound("Track not found".to_string()))
    }

    /// Deletes a track, the playlist entries pointing at it, and its storage object.
    ///
    /// The positions of the remaining album tracks are left as they are. A failing
    /// storage delete is logged without failing the request.
    ///
    /// # Returns
    /// - `Ok(())` - Track deleted
    /// - `Err(AppError::NotFound)` - No track with that id
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        let track_repo = TrackRepository::new(&txn);
        let track = track_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Track not found".to_string()))?;

        PlaylistTrackRepository::new(&txn)
            .delete_by_tracks(vec![track.id.clone()])
            .await?;
        track_repo.delete(&track.id).await?;

        txn.commit().await?;

        if let Err(e) = self.storage.delete(&track.file_key).await {
            tracing::warn!("Failed to delete storage object {}: {}", track.file_key, e);
        }

        Ok(())
    }
}
