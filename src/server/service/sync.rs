//! Reconciliation of the album tables with the folders in object storage.
//!
//! Every top-level folder of the bucket except `gallery/` is an album whose name equals
//! the folder name. A sync run removes albums whose folder disappeared and imports
//! folders that have no album yet. Albums that already exist are left untouched, so
//! running a sync twice without storage changes changes nothing. Folders without any
//! direct audio file are not imported, so every album a sync creates has tracks and a
//! later sync can remove it again.

use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, TransactionTrait};
use std::collections::HashSet;

use crate::server::{
    data::{album::AlbumRepository, track::TrackRepository},
    error::AppError,
    model::{
        album::ImportAlbumParam,
        sync::{SyncFailure, SyncReport},
        track::TrackMetadata,
    },
    service::{
        album::{delete_album_rows, AlbumService},
        metadata,
    },
    storage::{ObjectStore, GALLERY_FOLDER},
    util::audio::{file_name, is_audio_file},
};

pub struct SyncService<'a> {
    pub db: &'a DatabaseConnection,
    pub storage: &'a dyn ObjectStore,
}

impl<'a> SyncService<'a> {
    pub fn new(db: &'a DatabaseConnection, storage: &'a dyn ObjectStore) -> Self {
        Self { db, storage }
    }

    /// Runs one sync pass.
    ///
    /// Albums without tracks are never removed since they have nothing in storage that
    /// could have gone missing. Only albums created through the API can be trackless;
    /// folders without audio files are skipped instead of imported. A folder whose import fails is recorded in the report
    /// and the run continues with the next folder.
    ///
    /// # Returns
    /// - `Ok(SyncReport)` - What was added, removed and what failed
    /// - `Err(AppError::StorageErr)` - The folder listing could not be fetched
    /// - `Err(AppError::DbErr)` - The album list could not be read
    pub async fn run(&self) -> Result<SyncReport, AppError> {
        let mut report = SyncReport::default();

        let mut folders: Vec<String> = self
            .storage
            .list_folders()
            .await?
            .into_iter()
            .filter(|folder| folder != GALLERY_FOLDER)
            .collect();
        folders.sort();
        folders.dedup();

        let albums = AlbumRepository::new(self.db).get_all().await?;
        let folder_set: HashSet<&str> = folders.iter().map(String::as_str).collect();
        let album_names: HashSet<String> = albums.iter().map(|album| album.name.clone()).collect();

        for album in albums
            .iter()
            .filter(|album| !folder_set.contains(album.name.as_str()))
        {
            match self.remove_album(&album.id).await {
                Ok(0) => {}
                Ok(removed_tracks) => {
                    tracing::info!(
                        "Removed album {} ({} tracks) whose folder no longer exists",
                        album.name,
                        removed_tracks
                    );
                    report.albums_removed += 1;
                    report.tracks_removed += removed_tracks;
                }
                Err(e) => {
                    tracing::error!("Failed to remove album {}: {}", album.name, e);
                    report.failures.push(SyncFailure {
                        folder: album.name.clone(),
                        error: e.to_string(),
                    });
                }
            }
        }

        for folder in folders.iter().filter(|folder| !album_names.contains(*folder)) {
            match self.import_folder(folder).await {
                Ok(None) => {
                    tracing::debug!("Skipped folder {} without audio files", folder);
                }
                Ok(Some(track_count)) => {
                    tracing::info!("Imported album {} with {} tracks", folder, track_count);
                    report.albums_added += 1;
                    report.tracks_added += track_count;
                }
                Err(e) => {
                    tracing::error!("Failed to import folder {}: {}", folder, e);
                    report.failures.push(SyncFailure {
                        folder: folder.clone(),
                        error: e.to_string(),
                    });
                }
            }
        }

        Ok(report)
    }

    /// Removes an album whose folder is gone, unless it has no tracks.
    ///
    /// # Returns
    /// - `Ok(count)` - Number of tracks removed; `0` means the album was kept
    async fn remove_album(&self, album_id: &str) -> Result<u64, AppError> {
        let txn = self.db.begin().await?;

        if TrackRepository::new(&txn)
            .get_positions(album_id)
            .await?
            .is_empty()
        {
            return Ok(0);
        }

        let tracks = delete_album_rows(&txn, album_id).await?.unwrap_or_default();
        txn.commit().await?;

        Ok(tracks.len() as u64)
    }

    /// Imports one folder as a new album.
    ///
    /// Only direct children with an audio extension become tracks, positioned by file
    /// name order. Files that cannot be downloaded or parsed get fallback metadata.
    ///
    /// # Returns
    /// - `Ok(Some(count))` - Number of tracks imported
    /// - `Ok(None)` - The folder has no direct audio file; no album was created
    async fn import_folder(&self, folder: &str) -> Result<Option<u64>, AppError> {
        let prefix = format!("{}/", folder);

        let mut keys: Vec<String> = self
            .storage
            .list_files(&prefix)
            .await?
            .into_iter()
            .map(|object| object.key)
            .filter(|key| {
                key.strip_prefix(&prefix)
                    .is_some_and(|rest| !rest.contains('/') && is_audio_file(rest))
            })
            .collect();
        keys.sort();

        if keys.is_empty() {
            return Ok(None);
        }

        let mut tracks = Vec::with_capacity(keys.len());
        for key in keys {
            let track_metadata = self.read_metadata(&key).await;
            tracks.push((key, track_metadata));
        }

        let imported = AlbumService::new(self.db, self.storage)
            .import(ImportAlbumParam {
                name: folder.to_string(),
                tracks,
            })
            .await?;

        Ok(Some(imported.tracks.len() as u64))
    }

    async fn read_metadata(&self, key: &str) -> TrackMetadata {
        let name = file_name(key);

        match self.storage.download(key).await {
            Ok(data) => metadata::extract(&data, name),
            Err(e) => {
                tracing::warn!("Failed to download {} for metadata: {}", key, e);
                metadata::fallback(name)
            }
        }
    }
}
