//! Album service for business logic.
//!
//! Albums mirror top-level folders in object storage: `album.name` is the folder name and
//! every track key starts with it. Multi-table changes (deleting an album, importing a
//! folder, reordering tracks) run inside one database transaction; storage objects are
//! only touched after the transaction committed.

use dioxus_logger::tracing;
use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, TransactionTrait};

use crate::server::{
    data::{album::AlbumRepository, playlist_track::PlaylistTrackRepository, track::TrackRepository},
    error::AppError,
    model::{
        album::{
            Album, AlbumWithTracks, CreateAlbumParam, ImportAlbumParam, PaginatedAlbums,
            UpdateAlbumParam,
        },
        reorder::ReorderItem,
        track::{CreateTrackParam, Track},
        upload::UploadedFile,
    },
    service::{metadata, reorder::plan_reorder},
    storage::{ObjectStore, GALLERY_FOLDER},
    util::audio::{extension, file_name, is_audio_file},
};

/// Deletes an album row together with its tracks and every playlist entry that points
/// at one of those tracks.
///
/// # Returns
/// - `Ok(Some(tracks))` - The deleted tracks, so the caller can clean up storage
/// - `Ok(None)` - No album with that id
pub async fn delete_album_rows<C: ConnectionTrait>(
    db: &C,
    album_id: &str,
) -> Result<Option<Vec<Track>>, DbErr> {
    let album_repo = AlbumRepository::new(db);
    if album_repo.find_by_id(album_id).await?.is_none() {
        return Ok(None);
    }

    let track_repo = TrackRepository::new(db);
    let tracks = track_repo.get_by_album(album_id).await?;

    PlaylistTrackRepository::new(db)
        .delete_by_tracks(tracks.iter().map(|track| track.id.clone()).collect())
        .await?;
    track_repo.delete_by_album(album_id).await?;
    album_repo.delete(album_id).await?;

    Ok(Some(tracks))
}

/// Rejects names that cannot serve as a storage folder.
fn validate_album_name(name: &str) -> Result<(), AppError> {
    if name.is_empty() {
        return Err(AppError::BadRequest("Album name is required".to_string()));
    }
    if name.contains('/') {
        return Err(AppError::BadRequest(
            "Album name must not contain '/'".to_string(),
        ));
    }
    if name.eq_ignore_ascii_case(GALLERY_FOLDER) {
        return Err(AppError::BadRequest(format!(
            "'{}' is reserved for the gallery",
            GALLERY_FOLDER
        )));
    }
    Ok(())
}

/// Trims optional text, mapping blank input to `None`.
pub(super) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Service providing business logic for albums and their tracks.
pub struct AlbumService<'a> {
    pub db: &'a DatabaseConnection,
    pub storage: &'a dyn ObjectStore,
}

impl<'a> AlbumService<'a> {
    /// Creates a new AlbumService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `storage` - Object store holding the album folders
    pub fn new(db: &'a DatabaseConnection, storage: &'a dyn ObjectStore) -> Self {
        Self { db, storage }
    }

    /// Gets a page of albums ordered by title, with track counts.
    pub async fn get_paginated(&self, page: u64, per_page: u64) -> Result<PaginatedAlbums, AppError> {
        let (albums, total) = AlbumRepository::new(self.db)
            .get_paginated(page, per_page)
            .await?;

        Ok(PaginatedAlbums {
            albums,
            total,
            page,
            per_page,
        })
    }

    /// Gets an album with its tracks ordered by position.
    ///
    /// # Returns
    /// - `Ok(AlbumWithTracks)` - Album found
    /// - `Err(AppError::NotFound)` - No album with that id
    pub async fn get_by_id(&self, id: &str) -> Result<AlbumWithTracks, AppError> {
        let album = AlbumRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Album not found".to_string()))?;
        let tracks = TrackRepository::new(self.db).get_by_album(id).await?;

        Ok(AlbumWithTracks { album, tracks })
    }

    /// Creates an empty album.
    ///
    /// The name becomes the storage folder, so it must be unique, must not contain `/`
    /// and must not be the gallery folder. The title defaults to the name.
    ///
    /// # Returns
    /// - `Ok(Album)` - Created album
    /// - `Err(AppError::BadRequest)` - Invalid or duplicate name
    pub async fn create(&self, param: CreateAlbumParam) -> Result<Album, AppError> {
        let name = param.name.trim().to_string();
        validate_album_name(&name)?;

        let album_repo = AlbumRepository::new(self.db);
        if album_repo.find_by_name(&name).await?.is_some() {
            return Err(AppError::BadRequest(format!(
                "An album named '{}' already exists",
                name
            )));
        }

        let title = match param.title.trim() {
            "" => name.clone(),
            title => title.to_string(),
        };

        let album = album_repo
            .create(CreateAlbumParam {
                name,
                title,
                artist: non_blank(param.artist),
                year: param.year,
                description: non_blank(param.description),
            })
            .await?;

        Ok(album)
    }

    /// Updates the title, artist, year and description of an album.
    ///
    /// # Returns
    /// - `Ok(Album)` - Updated album
    /// - `Err(AppError::BadRequest)` - Empty title
    /// - `Err(AppError::NotFound)` - No album with that id
    pub async fn update(&self, param: UpdateAlbumParam) -> Result<Album, AppError> {
        let title = param.title.trim().to_string();
        if title.is_empty() {
            return Err(AppError::BadRequest("Album title is required".to_string()));
        }

        AlbumRepository::new(self.db)
            .update(UpdateAlbumParam {
                id: param.id,
                title,
                artist: non_blank(param.artist),
                year: param.year,
                description: non_blank(param.description),
            })
            .await?
            .ok_or_else(|| AppError::NotFound("Album not found".to_string()))
    }

    /// Deletes an album, its tracks, their playlist entries and their storage objects.
    ///
    /// Rows are removed in one transaction. Storage deletes happen afterwards and a
    /// failing delete is logged without failing the request.
    ///
    /// # Returns
    /// - `Ok(())` - Album deleted
    /// - `Err(AppError::NotFound)` - No album with that id
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let tracks = delete_album_rows(&txn, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Album not found".to_string()))?;
        txn.commit().await?;

        for track in tracks {
            if let Err(e) = self.storage.delete(&track.file_key).await {
                tracing::warn!("Failed to delete storage object {}: {}", track.file_key, e);
            }
        }

        Ok(())
    }

    /// Reorders the tracks of an album.
    ///
    /// # Returns
    /// - `Ok(())` - Positions updated, or nothing to do for an empty request
    /// - `Err(AppError::NotFound)` - No album with that id
    /// - `Err(AppError::BadRequest)` - Request failed validation; nothing was written
    pub async fn reorder(&self, album_id: &str, items: Vec<ReorderItem>) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        if AlbumRepository::new(&txn).find_by_id(album_id).await?.is_none() {
            return Err(AppError::NotFound("Album not found".to_string()));
        }

        let track_repo = TrackRepository::new(&txn);
        let current = track_repo.get_positions(album_id).await?;
        let plan = plan_reorder(&current, &items)?;

        if !plan.is_empty() {
            track_repo.apply_positions(album_id, &plan).await?;
        }

        txn.commit().await?;

        Ok(())
    }

    /// Stores an uploaded audio file in the album folder and appends it as a track.
    ///
    /// The object key is `{album.name}/{file name}`. Metadata is read from the file;
    /// a non-blank `title` overrides the extracted title.
    ///
    /// # Returns
    /// - `Ok(Track)` - Created track
    /// - `Err(AppError::NotFound)` - No album with that id
    /// - `Err(AppError::BadRequest)` - Not an audio file, the album already has a file with
    ///   that name, or its last track already sits at `i32::MAX`
    pub async fn upload_track(
        &self,
        album_id: &str,
        file: UploadedFile,
        title: Option<String>,
    ) -> Result<Track, AppError> {
        let album = AlbumRepository::new(self.db)
            .find_by_id(album_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Album not found".to_string()))?;

        let name = file_name(file.file_name.trim()).trim().to_string();
        if !is_audio_file(&name) {
            return Err(AppError::BadRequest(format!(
                "'{}' is not a supported audio file",
                name
            )));
        }

        let key = format!("{}/{}", album.name, name);
        let track_repo = TrackRepository::new(self.db);
        if track_repo
            .get_by_album(album_id)
            .await?
            .iter()
            .any(|track| track.file_key == key)
        {
            return Err(AppError::BadRequest(format!(
                "Album already contains a file named '{}'",
                name
            )));
        }

        let position = track_repo.next_position(album_id).await?.ok_or_else(|| {
            AppError::BadRequest(
                "Album has no free track position left; reorder it first".to_string(),
            )
        })?;

        let mut metadata = metadata::extract(&file.data, &name);
        if let Some(title) = non_blank(title) {
            metadata.title = title;
        }

        let content_type = file
            .content_type
            .filter(|content_type| content_type.starts_with("audio/"))
            .or_else(|| infer::get(&file.data).map(|kind| kind.mime_type().to_string()))
            .unwrap_or_else(|| format!("audio/{}", extension(&name).unwrap_or_default()));

        self.storage.upload(&key, &content_type, file.data).await?;

        let track = match track_repo
            .create_at(
                CreateTrackParam {
                    album_id: album.id,
                    file_key: key.clone(),
                    metadata,
                },
                position,
            )
            .await
        {
            Ok(track) => track,
            Err(e) => {
                if let Err(storage_err) = self.storage.delete(&key).await {
                    tracing::warn!("Failed to remove orphaned upload {}: {}", key, storage_err);
                }
                return Err(e.into());
            }
        };

        Ok(track)
    }

    /// Inserts an album and its tracks, positioned in the given order, in one transaction.
    ///
    /// Used by the storage sync for folders that have no album yet.
    ///
    /// # Returns
    /// - `Ok(AlbumWithTracks)` - Inserted album and tracks
    /// - `Err(AppError::DbErr)` - An insert failed; nothing was written
    pub async fn import(&self, param: ImportAlbumParam) -> Result<AlbumWithTracks, AppError> {
        let txn = self.db.begin().await?;

        let album = AlbumRepository::new(&txn)
            .create(CreateAlbumParam {
                name: param.name.clone(),
                title: param.name,
                artist: None,
                year: None,
                description: None,
            })
            .await?;

        let track_repo = TrackRepository::new(&txn);
        let mut tracks = Vec::with_capacity(param.tracks.len());
        for (position, (file_key, metadata)) in param.tracks.into_iter().enumerate() {
            let track = track_repo
                .create_at(
                    CreateTrackParam {
                        album_id: album.id.clone(),
                        file_key,
                        metadata,
                    },
                    position as i32,
                )
                .await?;
            tracks.push(track);
        }

        txn.commit().await?;

        Ok(AlbumWithTracks { album, tracks })
    }
}
