//! Playlist service for business logic.
//!
//! Playlists are visible to every member. Only the owner or an admin may change a
//! playlist or its entries.

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        playlist::PlaylistRepository, playlist_track::PlaylistTrackRepository,
        track::TrackRepository,
    },
    error::AppError,
    model::{
        playlist::{
            CreatePlaylistParam, Playlist, PlaylistSummary, PlaylistWithEntries,
            UpdatePlaylistParam,
        },
        reorder::ReorderItem,
        user::User,
    },
    service::{album::non_blank, reorder::plan_reorder},
};

fn validate_name(name: &str) -> Result<String, AppError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::BadRequest("Playlist name is required".to_string()));
    }
    Ok(name.to_string())
}

/// Service providing business logic for playlists and their entries.
pub struct PlaylistService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> PlaylistService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Loads a playlist and checks that `user` may modify it.
    ///
    /// # Returns
    /// - `Ok(Playlist)` - Playlist exists and `user` owns it or is an admin
    /// - `Err(AppError::NotFound)` - No playlist with that id
    /// - `Err(AppError::Forbidden)` - `user` is neither owner nor admin
    async fn find_modifiable<C: ConnectionTrait>(
        db: &C,
        user: &User,
        id: &str,
    ) -> Result<Playlist, AppError> {
        let playlist = PlaylistRepository::new(db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Playlist not found".to_string()))?;

        if playlist.owner_id != user.id && !user.admin {
            return Err(AppError::Forbidden(
                "Only the owner or an admin can change this playlist".to_string(),
            ));
        }

        Ok(playlist)
    }

    /// Gets every playlist with its entry count, ordered by name.
    pub async fn get_all(&self) -> Result<Vec<PlaylistSummary>, AppError> {
        Ok(PlaylistRepository::new(self.db).get_all().await?)
    }

    /// Gets a playlist with its entries ordered by position.
    ///
    /// # Returns
    /// - `Ok(PlaylistWithEntries)` - Playlist found
    /// - `Err(AppError::NotFound)` - No playlist with that id
    pub async fn get_by_id(&self, id: &str) -> Result<PlaylistWithEntries, AppError> {
        let playlist = PlaylistRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Playlist not found".to_string()))?;
        let entries = PlaylistTrackRepository::new(self.db)
            .get_by_playlist(id)
            .await?;

        Ok(PlaylistWithEntries { playlist, entries })
    }

    /// Creates an empty playlist owned by `param.owner_id`.
    pub async fn create(&self, param: CreatePlaylistParam) -> Result<Playlist, AppError> {
        let playlist = PlaylistRepository::new(self.db)
            .create(CreatePlaylistParam {
                owner_id: param.owner_id,
                name: validate_name(&param.name)?,
                description: non_blank(param.description),
            })
            .await?;

        Ok(playlist)
    }

    /// Renames a playlist or changes its description.
    ///
    /// # Returns
    /// - `Ok(Playlist)` - Updated playlist
    /// - `Err(AppError::BadRequest)` - Empty name
    /// - `Err(AppError::NotFound)` / `Err(AppError::Forbidden)` - See `find_modifiable`
    pub async fn update(&self, user: &User, param: UpdatePlaylistParam) -> Result<Playlist, AppError> {
        let name = validate_name(&param.name)?;
        Self::find_modifiable(self.db, user, &param.id).await?;

        PlaylistRepository::new(self.db)
            .update(UpdatePlaylistParam {
                id: param.id,
                name,
                description: non_blank(param.description),
            })
            .await?
            .ok_or_else(|| AppError::NotFound("Playlist not found".to_string()))
    }

    /// Deletes a playlist and its entries.
    pub async fn delete(&self, user: &User, id: &str) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        Self::find_modifiable(&txn, user, id).await?;
        PlaylistTrackRepository::new(&txn)
            .delete_by_playlist(id)
            .await?;
        PlaylistRepository::new(&txn).delete(id).await?;

        txn.commit().await?;

        Ok(())
    }

    /// Appends a track to the end of a playlist. A track may appear more than once.
    ///
    /// # Returns
    /// - `Ok(PlaylistWithEntries)` - Playlist including the new entry
    /// - `Err(AppError::NotFound)` - Playlist or track missing
    /// - `Err(AppError::Forbidden)` - `user` is neither owner nor admin
    /// - `Err(AppError::BadRequest)` - The last entry already sits at `i32::MAX`
    pub async fn add_track(
        &self,
        user: &User,
        playlist_id: &str,
        track_id: &str,
    ) -> Result<PlaylistWithEntries, AppError> {
        let txn = self.db.begin().await?;

        Self::find_modifiable(&txn, user, playlist_id).await?;
        if TrackRepository::new(&txn).find_by_id(track_id).await?.is_none() {
            return Err(AppError::NotFound("Track not found".to_string()));
        }
        if PlaylistTrackRepository::new(&txn)
            .append(playlist_id, track_id)
            .await?
            .is_none()
        {
            return Err(AppError::BadRequest(
                "Playlist has no free position left; reorder it first".to_string(),
            ));
        }

        txn.commit().await?;

        self.get_by_id(playlist_id).await
    }

    /// Removes one entry from a playlist. Remaining positions keep their gaps.
    ///
    /// # Returns
    /// - `Ok(())` - Entry removed
    /// - `Err(AppError::NotFound)` - Playlist missing or the entry is not part of it
    /// - `Err(AppError::Forbidden)` - `user` is neither owner nor admin
    pub async fn remove_entry(
        &self,
        user: &User,
        playlist_id: &str,
        entry_id: &str,
    ) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        Self::find_modifiable(&txn, user, playlist_id).await?;

        let entry_repo = PlaylistTrackRepository::new(&txn);
        match entry_repo.find_by_id(entry_id).await? {
            Some((owner_playlist_id, _)) if owner_playlist_id == playlist_id => {
                entry_repo.delete(entry_id).await?;
            }
            _ => return Err(AppError::NotFound("Playlist entry not found".to_string())),
        }

        txn.commit().await?;

        Ok(())
    }

    /// Reorders the entries of a playlist.
    ///
    /// # Returns
    /// - `Ok(())` - Positions updated, or nothing to do for an empty request
    /// - `Err(AppError::NotFound)` - No playlist with that id
    /// - `Err(AppError::Forbidden)` - `user` is neither owner nor admin
    /// - `Err(AppError::BadRequest)` - Request failed validation; nothing was written
    pub async fn reorder(
        &self,
        user: &User,
        playlist_id: &str,
        items: Vec<ReorderItem>,
    ) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        Self::find_modifiable(&txn, user, playlist_id).await?;

        let entry_repo = PlaylistTrackRepository::new(&txn);
        let current = entry_repo.get_positions(playlist_id).await?;
        let plan = plan_reorder(&current, &items)?;

        if !plan.is_empty() {
            entry_repo.apply_positions(playlist_id, &plan).await?;
        }

        txn.commit().await?;

        Ok(())
    }
}
