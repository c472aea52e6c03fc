//! Playlist entry data repository.
//!
//! Entries carry their own position, independent of the track's album position.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};
use std::collections::HashMap;

use crate::server::{
    data::position::{apply_plan, position_after},
    model::{playlist::PlaylistEntry, reorder::PositionPlan},
};

pub struct PlaylistTrackRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlaylistTrackRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets the entries of a playlist ordered by position, joined with track and album.
    ///
    /// Entries whose track row is missing are skipped.
    pub async fn get_by_playlist(&self, playlist_id: &str) -> Result<Vec<PlaylistEntry>, DbErr> {
        let rows = entity::prelude::PlaylistTrack::find()
            .filter(entity::playlist_track::Column::PlaylistId.eq(playlist_id))
            .order_by_asc(entity::playlist_track::Column::Position)
            .find_also_related(entity::prelude::Track)
            .all(self.db)
            .await?;

        let album_ids: Vec<String> = rows
            .iter()
            .filter_map(|(_, track)| track.as_ref().map(|t| t.album_id.clone()))
            .collect();
        let album_titles: HashMap<String, String> = entity::prelude::Album::find()
            .filter(entity::album::Column::Id.is_in(album_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|album| (album.id, album.title))
            .collect();

        Ok(rows
            .into_iter()
            .filter_map(|(entry, track)| {
                let track = track?;
                let album_title = album_titles.get(&track.album_id).cloned().unwrap_or_default();
                Some(PlaylistEntry::from_entity(entry, track, album_title))
            })
            .collect())
    }

    /// Finds an entry row by id, returning `(playlist_id, track_id)`.
    pub async fn find_by_id(&self, id: &str) -> Result<Option<(String, String)>, DbErr> {
        let entity = entity::prelude::PlaylistTrack::find_by_id(id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(|entry| (entry.playlist_id, entry.track_id)))
    }

    /// Gets `(entry_id, position)` pairs of a playlist ordered by position.
    pub async fn get_positions(&self, playlist_id: &str) -> Result<Vec<(String, i32)>, DbErr> {
        entity::prelude::PlaylistTrack::find()
            .select_only()
            .column(entity::playlist_track::Column::Id)
            .column(entity::playlist_track::Column::Position)
            .filter(entity::playlist_track::Column::PlaylistId.eq(playlist_id))
            .order_by_asc(entity::playlist_track::Column::Position)
            .into_tuple()
            .all(self.db)
            .await
    }

    /// Appends a track to the end of a playlist.
    ///
    /// # Returns
    /// - `Ok(Some(entry_id))` - Id of the new entry
    /// - `Ok(None)` - The highest position is `i32::MAX`; nothing was inserted
    pub async fn append(
        &self,
        playlist_id: &str,
        track_id: &str,
    ) -> Result<Option<String>, DbErr> {
        let last = entity::prelude::PlaylistTrack::find()
            .filter(entity::playlist_track::Column::PlaylistId.eq(playlist_id))
            .order_by_desc(entity::playlist_track::Column::Position)
            .one(self.db)
            .await?;
        let Some(position) = position_after(last.map(|entry| entry.position)) else {
            return Ok(None);
        };

        let entity = entity::playlist_track::ActiveModel {
            id: ActiveValue::Set(uuid::Uuid::new_v4().to_string()),
            playlist_id: ActiveValue::Set(playlist_id.to_string()),
            track_id: ActiveValue::Set(track_id.to_string()),
            position: ActiveValue::Set(position),
            added_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(Some(entity.id))
    }

    pub async fn delete(&self, id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::PlaylistTrack::delete_by_id(id.to_string())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes every entry of a playlist.
    pub async fn delete_by_playlist(&self, playlist_id: &str) -> Result<u64, DbErr> {
        let result = entity::prelude::PlaylistTrack::delete_many()
            .filter(entity::playlist_track::Column::PlaylistId.eq(playlist_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes every entry pointing at any of the given tracks, across all playlists.
    pub async fn delete_by_tracks(&self, track_ids: Vec<String>) -> Result<u64, DbErr> {
        if track_ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::PlaylistTrack::delete_many()
            .filter(entity::playlist_track::Column::TrackId.is_in(track_ids))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Applies a validated reorder plan to a playlist's entries.
    ///
    /// Must run inside a transaction so a failure leaves no staged positions behind.
    pub async fn apply_positions(
        &self,
        playlist_id: &str,
        plan: &PositionPlan,
    ) -> Result<(), DbErr> {
        apply_plan::<entity::prelude::PlaylistTrack, C>(
            self.db,
            entity::playlist_track::Column::PlaylistId,
            playlist_id,
            entity::playlist_track::Column::Id,
            entity::playlist_track::Column::Position,
            plan,
        )
        .await
    }
}
