//! Track data repository.
//!
//! Owns position bookkeeping for album tracks: appends take `max(position) + 1` while that still fits an `i32` and
//! reorders go through `position::apply_plan`.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::{
    data::position::{apply_plan, position_after},
    model::{
        reorder::PositionPlan,
        track::{CreateTrackParam, Track, TrackMetadata},
    },
};

pub struct TrackRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TrackRepository<'a, C> {
    /// Creates a new TrackRepository on a connection or transaction.
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds a track by id.
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Track>, DbErr> {
        let entity = entity::prelude::Track::find_by_id(id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(Track::from_entity))
    }

    /// Gets all tracks of an album ordered by position.
    pub async fn get_by_album(&self, album_id: &str) -> Result<Vec<Track>, DbErr> {
        let entities = entity::prelude::Track::find()
            .filter(entity::track::Column::AlbumId.eq(album_id))
            .order_by_asc(entity::track::Column::Position)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Track::from_entity).collect())
    }

    /// Gets `(track_id, position)` pairs of an album ordered by position.
    pub async fn get_positions(&self, album_id: &str) -> Result<Vec<(String, i32)>, DbErr> {
        entity::prelude::Track::find()
            .select_only()
            .column(entity::track::Column::Id)
            .column(entity::track::Column::Position)
            .filter(entity::track::Column::AlbumId.eq(album_id))
            .order_by_asc(entity::track::Column::Position)
            .into_tuple()
            .all(self.db)
            .await
    }

    /// Returns the position a newly appended track receives.
    ///
    /// # Returns
    /// - `Ok(Some(0))` - Album has no tracks
    /// - `Ok(Some(max + 1))` - One past the highest existing position
    /// - `Ok(None)` - The highest position is `i32::MAX`; nothing can be appended
    pub async fn next_position(&self, album_id: &str) -> Result<Option<i32>, DbErr> {
        let last = entity::prelude::Track::find()
            .filter(entity::track::Column::AlbumId.eq(album_id))
            .order_by_desc(entity::track::Column::Position)
            .one(self.db)
            .await?;

        Ok(position_after(last.map(|track| track.position)))
    }

    /// Inserts a track at an explicit position.
    pub async fn create_at(
        &self,
        param: CreateTrackParam,
        position: i32,
    ) -> Result<Track, DbErr> {
        let TrackMetadata {
            title,
            duration_seconds,
            codec,
            bitrate_kbps,
            sample_rate,
            channels,
        } = param.metadata;

        let entity = entity::track::ActiveModel {
            id: ActiveValue::Set(uuid::Uuid::new_v4().to_string()),
            album_id: ActiveValue::Set(param.album_id),
            title: ActiveValue::Set(title),
            file_key: ActiveValue::Set(param.file_key),
            duration_seconds: ActiveValue::Set(duration_seconds),
            position: ActiveValue::Set(position),
            codec: ActiveValue::Set(codec),
            bitrate_kbps: ActiveValue::Set(bitrate_kbps),
            sample_rate: ActiveValue::Set(sample_rate),
            channels: ActiveValue::Set(channels),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(Track::from_entity(entity))
    }

    /// Renames a track.
    ///
    /// # Returns
    /// - `Ok(Some(Track))` - Updated track
    /// - `Ok(None)` - No track with that id
    pub async fn update_title(&self, id: &str, title: String) -> Result<Option<Track>, DbErr> {
        let Some(track) = entity::prelude::Track::find_by_id(id.to_string())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::track::ActiveModel = track.into();
        active_model.title = ActiveValue::Set(title);
        let updated = active_model.update(self.db).await?;

        Ok(Some(Track::from_entity(updated)))
    }

    /// Deletes a single track row. Other positions are left untouched.
    pub async fn delete(&self, id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Track::delete_by_id(id.to_string())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes every track of an album.
    ///
    /// # Returns
    /// - `Ok(count)` - Number of deleted tracks
    pub async fn delete_by_album(&self, album_id: &str) -> Result<u64, DbErr> {
        let result = entity::prelude::Track::delete_many()
            .filter(entity::track::Column::AlbumId.eq(album_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Applies a validated reorder plan to an album's tracks.
    ///
    /// Must run inside a transaction so a failure leaves no staged positions behind.
    pub async fn apply_positions(&self, album_id: &str, plan: &PositionPlan) -> Result<(), DbErr> {
        apply_plan::<entity::prelude::Track, C>(
            self.db,
            entity::track::Column::AlbumId,
            album_id,
            entity::track::Column::Id,
            entity::track::Column::Position,
            plan,
        )
        .await
    }
}
