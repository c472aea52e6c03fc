//! Playlist data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};
use std::collections::HashMap;

use crate::server::model::playlist::{
    CreatePlaylistParam, Playlist, PlaylistSummary, UpdatePlaylistParam,
};

pub struct PlaylistRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlaylistRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreatePlaylistParam) -> Result<Playlist, DbErr> {
        let entity = entity::playlist::ActiveModel {
            id: ActiveValue::Set(uuid::Uuid::new_v4().to_string()),
            owner_id: ActiveValue::Set(param.owner_id),
            name: ActiveValue::Set(param.name),
            description: ActiveValue::Set(param.description),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(Playlist::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Playlist>, DbErr> {
        let entity = entity::prelude::Playlist::find_by_id(id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(Playlist::from_entity))
    }

    /// Gets every playlist ordered by name, each with its entry count.
    pub async fn get_all(&self) -> Result<Vec<PlaylistSummary>, DbErr> {
        let playlists = entity::prelude::Playlist::find()
            .order_by_asc(entity::playlist::Column::Name)
            .all(self.db)
            .await?;

        let counts: HashMap<String, i64> = entity::prelude::PlaylistTrack::find()
            .select_only()
            .column(entity::playlist_track::Column::PlaylistId)
            .column_as(entity::playlist_track::Column::Id.count(), "entry_count")
            .group_by(entity::playlist_track::Column::PlaylistId)
            .into_tuple::<(String, i64)>()
            .all(self.db)
            .await?
            .into_iter()
            .collect();

        Ok(playlists
            .into_iter()
            .map(|playlist| {
                let entry_count = counts.get(&playlist.id).copied().unwrap_or(0) as u64;
                PlaylistSummary {
                    playlist: Playlist::from_entity(playlist),
                    entry_count,
                }
            })
            .collect())
    }

    /// Updates name and description.
    ///
    /// # Returns
    /// - `Ok(Some(Playlist))` - Updated playlist
    /// - `Ok(None)` - No playlist with that id
    pub async fn update(&self, param: UpdatePlaylistParam) -> Result<Option<Playlist>, DbErr> {
        let Some(playlist) = entity::prelude::Playlist::find_by_id(param.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::playlist::ActiveModel = playlist.into();
        active_model.name = ActiveValue::Set(param.name);
        active_model.description = ActiveValue::Set(param.description);
        let updated = active_model.update(self.db).await?;

        Ok(Some(Playlist::from_entity(updated)))
    }

    /// Deletes the playlist row only. Callers remove its entries first.
    pub async fn delete(&self, id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Playlist::delete_by_id(id.to_string())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
