//! Album data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use std::collections::HashMap;

use crate::server::model::album::{Album, AlbumListItem, CreateAlbumParam, UpdateAlbumParam};

pub struct AlbumRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AlbumRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new album.
    ///
    /// # Returns
    /// - `Ok(Album)` - Created album
    /// - `Err(DbErr)` - Database error, including a unique violation on `name`
    pub async fn create(&self, param: CreateAlbumParam) -> Result<Album, DbErr> {
        let entity = entity::album::ActiveModel {
            id: ActiveValue::Set(uuid::Uuid::new_v4().to_string()),
            name: ActiveValue::Set(param.name),
            title: ActiveValue::Set(param.title),
            artist: ActiveValue::Set(param.artist),
            year: ActiveValue::Set(param.year),
            description: ActiveValue::Set(param.description),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(Album::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Album>, DbErr> {
        let entity = entity::prelude::Album::find_by_id(id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(Album::from_entity))
    }

    /// Finds the album backed by a storage folder.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Album>, DbErr> {
        let entity = entity::prelude::Album::find()
            .filter(entity::album::Column::Name.eq(name))
            .one(self.db)
            .await?;

        Ok(entity.map(Album::from_entity))
    }

    /// Gets every album, ordered by name. Used by storage sync.
    pub async fn get_all(&self) -> Result<Vec<Album>, DbErr> {
        let entities = entity::prelude::Album::find()
            .order_by_asc(entity::album::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Album::from_entity).collect())
    }

    /// Gets a page of albums ordered by title, each with its track count.
    ///
    /// # Returns
    /// - `Ok((albums, total))` - Albums on the page and the total album count
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<AlbumListItem>, u64), DbErr> {
        let paginator = entity::prelude::Album::find()
            .order_by_asc(entity::album::Column::Title)
            .order_by_asc(entity::album::Column::Name)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let albums = paginator.fetch_page(page).await?;

        let ids: Vec<String> = albums.iter().map(|album| album.id.clone()).collect();
        let counts: HashMap<String, i64> = entity::prelude::Track::find()
            .select_only()
            .column(entity::track::Column::AlbumId)
            .column_as(entity::track::Column::Id.count(), "track_count")
            .filter(entity::track::Column::AlbumId.is_in(ids))
            .group_by(entity::track::Column::AlbumId)
            .into_tuple::<(String, i64)>()
            .all(self.db)
            .await?
            .into_iter()
            .collect();

        let items = albums
            .into_iter()
            .map(|album| {
                let track_count = counts.get(&album.id).copied().unwrap_or(0) as u64;
                AlbumListItem {
                    album: Album::from_entity(album),
                    track_count,
                }
            })
            .collect();

        Ok((items, total))
    }

    /// Updates the descriptive fields of an album. The folder name never changes.
    ///
    /// # Returns
    /// - `Ok(Some(Album))` - Updated album
    /// - `Ok(None)` - No album with that id
    pub async fn update(&self, param: UpdateAlbumParam) -> Result<Option<Album>, DbErr> {
        let Some(album) = entity::prelude::Album::find_by_id(param.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::album::ActiveModel = album.into();
        active_model.title = ActiveValue::Set(param.title);
        active_model.artist = ActiveValue::Set(param.artist);
        active_model.year = ActiveValue::Set(param.year);
        active_model.description = ActiveValue::Set(param.description);
        let updated = active_model.update(self.db).await?;

        Ok(Some(Album::from_entity(updated)))
    }

    /// Deletes the album row only. Callers remove tracks and playlist entries first.
    pub async fn delete(&self, id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Album::delete_by_id(id.to_string())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
