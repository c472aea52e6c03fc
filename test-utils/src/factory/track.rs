//! Track factory for creating test track entities.

use crate::factory::helpers::{new_uuid, next_id};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test tracks within an album.
///
/// The default position is drawn from the shared counter so that tracks created
/// without an explicit position never collide on the `(album_id, position)` index.
pub struct TrackFactory<'a> {
    db: &'a DatabaseConnection,
    album_id: String,
    title: String,
    file_key: String,
    duration_seconds: f64,
    position: i32,
    codec: Option<String>,
}

impl<'a> TrackFactory<'a> {
    /// Creates a new TrackFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Track {id}"`
    /// - file_key: `"album/track_{id}.mp3"`
    /// - duration_seconds: `180.0`
    /// - position: `{id}`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `album_id` - Album the track belongs to
    pub fn new(db: &'a DatabaseConnection, album_id: &str) -> Self {
        let id = next_id();
        Self {
            db,
            album_id: album_id.to_string(),
            title: format!("Track {}", id),
            file_key: format!("album/track_{}.mp3", id),
            duration_seconds: 180.0,
            position: id as i32,
            codec: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the storage object key.
    pub fn file_key(mut self, file_key: impl Into<String>) -> Self {
        self.file_key = file_key.into();
        self
    }

    pub fn duration_seconds(mut self, duration_seconds: f64) -> Self {
        self.duration_seconds = duration_seconds;
        self
    }

    /// Sets the position within the album.
    pub fn position(mut self, position: i32) -> Self {
        self.position = position;
        self
    }

    pub fn codec(mut self, codec: impl Into<String>) -> Self {
        self.codec = Some(codec.into());
        self
    }

    /// Builds and inserts the track entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::track::Model)` - Created track entity
    /// - `Err(DbErr)` - Database error during insert, including position collisions
    pub async fn build(self) -> Result<entity::track::Model, DbErr> {
        entity::track::ActiveModel {
            id: ActiveValue::Set(new_uuid()),
            album_id: ActiveValue::Set(self.album_id),
            title: ActiveValue::Set(self.title),
            file_key: ActiveValue::Set(self.file_key),
            duration_seconds: ActiveValue::Set(self.duration_seconds),
            position: ActiveValue::Set(self.position),
            codec: ActiveValue::Set(self.codec),
            bitrate_kbps: ActiveValue::Set(None),
            sample_rate: ActiveValue::Set(None),
            channels: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a track with default values in the given album.
pub async fn create_track(
    db: &DatabaseConnection,
    album_id: &str,
) -> Result<entity::track::Model, DbErr> {
    TrackFactory::new(db, album_id).build().await
}

/// Creates a track at a specific position in the given album.
pub async fn create_track_at(
    db: &DatabaseConnection,
    album_id: &str,
    position: i32,
) -> Result<entity::track::Model, DbErr> {
    TrackFactory::new(db, album_id).position(position).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{builder::TestBuilder, factory::album::create_album};

    #[tokio::test]
    async fn creates_track_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_library_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let album = create_album(db).await?;
        let track = create_track(db, &album.id).await?;

        assert_eq!(track.album_id, album.id);
        assert!(track.position >= 0);
        assert!(track.codec.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn rejects_duplicate_position_in_album() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_library_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let album = create_album(db).await?;
        create_track_at(db, &album.id, 0).await?;
        let result = create_track_at(db, &album.id, 0).await;

        assert!(result.is_err());

        Ok(())
    }

    #[tokio::test]
    async fn allows_same_position_in_different_albums() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_library_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let first = create_album(db).await?;
        let second = create_album(db).await?;

        create_track_at(db, &first.id, 0).await?;
        let track = create_track_at(db, &second.id, 0).await?;

        assert_eq!(track.position, 0);

        Ok(())
    }
}
