//! Playlist entry factory.

use crate::factory::helpers::{new_uuid, next_id};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating playlist entries referencing a track.
///
/// As with tracks, the default position comes from the shared counter.
pub struct PlaylistTrackFactory<'a> {
    db: &'a DatabaseConnection,
    playlist_id: String,
    track_id: String,
    position: i32,
}

impl<'a> PlaylistTrackFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, playlist_id: &str, track_id: &str) -> Self {
        Self {
            db,
            playlist_id: playlist_id.to_string(),
            track_id: track_id.to_string(),
            position: next_id() as i32,
        }
    }

    /// Sets the position within the playlist.
    pub fn position(mut self, position: i32) -> Self {
        self.position = position;
        self
    }

    /// Builds and inserts the playlist entry into the database.
    pub async fn build(self) -> Result<entity::playlist_track::Model, DbErr> {
        entity::playlist_track::ActiveModel {
            id: ActiveValue::Set(new_uuid()),
            playlist_id: ActiveValue::Set(self.playlist_id),
            track_id: ActiveValue::Set(self.track_id),
            position: ActiveValue::Set(self.position),
            added_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a playlist entry at a specific position.
pub async fn create_playlist_track(
    db: &DatabaseConnection,
    playlist_id: &str,
    track_id: &str,
    position: i32,
) -> Result<entity::playlist_track::Model, DbErr> {
    PlaylistTrackFactory::new(db, playlist_id, track_id)
        .position(position)
        .build()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{builder::TestBuilder, factory::helpers::create_playlist_with_entries};

    #[tokio::test]
    async fn creates_entries_in_position_order() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_playlist_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let (_, playlist, entries) = create_playlist_with_entries(db, 3).await?;

        assert_eq!(entries.len(), 3);
        for (index, entry) in entries.iter().enumerate() {
            assert_eq!(entry.playlist_id, playlist.id);
            assert_eq!(entry.position, index as i32);
        }

        Ok(())
    }

    #[tokio::test]
    async fn allows_same_track_twice() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_playlist_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let (_, playlist, entries) = create_playlist_with_entries(db, 1).await?;
        let duplicate = create_playlist_track(db, &playlist.id, &entries[0].track_id, 1).await?;

        assert_eq!(duplicate.track_id, entries[0].track_id);
        assert_ne!(duplicate.id, entries[0].id);

        Ok(())
    }
}
