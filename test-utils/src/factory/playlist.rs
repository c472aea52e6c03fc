//! Playlist factory for creating test playlist entities.

use crate::factory::helpers::{new_uuid, next_id};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test playlists owned by a user.
pub struct PlaylistFactory<'a> {
    db: &'a DatabaseConnection,
    owner_id: String,
    name: String,
    description: Option<String>,
}

impl<'a> PlaylistFactory<'a> {
    /// Creates a new PlaylistFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Playlist {id}"`
    /// - description: `None`
    pub fn new(db: &'a DatabaseConnection, owner_id: &str) -> Self {
        let id = next_id();
        Self {
            db,
            owner_id: owner_id.to_string(),
            name: format!("Playlist {}", id),
            description: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builds and inserts the playlist entity into the database.
    pub async fn build(self) -> Result<entity::playlist::Model, DbErr> {
        entity::playlist::ActiveModel {
            id: ActiveValue::Set(new_uuid()),
            owner_id: ActiveValue::Set(self.owner_id),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a playlist with default values owned by `owner_id`.
pub async fn create_playlist(
    db: &DatabaseConnection,
    owner_id: &str,
) -> Result<entity::playlist::Model, DbErr> {
    PlaylistFactory::new(db, owner_id).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{builder::TestBuilder, factory::user::create_user};

    #[tokio::test]
    async fn creates_playlist_for_owner() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_playlist_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let owner = create_user(db).await?;
        let playlist = PlaylistFactory::new(db, &owner.id)
            .name("Road trip")
            .description("Long drives")
            .build()
            .await?;

        assert_eq!(playlist.owner_id, owner.id);
        assert_eq!(playlist.name, "Road trip");
        assert_eq!(playlist.description.as_deref(), Some("Long drives"));

        Ok(())
    }
}
