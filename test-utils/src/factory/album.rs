//! Album factory for creating test album entities.

use crate::factory::helpers::{new_uuid, next_id};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test albums with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let album = AlbumFactory::new(&db)
///     .name("2024 Demo")
///     .title("Demo Tape")
///     .year(2024)
///     .build()
///     .await?;
/// ```
pub struct AlbumFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    title: String,
    artist: Option<String>,
    year: Option<i32>,
    description: Option<String>,
}

impl<'a> AlbumFactory<'a> {
    /// Creates a new AlbumFactory with default values.
    ///
    /// Defaults:
    /// - name: `"album_{id}"`
    /// - title: `"Album {id}"`
    /// - artist, year, description: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("album_{}", id),
            title: format!("Album {}", id),
            artist: None,
            year: None,
            description: None,
        }
    }

    /// Sets the storage folder name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the display title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn artist(mut self, artist: impl Into<String>) -> Self {
        self.artist = Some(artist.into());
        self
    }

    pub fn year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builds and inserts the album entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::album::Model)` - Created album entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::album::Model, DbErr> {
        entity::album::ActiveModel {
            id: ActiveValue::Set(new_uuid()),
            name: ActiveValue::Set(self.name),
            title: ActiveValue::Set(self.title),
            artist: ActiveValue::Set(self.artist),
            year: ActiveValue::Set(self.year),
            description: ActiveValue::Set(self.description),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an album with default values.
pub async fn create_album(db: &DatabaseConnection) -> Result<entity::album::Model, DbErr> {
    AlbumFactory::new(db).build().await
}

/// Creates an album backed by the given storage folder name.
pub async fn create_album_named(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::album::Model, DbErr> {
    let name = name.into();
    AlbumFactory::new(db).title(name.clone()).name(name).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_album_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(Album).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let album = create_album(db).await?;

        assert!(album.name.starts_with("album_"));
        assert!(album.artist.is_none());
        assert!(album.year.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn creates_album_with_custom_values() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(Album).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let album = AlbumFactory::new(db)
            .name("2024 Demo")
            .title("Demo Tape")
            .artist("The Band")
            .year(2024)
            .build()
            .await?;

        assert_eq!(album.name, "2024 Demo");
        assert_eq!(album.title, "Demo Tape");
        assert_eq!(album.artist.as_deref(), Some("The Band"));
        assert_eq!(album.year, Some(2024));

        Ok(())
    }

    #[tokio::test]
    async fn rejects_duplicate_album_name() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(Album).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        create_album_named(db, "Live").await?;
        let result = create_album_named(db, "Live").await;

        assert!(result.is_err());

        Ok(())
    }
}
