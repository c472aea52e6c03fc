use entity::prelude::*;
use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Album, Track};
///
/// let test = TestBuilder::new()
///     .with_table(Album)
///     .with_table(Track)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,

    /// CREATE INDEX statements executed after all tables exist.
    ///
    /// Entity-derived schemas carry no composite indexes, so the `(container, position)`
    /// unique indexes from the migrations are mirrored here.
    indexes: Vec<IndexCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with empty table configuration
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            indexes: Vec::new(),
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables should be added in dependency order (tables with foreign
    /// keys after their referenced tables).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait` to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds an index statement executed after table creation.
    ///
    /// # Arguments
    /// - `index` - CREATE INDEX statement
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_index(mut self, index: IndexCreateStatement) -> Self {
        self.indexes.push(index);
        self
    }

    /// Adds the album and track tables along with the unique `(album_id, position)` index.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_library_tables(self) -> Self {
        self.with_table(Album).with_table(Track).with_index(
            Index::create()
                .name("idx_track_album_position")
                .table(Track)
                .col(entity::track::Column::AlbumId)
                .col(entity::track::Column::Position)
                .unique()
                .to_owned(),
        )
    }

    /// Adds everything needed for playlist operations.
    ///
    /// Includes users, the library tables, playlists and playlist entries along with the
    /// unique `(playlist_id, position)` index.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_playlist_tables(self) -> Self {
        self.with_table(User)
            .with_library_tables()
            .with_table(Playlist)
            .with_table(PlaylistTrack)
            .with_index(
                Index::create()
                    .name("idx_playlist_track_playlist_position")
                    .table(PlaylistTrack)
                    .col(entity::playlist_track::Column::PlaylistId)
                    .col(entity::playlist_track::Column::Position)
                    .unique()
                    .to_owned(),
            )
    }

    /// Adds every table in the schema.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_all_tables(self) -> Self {
        self.with_playlist_tables()
            .with_table(Comment)
            .with_table(GalleryItem)
    }

    /// Builds and initializes the test context with configured tables and indexes.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create the schema
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;
        setup.with_indexes(self.indexes).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
