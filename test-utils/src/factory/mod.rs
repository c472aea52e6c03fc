//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories take the foreign keys they need as arguments
//! so the calling test stays in control of the entity graph.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let album = factory::album::create_album(&db).await?;
//!
//!     // Album with three tracks at positions 0, 1, 2
//!     let (album, tracks) = factory::helpers::create_album_with_tracks(&db, 3).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let user = factory::user::UserFactory::new(&db)
//!     .username("drummer")
//!     .admin(true)
//!     .build()
//!     .await?;
//!
//! let track = factory::track::TrackFactory::new(&db, &album.id)
//!     .title("Intro")
//!     .position(0)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `album` - Create album entities
//! - `track` - Create track entities belonging to an album
//! - `playlist` - Create playlist entities owned by a user
//! - `playlist_track` - Create playlist entries
//! - `comment` - Create album comments
//! - `gallery_item` - Create gallery items
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod album;
pub mod comment;
pub mod gallery_item;
pub mod helpers;
pub mod playlist;
pub mod playlist_track;
pub mod track;
pub mod user;

pub use album::{create_album, create_album_named};
pub use comment::create_comment;
pub use gallery_item::create_gallery_item;
pub use playlist::create_playlist;
pub use playlist_track::create_playlist_track;
pub use track::{create_track, create_track_at};
pub use user::{create_admin, create_user};
