//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
///
/// Primary keys are UUIDs, but names and usernames carry unique constraints and
/// default track positions must not collide within an album.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Generates a fresh UUID string for use as a primary key.
pub fn new_uuid() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Creates an album with `count` tracks at positions `0..count`.
///
/// Tracks are titled `"Track 1"`, `"Track 2"`, ... in position order.
///
/// # Arguments
/// - `db` - Database connection
/// - `count` - Number of tracks to create
///
/// # Returns
/// - `Ok((album, tracks))` - Created album and its tracks ordered by position
/// - `Err(DbErr)` - Database error during creation
pub async fn create_album_with_tracks(
    db: &DatabaseConnection,
    count: i32,
) -> Result<(entity::album::Model, Vec<entity::track::Model>), DbErr> {
    let album = crate::factory::album::create_album(db).await?;

    let mut tracks = Vec::with_capacity(count as usize);
    for position in 0..count {
        let track = crate::factory::track::TrackFactory::new(db, &album.id)
            .title(format!("Track {}", position + 1))
            .position(position)
            .build()
            .await?;
        tracks.push(track);
    }

    Ok((album, tracks))
}

/// Creates a playlist owned by a new user holding `count` entries at positions `0..count`.
///
/// The entries point at tracks of a freshly created album. Requires the tables added by
/// `TestBuilder::with_playlist_tables()`.
///
/// # Arguments
/// - `db` - Database connection
/// - `count` - Number of playlist entries to create
///
/// # Returns
/// - `Ok((owner, playlist, entries))` - Owner, playlist and its entries ordered by position
/// - `Err(DbErr)` - Database error during creation
pub async fn create_playlist_with_entries(
    db: &DatabaseConnection,
    count: i32,
) -> Result<
    (
        entity::user::Model,
        entity::playlist::Model,
        Vec<entity::playlist_track::Model>,
    ),
    DbErr,
> {
    let owner = crate::factory::user::create_user(db).await?;
    let playlist = crate::factory::playlist::create_playlist(db, &owner.id).await?;
    let (_, tracks) = create_album_with_tracks(db, count).await?;

    let mut entries = Vec::with_capacity(tracks.len());
    for (position, track) in tracks.iter().enumerate() {
        let entry = crate::factory::playlist_track::PlaylistTrackFactory::new(
            db,
            &playlist.id,
            &track.id,
        )
        .position(position as i32)
        .build()
        .await?;
        entries.push(entry);
    }

    Ok((owner, playlist, entries))
}
