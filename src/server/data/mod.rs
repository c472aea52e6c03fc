//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//!
//! Repositories for the album library (albums, tracks, playlists and playlist entries) are
//! generic over `ConnectionTrait` so services can run several of them inside one
//! `DatabaseTransaction`. Users, comments and gallery items only ever touch a single table
//! per operation and take the `DatabaseConnection` directly.

pub mod album;
pub mod comment;
pub mod gallery;
pub mod playlist;
pub mod playlist_track;
pub mod position;
pub mod track;
pub mod user;

#[cfg(test)]
mod test;
