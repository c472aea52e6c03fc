//! SeaORM entity definitions for the band archive.
//!
//! Each module mirrors one table created by the `migration` crate. Primary keys are
//! server-generated UUID strings.

pub mod prelude;

pub mod album;
pub mod comment;
pub mod gallery_item;
pub mod playlist;
pub mod playlist_track;
pub mod track;
pub mod user;
