//! Server-side domain models and operation parameters.
//!
//! Repositories convert SeaORM entity rows into these types with `from_entity()`, and
//! controllers convert them into shared DTOs with `into_dto()`. Entity models never
//! leave the data layer and DTOs never reach it.

pub mod album;
pub mod comment;
pub mod gallery;
pub mod playlist;
pub mod reorder;
pub mod sync;
pub mod track;
pub mod upload;
pub mod user;
