//! Data transfer objects shared between the server API and the web client.
//!
//! Everything here compiles for both targets. OpenAPI schemas are derived only when the
//! `server` feature is enabled.

pub mod album;
pub mod api;
pub mod comment;
pub mod gallery;
pub mod playlist;
pub mod reorder;
pub mod sync;
pub mod track;
pub mod user;
