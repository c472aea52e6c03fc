//! HTTP request handlers for the JSON API.
//!
//! Controllers check access with `AuthGuard`, convert DTOs into service parameters, call
//! the service layer and convert the resulting domain models back into DTOs. Every
//! handler carries a `utoipa::path` attribute collected by `server::docs::ApiDoc`.

pub mod admin;
pub mod album;
pub mod auth;
pub mod comment;
pub mod gallery;
pub mod media;
pub mod param;
pub mod playlist;
pub mod track;
pub mod upload;
