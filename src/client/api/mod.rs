#[cfg(feature = "web")]
pub mod album;
#[cfg(feature = "web")]
pub mod auth;
#[cfg(feature = "web")]
pub mod comment;
#[cfg(feature = "web")]
pub mod gallery;
#[cfg(feature = "web")]
pub mod helper;
#[cfg(feature = "web")]
pub mod playlist;
#[cfg(feature = "web")]
pub mod track;
#[cfg(feature = "web")]
pub mod user;
