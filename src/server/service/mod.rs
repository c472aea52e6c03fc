//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing validation and access rules
//! - **Orchestration**: Coordinating repository calls with the object store
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Running multi-table changes such as reorders atomically

pub mod admin;
pub mod album;
pub mod auth;
pub mod comment;
pub mod gallery;
pub mod media;
pub mod metadata;
pub mod playlist;
pub mod reorder;
pub mod sync;
pub mod track;
pub mod user;

#[cfg(test)]
mod test;
