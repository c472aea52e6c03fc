//! Application state shared across all request handlers.
//!
//! The state is built once during startup and cloned into every handler through
//! Axum's state extraction. It holds:
//! - the database connection pool
//! - the object store holding album folders and gallery uploads
//! - the admin setup code service

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::{service::admin::code::AdminCodeService, storage::ObjectStore};

/// Application state containing shared resources and dependencies.
///
/// Every field is cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `Arc<dyn ObjectStore>` is reference-counted, so clones share the B2 auth cache
/// - `AdminCodeService` keeps its code behind an `Arc`
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Media storage. Services borrow it as `&dyn ObjectStore`.
    pub storage: Arc<dyn ObjectStore>,

    /// Holds the one-time code for creating the first admin.
    pub admin_code_service: AdminCodeService,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `storage` - Object store backing albums and the gallery
    /// - `admin_code_service` - Service holding the admin setup code
    pub fn new(
        db: DatabaseConnection,
        storage: Arc<dyn ObjectStore>,
        admin_code_service: AdminCodeService,
    ) -> Self {
        Self {
            db,
            storage,
            admin_code_service,
        }
    }
}
