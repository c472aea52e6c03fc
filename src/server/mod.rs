//! Server-side API backend and business logic.
//!
//! Backend of the band archive: albums, tracks, playlists, comments and the photo/video
//! gallery. Axum serves the JSON API, SeaORM stores metadata in SQLite and a Backblaze
//! B2 bucket holds every media file.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Business logic orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Session access and authentication guards
//! - **Storage** (`storage/`) - Object store trait and its B2 implementation
//!
//! # Infrastructure
//!
//! Supporting modules provide application infrastructure:
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (database, object store, setup code)
//! - **Startup** (`startup`) - Initialization of database, sessions, and services
//! - **Router** (`router`) - Axum route configuration
//! - **Docs** (`docs`) - OpenAPI document served through Swagger UI
//! - **Scheduler** (`scheduler/`) - Optional cron job that syncs the database with storage
//!
//! # Media Flow
//!
//! Audio and gallery files never live on the server's disk:
//!
//! 1. Uploads arrive as multipart bodies and are pushed to the bucket under
//!    `{album}/{file}` or `gallery/{id}.{ext}`
//! 2. The database row is written afterwards; a failed insert removes the object again
//! 3. Playback and thumbnails go through `/api/media/{key}`, which streams the object
//!    back with its range and caching headers
//! 4. Folders created directly in the bucket are picked up by a storage sync
//!
//! # Feature Gates
//!
//! This module is only available with the `server` feature flag enabled.

pub mod config;
pub mod controller;
pub mod data;
pub mod docs;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
pub mod storage;
pub mod util;
