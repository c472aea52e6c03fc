//! Object storage abstraction.
//!
//! Services talk to media storage through the `ObjectStore` trait so the Backblaze B2
//! client can be swapped for the in-memory store in tests. Keys are `/`-separated paths;
//! the first segment of an album track key is the album's folder name.

pub mod b2;
#[cfg(test)]
pub mod memory;

use async_trait::async_trait;
use axum::body::{Body, Bytes};

use crate::server::error::storage::StorageError;

/// Top-level folder holding gallery uploads. Never treated as an album.
pub const GALLERY_FOLDER: &str = "gallery";

/// Metadata of one stored object.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredObject {
    pub key: String,
    /// Provider-specific version identifier.
    pub file_id: String,
    pub size: u64,
    pub content_type: String,
}

/// Streamed download ready to be turned into an HTTP response.
pub struct MediaStream {
    /// 200 for a full body, 206 for a satisfied range, 416 for an unsatisfiable one.
    pub status: u16,
    pub content_type: Option<String>,
    pub content_length: Option<u64>,
    pub content_range: Option<String>,
    pub body: Body,
}

#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Lists top-level folder names without the trailing `/`.
    async fn list_folders(&self) -> Result<Vec<String>, StorageError>;

    /// Lists every object whose key starts with `prefix`, in key order.
    async fn list_files(&self, prefix: &str) -> Result<Vec<StoredObject>, StorageError>;

    /// Downloads a whole object into memory.
    async fn download(&self, key: &str) -> Result<Bytes, StorageError>;

    /// Opens a streamed download, forwarding an optional HTTP `Range` header value.
    async fn open_stream(&self, key: &str, range: Option<&str>)
        -> Result<MediaStream, StorageError>;

    async fn upload(
        &self,
        key: &str,
        content_type: &str,
        data: Bytes,
    ) -> Result<StoredObject, StorageError>;

    /// Deletes the object stored under `key`.
    ///
    /// # Returns
    /// - `Err(StorageError::NotFound)` - Nothing is stored under `key`
    async fn delete(&self, key: &str) -> Result<(), StorageError>;
}
