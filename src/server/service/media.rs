//! Media proxy service.
//!
//! Streams stored objects to members without exposing storage credentials. The
//! `Range` header is passed through so browsers can seek in audio and video.

use crate::server::{
    error::AppError,
    storage::{MediaStream, ObjectStore},
};

/// Checks that a requested key is a plain relative object path.
fn validate_key(key: &str) -> Result<(), AppError> {
    let invalid = key.is_empty()
        || key.starts_with('/')
        || key
            .split('/')
            .any(|segment| segment.is_empty() || segment == "." || segment == "..");

    if invalid {
        return Err(AppError::BadRequest("Invalid media key".to_string()));
    }
    Ok(())
}

pub struct MediaService<'a> {
    pub storage: &'a dyn ObjectStore,
}

impl<'a> MediaService<'a> {
    pub fn new(storage: &'a dyn ObjectStore) -> Self {
        Self { storage }
    }

    /// Opens a streamed download of `key`.
    ///
    /// # Returns
    /// - `Ok(MediaStream)` - Status 200, 206 or 416 with the body and content headers
    /// - `Err(AppError::BadRequest)` - Malformed key
    /// - `Err(AppError::StorageErr)` - Object missing (404) or storage failure
    pub async fn open(&self, key: &str, range: Option<&str>) -> Result<MediaStream, AppError> {
        validate_key(key)?;
        Ok(self.storage.open_stream(key, range).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::storage::memory::MemoryStore;

    #[test]
    fn rejects_traversal_and_empty_segments() {
        assert!(validate_key("Album/01 Intro.mp3").is_ok());
        assert!(validate_key("").is_err());
        assert!(validate_key("/Album/a.mp3").is_err());
        assert!(validate_key("Album/../secret").is_err());
        assert!(validate_key("Album//a.mp3").is_err());
    }

    #[tokio::test]
    async fn streams_requested_range() {
        let store = MemoryStore::new();
        store.put("Album/a.mp3", "audio/mpeg", &b"0123456789"[..]);
        let service = MediaService::new(&store);

        let stream = service.open("Album/a.mp3", Some("bytes=2-5")).await.unwrap();

        assert_eq!(stream.status, 206);
        assert_eq!(stream.content_length, Some(4));
        assert_eq!(stream.content_range.as_deref(), Some("bytes 2-5/10"));
    }

    #[tokio::test]
    async fn missing_object_is_storage_not_found() {
        let store = MemoryStore::new();
        let service = MediaService::new(&store);

        let result = service.open("Album/missing.mp3", None).await;

        assert!(matches!(
            result,
            Err(AppError::StorageErr(crate::server::error::storage::StorageError::NotFound(_)))
        ));
    }
}
