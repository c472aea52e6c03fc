//! In-memory `ObjectStore` used by service and controller tests.

use async_trait::async_trait;
use axum::body::{Body, Bytes};
use std::collections::BTreeMap;
use std::sync::Mutex;

use crate::server::{
    error::storage::StorageError,
    storage::{MediaStream, ObjectStore, StoredObject},
};

#[derive(Default)]
pub struct MemoryStore {
    objects: Mutex<BTreeMap<String, (String, Bytes)>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an object directly, bypassing `upload`.
    pub fn put(&self, key: &str, content_type: &str, data: impl Into<Bytes>) {
        self.objects.lock().unwrap().insert(
            key.to_string(),
            (content_type.to_string(), data.into()),
        );
    }

    /// Removes every object under `prefix`, simulating a folder deleted in the bucket.
    pub fn remove_prefix(&self, prefix: &str) {
        self.objects
            .lock()
            .unwrap()
            .retain(|key, _| !key.starts_with(prefix));
    }

    pub fn contains(&self, key: &str) -> bool {
        self.objects.lock().unwrap().contains_key(key)
    }

    pub fn keys(&self) -> Vec<String> {
        self.objects.lock().unwrap().keys().cloned().collect()
    }
}

#[async_trait]
impl ObjectStore for MemoryStore {
    async fn list_folders(&self) -> Result<Vec<String>, StorageError> {
        let mut folders: Vec<String> = self
            .objects
            .lock()
            .unwrap()
            .keys()
            .filter_map(|key| key.split_once('/').map(|(folder, _)| folder.to_string()))
            .collect();
        folders.dedup();
        Ok(folders)
    }

    async fn list_files(&self, prefix: &str) -> Result<Vec<StoredObject>, StorageError> {
        Ok(self
            .objects
            .lock()
            .unwrap()
            .iter()
            .filter(|(key, _)| key.starts_with(prefix))
            .map(|(key, (content_type, data))| StoredObject {
                key: key.clone(),
                file_id: format!("id-{}", key),
                size: data.len() as u64,
                content_type: content_type.clone(),
            })
            .collect())
    }

    async fn download(&self, key: &str) -> Result<Bytes, StorageError> {
        self.objects
            .lock()
            .unwrap()
            .get(key)
            .map(|(_, data)| data.clone())
            .ok_or_else(|| StorageError::NotFound(key.to_string()))
    }

    async fn open_stream(
        &self,
        key: &str,
        range: Option<&str>,
    ) -> Result<MediaStream, StorageError> {
        let (content_type, data) = self
            .objects
            .lock()
            .unwrap()
            .get(key)
            .cloned()
            .ok_or_else(|| StorageError::NotFound(key.to_string()))?;

        let total = data.len() as u64;
        let parsed = range.and_then(|range| parse_range(range, total));

        let (status, slice, content_range) = match (range, parsed) {
            (None, _) => (200, data, None),
            (Some(_), Some((start, end))) => (
                206,
                data.slice(start as usize..=end as usize),
                Some(format!("bytes {}-{}/{}", start, end, total)),
            ),
            (Some(_), None) => (416, Bytes::new(), Some(format!("bytes */{}", total))),
        };

        Ok(MediaStream {
            status,
            content_type: Some(content_type),
            content_length: Some(slice.len() as u64),
            content_range,
            body: Body::from(slice),
        })
    }

    async fn upload(
        &self,
        key: &str,
        content_type: &str,
        data: Bytes,
    ) -> Result<StoredObject, StorageError> {
        let size = data.len() as u64;
        self.put(key, content_type, data);

        Ok(StoredObject {
            key: key.to_string(),
            file_id: format!("id-{}", key),
            size,
            content_type: content_type.to_string(),
        })
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.objects
            .lock()
            .unwrap()
            .remove(key)
            .map(|_| ())
            .ok_or_else(|| StorageError::NotFound(key.to_string()))
    }
}

/// Parses a single `bytes=start-end` range, clamping `end` to the object size.
fn parse_range(range: &str, total: u64) -> Option<(u64, u64)> {
    let (start, end) = range.strip_prefix("bytes=")?.split_once('-')?;
    let start: u64 = start.parse().ok()?;
    let end: u64 = match end {
        "" => total.checked_sub(1)?,
        end => end.parse::<u64>().ok()?.min(total.checked_sub(1)?),
    };

    (start <= end).then_some((start, end))
}
