use async_trait::async_trait;
use axum::body::Bytes;
use sea_orm::ConnectionTrait;

use crate::server::{
    error::storage::StorageError,
    storage::{MediaStream, ObjectStore, StoredObject},
};

use super::*;

/// In-memory store whose listing fails for one folder.
struct FailingListStore {
    inner: MemoryStore,
    failing_prefix: String,
}

impl FailingListStore {
    fn new(inner: MemoryStore, failing_folder: &str) -> Self {
        Self {
            inner,
            failing_prefix: format!("{}/", failing_folder),
        }
    }
}

#[async_trait]
impl ObjectStore for FailingListStore {
    async fn list_folders(&self) -> Result<Vec<String>, StorageError> {
        self.inner.list_folders().await
    }

    async fn list_files(&self, prefix: &str) -> Result<Vec<StoredObject>, StorageError> {
        if prefix == self.failing_prefix {
            return Err(StorageError::Api {
                status: 503,
                code: "service_unavailable".to_string(),
                message: "listing unavailable".to_string(),
            });
        }
        self.inner.list_files(prefix).await
    }

    async fn download(&self, key: &str) -> Result<Bytes, StorageError> {
        self.inner.download(key).await
    }

    async fn open_stream(
        &self,
        key: &str,
        range: Option<&str>,
    ) -> Result<MediaStream, StorageError> {
        self.inner.open_stream(key, range).await
    }

    async fn upload(
        &self,
        key: &str,
        content_type: &str,
        data: Bytes,
    ) -> Result<StoredObject, StorageError> {
        self.inner.upload(key, content_type, data).await
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.inner.delete(key).await
    }
}

/// Tests that a folder whose listing fails is reported without stopping the run.
///
/// Expected: one failure for "Broken", "Demos" imported, no "Broken" album
#[tokio::test]
async fn reports_listing_failure_and_continues() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_playlist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let inner = seeded_store();
    inner.put("Broken/01 Lost.mp3", "audio/mpeg", &b"mp3"[..]);
    let storage = FailingListStore::new(inner, "Broken");

    let report = SyncService::new(db, &storage).run().await?;

    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].folder, "Broken");
    assert_eq!(report.albums_added, 1);
    assert_eq!(report.tracks_added, 2);

    let albums = AlbumRepository::new(db);
    assert!(albums.find_by_name("Demos").await?.is_some());
    assert!(albums.find_by_name("Broken").await?.is_none());

    Ok(())
}

/// Tests that a track insert failing midway rolls back the whole album.
///
/// The database rejects the second track of "Broken" after the album row and the
/// first track were already written inside the import transaction.
///
/// Expected: one failure for "Broken", no "Broken" album, "Demos" imported
#[tokio::test]
async fn rolls_back_album_when_track_insert_fails() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_playlist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    db.execute_unprepared(
        "CREATE TRIGGER reject_broken_track BEFORE INSERT ON track \
         WHEN NEW.file_key = 'Broken/02 Bad.mp3' \
         BEGIN SELECT RAISE(ABORT, 'track rejected'); END;",
    )
    .await?;

    let storage = seeded_store();
    storage.put("Broken/01 Good.mp3", "audio/mpeg", &b"mp3"[..]);
    storage.put("Broken/02 Bad.mp3", "audio/mpeg", &b"mp3"[..]);

    let report = SyncService::new(db, &storage).run().await?;

    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].folder, "Broken");
    assert_eq!(report.albums_added, 1);

    let names: Vec<String> = AlbumRepository::new(db)
        .get_all()
        .await?
        .into_iter()
        .map(|album| album.name)
        .collect();
    assert_eq!(names, vec!["Demos".to_string()]);

    Ok(())
}
