use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::album::AlbumRepository,
    error::AppError,
    model::sync::SyncReport,
    service::{album::AlbumService, sync::SyncService},
    storage::memory::MemoryStore,
};

mod failure;
mod import;
mod remove;

/// Bucket with one album folder, some non-track objects and a gallery upload.
fn seeded_store() -> MemoryStore {
    let storage = MemoryStore::new();
    storage.put("Demos/02 Second.flac", "audio/flac", &b"flac"[..]);
    storage.put("Demos/01 First.mp3", "audio/mpeg", &b"mp3"[..]);
    storage.put("Demos/cover.jpg", "image/jpeg", &b"jpg"[..]);
    storage.put("Demos/extra/03 Hidden.mp3", "audio/mpeg", &b"mp3"[..]);
    storage.put("gallery/abc.png", "image/png", &b"png"[..]);
    storage
}
