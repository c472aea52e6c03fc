//! Storage sync report model.

use crate::model::sync::{SyncFailureDto, SyncReportDto};

/// Folder whose import failed during a sync run.
#[derive(Debug, Clone, PartialEq)]
pub struct SyncFailure {
    pub folder: String,
    pub error: String,
}

/// Counts of what a sync run changed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SyncReport {
    pub albums_added: u64,
    pub albums_removed: u64,
    pub tracks_added: u64,
    pub tracks_removed: u64,
    pub failures: Vec<SyncFailure>,
}

impl SyncReport {
    pub fn into_dto(self) -> SyncReportDto {
        SyncReportDto {
            albums_added: self.albums_added,
            albums_removed: self.albums_removed,
            tracks_added: self.tracks_added,
            tracks_removed: self.tracks_removed,
            failures: self
                .failures
                .into_iter()
                .map(|f| SyncFailureDto {
                    folder: f.folder,
                    error: f.error,
                })
                .collect(),
        }
    }
}
