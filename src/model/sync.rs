use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

/// Outcome of reconciling storage folders with the album table.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct SyncReportDto {
    pub albums_added: u64,
    pub albums_removed: u64,
    pub tracks_added: u64,
    pub tracks_removed: u64,
    pub failures: Vec<SyncFailureDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct SyncFailureDto {
    pub folder: String,
    pub error: String,
}
