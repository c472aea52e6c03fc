use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

/// Desired final position of one album track or playlist entry.
///
/// Reorder endpoints take a JSON array of these.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ReorderItemDto {
    pub id: String,
    pub position: i32,
}
