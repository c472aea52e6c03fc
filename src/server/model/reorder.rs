//! Reorder request and plan types shared by album and playlist reordering.

use crate::model::reorder::ReorderItemDto;

/// Requested final position for one container member.
#[derive(Debug, Clone, PartialEq)]
pub struct ReorderItem {
    pub id: String,
    pub position: i32,
}

impl ReorderItem {
    pub fn from_dto(dto: ReorderItemDto) -> Self {
        Self {
            id: dto.id,
            position: dto.position,
        }
    }
}

/// Validated two-phase position update for one container.
///
/// `staging` moves every named member to a distinct negative position; `targets` then
/// writes the requested positions. Both lists name the same members in the same order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PositionPlan {
    pub staging: Vec<(String, i32)>,
    pub targets: Vec<(String, i32)>,
}

impl PositionPlan {
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}
