//! Validation and planning for container reorders.
//!
//! A reorder request names some members of one container (an album or a playlist)
//! together with their desired positions. Planning turns that request into a
//! `PositionPlan` which `data::position::apply_plan` executes in two phases: every
//! named member first moves to a negative staging position, then to its target.
//! Positions at rest are never negative, so staging values can neither collide with
//! each other nor with members that keep their position.

use std::collections::{HashMap, HashSet};

use crate::server::{
    error::AppError,
    model::reorder::{PositionPlan, ReorderItem},
};

/// Highest position a reorder may assign. One slot above it stays free so that the
/// next append still has a non-negative position to go to.
pub const MAX_POSITION: i32 = i32::MAX - 1;

/// Builds the two-phase update plan for a reorder request.
///
/// Validation happens entirely up front so nothing is written for a rejected
/// request. The final positions of the whole container (requested positions for
/// named members, current positions for everyone else) must be pairwise distinct.
///
/// # Arguments
/// - `current` - Every member of the container as `(id, position)`, ordered by position
/// - `request` - Requested final positions
///
/// # Returns
/// - `Ok(PositionPlan)` - Staging and target positions; empty for an empty request
/// - `Err(AppError::BadRequest)` - Duplicate id, position outside `0..=MAX_POSITION`,
///   unknown member, or conflicting final positions
pub fn plan_reorder(
    current: &[(String, i32)],
    request: &[ReorderItem],
) -> Result<PositionPlan, AppError> {
    if request.is_empty() {
        return Ok(PositionPlan::default());
    }

    let ranks: HashMap<&str, usize> = current
        .iter()
        .enumerate()
        .map(|(rank, (id, _))| (id.as_str(), rank))
        .collect();

    let mut requested: HashMap<&str, i32> = HashMap::with_capacity(request.len());
    for item in request {
        if item.position < 0 {
            return Err(AppError::BadRequest(format!(
                "Position for {} must not be negative",
                item.id
            )));
        }
        if item.position > MAX_POSITION {
            return Err(AppError::BadRequest(format!(
                "Position for {} must be at most {}",
                item.id, MAX_POSITION
            )));
        }
        if !ranks.contains_key(item.id.as_str()) {
            return Err(AppError::BadRequest(format!(
                "{} is not a member of this container",
                item.id
            )));
        }
        if requested.insert(item.id.as_str(), item.position).is_some() {
            return Err(AppError::BadRequest(format!(
                "{} appears more than once",
                item.id
            )));
        }
    }

    let mut taken = HashSet::with_capacity(current.len());
    for (id, position) in current {
        let position = requested.get(id.as_str()).copied().unwrap_or(*position);
        if !taken.insert(position) {
            return Err(AppError::BadRequest(format!(
                "More than one member would end up at position {}",
                position
            )));
        }
    }

    let staging = request
        .iter()
        .map(|item| {
            let rank = ranks[item.id.as_str()] as i32;
            (item.id.clone(), -(rank + 1))
        })
        .collect();
    let targets = request
        .iter()
        .map(|item| (item.id.clone(), item.position))
        .collect();

    Ok(PositionPlan { staging, targets })
}
