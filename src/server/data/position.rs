//! Shared execution of two-phase position plans.

use sea_orm::{
    sea_query::Expr, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::server::model::reorder::PositionPlan;

/// Position for a member appended after `last`, the container's highest position.
///
/// # Returns
/// - `Some(0)` - Empty container
/// - `Some(last + 1)` - One past the highest position
/// - `None` - `last` is already `i32::MAX`; the container has no position left
pub fn position_after(last: Option<i32>) -> Option<i32> {
    match last {
        Some(position) => position.checked_add(1),
        None => Some(0),
    }
}

/// Writes a position plan for one container, staging first and targets second.
///
/// Every update is scoped to the container so rows of other containers are never
/// touched. Each statement must affect exactly one row; otherwise the member vanished
/// between validation and update and the caller's transaction should be rolled back.
///
/// # Arguments
/// - `db` - Connection or transaction to run the updates on
/// - `container_column` - Foreign key column naming the container (`album_id`, `playlist_id`)
/// - `container_id` - Id of the container being reordered
/// - `id_column` - Primary key column of the member table
/// - `position_column` - Position column of the member table
/// - `plan` - Validated staging and target positions
///
/// # Returns
/// - `Ok(())` - All rows updated
/// - `Err(DbErr::RecordNotUpdated)` - A member could not be found in the container
/// - `Err(DbErr)` - Any other database error, including unique index violations
pub async fn apply_plan<E, C>(
    db: &C,
    container_column: E::Column,
    container_id: &str,
    id_column: E::Column,
    position_column: E::Column,
    plan: &PositionPlan,
) -> Result<(), DbErr>
where
    E: EntityTrait,
    C: ConnectionTrait,
{
    for phase in [&plan.staging, &plan.targets] {
        for (id, position) in phase {
            let result = E::update_many()
                .col_expr(position_column, Expr::value(*position))
                .filter(id_column.eq(id.as_str()))
                .filter(container_column.eq(container_id))
                .exec(db)
                .await?;

            if result.rows_affected != 1 {
                return Err(DbErr::RecordNotUpdated);
            }
        }
    }

    Ok(())
}
