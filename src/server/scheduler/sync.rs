use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{error::AppError, service::sync::SyncService, storage::ObjectStore};

/// Starts the background storage sync.
///
/// Runs the same reconciliation as `POST /api/admin/sync` on the given schedule and logs
/// the report. Failed runs are logged and retried at the next tick.
///
/// # Arguments
/// - `db` - Database connection
/// - `storage` - Object store to reconcile against
/// - `schedule` - 6-field cron expression, e.g. `0 0 4 * * *` for daily at 04:00
pub async fn start_scheduler(
    db: DatabaseConnection,
    storage: Arc<dyn ObjectStore>,
    schedule: &str,
) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async(schedule, move |_uuid, _lock| {
        let db = db.clone();
        let storage = storage.clone();

        Box::pin(async move {
            match SyncService::new(&db, storage.as_ref()).run().await {
                Ok(report) => tracing::info!(
                    "Scheduled sync finished: {} albums added, {} removed, {} tracks added, {} removed, {} failures",
                    report.albums_added,
                    report.albums_removed,
                    report.tracks_added,
                    report.tracks_removed,
                    report.failures.len()
                ),
                Err(e) => tracing::error!("Scheduled sync failed: {}", e),
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Storage sync scheduled with '{}'", schedule);

    Ok(())
}
