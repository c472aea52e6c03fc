use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower_sessions::{cookie::SameSite, session_store::ExpiredDeletion, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config,
    data::user::UserRepository,
    error::{storage::StorageError, AppError},
    service::admin::code::AdminCodeService,
    storage::{b2::B2Client, ObjectStore},
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then runs all pending SeaORM migrations so the schema is up to date
/// before any request is served.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session layer backed by the application database.
///
/// Sessions live in the same Sqlite file as the application data and expire after
/// 7 days of inactivity. A background task prunes expired sessions every minute.
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Layer to wrap the API router with
/// - `Err(AppError::InternalError)` - The session table could not be created
pub async fn connect_to_session(
    db: &DatabaseConnection,
    config: &Config,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());

    session_store
        .migrate()
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to migrate session store: {}", e)))?;

    tokio::task::spawn(
        session_store
            .clone()
            .continuously_delete_expired(tokio::time::Duration::from_secs(60)),
    );

    let session = SessionManagerLayer::new(session_store)
        .with_secure(config.session_secure)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(time::Duration::days(7)));

    Ok(session)
}

/// Builds the HTTP client used for the storage API.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .user_agent(concat!("bandvault/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(StorageError::from)?;

    Ok(client)
}

/// Creates the B2 object store for the configured bucket.
///
/// No request is made here; the client authorizes on first use.
pub fn setup_storage(config: &Config, http_client: reqwest::Client) -> Arc<dyn ObjectStore> {
    Arc::new(B2Client::new(
        http_client,
        config.b2_key_id.clone(),
        config.b2_application_key.clone(),
        config.b2_bucket_id.clone(),
        config.b2_bucket_name.clone(),
    ))
}

/// Logs a setup code when no admin account exists yet.
///
/// The code is entered on the `/setup` page to create the first admin and expires
/// after 10 minutes. Restarting the server issues a new one.
pub async fn check_for_admin(
    db: &DatabaseConnection,
    admin_code_service: &AdminCodeService,
) -> Result<(), AppError> {
    if UserRepository::new(db).admin_exists().await? {
        return Ok(());
    }

    let code = admin_code_service.generate().await;

    tracing::info!(
        "No admin account exists. Open /setup and enter this code within 10 minutes: {}",
        code
    );

    Ok(())
}
