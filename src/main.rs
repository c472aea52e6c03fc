mod client;
mod model;

#[cfg(feature = "server")]
mod server;

use client::App;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use dioxus_logger::tracing;
        use tower_http::trace::TraceLayer;

        use crate::server::{
            config::Config, scheduler, service::admin::code::AdminCodeService, startup,
            state::AppState,
        };

        dotenvy::dotenv().ok();
        let config = Config::from_env()?;

        let db = startup::connect_to_database(&config).await?;
        let session = startup::connect_to_session(&db, &config).await?;
        let http_client = startup::setup_reqwest_client()?;
        let storage = startup::setup_storage(&config, http_client);

        let admin_code_service = AdminCodeService::new();

        tracing::info!("Starting server");

        // Check for admin users and log a setup code if none exist
        startup::check_for_admin(&db, &admin_code_service).await?;

        if let Some(schedule) = config.sync_schedule.clone() {
            let scheduler_db = db.clone();
            let scheduler_storage = storage.clone();
            tokio::spawn(async move {
                if let Err(e) =
                    scheduler::sync::start_scheduler(scheduler_db, scheduler_storage, &schedule)
                        .await
                {
                    tracing::error!("Storage sync scheduler error: {}", e);
                }
            });
        }

        let mut router = dioxus::server::router(App);
        let server_routes = server::router::router()
            .with_state(AppState::new(db, storage, admin_code_service))
            .layer(session)
            .layer(TraceLayer::new_for_http());
        router = router.merge(server_routes);

        Ok(router)
    })
}
