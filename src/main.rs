//! Service entrypoint: configuration, database, schema, seed data, serve.

use std::sync::Arc;

use gym_backoffice::{config::AppConfig, create_router, db, seed, AppState};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();
    if let Err(err) = config.validate() {
        tracing::error!(error = %err, "Invalid configuration");
        std::process::exit(1);
    }

    let pool = db::connect(&config)
        .await
        .expect("Failed to connect to database");

    db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");

    seed::seed_defaults(&pool)
        .await
        .expect("Failed to seed default data");

    let state = Arc::new(AppState::new(pool));
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .expect("Failed to bind listen address");

    tracing::info!(addr = %config.bind_addr, "Gym back office listening");

    axum::serve(listener, app)
        .await
        .expect("Server error");
}
