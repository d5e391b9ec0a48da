//! Gym Management Back Office
//!
//! REST API over PostgreSQL for a gym's day-to-day administration:
//! member records, fee packages, billing, supplements inventory, diet
//! plans, notifications, reports, and the login/signup flow with its
//! activity audit trail.

pub mod audit;
pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod seed;

use axum::Router;
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::audit::ActivityLogger;
use crate::auth::AuthService;

/// Shared application state
pub struct AppState {
    pub db: PgPool,
    pub auth: AuthService,
}

impl AppState {
    pub fn new(db: PgPool) -> Self {
        let audit = ActivityLogger::new(db.clone());
        let auth = AuthService::new(db.clone(), audit);
        Self { db, auth }
    }
}

/// Build the full API router. The admin frontend is served from another
/// origin, so CORS is wide open like the rest of the API surface expects.
pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .nest("/api/auth", auth::handlers::routes())
        .nest("/api/members", handlers::members::routes())
        .nest("/api/bills", handlers::bills::routes())
        .nest("/api/fee-packages", handlers::fee_packages::routes())
        .nest("/api/supplements", handlers::supplements::routes())
        .nest("/api/diet-plans", handlers::diet_plans::routes())
        .nest("/api/notifications", handlers::notifications::routes())
        .nest("/api/reports", handlers::reports::routes())
        .layer(cors)
        .with_state(state)
}
