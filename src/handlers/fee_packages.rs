//! Fee Package Handlers

use axum::{extract::State, routing::get, Json, Router};
use std::sync::Arc;
use validator::Validate;

use crate::error::ApiError;
use crate::models::{CreateFeePackageRequest, FeePackage};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/", get(list_packages).post(create_package))
}

/// GET /api/fee-packages
pub async fn list_packages(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<FeePackage>>, ApiError> {
    let packages = sqlx::query_as("SELECT * FROM fee_packages ORDER BY id")
        .fetch_all(&state.db)
        .await?;
    Ok(Json(packages))
}

/// POST /api/fee-packages - Name must be unique
pub async fn create_package(
    State(state): State<Arc<AppState>>,
    Json(input): Json<CreateFeePackageRequest>,
) -> Result<Json<FeePackage>, ApiError> {
    input
        .validate()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let existing: Option<(i64,)> = sqlx::query_as("SELECT id FROM fee_packages WHERE name = $1")
        .bind(&input.name)
        .fetch_optional(&state.db)
        .await?;

    if existing.is_some() {
        return Err(ApiError::BadRequest(
            "Fee package with that name already exists".to_string(),
        ));
    }

    let package: FeePackage = sqlx::query_as(
        r#"
        INSERT INTO fee_packages (name, amount, duration_months, description)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(&input.name)
    .bind(input.amount)
    .bind(input.duration_months)
    .bind(&input.description)
    .fetch_one(&state.db)
    .await?;

    Ok(Json(package))
}
