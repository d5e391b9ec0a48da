//! Supplement Store Handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::error::ApiError;
use crate::models::{Supplement, SupplementRequest};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_supplements).post(create_supplement))
        .route("/:id", put(update_supplement).delete(delete_supplement))
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub term: Option<String>,
}

/// GET /api/supplements?term= - Full list, or name/category search
pub async fn list_supplements(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Supplement>>, ApiError> {
    let supplements = match query.term.as_deref().filter(|t| !t.trim().is_empty()) {
        Some(term) => {
            let pattern = format!("%{}%", term);
            sqlx::query_as(
                "SELECT * FROM supplements WHERE name ILIKE $1 OR category ILIKE $1 ORDER BY id",
            )
            .bind(&pattern)
            .fetch_all(&state.db)
            .await?
        }
        None => {
            sqlx::query_as("SELECT * FROM supplements ORDER BY id")
                .fetch_all(&state.db)
                .await?
        }
    };

    Ok(Json(supplements))
}

/// POST /api/supplements
pub async fn create_supplement(
    State(state): State<Arc<AppState>>,
    Json(input): Json<SupplementRequest>,
) -> Result<Json<Supplement>, ApiError> {
    let supplement: Supplement = sqlx::query_as(
        r#"
        INSERT INTO supplements (name, category, description, price, stock)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        "#,
    )
    .bind(&input.name)
    .bind(&input.category)
    .bind(&input.description)
    .bind(input.price)
    .bind(input.stock)
    .fetch_one(&state.db)
    .await?;

    Ok(Json(supplement))
}

/// PUT /api/supplements/:id - Overwrite every field
pub async fn update_supplement(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(input): Json<SupplementRequest>,
) -> Result<Json<Supplement>, ApiError> {
    let supplement: Supplement = sqlx::query_as(
        r#"
        UPDATE supplements SET
            name = $1, category = $2, description = $3, price = $4, stock = $5
        WHERE id = $6
        RETURNING *
        "#,
    )
    .bind(&input.name)
    .bind(&input.category)
    .bind(&input.description)
    .bind(input.price)
    .bind(input.stock)
    .bind(id)
    .fetch_optional(&state.db)
    .await?
    .ok_or(ApiError::NotFound)?;

    Ok(Json(supplement))
}

/// DELETE /api/supplements/:id
pub async fn delete_supplement(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let result = sqlx::query("DELETE FROM supplements WHERE id = $1")
        .bind(id)
        .execute(&state.db)
        .await?;

    if result.rows_affected() == 0 {
        return Err(ApiError::NotFound);
    }

    Ok(StatusCode::NO_CONTENT)
}
