//! Diet Plan Handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use std::sync::Arc;

use crate::error::ApiError;
use crate::models::{DietPlan, DietPlanRequest};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_plans).post(create_plan))
        .route("/:id", put(update_plan).delete(delete_plan))
}

/// GET /api/diet-plans
pub async fn list_plans(State(state): State<Arc<AppState>>) -> Result<Json<Vec<DietPlan>>, ApiError> {
    let plans = sqlx::query_as("SELECT * FROM diet_plans ORDER BY id")
        .fetch_all(&state.db)
        .await?;
    Ok(Json(plans))
}

/// POST /api/diet-plans
pub async fn create_plan(
    State(state): State<Arc<AppState>>,
    Json(input): Json<DietPlanRequest>,
) -> Result<Json<DietPlan>, ApiError> {
    let plan: DietPlan = sqlx::query_as(
        r#"
        INSERT INTO diet_plans (title, category, description, meal_plan, calories, duration_weeks)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        "#,
    )
    .bind(&input.title)
    .bind(&input.category)
    .bind(&input.description)
    .bind(&input.meal_plan)
    .bind(input.calories)
    .bind(input.duration_weeks)
    .fetch_one(&state.db)
    .await?;

    Ok(Json(plan))
}

/// PUT /api/diet-plans/:id - Overwrite every field
pub async fn update_plan(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(input): Json<DietPlanRequest>,
) -> Result<Json<DietPlan>, ApiError> {
    let plan: DietPlan = sqlx::query_as(
        r#"
        UPDATE diet_plans SET
            title = $1, category = $2, description = $3, meal_plan = $4,
            calories = $5, duration_weeks = $6, updated_at = NOW()
        WHERE id = $7
        RETURNING *
        "#,
    )
    .bind(&input.title)
    .bind(&input.category)
    .bind(&input.description)
    .bind(&input.meal_plan)
    .bind(input.calories)
    .bind(input.duration_weeks)
    .bind(id)
    .fetch_optional(&state.db)
    .await?
    .ok_or(ApiError::NotFound)?;

    Ok(Json(plan))
}

/// DELETE /api/diet-plans/:id
pub async fn delete_plan(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let result = sqlx::query("DELETE FROM diet_plans WHERE id = $1")
        .bind(id)
        .execute(&state.db)
        .await?;

    if result.rows_affected() == 0 {
        return Err(ApiError::NotFound);
    }

    Ok(StatusCode::NO_CONTENT)
}
