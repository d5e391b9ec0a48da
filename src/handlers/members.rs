//! Member Handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post, put},
    Json, Router,
};
use chrono::Utc;
use serde::Deserialize;
use std::sync::Arc;

use crate::error::ApiError;
use crate::models::{CreateMemberRequest, FeePackage, Member, UpdateMemberRequest};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_members).post(create_member))
        .route("/search", get(search_members))
        .route("/by-email", get(get_member_by_email))
        .route("/:id", put(update_member).delete(delete_member))
        .route(
            "/:member_id/assign-package/:package_id",
            post(assign_package),
        )
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub term: String,
}

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

/// GET /api/members - List all members
pub async fn list_members(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Member>>, ApiError> {
    let members = sqlx::query_as("SELECT * FROM members ORDER BY id")
        .fetch_all(&state.db)
        .await?;
    Ok(Json(members))
}

/// GET /api/members/search?term= - Case-insensitive name/email search
pub async fn search_members(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<Member>>, ApiError> {
    let pattern = format!("%{}%", query.term);
    let members =
        sqlx::query_as("SELECT * FROM members WHERE name ILIKE $1 OR email ILIKE $1 ORDER BY id")
            .bind(&pattern)
            .fetch_all(&state.db)
            .await?;
    Ok(Json(members))
}

/// GET /api/members/by-email?email=
pub async fn get_member_by_email(
    State(state): State<Arc<AppState>>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<Member>, ApiError> {
    let member: Member = sqlx::query_as("SELECT * FROM members WHERE email = $1")
        .bind(&query.email)
        .fetch_optional(&state.db)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(member))
}

/// POST /api/members - Create a member
pub async fn create_member(
    State(state): State<Arc<AppState>>,
    Json(input): Json<CreateMemberRequest>,
) -> Result<Json<Member>, ApiError> {
    tracing::info!(email = %input.email, "Creating member");

    let member: Member = sqlx::query_as(
        r#"
        INSERT INTO members (name, email, phone, address, join_date, status, role)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        "#,
    )
    .bind(&input.name)
    .bind(&input.email)
    .bind(&input.phone)
    .bind(&input.address)
    .bind(input.join_date.unwrap_or_else(|| Utc::now().date_naive()))
    .bind(input.status.as_deref().unwrap_or("active"))
    .bind(input.role.as_deref().unwrap_or("member"))
    .fetch_one(&state.db)
    .await?;

    Ok(Json(member))
}

/// PUT /api/members/:id - Overwrite profile fields
pub async fn update_member(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(input): Json<UpdateMemberRequest>,
) -> Result<Json<Member>, ApiError> {
    let member: Member = sqlx::query_as(
        r#"
        UPDATE members SET
            name = $1, email = $2, phone = $3, address = $4,
            join_date = $5, status = $6, updated_at = NOW()
        WHERE id = $7
        RETURNING *
        "#,
    )
    .bind(&input.name)
    .bind(&input.email)
    .bind(&input.phone)
    .bind(&input.address)
    .bind(input.join_date)
    .bind(&input.status)
    .bind(id)
    .fetch_optional(&state.db)
    .await?
    .ok_or(ApiError::NotFound)?;

    Ok(Json(member))
}

/// DELETE /api/members/:id
pub async fn delete_member(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let result = sqlx::query("DELETE FROM members WHERE id = $1")
        .bind(id)
        .execute(&state.db)
        .await?;

    if result.rows_affected() == 0 {
        return Err(ApiError::NotFound);
    }

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/members/:member_id/assign-package/:package_id
///
/// Snapshots the package onto the member rather than referencing it, so
/// later package edits do not change what the member was assigned.
pub async fn assign_package(
    State(state): State<Arc<AppState>>,
    Path((member_id, package_id)): Path<(i64, i64)>,
) -> Result<impl IntoResponse, ApiError> {
    let package: FeePackage = sqlx::query_as("SELECT * FROM fee_packages WHERE id = $1")
        .bind(package_id)
        .fetch_optional(&state.db)
        .await?
        .ok_or(ApiError::NotFound)?;

    let member: Member = sqlx::query_as(
        r#"
        UPDATE members SET
            fee_package_id = $2, fee_package_name = $3, fee_package_amount = $4,
            assigned_at = NOW(), updated_at = NOW()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(member_id)
    .bind(package.id)
    .bind(&package.name)
    .bind(package.amount.unwrap_or(0.0))
    .fetch_optional(&state.db)
    .await?
    .ok_or(ApiError::NotFound)?;

    Ok(Json(member))
}
