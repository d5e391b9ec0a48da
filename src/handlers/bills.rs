//! Bill Handlers
//!
//! Responses always carry the owning member's name, so every read joins
//! `members`.

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::sync::Arc;
use validator::Validate;

use crate::error::ApiError;
use crate::models::{BillResponse, CreateBillRequest};
use crate::AppState;

const BILL_SELECT: &str = r#"
    SELECT b.id, b.member_id, m.name AS member_name, b.amount,
           b.description, b.due_date, b.status, b.created_at
    FROM bills b
    JOIN members m ON m.id = b.member_id
"#;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_bills).post(create_bill))
        .route("/member/:member_id", get(list_bills_for_member))
        .route("/search", get(search_bills))
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub term: String,
}

/// GET /api/bills
pub async fn list_bills(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<BillResponse>>, ApiError> {
    let bills = sqlx::query_as(&format!("{} ORDER BY b.id", BILL_SELECT))
        .fetch_all(&state.db)
        .await?;
    Ok(Json(bills))
}

/// GET /api/bills/member/:member_id
pub async fn list_bills_for_member(
    State(state): State<Arc<AppState>>,
    Path(member_id): Path<i64>,
) -> Result<Json<Vec<BillResponse>>, ApiError> {
    let bills = sqlx::query_as(&format!("{} WHERE b.member_id = $1 ORDER BY b.id", BILL_SELECT))
        .bind(member_id)
        .fetch_all(&state.db)
        .await?;
    Ok(Json(bills))
}

/// GET /api/bills/search?term= - Description substring search
pub async fn search_bills(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<BillResponse>>, ApiError> {
    let pattern = format!("%{}%", query.term);
    let bills = sqlx::query_as(&format!(
        "{} WHERE b.description ILIKE $1 ORDER BY b.id",
        BILL_SELECT
    ))
    .bind(&pattern)
    .fetch_all(&state.db)
    .await?;
    Ok(Json(bills))
}

/// POST /api/bills - Create a bill for an existing member
pub async fn create_bill(
    State(state): State<Arc<AppState>>,
    Json(input): Json<CreateBillRequest>,
) -> Result<Json<BillResponse>, ApiError> {
    input
        .validate()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let member: Option<(i64, String)> = sqlx::query_as("SELECT id, name FROM members WHERE id = $1")
        .bind(input.member_id)
        .fetch_optional(&state.db)
        .await?;

    let Some((member_id, member_name)) = member else {
        return Err(ApiError::BadRequest("Member not found".to_string()));
    };

    let status = input.status.clone().unwrap_or_else(|| "pending".to_string());

    let (id, created_at): (i64, DateTime<Utc>) = sqlx::query_as(
        r#"
        INSERT INTO bills (member_id, amount, description, due_date, status)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, created_at
        "#,
    )
    .bind(member_id)
    .bind(input.amount)
    .bind(&input.description)
    .bind(input.due_date)
    .bind(&status)
    .fetch_one(&state.db)
    .await?;

    Ok(Json(BillResponse {
        id,
        member_id,
        member_name,
        amount: input.amount,
        description: input.description,
        due_date: input.due_date,
        status,
        created_at,
    }))
}
