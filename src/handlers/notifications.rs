//! Notification Handlers

use axum::{
    extract::{Path, Query, State},
    routing::{get, patch},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::error::ApiError;
use crate::models::{Notification, NotificationRequest};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_notifications).post(create_notification))
        .route("/:id/read", patch(mark_as_read))
}

#[derive(Debug, Deserialize)]
pub struct AudienceQuery {
    pub audience: Option<String>,
}

/// Members also see announcements addressed to everyone.
fn expand_audience(audience: &str) -> Vec<String> {
    if audience.eq_ignore_ascii_case("members") {
        vec!["members".to_string(), "all".to_string()]
    } else {
        vec![audience.to_string()]
    }
}

/// GET /api/notifications?audience= - Filtered lists are newest-first
pub async fn list_notifications(
    State(state): State<Arc<AppState>>,
    Query(query): Query<AudienceQuery>,
) -> Result<Json<Vec<Notification>>, ApiError> {
    let notifications = match query.audience.as_deref().filter(|a| !a.trim().is_empty()) {
        Some(audience) => {
            let audiences = expand_audience(audience);
            sqlx::query_as(
                "SELECT * FROM notifications WHERE target_audience = ANY($1) ORDER BY created_at DESC",
            )
            .bind(&audiences)
            .fetch_all(&state.db)
            .await?
        }
        None => {
            sqlx::query_as("SELECT * FROM notifications ORDER BY id")
                .fetch_all(&state.db)
                .await?
        }
    };

    Ok(Json(notifications))
}

/// POST /api/notifications
pub async fn create_notification(
    State(state): State<Arc<AppState>>,
    Json(input): Json<NotificationRequest>,
) -> Result<Json<Notification>, ApiError> {
    let notification: Notification = sqlx::query_as(
        r#"
        INSERT INTO notifications (title, message, target_audience)
        VALUES ($1, $2, $3)
        RETURNING *
        "#,
    )
    .bind(&input.title)
    .bind(&input.message)
    .bind(input.target_audience.as_deref().unwrap_or("all"))
    .fetch_one(&state.db)
    .await?;

    Ok(Json(notification))
}

/// PATCH /api/notifications/:id/read
pub async fn mark_as_read(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Notification>, ApiError> {
    let notification: Notification =
        sqlx::query_as("UPDATE notifications SET read_flag = TRUE WHERE id = $1 RETURNING *")
            .bind(id)
            .fetch_optional(&state.db)
            .await?
            .ok_or(ApiError::NotFound)?;

    Ok(Json(notification))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_members_audience_includes_all() {
        assert_eq!(expand_audience("members"), vec!["members", "all"]);
        assert_eq!(expand_audience("MEMBERS"), vec!["members", "all"]);
    }

    #[test]
    fn test_other_audiences_pass_through() {
        assert_eq!(expand_audience("staff"), vec!["staff"]);
        assert_eq!(expand_audience("all"), vec!["all"]);
    }
}
