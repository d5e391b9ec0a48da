//! Report Handlers
//!
//! Read-only exports over members and billing, filtered by creation date.

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Days, NaiveDate, NaiveTime, Utc};
use serde::Deserialize;
use std::sync::Arc;

use crate::error::ApiError;
use crate::models::{BillResponse, Member};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/", get(get_report))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportQuery {
    #[serde(rename = "type")]
    pub report_type: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// Half-open window [start, end + 1 day); missing bounds default to the
/// epoch and tomorrow.
fn report_range(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> (DateTime<Utc>, DateTime<Utc>) {
    let start = start.unwrap_or_default();
    let end = end.unwrap_or_else(|| Utc::now().date_naive());
    let end = end.checked_add_days(Days::new(1)).unwrap_or(end);
    (
        start.and_time(NaiveTime::MIN).and_utc(),
        end.and_time(NaiveTime::MIN).and_utc(),
    )
}

/// GET /api/reports?type=&startDate=&endDate=
pub async fn get_report(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ReportQuery>,
) -> Result<Response, ApiError> {
    match query.report_type.to_lowercase().as_str() {
        "members" => {
            let members: Vec<Member> = sqlx::query_as("SELECT * FROM members ORDER BY id")
                .fetch_all(&state.db)
                .await?;
            Ok(Json(members).into_response())
        }
        "bills" => {
            let (start, end) = report_range(query.start_date, query.end_date);
            let bills: Vec<BillResponse> = sqlx::query_as(
                r#"
                SELECT b.id, b.member_id, m.name AS member_name, b.amount,
                       b.description, b.due_date, b.status, b.created_at
                FROM bills b
                JOIN members m ON m.id = b.member_id
                WHERE b.created_at >= $1 AND b.created_at < $2
                ORDER BY b.id
                "#,
            )
            .bind(start)
            .bind(end)
            .fetch_all(&state.db)
            .await?;
            Ok(Json(bills).into_response())
        }
        "payments" => {
            let (start, end) = report_range(query.start_date, query.end_date);
            let bills: Vec<BillResponse> = sqlx::query_as(
                r#"
                SELECT b.id, b.member_id, m.name AS member_name, b.amount,
                       b.description, b.due_date, b.status, b.created_at
                FROM bills b
                JOIN members m ON m.id = b.member_id
                WHERE b.created_at >= $1 AND b.created_at < $2
                  AND LOWER(b.status) = 'paid'
                ORDER BY b.id
                "#,
            )
            .bind(start)
            .bind(end)
            .fetch_all(&state.db)
            .await?;
            Ok(Json(bills).into_response())
        }
        _ => Err(ApiError::BadRequest("Unsupported report type".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_defaults_to_epoch_and_tomorrow() {
        let (start, end) = report_range(None, None);
        assert_eq!(start.date_naive(), NaiveDate::default());

        let tomorrow = Utc::now().date_naive().checked_add_days(Days::new(1)).unwrap();
        assert_eq!(end.date_naive(), tomorrow);
    }

    #[test]
    fn test_range_end_is_exclusive_next_day() {
        let start = NaiveDate::from_ymd_opt(2026, 8, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
        let (from, to) = report_range(Some(start), Some(end));

        assert_eq!(from.date_naive(), start);
        assert_eq!(to.date_naive(), NaiveDate::from_ymd_opt(2026, 8, 8).unwrap());
        assert_eq!(from.time(), NaiveTime::MIN);
        assert_eq!(to.time(), NaiveTime::MIN);
    }
}
