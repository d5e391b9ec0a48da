//! Domain Models
//!
//! Entities and request payloads for the back-office resources. Wire
//! names are camelCase to match the JSON contract the admin frontend
//! consumes.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Gym member profile, loosely linked to a credential record by email
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub join_date: Option<NaiveDate>,
    pub status: String,
    pub role: String,
    pub fee_package_id: Option<i64>,
    pub fee_package_name: Option<String>,
    pub fee_package_amount: Option<f64>,
    pub assigned_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMemberRequest {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub join_date: Option<NaiveDate>,
    pub status: Option<String>,
    pub role: Option<String>,
}

/// Full-overwrite update; role is intentionally not editable here
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMemberRequest {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub join_date: Option<NaiveDate>,
    pub status: String,
}

/// Membership fee package
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct FeePackage {
    pub id: i64,
    pub name: String,
    pub amount: Option<f64>,
    pub duration_months: Option<i32>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateFeePackageRequest {
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    pub name: String,
    pub amount: Option<f64>,
    pub duration_months: Option<i32>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBillRequest {
    pub member_id: i64,
    pub amount: f64,

    #[validate(length(min = 1, max = 1000, message = "Description is required"))]
    pub description: String,

    pub due_date: NaiveDate,
    pub status: Option<String>,
}

/// Bill joined with the owning member's name
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct BillResponse {
    pub id: i64,
    pub member_id: i64,
    pub member_name: String,
    pub amount: f64,
    pub description: String,
    pub due_date: NaiveDate,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Supplement store item
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Supplement {
    pub id: i64,
    pub name: String,
    pub category: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<i32>,
}

/// Create and update share one payload: updates overwrite every field
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplementRequest {
    pub name: String,
    pub category: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct DietPlan {
    pub id: i64,
    pub title: String,
    pub category: String,
    pub description: String,
    pub meal_plan: String,
    pub calories: i32,
    pub duration_weeks: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DietPlanRequest {
    pub title: String,
    pub category: String,
    pub description: String,
    pub meal_plan: String,
    pub calories: i32,
    pub duration_weeks: i32,
}

/// Announcement targeted at an audience ("all", "members", ...)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: i64,
    pub title: String,
    pub message: String,
    pub target_audience: String,
    pub read_flag: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationRequest {
    pub title: String,
    pub message: String,
    pub target_audience: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bill_response_uses_camel_case() {
        let bill = BillResponse {
            id: 1,
            member_id: 7,
            member_name: "John Doe".to_string(),
            amount: 49.99,
            description: "Monthly fee".to_string(),
            due_date: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
            status: "pending".to_string(),
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(&bill).unwrap();
        assert_eq!(json["memberId"], 7);
        assert_eq!(json["memberName"], "John Doe");
        assert_eq!(json["dueDate"], "2026-09-01");
        assert!(json.get("member_id").is_none());
    }

    #[test]
    fn test_bill_request_validation() {
        let req = CreateBillRequest {
            member_id: 1,
            amount: 10.0,
            description: String::new(),
            due_date: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
            status: None,
        };
        assert!(req.validate().is_err());
    }
}
