//! Authentication Models
//!
//! Account entity, role enum, and the login/signup wire types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::auth::error::AuthError;

/// Account role enum matching the database type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "account_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Member,
}

impl Role {
    /// Resolve a role string case-insensitively. Anything other than the
    /// two known roles is a client error.
    pub fn resolve(role: &str) -> Result<Self, AuthError> {
        match role.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "member" => Ok(Role::Member),
            _ => {
                tracing::error!(role = %role, "Invalid role");
                Err(AuthError::InvalidRole)
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Member => "member",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Credential record from the database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: i64,
    pub email: String,
    pub name: Option<String>,
    pub role: Role,
    pub status: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,

    #[validate(length(min = 1, message = "Role is required"))]
    pub role: String,
}

/// Signup request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(max = 100, message = "Name must be at most 100 characters"))]
    pub name: Option<String>,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,

    #[validate(length(min = 1, message = "Role is required"))]
    pub role: String,
}

/// Response envelope shared by login and signup, and reused verbatim for
/// their failure paths with a null token.
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub token: Option<String>,
    pub email: String,
    pub role: String,
    pub message: String,
}

impl LoginResponse {
    /// Failure envelope echoing the requested role back to the caller
    pub fn failure(email: &str, role: &str, message: impl Into<String>) -> Self {
        Self {
            token: None,
            email: email.to_string(),
            role: role.to_string(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_resolution_is_case_insensitive() {
        assert_eq!(Role::resolve("member").unwrap(), Role::Member);
        assert_eq!(Role::resolve("MEMBER").unwrap(), Role::Member);
        assert_eq!(Role::resolve("Admin").unwrap(), Role::Admin);
        assert_eq!(Role::resolve(" admin ").unwrap(), Role::Admin);
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        assert!(matches!(Role::resolve("coach"), Err(AuthError::InvalidRole)));
        assert!(matches!(Role::resolve(""), Err(AuthError::InvalidRole)));
    }

    #[test]
    fn test_role_displays_lowercase() {
        assert_eq!(Role::Admin.to_string(), "admin");
        assert_eq!(Role::Member.to_string(), "member");
    }

    #[test]
    fn test_login_request_validation() {
        let valid = LoginRequest {
            email: "a@x.com".to_string(),
            password: "pw1".to_string(),
            role: "member".to_string(),
        };
        assert!(valid.validate().is_ok());

        let bad_email = LoginRequest {
            email: "not-an-email".to_string(),
            ..valid.clone()
        };
        assert!(bad_email.validate().is_err());

        let empty_password = LoginRequest {
            password: String::new(),
            ..valid
        };
        assert!(empty_password.validate().is_err());
    }

    #[test]
    fn test_failure_envelope_has_null_token() {
        let resp = LoginResponse::failure("a@x.com", "member", "Invalid credentials");
        assert!(resp.token.is_none());

        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["token"], serde_json::Value::Null);
        assert_eq!(json["email"], "a@x.com");
        assert_eq!(json["message"], "Invalid credentials");
    }
}
