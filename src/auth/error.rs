//! Authentication Error Types
//!
//! The display strings double as the user-facing API messages; unknown
//! email and wrong password intentionally share one message so the
//! response never reveals which check failed.

/// Authentication errors
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid role for this account")]
    RoleMismatch,

    #[error("Invalid role specified")]
    InvalidRole,

    #[error("Email already registered")]
    EmailExists,

    #[error("{0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error")]
    Internal,
}

impl AuthError {
    /// Client-input errors surface as 4xx; everything else is a 5xx fault.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            AuthError::InvalidCredentials
                | AuthError::RoleMismatch
                | AuthError::InvalidRole
                | AuthError::EmailExists
                | AuthError::Validation(_)
        )
    }
}

impl From<sqlx::Error> for AuthError {
    fn from(err: sqlx::Error) -> Self {
        tracing::error!("Database error: {:?}", err);
        AuthError::Database(err.to_string())
    }
}

impl From<argon2::password_hash::Error> for AuthError {
    fn from(err: argon2::password_hash::Error) -> Self {
        tracing::error!("Password hashing error: {:?}", err);
        AuthError::Internal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_server_split() {
        assert!(AuthError::InvalidCredentials.is_client_error());
        assert!(AuthError::RoleMismatch.is_client_error());
        assert!(AuthError::InvalidRole.is_client_error());
        assert!(AuthError::EmailExists.is_client_error());
        assert!(AuthError::Validation("bad".into()).is_client_error());
        assert!(!AuthError::Database("boom".into()).is_client_error());
        assert!(!AuthError::Internal.is_client_error());
    }

    #[test]
    fn test_messages_match_api_contract() {
        assert_eq!(AuthError::InvalidCredentials.to_string(), "Invalid credentials");
        assert_eq!(
            AuthError::RoleMismatch.to_string(),
            "Invalid role for this account"
        );
        assert_eq!(AuthError::InvalidRole.to_string(), "Invalid role specified");
        assert_eq!(AuthError::EmailExists.to_string(), "Email already registered");
    }
}
