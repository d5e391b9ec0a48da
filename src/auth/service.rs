//! Authentication Service
//!
//! Login, signup, and logout over the credential store and member
//! directory, with an audit event for every step of the flow.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use sqlx::PgPool;
use uuid::Uuid;

use crate::audit::ActivityLogger;
use crate::auth::error::AuthError;
use crate::auth::models::{Account, LoginRequest, LoginResponse, Role, SignupRequest};

/// Hash a password using Argon2id
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)?
        .to_string();
    Ok(hash)
}

/// Verify a password against a stored PHC hash
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AuthError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| AuthError::Internal)?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

/// Authentication service
#[derive(Clone)]
pub struct AuthService {
    db: PgPool,
    audit: ActivityLogger,
}

impl AuthService {
    pub fn new(db: PgPool, audit: ActivityLogger) -> Self {
        Self { db, audit }
    }

    /// Attempt to log a user in.
    ///
    /// Every attempt is audited before any check runs; failed role and
    /// password checks add a second, outcome-specific event.
    pub async fn login(&self, req: &LoginRequest) -> Result<LoginResponse, AuthError> {
        self.audit
            .record(
                &req.email,
                "LOGIN_ATTEMPT",
                &format!("User attempted to login with role: {}", req.role),
            )
            .await;

        let requested_role = Role::resolve(&req.role)?;

        let account: Option<Account> =
            sqlx::query_as("SELECT * FROM user_accounts WHERE email = $1")
                .bind(&req.email)
                .fetch_optional(&self.db)
                .await?;

        let account = account.ok_or(AuthError::InvalidCredentials)?;

        if account.role != requested_role {
            self.audit
                .record(
                    &req.email,
                    "LOGIN_FAILED",
                    &format!("Role mismatch. Expected {}", account.role),
                )
                .await;
            return Err(AuthError::RoleMismatch);
        }

        if !verify_password(&req.password, &account.password_hash)? {
            self.audit
                .record(&req.email, "LOGIN_FAILED", "Incorrect password")
                .await;
            return Err(AuthError::InvalidCredentials);
        }

        // Opaque session token; nothing downstream stores or validates it.
        let token = Uuid::new_v4().to_string();

        self.audit
            .record(
                &req.email,
                "LOGIN_SUCCESS",
                &format!("User successfully logged in with role: {}", account.role),
            )
            .await;

        Ok(LoginResponse {
            token: Some(token),
            email: account.email,
            role: account.role.to_string(),
            message: "Login successful".to_string(),
        })
    }

    /// Create a new account, and for member signups upsert the matching
    /// member profile. Both writes share one transaction.
    pub async fn signup(&self, req: &SignupRequest) -> Result<LoginResponse, AuthError> {
        let role = Role::resolve(&req.role)?;

        let existing: Option<(i64,)> =
            sqlx::query_as("SELECT id FROM user_accounts WHERE email = $1")
                .bind(&req.email)
                .fetch_optional(&self.db)
                .await?;

        if existing.is_some() {
            return Err(AuthError::EmailExists);
        }

        let password_hash = hash_password(&req.password)?;

        let mut tx = self.db.begin().await?;

        let account: Account = sqlx::query_as(
            r#"
            INSERT INTO user_accounts (email, name, role, status, password_hash)
            VALUES ($1, $2, $3, 'active', $4)
            RETURNING *
            "#,
        )
        .bind(&req.email)
        .bind(&req.name)
        .bind(role)
        .bind(&password_hash)
        .fetch_one(&mut *tx)
        .await?;

        if role == Role::Member {
            // Profile lookup is by email value, not by account id; the
            // profile may already exist from an administrative import.
            let display_name = req
                .name
                .as_deref()
                .filter(|n| !n.trim().is_empty())
                .unwrap_or(&req.email);

            sqlx::query(
                r#"
                INSERT INTO members (name, email, status, role, join_date)
                VALUES ($1, $2, 'active', 'member', CURRENT_DATE)
                ON CONFLICT (email) DO UPDATE
                SET name = EXCLUDED.name, status = 'active', role = 'member', updated_at = NOW()
                "#,
            )
            .bind(display_name)
            .bind(&req.email)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        self.audit
            .record(
                &req.email,
                "SIGNUP",
                &format!("Account created with role: {}", role),
            )
            .await;

        Ok(LoginResponse {
            token: None,
            email: account.email,
            role: role.to_string(),
            message: "Account created successfully".to_string(),
        })
    }

    /// Logout is purely an audit action: no token is ever persisted, so
    /// there is nothing to invalidate.
    pub async fn logout(&self, token: &str, email: Option<&str>) {
        self.audit
            .record(
                email.unwrap_or("unknown"),
                "LOGOUT",
                &format!("User logged out. Token: {}", token),
            )
            .await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_round_trip() {
        let hash = hash_password("admin123").unwrap();
        assert_ne!(hash, "admin123");
        assert!(verify_password("admin123", &hash).unwrap());
        assert!(!verify_password("wrongpw", &hash).unwrap());
    }

    #[test]
    fn test_hashes_are_salted() {
        let a = hash_password("pw1").unwrap();
        let b = hash_password("pw1").unwrap();
        assert_ne!(a, b);
        assert!(verify_password("pw1", &a).unwrap());
        assert!(verify_password("pw1", &b).unwrap());
    }

    #[test]
    fn test_garbage_hash_is_an_internal_error() {
        assert!(matches!(
            verify_password("pw1", "not-a-phc-string"),
            Err(AuthError::Internal)
        ));
    }

    #[test]
    fn test_session_tokens_are_opaque_uuids() {
        let token = Uuid::new_v4().to_string();
        assert!(Uuid::parse_str(&token).is_ok());
    }
}
