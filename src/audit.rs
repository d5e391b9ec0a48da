//! Activity Audit Trail
//!
//! Append-only log of security-relevant events. Recording is best-effort:
//! a failed insert is logged to the diagnostic channel and swallowed, so
//! auditing can never block or fail the operation being audited.

use sqlx::PgPool;

/// Writer for the `activity_logs` table
#[derive(Clone)]
pub struct ActivityLogger {
    db: PgPool,
}

impl ActivityLogger {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Record an audit event. Failures are swallowed.
    pub async fn record(&self, user: &str, action: &str, details: &str) {
        tracing::info!(user = %user, action = %action, details = %details, "Activity log");

        let result = sqlx::query(
            "INSERT INTO activity_logs (user_identifier, action, details) VALUES ($1, $2, $3)",
        )
        .bind(user)
        .bind(action)
        .bind(details)
        .execute(&self.db)
        .await;

        if let Err(err) = result {
            tracing::error!("Error logging activity: {}", err);
        }
    }
}
