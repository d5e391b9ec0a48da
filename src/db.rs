//! Database Setup
//!
//! Pool construction and schema migrations. The schema is created in place
//! at startup; every statement is idempotent so restarts are safe.

use crate::config::AppConfig;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Connect to PostgreSQL using the configured pool size
pub async fn connect(config: &AppConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .connect(&config.database_url)
        .await
}

/// Create the schema if it does not exist yet
pub async fn run_migrations(db: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Running database migrations");

    // Account role enum
    sqlx::query(
        r#"
        DO $$ BEGIN
            CREATE TYPE account_role AS ENUM ('admin', 'member');
        EXCEPTION
            WHEN duplicate_object THEN null;
        END $$;
        "#,
    )
    .execute(db)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS user_accounts (
            id BIGSERIAL PRIMARY KEY,
            email VARCHAR(255) NOT NULL UNIQUE,
            name VARCHAR(100),
            role account_role NOT NULL DEFAULT 'member',
            status VARCHAR(32) NOT NULL DEFAULT 'active',
            password_hash VARCHAR(255) NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(db)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_user_accounts_email ON user_accounts(email);")
        .execute(db)
        .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS members (
            id BIGSERIAL PRIMARY KEY,
            name VARCHAR(255) NOT NULL,
            email VARCHAR(255) NOT NULL UNIQUE,
            phone VARCHAR(32),
            address VARCHAR(500),
            join_date DATE,
            status VARCHAR(32) NOT NULL DEFAULT 'active',
            role VARCHAR(32) NOT NULL DEFAULT 'member',
            fee_package_id BIGINT,
            fee_package_name VARCHAR(255),
            fee_package_amount DOUBLE PRECISION,
            assigned_at TIMESTAMPTZ,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(db)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_members_email ON members(email);")
        .execute(db)
        .await?;

    // Append-only audit trail
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS activity_logs (
            id BIGSERIAL PRIMARY KEY,
            user_identifier VARCHAR(255),
            action VARCHAR(64),
            details VARCHAR(2000),
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(db)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS fee_packages (
            id BIGSERIAL PRIMARY KEY,
            name VARCHAR(255) NOT NULL,
            amount DOUBLE PRECISION,
            duration_months INTEGER,
            description VARCHAR(1000)
        );
        "#,
    )
    .execute(db)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS bills (
            id BIGSERIAL PRIMARY KEY,
            member_id BIGINT NOT NULL REFERENCES members(id),
            amount DOUBLE PRECISION NOT NULL,
            description VARCHAR(1000) NOT NULL,
            due_date DATE NOT NULL,
            status VARCHAR(32) NOT NULL DEFAULT 'pending',
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(db)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_bills_member ON bills(member_id);")
        .execute(db)
        .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS supplements (
            id BIGSERIAL PRIMARY KEY,
            name VARCHAR(255) NOT NULL,
            category VARCHAR(100),
            description VARCHAR(1000),
            price DOUBLE PRECISION,
            stock INTEGER
        );
        "#,
    )
    .execute(db)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS diet_plans (
            id BIGSERIAL PRIMARY KEY,
            title VARCHAR(255) NOT NULL,
            category VARCHAR(100) NOT NULL,
            description VARCHAR(2000) NOT NULL,
            meal_plan VARCHAR(4000) NOT NULL,
            calories INTEGER NOT NULL,
            duration_weeks INTEGER NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(db)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS notifications (
            id BIGSERIAL PRIMARY KEY,
            title VARCHAR(255) NOT NULL,
            message VARCHAR(2000) NOT NULL,
            target_audience VARCHAR(32) NOT NULL DEFAULT 'all',
            read_flag BOOLEAN NOT NULL DEFAULT FALSE,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(db)
    .await?;

    tracing::info!("Database migrations completed successfully");
    Ok(())
}
