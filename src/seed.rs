//! Default Data Seeding
//!
//! Runs at startup; each block only fires when its table is still empty,
//! so an existing installation is never touched.

use sqlx::PgPool;

use crate::auth::error::AuthError;
use crate::auth::service::hash_password;

pub async fn seed_defaults(db: &PgPool) -> Result<(), AuthError> {
    let (accounts,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM user_accounts")
        .fetch_one(db)
        .await?;

    if accounts == 0 {
        tracing::info!("Seeding default admin user");
        sqlx::query(
            r#"
            INSERT INTO user_accounts (email, name, role, status, password_hash)
            VALUES ($1, $2, 'admin', 'active', $3)
            "#,
        )
        .bind("admin@gym.com")
        .bind("Admin")
        .bind(hash_password("admin123")?)
        .execute(db)
        .await?;
    }

    let (members,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM members")
        .fetch_one(db)
        .await?;

    if members == 0 {
        tracing::info!("Seeding sample member");
        sqlx::query(
            r#"
            INSERT INTO members (name, email, phone, status, role, join_date)
            VALUES ($1, $2, $3, 'active', 'member', CURRENT_DATE)
            "#,
        )
        .bind("John Doe")
        .bind("member@gym.com")
        .bind("1234567890")
        .execute(db)
        .await?;

        let account: Option<(i64,)> = sqlx::query_as("SELECT id FROM user_accounts WHERE email = $1")
            .bind("member@gym.com")
            .fetch_optional(db)
            .await?;

        if account.is_none() {
            sqlx::query(
                r#"
                INSERT INTO user_accounts (email, name, role, status, password_hash)
                VALUES ($1, $2, 'member', 'active', $3)
                "#,
            )
            .bind("member@gym.com")
            .bind("John Doe")
            .bind(hash_password("member123")?)
            .execute(db)
            .await?;
        }
    }

    let (packages,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM fee_packages")
        .fetch_one(db)
        .await?;

    if packages == 0 {
        sqlx::query(
            r#"
            INSERT INTO fee_packages (name, amount, duration_months, description)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind("Basic Plan")
        .bind(49.99_f64)
        .bind(1_i32)
        .bind("Access to gym floor and basic classes")
        .execute(db)
        .await?;
    }

    let (supplements,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM supplements")
        .fetch_one(db)
        .await?;

    if supplements == 0 {
        sqlx::query(
            r#"
            INSERT INTO supplements (name, category, description, price, stock)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind("Whey Protein")
        .bind("protein")
        .bind("High quality whey protein powder")
        .bind(39.99_f64)
        .bind(25_i32)
        .execute(db)
        .await?;
    }

    let (plans,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM diet_plans")
        .fetch_one(db)
        .await?;

    if plans == 0 {
        sqlx::query(
            r#"
            INSERT INTO diet_plans (title, category, description, meal_plan, calories, duration_weeks)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind("Weight Loss Starter")
        .bind("weight-loss")
        .bind("Beginner friendly weight loss plan")
        .bind("Breakfast: Oatmeal\nLunch: Grilled chicken\nDinner: Salad")
        .bind(1800_i32)
        .bind(4_i32)
        .execute(db)
        .await?;
    }

    Ok(())
}
