use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

/// Operator account row. Password hashes never leave this module's callers;
/// the struct is deliberately not Serialize.
#[derive(Debug, Clone, FromRow)]
pub struct AdminUser {
    pub admin_id: i64,
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

pub async fn find_by_username(
    pool: &PgPool,
    username: &str,
) -> Result<Option<AdminUser>, sqlx::Error> {
    sqlx::query_as::<_, AdminUser>(
        "SELECT admin_id, username, password_hash, created_at
         FROM admin_users WHERE username = $1",
    )
    .bind(username)
    .fetch_optional(pool)
    .await
}

pub async fn hashed_password(pool: &PgPool, admin_id: i64) -> Result<Option<String>, sqlx::Error> {
    sqlx::query_scalar("SELECT password_hash FROM admin_users WHERE admin_id = $1")
        .bind(admin_id)
        .fetch_optional(pool)
        .await
}

/// Out-of-band provisioning, used by the create-admin binary only.
pub async fn create(pool: &PgPool, username: &str, password_hash: &str) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar(
        "INSERT INTO admin_users (username, password_hash) VALUES ($1, $2) RETURNING admin_id",
    )
    .bind(username)
    .bind(password_hash)
    .fetch_one(pool)
    .await
}

/// Store a new hash and bump the rotation timestamp.
pub async fn update_password(
    pool: &PgPool,
    admin_id: i64,
    password_hash: &str,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE admin_users SET password_hash = $1, created_at = NOW() WHERE admin_id = $2",
    )
    .bind(password_hash)
    .bind(admin_id)
    .execute(pool)
    .await?;
    Ok(result.rows_affected() > 0)
}
