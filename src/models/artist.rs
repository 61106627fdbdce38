use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

#[derive(Debug, Serialize, FromRow)]
pub struct Artist {
    pub artist_id: i64,
    pub full_name: String,
    pub bio: Option<String>,
    pub profile_image: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ArtistInput {
    pub full_name: Option<String>,
    pub bio: Option<String>,
    pub profile_image: Option<String>,
}

pub async fn get_all(pool: &PgPool) -> Result<Vec<Artist>, sqlx::Error> {
    sqlx::query_as::<_, Artist>(
        "SELECT artist_id, full_name, bio, profile_image FROM artists ORDER BY artist_id ASC",
    )
    .fetch_all(pool)
    .await
}

pub async fn get_by_id(pool: &PgPool, artist_id: i64) -> Result<Option<Artist>, sqlx::Error> {
    sqlx::query_as::<_, Artist>(
        "SELECT artist_id, full_name, bio, profile_image FROM artists WHERE artist_id = $1",
    )
    .bind(artist_id)
    .fetch_optional(pool)
    .await
}

pub async fn create(
    pool: &PgPool,
    full_name: &str,
    bio: Option<&str>,
    profile_image: Option<&str>,
) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar(
        "INSERT INTO artists (full_name, bio, profile_image) VALUES ($1, $2, $3)
         RETURNING artist_id",
    )
    .bind(full_name)
    .bind(bio)
    .bind(profile_image)
    .fetch_one(pool)
    .await
}

/// Partial update: absent fields keep their stored values.
pub async fn update(pool: &PgPool, artist_id: i64, input: &ArtistInput) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE artists
         SET full_name = COALESCE($1, full_name),
             bio = COALESCE($2, bio),
             profile_image = COALESCE($3, profile_image)
         WHERE artist_id = $4",
    )
    .bind(&input.full_name)
    .bind(&input.bio)
    .bind(&input.profile_image)
    .bind(artist_id)
    .execute(pool)
    .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn delete(pool: &PgPool, artist_id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM artists WHERE artist_id = $1")
        .bind(artist_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
