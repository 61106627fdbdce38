use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

#[derive(Debug, Serialize, FromRow)]
pub struct Teacher {
    pub teacher_id: i64,
    pub full_name: String,
    pub specialization: Option<String>,
    pub profile_image: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TeacherInput {
    pub full_name: String,
    pub specialization: Option<String>,
    pub profile_image: Option<String>,
}

pub async fn get_all(pool: &PgPool) -> Result<Vec<Teacher>, sqlx::Error> {
    sqlx::query_as::<_, Teacher>(
        "SELECT teacher_id, full_name, specialization, profile_image
         FROM teachers ORDER BY teacher_id ASC",
    )
    .fetch_all(pool)
    .await
}

pub async fn get_by_id(pool: &PgPool, teacher_id: i64) -> Result<Option<Teacher>, sqlx::Error> {
    sqlx::query_as::<_, Teacher>(
        "SELECT teacher_id, full_name, specialization, profile_image
         FROM teachers WHERE teacher_id = $1",
    )
    .bind(teacher_id)
    .fetch_optional(pool)
    .await
}

pub async fn create(pool: &PgPool, input: &TeacherInput) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar(
        "INSERT INTO teachers (full_name, specialization, profile_image)
         VALUES ($1, $2, $3) RETURNING teacher_id",
    )
    .bind(&input.full_name)
    .bind(&input.specialization)
    .bind(&input.profile_image)
    .fetch_one(pool)
    .await
}

/// profile_image is only replaced when a new value is supplied.
pub async fn update(pool: &PgPool, teacher_id: i64, input: &TeacherInput) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE teachers
         SET full_name = $1,
             specialization = $2,
             profile_image = COALESCE($3, profile_image)
         WHERE teacher_id = $4",
    )
    .bind(&input.full_name)
    .bind(&input.specialization)
    .bind(&input.profile_image)
    .bind(teacher_id)
    .execute(pool)
    .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn delete(pool: &PgPool, teacher_id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM teachers WHERE teacher_id = $1")
        .bind(teacher_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
