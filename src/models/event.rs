use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

#[derive(Debug, Serialize, FromRow)]
pub struct Event {
    pub event_id: i64,
    pub event_name: String,
    pub description: Option<String>,
    pub event_date: NaiveDate,
    pub event_time: Option<NaiveTime>,
    pub venue: Option<String>,
    pub organized_by: Option<String>,
    pub category: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateEvent {
    pub event_name: String,
    pub description: Option<String>,
    pub event_date: NaiveDate,
    pub event_time: Option<NaiveTime>,
    pub venue: Option<String>,
    pub organized_by: Option<String>,
    pub category: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateEvent {
    pub event_name: Option<String>,
    pub description: Option<String>,
    pub event_date: Option<NaiveDate>,
    pub event_time: Option<NaiveTime>,
    pub venue: Option<String>,
    pub organized_by: Option<String>,
    pub category: Option<String>,
}

pub async fn get_all(pool: &PgPool) -> Result<Vec<Event>, sqlx::Error> {
    sqlx::query_as::<_, Event>(
        "SELECT * FROM events ORDER BY event_date DESC, event_time ASC",
    )
    .fetch_all(pool)
    .await
}

pub async fn get_by_id(pool: &PgPool, event_id: i64) -> Result<Option<Event>, sqlx::Error> {
    sqlx::query_as::<_, Event>("SELECT * FROM events WHERE event_id = $1")
        .bind(event_id)
        .fetch_optional(pool)
        .await
}

pub async fn create(pool: &PgPool, input: &CreateEvent) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar(
        "INSERT INTO events (event_name, description, event_date, event_time, venue, organized_by, category)
         VALUES ($1, $2, $3, $4, $5, $6, $7)
         RETURNING event_id",
    )
    .bind(&input.event_name)
    .bind(&input.description)
    .bind(input.event_date)
    .bind(input.event_time)
    .bind(&input.venue)
    .bind(&input.organized_by)
    .bind(input.category.as_deref().unwrap_or("upcoming"))
    .fetch_one(pool)
    .await
}

/// Partial update: absent fields keep their stored values.
pub async fn update(pool: &PgPool, event_id: i64, input: &UpdateEvent) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE events
         SET event_name = COALESCE($1, event_name),
             description = COALESCE($2, description),
             event_date = COALESCE($3, event_date),
             event_time = COALESCE($4, event_time),
             venue = COALESCE($5, venue),
             organized_by = COALESCE($6, organized_by),
             category = COALESCE($7, category)
         WHERE event_id = $8",
    )
    .bind(&input.event_name)
    .bind(&input.description)
    .bind(input.event_date)
    .bind(input.event_time)
    .bind(&input.venue)
    .bind(&input.organized_by)
    .bind(&input.category)
    .bind(event_id)
    .execute(pool)
    .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn delete(pool: &PgPool, event_id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM events WHERE event_id = $1")
        .bind(event_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
