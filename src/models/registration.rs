//! Students and their course registrations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool, Postgres, Transaction};

#[derive(Debug, Serialize, FromRow)]
pub struct Student {
    pub student_id: i64,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub address: Option<String>,
    pub age: Option<i32>,
    pub occupation: Option<String>,
    pub photo: Option<String>,
    pub registered_date: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct StudentInput {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub address: Option<String>,
    pub age: Option<i32>,
    pub occupation: Option<String>,
    pub photo: Option<String>,
}

/// Registration joined with its student and course for the dashboard list.
#[derive(Debug, Serialize, FromRow)]
pub struct RegistrationSummary {
    pub registration_id: i64,
    pub registration_date: DateTime<Utc>,
    pub status: String,
    pub course_id: i64,
    pub student_id: i64,
    pub student_name: String,
    pub email: String,
    pub phone: String,
    pub address: Option<String>,
    pub age: Option<i32>,
    pub occupation: Option<String>,
    pub course_name: String,
}

/// Detail view adds the student photo and course duration/price.
#[derive(Debug, Serialize, FromRow)]
pub struct RegistrationDetail {
    pub registration_id: i64,
    pub registration_date: DateTime<Utc>,
    pub status: String,
    pub course_id: i64,
    pub student_id: i64,
    pub student_name: String,
    pub email: String,
    pub phone: String,
    pub address: Option<String>,
    pub age: Option<i32>,
    pub occupation: Option<String>,
    pub photo: Option<String>,
    pub course_name: String,
    pub duration: Option<String>,
    pub price: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateRegistration {
    pub student_id: Option<i64>,
    pub course_id: Option<i64>,
}

// --- Students ---

pub async fn get_all_students(pool: &PgPool) -> Result<Vec<Student>, sqlx::Error> {
    sqlx::query_as::<_, Student>("SELECT * FROM students ORDER BY registered_date DESC")
        .fetch_all(pool)
        .await
}

pub async fn get_student_by_id(pool: &PgPool, student_id: i64) -> Result<Option<Student>, sqlx::Error> {
    sqlx::query_as::<_, Student>("SELECT * FROM students WHERE student_id = $1")
        .bind(student_id)
        .fetch_optional(pool)
        .await
}

pub async fn create_student(pool: &PgPool, input: &StudentInput) -> Result<i64, sqlx::Error> {
    let mut tx = pool.begin().await?;
    let id = insert_student(&mut tx, input).await?;
    tx.commit().await?;
    Ok(id)
}

async fn insert_student(
    tx: &mut Transaction<'_, Postgres>,
    input: &StudentInput,
) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar(
        "INSERT INTO students (full_name, email, phone, address, age, occupation, photo)
         VALUES ($1, $2, $3, $4, $5, $6, $7)
         RETURNING student_id",
    )
    .bind(&input.full_name)
    .bind(&input.email)
    .bind(&input.phone)
    .bind(&input.address)
    .bind(input.age)
    .bind(&input.occupation)
    .bind(&input.photo)
    .fetch_one(&mut **tx)
    .await
}

pub async fn update_student(
    pool: &PgPool,
    student_id: i64,
    input: &StudentInput,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE students
         SET full_name = $1, email = $2, phone = $3, address = $4,
             age = $5, occupation = $6, photo = $7
         WHERE student_id = $8",
    )
    .bind(&input.full_name)
    .bind(&input.email)
    .bind(&input.phone)
    .bind(&input.address)
    .bind(input.age)
    .bind(&input.occupation)
    .bind(&input.photo)
    .bind(student_id)
    .execute(pool)
    .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn delete_student(pool: &PgPool, student_id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM students WHERE student_id = $1")
        .bind(student_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

// --- Registrations ---

pub async fn get_all_registrations(pool: &PgPool) -> Result<Vec<RegistrationSummary>, sqlx::Error> {
    sqlx::query_as::<_, RegistrationSummary>(
        "SELECT r.registration_id, r.registration_date, r.status, r.course_id, r.student_id,
                s.full_name AS student_name, s.email, s.phone, s.address, s.age, s.occupation,
                c.course_name
         FROM registrations r
         JOIN students s ON r.student_id = s.student_id
         JOIN courses c ON r.course_id = c.course_id
         ORDER BY r.registration_date DESC",
    )
    .fetch_all(pool)
    .await
}

pub async fn get_registration_by_id(
    pool: &PgPool,
    registration_id: i64,
) -> Result<Option<RegistrationDetail>, sqlx::Error> {
    sqlx::query_as::<_, RegistrationDetail>(
        "SELECT r.registration_id, r.registration_date, r.status, r.course_id, r.student_id,
                s.full_name AS student_name, s.email, s.phone, s.address, s.age, s.occupation,
                s.photo, c.course_name, c.duration, c.price
         FROM registrations r
         JOIN students s ON r.student_id = s.student_id
         JOIN courses c ON r.course_id = c.course_id
         WHERE r.registration_id = $1",
    )
    .bind(registration_id)
    .fetch_optional(pool)
    .await
}

pub async fn create_registration(
    pool: &PgPool,
    student_id: i64,
    course_id: i64,
) -> Result<i64, sqlx::Error> {
    let mut tx = pool.begin().await?;
    let id = insert_registration(&mut tx, student_id, course_id).await?;
    tx.commit().await?;
    Ok(id)
}

async fn insert_registration(
    tx: &mut Transaction<'_, Postgres>,
    student_id: i64,
    course_id: i64,
) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar(
        "INSERT INTO registrations (student_id, course_id, status)
         VALUES ($1, $2, 'Unread')
         RETURNING registration_id",
    )
    .bind(student_id)
    .bind(course_id)
    .fetch_one(&mut **tx)
    .await
}

/// Public signup path: student row plus registration row, one transaction.
pub async fn create_student_and_registration(
    pool: &PgPool,
    student: &StudentInput,
    course_id: i64,
) -> Result<(i64, i64), sqlx::Error> {
    let mut tx = pool.begin().await?;
    let student_id = insert_student(&mut tx, student).await?;
    let registration_id = insert_registration(&mut tx, student_id, course_id).await?;
    tx.commit().await?;
    Ok((student_id, registration_id))
}

pub async fn update_registration_status(
    pool: &PgPool,
    registration_id: i64,
    status: &str,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("UPDATE registrations SET status = $1 WHERE registration_id = $2")
        .bind(status)
        .bind(registration_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn update_registration(
    pool: &PgPool,
    registration_id: i64,
    input: &UpdateRegistration,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE registrations
         SET student_id = COALESCE($1, student_id),
             course_id = COALESCE($2, course_id)
         WHERE registration_id = $3",
    )
    .bind(input.student_id)
    .bind(input.course_id)
    .bind(registration_id)
    .execute(pool)
    .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn delete_registration(pool: &PgPool, registration_id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM registrations WHERE registration_id = $1")
        .bind(registration_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
