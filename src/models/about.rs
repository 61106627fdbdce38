//! About-page content: board of directors, team members, and programs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

// ===== Board of directors =====

#[derive(Debug, Serialize, FromRow)]
pub struct BodMember {
    pub bod_id: i64,
    pub name: String,
    pub designation: String,
    pub bio: Option<String>,
    pub profile_image: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct BodInput {
    pub name: String,
    pub designation: String,
    pub bio: Option<String>,
    pub profile_image: Option<String>,
}

pub async fn get_all_bod(pool: &PgPool) -> Result<Vec<BodMember>, sqlx::Error> {
    sqlx::query_as::<_, BodMember>("SELECT * FROM bod_members ORDER BY bod_id ASC")
        .fetch_all(pool)
        .await
}

pub async fn get_bod_by_id(pool: &PgPool, bod_id: i64) -> Result<Option<BodMember>, sqlx::Error> {
    sqlx::query_as::<_, BodMember>("SELECT * FROM bod_members WHERE bod_id = $1")
        .bind(bod_id)
        .fetch_optional(pool)
        .await
}

pub async fn create_bod(pool: &PgPool, input: &BodInput) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar(
        "INSERT INTO bod_members (name, designation, bio, profile_image)
         VALUES ($1, $2, $3, $4) RETURNING bod_id",
    )
    .bind(&input.name)
    .bind(&input.designation)
    .bind(&input.bio)
    .bind(&input.profile_image)
    .fetch_one(pool)
    .await
}

pub async fn update_bod(pool: &PgPool, bod_id: i64, input: &BodInput) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE bod_members
         SET name = $1,
             designation = $2,
             bio = $3,
             profile_image = COALESCE($4, profile_image)
         WHERE bod_id = $5",
    )
    .bind(&input.name)
    .bind(&input.designation)
    .bind(&input.bio)
    .bind(&input.profile_image)
    .bind(bod_id)
    .execute(pool)
    .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn delete_bod(pool: &PgPool, bod_id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM bod_members WHERE bod_id = $1")
        .bind(bod_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

// ===== Team members =====

#[derive(Debug, Serialize, FromRow)]
pub struct TeamMember {
    pub id: i64,
    pub name: String,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TeamMemberInput {
    pub name: String,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

pub async fn get_all_team_members(pool: &PgPool) -> Result<Vec<TeamMember>, sqlx::Error> {
    sqlx::query_as::<_, TeamMember>("SELECT * FROM team_members ORDER BY id ASC")
        .fetch_all(pool)
        .await
}

pub async fn get_team_member_by_id(pool: &PgPool, id: i64) -> Result<Option<TeamMember>, sqlx::Error> {
    sqlx::query_as::<_, TeamMember>("SELECT * FROM team_members WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn create_team_member(pool: &PgPool, input: &TeamMemberInput) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar(
        "INSERT INTO team_members (name, subtitle, description, image_url)
         VALUES ($1, $2, $3, $4) RETURNING id",
    )
    .bind(&input.name)
    .bind(&input.subtitle)
    .bind(&input.description)
    .bind(&input.image_url)
    .fetch_one(pool)
    .await
}

pub async fn update_team_member(
    pool: &PgPool,
    id: i64,
    input: &TeamMemberInput,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE team_members
         SET name = $1,
             subtitle = $2,
             description = $3,
             image_url = COALESCE($4, image_url)
         WHERE id = $5",
    )
    .bind(&input.name)
    .bind(&input.subtitle)
    .bind(&input.description)
    .bind(&input.image_url)
    .bind(id)
    .execute(pool)
    .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn delete_team_member(pool: &PgPool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM team_members WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

// ===== Programs =====

#[derive(Debug, Serialize, FromRow)]
pub struct Program {
    pub program_id: i64,
    pub program_date: NaiveDate,
    pub title: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ProgramInput {
    pub program_date: NaiveDate,
    pub title: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

pub async fn get_all_programs(pool: &PgPool) -> Result<Vec<Program>, sqlx::Error> {
    sqlx::query_as::<_, Program>("SELECT * FROM programs ORDER BY program_date DESC")
        .fetch_all(pool)
        .await
}

pub async fn get_program_by_id(pool: &PgPool, program_id: i64) -> Result<Option<Program>, sqlx::Error> {
    sqlx::query_as::<_, Program>("SELECT * FROM programs WHERE program_id = $1")
        .bind(program_id)
        .fetch_optional(pool)
        .await
}

pub async fn create_program(pool: &PgPool, input: &ProgramInput) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar(
        "INSERT INTO programs (program_date, title, description, image_url)
         VALUES ($1, $2, $3, $4) RETURNING program_id",
    )
    .bind(input.program_date)
    .bind(&input.title)
    .bind(&input.description)
    .bind(&input.image_url)
    .fetch_one(pool)
    .await
}

pub async fn update_program(
    pool: &PgPool,
    program_id: i64,
    input: &ProgramInput,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE programs
         SET program_date = $1,
             title = $2,
             description = $3,
             image_url = COALESCE($4, image_url)
         WHERE program_id = $5",
    )
    .bind(input.program_date)
    .bind(&input.title)
    .bind(&input.description)
    .bind(&input.image_url)
    .bind(program_id)
    .execute(pool)
    .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn delete_program(pool: &PgPool, program_id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM programs WHERE program_id = $1")
        .bind(program_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
