//! About-page content handlers: board of directors, team members, programs.

use axum::{extract::Path, http::StatusCode, response::Json, Extension};
use serde_json::{json, Value};

use crate::audit::{self, AuditAction};
use crate::database::Database;
use crate::error::ApiError;
use crate::middleware::{AuthAdmin, ClientIp};
use crate::models::about::{
    self, BodInput, BodMember, Program, ProgramInput, TeamMember, TeamMemberInput,
};

// ===== BOD =====

pub async fn list_bod() -> Result<Json<Vec<BodMember>>, ApiError> {
    let pool = Database::pool().await?;
    Ok(Json(about::get_all_bod(pool).await?))
}

pub async fn get_bod(Path(id): Path<i64>) -> Result<Json<BodMember>, ApiError> {
    let pool = Database::pool().await?;
    about::get_bod_by_id(pool, id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("BOD member not found."))
}

pub async fn create_bod(
    Extension(admin): Extension<AuthAdmin>,
    ClientIp(ip): ClientIp,
    Json(body): Json<BodInput>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    if body.name.trim().is_empty() || body.designation.trim().is_empty() {
        return Err(ApiError::bad_request("Name and designation are required"));
    }

    let pool = Database::pool().await?;
    let bod_id = about::create_bod(pool, &body).await?;

    audit::record(admin.admin_id, AuditAction::Create, "BOD", bod_id, &ip).await;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "BOD member created", "bod_id": bod_id })),
    ))
}

pub async fn update_bod(
    Extension(admin): Extension<AuthAdmin>,
    ClientIp(ip): ClientIp,
    Path(id): Path<i64>,
    Json(body): Json<BodInput>,
) -> Result<Json<Value>, ApiError> {
    let pool = Database::pool().await?;
    if !about::update_bod(pool, id, &body).await? {
        return Err(ApiError::not_found("BOD member not found."));
    }

    audit::record(admin.admin_id, AuditAction::Update, "BOD", id, &ip).await;

    Ok(Json(json!({ "message": "BOD member updated" })))
}

pub async fn delete_bod(
    Extension(admin): Extension<AuthAdmin>,
    ClientIp(ip): ClientIp,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    let pool = Database::pool().await?;
    if !about::delete_bod(pool, id).await? {
        return Err(ApiError::not_found("BOD member not found."));
    }

    audit::record(admin.admin_id, AuditAction::Delete, "BOD", id, &ip).await;

    Ok(Json(json!({ "message": "BOD member deleted" })))
}

// ===== Team members =====

pub async fn list_team_members() -> Result<Json<Vec<TeamMember>>, ApiError> {
    let pool = Database::pool().await?;
    Ok(Json(about::get_all_team_members(pool).await?))
}

pub async fn get_team_member(Path(id): Path<i64>) -> Result<Json<TeamMember>, ApiError> {
    let pool = Database::pool().await?;
    about::get_team_member_by_id(pool, id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Team Member not found."))
}

pub async fn create_team_member(
    Extension(admin): Extension<AuthAdmin>,
    ClientIp(ip): ClientIp,
    Json(body): Json<TeamMemberInput>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    if body.name.trim().is_empty() {
        return Err(ApiError::bad_request("Name is required"));
    }

    let pool = Database::pool().await?;
    let id = about::create_team_member(pool, &body).await?;

    audit::record(admin.admin_id, AuditAction::Create, "TEAM_MEMBER", id, &ip).await;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Team member created", "id": id })),
    ))
}

pub async fn update_team_member(
    Extension(admin): Extension<AuthAdmin>,
    ClientIp(ip): ClientIp,
    Path(id): Path<i64>,
    Json(body): Json<TeamMemberInput>,
) -> Result<Json<Value>, ApiError> {
    let pool = Database::pool().await?;
    if !about::update_team_member(pool, id, &body).await? {
        return Err(ApiError::not_found("Team Member not found."));
    }

    audit::record(admin.admin_id, AuditAction::Update, "TEAM_MEMBER", id, &ip).await;

    Ok(Json(json!({ "message": "Team member updated" })))
}

pub async fn delete_team_member(
    Extension(admin): Extension<AuthAdmin>,
    ClientIp(ip): ClientIp,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    let pool = Database::pool().await?;
    if !about::delete_team_member(pool, id).await? {
        return Err(ApiError::not_found("Team Member not found."));
    }

    audit::record(admin.admin_id, AuditAction::Delete, "TEAM_MEMBER", id, &ip).await;

    Ok(Json(json!({ "message": "Team member deleted" })))
}

// ===== Programs =====

pub async fn list_programs() -> Result<Json<Vec<Program>>, ApiError> {
    let pool = Database::pool().await?;
    Ok(Json(about::get_all_programs(pool).await?))
}

pub async fn get_program(Path(id): Path<i64>) -> Result<Json<Program>, ApiError> {
    let pool = Database::pool().await?;
    about::get_program_by_id(pool, id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Program not found."))
}

pub async fn create_program(
    Extension(admin): Extension<AuthAdmin>,
    ClientIp(ip): ClientIp,
    Json(body): Json<ProgramInput>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    if body.title.trim().is_empty() {
        return Err(ApiError::bad_request("Title is required"));
    }

    let pool = Database::pool().await?;
    let program_id = about::create_program(pool, &body).await?;

    audit::record(admin.admin_id, AuditAction::Create, "PROGRAM", program_id, &ip).await;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Program created", "program_id": program_id })),
    ))
}

pub async fn update_program(
    Extension(admin): Extension<AuthAdmin>,
    ClientIp(ip): ClientIp,
    Path(id): Path<i64>,
    Json(body): Json<ProgramInput>,
) -> Result<Json<Value>, ApiError> {
    let pool = Database::pool().await?;
    if !about::update_program(pool, id, &body).await? {
        return Err(ApiError::not_found("Program not found."));
    }

    audit::record(admin.admin_id, AuditAction::Update, "PROGRAM", id, &ip).await;

    Ok(Json(json!({ "message": "Program updated" })))
}

pub async fn delete_program(
    Extension(admin): Extension<AuthAdmin>,
    ClientIp(ip): ClientIp,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    let pool = Database::pool().await?;
    if !about::delete_program(pool, id).await? {
        return Err(ApiError::not_found("Program not found."));
    }

    audit::record(admin.admin_id, AuditAction::Delete, "PROGRAM", id, &ip).await;

    Ok(Json(json!({ "message": "Program deleted" })))
}
