use axum::{extract::Path, http::StatusCode, response::Json, Extension};
use serde_json::{json, Value};

use crate::audit::{self, AuditAction};
use crate::database::Database;
use crate::error::ApiError;
use crate::middleware::{AuthAdmin, ClientIp};
use crate::models::teacher::{self, Teacher, TeacherInput};

/// GET /api/teachers
pub async fn list() -> Result<Json<Vec<Teacher>>, ApiError> {
    let pool = Database::pool().await?;
    Ok(Json(teacher::get_all(pool).await?))
}

/// GET /api/teachers/:id
pub async fn get(Path(id): Path<i64>) -> Result<Json<Teacher>, ApiError> {
    let pool = Database::pool().await?;
    teacher::get_by_id(pool, id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Teacher not found"))
}

/// POST /api/teachers
pub async fn create(
    Extension(admin): Extension<AuthAdmin>,
    ClientIp(ip): ClientIp,
    Json(body): Json<TeacherInput>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    if body.full_name.trim().is_empty() {
        return Err(ApiError::bad_request(
            "full_name is required. Please enter the teacher's full name.",
        ));
    }

    let pool = Database::pool().await?;
    let teacher_id = teacher::create(pool, &body).await?;

    audit::record(admin.admin_id, AuditAction::Create, "TEACHER", teacher_id, &ip).await;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Teacher created successfully",
            "teacher_id": teacher_id,
        })),
    ))
}

/// PUT /api/teachers/:id
pub async fn update(
    Extension(admin): Extension<AuthAdmin>,
    ClientIp(ip): ClientIp,
    Path(id): Path<i64>,
    Json(body): Json<TeacherInput>,
) -> Result<Json<Value>, ApiError> {
    if body.full_name.trim().is_empty() {
        return Err(ApiError::bad_request(
            "full_name is required. Please enter the teacher's full name.",
        ));
    }

    let pool = Database::pool().await?;
    if !teacher::update(pool, id, &body).await? {
        return Err(ApiError::not_found("Teacher not found"));
    }

    audit::record(admin.admin_id, AuditAction::Update, "TEACHER", id, &ip).await;

    Ok(Json(json!({ "message": "Teacher updated successfully" })))
}

/// DELETE /api/teachers/:id
pub async fn delete(
    Extension(admin): Extension<AuthAdmin>,
    ClientIp(ip): ClientIp,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    let pool = Database::pool().await?;
    if !teacher::delete(pool, id).await? {
        return Err(ApiError::not_found("Teacher not found"));
    }

    audit::record(admin.admin_id, AuditAction::Delete, "TEACHER", id, &ip).await;

    Ok(Json(json!({ "message": "Teacher deleted successfully" })))
}
