use axum::{
    extract::Path,
    http::StatusCode,
    response::Json,
    Extension,
};
use serde_json::{json, Value};

use crate::audit::{self, AuditAction};
use crate::database::Database;
use crate::error::ApiError;
use crate::middleware::{AuthAdmin, ClientIp};
use crate::models::course::{self, Course, CourseInput};

/// GET /api/courses
pub async fn list() -> Result<Json<Vec<Course>>, ApiError> {
    let pool = Database::pool().await?;
    Ok(Json(course::get_all(pool).await?))
}

/// GET /api/courses/:id
pub async fn get(Path(id): Path<i64>) -> Result<Json<Course>, ApiError> {
    let pool = Database::pool().await?;
    course::get_by_id(pool, id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Course not found"))
}

/// POST /api/courses
pub async fn create(
    Extension(admin): Extension<AuthAdmin>,
    ClientIp(ip): ClientIp,
    Json(body): Json<CourseInput>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    if body.title.trim().is_empty() {
        return Err(ApiError::bad_request("Course title is required"));
    }

    let pool = Database::pool().await?;
    let course_id = course::create(pool, &body).await?;

    audit::record(admin.admin_id, AuditAction::Create, "COURSE", course_id, &ip).await;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Course created successfully",
            "course_id": course_id,
        })),
    ))
}

/// PUT /api/courses/:id
pub async fn update(
    Extension(admin): Extension<AuthAdmin>,
    ClientIp(ip): ClientIp,
    Path(id): Path<i64>,
    Json(body): Json<CourseInput>,
) -> Result<Json<Value>, ApiError> {
    if body.title.trim().is_empty() {
        return Err(ApiError::bad_request("Course title is required"));
    }

    let pool = Database::pool().await?;
    if !course::update(pool, id, &body).await? {
        return Err(ApiError::not_found("Course not found"));
    }

    audit::record(admin.admin_id, AuditAction::Update, "COURSE", id, &ip).await;

    Ok(Json(json!({ "message": "Course updated successfully" })))
}

/// DELETE /api/courses/:id
pub async fn delete(
    Extension(admin): Extension<AuthAdmin>,
    ClientIp(ip): ClientIp,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    let pool = Database::pool().await?;
    if !course::delete(pool, id).await? {
        return Err(ApiError::not_found("Course not found"));
    }

    audit::record(admin.admin_id, AuditAction::Delete, "COURSE", id, &ip).await;

    Ok(Json(json!({ "message": "Course deleted successfully" })))
}
