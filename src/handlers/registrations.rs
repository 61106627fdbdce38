//! Public course signup plus the admin-side student/registration dashboard.

use axum::{extract::Path, http::StatusCode, response::Json, Extension};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::audit::{self, AuditAction};
use crate::database::Database;
use crate::error::ApiError;
use crate::middleware::{AuthAdmin, ClientIp};
use crate::models::registration::{
    self, RegistrationDetail, RegistrationSummary, Student, StudentInput, UpdateRegistration,
};

#[derive(Debug, Deserialize)]
pub struct PublicRegistration {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub address: Option<String>,
    pub age: Option<i32>,
    pub occupation: Option<String>,
    pub photo: Option<String>,
    pub course_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct CreateRegistration {
    pub student_id: i64,
    pub course_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct StatusUpdate {
    pub status: String,
}

/// POST /api/register - the one unauthenticated mutation in the API.
/// Creates the student and the registration in a single transaction.
pub async fn public_register(
    Json(body): Json<PublicRegistration>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    if body.full_name.trim().is_empty() || body.email.trim().is_empty() || body.phone.trim().is_empty()
    {
        return Err(ApiError::bad_request(
            "Missing required fields: full_name, email, phone, and course_id are mandatory.",
        ));
    }

    let student = StudentInput {
        full_name: body.full_name,
        email: body.email,
        phone: body.phone,
        address: body.address,
        age: body.age,
        occupation: body.occupation,
        photo: body.photo,
    };

    let pool = Database::pool().await?;
    let (student_id, registration_id) =
        registration::create_student_and_registration(pool, &student, body.course_id)
            .await
            .map_err(|err| match &err {
                sqlx::Error::Database(db) if db.is_unique_violation() => {
                    ApiError::conflict("Use a Unique Email")
                }
                _ => ApiError::from(err),
            })?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Registration successful! We will soon reach out to you.",
            "student_id": student_id,
            "registration_id": registration_id,
        })),
    ))
}

// --- Students (admin) ---

/// GET /api/register/students
pub async fn list_students() -> Result<Json<Vec<Student>>, ApiError> {
    let pool = Database::pool().await?;
    Ok(Json(registration::get_all_students(pool).await?))
}

/// GET /api/register/students/:id
pub async fn get_student(Path(id): Path<i64>) -> Result<Json<Student>, ApiError> {
    let pool = Database::pool().await?;
    registration::get_student_by_id(pool, id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Student not found"))
}

/// POST /api/register/students
pub async fn create_student(
    Extension(admin): Extension<AuthAdmin>,
    ClientIp(ip): ClientIp,
    Json(body): Json<StudentInput>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let pool = Database::pool().await?;
    let id = registration::create_student(pool, &body).await?;

    audit::record(admin.admin_id, AuditAction::Create, "STUDENT", id, &ip).await;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Student created", "id": id })),
    ))
}

/// PUT /api/register/students/:id
pub async fn update_student(
    Extension(admin): Extension<AuthAdmin>,
    ClientIp(ip): ClientIp,
    Path(id): Path<i64>,
    Json(body): Json<StudentInput>,
) -> Result<Json<Value>, ApiError> {
    let pool = Database::pool().await?;
    if !registration::update_student(pool, id, &body).await? {
        return Err(ApiError::not_found("Student not found"));
    }

    audit::record(admin.admin_id, AuditAction::Update, "STUDENT", id, &ip).await;

    Ok(Json(json!({ "message": "Student updated" })))
}

/// DELETE /api/register/students/:id
pub async fn delete_student(
    Extension(admin): Extension<AuthAdmin>,
    ClientIp(ip): ClientIp,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    let pool = Database::pool().await?;
    if !registration::delete_student(pool, id).await? {
        return Err(ApiError::not_found("Student not found"));
    }

    audit::record(admin.admin_id, AuditAction::Delete, "STUDENT", id, &ip).await;

    Ok(Json(json!({ "message": "Student deleted" })))
}

// --- Registrations (admin) ---

/// GET /api/register/registration
pub async fn list_registrations() -> Result<Json<Vec<RegistrationSummary>>, ApiError> {
    let pool = Database::pool().await?;
    Ok(Json(registration::get_all_registrations(pool).await?))
}

/// GET /api/register/registration/:id
pub async fn get_registration(Path(id): Path<i64>) -> Result<Json<RegistrationDetail>, ApiError> {
    let pool = Database::pool().await?;
    registration::get_registration_by_id(pool, id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Registration not found"))
}

/// POST /api/register/registration
pub async fn create_registration(
    Extension(admin): Extension<AuthAdmin>,
    ClientIp(ip): ClientIp,
    Json(body): Json<CreateRegistration>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let pool = Database::pool().await?;
    let id = registration::create_registration(pool, body.student_id, body.course_id).await?;

    audit::record(admin.admin_id, AuditAction::Create, "REGISTRATION", id, &ip).await;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Registration created", "id": id })),
    ))
}

/// PUT /api/register/registration/:id
pub async fn update_registration(
    Extension(admin): Extension<AuthAdmin>,
    ClientIp(ip): ClientIp,
    Path(id): Path<i64>,
    Json(body): Json<UpdateRegistration>,
) -> Result<Json<Value>, ApiError> {
    if body.student_id.is_none() && body.course_id.is_none() {
        return Err(ApiError::bad_request(
            "At least one field (student_id or course_id) must be provided.",
        ));
    }

    let pool = Database::pool().await?;
    if !registration::update_registration(pool, id, &body).await? {
        return Err(ApiError::not_found("Registration not found"));
    }

    audit::record(admin.admin_id, AuditAction::Update, "REGISTRATION", id, &ip).await;

    Ok(Json(json!({ "message": "Registration updated" })))
}

/// PATCH /api/register/registration/:id/status
pub async fn update_registration_status(
    Extension(admin): Extension<AuthAdmin>,
    ClientIp(ip): ClientIp,
    Path(id): Path<i64>,
    Json(body): Json<StatusUpdate>,
) -> Result<Json<Value>, ApiError> {
    if body.status != "Read" && body.status != "Unread" {
        return Err(ApiError::bad_request(
            "Invalid status provided. Must be 'Read' or 'Unread'.",
        ));
    }

    let pool = Database::pool().await?;
    if !registration::update_registration_status(pool, id, &body.status).await? {
        return Err(ApiError::not_found("Registration not found"));
    }

    audit::record(admin.admin_id, AuditAction::Update, "REGISTRATION", id, &ip).await;

    Ok(Json(json!({
        "message": format!("Registration {} status updated to {}", id, body.status)
    })))
}

/// DELETE /api/register/registration/:id
pub async fn delete_registration(
    Extension(admin): Extension<AuthAdmin>,
    ClientIp(ip): ClientIp,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    let pool = Database::pool().await?;
    if !registration::delete_registration(pool, id).await? {
        return Err(ApiError::not_found("Registration not found"));
    }

    audit::record(admin.admin_id, AuditAction::Delete, "REGISTRATION", id, &ip).await;

    Ok(Json(json!({ "message": "Registration deleted" })))
}
