use axum::{extract::Path, http::StatusCode, response::Json, Extension};
use serde_json::{json, Value};

use crate::audit::{self, AuditAction};
use crate::database::Database;
use crate::error::ApiError;
use crate::middleware::{AuthAdmin, ClientIp};
use crate::models::event::{self, CreateEvent, Event, UpdateEvent};

/// GET /api/events
pub async fn list() -> Result<Json<Vec<Event>>, ApiError> {
    let pool = Database::pool().await?;
    Ok(Json(event::get_all(pool).await?))
}

/// GET /api/events/:id
pub async fn get(Path(id): Path<i64>) -> Result<Json<Event>, ApiError> {
    let pool = Database::pool().await?;
    event::get_by_id(pool, id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Event not found"))
}

/// POST /api/events
pub async fn create(
    Extension(admin): Extension<AuthAdmin>,
    ClientIp(ip): ClientIp,
    Json(body): Json<CreateEvent>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    if body.event_name.trim().is_empty() {
        return Err(ApiError::bad_request("Event name is required"));
    }

    let pool = Database::pool().await?;
    let event_id = event::create(pool, &body).await?;

    audit::record(admin.admin_id, AuditAction::Create, "EVENT", event_id, &ip).await;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Event created successfully",
            "event_id": event_id,
        })),
    ))
}

/// PUT /api/events/:id - partial update
pub async fn update(
    Extension(admin): Extension<AuthAdmin>,
    ClientIp(ip): ClientIp,
    Path(id): Path<i64>,
    Json(body): Json<UpdateEvent>,
) -> Result<Json<Value>, ApiError> {
    let pool = Database::pool().await?;
    if !event::update(pool, id, &body).await? {
        return Err(ApiError::not_found("Event not found"));
    }

    audit::record(admin.admin_id, AuditAction::Update, "EVENT", id, &ip).await;

    Ok(Json(json!({ "message": "Event updated successfully" })))
}

/// DELETE /api/events/:id
pub async fn delete(
    Extension(admin): Extension<AuthAdmin>,
    ClientIp(ip): ClientIp,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    let pool = Database::pool().await?;
    if !event::delete(pool, id).await? {
        return Err(ApiError::not_found("Event not found"));
    }

    audit::record(admin.admin_id, AuditAction::Delete, "EVENT", id, &ip).await;

    Ok(Json(json!({ "message": "Event deleted successfully" })))
}
