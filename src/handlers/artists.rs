use axum::{extract::Path, http::StatusCode, response::Json, Extension};
use serde_json::{json, Value};

use crate::audit::{self, AuditAction};
use crate::database::Database;
use crate::error::ApiError;
use crate::middleware::{AuthAdmin, ClientIp};
use crate::models::artist::{self, Artist, ArtistInput};

/// GET /api/artists
pub async fn list() -> Result<Json<Vec<Artist>>, ApiError> {
    let pool = Database::pool().await?;
    Ok(Json(artist::get_all(pool).await?))
}

/// GET /api/artists/:id
pub async fn get(Path(id): Path<i64>) -> Result<Json<Artist>, ApiError> {
    let pool = Database::pool().await?;
    artist::get_by_id(pool, id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Artist not found"))
}

/// POST /api/artists
pub async fn create(
    Extension(admin): Extension<AuthAdmin>,
    ClientIp(ip): ClientIp,
    Json(body): Json<ArtistInput>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let full_name = body
        .full_name
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ApiError::bad_request("full_name is required"))?;

    let pool = Database::pool().await?;
    let artist_id = artist::create(
        pool,
        full_name,
        body.bio.as_deref(),
        body.profile_image.as_deref(),
    )
    .await?;

    audit::record(admin.admin_id, AuditAction::Create, "ARTIST", artist_id, &ip).await;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Artist created successfully",
            "artist_id": artist_id,
        })),
    ))
}

/// PUT /api/artists/:id - partial update
pub async fn update(
    Extension(admin): Extension<AuthAdmin>,
    ClientIp(ip): ClientIp,
    Path(id): Path<i64>,
    Json(body): Json<ArtistInput>,
) -> Result<Json<Value>, ApiError> {
    let pool = Database::pool().await?;
    if !artist::update(pool, id, &body).await? {
        return Err(ApiError::not_found("Artist not found"));
    }

    audit::record(admin.admin_id, AuditAction::Update, "ARTIST", id, &ip).await;

    Ok(Json(json!({ "message": "Artist updated successfully" })))
}

/// DELETE /api/artists/:id
pub async fn delete(
    Extension(admin): Extension<AuthAdmin>,
    ClientIp(ip): ClientIp,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    let pool = Database::pool().await?;
    if !artist::delete(pool, id).await? {
        return Err(ApiError::not_found("Artist not found"));
    }

    audit::record(admin.admin_id, AuditAction::Delete, "ARTIST", id, &ip).await;

    Ok(Json(json!({ "message": "Artist deleted successfully" })))
}
