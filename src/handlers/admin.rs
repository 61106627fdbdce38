//! Admin session endpoints: login, logout, password rotation, and the
//! sliding-window session refresh (`/me`).

use axum::{response::Json, Extension};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::audit::{self, AuditAction};
use crate::auth::{self, issue_token, Claims, CredentialError};
use crate::config;
use crate::database::Database;
use crate::error::ApiError;
use crate::middleware::{AuthAdmin, ClientIp, SESSION_COOKIE};
use crate::models::admin;

const LOGIN_FAILED: &str = "Login failed. Check your credentials.";

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePasswordRequest {
    pub old_password: String,
    pub new_password: String,
}

/// POST /api/admin/login
pub async fn login(
    jar: CookieJar,
    Json(body): Json<LoginRequest>,
) -> Result<(CookieJar, Json<Value>), ApiError> {
    let username = body.username.trim();
    if username.is_empty() || username.len() > 50 || body.password.len() < 8 {
        return Err(ApiError::bad_request("Invalid input data"));
    }

    let pool = Database::pool().await?;
    let identity = auth::verify_credentials(pool, username, &body.password)
        .await
        .map_err(|err| match err {
            CredentialError::AuthenticationFailed => ApiError::unauthorized(LOGIN_FAILED),
            CredentialError::Database(e) => ApiError::from(e),
        })?;

    let token = sign_session(Claims::new(identity.admin_id, identity.username.clone()))?;
    let jar = jar.add(session_cookie(token, time::Duration::minutes(30)));

    Ok((
        jar,
        Json(json!({
            "message": "Login successful",
            "username": identity.username,
        })),
    ))
}

/// POST /api/admin/logout
///
/// Clears the cookie client-side. The token itself stays valid until its
/// natural expiry; there is no server-side revocation.
pub async fn logout(
    Extension(_admin): Extension<AuthAdmin>,
    jar: CookieJar,
) -> (CookieJar, Json<Value>) {
    (
        jar.add(removal_cookie()),
        Json(json!({ "message": "Logged out successfully" })),
    )
}

/// PUT /api/admin/update-password
pub async fn update_password(
    Extension(admin): Extension<AuthAdmin>,
    ClientIp(ip): ClientIp,
    jar: CookieJar,
    Json(body): Json<UpdatePasswordRequest>,
) -> Result<(CookieJar, Json<Value>), ApiError> {
    if body.old_password.len() < 8 {
        return Err(ApiError::bad_request(
            "Old password required and must be at least 8 characters",
        ));
    }
    if body.new_password.len() < 8 {
        return Err(ApiError::bad_request(
            "New password must be at least 8 characters long",
        ));
    }

    let pool = Database::pool().await?;
    let stored = admin::hashed_password(pool, admin.admin_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Admin not found"))?;

    if !auth::password::verify_password(&body.old_password, stored.trim()) {
        return Err(ApiError::unauthorized("Incorrect current password"));
    }

    let new_hash = auth::password::hash_password(&body.new_password).map_err(|err| {
        tracing::error!("Password hashing failed: {}", err);
        ApiError::internal_server_error("Password update failed")
    })?;

    if !admin::update_password(pool, admin.admin_id, &new_hash).await? {
        return Err(ApiError::internal_server_error("Password update failed"));
    }

    audit::record(
        admin.admin_id,
        AuditAction::Update,
        "ADMIN_PASSWORD",
        admin.admin_id,
        &ip,
    )
    .await;

    // Force a fresh login with the new password
    Ok((
        jar.add(removal_cookie()),
        Json(json!({ "message": "Password updated successfully" })),
    ))
}

/// GET /api/admin/me - session check that also re-issues the token,
/// silently extending an active session by another 20 minutes.
pub async fn me(
    Extension(admin): Extension<AuthAdmin>,
    jar: CookieJar,
) -> Result<(CookieJar, Json<Value>), ApiError> {
    let token = sign_session(Claims::new(admin.admin_id, admin.username.clone()))?;
    let jar = jar.add(session_cookie(
        token,
        time::Duration::minutes(auth::token::TOKEN_TTL_MINUTES),
    ));

    Ok((
        jar,
        Json(json!({
            "valid": true,
            "username": admin.username,
        })),
    ))
}

fn sign_session(claims: Claims) -> Result<String, ApiError> {
    issue_token(&claims, config::config().security.jwt_secret.as_bytes()).map_err(|err| {
        tracing::error!("Token signing failed: {}", err);
        ApiError::internal_server_error("Could not create session")
    })
}

fn session_cookie(token: String, max_age: time::Duration) -> Cookie<'static> {
    let mut cookie = Cookie::new(SESSION_COOKIE, token);
    cookie.set_http_only(true);
    cookie.set_same_site(SameSite::Lax);
    cookie.set_path("/");
    cookie.set_secure(config::config().security.cookie_secure);
    cookie.set_max_age(max_age);
    cookie
}

/// Expired empty-value cookie, sent unconditionally so the clearing header
/// goes out even when the session arrived as a bearer header instead of a
/// request cookie.
fn removal_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::new(SESSION_COOKIE, "");
    cookie.set_http_only(true);
    cookie.set_same_site(SameSite::Lax);
    cookie.set_path("/");
    cookie.set_secure(config::config().security.cookie_secure);
    cookie.set_max_age(time::Duration::ZERO);
    cookie
}
