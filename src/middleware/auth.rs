use axum::{
    extract::Request,
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;

use crate::auth::{validate_token, Claims, TokenError};
use crate::config;
use crate::error::ApiError;

/// Name of the HttpOnly session cookie set at login.
pub const SESSION_COOKIE: &str = "adminToken";

/// Authenticated admin context extracted from the session token
#[derive(Clone, Debug)]
pub struct AuthAdmin {
    pub admin_id: i64,
    pub username: String,
}

impl From<Claims> for AuthAdmin {
    fn from(claims: Claims) -> Self {
        Self {
            admin_id: claims.admin_id,
            username: claims.username,
        }
    }
}

/// Request gate for admin routes. Each request is evaluated independently:
/// extract the token (cookie first, bearer header as fallback), validate it,
/// and attach the identity for downstream handlers.
pub async fn admin_auth(mut request: Request, next: Next) -> Result<Response, ApiError> {
    let token = extract_token(request.headers())
        .ok_or_else(|| ApiError::unauthorized("Authentication token missing"))?;

    let secret = config::config().security.jwt_secret.as_bytes();
    let claims = validate_token(&token, secret).map_err(|err| match err {
        TokenError::Expired => ApiError::unauthorized("Session expired. Please log in again."),
        _ => ApiError::unauthorized("Unauthorized access"),
    })?;

    request.extensions_mut().insert(AuthAdmin::from(claims));
    Ok(next.run(request).await)
}

/// Cookie takes priority; `Authorization: Bearer` is accepted for
/// non-browser clients when no cookie is present.
fn extract_token(headers: &HeaderMap) -> Option<String> {
    let jar = CookieJar::from_headers(headers);
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        if !cookie.value().is_empty() {
            return Some(cookie.value().to_string());
        }
    }

    let auth_header = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = auth_header.strip_prefix("Bearer ")?.trim();
    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(pairs: &[(&str, &str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.append(
                axum::http::HeaderName::try_from(*name).unwrap(),
                HeaderValue::from_str(value).unwrap(),
            );
        }
        map
    }

    #[test]
    fn no_cookie_no_header_yields_none() {
        assert!(extract_token(&headers(&[])).is_none());
    }

    #[test]
    fn cookie_wins_over_bearer_header() {
        let map = headers(&[
            ("cookie", "adminToken=from-cookie"),
            ("authorization", "Bearer from-header"),
        ]);
        assert_eq!(extract_token(&map).as_deref(), Some("from-cookie"));
    }

    #[test]
    fn bearer_fallback_when_no_cookie() {
        let map = headers(&[("authorization", "Bearer abc.def.ghi")]);
        assert_eq!(extract_token(&map).as_deref(), Some("abc.def.ghi"));
    }

    #[test]
    fn non_bearer_authorization_is_ignored() {
        let map = headers(&[("authorization", "Basic dXNlcjpwYXNz")]);
        assert!(extract_token(&map).is_none());
    }

    #[test]
    fn empty_cookie_falls_through_to_header() {
        let map = headers(&[
            ("cookie", "adminToken="),
            ("authorization", "Bearer fallback"),
        ]);
        assert_eq!(extract_token(&map).as_deref(), Some("fallback"));
    }
}
