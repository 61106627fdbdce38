use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fixed session lifetime. Sessions are extended by re-issuing a token via
/// GET /api/admin/me, never by stretching an existing one.
pub const TOKEN_TTL_MINUTES: i64 = 20;

/// Identity carried inside the signed session token. Tokens are stateless:
/// nothing is persisted server-side and there is no revocation list, so a
/// token stays valid until `exp` regardless of logout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub admin_id: i64,
    pub username: String,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn new(admin_id: i64, username: impl Into<String>) -> Self {
        Self::with_ttl(admin_id, username, Duration::minutes(TOKEN_TTL_MINUTES))
    }

    pub fn with_ttl(admin_id: i64, username: impl Into<String>, ttl: Duration) -> Self {
        let now = Utc::now();
        Self {
            admin_id,
            username: username.into(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        }
    }
}

#[derive(Debug, Error)]
pub enum TokenError {
    /// Expiry elapsed; the client should log in again.
    #[error("session token expired")]
    Expired,

    /// Anything else: bad signature, malformed payload, wrong algorithm.
    /// Deliberately not broken down further for callers.
    #[error("invalid session token")]
    Invalid,

    #[error("token signing failed: {0}")]
    Signing(String),
}

pub fn issue_token(claims: &Claims, secret: &[u8]) -> Result<String, TokenError> {
    encode(&Header::default(), claims, &EncodingKey::from_secret(secret))
        .map_err(|e| TokenError::Signing(e.to_string()))
}

pub fn validate_token(token: &str, secret: &[u8]) -> Result<Claims, TokenError> {
    let mut validation = Validation::default();
    // Default leeway is 60s; the 20-minute window is exact.
    validation.leeway = 0;

    decode::<Claims>(token, &DecodingKey::from_secret(secret), &validation)
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
            _ => TokenError::Invalid,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"unit-test-secret";

    #[test]
    fn round_trip_preserves_identity() {
        let claims = Claims::new(7, "admin1");
        let token = issue_token(&claims, SECRET).unwrap();
        let decoded = validate_token(&token, SECRET).unwrap();
        assert_eq!(decoded.admin_id, 7);
        assert_eq!(decoded.username, "admin1");
        assert_eq!(decoded.exp, claims.exp);
    }

    #[test]
    fn expired_token_is_rejected_as_expired() {
        let claims = Claims::with_ttl(1, "admin1", Duration::minutes(-1));
        let token = issue_token(&claims, SECRET).unwrap();
        assert!(matches!(
            validate_token(&token, SECRET),
            Err(TokenError::Expired)
        ));
    }

    #[test]
    fn tampered_signature_is_invalid_not_expired() {
        // Even an already-expired token must come back Invalid once tampered
        let claims = Claims::with_ttl(1, "admin1", Duration::minutes(-1));
        let token = issue_token(&claims, SECRET).unwrap();
        let mut bytes = token.into_bytes();
        let last = bytes.len() - 1;
        bytes[last] = if bytes[last] == b'A' { b'B' } else { b'A' };
        let tampered = String::from_utf8(bytes).unwrap();
        assert!(matches!(
            validate_token(&tampered, SECRET),
            Err(TokenError::Invalid)
        ));
    }

    #[test]
    fn wrong_secret_is_invalid() {
        let token = issue_token(&Claims::new(1, "admin1"), SECRET).unwrap();
        assert!(matches!(
            validate_token(&token, b"another-secret"),
            Err(TokenError::Invalid)
        ));
    }

    #[test]
    fn garbage_is_invalid() {
        assert!(matches!(
            validate_token("not.a.token", SECRET),
            Err(TokenError::Invalid)
        ));
    }

    #[test]
    fn refresh_moves_expiry_forward() {
        let first = Claims::new(1, "admin1");
        std::thread::sleep(std::time::Duration::from_millis(1100));
        let second = Claims::new(1, "admin1");
        assert!(second.exp > first.exp);
    }
}
