use sqlx::PgPool;
use thiserror::Error;

use crate::auth::password;
use crate::models::admin;

/// Identity of a successfully verified admin account.
#[derive(Debug, Clone)]
pub struct AdminIdentity {
    pub admin_id: i64,
    pub username: String,
}

#[derive(Debug, Error)]
pub enum CredentialError {
    /// Unknown username and wrong password collapse into this one variant;
    /// callers cannot tell which occurred.
    #[error("authentication failed")]
    AuthenticationFailed,

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

// Structurally valid bcrypt hash compared against when the username does not
// exist, so both failure paths run one comparison.
const DUMMY_HASH: &str = "$2a$10$N9qo8uLOickgx2ZMRZoMyeIjZAgcfl7p92ldGxad68LJZdL17lhWy";

/// Credential Verifier: look up the stored hash for `username` and compare.
pub async fn verify_credentials(
    pool: &PgPool,
    username: &str,
    plaintext: &str,
) -> Result<AdminIdentity, CredentialError> {
    match admin::find_by_username(pool, username).await? {
        Some(account) => {
            if password::verify_password(plaintext, account.password_hash.trim()) {
                Ok(AdminIdentity {
                    admin_id: account.admin_id,
                    username: account.username,
                })
            } else {
                Err(CredentialError::AuthenticationFailed)
            }
        }
        None => {
            let _ = password::verify_password(plaintext, DUMMY_HASH);
            Err(CredentialError::AuthenticationFailed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dummy_hash_is_parseable_and_never_matches() {
        assert!(!password::verify_password("whatever1", DUMMY_HASH));
    }

    #[test]
    fn freshly_hashed_password_verifies() {
        // Same import path the create-admin binary uses
        let hash = crate::auth::hash_password("correct-password1").unwrap();
        assert!(password::verify_password("correct-password1", &hash));
    }
}
