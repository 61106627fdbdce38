pub mod credentials;
pub mod password;
pub mod token;

pub use credentials::{verify_credentials, AdminIdentity, CredentialError};
pub use password::{hash_password, verify_password};
pub use token::{issue_token, validate_token, Claims, TokenError};
