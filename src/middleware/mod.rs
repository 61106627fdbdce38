pub mod auth;
pub mod client_ip;

pub use auth::{admin_auth, AuthAdmin, SESSION_COOKIE};
pub use client_ip::ClientIp;
