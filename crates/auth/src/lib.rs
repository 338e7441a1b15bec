//! Authentication middleware for Jobly API
//!
//! Provides JWT validation and axum extractors that work with any domain
//! state implementing `FromRef<S>` for `AuthConfig`.

mod claims;
mod config;
mod error;
mod extractors;
mod jwt;

pub use claims::JoblyClaims;
pub use config::AuthConfig;
pub use error::AuthError;
pub use extractors::{AdminUser, AuthUser};
pub use jwt::issue_token;
