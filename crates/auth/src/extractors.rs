//! Axum extractors for authentication
//!
//! Generic over any state `S` where `AuthConfig: FromRef<S>`.

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::claims::JoblyClaims;
use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::jwt::{extract_bearer_token, validate_jwt_token};

/// Authenticated user extractor (JWT only)
#[derive(Debug)]
pub struct AuthUser(pub JoblyClaims);

impl<S> FromRequestParts<S> for AuthUser
where
    AuthConfig: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        let config = AuthConfig::from_ref(state);

        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .ok_or(AuthError::MissingAuthorization)?;

        let token = extract_bearer_token(auth_header)?;
        let claims = validate_jwt_token(&token, &config)?;

        Ok(AuthUser(claims))
    }
}

/// Admin extractor.
///
/// Like `AuthUser` but rejects tokens without `isAdmin: true`.
#[derive(Debug)]
pub struct AdminUser(pub JoblyClaims);

impl<S> FromRequestParts<S> for AdminUser
where
    AuthConfig: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        let AuthUser(claims) = AuthUser::from_request_parts(parts, state).await?;

        if !claims.is_admin {
            tracing::debug!(username = %claims.username, "Non-admin attempted admin operation");
            return Err(AuthError::AdminRequired);
        }

        Ok(AdminUser(claims))
    }
}
