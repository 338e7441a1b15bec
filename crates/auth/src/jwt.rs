//! JWT validation and token extraction helpers

use axum::http::HeaderValue;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::claims::JoblyClaims;
use crate::config::AuthConfig;
use crate::error::AuthError;

/// Validate an HS256 bearer token
pub(crate) fn validate_jwt_token(
    token: &str,
    config: &AuthConfig,
) -> Result<JoblyClaims, AuthError> {
    let validation = Validation::new(Algorithm::HS256);
    let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_ref());

    let token_data = decode::<JoblyClaims>(token, &decoding_key, &validation).map_err(|e| {
        tracing::debug!(error = %e, "JWT validation failed");
        AuthError::InvalidToken
    })?;

    Ok(token_data.claims)
}

/// Issue a signed token for `username`, valid for `ttl_seconds`
pub fn issue_token(
    username: &str,
    is_admin: bool,
    ttl_seconds: u64,
    config: &AuthConfig,
) -> Result<String, AuthError> {
    let now = chrono::Utc::now().timestamp().max(0) as u64;
    let claims = JoblyClaims {
        username: username.to_string(),
        is_admin,
        iat: now,
        exp: now + ttl_seconds,
    };

    let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_ref());
    encode(&Header::new(Algorithm::HS256), &claims, &encoding_key).map_err(|e| {
        tracing::error!(error = %e, "JWT encoding failed");
        AuthError::TokenIssueFailed
    })
}

/// Extract bearer token from Authorization header
pub(crate) fn extract_bearer_token(header: &HeaderValue) -> Result<String, AuthError> {
    let header_str = header
        .to_str()
        .map_err(|_| AuthError::InvalidAuthorizationFormat)?;

    if let Some(token) = header_str.strip_prefix("Bearer ") {
        Ok(token.to_string())
    } else {
        Err(AuthError::InvalidAuthorizationFormat)
    }
}
