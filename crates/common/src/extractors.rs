//! Request body extraction for Jobly handlers

use axum::{
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::Error;

/// JSON body that has passed its `Validate` rules.
///
/// Malformed JSON, unknown or mistyped fields and rule violations are all
/// rejected as [`Error::Validation`], so they share the API's JSON error body.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|e| {
            Error::Validation(format!("Invalid request body: {}", e.body_text()))
        })?;

        value
            .validate()
            .map_err(|e| Error::Validation(invalid_fields(&e)))?;
        Ok(ValidatedJson(value))
    }
}

/// `"Invalid fields: a, b"` with field names sorted
fn invalid_fields(errors: &ValidationErrors) -> String {
    let mut fields: Vec<String> = errors.errors().keys().map(|k| k.to_string()).collect();
    fields.sort();
    format!("Invalid fields: {}", fields.join(", "))
}
