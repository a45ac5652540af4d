//! JSON body extractor that also runs declarative validation.

use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

use carshop_core::error::AppError;

use crate::error::ApiError;

/// A JSON body that parsed and passed [`Validate`].
///
/// Unparsable or mistyped JSON is rejected as `BadRequest`; constraint
/// violations as `Validation` with one detail per violated constraint.
#[derive(Debug, Clone)]
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::bad_request(rejection.body_text()))?;

        value
            .validate()
            .map_err(|errors| AppError::validation_errors(validation_messages(&errors)))?;

        Ok(Self(value))
    }
}

/// Flatten validation errors into their messages, sorted for stable output.
pub fn validation_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut messages: Vec<String> = errors
        .errors()
        .values()
        .flat_map(|kind| match kind {
            ValidationErrorsKind::Field(field_errors) => field_errors
                .iter()
                .map(|err| {
                    err.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| err.code.to_string())
                })
                .collect::<Vec<_>>(),
            ValidationErrorsKind::Struct(nested) => validation_messages(nested),
            ValidationErrorsKind::List(items) => items
                .values()
                .flat_map(|nested| validation_messages(nested))
                .collect(),
        })
        .collect();
    messages.sort();
    messages.dedup();
    messages
}
