//! Query-string extractor with API error rejections.

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use carshop_core::error::AppError;

use crate::error::ApiError;

/// Like [`Query`], but a malformed query string yields a `400` in the
/// API's error format.
#[derive(Debug, Clone)]
pub struct SearchQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for SearchQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::bad_request(rejection.body_text()))?;
        Ok(Self(value))
    }
}
