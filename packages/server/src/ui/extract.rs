//! Request extractors and input helpers.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// JSON request body.
///
/// An empty body is read as `T::default()` (all fields absent) so that handlers
/// report missing fields instead of a parse failure. Malformed JSON is a 400.
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Default + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::Validation(format!("Invalid request body: {e}")))?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(T::default()));
        }

        serde_json::from_slice(&bytes).map(Self).map_err(|e| {
            tracing::warn!("Malformed JSON body: {}", e);
            ApiError::Validation("Invalid JSON body".to_string())
        })
    }
}

/// Treat an empty string the same as an absent field.
pub fn required(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
