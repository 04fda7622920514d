//! Lenient JSON body extractor.
//!
//! Persona endpoints treat a missing, unreadable, or non-JSON body as an
//! empty object so the request still reaches validation and fails there
//! with the interface's own 400 shape, never with an axum rejection.

use std::convert::Infallible;

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Like `axum::Json`, but falls back to `T::default()` instead of rejecting.
#[derive(Debug)]
pub struct LenientJson<T>(pub T);

impl<T, S> FromRequest<S> for LenientJson<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = match Bytes::from_request(req, state).await {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::debug!(error = %e, "Unreadable request body, using empty payload");
                return Ok(Self(T::default()));
            }
        };
        Ok(Self(parse_or_default(&bytes)))
    }
}

/// Parse `bytes` as a JSON object, or return `T::default()`.
pub fn parse_or_default<T: DeserializeOwned + Default>(bytes: &[u8]) -> T {
    if bytes.is_empty() {
        return T::default();
    }
    match serde_json::from_slice::<Value>(bytes) {
        Ok(value) => from_object_or_default(value),
        Err(e) => {
            tracing::debug!(error = %e, "Request body is not JSON, using empty payload");
            T::default()
        }
    }
}

/// Deserialize `value` only when it is a JSON object.
///
/// serde reads a JSON array into a named-field struct by position, so arrays
/// and scalars are turned into `T::default()` before they get that far.
pub fn from_object_or_default<T: DeserializeOwned + Default>(value: Value) -> T {
    if !value.is_object() {
        tracing::debug!("Request payload is not a JSON object, using empty payload");
        return T::default();
    }
    serde_json::from_value(value).unwrap_or_else(|e| {
        tracing::debug!(error = %e, "Request payload has an unexpected shape, using empty payload");
        T::default()
    })
}
