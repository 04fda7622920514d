//! Interface error types mapping persona failures to HTTP responses.
//!
//! Both interfaces share one taxonomy: validation failures are 400, every
//! other failure (unknown persona, provider fault, empty reply) is 500.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use stoa_types::error::PersonaError;
use stoa_types::request::PersonaReply;

use crate::http::response::{CallableErrorBody, CallableErrorDetail};

/// Error for the plain JSON interface: `{ "success": false, "error": "..." }`.
#[derive(Debug)]
pub enum AppError {
    /// Malformed request, surfaced before any external call.
    Validation(String),
    /// Resolve or generation failure.
    Internal(String),
}

impl From<PersonaError> for AppError {
    fn from(e: PersonaError) -> Self {
        if e.is_invalid_argument() {
            AppError::Validation(e.to_string())
        } else {
            AppError::Internal(e.to_string())
        }
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            AppError::Validation(msg) | AppError::Internal(msg) => msg,
        };
        (status, Json(PersonaReply::failed(message))).into_response()
    }
}

/// Status kinds of the structured call interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallableStatus {
    InvalidArgument,
    Internal,
}

impl CallableStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            CallableStatus::InvalidArgument => "invalid-argument",
            CallableStatus::Internal => "internal",
        }
    }

    pub fn http_status(self) -> StatusCode {
        match self {
            CallableStatus::InvalidArgument => StatusCode::BAD_REQUEST,
            CallableStatus::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error for the structured call interface:
/// `{ "error": { "status": "...", "message": "..." } }`.
#[derive(Debug)]
pub struct CallableError {
    pub status: CallableStatus,
    pub message: String,
}

impl From<PersonaError> for CallableError {
    fn from(e: PersonaError) -> Self {
        let status = if e.is_invalid_argument() {
            CallableStatus::InvalidArgument
        } else {
            CallableStatus::Internal
        };
        Self {
            status,
            message: e.to_string(),
        }
    }
}

impl IntoResponse for CallableError {
    fn into_response(self) -> Response {
        let body = CallableErrorBody {
            error: CallableErrorDetail {
                status: self.status.as_str(),
                message: self.message,
            },
        };
        (self.status.http_status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stoa_types::llm::LlmError;

    #[test]
    fn validation_maps_to_bad_request() {
        let err = AppError::from(PersonaError::InvalidArgument("nope".into()));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);

        let err = CallableError::from(PersonaError::InvalidArgument("nope".into()));
        assert_eq!(err.status, CallableStatus::InvalidArgument);
        assert_eq!(err.message, "nope");
    }

    #[test]
    fn everything_else_is_internal() {
        let unknown = AppError::from(PersonaError::UnknownPersona("Plato".into()));
        assert_eq!(unknown.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let upstream = CallableError::from(PersonaError::Upstream(LlmError::AuthenticationFailed));
        assert_eq!(upstream.status, CallableStatus::Internal);
        assert_eq!(upstream.status.http_status(), StatusCode::INTERNAL_SERVER_ERROR);

        let empty = CallableError::from(PersonaError::EmptyResponse);
        assert_eq!(empty.status.as_str(), "internal");
    }
}
