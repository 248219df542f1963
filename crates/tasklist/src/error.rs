//! Error types for the task store and the HTTP handlers.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Errors returned by [`crate::TaskStore`] operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No task carries the requested ID.
    #[error("task {0} not found")]
    NotFound(i64),
}

/// Body text for a `/task` request without a usable `id`.
pub const INVALID_ID: &str = "Invalid ID";
/// Body text for a `/delete` request without a usable `id`.
pub const INVALID_TASK_ID: &str = "Invalid task ID";
/// Body text for a create or update request whose body is not a task.
pub const INVALID_BODY: &str = "Invalid request body";

/// Errors surfaced to HTTP clients.
///
/// Each variant renders as its status code with a plain-text body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Missing or malformed input.
    #[error("{0}")]
    BadRequest(&'static str),

    /// Mutating endpoint called with the wrong verb.
    #[error("Method not supported")]
    MethodNotAllowed,

    /// Referenced task does not exist.
    #[error("Task not found")]
    NotFound,
}

impl ApiError {
    /// HTTP status for this error.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => Self::NotFound,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::BadRequest(INVALID_ID).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::MethodNotAllowed.status(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(ApiError::NotFound.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_messages() {
        assert_eq!(ApiError::BadRequest(INVALID_ID).to_string(), "Invalid ID");
        assert_eq!(
            ApiError::BadRequest(INVALID_TASK_ID).to_string(),
            "Invalid task ID"
        );
        assert_eq!(
            ApiError::MethodNotAllowed.to_string(),
            "Method not supported"
        );
        assert_eq!(ApiError::NotFound.to_string(), "Task not found");
    }

    #[test]
    fn test_store_error_conversion() {
        let err: ApiError = StoreError::NotFound(42).into();
        assert_eq!(err, ApiError::NotFound);
    }

    #[test]
    fn test_into_response_is_plain_text() {
        let response = ApiError::BadRequest(INVALID_BODY).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let content_type = response
            .headers()
            .get(axum::http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok());
        assert_eq!(content_type, Some("text/plain; charset=utf-8"));
    }
}
