use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::domain::clients::ClientError;

/// Generic message for requests rejected before any upstream call
const MALFORMED_INPUT_MSG: &str = "Input was malformed";

/// API error rendered to callers
///
/// Every failure leaves the service in this shape: an HTTP status, a
/// stable human-readable message, and zero or more detail strings. Raw
/// upstream bodies and transport errors never appear here.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    pub errors: Vec<String>,
}

impl ApiError {
    /// Creates a new API error without detail entries
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            errors: Vec::new(),
        }
    }

    /// Creates a new API error with detail entries
    pub fn with_errors(
        status: StatusCode,
        message: impl Into<String>,
        errors: Vec<String>,
    ) -> Self {
        Self {
            status,
            message: message.into(),
            errors,
        }
    }

    /// Creates a 400 for a body or path parameter that failed to parse
    pub fn malformed_input(detail: impl Into<String>) -> Self {
        Self::with_errors(
            StatusCode::BAD_REQUEST,
            MALFORMED_INPUT_MSG,
            vec![detail.into()],
        )
    }

    /// Creates the generic 500 unknown-failure error
    pub fn unknown_failure() -> Self {
        ClientError::Unknown.into()
    }
}

/// Centralized mapping from client outcomes to response statuses
///
/// Applied uniformly after every handler invocation via `?`.
impl From<ClientError> for ApiError {
    fn from(err: ClientError) -> Self {
        let message = err.to_string();
        match err {
            ClientError::NotFound(_) => Self {
                status: StatusCode::NOT_FOUND,
                errors: vec![message.clone()],
                message,
            },
            ClientError::InvalidInput { errors } => Self {
                status: StatusCode::BAD_REQUEST,
                message,
                errors,
            },
            ClientError::Unknown => Self {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message,
                errors: vec!["error occurred".to_string()],
            },
        }
    }
}

/// A missing or unparseable request body short-circuits to 400 before
/// the forwarding layer is ever invoked.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::malformed_input(rejection.body_text())
    }
}

/// A path parameter of the wrong type short-circuits the same way.
impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::malformed_input(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(status = %self.status, message = %self.message, "request failed");
        } else {
            tracing::debug!(status = %self.status, message = %self.message, "request rejected");
        }

        let body = Json(json!({
            "status": self.status.as_u16(),
            "message": self.message,
            "errors": self.errors,
        }));

        (self.status, body).into_response()
    }
}
