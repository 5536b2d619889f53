//! Application error types and their HTTP rendering.
//!
//! Domain and infrastructure failures are represented by [`AppError`].
//! At the HTTP boundary an error is paired with a request description via
//! [`AppError::with_request`] and rendered as an [`ErrorDetails`] JSON body.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

/// Failure conditions raised by the service and its collaborators.
#[derive(Debug, Error)]
pub enum AppError {
    /// Request payload failed declarative validation.
    #[error("{0}")]
    Validation(String),

    /// A user with the given email address already exists.
    #[error("user already exists with the given email: {0}")]
    EmailAlreadyExists(String),

    /// No user exists with the given id.
    #[error("user not found with id: {0}")]
    UserNotFound(i64),

    /// Underlying database failure.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Any other internal failure.
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    /// HTTP status this error maps to.
    ///
    /// The duplicate-email condition maps to 404, not 409. That mapping is
    /// inherited from the original service contract and kept as-is.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::EmailAlreadyExists(_) => StatusCode::NOT_FOUND,
            AppError::UserNotFound(_) => StatusCode::NOT_FOUND,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable machine-readable error code carried in the response body.
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::EmailAlreadyExists(_) => "EMAIL_ALREADY_EXIST",
            AppError::UserNotFound(_) => "USER_NOT_FOUND",
            AppError::Database(_) | AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Attaches the request description, producing a responder.
    pub fn with_request(self, request: impl Into<String>) -> ErrorResponse {
        ErrorResponse {
            error: self,
            request: request.into(),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    /// Flattens field errors into a single message, one clause per field.
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut clauses: Vec<String> = errors
            .field_errors()
            .iter()
            .map(|(field, errs)| {
                let reasons: Vec<String> = errs
                    .iter()
                    .map(|e| {
                        e.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| e.code.to_string())
                    })
                    .collect();
                format!("{}: {}", field, reasons.join(", "))
            })
            .collect();
        clauses.sort();

        AppError::Validation(clauses.join("; "))
    }
}

/// Structured error payload returned to clients.
///
/// ```json
/// {
///   "timestamp": "2026-01-01T00:00:00Z",
///   "message": "user already exists with the given email: a@b.com",
///   "details": "uri=/api/users",
///   "errorCode": "EMAIL_ALREADY_EXIST"
/// }
/// ```
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDetails {
    pub timestamp: DateTime<Utc>,
    pub message: String,
    pub details: String,
    pub error_code: String,
}

/// An [`AppError`] paired with the request context it occurred in.
///
/// Handlers return this so the response body can describe the failing
/// request (`uri=...`), which [`AppError`] alone does not know.
#[derive(Debug)]
pub struct ErrorResponse {
    error: AppError,
    request: String,
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        let status = self.error.status();

        if status.is_server_error() {
            tracing::error!(error = %self.error, request = %self.request, "Request failed");
        } else {
            tracing::debug!(error = %self.error, request = %self.request, "Request rejected");
        }

        let body = ErrorDetails {
            timestamp: Utc::now(),
            message: self.error.to_string(),
            details: self.request,
            error_code: self.error.error_code().to_string(),
        };

        (status, Json(body)).into_response()
    }
}
