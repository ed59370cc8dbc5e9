use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use docket_core::error::CoreError;
use docket_store::models::Violation;
use docket_store::StoreError;
use serde::Serialize;
use serde_json::json;

/// One invalid element of a bulk payload, identified by its position in the
/// submitted array.
#[derive(Debug, Serialize)]
pub struct InvalidElement {
    pub index: usize,
    pub violations: Vec<Violation>,
}

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] and [`StoreError`] for domain/storage errors and adds
/// HTTP-specific variants. Implements [`IntoResponse`] to produce consistent
/// JSON error responses of the form `{ "error": ..., "code": ... }`, with a
/// `details` array for validation failures.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `docket_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A storage error from `docket_store`.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A single document failed schema validation.
    #[error("validation failed")]
    Invalid(Vec<Violation>),

    /// One or more elements of a bulk payload failed schema validation.
    /// Under the atomic batch policy, nothing was persisted.
    #[error("batch validation failed")]
    InvalidBatch(Vec<InvalidElement>),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                    None,
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg, None)
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                        None,
                    )
                }
            },

            // --- Storage errors ---
            AppError::Store(err) => match err {
                StoreError::InvalidDocument { collection, reason } => (
                    StatusCode::BAD_REQUEST,
                    "VALIDATION_ERROR",
                    format!("invalid document for {collection}: {reason}"),
                    None,
                ),
                StoreError::Connection { message } => {
                    tracing::error!(error = %message, "Storage connection error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                        None,
                    )
                }
            },

            // --- Validation reports ---
            AppError::Invalid(violations) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                "validation failed".to_string(),
                Some(json!(violations)),
            ),
            AppError::InvalidBatch(elements) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                format!("{} element(s) failed validation", elements.len()),
                Some(json!(elements)),
            ),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg, None),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                    None,
                )
            }
        };

        let mut body = json!({
            "error": message,
            "code": code,
        });
        if let Some(details) = details {
            body["details"] = details;
        }

        (status, axum::Json(body)).into_response()
    }
}
