use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Errors raised by an `ObjectStore` backend.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Transport-level failure talking to the storage API.
    #[error(transparent)]
    Request(#[from] reqwest::Error),

    /// The storage API answered with a non-success status.
    #[error("Storage API returned {status} ({code}): {message}")]
    Api {
        /// HTTP status returned by the API
        status: u16,
        /// Provider error code
        code: String,
        /// Provider error message
        message: String,
    },

    /// No object exists under the given key.
    #[error("Object not found: {0}")]
    NotFound(String),
}

/// Converts storage errors into HTTP responses.
///
/// # Returns
/// - 404 Not Found - For missing objects
/// - 500 Internal Server Error - For API and transport failures, logged server-side
impl IntoResponse for StorageError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(_) => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    error: "File not found".to_string(),
                }),
            )
                .into_response(),
            err => {
                tracing::error!("{}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
