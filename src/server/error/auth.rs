use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user ID is stored in the session.
    ///
    /// The request is unauthenticated. Results in 401 Unauthorized.
    #[error("User not found in session")]
    UserNotInSession,

    /// The session references a user that no longer exists.
    ///
    /// Happens when an admin deletes an account that still has a live session.
    /// Results in 401 Unauthorized.
    #[error("User {0} stored in session not found in database")]
    UserNotInDatabase(String),

    /// Username or password did not match.
    ///
    /// Both cases share one message so a caller cannot tell which usernames exist.
    /// Results in 401 Unauthorized.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// Setup code missing, expired, wrong, or an admin already exists.
    ///
    /// Results in 400 Bad Request.
    #[error("Invalid or expired setup code")]
    InvalidSetupCode,

    /// User is authenticated but lacks a required permission.
    ///
    /// Results in 403 Forbidden. The message is logged, never returned.
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(String, String),
}

/// Converts authentication errors into HTTP responses.
///
/// All errors are logged at debug level for diagnostics while keeping client-facing
/// messages generic to avoid information leakage.
///
/// # Returns
/// - 400 Bad Request - For invalid setup codes
/// - 401 Unauthorized - For missing sessions, stale sessions and bad credentials
/// - 403 Forbidden - For insufficient permissions
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => {
                (StatusCode::UNAUTHORIZED, "You must be logged in")
            }
            Self::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid username or password"),
            Self::InvalidSetupCode => (StatusCode::BAD_REQUEST, "Invalid or expired setup code"),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                "You don't have permission to perform this action",
            ),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
