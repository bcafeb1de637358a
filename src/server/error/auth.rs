use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No manager id is stored in the session.
    #[error("Manager not found in session")]
    ManagerNotInSession,

    /// The manager id stored in the session no longer exists in the database.
    #[error("Manager {0} from session not found in database")]
    ManagerNotInDatabase(i32),

    /// The manager lacks a permission required by the endpoint, or is disabled.
    ///
    /// # Fields
    /// - Manager id
    /// - Reason, logged server-side only
    #[error("Manager {0} denied access: {1}")]
    AccessDenied(i32, String),

    /// Unknown email or wrong password. Both cases share this variant so the
    /// response does not reveal which one failed.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Correct credentials for a manager whose account is disabled.
    #[error("Manager {0} is disabled")]
    ManagerDisabled(i32),
}

/// Converts authentication errors into HTTP responses.
///
/// - `ManagerNotInSession` / `ManagerNotInDatabase` / `InvalidCredentials` → 401 Unauthorized
/// - `AccessDenied` / `ManagerDisabled` → 403 Forbidden
///
/// Details are logged at debug level while client-facing messages stay generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::ManagerNotInSession | Self::ManagerNotInDatabase(_) => {
                (StatusCode::UNAUTHORIZED, "Login required")
            }
            Self::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid email or password"),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                "You do not have permission to access this resource",
            ),
            Self::ManagerDisabled(_) => (StatusCode::FORBIDDEN, "This account is disabled"),
        };

        (status, Json(ErrorDto::new(message))).into_response()
    }
}
