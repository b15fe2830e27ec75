//! Common error types and handling for Folio

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::response::ErrorBody;

/// Common result type
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the Folio backend
///
/// Every variant carries the human-readable message that ends up in the
/// response envelope. Internal failures additionally keep their source so it
/// can be logged server-side.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {message}")]
    Internal {
        message: String,
        #[source]
        source: anyhow::Error,
    },
}

impl Error {
    /// Build an internal error with a caller-facing message and a diagnostic source
    pub fn internal(message: impl Into<String>, source: impl Into<anyhow::Error>) -> Self {
        Error::Internal {
            message: message.into(),
            source: source.into(),
        }
    }

    /// Get the appropriate HTTP status code for this error
    ///
    /// Conflicts share 400 with validation failures.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::Validation(_) | Error::Conflict(_) => StatusCode::BAD_REQUEST,
            Error::Authentication(_) => StatusCode::UNAUTHORIZED,
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code used in logs
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::Validation(_) => "VALIDATION_ERROR",
            Error::Authentication(_) => "AUTHENTICATION_ERROR",
            Error::NotFound(_) => "NOT_FOUND",
            Error::Conflict(_) => "CONFLICT",
            Error::Internal { .. } => "INTERNAL_ERROR",
        }
    }

    /// The message shown to callers
    pub fn message(&self) -> &str {
        match self {
            Error::Validation(msg)
            | Error::Authentication(msg)
            | Error::NotFound(msg)
            | Error::Conflict(msg) => msg,
            Error::Internal { message, .. } => message,
        }
    }
}

/// Attach a caller-facing message to an infrastructure failure
pub trait ResultExt<T> {
    fn or_internal(self, message: &str) -> Result<T>;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<anyhow::Error>,
{
    fn or_internal(self, message: &str) -> Result<T> {
        self.map_err(|e| Error::internal(message, e))
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = match self {
            Error::Internal { message, source } => {
                tracing::error!(error = ?source, code = "INTERNAL_ERROR", "{}", message);
                // Diagnostics never leave a release build
                let diagnostic = cfg!(debug_assertions).then(|| format!("{:#}", source));
                ErrorBody::new(message).with_diagnostic(diagnostic)
            }
            other => {
                tracing::debug!(code = other.error_code(), message = other.message(), "Request rejected");
                ErrorBody::new(other.message())
            }
        };

        (status, Json(body)).into_response()
    }
}
