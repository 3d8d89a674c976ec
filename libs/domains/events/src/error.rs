//! Event domain error types

use axum_helpers::AppError;
use domain_packages::PackageError;
use std::fmt;
use uuid::Uuid;

/// Result type for event operations
pub type Result<T> = std::result::Result<T, EventError>;

/// Event domain errors
#[derive(Debug)]
pub enum EventError {
    /// Event not found
    NotFound { id: Uuid },

    /// Missing or malformed input
    Validation { message: String },

    /// MongoDB error
    Database {
        message: String,
        source: Option<mongodb::error::Error>,
    },

    /// Internal error
    Internal { message: String },
}

impl EventError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}

impl fmt::Display for EventError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { id } => write!(f, "Event not found: {}", id),
            Self::Validation { message } => write!(f, "Validation error: {}", message),
            Self::Database { message, .. } => write!(f, "Database error: {}", message),
            Self::Internal { message } => write!(f, "Internal error: {}", message),
        }
    }
}

impl std::error::Error for EventError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Database {
                source: Some(e), ..
            } => Some(e),
            _ => None,
        }
    }
}

impl From<mongodb::error::Error> for EventError {
    fn from(err: mongodb::error::Error) -> Self {
        Self::Database {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

impl From<mongodb::bson::ser::Error> for EventError {
    fn from(err: mongodb::bson::ser::Error) -> Self {
        Self::Internal {
            message: format!("BSON serialization error: {}", err),
        }
    }
}

impl From<validator::ValidationErrors> for EventError {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::Validation {
            message: axum_helpers::validation_message(&err),
        }
    }
}

/// Failures of the package lookup made while checking a package reference.
impl From<PackageError> for EventError {
    fn from(err: PackageError) -> Self {
        match err {
            PackageError::Validation(message) => Self::Validation { message },
            PackageError::Database(message) => Self::Database {
                message,
                source: None,
            },
            other => Self::Internal {
                message: other.to_string(),
            },
        }
    }
}

// Convert to axum_helpers::AppError for HTTP responses
impl From<EventError> for AppError {
    fn from(err: EventError) -> Self {
        match err {
            EventError::NotFound { .. } => AppError::NotFound("Event not found".to_string()),
            EventError::Validation { message } => AppError::BadRequest(message),
            EventError::Database { message, .. } => AppError::Database(message),
            EventError::Internal { message } => AppError::InternalServerError(message),
        }
    }
}

impl axum::response::IntoResponse for EventError {
    fn into_response(self) -> axum::response::Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (EventError::NotFound { id: Uuid::now_v7() }, StatusCode::NOT_FOUND),
            (EventError::validation("title: Title is required"), StatusCode::BAD_REQUEST),
            (
                EventError::Database {
                    message: "connection reset".into(),
                    source: None,
                },
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(AppError::from(err).status(), expected);
        }
    }

    #[test]
    fn test_package_lookup_failure_stays_opaque() {
        let err: EventError = PackageError::Database("socket closed".into()).into();
        assert!(matches!(err, EventError::Database { .. }));
    }
}
