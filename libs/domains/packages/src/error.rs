use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum PackageError {
    #[error("Package not found: {0}")]
    NotFound(Uuid),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type PackageResult<T> = Result<T, PackageError>;

impl From<PackageError> for AppError {
    fn from(err: PackageError) -> Self {
        match err {
            PackageError::NotFound(_) => AppError::NotFound("Package not found".to_string()),
            PackageError::Validation(msg) => AppError::BadRequest(msg),
            PackageError::Database(msg) => AppError::Database(msg),
            PackageError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for PackageError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}

impl From<mongodb::error::Error> for PackageError {
    fn from(err: mongodb::error::Error) -> Self {
        PackageError::Database(err.to_string())
    }
}

impl From<mongodb::bson::ser::Error> for PackageError {
    fn from(err: mongodb::bson::ser::Error) -> Self {
        PackageError::Internal(err.to_string())
    }
}
