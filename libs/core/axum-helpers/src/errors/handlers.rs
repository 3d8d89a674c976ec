use axum::{http::StatusCode, response::Response};

use super::{ErrorCode, error_response};

/// Router fallback for unknown routes.
pub async fn not_found() -> Response {
    tracing::debug!(error_code = ErrorCode::RouteNotFound.code(), "No route matched");
    error_response(
        StatusCode::NOT_FOUND,
        ErrorCode::RouteNotFound.default_message(),
    )
}

/// Fallback for a known path hit with an unsupported method.
pub async fn method_not_allowed() -> Response {
    error_response(
        StatusCode::METHOD_NOT_ALLOWED,
        ErrorCode::MethodNotAllowed.default_message(),
    )
}
