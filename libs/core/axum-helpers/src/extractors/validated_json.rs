//! JSON extractor with validation via the `validator` crate.

use crate::errors::AppError;
use axum::extract::{FromRequest, Json, Request};
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON body extractor that runs `Validate` before the handler.
///
/// Both malformed bodies and failed validation reject with a 400 envelope.
///
/// ```ignore
/// use axum::{Router, routing::post};
/// use axum_helpers::extractors::ValidatedJson;
/// use serde::Deserialize;
/// use validator::Validate;
///
/// #[derive(Deserialize, Validate)]
/// struct CreatePackage {
///     #[validate(length(min = 1, message = "Name is required"))]
///     name: String,
/// }
///
/// async fn create(ValidatedJson(payload): ValidatedJson<CreatePackage>) -> String {
///     payload.name
/// }
///
/// let app: Router = Router::new().route("/package", post(create));
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state).await?;
        data.validate()?;
        Ok(ValidatedJson(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorResponse;
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode, header},
        routing::post,
    };
    use http_body_util::BodyExt;
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Deserialize, Validate)]
    struct Payload {
        #[validate(length(min = 1, message = "Name is required"))]
        name: String,
    }

    async fn create(ValidatedJson(p): ValidatedJson<Payload>) -> String {
        p.name
    }

    async fn post_json(body: &'static str) -> (StatusCode, Vec<u8>) {
        let app = Router::new().route("/", post(create));
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, bytes.to_vec())
    }

    #[tokio::test]
    async fn passes_valid_payload() {
        let (status, body) = post_json(r#"{"name":"Gold"}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"Gold");
    }

    #[tokio::test]
    async fn malformed_json_is_400_envelope() {
        let (status, body) = post_json(r#"{"name":"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let envelope: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert!(!envelope.success);
        assert_eq!(envelope.status_code, 400);
    }

    #[tokio::test]
    async fn failed_validation_is_400_with_field_message() {
        let (status, body) = post_json(r#"{"name":""}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let envelope: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(envelope.message, "name: Name is required");
    }
}
