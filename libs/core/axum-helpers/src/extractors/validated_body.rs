//! Body extractor that decodes and validates in one step.
//!
//! Accepts either a JSON body or a URL-encoded form body, dispatching on the
//! `Content-Type` header. Any decode failure becomes a 400 response with the
//! standard [`ErrorResponse`] body, and the decoded value is run through
//! `validator` before the handler sees it.

use axum::{
    Form, Json, RequestExt,
    extract::{FromRequest, Request},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::errors::{ErrorCode, ErrorResponse};

/// Extractor that deserializes the request body (JSON or form) and validates it.
///
/// # Example
/// ```ignore
/// async fn create(ValidatedBody(payload): ValidatedBody<CreateListing>) { ... }
/// ```
pub struct ValidatedBody<T>(pub T);

fn bad_request(message: String) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::new(ErrorCode::BodyExtraction, message)),
    )
        .into_response()
}

fn validation_failed(errors: validator::ValidationErrors) -> Response {
    let details = serde_json::to_value(errors.field_errors()).ok();
    let mut body = ErrorResponse::from_code(ErrorCode::ValidationError);
    body.details = details;
    (StatusCode::BAD_REQUEST, Json(body)).into_response()
}

fn is_form_content_type(req: &Request) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("application/x-www-form-urlencoded"))
}

impl<T, S> FromRequest<S> for ValidatedBody<T>
where
    T: DeserializeOwned + Validate + 'static,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, _state: &S) -> Result<Self, Self::Rejection> {
        let value = if is_form_content_type(&req) {
            let Form(value) = req
                .extract::<Form<T>, _>()
                .await
                .map_err(|rejection| bad_request(rejection.to_string()))?;
            value
        } else {
            let Json(value) = req
                .extract::<Json<T>, _>()
                .await
                .map_err(|rejection| bad_request(rejection.to_string()))?;
            value
        };

        value.validate().map_err(validation_failed)?;

        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::Request as HttpRequest, routing::post};
    use http_body_util::BodyExt;
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Debug, Deserialize, Validate)]
    struct TestPayload {
        #[validate(length(min = 1))]
        title: String,
    }

    fn app() -> Router {
        Router::new().route(
            "/test",
            post(|ValidatedBody(payload): ValidatedBody<TestPayload>| async move {
                payload.title
            }),
        )
    }

    #[tokio::test]
    async fn test_accepts_valid_json() {
        let response = app()
            .oneshot(
                HttpRequest::post("/test")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"title":"chair"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"chair");
    }

    #[tokio::test]
    async fn test_accepts_valid_form() {
        let response = app()
            .oneshot(
                HttpRequest::post("/test")
                    .header("content-type", "application/x-www-form-urlencoded")
                    .body(Body::from("title=chair"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let response = app()
            .oneshot(
                HttpRequest::post("/test")
                    .header("content-type", "application/json")
                    .body(Body::from("{not json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_missing_field_returns_400() {
        let response = app()
            .oneshot(
                HttpRequest::post("/test")
                    .header("content-type", "application/json")
                    .body(Body::from("{}"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_validation_failure_returns_400_with_details() {
        let response = app()
            .oneshot(
                HttpRequest::post("/test")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"title":""}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "VALIDATION_ERROR");
        assert!(json["details"].get("title").is_some());
    }
}
