//! Reusable OpenAPI response definitions.
//!
//! These wrap [`ErrorResponse`](super::ErrorResponse) with example payloads so
//! handlers can reference them in `#[utoipa::path]` annotations instead of
//! repeating the same response blocks.

use utoipa::ToResponse;

use super::ErrorResponse;

/// 500 Internal Server Error
#[derive(ToResponse)]
#[response(
    description = "Internal server error",
    content_type = "application/json",
    example = json!({
        "code": 1005,
        "error": "INTERNAL_ERROR",
        "message": "An internal server error occurred"
    })
)]
#[allow(dead_code)]
pub struct InternalServerErrorResponse(ErrorResponse);

/// 400 Bad Request with validation details
#[derive(ToResponse)]
#[response(
    description = "Request validation failed",
    content_type = "application/json",
    example = json!({
        "code": 1001,
        "error": "VALIDATION_ERROR",
        "message": "Request validation failed",
        "details": {"title": [{"code": "length"}]}
    })
)]
#[allow(dead_code)]
pub struct BadRequestValidationResponse(ErrorResponse);

/// 404 Not Found
#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({
        "code": 1004,
        "error": "NOT_FOUND",
        "message": "Resource not found"
    })
)]
#[allow(dead_code)]
pub struct NotFoundResponse(ErrorResponse);

/// 401 Unauthorized
#[derive(ToResponse)]
#[response(
    description = "Authentication failed",
    content_type = "application/json",
    example = json!({
        "code": 1006,
        "error": "UNAUTHORIZED",
        "message": "Authentication required"
    })
)]
#[allow(dead_code)]
pub struct UnauthorizedResponse(ErrorResponse);
