use axum::http::StatusCode;

use super::ApiResponseBody;
use super::ApiSuccess;

/// Liveness check. Does not touch the database.
pub async fn health() -> ApiSuccess<()> {
    ApiSuccess::new(StatusCode::OK, ApiResponseBody::message("ok"))
}
