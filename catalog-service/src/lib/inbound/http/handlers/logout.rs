use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiResponseBody;
use super::ApiSuccess;
use crate::domain::session::ports::AuthServicePort;
use crate::inbound::http::middleware::BearerToken;
use crate::inbound::http::router::AppState;

pub async fn logout(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
) -> Result<ApiSuccess<()>, ApiError> {
    state
        .auth_service
        .logout(&token)
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, "Logout rejected");
            ApiError::from(e)
        })
        .map(|_| {
            ApiSuccess::new(
                StatusCode::OK,
                ApiResponseBody::message("Successfully logged out."),
            )
        })
}
