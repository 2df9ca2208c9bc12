use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiJson;
use super::ApiResponseBody;
use super::ApiSuccess;
use super::CredentialsRequest;
use super::GENERIC_FAILURE;
use crate::domain::session::errors::AuthError;
use crate::domain::session::models::RegisterCommand;
use crate::domain::session::ports::AuthServicePort;
use crate::inbound::http::router::AppState;
use crate::user::models::EmailAddress;

pub async fn register(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<CredentialsRequest>,
) -> Result<ApiSuccess<()>, ApiError> {
    let email = EmailAddress::new(body.email)
        .map_err(|e| ApiError::UnprocessableEntity(AuthError::from(e).to_string()))?;

    state
        .auth_service
        .register(RegisterCommand::new(email, body.password))
        .await
        .map_err(|e| match e {
            AuthError::AlreadyRegistered => ApiError::Accepted(e.to_string()),
            AuthError::InvalidEmail(_) => ApiError::UnprocessableEntity(e.to_string()),
            other => {
                tracing::error!(error = %other, "Registration failed");
                ApiError::Unauthorized(GENERIC_FAILURE.to_string())
            }
        })
        .map(|token| {
            ApiSuccess::new(
                StatusCode::CREATED,
                ApiResponseBody::token("Successfully registered.", token),
            )
        })
}
