use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiJson;
use super::ApiResponseBody;
use super::ApiSuccess;
use super::CredentialsRequest;
use crate::domain::session::errors::AuthError;
use crate::domain::session::models::LoginCommand;
use crate::domain::session::ports::AuthServicePort;
use crate::inbound::http::router::AppState;

pub async fn login(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<CredentialsRequest>,
) -> Result<ApiSuccess<()>, ApiError> {
    let command = LoginCommand {
        email: body.email,
        password: body.password,
    };

    state
        .auth_service
        .login(command)
        .await
        .map_err(|e| match e {
            AuthError::UserNotFound => ApiError::NotFound(e.to_string()),
            other => {
                tracing::error!(error = %other, "Login failed");
                ApiError::InternalServerError("Try again".to_string())
            }
        })
        .map(|token| {
            ApiSuccess::new(
                StatusCode::OK,
                ApiResponseBody::token("Successfully logged in.", token),
            )
        })
}
