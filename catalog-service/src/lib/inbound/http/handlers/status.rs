use axum::extract::State;
use axum::http::StatusCode;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use super::ApiError;
use super::ApiResponseBody;
use super::ApiSuccess;
use crate::domain::session::models::UserView;
use crate::domain::session::ports::AuthServicePort;
use crate::inbound::http::middleware::BearerToken;
use crate::inbound::http::router::AppState;

/// Who the presented token belongs to.
pub async fn status(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
) -> Result<ApiSuccess<StatusResponseData>, ApiError> {
    state
        .auth_service
        .who_am_i(&token)
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, "Status request rejected");
            ApiError::from(e)
        })
        .map(|view| {
            ApiSuccess::new(
                StatusCode::OK,
                ApiResponseBody::data(StatusResponseData::from(&view)),
            )
        })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusResponseData {
    pub user_id: i64,
    pub email: String,
    pub admin: bool,
    pub registered_on: DateTime<Utc>,
}

impl From<&UserView> for StatusResponseData {
    fn from(view: &UserView) -> Self {
        Self {
            user_id: view.id.0,
            email: view.email.clone(),
            admin: view.admin,
            registered_on: view.registered_on,
        }
    }
}
