use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::session::errors::AuthError;

pub mod distributors;
pub mod health;
pub mod login;
pub mod logout;
pub mod products;
pub mod register;
pub mod status;

/// Message sent in place of any infrastructure failure detail.
pub const GENERIC_FAILURE: &str = "Some error occurred. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Fail,
}

/// Envelope shared by every response: `{status, message?, auth_token?, data?}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize> {
    status: ResponseStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    auth_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
}

impl<T: Serialize> ApiResponseBody<T> {
    pub fn data(data: T) -> Self {
        Self {
            status: ResponseStatus::Success,
            message: None,
            auth_token: None,
            data: Some(data),
        }
    }

    pub fn message_with_data(message: impl Into<String>, data: T) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::data(data)
        }
    }
}

impl ApiResponseBody<()> {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Success,
            message: Some(message.into()),
            auth_token: None,
            data: None,
        }
    }

    pub fn token(message: impl Into<String>, auth_token: String) -> Self {
        Self {
            auth_token: Some(auth_token),
            ..Self::message(message)
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Fail,
            ..Self::message(message)
        }
    }
}

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize>(StatusCode, Json<ApiResponseBody<T>>);

impl<T: Serialize> ApiSuccess<T> {
    pub fn new(status: StatusCode, body: ApiResponseBody<T>) -> Self {
        ApiSuccess(status, Json(body))
    }
}

impl<T: Serialize> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

/// Failure responses. Every variant renders as a `fail` envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Request understood but not acted on (registering a known email)
    Accepted(String),
    BadRequest(String),
    Unauthorized(String),
    NotFound(String),
    Conflict(String),
    UnprocessableEntity(String),
    InternalServerError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Accepted(msg) => (StatusCode::ACCEPTED, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        (status, Json(ApiResponseBody::fail(message))).into_response()
    }
}

/// Default mapping used by every protected route.
impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        if err.is_infrastructure() {
            tracing::error!(error = %err, "Authentication infrastructure failure");
            return ApiError::InternalServerError(GENERIC_FAILURE.to_string());
        }

        match err {
            AuthError::InvalidEmail(_) => ApiError::UnprocessableEntity(err.to_string()),
            AuthError::AlreadyRegistered => ApiError::Accepted(err.to_string()),
            _ => ApiError::Unauthorized(err.to_string()),
        }
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::InvalidName(_)
            | CatalogError::NegativeValue { .. }
            | CatalogError::FieldTooLong { .. } => {
                ApiError::UnprocessableEntity(err.to_string())
            }
            CatalogError::ProductAlreadyExists(_) | CatalogError::DistributorAlreadyExists(_) => {
                ApiError::Conflict(err.to_string())
            }
            CatalogError::DatabaseError(_) => {
                tracing::error!(error = %err, "Catalog storage failure");
                ApiError::InternalServerError(GENERIC_FAILURE.to_string())
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(e) => ApiError::UnprocessableEntity(e.body_text()),
            other => ApiError::BadRequest(other.body_text()),
        }
    }
}

/// JSON body extractor whose rejections use the response envelope.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// Body of register and login requests
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CredentialsRequest {
    pub email: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_message_envelope() {
        let body = ApiResponseBody::message("Successfully logged out.");
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({ "status": "success", "message": "Successfully logged out." })
        );
    }

    #[test]
    fn test_token_envelope() {
        let body = ApiResponseBody::token("Successfully registered.", "abc".to_string());
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "status": "success",
                "message": "Successfully registered.",
                "auth_token": "abc"
            })
        );
    }

    #[test]
    fn test_fail_envelope() {
        let body = ApiResponseBody::fail("Provide a valid auth token.");
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({ "status": "fail", "message": "Provide a valid auth token." })
        );
    }

    #[test]
    fn test_data_envelope() {
        let body = ApiResponseBody::data(vec![1, 2]);
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({ "status": "success", "data": [1, 2] })
        );
    }

    #[test]
    fn test_store_errors_do_not_leak() {
        let err = ApiError::from(AuthError::StoreError(
            "relation \"users\" does not exist".to_string(),
        ));
        assert_eq!(err, ApiError::InternalServerError(GENERIC_FAILURE.to_string()));

        let err = ApiError::from(CatalogError::DatabaseError("password=hunter2".to_string()));
        assert_eq!(err, ApiError::InternalServerError(GENERIC_FAILURE.to_string()));
    }

    #[test]
    fn test_token_errors_are_unauthorized() {
        for err in [
            AuthError::ExpiredToken,
            AuthError::InvalidSignature,
            AuthError::Blacklisted,
            AuthError::MissingToken,
            AuthError::MalformedHeader,
        ] {
            let message = err.to_string();
            assert_eq!(ApiError::from(err), ApiError::Unauthorized(message));
        }
    }
}
