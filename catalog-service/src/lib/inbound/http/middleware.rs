use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;

use crate::domain::session::errors::AuthError;
use crate::domain::session::ports::AuthServicePort;
use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Extension type to store the authenticated caller in request extensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

/// Raw token taken from an `Authorization: Bearer <token>` header.
///
/// Only the header is parsed here; the token itself is checked by the
/// session service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BearerToken(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        extract_bearer_token(&parts.headers)
            .map(|token| BearerToken(token.to_string()))
            .map_err(|e| {
                tracing::warn!(error = %e, "Authorization header rejected");
                ApiError::from(e)
            })
    }
}

/// Middleware that validates the bearer token and adds the caller to request extensions
pub async fn authenticate(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let user_id = state.auth_service.validate(&token).await.map_err(|e| {
        tracing::warn!(error = %e, uri = %req.uri(), "Token validation failed");
        ApiError::from(e)
    })?;

    req.extensions_mut().insert(AuthenticatedUser { user_id });

    Ok(next.run(req).await)
}

/// Pull the token out of the authorization header.
///
/// A missing or blank header, or a bearer scheme with nothing after it, is
/// `MissingToken`. Anything else that is not `<scheme> <token>` with a
/// case-insensitive `Bearer` scheme is `MalformedHeader`.
fn extract_bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or(AuthError::MissingToken)?
        .to_str()
        .map_err(|_| AuthError::MalformedHeader)?
        .trim_start();

    if value.trim().is_empty() {
        return Err(AuthError::MissingToken);
    }

    let (scheme, rest) = value
        .split_once(|c: char| c.is_ascii_whitespace())
        .ok_or(AuthError::MalformedHeader)?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(AuthError::MalformedHeader);
    }

    rest.split_whitespace().next().ok_or(AuthError::MissingToken)
}
