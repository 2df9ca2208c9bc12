use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::distributors::create_distributor;
use super::handlers::distributors::list_distributors;
use super::handlers::health::health;
use super::handlers::login::login;
use super::handlers::logout::logout;
use super::handlers::products::create_product;
use super::handlers::products::list_products;
use super::handlers::register::register;
use super::handlers::status::status;
use super::middleware::authenticate as auth_middleware;
use crate::domain::catalog::ports::CatalogServicePort;
use crate::domain::session::ports::AuthServicePort;

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthServicePort>,
    pub catalog_service: Arc<dyn CatalogServicePort>,
}

pub fn create_router(
    auth_service: Arc<dyn AuthServicePort>,
    catalog_service: Arc<dyn CatalogServicePort>,
) -> Router {
    let state = AppState {
        auth_service,
        catalog_service,
    };

    // Status and logout read the bearer token themselves.
    let auth_routes = Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/auth/status", get(status))
        .route("/auth/logout", post(logout))
        .route("/health", get(health));

    let protected_routes = Router::new()
        .route("/product", post(create_product))
        .route("/product/list", get(list_products))
        .route("/distributor", post(create_distributor))
        .route("/distributor/list", get(list_distributors))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(auth_routes)
        .merge(protected_routes)
        .layer(
            ServiceBuilder::new()
                .layer(trace_layer)
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
