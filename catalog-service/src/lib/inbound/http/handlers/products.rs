use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiJson;
use super::ApiResponseBody;
use super::ApiSuccess;
use crate::domain::catalog::models::CreateProductCommand;
use crate::domain::catalog::models::Product;
use crate::domain::catalog::ports::CatalogServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn create_product(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
    ApiJson(body): ApiJson<CreateProductRequest>,
) -> Result<ApiSuccess<ProductResponseData>, ApiError> {
    let command = CreateProductCommand::new(body.name, body.price, body.quantity)?;

    let product = state.catalog_service.create_product(command).await?;

    tracing::debug!(user_id = %caller.user_id, product_id = product.id, "Product inserted");

    Ok(ApiSuccess::new(
        StatusCode::CREATED,
        ApiResponseBody::message_with_data(
            "Successfully inserted.",
            ProductResponseData::from(&product),
        ),
    ))
}

pub async fn list_products(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<ProductResponseData>>, ApiError> {
    state
        .catalog_service
        .list_products()
        .await
        .map_err(ApiError::from)
        .map(|products| {
            ApiSuccess::new(
                StatusCode::OK,
                ApiResponseBody::data(products.iter().map(ProductResponseData::from).collect()),
            )
        })
}

/// HTTP request body for adding a product (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateProductRequest {
    name: String,
    price: i64,
    quantity: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductResponseData {
    pub id: i64,
    pub name: String,
    pub price: i64,
    pub quantity: i32,
    pub created_on: DateTime<Utc>,
}

impl From<&Product> for ProductResponseData {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.as_str().to_string(),
            price: product.price,
            quantity: product.quantity,
            created_on: product.created_on,
        }
    }
}
