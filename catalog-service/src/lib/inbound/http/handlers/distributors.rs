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
use crate::domain::catalog::models::CreateDistributorCommand;
use crate::domain::catalog::models::Distributor;
use crate::domain::catalog::ports::CatalogServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn create_distributor(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
    ApiJson(body): ApiJson<CreateDistributorRequest>,
) -> Result<ApiSuccess<DistributorResponseData>, ApiError> {
    let command = CreateDistributorCommand::new(body.name, body.address, body.phone)?;

    let distributor = state.catalog_service.create_distributor(command).await?;

    tracing::debug!(
        user_id = %caller.user_id,
        distributor_id = distributor.id,
        "Distributor inserted"
    );

    Ok(ApiSuccess::new(
        StatusCode::CREATED,
        ApiResponseBody::message_with_data(
            "Successfully inserted.",
            DistributorResponseData::from(&distributor),
        ),
    ))
}

pub async fn list_distributors(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<DistributorResponseData>>, ApiError> {
    let distributors = state.catalog_service.list_distributors().await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        ApiResponseBody::data(
            distributors
                .iter()
                .map(DistributorResponseData::from)
                .collect(),
        ),
    ))
}

/// HTTP request body for adding a distributor (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateDistributorRequest {
    name: String,
    #[serde(default)]
    address: String,
    #[serde(default)]
    phone: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistributorResponseData {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub created_on: DateTime<Utc>,
}

impl From<&Distributor> for DistributorResponseData {
    fn from(distributor: &Distributor) -> Self {
        Self {
            id: distributor.id,
            name: distributor.name.as_str().to_string(),
            address: distributor.address.clone(),
            phone: distributor.phone.clone(),
            created_on: distributor.created_on,
        }
    }
}
