use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::models::CreateDistributorCommand;
use crate::domain::catalog::models::CreateProductCommand;
use crate::domain::catalog::models::Distributor;
use crate::domain::catalog::models::Product;
use crate::domain::catalog::ports::CatalogServicePort;
use crate::domain::catalog::ports::DistributorRepository;
use crate::domain::catalog::ports::ProductRepository;

/// Domain service implementation for catalog operations.
pub struct CatalogService<PR, DR>
where
    PR: ProductRepository,
    DR: DistributorRepository,
{
    products: Arc<PR>,
    distributors: Arc<DR>,
}

impl<PR, DR> CatalogService<PR, DR>
where
    PR: ProductRepository,
    DR: DistributorRepository,
{
    pub fn new(products: Arc<PR>, distributors: Arc<DR>) -> Self {
        Self {
            products,
            distributors,
        }
    }
}

#[async_trait]
impl<PR, DR> CatalogServicePort for CatalogService<PR, DR>
where
    PR: ProductRepository,
    DR: DistributorRepository,
{
    async fn create_product(&self, command: CreateProductCommand) -> Result<Product, CatalogError> {
        if self
            .products
            .find_by_name(command.name.as_str())
            .await?
            .is_some()
        {
            return Err(CatalogError::ProductAlreadyExists(command.name.to_string()));
        }

        let product = self.products.create(command).await?;

        tracing::info!(product_id = product.id, name = %product.name, "Product created");

        Ok(product)
    }

    async fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
        self.products.list_all().await
    }

    async fn create_distributor(
        &self,
        command: CreateDistributorCommand,
    ) -> Result<Distributor, CatalogError> {
        if self
            .distributors
            .find_by_name(command.name.as_str())
            .await?
            .is_some()
        {
            return Err(CatalogError::DistributorAlreadyExists(
                command.name.to_string(),
            ));
        }

        let distributor = self.distributors.create(command).await?;

        tracing::info!(
            distributor_id = distributor.id,
            name = %distributor.name,
            "Distributor created"
        );

        Ok(distributor)
    }

    async fn list_distributors(&self) -> Result<Vec<Distributor>, CatalogError> {
        self.distributors.list_all().await
    }
}
