use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::models::CreateDistributorCommand;
use crate::domain::catalog::models::CreateProductCommand;
use crate::domain::catalog::models::Distributor;
use crate::domain::catalog::models::Product;

/// Port for catalog domain service operations.
///
/// Callers are expected to have authenticated the request already.
#[async_trait]
pub trait CatalogServicePort: Send + Sync + 'static {
    /// # Errors
    /// * `ProductAlreadyExists` - A product with this name exists
    /// * `DatabaseError` - Database operation failed
    async fn create_product(&self, command: CreateProductCommand) -> Result<Product, CatalogError>;

    async fn list_products(&self) -> Result<Vec<Product>, CatalogError>;

    /// # Errors
    /// * `DistributorAlreadyExists` - A distributor with this name exists
    /// * `DatabaseError` - Database operation failed
    async fn create_distributor(
        &self,
        command: CreateDistributorCommand,
    ) -> Result<Distributor, CatalogError>;

    async fn list_distributors(&self) -> Result<Vec<Distributor>, CatalogError>;
}

/// Persistence operations for products.
#[async_trait]
pub trait ProductRepository: Send + Sync + 'static {
    /// Insert a product; storage assigns id and creation time.
    ///
    /// # Errors
    /// * `ProductAlreadyExists` - Name uniqueness constraint violated
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, command: CreateProductCommand) -> Result<Product, CatalogError>;

    async fn find_by_name(&self, name: &str) -> Result<Option<Product>, CatalogError>;

    /// All products ordered by id.
    async fn list_all(&self) -> Result<Vec<Product>, CatalogError>;
}

/// Persistence operations for distributors.
#[async_trait]
pub trait DistributorRepository: Send + Sync + 'static {
    /// Insert a distributor; storage assigns id and creation time.
    ///
    /// # Errors
    /// * `DistributorAlreadyExists` - Name uniqueness constraint violated
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, command: CreateDistributorCommand) -> Result<Distributor, CatalogError>;

    async fn find_by_name(&self, name: &str) -> Result<Option<Distributor>, CatalogError>;

    /// All distributors ordered by id.
    async fn list_all(&self) -> Result<Vec<Distributor>, CatalogError>;
}
