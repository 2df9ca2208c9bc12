use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;

use super::violated_unique_constraint;
use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::models::CatalogName;
use crate::domain::catalog::models::CreateProductCommand;
use crate::domain::catalog::models::Product;
use crate::domain::catalog::ports::ProductRepository;

pub struct PostgresProductRepository {
    pool: PgPool,
}

impl PostgresProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ProductRow {
    id: i64,
    name: String,
    price: i64,
    quantity: i32,
    created_on: DateTime<Utc>,
}

impl TryFrom<ProductRow> for Product {
    type Error = CatalogError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        Ok(Product {
            id: row.id,
            name: CatalogName::new(row.name)?,
            price: row.price,
            quantity: row.quantity,
            created_on: row.created_on,
        })
    }
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn create(&self, command: CreateProductCommand) -> Result<Product, CatalogError> {
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            INSERT INTO products (name, price, quantity, created_on)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, price, quantity, created_on
            "#,
        )
        .bind(command.name.as_str())
        .bind(command.price)
        .bind(command.quantity)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if violated_unique_constraint(&e) == Some("products_name_key") {
                return CatalogError::ProductAlreadyExists(command.name.to_string());
            }
            CatalogError::DatabaseError(e.to_string())
        })?;

        row.try_into()
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Product>, CatalogError> {
        sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, name, price, quantity, created_on
            FROM products
            WHERE name = $1
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| CatalogError::DatabaseError(e.to_string()))?
        .map(Product::try_from)
        .transpose()
    }

    async fn list_all(&self) -> Result<Vec<Product>, CatalogError> {
        let rows = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, name, price, quantity, created_on
            FROM products
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| CatalogError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Product::try_from).collect()
    }
}
