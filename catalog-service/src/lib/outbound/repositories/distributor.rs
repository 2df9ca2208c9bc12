use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;

use super::violated_unique_constraint;
use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::models::CatalogName;
use crate::domain::catalog::models::CreateDistributorCommand;
use crate::domain::catalog::models::Distributor;
use crate::domain::catalog::ports::DistributorRepository;

pub struct PostgresDistributorRepository {
    pool: PgPool,
}

impl PostgresDistributorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct DistributorRow {
    id: i64,
    name: String,
    address: String,
    phone: String,
    created_on: DateTime<Utc>,
}

impl TryFrom<DistributorRow> for Distributor {
    type Error = CatalogError;

    fn try_from(row: DistributorRow) -> Result<Self, Self::Error> {
        Ok(Distributor {
            id: row.id,
            name: CatalogName::new(row.name)?,
            address: row.address,
            phone: row.phone,
            created_on: row.created_on,
        })
    }
}

#[async_trait]
impl DistributorRepository for PostgresDistributorRepository {
    async fn create(&self, command: CreateDistributorCommand) -> Result<Distributor, CatalogError> {
        let row = sqlx::query_as::<_, DistributorRow>(
            r#"
            INSERT INTO distributors (name, address, phone, created_on)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, address, phone, created_on
            "#,
        )
        .bind(command.name.as_str())
        .bind(&command.address)
        .bind(&command.phone)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if violated_unique_constraint(&e) == Some("distributors_name_key") {
                return CatalogError::DistributorAlreadyExists(command.name.to_string());
            }
            CatalogError::DatabaseError(e.to_string())
        })?;

        row.try_into()
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Distributor>, CatalogError> {
        sqlx::query_as::<_, DistributorRow>(
            r#"
            SELECT id, name, address, phone, created_on
            FROM distributors
            WHERE name = $1
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| CatalogError::DatabaseError(e.to_string()))?
        .map(Distributor::try_from)
        .transpose()
    }

    async fn list_all(&self) -> Result<Vec<Distributor>, CatalogError> {
        let rows = sqlx::query_as::<_, DistributorRow>(
            r#"
            SELECT id, name, address, phone, created_on
            FROM distributors
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| CatalogError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Distributor::try_from).collect()
    }
}
