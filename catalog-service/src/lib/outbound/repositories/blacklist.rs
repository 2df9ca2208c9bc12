use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;

use super::violated_unique_constraint;
use crate::domain::session::errors::BlacklistError;
use crate::domain::session::models::BlacklistedToken;
use crate::domain::session::ports::BlacklistRepository;

pub struct PostgresBlacklistRepository {
    pool: PgPool,
}

impl PostgresBlacklistRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct BlacklistedTokenRow {
    id: i64,
    token: String,
    blacklisted_on: DateTime<Utc>,
}

impl From<BlacklistedTokenRow> for BlacklistedToken {
    fn from(row: BlacklistedTokenRow) -> Self {
        Self {
            id: row.id,
            token: row.token,
            blacklisted_on: row.blacklisted_on,
        }
    }
}

#[async_trait]
impl BlacklistRepository for PostgresBlacklistRepository {
    async fn add(&self, token: &str) -> Result<BlacklistedToken, BlacklistError> {
        sqlx::query_as::<_, BlacklistedTokenRow>(
            r#"
            INSERT INTO blacklist_tokens (token, blacklisted_on)
            VALUES ($1, $2)
            RETURNING id, token, blacklisted_on
            "#,
        )
        .bind(token)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map(BlacklistedToken::from)
        .map_err(|e| {
            if violated_unique_constraint(&e) == Some("blacklist_tokens_token_key") {
                return BlacklistError::AlreadyBlacklisted;
            }
            BlacklistError::DatabaseError(e.to_string())
        })
    }

    async fn contains(&self, token: &str) -> Result<bool, BlacklistError> {
        sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS (SELECT 1 FROM blacklist_tokens WHERE token = $1)
            "#,
        )
        .bind(token)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| BlacklistError::DatabaseError(e.to_string()))
    }
}
