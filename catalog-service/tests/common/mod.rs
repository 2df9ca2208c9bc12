#![allow(dead_code)]

use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use auth::Authenticator;
use auth::HashingCost;
use auth::JwtHandler;
use catalog_service::domain::catalog::errors::CatalogError;
use catalog_service::domain::catalog::models::CreateDistributorCommand;
use catalog_service::domain::catalog::models::CreateProductCommand;
use catalog_service::domain::catalog::models::Distributor;
use catalog_service::domain::catalog::models::Product;
use catalog_service::domain::catalog::ports::DistributorRepository;
use catalog_service::domain::catalog::ports::ProductRepository;
use catalog_service::domain::catalog::service::CatalogService;
use catalog_service::domain::session::errors::BlacklistError;
use catalog_service::domain::session::models::BlacklistedToken;
use catalog_service::domain::session::ports::BlacklistRepository;
use catalog_service::domain::session::service::AuthService;
use catalog_service::domain::user::errors::UserError;
use catalog_service::domain::user::models::NewUser;
use catalog_service::domain::user::models::User;
use catalog_service::domain::user::models::UserId;
use catalog_service::domain::user::ports::UserRepository;
use catalog_service::inbound::http::router::create_router;
use chrono::Utc;
use sqlx::postgres::PgConnectOptions;
use sqlx::postgres::PgPoolOptions;
use sqlx::Connection;
use sqlx::Executor;
use sqlx::PgConnection;
use sqlx::PgPool;

pub const TEST_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns a real server over in-memory storage
pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub api_client: reqwest::Client,
    pub jwt_handler: JwtHandler,
    pub users: Arc<InMemoryUserRepository>,
    pub blacklist: Arc<InMemoryBlacklistRepository>,
    pub products: Arc<InMemoryProductRepository>,
    pub distributors: Arc<InMemoryDistributorRepository>,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let validity = chrono::Duration::hours(1);

        // Cheapest argon2 parameters; production cost is irrelevant here
        let authenticator = Arc::new(
            Authenticator::new(
                TEST_SECRET,
                validity,
                HashingCost {
                    memory_kib: 1024,
                    iterations: 1,
                    parallelism: 1,
                },
            )
            .expect("Failed to create authenticator"),
        );

        let users = Arc::new(InMemoryUserRepository::default());
        let blacklist = Arc::new(InMemoryBlacklistRepository::default());
        let products = Arc::new(InMemoryProductRepository::default());
        let distributors = Arc::new(InMemoryDistributorRepository::default());

        let auth_service = Arc::new(AuthService::new(
            Arc::clone(&users),
            Arc::clone(&blacklist),
            authenticator,
        ));
        let catalog_service = Arc::new(CatalogService::new(
            Arc::clone(&products),
            Arc::clone(&distributors),
        ));

        let router = create_router(auth_service, catalog_service);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            port,
            api_client: reqwest::Client::new(),
            jwt_handler: JwtHandler::new(TEST_SECRET, validity),
            users,
            blacklist,
            products,
            distributors,
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// Helper to make POST request with Bearer token
    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }

    /// Register an account and return its token
    pub async fn register(&self, email: &str, password: &str) -> String {
        let response = self
            .post("/auth/register")
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status(), reqwest::StatusCode::CREATED);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["auth_token"]
            .as_str()
            .expect("Missing auth_token")
            .to_string()
    }
}

#[derive(Default)]
pub struct InMemoryUserRepository {
    rows: Mutex<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn remove(&self, id: UserId) {
        self.rows.lock().unwrap().retain(|user| user.id != id);
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: NewUser) -> Result<User, UserError> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|row| row.email == user.email) {
            return Err(UserError::EmailAlreadyExists(user.email.to_string()));
        }

        let created = User {
            id: UserId(rows.len() as i64 + 1),
            email: user.email,
            password_hash: user.password_hash,
            admin: user.admin,
            registered_on: user.registered_on,
        };
        rows.push(created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|row| row.id == *id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|row| row.email.as_str() == email).cloned())
    }
}

#[derive(Default)]
pub struct InMemoryBlacklistRepository {
    rows: Mutex<Vec<BlacklistedToken>>,
}

impl InMemoryBlacklistRepository {
    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl BlacklistRepository for InMemoryBlacklistRepository {
    async fn add(&self, token: &str) -> Result<BlacklistedToken, BlacklistError> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|row| row.token == token) {
            return Err(BlacklistError::AlreadyBlacklisted);
        }

        let entry = BlacklistedToken {
            id: rows.len() as i64 + 1,
            token: token.to_string(),
            blacklisted_on: Utc::now(),
        };
        rows.push(entry.clone());
        Ok(entry)
    }

    async fn contains(&self, token: &str) -> Result<bool, BlacklistError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().any(|row| row.token == token))
    }
}

#[derive(Default)]
pub struct InMemoryProductRepository {
    rows: Mutex<Vec<Product>>,
}

impl InMemoryProductRepository {
    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, command: CreateProductCommand) -> Result<Product, CatalogError> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|row| row.name == command.name) {
            return Err(CatalogError::ProductAlreadyExists(command.name.to_string()));
        }

        let product = Product {
            id: rows.len() as i64 + 1,
            name: command.name,
            price: command.price,
            quantity: command.quantity,
            created_on: Utc::now(),
        };
        rows.push(product.clone());
        Ok(product)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Product>, CatalogError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|row| row.name.as_str() == name).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Product>, CatalogError> {
        Ok(self.rows.lock().unwrap().clone())
    }
}

#[derive(Default)]
pub struct InMemoryDistributorRepository {
    rows: Mutex<Vec<Distributor>>,
}

impl InMemoryDistributorRepository {
    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl DistributorRepository for InMemoryDistributorRepository {
    async fn create(&self, command: CreateDistributorCommand) -> Result<Distributor, CatalogError> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|row| row.name == command.name) {
            return Err(CatalogError::DistributorAlreadyExists(
                command.name.to_string(),
            ));
        }

        let distributor = Distributor {
            id: rows.len() as i64 + 1,
            name: command.name,
            address: command.address,
            phone: command.phone,
            created_on: Utc::now(),
        };
        rows.push(distributor.clone());
        Ok(distributor)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Distributor>, CatalogError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|row| row.name.as_str() == name).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Distributor>, CatalogError> {
        Ok(self.rows.lock().unwrap().clone())
    }
}

/// Throwaway Postgres database with migrations applied.
///
/// Created from the server named by `DATABASE_URL`; without it the
/// Postgres-backed tests are skipped.
pub struct TestDb {
    pub pool: PgPool,
    pub db_name: String,
    server_url: String,
}

impl TestDb {
    /// Create a uniquely named database, or None when `DATABASE_URL` is unset
    pub async fn create() -> Option<Self> {
        let Ok(server_url) = std::env::var("DATABASE_URL") else {
            eprintln!("DATABASE_URL not set, skipping Postgres-backed test");
            return None;
        };

        let db_name = format!(
            "test_catalog_service_{}",
            uuid::Uuid::new_v4().to_string().replace('-', "_")
        );

        let mut conn = PgConnection::connect(&server_url)
            .await
            .expect("Failed to connect to Postgres");

        conn.execute(format!(r#"CREATE DATABASE "{}";"#, db_name).as_str())
            .await
            .expect("Failed to create test database");

        let options = server_url
            .parse::<PgConnectOptions>()
            .expect("Failed to parse DATABASE_URL")
            .database(&db_name);

        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .expect("Failed to connect to test database");

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("Failed to run migrations");

        Some(Self {
            pool,
            db_name,
            server_url,
        })
    }
}

impl Drop for TestDb {
    fn drop(&mut self) {
        // Database cleanup happens asynchronously
        let db_name = self.db_name.clone();
        let server_url = self.server_url.clone();
        tokio::spawn(async move {
            if let Ok(mut conn) = PgConnection::connect(&server_url).await {
                let _ = conn
                    .execute(
                        format!(
                            r#"SELECT pg_terminate_backend(pid) FROM pg_stat_activity WHERE datname = '{}';"#,
                            db_name
                        )
                        .as_str(),
                    )
                    .await;

                let _ = conn
                    .execute(format!(r#"DROP DATABASE IF EXISTS "{}";"#, db_name).as_str())
                    .await;
            }
        });
    }
}
