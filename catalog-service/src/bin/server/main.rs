use std::sync::Arc;

use auth::Authenticator;
use catalog_service::config::Config;
use catalog_service::domain::catalog::service::CatalogService;
use catalog_service::domain::session::service::AuthService;
use catalog_service::inbound::http::router::create_router;
use catalog_service::outbound::repositories::PostgresBlacklistRepository;
use catalog_service::outbound::repositories::PostgresDistributorRepository;
use catalog_service::outbound::repositories::PostgresProductRepository;
use catalog_service::outbound::repositories::PostgresUserRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "catalog_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "catalog-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        token_validity_hours = config.jwt.expiration_hours,
        argon2_memory_kib = config.password.memory_kib,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = config.database.max_connections,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let authenticator = Arc::new(Authenticator::new(
        config.jwt.secret.as_bytes(),
        config.jwt.token_validity(),
        config.password.cost(),
    )?);

    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
    let blacklist_repository = Arc::new(PostgresBlacklistRepository::new(pg_pool.clone()));
    let product_repository = Arc::new(PostgresProductRepository::new(pg_pool.clone()));
    let distributor_repository = Arc::new(PostgresDistributorRepository::new(pg_pool));

    let auth_service = Arc::new(AuthService::new(
        user_repository,
        blacklist_repository,
        authenticator,
    ));
    let catalog_service = Arc::new(CatalogService::new(
        product_repository,
        distributor_repository,
    ));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(auth_service, catalog_service);

    if let Err(e) = axum::serve(http_listener, http_application).await {
        tracing::error!(error = %e, "Server error");
        return Err(e.into());
    }

    tracing::info!("Server exited successfully");

    Ok(())
}
