//! Storefront server entry point.

use std::error::Error;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use storefront::adapters::http::{app_router, HttpDependencies};
use storefront::adapters::postgres::run_migrations;
use storefront::adapters::{
    Argon2PasswordHasher, InMemoryProductRepository, InMemorySessionStore,
    InMemoryUserRepository, JsonFileProductSeed, PostgresProductRepository,
    PostgresUserRepository,
};
use storefront::application::SeedProductsHandler;
use storefront::config::{AppConfig, DatabaseConfig, SeedConfig, ServerConfig};
use storefront::ports::{ProductRepository, UserRepository};

type Repositories = (Arc<dyn UserRepository>, Arc<dyn ProductRepository>);

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config.server);

    tracing::info!(
        environment = ?config.server.environment,
        session_policy = ?config.auth.session_policy,
        public_prefixes = %config.auth.public_prefixes,
        "Starting storefront"
    );

    let (users, products) = match &config.database {
        Some(database) => postgres_repositories(database).await?,
        None => {
            tracing::warn!("No database configured, users and products live in memory");
            in_memory_repositories()
        }
    };

    seed_catalog(products.clone(), &config.seed).await;

    let deps = HttpDependencies {
        sessions: Arc::new(InMemorySessionStore::with_policy(
            config.auth.session_policy,
        )),
        users,
        products,
        hasher: Arc::new(Argon2PasswordHasher::new()),
    };
    let app = app_router(deps, config.auth.public_routes(), &config.server);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shut down");
    Ok(())
}

fn init_tracing(server: &ServerConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&server.log_level));

    if server.is_production() {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .compact()
            .init();
    }
}

async fn postgres_repositories(database: &DatabaseConfig) -> Result<Repositories, Box<dyn Error>> {
    let pool = database.connect().await?;
    tracing::info!(
        max_connections = database.max_connections,
        "Connected to PostgreSQL"
    );

    if database.run_migrations {
        run_migrations(&pool).await?;
        tracing::info!("Migrations applied");
    }

    Ok((
        Arc::new(PostgresUserRepository::new(pool.clone())),
        Arc::new(PostgresProductRepository::new(pool)),
    ))
}

fn in_memory_repositories() -> Repositories {
    (
        Arc::new(InMemoryUserRepository::new()),
        Arc::new(InMemoryProductRepository::new()),
    )
}

/// Seeds an empty catalog. Failures are logged and startup continues.
async fn seed_catalog(products: Arc<dyn ProductRepository>, seed: &SeedConfig) {
    let Some(path) = &seed.products_file else {
        return;
    };

    let source = JsonFileProductSeed::new(path);
    if let Err(e) = SeedProductsHandler::new(products).handle(&source).await {
        tracing::error!(error = %e, "Product seeding failed");
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}
