use anyhow::Result;
use tracing_subscriber::EnvFilter;

use garden_core::AppConfig;
use garden_server::graphql::auth::jwt::JwtService;
use garden_server::routes;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting garden-server");

    let config = AppConfig::from_env()?;

    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect(&config.database_url)
        .await?;
    tracing::info!("Connected to database");

    garden_domains::migrate(&pool).await?;
    tracing::info!("Migrations complete");

    let jwt_service = JwtService::new(&config.jwt_secret, config.jwt_issuer.clone());
    let app = routes::build_router(pool, jwt_service, &config.allowed_origins);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("GraphQL API at http://{addr}/graphql");
    axum::serve(listener, app).await?;

    Ok(())
}
