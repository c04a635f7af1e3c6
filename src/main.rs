//! Learnify API - Main Application Entry Point
//!
//! REST API serving the Learnify course catalog. Course and lesson endpoints
//! under `/api` require an API key; the landing page, health check and API
//! documentation are public.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Catalog**: PostgreSQL with sqlx, or the bundled seed data in memory
//! - **Authentication**: static API key allow-list, `Authorization: Bearer <key>`
//! - **Docs**: OpenAPI document generated with utoipa, rendered by Swagger UI
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Build the credential set from `VALID_API_KEYS`
//! 3. Connect to PostgreSQL and run migrations, or load the in-memory catalog
//! 4. Build HTTP router with routes and middleware
//! 5. Start server on configured port

mod config;
mod db;
mod error;
mod extract;
mod handlers;
mod middleware;
mod models;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use services::{
    catalog::{CatalogRepository, InMemoryCatalog},
    pg_catalog::PgCatalog,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Reads RUST_LOG (defaults to "info" level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = config::Config::from_env()?;
    tracing::info!("Configuration loaded");

    let credentials = config.credentials();
    if credentials.is_empty() {
        tracing::warn!("VALID_API_KEYS is empty; every /api request will be rejected");
    } else {
        tracing::info!(keys = credentials.len(), "API keys loaded");
    }

    let catalog: Arc<dyn CatalogRepository> = match config
        .database_url
        .as_deref()
        .filter(|url| !url.is_empty())
    {
        Some(database_url) => {
            let pool = db::create_pool(database_url).await?;
            tracing::info!("Database pool created");

            db::run_migrations(&pool).await?;
            tracing::info!("Database migrations complete");

            Arc::new(PgCatalog::new(pool))
        }
        None => {
            tracing::info!("DATABASE_URL not set, serving bundled catalog from memory");
            Arc::new(InMemoryCatalog::seeded()?)
        }
    };

    let cors_origins = config.cors_origins()?;
    let app = routes::build_router(state::AppState::new(catalog, credentials), cors_origins);

    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
