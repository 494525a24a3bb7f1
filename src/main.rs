//! Clientes API Service
//!
//! REST API backend for the Angular clientes app.

use anyhow::{Context, Result};
use clientes_api::config::Config;
use clientes_api::{create_router, AppState, PgClienteService, Storage};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "clientes_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Clientes API Service");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    info!("Frontend origin: {}", config.frontend_origin);

    // Initialize storage
    let storage = Storage::new(&config.database_url)
        .await
        .context("Failed to initialize storage")?;

    storage
        .init_schema()
        .await
        .context("Failed to prepare the clientes table")?;

    // Create application state
    let state = AppState {
        service: Box::new(PgClienteService::new(storage)),
    };

    // Create router
    let app = create_router(state, &config.frontend_origin);

    // Bind and serve
    let listener = TcpListener::bind(&config.api_address())
        .await
        .with_context(|| format!("Failed to bind to {}", config.api_address()))?;

    info!("Clientes API running on http://{}", config.api_address());
    info!("API endpoints:");
    info!("  GET    /api/clientes - List clientes");
    info!("  GET    /api/clientes/:id - Get cliente by id");
    info!("  POST   /api/clientes - Create cliente");
    info!("  PUT    /api/clientes/:id - Update cliente");
    info!("  DELETE /api/clientes/:id - Delete cliente");

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
