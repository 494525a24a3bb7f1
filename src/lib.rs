//! Clientes REST API
//!
//! Backend for an Angular clientes app: a CRUD HTTP API over a single
//! `clientes` table in Postgres.
//!
//! ## Architecture
//!
//! Three thin layers composed top-down per request: HTTP handlers parse
//! the request and choose the status code, the [`service::ClienteService`]
//! seam delegates to storage, and [`storage::Storage`] runs the SQL.
//!
//! ## Endpoints
//!
//! - `GET /api/clientes` - List every cliente
//! - `GET /api/clientes/:id` - Get a single cliente
//! - `POST /api/clientes` - Create a cliente
//! - `PUT /api/clientes/:id` - Update a cliente
//! - `DELETE /api/clientes/:id` - Delete a cliente
//! - `GET /health` - Health check

pub mod config;
pub mod handlers;
pub mod models;
pub mod service;
pub mod storage;

use axum::{
    http::HeaderValue,
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

pub use handlers::AppState;
pub use models::{Cliente, ClienteDraft};
pub use service::{ClienteService, PgClienteService, ServiceError};
pub use storage::Storage;

/// Create the application router.
///
/// CORS admits only `frontend_origin`; an origin that does not parse falls
/// back to a permissive policy for development.
pub fn create_router(state: AppState, frontend_origin: &str) -> Router {
    let shared_state = Arc::new(state);

    let cors = match frontend_origin.parse::<HeaderValue>() {
        Ok(origin) => CorsLayer::new()
            .allow_origin(origin)
            .allow_methods(Any)
            .allow_headers(Any),
        Err(_) => {
            warn!("Unparseable frontend origin {:?}, allowing any", frontend_origin);
            CorsLayer::permissive()
        }
    };

    Router::new()
        .route("/health", get(handlers::health_handler))
        .route("/api/clientes", get(handlers::list_clientes_handler))
        .route("/api/clientes", post(handlers::create_cliente_handler))
        .route("/api/clientes/:id", get(handlers::get_cliente_handler))
        .route("/api/clientes/:id", put(handlers::update_cliente_handler))
        .route(
            "/api/clientes/:id",
            delete(handlers::delete_cliente_handler),
        )
        .with_state(shared_state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
