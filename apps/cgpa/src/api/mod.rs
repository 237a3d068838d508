//! # HTTP API
//!
//! JSON API over the calculation pipeline.
//!
//! | Method | Path             | Purpose                         |
//! |--------|------------------|---------------------------------|
//! | POST   | `/api/calculate` | Validate and compute SGPA/CGPA  |
//! | GET    | `/api/health`    | Liveness check                  |
//! | GET    | `/api/sample`    | Example request body            |
//!
//! The router is a plain value built by [`create_router`]; [`serve`] binds
//! it to a listener. Handlers share no state.

mod error;
mod handlers;
mod types;

pub use error::{ApiError, handle_panic};
pub use handlers::{calculate_handler, health_handler, not_found_handler, sample_handler};
pub use types::{
    API_VERSION, CalculateResponse, ErrorResponse, HealthResponse, SampleResponse,
    STATUS_ERROR, STATUS_HEALTHY, STATUS_SUCCESS,
};

use axum::Router;
use axum::routing::{get, post};
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

// =============================================================================
// CONFIGURATION
// =============================================================================

/// Default bind host.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default bind port.
pub const DEFAULT_PORT: u16 = 5000;

/// Listener configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Host name or IP address to bind.
    pub host: String,
    /// TCP port to bind.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

// =============================================================================
// ROUTER
// =============================================================================

/// Build the application router.
pub fn create_router() -> Router {
    with_middleware(
        Router::new()
            .route("/api/calculate", post(calculate_handler))
            .route("/api/health", get(health_handler))
            .route("/api/sample", get(sample_handler))
            .fallback(not_found_handler),
    )
}

/// Wrap routes with request tracing, panic recovery and permissive CORS.
///
/// Any origin may call the API; it carries no credentials or user state.
fn with_middleware(router: Router) -> Router {
    router.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CatchPanicLayer::custom(handle_panic))
            .layer(CorsLayer::permissive()),
    )
}

// =============================================================================
// SERVER
// =============================================================================

/// Bind and serve until Ctrl-C.
pub async fn serve(config: &ServerConfig) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    let addr = listener.local_addr()?;

    info!("CGPA Calculator API listening on http://{}", addr);
    info!("  POST /api/calculate - Calculate CGPA");
    info!("  GET  /api/health    - Health check");
    info!("  GET  /api/sample    - Get sample data format");

    axum::serve(listener, create_router())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            // Without a signal handler, run until killed.
            error!("Failed to install Ctrl-C handler: {}", e);
            std::future::pending::<()>().await;
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
