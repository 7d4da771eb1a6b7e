//! HTTP server: routes, shared state, and the serve loop.

mod error;
mod handlers;
mod types;

pub use error::ApiError;
pub use types::{CreatedResponse, GameResponse, GamesResponse, ReasonResponse};

use std::sync::Arc;
use std::time::Instant;

use axum::Router;
use axum::body::Body;
use axum::http::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::get;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tracing::{info, instrument, warn};

use crate::config::ServerConfig;
use crate::store::GameStore;

/// State shared by every handler.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn GameStore>,
    base_url: Arc<str>,
}

impl AppState {
    /// Creates handler state around a store.
    ///
    /// `base_url` prefixes the `location` of created games.
    pub fn new(store: Arc<dyn GameStore>, base_url: impl Into<Arc<str>>) -> Self {
        Self {
            store,
            base_url: base_url.into(),
        }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    let games = Router::new()
        .route(
            "/games",
            get(handlers::list_games).post(handlers::create_game),
        )
        .route(
            "/games/{game_id}",
            get(handlers::get_game)
                .put(handlers::edit_game)
                .delete(handlers::delete_game),
        );

    Router::new()
        .nest("/api/v1", games)
        .route("/", get(handlers::index))
        .fallback(handlers::index)
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(log_requests))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

/// Logs each request and the status it got.
async fn log_requests(req: Request<Body>, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();
    info!(%method, %uri, "Incoming HTTP request");

    let started = Instant::now();
    let response = next.run(req).await;
    let status = response.status();
    let elapsed_ms = started.elapsed().as_millis() as u64;

    if status.is_server_error() {
        warn!(%method, %uri, %status, elapsed_ms, "Request failed");
    } else {
        info!(%method, %uri, %status, elapsed_ms, "Response sent");
    }
    response
}

/// Serves the API until Ctrl+C.
///
/// # Errors
///
/// Returns an error if the listener cannot bind or the server fails.
#[instrument(skip(config, store), fields(host = %config.host(), port = config.port()))]
pub async fn serve(config: &ServerConfig, store: Arc<dyn GameStore>) -> anyhow::Result<()> {
    let state = AppState::new(store, config.base_url());
    let app = router(state);

    let listener = tokio::net::TcpListener::bind((config.host().as_str(), *config.port())).await?;
    info!(
        addr = %listener.local_addr()?,
        base_url = %config.base_url(),
        "Server ready"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Completes when Ctrl+C is received.
async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received, stopping server"),
        Err(e) => {
            warn!(error = %e, "Failed to listen for Ctrl+C, running until killed");
            std::future::pending::<()>().await;
        }
    }
}
