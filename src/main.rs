//! FAQ Searcher
//!
//! A JSON search proxy in front of a LibAnswers knowledge base.

mod api;
mod config;
mod errors;
mod models;
mod search;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;
use search::LibAnswersClient;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub search: Arc<LibAnswersClient>,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting FAQ searcher");
    tracing::info!("Upstream API base: {}", config.api_base);
    tracing::info!("Upstream timeout: {:?}", config.upstream_timeout);

    let search = Arc::new(LibAnswersClient::new(&config)?);

    let state = AppState {
        search,
        config: Arc::new(config.clone()),
    };

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(api::health_check))
        .route("/ping", get(api::health_check))
        .route("/search", get(api::search_faq))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
