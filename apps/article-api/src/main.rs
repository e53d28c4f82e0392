//! Article API Server - Speculative RAG article generation over HTTP
//!
//! Provides REST endpoints for:
//! - Article generation from a topic (`POST /api/generate-article`)
//! - Health checks

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use clap::Parser;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod api;
mod error;
mod state;
#[cfg(test)]
mod tests;

use state::AppState;

/// Command-line arguments for the article server
#[derive(Parser, Debug)]
#[command(name = "article-api")]
#[command(about = "Generates multi-section cited articles with speculative RAG")]
struct Args {
    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value = "3001")]
    port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// JSON vector store file, re-read on every retrieval
    #[arg(long, env = "VECTOR_STORE_PATH", default_value = "vectorStore.json")]
    vector_store: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Build the router with CORS open to any origin
pub fn app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(api::handle_health))
        .route("/api/generate-article", post(api::handle_generate_article))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Initializing article API...");
    let state = Arc::new(AppState::from_env(&args.vector_store)?);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Server running on http://{}", addr);
    info!("Vector store: {}", args.vector_store.display());

    axum::serve(listener, app(state)).await?;

    Ok(())
}
