//! # Linkpost
//!
//! A Rust web service that proxies two LinkedIn API operations through thin
//! HTTP endpoints: resolving the authenticated member's id and publishing a
//! text UGC post on the member's behalf.
//!
//! ## Environment Variables
//!
//! - `PORT`: Server port (defaults to 3000)
//! - `LINKEDIN_API_BASE_URL`: Upstream base URL (defaults to
//!   `https://api.linkedin.com`)
//! - `RUST_LOG`: Log level filter for `env_logger`
//!
//! ## API Endpoints
//!
//! - `GET /`: Returns a welcome message
//! - `GET /health`: Returns service health status
//! - `GET /api/linkedin/userId`: Resolves the caller's LinkedIn member id
//!   (requires `Authorization: Bearer <token>`)
//! - `POST /api/linkedin/post`: Publishes a text post for the caller
//!   (JSON body `{"accessToken": ..., "content": ...}`)

use axum::{
    routing::{get, post},
    Router,
};
use log::info;
use std::net::SocketAddr;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

mod auth;
mod config;
mod handlers;
mod linkedin;

use config::{get_server_port, LinkedInConfig};
use handlers::{handle_create_post, handle_health, handle_root, handle_user_id};

/// Main entry point for the linkpost web service.
///
/// This function initializes the logging system, sets up the HTTP server
/// with all routes, and starts listening for incoming requests. The server
/// runs indefinitely until terminated.
///
/// # Server Configuration
///
/// The server is configured with the following routes:
/// - `GET /`: Root endpoint with welcome message
/// - `GET /health`: Health check endpoint
/// - `GET /api/linkedin/userId`: LinkedIn member id lookup
/// - `POST /api/linkedin/post`: LinkedIn UGC post creation
///
/// The LinkedIn client configuration is loaded once at startup and shared
/// across handlers as router state; it holds no credentials, only the
/// upstream base URL and timeout.
///
/// # Panics
///
/// This function will panic if:
/// - The server port cannot be bound (e.g., port already in use)
/// - There's an error starting the HTTP server
#[tokio::main]
async fn main() {
    // Initialize the logging system
    env_logger::init();

    let linkedin_config = LinkedInConfig::from_env();
    info!(
        "Using LinkedIn API base URL: {}",
        linkedin_config.api_base_url
    );

    // Build the HTTP application with all routes and middleware
    let app = Router::new()
        .route("/", get(handle_root))
        .route("/health", get(handle_health))
        .route("/api/linkedin/userId", get(handle_user_id))
        .route("/api/linkedin/post", post(handle_create_post))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(linkedin_config);

    // Get the server port and bind address
    let port = get_server_port();
    let addr: SocketAddr = ([0, 0, 0, 0], port).into();

    info!("Starting linkpost server on {}", addr);

    // Bind to the address and start serving requests
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
