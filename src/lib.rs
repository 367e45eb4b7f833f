//! # Linkpost Library
//!
//! A Rust web service library that proxies two LinkedIn API operations
//! through thin HTTP endpoints: resolving the authenticated member's id and
//! publishing a text UGC post on the member's behalf.
//!
//! The service is a stateless forwarding shim. It receives a bearer token
//! (and, for posting, a text string), forwards the call to the LinkedIn REST
//! API, and translates the upstream response or error into a local HTTP
//! response. Tokens are never stored.
//!
//! ## Configuration
//!
//! - `PORT`: Server port (defaults to 3000)
//! - `LINKEDIN_API_BASE_URL`: Upstream base URL (defaults to
//!   `https://api.linkedin.com`)
//!
//! ## API Endpoints
//!
//! - `GET /`: Returns a welcome message
//! - `GET /health`: Returns service health status
//! - `GET /api/linkedin/userId`: Resolves the caller's LinkedIn member id
//! - `POST /api/linkedin/post`: Publishes a text post for the caller

pub mod auth;
pub mod config;
pub mod handlers;
pub mod linkedin;

// Re-export commonly used types and functions
pub use auth::{build_bearer_auth_header, extract_bearer_token};
pub use config::{get_server_port, LinkedInConfig};
pub use handlers::{handle_create_post, handle_health, handle_root, handle_user_id};
pub use linkedin::{create_ugc_post, fetch_user_id, LinkedInApiError};
