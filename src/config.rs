//! Configuration module for the linkpost service.
//!
//! This module contains server configuration and the LinkedIn API client
//! configuration, both driven by environment variables.

use std::env;
use std::time::Duration;

/// Default base URL for the LinkedIn REST API.
pub const DEFAULT_API_BASE_URL: &str = "https://api.linkedin.com";

/// Timeout applied to the profile lookup request.
///
/// Post creation is intentionally left unbounded to match the upstream
/// contract for UGC post submission.
pub const PROFILE_REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Configuration for the LinkedIn API client.
///
/// This struct holds everything the upstream client needs that is not
/// supplied per-request: the API base URL and the timeout for the bounded
/// profile lookup path. The bearer token itself always arrives with the
/// inbound request and is never stored here.
///
/// The base URL is overridable so tests can point the client at a local
/// mock server.
#[derive(Debug, Clone)]
pub struct LinkedInConfig {
    /// Base URL of the LinkedIn REST API (no trailing slash)
    pub api_base_url: String,
    /// Timeout for the profile lookup request
    pub profile_timeout: Duration,
}

impl LinkedInConfig {
    /// Loads the LinkedIn API configuration from environment variables.
    ///
    /// Reads `LINKEDIN_API_BASE_URL` if set, otherwise falls back to the
    /// production API host. The profile timeout is fixed.
    ///
    /// # Returns
    ///
    /// A fully populated `LinkedInConfig`.
    pub fn from_env() -> Self {
        let api_base_url =
            env::var("LINKEDIN_API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());
        Self {
            api_base_url,
            profile_timeout: PROFILE_REQUEST_TIMEOUT,
        }
    }

    /// Creates a configuration pointing at an explicit base URL.
    ///
    /// Used by tests to target a mock upstream, with a caller-chosen timeout
    /// so the timeout path does not slow the suite down.
    pub fn with_base_url(api_base_url: impl Into<String>, profile_timeout: Duration) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            profile_timeout,
        }
    }
}

impl Default for LinkedInConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            profile_timeout: PROFILE_REQUEST_TIMEOUT,
        }
    }
}

/// Gets the server port from the environment.
///
/// Reads the `PORT` environment variable, defaulting to 3000 if not set.
///
/// # Panics
///
/// Panics if `PORT` is set but is not a valid port number.
///
/// # Example
///
/// ```rust
/// use linkpost::get_server_port;
///
/// // With PORT=8080 set in environment
/// let port = get_server_port(); // Returns 8080
///
/// // With no PORT set
/// let port = get_server_port(); // Returns 3000
/// ```
pub fn get_server_port() -> u16 {
    env::var("PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse()
        .expect("PORT must be a valid number")
}
