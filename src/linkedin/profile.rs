//! Profile operations for the LinkedIn API.
//!
//! This module resolves the authenticated member's identifier via the
//! `/v2/me` endpoint.

use log::{info, warn};
use reqwest::Client;

use crate::auth::build_bearer_auth_header;
use crate::config::LinkedInConfig;

use super::api::{execute_request, LinkedInApiError};

/// Fetches the authenticated member's LinkedIn id.
///
/// This function issues a GET request to the `/v2/me` endpoint using the
/// caller-supplied access token and extracts the `id` field from the
/// response. The request is bounded by the configured profile timeout.
///
/// # Parameters
///
/// - `config`: LinkedIn API configuration (base URL and timeout)
/// - `access_token`: The bearer token to authenticate the upstream call with
///
/// # Returns
///
/// - `Ok(String)`: The member id on success
/// - `Err(LinkedInApiError::Timeout)`: If the upstream call exceeds the timeout
/// - `Err(LinkedInApiError::Upstream)`: For any non-200 upstream status,
///   carrying the status code and response body
/// - `Err(LinkedInApiError::MissingField)`: If a 200 response has no `id`
///
/// # Errors
///
/// This function can fail for several reasons:
/// - Expired or invalid access token (upstream 401)
/// - Missing API permissions on the token (upstream 403)
/// - Network connectivity issues or upstream slowness
pub async fn fetch_user_id(
    config: &LinkedInConfig,
    access_token: &str,
) -> Result<String, LinkedInApiError> {
    let url = format!("{}/v2/me", config.api_base_url);
    info!("Fetching LinkedIn member profile from {}", url);

    let auth_header = build_bearer_auth_header(access_token);
    let request_builder = Client::new()
        .get(&url)
        .header("Authorization", auth_header)
        .header("Content-Type", "application/json")
        .timeout(config.profile_timeout);

    let (status, body) = execute_request(request_builder, "fetch_user_id").await?;

    if status != 200 {
        warn!("Profile lookup rejected by LinkedIn with status {}", status);
        return Err(LinkedInApiError::Upstream { status, body });
    }

    match body.get("id").and_then(|v| v.as_str()) {
        Some(id) => {
            info!("Resolved LinkedIn member id: {}", id);
            Ok(id.to_string())
        }
        None => {
            warn!("Profile response did not contain an id field");
            Err(LinkedInApiError::MissingField("id"))
        }
    }
}
