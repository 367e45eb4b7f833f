//! UGC post operations for the LinkedIn API.
//!
//! This module builds the UGC post envelope and submits it to the
//! `/v2/ugcPosts` endpoint.

use log::{debug, info, warn};
use reqwest::Client;
use serde_json::{json, Value};

use crate::auth::build_bearer_auth_header;
use crate::config::LinkedInConfig;

use super::api::{execute_request, LinkedInApiError};

// TODO: derive the author URN from the authenticated member (GET /v2/me)
// instead of this fixed value. As it stands every post is attributed to the
// same member regardless of whose token is supplied.
const AUTHOR_URN: &str = "urn:li:person:llLvbUNCpu";

/// Builds the UGC post envelope for a text-only share.
///
/// The envelope follows LinkedIn's ugcPosts schema: a published lifecycle
/// state, a text-only share with no media, and public member-network
/// visibility. The caller's text is embedded verbatim as the share
/// commentary.
///
/// # Parameters
///
/// - `content`: The text of the post
///
/// # Returns
///
/// The JSON body to submit to `/v2/ugcPosts`.
pub fn build_ugc_post_body(content: &str) -> Value {
    json!({
        "author": AUTHOR_URN,
        "lifecycleState": "PUBLISHED",
        "specificContent": {
            "com.linkedin.ugc.ShareContent": {
                "shareCommentary": {
                    "text": content,
                },
                "shareMediaCategory": "NONE"
            }
        },
        "visibility": {
            "com.linkedin.ugc.MemberNetworkVisibility": "PUBLIC"
        }
    })
}

/// Creates a text UGC post on LinkedIn.
///
/// This function wraps the supplied content in the UGC post envelope and
/// submits it with the caller's access token. LinkedIn acknowledges post
/// creation with either 201 or 200; both are treated as success. The request
/// is not bounded by a timeout.
///
/// # Parameters
///
/// - `config`: LinkedIn API configuration (base URL)
/// - `access_token`: The bearer token to authenticate the upstream call with
/// - `content`: The text of the post
///
/// # Returns
///
/// - `Ok(Value)`: The upstream response body on success
/// - `Err(LinkedInApiError::Upstream)`: For any other upstream status,
///   carrying the status code and response body
///
/// # Errors
///
/// This function can fail for several reasons:
/// - Expired or invalid access token (upstream 401)
/// - Token missing the `w_member_social` permission (upstream 403)
/// - Malformed or duplicate post content (upstream 400/422)
/// - Network connectivity issues
pub async fn create_ugc_post(
    config: &LinkedInConfig,
    access_token: &str,
    content: &str,
) -> Result<Value, LinkedInApiError> {
    let url = format!("{}/v2/ugcPosts", config.api_base_url);
    info!("Submitting UGC post to {}", url);

    let payload = build_ugc_post_body(content);
    debug!("UGC post payload: {}", payload);

    let auth_header = build_bearer_auth_header(access_token);
    let request_builder = Client::new()
        .post(&url)
        .header("Authorization", auth_header)
        .header("Content-Type", "application/json")
        .json(&payload);

    let (status, body) = execute_request(request_builder, "create_ugc_post").await?;

    match status {
        200 | 201 => {
            info!("UGC post created (status {})", status);
            Ok(body)
        }
        _ => {
            warn!("UGC post rejected by LinkedIn with status {}", status);
            Err(LinkedInApiError::Upstream { status, body })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ugc_post_body_embeds_content_verbatim() {
        let body = build_ugc_post_body("Hello from the proxy");
        assert_eq!(
            body["specificContent"]["com.linkedin.ugc.ShareContent"]["shareCommentary"]["text"],
            "Hello from the proxy"
        );
        assert_eq!(
            body["specificContent"]["com.linkedin.ugc.ShareContent"]["shareMediaCategory"],
            "NONE"
        );
    }

    #[test]
    fn ugc_post_body_is_a_published_public_share() {
        let body = build_ugc_post_body("x");
        assert_eq!(body["lifecycleState"], "PUBLISHED");
        assert_eq!(
            body["visibility"]["com.linkedin.ugc.MemberNetworkVisibility"],
            "PUBLIC"
        );
        assert!(body["author"]
            .as_str()
            .expect("author must be a string")
            .starts_with("urn:li:person:"));
    }
}
