//! HTTP route handlers for the linkpost service.
//!
//! This module contains all the HTTP route handler functions that process
//! incoming requests, call the LinkedIn API, and translate the upstream
//! outcome into a local response.

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::Json,
};
use log::{error, info, warn};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::auth::extract_bearer_token;
use crate::config::LinkedInConfig;
use crate::linkedin::{create_ugc_post, fetch_user_id, LinkedInApiError};

/// Request body for the post-creation endpoint.
///
/// Both fields are required and must be non-empty; they are declared
/// optional here so that the handler can answer with its own 400 envelope
/// instead of the framework's rejection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    /// The bearer token to forward to LinkedIn
    pub access_token: Option<String>,
    /// The text of the post
    pub content: Option<String>,
}

/// Converts an upstream status code into a local response status.
///
/// LinkedIn's status is mirrored when it is a valid HTTP status; anything
/// unrepresentable falls back to 500.
fn map_upstream_status(status: u16) -> StatusCode {
    StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

/// Handles GET requests to the root `/` endpoint.
///
/// This endpoint returns a short welcome message identifying the service.
///
/// # Returns
///
/// A static welcome string.
pub async fn handle_root() -> &'static str {
    info!("Root endpoint hit");
    "linkpost: LinkedIn proxy service"
}

/// Handles GET requests to the `/health` endpoint.
///
/// This endpoint provides a health check for the service, returning the
/// current status and service name. It's commonly used by load balancers and
/// monitoring systems to verify that the service is running and responsive.
///
/// # Returns
///
/// A JSON response containing:
/// - `status`: Always "healthy" when the service is running
/// - `service`: The service name "linkpost"
pub async fn handle_health() -> Json<Value> {
    Json(json!({"status": "healthy", "service": "linkpost"}))
}

/// Handles GET requests to the `/api/linkedin/userId` endpoint.
///
/// This endpoint resolves the authenticated member's LinkedIn id. The caller
/// supplies their access token in the `Authorization: Bearer <token>` header;
/// the token is forwarded verbatim to LinkedIn's `/v2/me` endpoint and the
/// `id` field of the profile is returned.
///
/// # Returns
///
/// - `200 {"linkedInUserId": <id>}`: On upstream success
/// - `401 {"error": ...}`: If the Authorization header is missing or
///   malformed (no upstream call is made)
/// - `504 {"error": ...}`: If the upstream call times out
/// - LinkedIn's own status with `{"error": <upstream message>}`: When
///   LinkedIn rejects the request
/// - `500 {"error": ...}`: For any other local failure
pub async fn handle_user_id(
    State(config): State<LinkedInConfig>,
    headers: HeaderMap,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let token = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(extract_bearer_token);

    let token = match token {
        Some(token) => token,
        None => {
            warn!("Rejecting userId request: Authorization header missing or invalid");
            return Err((
                StatusCode::UNAUTHORIZED,
                Json(json!({"error": "Authorization header missing or invalid"})),
            ));
        }
    };

    match fetch_user_id(&config, token).await {
        Ok(id) => {
            info!("userId request resolved successfully");
            Ok(Json(json!({"linkedInUserId": id})))
        }
        Err(LinkedInApiError::Timeout) => {
            error!("userId request timed out against LinkedIn");
            Err((
                StatusCode::GATEWAY_TIMEOUT,
                Json(json!({"error": "Request timed out"})),
            ))
        }
        Err(LinkedInApiError::Upstream { status, body }) => {
            let message = body
                .get("message")
                .and_then(|v| v.as_str())
                .unwrap_or("Unknown error");
            error!(
                "LinkedIn rejected userId request with status {}: {}",
                status, message
            );
            Err((map_upstream_status(status), Json(json!({"error": message}))))
        }
        Err(e) => {
            error!("Failed to fetch LinkedIn user data: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "Failed to fetch user data from LinkedIn"})),
            ))
        }
    }
}

/// Handles POST requests to the `/api/linkedin/post` endpoint.
///
/// This endpoint publishes a text post on the caller's behalf. The request
/// body carries the access token and the post content; the content is
/// wrapped in LinkedIn's UGC post envelope and submitted to `/v2/ugcPosts`
/// with the caller's token.
///
/// # Request Body
///
/// ```json
/// {
///   "accessToken": "<bearer token>",
///   "content": "<post text>"
/// }
/// ```
///
/// # Returns
///
/// - `200 {"message": "Post created successfully!", "data": <upstream body>}`:
///   On upstream success (201 or 200)
/// - `400 {"error": ...}`: If `accessToken` or `content` is missing or empty
///   (no upstream call is made)
/// - LinkedIn's own status with `{"error": ..., "details": <upstream body>}`:
///   When LinkedIn rejects the post
/// - `500 {"error": ..., "details": <message>}`: For any other local failure
pub async fn handle_create_post(
    State(config): State<LinkedInConfig>,
    Json(request): Json<CreatePostRequest>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let access_token = request.access_token.as_deref().unwrap_or("");
    let content = request.content.as_deref().unwrap_or("");

    if access_token.is_empty() || content.is_empty() {
        warn!("Rejecting post request: accessToken or content missing");
        return Err((
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "accessToken and content are required"})),
        ));
    }

    match create_ugc_post(&config, access_token, content).await {
        Ok(data) => {
            info!("Post created successfully");
            Ok(Json(
                json!({"message": "Post created successfully!", "data": data}),
            ))
        }
        Err(LinkedInApiError::Upstream { status, body }) => {
            error!("LinkedIn rejected post creation with status {}", status);
            Err((
                map_upstream_status(status),
                Json(json!({"error": "Failed to create post", "details": body})),
            ))
        }
        Err(e) => {
            error!("Failed to create post: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "An error occurred", "details": e.to_string()})),
            ))
        }
    }
}
