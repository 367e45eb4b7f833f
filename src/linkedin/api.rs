//! Core LinkedIn API utilities.
//!
//! This module contains the low-level plumbing shared by the profile and
//! post operations: the error type the upstream client reports, the request
//! execution helper that classifies timeouts and non-success statuses, and a
//! sanitizer for logging upstream response bodies.

use log::{debug, error, info};
use serde_json::{json, Value};
use thiserror::Error;

/// Errors produced by calls to the LinkedIn API.
///
/// The `Upstream` variant carries the raw status code and (leniently parsed)
/// response body so handlers can mirror LinkedIn's status and surface its
/// error details to the caller.
#[derive(Debug, Error)]
pub enum LinkedInApiError {
    /// The upstream request exceeded its timeout.
    #[error("request to LinkedIn timed out")]
    Timeout,

    /// LinkedIn answered with a non-success status code.
    #[error("LinkedIn API returned status {status}")]
    Upstream {
        /// HTTP status code returned by LinkedIn
        status: u16,
        /// Response body, parsed as JSON when possible
        body: Value,
    },

    /// The request could not be sent or the response body could not be read.
    #[error("request to LinkedIn failed: {0}")]
    Request(#[source] reqwest::Error),

    /// A successful response was missing an expected field.
    #[error("LinkedIn response missing field `{0}`")]
    MissingField(&'static str),
}

/// Sanitizes text for safe logging by truncating and escaping control characters.
///
/// This function:
/// - Truncates long text to prevent log flooding
/// - Replaces control characters that could manipulate log output
/// - Escapes newlines to prevent log injection
///
/// # Parameters
///
/// - `text`: The text to sanitize
/// - `max_len`: Maximum length before truncation
///
/// # Returns
///
/// A sanitized string safe for logging
pub(crate) fn sanitize_for_logging(text: &str, max_len: usize) -> String {
    // Replace control characters and newlines to prevent log injection
    let sanitized: String = text
        .chars()
        .map(|c| match c {
            '\n' => ' ',
            '\r' => ' ',
            '\t' => ' ',
            c if c.is_control() => '?',
            c => c,
        })
        .collect();

    if sanitized.len() > max_len {
        format!(
            "{}... [truncated, {} total bytes]",
            &sanitized[..max_len],
            text.len()
        )
    } else {
        sanitized
    }
}

/// Sends a request to the LinkedIn API and returns the status and body.
///
/// This helper handles the pattern shared by both operations: send the
/// request, classify timeouts, and read the response body. The body is
/// parsed as JSON when possible; non-JSON bodies are wrapped as
/// `{"message": <raw text>}` so upstream error details are never lost.
///
/// Status interpretation is left to the caller since the two operations
/// accept different success codes.
///
/// # Parameters
///
/// - `request_builder`: A configured reqwest::RequestBuilder ready to send
/// - `operation_name`: Human-readable name for the operation (for logging)
///
/// # Returns
///
/// - `Ok((status, body))`: The response status code and body
/// - `Err(LinkedInApiError)`: If the request timed out or failed to complete
pub(crate) async fn execute_request(
    request_builder: reqwest::RequestBuilder,
    operation_name: &str,
) -> Result<(u16, Value), LinkedInApiError> {
    info!("Sending LinkedIn API request for operation: {}", operation_name);

    let response = request_builder.send().await.map_err(|e| {
        if e.is_timeout() {
            error!("Operation '{}' timed out", operation_name);
            LinkedInApiError::Timeout
        } else {
            error!("Operation '{}' failed to send: {}", operation_name, e);
            LinkedInApiError::Request(e)
        }
    })?;

    let status = response.status().as_u16();
    info!(
        "Received response with status: {} for operation: {}",
        status, operation_name
    );

    let text = response.text().await.map_err(|e| {
        if e.is_timeout() {
            LinkedInApiError::Timeout
        } else {
            LinkedInApiError::Request(e)
        }
    })?;
    debug!(
        "Response body for '{}': {}",
        operation_name,
        sanitize_for_logging(&text, 200)
    );

    // LinkedIn error bodies are normally JSON, but a proxy or gateway in
    // front of it can answer with plain text.
    let body: Value =
        serde_json::from_str(&text).unwrap_or_else(|_| json!({ "message": text }));

    Ok((status, body))
}
