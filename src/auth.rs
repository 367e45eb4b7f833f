//! Bearer-token handling for the LinkedIn proxy.
//!
//! This module contains the two sides of the bearer-token plumbing: parsing
//! the token out of an inbound `Authorization` header, and building the
//! outbound `Authorization` header for the LinkedIn API. Tokens are forwarded
//! verbatim and never stored.

/// Builds the Authorization header for Bearer Token authentication.
///
/// This function creates the proper Authorization header for the outbound
/// request to the LinkedIn API. The token is used exactly as supplied by the
/// caller.
///
/// # Parameters
///
/// - `access_token`: The access token to forward upstream
///
/// # Returns
///
/// A properly formatted Authorization header string.
///
/// # Example
///
/// ```rust
/// use linkpost::build_bearer_auth_header;
///
/// let header = build_bearer_auth_header("your_access_token");
/// assert_eq!(header, "Bearer your_access_token");
/// ```
pub fn build_bearer_auth_header(access_token: &str) -> String {
    format!("Bearer {}", access_token)
}

/// Extracts the bearer token from an inbound `Authorization` header value.
///
/// Accepts only values of the form `Bearer <token>` where `<token>` is
/// non-empty. Anything else (missing scheme, wrong scheme, empty token) is
/// rejected so the handler can answer 401 without making an upstream call.
///
/// # Parameters
///
/// - `header_value`: The raw `Authorization` header value
///
/// # Returns
///
/// - `Some(&str)`: The token portion of the header
/// - `None`: If the header is not a well-formed bearer credential
///
/// # Example
///
/// ```rust
/// use linkpost::extract_bearer_token;
///
/// assert_eq!(extract_bearer_token("Bearer abc123"), Some("abc123"));
/// assert_eq!(extract_bearer_token("Basic abc123"), None);
/// assert_eq!(extract_bearer_token("Bearer "), None);
/// ```
pub fn extract_bearer_token(header_value: &str) -> Option<&str> {
    let token = header_value.strip_prefix("Bearer ")?;
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}
