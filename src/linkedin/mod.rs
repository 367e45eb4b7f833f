//! LinkedIn API integration module.
//!
//! This module contains the upstream client for the two LinkedIn operations
//! the service proxies: resolving the authenticated member's id and creating
//! a UGC post.

mod api;
mod posts;
mod profile;

// Re-export public API
pub use api::LinkedInApiError;
pub use posts::{build_ugc_post_body, create_ugc_post};
pub use profile::fetch_user_id;
