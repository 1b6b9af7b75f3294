//! Endpoint URLs
//!
//! Activity names and emails go into the path and query string
//! percent-encoded, so names with spaces or `/` and emails with `+` reach
//! the server intact.

use urlencoding::encode;

/// Normalize a base URL: no trailing slash. An empty base yields
/// origin-relative URLs.
pub fn normalize_base(base_url: &str) -> String {
    base_url.trim().trim_end_matches('/').to_string()
}

/// `GET /activities`
pub fn activities_url(base_url: &str) -> String {
    format!("{}/activities", normalize_base(base_url))
}

/// `POST /activities/{activity}/signup?email={email}`
pub fn signup_url(base_url: &str, activity: &str, email: &str) -> String {
    format!(
        "{}/activities/{}/signup?email={}",
        normalize_base(base_url),
        encode(activity),
        encode(email)
    )
}

/// `DELETE /activities/{activity}/participants?email={email}`
pub fn unregister_url(base_url: &str, activity: &str, email: &str) -> String {
    format!(
        "{}/activities/{}/participants?email={}",
        normalize_base(base_url),
        encode(activity),
        encode(email)
    )
}
