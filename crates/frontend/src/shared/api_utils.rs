//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and the auth header.

use crate::system::auth::storage;

/// Base URL baked in at compile time (`API_BASE=https://api.example.com trunk build`)
const BUILD_API_BASE: Option<&str> = option_env!("API_BASE");

/// Get the base URL for API requests
///
/// Uses the compile-time `API_BASE` when it is set. Otherwise constructs
/// the base from the current window location, using port 3000 for the
/// backend server.
///
/// # Returns
/// - API base URL like "https://api.example.com" or "http://localhost:3000"
/// - Empty string if neither is available
pub fn api_base() -> String {
    if let Some(base) = configured_base(BUILD_API_BASE) {
        return base;
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/orders/42/submissions");
/// ```
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

/// `Authorization` header value for the stored access token, if any
pub fn auth_header() -> Option<String> {
    storage::get_access_token().map(|token| bearer(&token))
}

fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

fn configured_base(raw: Option<&str>) -> Option<String> {
    let trimmed = raw?.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_base() {
        assert_eq!(
            configured_base(Some("https://api.example.com/")),
            Some("https://api.example.com".to_string())
        );
        assert_eq!(configured_base(Some("  ")), None);
        assert_eq!(configured_base(None), None);
    }

    #[test]
    fn test_join_url() {
        assert_eq!(
            join_url("http://localhost:3000", "/api/orders/1/feedbacks"),
            "http://localhost:3000/api/orders/1/feedbacks"
        );
        assert_eq!(
            join_url("http://localhost:3000/", "api/orders/1"),
            "http://localhost:3000/api/orders/1"
        );
        assert_eq!(join_url("", "/api/orders/1"), "/api/orders/1");
    }

    #[test]
    fn test_bearer() {
        assert_eq!(bearer("abc.def"), "Bearer abc.def");
    }
}
