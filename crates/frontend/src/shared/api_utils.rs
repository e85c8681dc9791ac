//! API utilities for frontend-backend communication

use super::config;

/// Base URL for API requests: `[api] base_url`, or the page origin when empty
pub fn api_base() -> String {
    let configured = config::current().api.base_url;
    if !configured.trim().is_empty() {
        return configured.trim().trim_end_matches('/').to_string();
    }
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

/// Build a full API URL from a path such as `/api/fybeca/venta`
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Appends a serialized query, skipping the `?` when there is nothing to add
pub fn with_query<Q: serde::Serialize>(url: &str, query: &Q) -> String {
    match serde_qs::to_string(query) {
        Ok(qs) if !qs.is_empty() => format!("{}?{}", url, qs),
        _ => url.to_string(),
    }
}
