//! API utilities for frontend-backend communication

/// Backend port baked in for builds served by a separate dev server,
/// e.g. `D410_BACKEND_PORT=3000 trunk serve`. Unset for bundles the backend
/// serves itself.
const BACKEND_PORT: Option<&str> = option_env!("D410_BACKEND_PORT");

/// Get the base URL for API requests
///
/// Empty (relative URLs) when the page comes from the backend itself.
/// Only a dev build with `D410_BACKEND_PORT` set on a different port gets an
/// absolute origin.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let port = location.port().unwrap_or_default();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    base_for(&port, &protocol, &hostname, BACKEND_PORT)
}

/// Same-origin decision behind [`api_base`]
fn base_for(port: &str, protocol: &str, host: &str, backend_port: Option<&str>) -> String {
    match backend_port {
        Some(backend) if !backend.is_empty() && backend != port => {
            format!("{}//{}:{}", protocol, host, backend)
        }
        _ => String::new(),
    }
}

/// Build a full API URL from a path
///
/// # Example
/// ```ignore
/// let url = api_url("/api/d410/constraints");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
