//! URL helpers for the admin API and stored images.

use super::config::config;

/// Port the API listens on when no base URL is configured
const FALLBACK_API_PORT: u16 = 3000;

/// Base URL for API requests.
///
/// `api.base_url` from the config wins; otherwise the host of the current page is
/// used with [`FALLBACK_API_PORT`]. Empty outside a browser window.
pub fn api_base() -> String {
    let configured = &config().api.base_url;
    if !configured.is_empty() {
        return configured.clone();
    }
    let Some(window) = web_sys::window() else {
        return String::new();
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location.hostname().unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, FALLBACK_API_PORT)
}

/// `api_url("/subcategories/meta")` -> `"{base}/subcategories/meta"`
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Prefix for stored image paths: `api.image_base_url`, or the API base
pub fn image_base() -> String {
    let configured = &config().api.image_base_url;
    if configured.is_empty() {
        api_base()
    } else {
        configured.clone()
    }
}

/// Full URL of a stored image
pub fn image_url(path: &str) -> String {
    if is_absolute(path) {
        path.to_string()
    } else {
        join_url(&image_base(), path)
    }
}

fn is_absolute(path: &str) -> bool {
    path.starts_with("http://") || path.starts_with("https://") || path.starts_with("data:") || path.starts_with("blob:")
}

fn join_url(base: &str, path: &str) -> String {
    match (base.ends_with('/'), path.starts_with('/')) {
        (true, true) => format!("{}{}", base, &path[1..]),
        (false, false) if !base.is_empty() => format!("{}/{}", base, path),
        _ => format!("{}{}", base, path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url_single_slash() {
        assert_eq!(join_url("http://cdn.test/", "/img/a.png"), "http://cdn.test/img/a.png");
        assert_eq!(join_url("http://cdn.test", "img/a.png"), "http://cdn.test/img/a.png");
        assert_eq!(join_url("http://cdn.test", "/img/a.png"), "http://cdn.test/img/a.png");
        assert_eq!(join_url("", "/img/a.png"), "/img/a.png");
    }

    #[test]
    fn test_absolute_paths_are_kept() {
        assert!(is_absolute("https://cdn.test/a.png"));
        assert!(is_absolute("blob:http://localhost/123"));
        assert!(!is_absolute("/storage/a.png"));
    }
}
