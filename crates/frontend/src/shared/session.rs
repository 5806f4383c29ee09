use web_sys::window;

const ACCESS_TOKEN_KEY: &str = "auth_access_token";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Access token saved by the login page, if any
pub fn get_access_token() -> Option<String> {
    get_local_storage()?
        .get_item(ACCESS_TOKEN_KEY)
        .ok()?
        .filter(|t| !t.trim().is_empty())
}

/// `Authorization` header value
pub fn auth_header() -> Option<String> {
    get_access_token().map(|token| format!("Bearer {}", token))
}
