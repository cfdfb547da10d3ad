use axum::http::HeaderMap;
use subtle::ConstantTimeEq;

/// Constant-time string comparison to prevent timing attacks
/// Use this for comparing the admin API key and other sensitive values
pub fn constant_time_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

/// Pull the presented admin key from `Authorization: Bearer ...` or `X-API-Key`.
fn presented_key(headers: &HeaderMap) -> Option<&str> {
    if let Some(value) = headers
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
    {
        if let Some(token) = value.strip_prefix("Bearer ") {
            return Some(token.trim());
        }
    }

    headers
        .get("x-api-key")
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
}

/// Check admin credentials. With no key configured, every request is refused.
pub fn is_admin_request(headers: &HeaderMap, expected: Option<&str>) -> bool {
    match (expected, presented_key(headers)) {
        (Some(expected), Some(presented)) => constant_time_compare(presented, expected),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_constant_time_compare() {
        assert!(constant_time_compare("secret123", "secret123"));
        assert!(!constant_time_compare("secret123", "secret124"));
        assert!(!constant_time_compare("secret123", "secret12"));
        assert!(!constant_time_compare("", "secret"));
    }

    #[test]
    fn test_bearer_token_accepted() {
        let mut headers = HeaderMap::new();
        headers.insert("authorization", HeaderValue::from_static("Bearer admin-key"));

        assert!(is_admin_request(&headers, Some("admin-key")));
    }

    #[test]
    fn test_x_api_key_accepted() {
        let mut headers = HeaderMap::new();
        headers.insert("x-api-key", HeaderValue::from_static("admin-key"));

        assert!(is_admin_request(&headers, Some("admin-key")));
    }

    #[test]
    fn test_wrong_key_rejected() {
        let mut headers = HeaderMap::new();
        headers.insert("x-api-key", HeaderValue::from_static("guess"));

        assert!(!is_admin_request(&headers, Some("admin-key")));
    }

    #[test]
    fn test_missing_key_rejected() {
        assert!(!is_admin_request(&HeaderMap::new(), Some("admin-key")));
    }

    #[test]
    fn test_unconfigured_key_rejects_everything() {
        let mut headers = HeaderMap::new();
        headers.insert("authorization", HeaderValue::from_static("Bearer anything"));

        assert!(!is_admin_request(&headers, None));
    }
}
