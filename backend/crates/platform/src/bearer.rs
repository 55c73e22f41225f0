//! Bearer Token Header Extraction
//!
//! Common handling for the `Authorization: Bearer <token>` scheme.

use axum::http::{HeaderMap, header};

/// Extract a bearer token from the Authorization header
///
/// Returns `None` when the header is absent, not valid UTF-8, or does
/// not use the Bearer scheme. The scheme name is matched
/// case-insensitively per RFC 9110.
pub fn extract_bearer(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;

    let (scheme, token) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("Bearer") {
        return None;
    }

    let token = token.trim();
    if token.is_empty() {
        return None;
    }

    Some(token.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn test_extract_bearer() {
        let headers = headers_with("Bearer abc.def");
        assert_eq!(extract_bearer(&headers), Some("abc.def".to_string()));
    }

    #[test]
    fn test_scheme_case_insensitive() {
        let headers = headers_with("bearer abc");
        assert_eq!(extract_bearer(&headers), Some("abc".to_string()));
    }

    #[test]
    fn test_missing_or_malformed() {
        assert_eq!(extract_bearer(&HeaderMap::new()), None);
        assert_eq!(extract_bearer(&headers_with("Basic dXNlcjpwdw==")), None);
        assert_eq!(extract_bearer(&headers_with("Bearer ")), None);
        assert_eq!(extract_bearer(&headers_with("Bearer")), None);
    }
}
