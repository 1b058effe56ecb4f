use axum::http::{header, HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

pub const LOCAL_CLIENT_ORIGIN: &str = "http://localhost:3000";

/// Origins allowed to call the API: the local dev client plus `CLIENT_URL` when set.
pub fn allowed_origins(client_url: Option<&str>) -> Vec<HeaderValue> {
    let mut origins = vec![HeaderValue::from_static(LOCAL_CLIENT_ORIGIN)];
    if let Some(url) = client_url.map(|u| u.trim().trim_end_matches('/')) {
        if url.is_empty() || url == LOCAL_CLIENT_ORIGIN {
            return origins;
        }
        match HeaderValue::from_str(url) {
            Ok(value) => origins.push(value),
            Err(_) => tracing::warn!(client_url = %url, "Ignoring CLIENT_URL that is not a valid origin"),
        }
    }
    origins
}

pub fn cors_layer(client_url: Option<&str>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins(client_url)))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            HeaderName::from_static("x-requested-with"),
        ])
        .allow_credentials(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_origin_is_always_allowed() {
        assert_eq!(allowed_origins(None), vec![HeaderValue::from_static(LOCAL_CLIENT_ORIGIN)]);
    }

    #[test]
    fn client_url_is_normalized_and_deduplicated() {
        let origins = allowed_origins(Some("https://tracker.example.com/"));
        assert_eq!(origins.len(), 2);
        assert_eq!(origins[1], "https://tracker.example.com");

        assert_eq!(allowed_origins(Some("http://localhost:3000")).len(), 1);
        assert_eq!(allowed_origins(Some("  ")).len(), 1);
    }
}
