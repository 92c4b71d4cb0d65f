use axum::http::{HeaderValue, Method, header};
use std::io;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::info;

/// Build the CORS layer from a comma-separated origin list.
///
/// - `None` → allow any origin, method and header (the catalog's public default).
/// - `Some(list)` → only the listed origins, with the usual REST methods.
///
/// # Errors
/// Returns `InvalidInput` if the list is empty or holds an invalid header value.
pub fn build_cors_layer(allowed_origins: Option<&str>) -> io::Result<CorsLayer> {
    let Some(origins_str) = allowed_origins else {
        info!("CORS_ALLOWED_ORIGIN not set, allowing any origin");
        return Ok(CorsLayer::permissive());
    };

    let origins: Vec<HeaderValue> = origins_str
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Invalid CORS_ALLOWED_ORIGIN value: {}", e),
            )
        })?;

    if origins.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "CORS_ALLOWED_ORIGIN cannot be empty",
        ));
    }

    info!("CORS configured with allowed origins: {}", origins_str);

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(3600)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_is_permissive() {
        assert!(build_cors_layer(None).is_ok());
    }

    #[test]
    fn test_origin_list_is_accepted() {
        assert!(build_cors_layer(Some("http://localhost:3000, https://loja.example.com")).is_ok());
    }

    #[test]
    fn test_empty_list_is_rejected() {
        let err = build_cors_layer(Some(" , ")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }
}
