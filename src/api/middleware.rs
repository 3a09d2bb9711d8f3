//! HTTP middleware shared by every route.

use anyhow::Context;
use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};
use tower_http::cors::{Any, CorsLayer};

use crate::config::CorsConfig;

/// Logs one line per request: method, path, response status.
pub async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let response = next.run(request).await;
    log::info!("{} {} {}", method, path, response.status().as_u16());
    response
}

/// Builds the CORS layer from configuration. `"*"` opens the API to any
/// origin; anything else must parse as a single concrete origin.
pub fn cors_layer(cors: &CorsConfig) -> anyhow::Result<CorsLayer> {
    let layer = if cors.origin == "*" {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origin: HeaderValue = cors
            .origin
            .parse()
            .with_context(|| format!("invalid cors origin `{}`", cors.origin))?;
        CorsLayer::new()
            .allow_origin(origin)
            .allow_methods(Any)
            .allow_headers(Any)
    };
    Ok(layer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wildcard_origin_is_accepted() {
        assert!(cors_layer(&CorsConfig {
            origin: "*".to_string()
        })
        .is_ok());
    }

    #[test]
    fn test_concrete_origin_is_accepted() {
        assert!(cors_layer(&CorsConfig {
            origin: "https://portal.pixell-river.com".to_string()
        })
        .is_ok());
    }

    #[test]
    fn test_unparseable_origin_is_rejected() {
        assert!(cors_layer(&CorsConfig {
            origin: "not a header\nvalue".to_string()
        })
        .is_err());
    }
}
