//! CORS policy
//!
//! `*` allows any origin without credentials. A concrete origin is allowed
//! with credentials, mirroring the requested method and headers.

use axum::http::HeaderValue;
use tower_http::cors::{AllowHeaders, AllowMethods, Any, CorsLayer};

pub fn cors_layer(origin: &str) -> CorsLayer {
    if origin.trim() == "*" {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    match HeaderValue::from_str(origin.trim()) {
        Ok(origin) => CorsLayer::new()
            .allow_origin(origin)
            .allow_credentials(true)
            .allow_methods(AllowMethods::mirror_request())
            .allow_headers(AllowHeaders::mirror_request()),
        Err(_) => {
            tracing::warn!(origin = origin, "Invalid CORS origin, cross-origin requests disabled");
            CorsLayer::new()
        }
    }
}
