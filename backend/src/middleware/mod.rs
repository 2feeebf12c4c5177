//! General-purpose middleware for the API.
//!
//! This module builds the CORS and request-tracing layers applied to the whole
//! router.

use std::time::Duration;

use axum::http::{
    header::{ACCEPT, CONTENT_TYPE},
    HeaderValue, Method,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::{HttpMakeClassifier, TraceLayer},
};
use tracing::warn;

use crate::config::Config;

/// CORS for the configured front-end origins. Credentials are allowed because
/// the session cookie has to travel with cross-origin requests.
pub fn cors_layer(config: &Config) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| {
            origin
                .parse::<HeaderValue>()
                .map_err(|_| warn!("Ignoring invalid CORS origin {origin}"))
                .ok()
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, ACCEPT])
        .max_age(Duration::from_secs(60 * 60))
}

pub fn trace_layer() -> TraceLayer<HttpMakeClassifier> {
    TraceLayer::new_for_http()
}
