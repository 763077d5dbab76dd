//! HTTP API application wiring (Axum router + middleware).
//!
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: request decoding helpers
//! - `errors.rs`: problem-document responses

use std::sync::Arc;

use axum::{Extension, Router};
use tower::ServiceBuilder;

use shopfront_catalog::CatalogService;

use crate::config::ApiConfig;
use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(config: &ApiConfig, service: CatalogService) -> Router {
    let api = routes::router().layer(Extension(Arc::new(service)));
    with_layers(api, config)
}

/// Wrap `router` in the request logging, CORS and fault catching layers.
///
/// CORS sits outside fault catching so the 500 produced for a panic still
/// carries the CORS headers.
pub fn with_layers(router: Router, config: &ApiConfig) -> Router {
    router.layer(
        ServiceBuilder::new()
            .layer(axum::middleware::from_fn(middleware::trace_requests))
            .layer(axum::middleware::from_fn_with_state(
                config.cors,
                middleware::cors,
            ))
            .layer(axum::middleware::from_fn(middleware::catch_faults)),
    )
}
