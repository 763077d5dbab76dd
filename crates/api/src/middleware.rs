use std::time::Instant;

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderValue, Method, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::app::errors;
use crate::config::CorsPolicy;

/// One log line per request: method, path, status, latency.
pub async fn trace_requests(req: Request<Body>, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let started = Instant::now();

    let res = next.run(req).await;

    tracing::info!(
        %method,
        %path,
        status = res.status().as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "request"
    );
    res
}

/// Convert a panicking handler into a generic 500 problem document.
///
/// The handler runs on its own task so a panic is observed as a `JoinError`
/// instead of tearing down the connection. Nothing about the fault reaches
/// the caller.
pub async fn catch_faults(req: Request<Body>, next: Next) -> Response {
    match tokio::spawn(next.run(req)).await {
        Ok(res) => res,
        Err(e) => {
            tracing::error!(error = %e, "unhandled fault while serving request");
            errors::unhandled_fault()
        }
    }
}

/// Apply the configured cross-origin policy.
///
/// With `AllowAny`, preflights are answered directly (echoing the requested
/// method and headers) and every other response gets a wildcard
/// `Access-Control-Allow-Origin`.
pub async fn cors(
    State(policy): State<CorsPolicy>,
    req: Request<Body>,
    next: Next,
) -> Response {
    if policy == CorsPolicy::Disabled {
        return next.run(req).await;
    }

    let headers = req.headers();
    let requested_method = headers.get(header::ACCESS_CONTROL_REQUEST_METHOD).cloned();
    let requested_headers = headers.get(header::ACCESS_CONTROL_REQUEST_HEADERS).cloned();

    match requested_method {
        Some(method) if req.method() == Method::OPTIONS => {
            let mut res = StatusCode::NO_CONTENT.into_response();
            let out = res.headers_mut();
            out.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
            out.insert(header::ACCESS_CONTROL_ALLOW_METHODS, method);
            if let Some(requested) = requested_headers {
                out.insert(header::ACCESS_CONTROL_ALLOW_HEADERS, requested);
            }
            res
        }
        _ => {
            let mut res = next.run(req).await;
            res.headers_mut()
                .insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
            res
        }
    }
}
