use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::Extension,
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use shopfront_catalog::{CatalogService, CreateOutcome};

use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/productlist", get(list_products))
        .route("/products", post(create_product))
}

pub async fn list_products(
    Extension(service): Extension<Arc<CatalogService>>,
) -> axum::response::Response {
    (StatusCode::OK, Json(service.list())).into_response()
}

pub async fn create_product(
    Extension(service): Extension<Arc<CatalogService>>,
    headers: HeaderMap,
    body: Bytes,
) -> axum::response::Response {
    let is_json = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(dto::is_json_content_type);
    if !is_json {
        return errors::unsupported_media_type();
    }

    let candidate = match dto::decode_candidate(&body) {
        Ok(c) => c,
        Err(e) => return errors::malformed_body(e.to_string()),
    };

    match service.create(candidate) {
        CreateOutcome::Created { location, product } => (
            StatusCode::CREATED,
            [(header::LOCATION, location)],
            Json(product),
        )
            .into_response(),
        CreateOutcome::Rejected(field_errors) => errors::validation_problem(&field_errors),
    }
}
