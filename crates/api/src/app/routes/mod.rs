use axum::Router;

pub mod products;

/// Every API route, mounted under `/api`.
pub fn router() -> Router {
    Router::new().nest("/api", products::router())
}
