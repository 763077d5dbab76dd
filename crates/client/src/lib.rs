//! Typed HTTP client for the catalog API.
//!
//! Decodes list responses straight into validated [`Product`]s and turns a
//! 400 problem document back into the list of rule messages it carries.

use std::collections::BTreeMap;

use reqwest::{header, StatusCode};
use serde::Deserialize;

use shopfront_catalog::{Product, ProductCandidate};

pub const LIST_PATH: &str = "/api/productlist";
pub const CREATE_PATH: &str = "/api/products";

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("network error: {0}")]
    Network(String),
    #[error("validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),
    #[error("API error ({0}): {1}")]
    Api(u16, String),
    #[error("parse error: {0}")]
    Parse(String),
}

/// A product the server accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Created {
    /// Value of the `Location` header, when the server sent one.
    pub location: Option<String>,
    pub product: Product,
}

#[derive(Debug, Deserialize)]
struct ValidationProblem {
    #[serde(default)]
    errors: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Clone)]
pub struct CatalogClient {
    api_url: String,
    http: reqwest::Client,
}

impl CatalogClient {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self::with_http(api_url, reqwest::Client::new())
    }

    /// Use a preconfigured `reqwest::Client` (timeouts, proxies, ...).
    pub fn with_http(api_url: impl Into<String>, http: reqwest::Client) -> Self {
        let api_url = api_url.into().trim_end_matches('/').to_string();
        Self { api_url, http }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Fetch the full catalog.
    pub async fn list_products(&self) -> Result<Vec<Product>, ClientError> {
        let url = format!("{}{}", self.api_url, LIST_PATH);
        tracing::debug!(%url, "listing products");

        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(api_error(resp).await);
        }

        resp.json().await.map_err(|e| ClientError::Parse(e.to_string()))
    }

    /// Submit a candidate. Validation happens on the server.
    pub async fn create_product(&self, candidate: &ProductCandidate) -> Result<Created, ClientError> {
        let url = format!("{}{}", self.api_url, CREATE_PATH);
        tracing::debug!(%url, id = candidate.id, "creating product");

        let resp = self
            .http
            .post(&url)
            .json(candidate)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        match resp.status() {
            StatusCode::CREATED => {
                let location = resp
                    .headers()
                    .get(header::LOCATION)
                    .and_then(|v| v.to_str().ok())
                    .map(str::to_string);
                let product = resp
                    .json()
                    .await
                    .map_err(|e| ClientError::Parse(e.to_string()))?;
                Ok(Created { location, product })
            }
            StatusCode::BAD_REQUEST => {
                let text = resp
                    .text()
                    .await
                    .map_err(|e| ClientError::Network(e.to_string()))?;
                Err(validation_error(&text))
            }
            _ => Err(api_error(resp).await),
        }
    }
}

async fn api_error(resp: reqwest::Response) -> ClientError {
    let status = resp.status().as_u16();
    ClientError::Api(status, resp.text().await.unwrap_or_default())
}

fn validation_error(body: &str) -> ClientError {
    match serde_json::from_str::<ValidationProblem>(body) {
        Ok(problem) => ClientError::Validation(problem.errors.into_values().flatten().collect()),
        Err(e) => ClientError::Parse(e.to_string()),
    }
}
