//! Catalog service: list everything, validate-and-echo on create.
//!
//! `create` takes `&self`: an accepted product is handed back to the caller
//! and is *not* added to the catalog, so `list` keeps returning the seed.

use shopfront_core::{FieldError, ProductId, Validate, ValidationOutcome};

use crate::candidate::ProductCandidate;
use crate::product::Product;
use crate::seed::Catalog;

/// Result of a create request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    /// Accepted; `location` points at where the resource would live.
    Created { location: String, product: Product },
    /// At least one rule failed; nothing was created.
    Rejected(Vec<FieldError>),
}

/// Location reference for a product id.
pub fn location_for(id: ProductId) -> String {
    format!("/api/products/{id}")
}

#[derive(Debug, Clone)]
pub struct CatalogService {
    catalog: Catalog,
}

impl CatalogService {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn list(&self) -> &[Product] {
        self.catalog.products()
    }

    pub fn validate(&self, candidate: &ProductCandidate) -> ValidationOutcome {
        candidate.validate()
    }

    pub fn create(&self, candidate: ProductCandidate) -> CreateOutcome {
        if let ValidationOutcome::Invalid(errors) = self.validate(&candidate) {
            return CreateOutcome::Rejected(errors);
        }

        match Product::try_from(candidate) {
            Ok(product) => CreateOutcome::Created {
                location: location_for(product.id()),
                product,
            },
            Err(err) => CreateOutcome::Rejected(err.field_errors().to_vec()),
        }
    }
}
