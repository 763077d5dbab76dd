//! Product catalog: the shared API contract and the catalog service.
//!
//! Business rules only (no IO, no HTTP). The HTTP crate decodes requests into
//! [`ProductCandidate`]s and hands them to [`CatalogService`]; the client crate
//! reuses the same types on the other side of the wire.

pub mod candidate;
pub mod category;
pub mod product;
pub mod rules;
pub mod seed;
pub mod service;

pub use candidate::{CategoryCandidate, ProductCandidate};
pub use category::Category;
pub use product::{Price, Product};
pub use rules::{CATEGORY_RULES, PRODUCT_RULES};
pub use seed::Catalog;
pub use service::{CatalogService, CreateOutcome, location_for};
