//! `shopfront-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no HTTP, no IO): typed
//! identifiers, the entity/value-object markers, the domain error model, and
//! the rule-table validation engine used by the catalog.

pub mod error;
pub mod id;
pub mod validation;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use id::{CategoryId, ProductId};
pub use validation::{FieldError, Rule, RuleSet, Validate, ValidationOutcome};
pub use value_object::ValueObject;
