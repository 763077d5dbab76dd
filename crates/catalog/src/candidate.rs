//! Wire-shaped, not-yet-validated inputs.
//!
//! A candidate is what a client *claims* a product looks like. Every field a
//! decoder might find missing is representable here, so a missing `name` or
//! `category` becomes a validation failure instead of a placeholder value.
//! Numeric fields decode to `0` when absent, which the id and price rules
//! then reject.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use shopfront_core::{Validate, ValidationOutcome};

use crate::category::Category;
use crate::product::Product;
use crate::rules::{CATEGORY_RULES, PRODUCT_RULES};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCandidate {
    #[serde(default)]
    pub id: i32,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCandidate {
    #[serde(default)]
    pub id: i32,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision")]
    pub price: Decimal,
    #[serde(default)]
    pub stock: i32,
    #[serde(default)]
    pub category: Option<CategoryCandidate>,
}

impl Validate for CategoryCandidate {
    fn validate(&self) -> ValidationOutcome {
        CATEGORY_RULES.validate(self)
    }
}

impl Validate for ProductCandidate {
    fn validate(&self) -> ValidationOutcome {
        PRODUCT_RULES.validate(self)
    }
}

impl From<&Category> for CategoryCandidate {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id().get(),
            name: Some(category.name().to_string()),
        }
    }
}

impl From<&Product> for ProductCandidate {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id().get(),
            name: Some(product.name().to_string()),
            price: product.price().amount(),
            stock: product.stock(),
            category: Some(CategoryCandidate::from(product.category())),
        }
    }
}
