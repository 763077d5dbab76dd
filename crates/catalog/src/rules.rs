//! Product and category rule tables.
//!
//! Rows are evaluated top to bottom and every failing row is reported. Rows
//! for the embedded category only fire when a category is present; its absence
//! is reported once by the `category` row.

use rust_decimal::Decimal;

use shopfront_core::validation::{char_len, length_within};
use shopfront_core::{Rule, RuleSet};

use crate::candidate::{CategoryCandidate, ProductCandidate};
use crate::product::Price;

pub const NAME_MIN: usize = 2;
pub const NAME_MAX: usize = 100;
pub const CATEGORY_NAME_MIN: usize = 2;
pub const CATEGORY_NAME_MAX: usize = 50;

pub mod messages {
    pub const ID_POSITIVE: &str = "Id must be a positive number";
    pub const NAME_REQUIRED: &str = "Name is required";
    pub const NAME_LENGTH: &str = "Name must be between 2 and 100 characters";
    pub const PRICE_POSITIVE: &str = "Price must be greater than 0";
    pub const STOCK_NON_NEGATIVE: &str = "Stock cannot be negative";
    pub const CATEGORY_REQUIRED: &str = "Category is required";
    pub const CATEGORY_ID_POSITIVE: &str = "Category Id must be a positive number";
    pub const CATEGORY_NAME_LENGTH: &str = "Category name must be between 2 and 50 characters";
}

pub fn price_in_range(amount: Decimal) -> bool {
    amount >= Price::minimum()
}

fn category_id_positive(c: &CategoryCandidate) -> bool {
    c.id >= 1
}

fn category_name_in_range(c: &CategoryCandidate) -> bool {
    c.name
        .as_deref()
        .is_some_and(|name| length_within(name, CATEGORY_NAME_MIN, CATEGORY_NAME_MAX))
}

static CATEGORY_TABLE: [Rule<CategoryCandidate>; 2] = [
    Rule::new("id", messages::CATEGORY_ID_POSITIVE, category_id_positive),
    Rule::new("name", messages::CATEGORY_NAME_LENGTH, category_name_in_range),
];

pub static CATEGORY_RULES: RuleSet<CategoryCandidate> = RuleSet::new(&CATEGORY_TABLE);

fn id_positive(p: &ProductCandidate) -> bool {
    p.id >= 1
}

fn name_present(p: &ProductCandidate) -> bool {
    p.name.as_deref().is_some_and(|name| !name.trim().is_empty())
}

// Only a missing name skips the length check; blank text is still measured.
fn name_in_range(p: &ProductCandidate) -> bool {
    p.name
        .as_deref()
        .is_none_or(|name| (NAME_MIN..=NAME_MAX).contains(&char_len(name)))
}

fn price_positive(p: &ProductCandidate) -> bool {
    price_in_range(p.price)
}

fn stock_non_negative(p: &ProductCandidate) -> bool {
    p.stock >= 0
}

fn category_present(p: &ProductCandidate) -> bool {
    p.category.is_some()
}

fn embedded_category_id(p: &ProductCandidate) -> bool {
    p.category.as_ref().is_none_or(category_id_positive)
}

fn embedded_category_name(p: &ProductCandidate) -> bool {
    p.category.as_ref().is_none_or(category_name_in_range)
}

static PRODUCT_TABLE: [Rule<ProductCandidate>; 8] = [
    Rule::new("id", messages::ID_POSITIVE, id_positive),
    Rule::new("name", messages::NAME_REQUIRED, name_present),
    Rule::new("name", messages::NAME_LENGTH, name_in_range),
    Rule::new("price", messages::PRICE_POSITIVE, price_positive),
    Rule::new("stock", messages::STOCK_NON_NEGATIVE, stock_non_negative),
    Rule::new("category", messages::CATEGORY_REQUIRED, category_present),
    Rule::new("category.id", messages::CATEGORY_ID_POSITIVE, embedded_category_id),
    Rule::new("category.name", messages::CATEGORY_NAME_LENGTH, embedded_category_name),
];

pub static PRODUCT_RULES: RuleSet<ProductCandidate> = RuleSet::new(&PRODUCT_TABLE);
