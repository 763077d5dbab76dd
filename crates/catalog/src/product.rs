use rust_decimal::Decimal;
use serde::{Deserialize, Serialize, Serializer};

use shopfront_core::{DomainError, FieldError, ProductId, Validate, ValueObject};

use crate::candidate::ProductCandidate;
use crate::category::Category;
use crate::rules::{self, messages};

/// Monetary amount, exact decimal.
///
/// Serialized as a JSON number carrying the exact decimal digits (`499.00`
/// stays `499.00`). Comparisons always happen on the `Decimal`, never on a
/// float.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(Decimal);

impl Price {
    /// Smallest accepted amount (one cent).
    pub fn minimum() -> Decimal {
        Decimal::new(1, 2)
    }

    pub fn new(amount: Decimal) -> Result<Self, DomainError> {
        if rules::price_in_range(amount) {
            Ok(Self(amount))
        } else {
            Err(DomainError::validation(vec![FieldError::new(
                "price",
                messages::PRICE_POSITIVE,
            )]))
        }
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }
}

impl ValueObject for Price {}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        rust_decimal::serde::arbitrary_precision::serialize(&self.0, serializer)
    }
}

/// A catalog product. Immutable once built; only constructible complete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "ProductCandidate")]
pub struct Product {
    id: ProductId,
    name: String,
    price: Price,
    stock: i32,
    category: Category,
}

impl Product {
    /// Build a product, running the full product rule table.
    pub fn new(
        id: i32,
        name: impl Into<String>,
        price: Decimal,
        stock: i32,
        category: Category,
    ) -> Result<Self, DomainError> {
        Self::try_from(ProductCandidate {
            id,
            name: Some(name.into()),
            price,
            stock,
            category: Some((&category).into()),
        })
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn stock(&self) -> i32 {
        self.stock
    }

    pub fn category(&self) -> &Category {
        &self.category
    }
}

impl TryFrom<ProductCandidate> for Product {
    type Error = DomainError;

    fn try_from(candidate: ProductCandidate) -> Result<Self, Self::Error> {
        candidate
            .validate()
            .into_result()
            .map_err(DomainError::validation)?;

        let (Some(name), Some(category)) = (candidate.name, candidate.category) else {
            return Err(DomainError::invariant(
                "product name or category missing after validation",
            ));
        };

        Ok(Self {
            id: ProductId::new_positive(candidate.id)?,
            name,
            price: Price::new(candidate.price)?,
            stock: candidate.stock,
            category: Category::try_from(category)?,
        })
    }
}
