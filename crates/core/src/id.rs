//! Strongly-typed identifiers used across the domain.
//!
//! Catalog ids are plain 32-bit integers on the wire. The newtypes keep a
//! `CategoryId` from being passed where a `ProductId` is expected, and can
//! only be built from a positive value.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a product.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(i32);

/// Identifier of a category.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(i32);

macro_rules! impl_int_newtype {
    ($t:ty, $name:literal) => {
        impl $t {
            /// Wrap a raw value, rejecting anything below 1.
            pub fn new_positive(value: i32) -> Result<Self, DomainError> {
                if value >= 1 {
                    Ok(Self(value))
                } else {
                    Err(DomainError::invalid_id(format!(
                        "{}: {} is not a positive number",
                        $name, value
                    )))
                }
            }

            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<$t> for i32 {
            fn from(value: $t) -> Self {
                value.0
            }
        }
    };
}

impl_int_newtype!(ProductId, "ProductId");
impl_int_newtype!(CategoryId, "CategoryId");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_positive_ids() {
        let id = ProductId::new_positive(42).unwrap();
        assert_eq!(id.get(), 42);
        assert_eq!(id.to_string(), "42");
        assert_eq!(i32::from(CategoryId::new_positive(1).unwrap()), 1);
    }

    #[test]
    fn rejects_zero_and_negative_ids() {
        assert_eq!(
            ProductId::new_positive(0),
            Err(DomainError::invalid_id("ProductId: 0 is not a positive number"))
        );
        assert!(matches!(CategoryId::new_positive(-3), Err(DomainError::InvalidId(_))));
    }
}
