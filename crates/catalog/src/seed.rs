//! The fixed, read-only catalog served by the list endpoint.

use std::sync::Arc;

use rust_decimal::Decimal;

use shopfront_core::DomainResult;

use crate::category::Category;
use crate::product::Product;

/// Ordered product list, shared read-only between request handlers.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Arc<[Product]>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products: products.into(),
        }
    }

    /// The products the service starts with.
    pub fn seed() -> DomainResult<Self> {
        let electronics = Category::new(1, "Electronics")?;
        let furniture = Category::new(2, "Furniture")?;
        let kitchen = Category::new(3, "Kitchen")?;

        Ok(Self::new(vec![
            Product::new(1, "Laptop", Decimal::new(129999, 2), 25, electronics.clone())?,
            Product::new(2, "Wireless Mouse", Decimal::new(2499, 2), 150, electronics)?,
            Product::new(3, "Office Chair", Decimal::new(18950, 2), 40, furniture.clone())?,
            Product::new(4, "Standing Desk", Decimal::new(49900, 2), 12, furniture)?,
            Product::new(5, "Coffee Mug", Decimal::new(875, 2), 300, kitchen)?,
        ]))
    }

    /// Every product, in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
