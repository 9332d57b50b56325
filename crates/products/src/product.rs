use serde::{Deserialize, Serialize};

use crate::pricing::{cost_for, discount_for};

/// Category-specific attribute of a product.
///
/// Informational only: every category is priced by the same rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductCategory {
    Book { page_count: u32 },
    Electronics { memory_size: String },
    Clothing { size: String },
}

impl ProductCategory {
    pub fn label(&self) -> &'static str {
        match self {
            ProductCategory::Book { .. } => "book",
            ProductCategory::Electronics { .. } => "electronics",
            ProductCategory::Clothing { .. } => "clothing",
        }
    }
}

/// A catalog item with a list price.
///
/// Price is not validated; negative values flow through pricing unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub price: f64,
    pub category: ProductCategory,
}

impl Product {
    pub fn new(name: impl Into<String>, price: f64, category: ProductCategory) -> Self {
        Self {
            name: name.into(),
            price,
            category,
        }
    }

    pub fn book(name: impl Into<String>, price: f64, page_count: u32) -> Self {
        Self::new(name, price, ProductCategory::Book { page_count })
    }

    pub fn electronics(name: impl Into<String>, price: f64, memory_size: impl Into<String>) -> Self {
        Self::new(
            name,
            price,
            ProductCategory::Electronics {
                memory_size: memory_size.into(),
            },
        )
    }

    pub fn clothing(name: impl Into<String>, price: f64, size: impl Into<String>) -> Self {
        Self::new(name, price, ProductCategory::Clothing { size: size.into() })
    }

    pub fn category_label(&self) -> &'static str {
        self.category.label()
    }

    /// Discount granted on this product's price.
    pub fn compute_discount(&self) -> f64 {
        discount_for(self.price)
    }

    /// Price after discount.
    pub fn compute_cost(&self) -> f64 {
        cost_for(self.price)
    }
}
