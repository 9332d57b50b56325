//! Products domain module.
//!
//! Catalog items and the pricing rule shared by every category. Pure domain
//! logic (no IO, no storage).

pub mod pricing;
pub mod product;

pub use pricing::{DISCOUNT_RATE, cost_for, discount_for};
pub use product::{Product, ProductCategory};
