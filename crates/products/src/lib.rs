//! Product catalog records.
//!
//! The `Product` record exactly as the backend stores it, plus display helpers
//! (price grouping). Pure data; no IO.

pub mod price;
pub mod product;

pub use price::{DigitGrouping, PriceFormat, group_digits};
pub use product::{ALL_CATEGORIES, Product, ProductFields, matches_category};
