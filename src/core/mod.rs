// Core exports
pub mod catalog;
pub mod filters;
pub mod price;

pub use catalog::{Catalog, MAX_COMPARE};
pub use filters::{filter_properties, matches_criteria};
pub use price::format_price;
