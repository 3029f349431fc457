//! Nyumbani - Listings and search service for the Nyumbani rental platform
//!
//! This library provides the property catalog and faceted filter behind the
//! Nyumbani listings browser, plus the credentials-based authentication
//! collaborator used by the sign-in flow.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{filter_properties, format_price, matches_criteria, Catalog, MAX_COMPARE};
pub use crate::models::{
    DwellingType, ExpresswayProximity, FilterCriteria, ImageVariant, Property, WaterReliability,
};
