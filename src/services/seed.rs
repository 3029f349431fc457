use std::collections::HashSet;

use thiserror::Error;

use crate::config::CatalogSettings;
use crate::core::Catalog;
use crate::models::{Property, NAIROBI_NEIGHBORHOODS};

/// Embedded default seed: the launch set of Nairobi listings
const DEFAULT_SEED: &str = include_str!("../../seed/properties.json");

/// Errors that can occur while seeding the catalog
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to read seed file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to parse seed data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid seed data: {0}")]
    Invalid(String),
}

/// Load and validate the property catalog
///
/// Reads the configured seed file when one is set, otherwise falls back to
/// the embedded default. Validation failures are startup errors; the
/// catalog is never partially seeded.
pub fn load_catalog(settings: &CatalogSettings) -> Result<Catalog, SeedError> {
    let raw = match &settings.seed_path {
        Some(path) => {
            tracing::info!("Loading catalog seed from {}", path);
            std::fs::read_to_string(path).map_err(|source| SeedError::Io {
                path: path.clone(),
                source,
            })?
        }
        None => DEFAULT_SEED.to_string(),
    };

    let properties: Vec<Property> = serde_json::from_str(&raw)?;
    validate(&properties)?;

    tracing::info!("Catalog seeded with {} listings", properties.len());

    Ok(Catalog::new(properties))
}

/// Check the catalog invariants the filter relies on
fn validate(properties: &[Property]) -> Result<(), SeedError> {
    let mut ids = HashSet::new();

    for property in properties {
        if !ids.insert(property.id.as_str()) {
            return Err(SeedError::Invalid(format!(
                "duplicate listing id: {}",
                property.id
            )));
        }

        if property.price == 0 {
            return Err(SeedError::Invalid(format!(
                "listing {} has a zero price",
                property.id
            )));
        }

        if property.sqft == 0 {
            return Err(SeedError::Invalid(format!(
                "listing {} has zero floor area",
                property.id
            )));
        }

        if !NAIROBI_NEIGHBORHOODS.contains(&property.neighborhood.as_str()) {
            return Err(SeedError::Invalid(format!(
                "listing {} has unknown neighborhood: {}",
                property.id, property.neighborhood
            )));
        }
    }

    Ok(())
}
