use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{
    DwellingType, ExpresswayProximity, FilterCriteria, ImageVariant, WaterReliability,
};

/// Query parameters accepted by the listings endpoint
///
/// Mirrors the URL scheme of the listings browser: multi-valued facets
/// arrive as comma-separated tokens (`type=apartment,studio`). Parsing is
/// best-effort; unknown tokens are skipped rather than rejected, so an
/// unrecognized value simply places no constraint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListingsQuery {
    #[serde(default)]
    pub neighborhood: Option<String>,
    #[serde(rename = "priceMin", default)]
    pub price_min: Option<u64>,
    #[serde(rename = "priceMax", default)]
    pub price_max: Option<u64>,
    #[serde(default)]
    pub bedrooms: Option<u32>,
    #[serde(rename = "type", default)]
    pub dwelling_types: Option<String>,
    #[serde(default)]
    pub water: Option<String>,
    #[serde(default)]
    pub expressway: Option<String>,
    /// Image variant override, e.g. `variant=data-saver`
    #[serde(default)]
    pub variant: Option<ImageVariant>,
}

impl ListingsQuery {
    /// Convert the raw query into filter criteria
    pub fn into_criteria(self) -> FilterCriteria {
        FilterCriteria {
            neighborhood: self.neighborhood.filter(|n| !n.trim().is_empty()),
            price_min: self.price_min,
            price_max: self.price_max,
            bedrooms: self.bedrooms,
            dwelling_types: parse_tokens(self.dwelling_types.as_deref(), DwellingType::parse),
            water_reliability: parse_tokens(self.water.as_deref(), WaterReliability::parse),
            expressway_proximity: parse_tokens(
                self.expressway.as_deref(),
                ExpresswayProximity::parse,
            ),
        }
    }
}

/// Split a comma-separated parameter, keeping only recognized tokens
fn parse_tokens<T>(raw: Option<&str>, parse: impl Fn(&str) -> Option<T>) -> Vec<T> {
    raw.map(|value| value.split(',').filter_map(|token| parse(token)).collect())
        .unwrap_or_default()
}

/// Query parameters for the comparison endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct CompareQuery {
    /// Comma-separated property ids
    pub ids: String,
    #[serde(default)]
    pub variant: Option<ImageVariant>,
}

impl CompareQuery {
    pub fn ids(&self) -> Vec<String> {
        self.ids
            .split(',')
            .map(|id| id.trim())
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Request to create an account
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8))]
    pub password: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// Request to sign in with existing credentials
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}
