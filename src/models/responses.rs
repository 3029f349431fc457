use serde::{Deserialize, Serialize};

use crate::core::price::format_price;
use crate::models::domain::{
    DwellingType, ExpresswayProximity, ImageVariant, Property, WaterReliability,
};

/// Water-reliability badge shown on listing cards
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaterBadge {
    pub tier: WaterReliability,
    pub label: String,
    pub description: String,
}

impl From<WaterReliability> for WaterBadge {
    fn from(tier: WaterReliability) -> Self {
        Self {
            tier,
            label: tier.label().to_string(),
            description: tier.description().to_string(),
        }
    }
}

/// A listing as rendered to clients
///
/// Carries the formatted price and image URLs resolved for the requested
/// variant, so callers never touch raw image references.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyView {
    pub id: String,
    pub title: String,
    pub price: u64,
    #[serde(rename = "priceDisplay")]
    pub price_display: String,
    pub location: String,
    pub neighborhood: String,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub sqft: u32,
    #[serde(rename = "type")]
    pub dwelling_type: DwellingType,
    #[serde(rename = "typeLabel")]
    pub type_label: String,
    pub water: WaterBadge,
    #[serde(rename = "expresswayProximity")]
    pub expressway_proximity: ExpresswayProximity,
    #[serde(rename = "expresswayLabel")]
    pub expressway_label: String,
    pub images: Vec<String>,
    pub description: String,
    pub amenities: Vec<String>,
    pub verified: bool,
    #[serde(rename = "createdAt")]
    pub created_at: chrono::NaiveDate,
}

impl PropertyView {
    pub fn from_property(property: &Property, variant: ImageVariant) -> Self {
        Self {
            id: property.id.clone(),
            title: property.title.clone(),
            price: property.price,
            price_display: format_price(property.price),
            location: property.location.clone(),
            neighborhood: property.neighborhood.clone(),
            bedrooms: property.bedrooms,
            bathrooms: property.bathrooms,
            sqft: property.sqft,
            dwelling_type: property.dwelling_type,
            type_label: property.dwelling_type.label().to_string(),
            water: WaterBadge::from(property.water_reliability),
            expressway_proximity: property.expressway_proximity,
            expressway_label: property.expressway_proximity.label().to_string(),
            images: property
                .images
                .iter()
                .map(|image| image.url_for(variant))
                .collect(),
            description: property.description.clone(),
            amenities: property.amenities.clone(),
            verified: property.verified,
            created_at: property.created_at,
        }
    }
}

/// Response for the listings endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingsResponse {
    pub properties: Vec<PropertyView>,
    #[serde(rename = "totalResults")]
    pub total_results: usize,
    #[serde(rename = "activeFilters")]
    pub active_filters: usize,
}

/// Response for the comparison endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompareResponse {
    pub properties: Vec<PropertyView>,
}

/// Response for the neighborhoods endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NeighborhoodsResponse {
    pub neighborhoods: Vec<String>,
    pub count: usize,
}

/// Signed-in user as returned to clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserView {
    pub id: String,
    pub email: String,
    pub name: String,
}

/// Response for signup and login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserView,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
