use serde::{Deserialize, Serialize};

/// Nairobi neighborhoods with common rental activity
pub const NAIROBI_NEIGHBORHOODS: &[&str] = &[
    "Kilimani",
    "Westlands",
    "Pangani",
    "Lavington",
    "Karen",
    "Kileleshwa",
    "Runda",
    "Muthaiga",
    "South B",
    "South C",
    "Parklands",
    "Langata",
    "Upperhill",
    "Hurlingham",
    "Ngong Road",
];

/// Dwelling type of a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DwellingType {
    Apartment,
    House,
    Townhouse,
    Studio,
}

impl DwellingType {
    /// Parse a query-string token, returning None for unknown values
    pub fn parse(token: &str) -> Option<Self> {
        match token.trim() {
            "apartment" => Some(Self::Apartment),
            "house" => Some(Self::House),
            "townhouse" => Some(Self::Townhouse),
            "studio" => Some(Self::Studio),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Apartment => "Apartment",
            Self::House => "House",
            Self::Townhouse => "Townhouse",
            Self::Studio => "Studio",
        }
    }
}

/// Water-supply dependability tier
///
/// Water reliability is a first-class search facet in the Nairobi rental
/// market: listings range from properties with their own borehole to
/// properties entirely dependent on the city rationing schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WaterReliability {
    Essential,
    Reliable,
    Variable,
}

impl WaterReliability {
    pub fn parse(token: &str) -> Option<Self> {
        match token.trim() {
            "essential" => Some(Self::Essential),
            "reliable" => Some(Self::Reliable),
            "variable" => Some(Self::Variable),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Essential => "Essential Supply",
            Self::Reliable => "Reliable",
            Self::Variable => "Variable",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Essential => {
                "This property has its own borehole or water tank. Reliable 24/7 supply guaranteed."
            }
            Self::Reliable => {
                "Connected to main water supply with backup storage. Occasional rationing may occur."
            }
            Self::Variable => {
                "Dependent on city supply. Water may be unavailable during shortage periods."
            }
        }
    }
}

/// Distance tier to the Nairobi Expressway
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpresswayProximity {
    Near,
    Moderate,
    Far,
}

impl ExpresswayProximity {
    pub fn parse(token: &str) -> Option<Self> {
        match token.trim() {
            "near" => Some(Self::Near),
            "moderate" => Some(Self::Moderate),
            "far" => Some(Self::Far),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Near => "Near Expressway (< 2km)",
            Self::Moderate => "Moderate (2-5km)",
            Self::Far => "Far from Expressway (> 5km)",
        }
    }
}

/// Image rendering variant
///
/// Listing photos are stored as base URLs without size parameters; the
/// variant decides the width and quality the CDN is asked for. DataSaver
/// exists for bandwidth-constrained clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImageVariant {
    Full,
    DataSaver,
}

impl ImageVariant {
    /// Variant implied by the low-data-mode setting
    pub fn for_low_data(low_data_mode: bool) -> Self {
        if low_data_mode {
            Self::DataSaver
        } else {
            Self::Full
        }
    }

    pub fn width(&self) -> u32 {
        match self {
            Self::Full => 800,
            Self::DataSaver => 400,
        }
    }

    pub fn quality(&self) -> u8 {
        match self {
            Self::Full => 75,
            Self::DataSaver => 30,
        }
    }
}

/// Reference to a listing photo, without embedded size parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageRef {
    pub base: String,
}

impl ImageRef {
    /// Build the concrete URL for a rendering variant
    pub fn url_for(&self, variant: ImageVariant) -> String {
        format!("{}?w={}&q={}", self.base, variant.width(), variant.quality())
    }
}

/// A rental listing
///
/// The catalog is read-only at runtime: listings are seeded once at startup
/// and never created, mutated, or destroyed afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Property {
    pub id: String,
    pub title: String,
    /// Monthly rent in KES
    pub price: u64,
    pub location: String,
    pub neighborhood: String,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub sqft: u32,
    #[serde(rename = "type")]
    pub dwelling_type: DwellingType,
    #[serde(rename = "waterReliability")]
    pub water_reliability: WaterReliability,
    #[serde(rename = "expresswayProximity")]
    pub expressway_proximity: ExpresswayProximity,
    #[serde(default)]
    pub images: Vec<ImageRef>,
    pub description: String,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub verified: bool,
    #[serde(rename = "createdAt")]
    pub created_at: chrono::NaiveDate,
}

/// Filter constraints for the listings browser
///
/// Every field is independently omittable; an omitted field (or an empty
/// set) places no restriction on that attribute. Constraints combine with
/// logical AND; a multi-valued set matches when the property's value is in
/// the set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterCriteria {
    #[serde(default)]
    pub neighborhood: Option<String>,
    #[serde(rename = "priceMin", default)]
    pub price_min: Option<u64>,
    #[serde(rename = "priceMax", default)]
    pub price_max: Option<u64>,
    /// Minimum bedroom count
    #[serde(default)]
    pub bedrooms: Option<u32>,
    #[serde(rename = "type", default)]
    pub dwelling_types: Vec<DwellingType>,
    #[serde(rename = "waterReliability", default)]
    pub water_reliability: Vec<WaterReliability>,
    #[serde(rename = "expresswayProximity", default)]
    pub expressway_proximity: Vec<ExpresswayProximity>,
}

impl FilterCriteria {
    /// Number of supplied constraints, for the "N filters active" display
    pub fn active_count(&self) -> usize {
        let mut count = 0;
        if self.neighborhood.is_some() {
            count += 1;
        }
        if self.price_min.is_some() {
            count += 1;
        }
        if self.price_max.is_some() {
            count += 1;
        }
        if self.bedrooms.is_some() {
            count += 1;
        }
        if !self.dwelling_types.is_empty() {
            count += 1;
        }
        if !self.water_reliability.is_empty() {
            count += 1;
        }
        if !self.expressway_proximity.is_empty() {
            count += 1;
        }
        count
    }

    /// True when no constraint is supplied at all
    pub fn is_unconstrained(&self) -> bool {
        self.active_count() == 0
    }
}
