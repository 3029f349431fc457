use crate::core::filters::filter_properties;
use crate::models::{FilterCriteria, Property};

/// Maximum number of listings in a side-by-side comparison
pub const MAX_COMPARE: usize = 3;

/// Read-only collection of listings
///
/// Seeded once at startup and shared immutably across requests; every
/// operation is a pure read, so concurrent access needs no coordination.
#[derive(Debug, Clone)]
pub struct Catalog {
    properties: Vec<Property>,
}

impl Catalog {
    pub fn new(properties: Vec<Property>) -> Self {
        Self { properties }
    }

    /// All listings, in seed order
    pub fn all(&self) -> &[Property] {
        &self.properties
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// The ordered subset of listings satisfying the criteria
    pub fn filter(&self, criteria: &FilterCriteria) -> Vec<Property> {
        filter_properties(&self.properties, criteria)
    }

    /// Look up a single listing by id
    pub fn get(&self, id: &str) -> Option<&Property> {
        self.properties.iter().find(|property| property.id == id)
    }

    /// Distinct neighborhoods present in the catalog, in first-appearance order
    pub fn neighborhoods(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for property in &self.properties {
            if !seen.contains(&property.neighborhood) {
                seen.push(property.neighborhood.clone());
            }
        }
        seen
    }

    /// Listings selected for side-by-side comparison
    ///
    /// Takes up to MAX_COMPARE distinct ids; unknown ids are ignored and the
    /// result keeps catalog order regardless of the order ids were supplied.
    pub fn compare_selection(&self, ids: &[String]) -> Vec<Property> {
        let mut selected: Vec<&str> = Vec::new();
        for id in ids {
            if selected.len() == MAX_COMPARE {
                break;
            }
            if self.get(id).is_some() && !selected.contains(&id.as_str()) {
                selected.push(id);
            }
        }

        self.properties
            .iter()
            .filter(|property| selected.contains(&property.id.as_str()))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DwellingType, ExpresswayProximity, WaterReliability};

    fn create_test_property(id: &str, neighborhood: &str, price: u64) -> Property {
        Property {
            id: id.to_string(),
            title: format!("Listing {}", id),
            price,
            location: neighborhood.to_string(),
            neighborhood: neighborhood.to_string(),
            bedrooms: 2,
            bathrooms: 1,
            sqft: 1000,
            dwelling_type: DwellingType::Apartment,
            water_reliability: WaterReliability::Reliable,
            expressway_proximity: ExpresswayProximity::Near,
            images: vec![],
            description: String::new(),
            amenities: vec![],
            verified: true,
            created_at: chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        }
    }

    fn create_test_catalog() -> Catalog {
        Catalog::new(vec![
            create_test_property("1", "Kilimani", 65_000),
            create_test_property("2", "Karen", 250_000),
            create_test_property("3", "Kilimani", 90_000),
            create_test_property("4", "Westlands", 35_000),
        ])
    }

    #[test]
    fn test_get_by_id() {
        let catalog = create_test_catalog();

        assert_eq!(catalog.get("2").map(|p| p.neighborhood.as_str()), Some("Karen"));
        assert!(catalog.get("99").is_none());
    }

    #[test]
    fn test_neighborhoods_are_distinct_and_ordered() {
        let catalog = create_test_catalog();

        assert_eq!(
            catalog.neighborhoods(),
            vec!["Kilimani", "Karen", "Westlands"]
        );
    }

    #[test]
    fn test_filter_returns_ordered_subset() {
        let catalog = create_test_catalog();

        let criteria = FilterCriteria {
            neighborhood: Some("Kilimani".to_string()),
            ..Default::default()
        };

        let ids: Vec<String> = catalog
            .filter(&criteria)
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn test_compare_selection_caps_and_orders() {
        let catalog = create_test_catalog();

        let ids = vec![
            "4".to_string(),
            "1".to_string(),
            "1".to_string(), // duplicate
            "99".to_string(), // unknown
            "3".to_string(),
            "2".to_string(), // over the cap
        ];

        let selected: Vec<String> = catalog
            .compare_selection(&ids)
            .into_iter()
            .map(|p| p.id)
            .collect();

        // Catalog order, deduplicated, capped at MAX_COMPARE.
        assert_eq!(selected, vec!["1", "3", "4"]);
    }
}
