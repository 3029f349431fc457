use crate::models::{FilterCriteria, Property};

/// Check if a listing satisfies every supplied constraint
///
/// Constraints combine with logical AND; a multi-valued facet matches when
/// the property's value is in the set, and an empty set imposes no
/// restriction. Evaluation short-circuits on the first failing constraint.
#[inline]
pub fn matches_criteria(property: &Property, criteria: &FilterCriteria) -> bool {
    if let Some(neighborhood) = &criteria.neighborhood {
        if property.neighborhood != *neighborhood {
            return false;
        }
    }

    if let Some(price_min) = criteria.price_min {
        if property.price < price_min {
            return false;
        }
    }

    if let Some(price_max) = criteria.price_max {
        if property.price > price_max {
            return false;
        }
    }

    if let Some(bedrooms) = criteria.bedrooms {
        if property.bedrooms < bedrooms {
            return false;
        }
    }

    if !criteria.dwelling_types.is_empty()
        && !criteria.dwelling_types.contains(&property.dwelling_type)
    {
        return false;
    }

    if !criteria.water_reliability.is_empty()
        && !criteria.water_reliability.contains(&property.water_reliability)
    {
        return false;
    }

    if !criteria.expressway_proximity.is_empty()
        && !criteria
            .expressway_proximity
            .contains(&property.expressway_proximity)
    {
        return false;
    }

    true
}

/// Apply filter criteria to a collection of listings
///
/// Returns the ordered sub-sequence of listings satisfying every supplied
/// constraint. The operation is pure: input order is preserved, the input
/// is not mutated, and the same criteria always produce the same result.
/// Unsatisfiable bounds yield an empty result rather than an error.
pub fn filter_properties(properties: &[Property], criteria: &FilterCriteria) -> Vec<Property> {
    properties
        .iter()
        .filter(|property| matches_criteria(property, criteria))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DwellingType, ExpresswayProximity, WaterReliability};

    fn create_test_property(
        id: &str,
        neighborhood: &str,
        price: u64,
        bedrooms: u32,
        dwelling_type: DwellingType,
        water: WaterReliability,
    ) -> Property {
        Property {
            id: id.to_string(),
            title: format!("Listing {}", id),
            price,
            location: format!("Somewhere, {}", neighborhood),
            neighborhood: neighborhood.to_string(),
            bedrooms,
            bathrooms: 1,
            sqft: 1000,
            dwelling_type,
            water_reliability: water,
            expressway_proximity: ExpresswayProximity::Moderate,
            images: vec![],
            description: String::new(),
            amenities: vec![],
            verified: true,
            created_at: chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        }
    }

    #[test]
    fn test_empty_criteria_matches_everything() {
        let property = create_test_property(
            "1",
            "Kilimani",
            65_000,
            2,
            DwellingType::Apartment,
            WaterReliability::Reliable,
        );

        assert!(matches_criteria(&property, &FilterCriteria::default()));
    }

    #[test]
    fn test_neighborhood_equality() {
        let property = create_test_property(
            "1",
            "Kilimani",
            65_000,
            2,
            DwellingType::Apartment,
            WaterReliability::Reliable,
        );

        let criteria = FilterCriteria {
            neighborhood: Some("Kilimani".to_string()),
            ..Default::default()
        };
        assert!(matches_criteria(&property, &criteria));

        let criteria = FilterCriteria {
            neighborhood: Some("Karen".to_string()),
            ..Default::default()
        };
        assert!(!matches_criteria(&property, &criteria));
    }

    #[test]
    fn test_price_bounds_are_inclusive() {
        let property = create_test_property(
            "1",
            "Kilimani",
            65_000,
            2,
            DwellingType::Apartment,
            WaterReliability::Reliable,
        );

        let criteria = FilterCriteria {
            price_min: Some(65_000),
            price_max: Some(65_000),
            ..Default::default()
        };
        assert!(matches_criteria(&property, &criteria));

        let criteria = FilterCriteria {
            price_min: Some(65_001),
            ..Default::default()
        };
        assert!(!matches_criteria(&property, &criteria));

        let criteria = FilterCriteria {
            price_max: Some(64_999),
            ..Default::default()
        };
        assert!(!matches_criteria(&property, &criteria));
    }

    #[test]
    fn test_bedrooms_is_a_minimum() {
        let property = create_test_property(
            "1",
            "Karen",
            250_000,
            4,
            DwellingType::House,
            WaterReliability::Essential,
        );

        let criteria = FilterCriteria {
            bedrooms: Some(3),
            ..Default::default()
        };
        assert!(matches_criteria(&property, &criteria));

        let criteria = FilterCriteria {
            bedrooms: Some(5),
            ..Default::default()
        };
        assert!(!matches_criteria(&property, &criteria));
    }

    #[test]
    fn test_set_facets_match_any_member() {
        let property = create_test_property(
            "1",
            "Westlands",
            35_000,
            1,
            DwellingType::Studio,
            WaterReliability::Variable,
        );

        let criteria = FilterCriteria {
            dwelling_types: vec![DwellingType::Apartment, DwellingType::Studio],
            ..Default::default()
        };
        assert!(matches_criteria(&property, &criteria));

        let criteria = FilterCriteria {
            dwelling_types: vec![DwellingType::House],
            ..Default::default()
        };
        assert!(!matches_criteria(&property, &criteria));

        // An empty set is "no selection", not "nothing allowed".
        let criteria = FilterCriteria {
            dwelling_types: vec![],
            water_reliability: vec![],
            ..Default::default()
        };
        assert!(matches_criteria(&property, &criteria));
    }

    #[test]
    fn test_filter_preserves_order_and_purity() {
        let properties = vec![
            create_test_property(
                "1",
                "Kilimani",
                65_000,
                2,
                DwellingType::Apartment,
                WaterReliability::Reliable,
            ),
            create_test_property(
                "2",
                "Karen",
                250_000,
                4,
                DwellingType::House,
                WaterReliability::Essential,
            ),
            create_test_property(
                "3",
                "Kilimani",
                90_000,
                3,
                DwellingType::Apartment,
                WaterReliability::Essential,
            ),
        ];

        let criteria = FilterCriteria {
            neighborhood: Some("Kilimani".to_string()),
            ..Default::default()
        };

        let result = filter_properties(&properties, &criteria);
        let ids: Vec<&str> = result.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);

        // Input untouched, re-running yields the same result.
        assert_eq!(properties.len(), 3);
        let again = filter_properties(&properties, &criteria);
        assert_eq!(again.len(), result.len());
    }

    #[test]
    fn test_unsatisfiable_bounds_return_empty() {
        let properties = vec![create_test_property(
            "1",
            "Kilimani",
            65_000,
            2,
            DwellingType::Apartment,
            WaterReliability::Reliable,
        )];

        let criteria = FilterCriteria {
            price_min: Some(1_000_000),
            ..Default::default()
        };

        assert!(filter_properties(&properties, &criteria).is_empty());
    }
}
