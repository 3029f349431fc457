// Unit tests for the Nyumbani listings service

use nyumbani::config::CatalogSettings;
use nyumbani::core::{filter_properties, format_price, Catalog};
use nyumbani::models::{DwellingType, FilterCriteria, WaterReliability};
use nyumbani::services::load_catalog;

fn seeded_catalog() -> Catalog {
    load_catalog(&CatalogSettings { seed_path: None }).expect("embedded seed loads")
}

fn ids(properties: &[nyumbani::models::Property]) -> Vec<&str> {
    properties.iter().map(|p| p.id.as_str()).collect()
}

#[test]
fn test_empty_criteria_is_identity() {
    let catalog = seeded_catalog();

    let result = catalog.filter(&FilterCriteria::default());

    assert_eq!(result.len(), catalog.len());
    assert_eq!(ids(&result), ids(catalog.all()));
}

#[test]
fn test_neighborhood_filter_kilimani() {
    let catalog = seeded_catalog();

    let criteria = FilterCriteria {
        neighborhood: Some("Kilimani".to_string()),
        ..Default::default()
    };

    assert_eq!(ids(&catalog.filter(&criteria)), vec!["2"]);
}

#[test]
fn test_price_floor_filter() {
    let catalog = seeded_catalog();

    let criteria = FilterCriteria {
        price_min: Some(100_000),
        ..Default::default()
    };

    // Prices 250,000 (Karen house), 120,000 (Kileleshwa townhouse) and
    // 350,000 (Upperhill penthouse) clear the floor.
    assert_eq!(ids(&catalog.filter(&criteria)), vec!["3", "5", "7"]);
}

#[test]
fn test_studio_type_filter() {
    let catalog = seeded_catalog();

    let criteria = FilterCriteria {
        dwelling_types: vec![DwellingType::Studio],
        ..Default::default()
    };

    assert_eq!(ids(&catalog.filter(&criteria)), vec!["4"]);
}

#[test]
fn test_water_and_bedrooms_combined() {
    let catalog = seeded_catalog();

    let criteria = FilterCriteria {
        water_reliability: vec![WaterReliability::Essential],
        bedrooms: Some(3),
        ..Default::default()
    };

    // Essential-supply listings are 1, 3 and 7; all have at least 3 bedrooms.
    assert_eq!(ids(&catalog.filter(&criteria)), vec!["1", "3", "7"]);
}

#[test]
fn test_unsatisfiable_price_range_returns_empty() {
    let catalog = seeded_catalog();

    let criteria = FilterCriteria {
        price_min: Some(1_000_000),
        ..Default::default()
    };

    assert!(catalog.filter(&criteria).is_empty());
}

#[test]
fn test_filter_result_is_an_ordered_subsequence() {
    let catalog = seeded_catalog();

    let criteria = FilterCriteria {
        bedrooms: Some(2),
        ..Default::default()
    };

    let result = catalog.filter(&criteria);
    let all_ids = ids(catalog.all());

    // Every result id appears in the catalog, in the same relative order,
    // with no duplicates.
    let mut cursor = 0;
    for property in &result {
        let position = all_ids[cursor..]
            .iter()
            .position(|id| *id == property.id)
            .expect("result id present in remaining catalog order");
        cursor += position + 1;
    }
}

#[test]
fn test_filter_is_idempotent() {
    let catalog = seeded_catalog();

    let criteria = FilterCriteria {
        water_reliability: vec![WaterReliability::Reliable],
        price_max: Some(120_000),
        ..Default::default()
    };

    let once = catalog.filter(&criteria);
    let twice = filter_properties(&once, &criteria);

    assert_eq!(ids(&once), ids(&twice));
}

#[test]
fn test_adding_constraints_is_monotonic() {
    let catalog = seeded_catalog();

    let mut criteria = FilterCriteria::default();
    let mut previous = catalog.filter(&criteria).len();

    criteria.dwelling_types = vec![DwellingType::Apartment];
    let narrowed = catalog.filter(&criteria).len();
    assert!(narrowed <= previous);
    previous = narrowed;

    criteria.price_max = Some(85_000);
    let narrowed = catalog.filter(&criteria).len();
    assert!(narrowed <= previous);
    previous = narrowed;

    criteria.bedrooms = Some(2);
    let narrowed = catalog.filter(&criteria).len();
    assert!(narrowed <= previous);
}

#[test]
fn test_neighborhoods_derivation() {
    let catalog = seeded_catalog();

    let neighborhoods = catalog.neighborhoods();

    // Each seeded listing sits in a different neighborhood.
    assert_eq!(neighborhoods.len(), 8);
    assert_eq!(neighborhoods[0], "Lavington");
    assert!(neighborhoods.contains(&"Upperhill".to_string()));
}

#[test]
fn test_lookup_by_id() {
    let catalog = seeded_catalog();

    let property = catalog.get("4").expect("listing 4 exists");
    assert_eq!(property.dwelling_type, DwellingType::Studio);
    assert_eq!(property.neighborhood, "Westlands");

    assert!(catalog.get("99").is_none());
}

#[test]
fn test_price_formatting() {
    assert_eq!(format_price(25_000), "KES 25,000");
    assert_eq!(format_price(85_000), "KES 85,000");
    assert_eq!(format_price(350_000), "KES 350,000");
}
