//! Free-text and facet search over the catalog

use tracing::debug;

use crate::model::{SearchFilters, Vehicle};

/// Case-insensitive substring match against brand, model, color and year.
///
/// `needle` must already be lowercase.
fn matches_text(vehicle: &Vehicle, needle: &str) -> bool {
    vehicle.brand.to_lowercase().contains(needle)
        || vehicle.model.to_lowercase().contains(needle)
        || vehicle.color.to_lowercase().contains(needle)
        || vehicle.year.to_string().contains(needle)
}

/// Vehicles matching the text query AND every set facet, in catalog order.
///
/// Only the empty query matches every vehicle. Whitespace is part of the
/// query, so `"bmw "` does not match a brand of `"BMW"`.
pub fn search<'a>(vehicles: &'a [Vehicle], query: &str, filters: &SearchFilters) -> Vec<&'a Vehicle> {
    let needle = query.to_lowercase();

    let results: Vec<&Vehicle> = vehicles
        .iter()
        .filter(|v| needle.is_empty() || matches_text(v, &needle))
        .filter(|v| filters.matches(v))
        .collect();

    debug!(
        query = %needle,
        filters = ?filters,
        matched = results.len(),
        total = vehicles.len(),
        "catalog search"
    );
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{ioniq, showroom, vehicle, x5};
    use crate::model::PriceRange;

    fn ids(results: &[&Vehicle]) -> Vec<String> {
        results.iter().map(|v| v.id.clone()).collect()
    }

    #[test]
    fn test_empty_query_no_filters_returns_everything_in_order() {
        let vehicles = showroom();
        let results = search(&vehicles, "", &SearchFilters::default());
        let expected: Vec<String> = vehicles.iter().map(|v| v.id.clone()).collect();
        assert_eq!(ids(&results), expected);
    }

    #[test]
    fn test_scenario_two_vehicles() {
        let vehicles = vec![ioniq(), x5()];
        let all = SearchFilters::default();

        assert_eq!(ids(&search(&vehicles, "ioniq", &all)), vec!["hyundai-ioniq-6se"]);

        let electric = SearchFilters::new().with_fuel_type("electric").unwrap();
        assert_eq!(ids(&search(&vehicles, "", &electric)), vec!["hyundai-ioniq-6se"]);

        let mid = SearchFilters::new().with_price_range("60000-80000".parse().unwrap());
        assert_eq!(ids(&search(&vehicles, "", &mid)), vec!["bmw-x5-m50i"]);

        let sedan = SearchFilters::new().with_category("sedan").unwrap();
        assert!(search(&vehicles, "bmw", &sedan).is_empty());
    }

    #[test]
    fn test_text_matches_each_field() {
        let vehicles = showroom();
        let all = SearchFilters::default();
        assert_eq!(ids(&search(&vehicles, "VOLKS", &all)), vec!["volkswagen-touareg-tdi"]);
        assert_eq!(ids(&search(&vehicles, "elr", &all)), vec!["cadillac-elr-base"]);
        assert_eq!(ids(&search(&vehicles, "obsidian", &all)), vec!["mercedes-gle-450"]);
        assert_eq!(ids(&search(&vehicles, "2016", &all)), vec!["cadillac-elr-base"]);
        // partial year
        assert_eq!(
            ids(&search(&vehicles, "202", &all)).len(),
            vehicles.iter().filter(|v| v.year >= 2020).count()
        );
    }

    #[test]
    fn test_query_whitespace_is_significant() {
        let all = SearchFilters::default();
        let coupe = vehicle(
            "cadillac-elr", "Cadillac", "ELR", 2016, 38000, "coupe", "hybrid", "Used", "White",
        );
        let vehicles = vec![ioniq(), x5(), coupe];

        assert!(search(&vehicles, "bmw ", &all).is_empty());
        assert_eq!(ids(&search(&vehicles, " m50i", &all)), vec!["bmw-x5-m50i"]);
        // a lone space is a substring, not an empty query
        assert_eq!(
            ids(&search(&vehicles, " ", &all)),
            vec!["hyundai-ioniq-6se", "bmw-x5-m50i"]
        );
        assert!(search(&vehicles, "   ", &all).is_empty());
    }

    #[test]
    fn test_facets_are_case_insensitive_on_both_sides() {
        let vehicles = showroom();
        let suv = SearchFilters::new().with_category("Suv").unwrap();
        assert_eq!(
            ids(&search(&vehicles, "", &suv)),
            vec!["volkswagen-touareg-tdi", "bmw-x5-m50i", "mercedes-gle-450"]
        );
        let used = SearchFilters::new().with_status("USED").unwrap();
        assert_eq!(search(&vehicles, "", &used).len(), 3);
    }

    #[test]
    fn test_price_boundaries() {
        let vehicles = showroom();
        let mid = SearchFilters::new().with_price_range(PriceRange::closed(60000, 80000).unwrap());
        // 60000 and 80000 in, 59999 and 80001 out
        assert_eq!(
            ids(&search(&vehicles, "", &mid)),
            vec!["volkswagen-touareg-tdi", "cadillac-elr-base", "bmw-x5-m50i"]
        );
    }

    #[test]
    fn test_facet_order_does_not_matter() {
        let vehicles = showroom();
        let a = SearchFilters::new()
            .with_category("suv")
            .unwrap()
            .with_fuel_type("hybrid")
            .unwrap();
        let b = SearchFilters::new()
            .with_fuel_type("hybrid")
            .unwrap()
            .with_category("suv")
            .unwrap();
        assert_eq!(ids(&search(&vehicles, "", &a)), ids(&search(&vehicles, "", &b)));
        assert_eq!(ids(&search(&vehicles, "", &a)), vec!["mercedes-gle-450"]);
    }

    #[test]
    fn test_results_are_ordered_subsequence() {
        let vehicles = showroom();
        let filters = SearchFilters::new().with_status("new").unwrap();
        let results = search(&vehicles, "", &filters);
        let positions: Vec<usize> = results
            .iter()
            .map(|r| vehicles.iter().position(|v| v.id == r.id).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        let vehicles = showroom();
        assert!(search(&vehicles, "lamborghini", &SearchFilters::default()).is_empty());
        assert!(search(&[], "", &SearchFilters::default()).is_empty());
    }
}
