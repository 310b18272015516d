//! Search filter configuration
//!
//! Every facet is optional: `None` imposes no constraint. Values are
//! validated and normalized when the filters are built, so matching at
//! query time cannot fail.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use showroom_types::FilterError;

use super::Vehicle;

/// Price constraint in whole dollars, bounds inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PriceRange {
    Closed { min: u64, max: u64 },
    AtLeast { min: u64 },
}

impl PriceRange {
    pub fn closed(min: u64, max: u64) -> Result<Self, FilterError> {
        if min > max {
            return Err(FilterError::InvertedPriceRange { min, max });
        }
        Ok(PriceRange::Closed { min, max })
    }

    pub fn at_least(min: u64) -> Self {
        PriceRange::AtLeast { min }
    }

    pub fn contains(&self, price: u64) -> bool {
        match *self {
            PriceRange::Closed { min, max } => price >= min && price <= max,
            PriceRange::AtLeast { min } => price >= min,
        }
    }

    /// Price buckets offered by the listing filter panel
    pub fn presets() -> Vec<PricePreset> {
        vec![
            PricePreset {
                label: "Under $60,000",
                range: PriceRange::Closed { min: 0, max: 60_000 },
            },
            PricePreset {
                label: "$60,000 - $80,000",
                range: PriceRange::Closed {
                    min: 60_000,
                    max: 80_000,
                },
            },
            PricePreset {
                label: "$80,000 - $100,000",
                range: PriceRange::Closed {
                    min: 80_000,
                    max: 100_000,
                },
            },
            PricePreset {
                label: "$100,000+",
                range: PriceRange::AtLeast { min: 100_000 },
            },
        ]
    }
}

/// Parses the composite key form: "60000-80000" or "100000".
///
/// A missing or zero upper bound means no upper bound.
impl FromStr for PriceRange {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let parse_bound = |part: &str| -> Result<u64, FilterError> {
            part.trim()
                .parse::<u64>()
                .map_err(|_| FilterError::InvalidPriceRange(s.to_string()))
        };

        match s.split_once('-') {
            Some((min, max)) => {
                let min = parse_bound(min)?;
                if max.trim().is_empty() {
                    return Ok(PriceRange::at_least(min));
                }
                match parse_bound(max)? {
                    0 => Ok(PriceRange::at_least(min)),
                    max => PriceRange::closed(min, max),
                }
            }
            None => Ok(PriceRange::at_least(parse_bound(s)?)),
        }
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriceRange::Closed { min, max } => write!(f, "{}-{}", min, max),
            PriceRange::AtLeast { min } => write!(f, "{}", min),
        }
    }
}

/// Named price bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PricePreset {
    pub label: &'static str,
    pub range: PriceRange,
}

/// Facet constraints for a catalog search.
///
/// Build with the `with_*` methods; the default value matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchFilters {
    category: Option<String>,
    fuel_type: Option<String>,
    status: Option<String>,
    price_range: Option<PriceRange>,
}

fn normalize_facet(name: &'static str, value: &str) -> Result<String, FilterError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FilterError::EmptyFacet(name));
    }
    Ok(value.to_lowercase())
}

fn facet_matches(filter: &Option<String>, value: &str) -> bool {
    match filter {
        Some(expected) => value.trim().to_lowercase() == *expected,
        None => true,
    }
}

impl SearchFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: &str) -> Result<Self, FilterError> {
        self.category = Some(normalize_facet("category", category)?);
        Ok(self)
    }

    pub fn with_fuel_type(mut self, fuel_type: &str) -> Result<Self, FilterError> {
        self.fuel_type = Some(normalize_facet("fuel type", fuel_type)?);
        Ok(self)
    }

    pub fn with_status(mut self, status: &str) -> Result<Self, FilterError> {
        self.status = Some(normalize_facet("status", status)?);
        Ok(self)
    }

    pub fn with_price_range(mut self, range: PriceRange) -> Self {
        self.price_range = Some(range);
        self
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn fuel_type(&self) -> Option<&str> {
        self.fuel_type.as_deref()
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn price_range(&self) -> Option<PriceRange> {
        self.price_range
    }

    /// True when no facet is set
    pub fn is_unconstrained(&self) -> bool {
        self.category.is_none()
            && self.fuel_type.is_none()
            && self.status.is_none()
            && self.price_range.is_none()
    }

    /// Check every set facet against the vehicle
    pub fn matches(&self, vehicle: &Vehicle) -> bool {
        facet_matches(&self.category, &vehicle.category)
            && facet_matches(&self.fuel_type, &vehicle.fuel_type)
            && facet_matches(&self.status, &vehicle.status)
            && self
                .price_range
                .map(|range| range.contains(vehicle.price))
                .unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_closed_range() {
        let range: PriceRange = "60000-80000".parse().unwrap();
        assert_eq!(range, PriceRange::Closed { min: 60000, max: 80000 });
        assert_eq!(range.to_string(), "60000-80000");
    }

    #[test]
    fn test_parse_open_range() {
        assert_eq!(
            "100000".parse::<PriceRange>().unwrap(),
            PriceRange::AtLeast { min: 100000 }
        );
        assert_eq!(
            "100000-".parse::<PriceRange>().unwrap(),
            PriceRange::AtLeast { min: 100000 }
        );
        assert_eq!(
            "100000-0".parse::<PriceRange>().unwrap(),
            PriceRange::AtLeast { min: 100000 }
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(
            "cheap".parse::<PriceRange>(),
            Err(FilterError::InvalidPriceRange("cheap".to_string()))
        );
        assert!("".parse::<PriceRange>().is_err());
        assert!("60000-abc".parse::<PriceRange>().is_err());
        assert!("-5".parse::<PriceRange>().is_err());
    }

    #[test]
    fn test_parse_rejects_inverted() {
        assert_eq!(
            "80000-60000".parse::<PriceRange>(),
            Err(FilterError::InvertedPriceRange { min: 80000, max: 60000 })
        );
    }

    #[test]
    fn test_range_bounds_inclusive() {
        let range = PriceRange::closed(60000, 80000).unwrap();
        assert!(range.contains(60000));
        assert!(range.contains(80000));
        assert!(!range.contains(59999));
        assert!(!range.contains(80001));

        let open = PriceRange::at_least(100000);
        assert!(open.contains(100000));
        assert!(open.contains(u64::MAX));
        assert!(!open.contains(99999));
    }

    #[test]
    fn test_presets_round_trip_through_keys() {
        for preset in PriceRange::presets() {
            let parsed: PriceRange = preset.range.to_string().parse().unwrap();
            assert_eq!(parsed, preset.range, "{}", preset.label);
        }
    }

    #[test]
    fn test_facets_normalized() {
        let filters = SearchFilters::new()
            .with_category(" SUV ")
            .unwrap()
            .with_status("Used")
            .unwrap();
        assert_eq!(filters.category(), Some("suv"));
        assert_eq!(filters.status(), Some("used"));
        assert_eq!(filters.fuel_type(), None);
        assert!(!filters.is_unconstrained());
    }

    #[test]
    fn test_empty_facet_rejected() {
        assert_eq!(
            SearchFilters::new().with_fuel_type("   "),
            Err(FilterError::EmptyFacet("fuel type"))
        );
    }

    #[test]
    fn test_all_is_a_literal_value() {
        // "all" is an ordinary facet value, not a wildcard
        let filters = SearchFilters::new().with_category("all").unwrap();
        assert_eq!(filters.category(), Some("all"));
        assert!(!filters.is_unconstrained());
    }

    #[test]
    fn test_padded_record_facet_matches() {
        let mut vehicle = crate::fixtures::x5();
        vehicle.category = " SUV ".to_string();
        vehicle.fuel_type = "Gasoline\t".to_string();

        let filters = SearchFilters::new()
            .with_category("suv")
            .unwrap()
            .with_fuel_type(" gasoline")
            .unwrap();
        assert!(filters.matches(&vehicle));

        let filters = SearchFilters::new().with_category("coupe").unwrap();
        assert!(!filters.matches(&vehicle));
    }

    #[test]
    fn test_default_is_unconstrained() {
        assert!(SearchFilters::default().is_unconstrained());
    }
}
