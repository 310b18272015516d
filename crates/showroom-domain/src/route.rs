//! Navigation paths shared by the listing and detail views

/// Listing page path, also the way back from a missing vehicle
pub const LISTING_PATH: &str = "/vehicles";

/// Detail page path for a vehicle id
pub fn vehicle_path(id: &str) -> String {
    format!("{}/{}", LISTING_PATH, id)
}

/// Extract the vehicle id from a detail page path.
///
/// Accepts "/vehicles/{id}" with an optional trailing slash.
pub fn parse_vehicle_path(path: &str) -> Option<&str> {
    let rest = path.strip_prefix(LISTING_PATH)?.strip_prefix('/')?;
    let id = rest.strip_suffix('/').unwrap_or(rest);
    if id.is_empty() || id.contains('/') {
        None
    } else {
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vehicle_path() {
        assert_eq!(vehicle_path("bmw-x5-m50i"), "/vehicles/bmw-x5-m50i");
    }

    #[test]
    fn test_parse_vehicle_path() {
        assert_eq!(parse_vehicle_path("/vehicles/bmw-x5-m50i"), Some("bmw-x5-m50i"));
        assert_eq!(parse_vehicle_path("/vehicles/bmw-x5-m50i/"), Some("bmw-x5-m50i"));
        assert_eq!(parse_vehicle_path("/vehicles"), None);
        assert_eq!(parse_vehicle_path("/vehicles/"), None);
        assert_eq!(parse_vehicle_path("/vehicles/a/b"), None);
        assert_eq!(parse_vehicle_path("/about"), None);
        assert_eq!(parse_vehicle_path("/vehiclesx/abc"), None);
    }

    #[test]
    fn test_round_trip() {
        let path = vehicle_path("cadillac-elr-base");
        assert_eq!(parse_vehicle_path(&path), Some("cadillac-elr-base"));
    }
}
