use std::fmt;

const LAT_DEG_MAX: f64 = 90.0;
const LNG_DEG_MAX: f64 = 180.0;

/// A WGS84 position in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Create coordinates from a `[lng, lat]` pair (GeoJSON order).
    #[must_use]
    pub const fn from_lng_lat(lng_lat: [f64; 2]) -> Self {
        let [lng, lat] = lng_lat;
        Self { lat, lng }
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        (-LAT_DEG_MAX..=LAT_DEG_MAX).contains(&self.lat)
            && (-LNG_DEG_MAX..=LNG_DEG_MAX).contains(&self.lng)
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.lat, self.lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swap_geojson_order() {
        let pos = Coordinates::from_lng_lat([77.5946, 12.9716]);
        assert_eq!(pos.lat, 12.9716);
        assert_eq!(pos.lng, 77.5946);
    }

    #[test]
    fn validate_ranges() {
        assert!(Coordinates::new(48.1, 9.2).is_valid());
        assert!(Coordinates::new(-90.0, 180.0).is_valid());
        assert!(!Coordinates::new(90.1, 0.0).is_valid());
        assert!(!Coordinates::new(0.0, -180.5).is_valid());
    }

    #[test]
    fn display_with_six_decimals() {
        let pos = Coordinates::new(12.971_6, 77.594_6);
        assert_eq!(pos.to_string(), "12.971600, 77.594600");
    }
}
