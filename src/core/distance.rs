/// Earth's radius in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Slack added to the latitude band so rounding in the band test never
/// prunes a record that the exact haversine check would keep
const BAND_SLACK_KM: f64 = 1e-6;

/// Calculate the Haversine distance between two points in kilometers
///
/// # Arguments
/// * `lat1` - Latitude of first point in degrees
/// * `lon1` - Longitude of first point in degrees
/// * `lat2` - Latitude of second point in degrees
/// * `lon2` - Longitude of second point in degrees
///
/// # Returns
/// Distance in kilometers
#[inline]
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    // Rounding near antipodes can push `a` past 1
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Latitude band around a center point, used as a cheap pre-filter
///
/// The great-circle distance between two points is never shorter than the
/// meridian arc between their latitudes, so anything outside the band is
/// also outside the radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatitudeBand {
    pub min_lat: f64,
    pub max_lat: f64,
}

impl LatitudeBand {
    pub fn around(lat: f64, radius_km: f64) -> Self {
        let delta = ((radius_km + BAND_SLACK_KM) / EARTH_RADIUS_KM).to_degrees();
        Self {
            min_lat: lat - delta,
            max_lat: lat + delta,
        }
    }

    #[inline]
    pub fn contains(&self, lat: f64) -> bool {
        lat >= self.min_lat && lat <= self.max_lat
    }
}
