use serde::Serialize;

use crate::core::distance::{haversine_distance, LatitudeBand};
use crate::error::{AdvisorError, Result};
use crate::models::PriceRecord;

/// Aggregate over the prices found in a radius
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceSummary {
    pub count: usize,
    pub min_price_per_meter: f64,
    pub max_price_per_meter: f64,
    pub mean_price_per_meter: f64,
}

/// Finds priced listings within a great-circle radius of a point
///
/// Borrows the loaded table; construct one per lookup or keep it for the
/// lifetime of the table.
#[derive(Debug, Clone, Copy)]
pub struct GeoRadiusFilter<'a> {
    records: &'a [PriceRecord],
}

impl<'a> GeoRadiusFilter<'a> {
    pub fn new(records: &'a [PriceRecord]) -> Self {
        Self { records }
    }

    /// Return every record whose distance to the center is at most `radius_km`
    ///
    /// Records come back in dataset order.
    ///
    /// # Errors
    /// `InvalidArgument` when the center is off the globe or the radius is
    /// negative or not finite.
    pub fn find_within_radius(
        &self,
        center_lat: f64,
        center_lon: f64,
        radius_km: f64,
    ) -> Result<Vec<&'a PriceRecord>> {
        validate_center(center_lat, center_lon)?;
        if !radius_km.is_finite() || radius_km < 0.0 {
            return Err(AdvisorError::invalid_argument(format!(
                "radius must be a non-negative number of kilometers, got {}",
                radius_km
            )));
        }

        let band = LatitudeBand::around(center_lat, radius_km);

        let matches: Vec<&PriceRecord> = self
            .records
            .iter()
            // Stage 1: latitude band pre-filter
            .filter(|record| band.contains(record.latitude))
            // Stage 2: exact great-circle distance
            .filter(|record| {
                haversine_distance(center_lat, center_lon, record.latitude, record.longitude)
                    <= radius_km
            })
            .collect();

        tracing::debug!(
            "Radius lookup ({}, {}) r={}km matched {} of {} records",
            center_lat,
            center_lon,
            radius_km,
            matches.len(),
            self.records.len()
        );

        Ok(matches)
    }

    /// Radius lookup followed by [`summarize`]
    pub fn summarize_within_radius(
        &self,
        center_lat: f64,
        center_lon: f64,
        radius_km: f64,
    ) -> Result<Option<PriceSummary>> {
        let records = self.find_within_radius(center_lat, center_lon, radius_km)?;
        Ok(summarize(&records))
    }
}

/// Min / max / mean price per meter; `None` when there is nothing to summarize
pub fn summarize(records: &[&PriceRecord]) -> Option<PriceSummary> {
    let first = records.first()?;

    let mut min = first.price_per_meter;
    let mut max = first.price_per_meter;
    let mut total = 0.0;
    for record in records {
        min = min.min(record.price_per_meter);
        max = max.max(record.price_per_meter);
        total += record.price_per_meter;
    }

    Some(PriceSummary {
        count: records.len(),
        min_price_per_meter: min,
        max_price_per_meter: max,
        mean_price_per_meter: total / records.len() as f64,
    })
}

fn validate_center(lat: f64, lon: f64) -> Result<()> {
    if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
        return Err(AdvisorError::invalid_argument(format!(
            "latitude must be within [-90, 90], got {}",
            lat
        )));
    }
    if !lon.is_finite() || !(-180.0..=180.0).contains(&lon) {
        return Err(AdvisorError::invalid_argument(format!(
            "longitude must be within [-180, 180], got {}",
            lon
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moscow_records() -> Vec<PriceRecord> {
        vec![
            PriceRecord::new(55.75, 37.61, 100_000.0),
            PriceRecord::new(55.76, 37.62, 120_000.0),
        ]
    }

    #[test]
    fn test_radius_includes_both_neighbours() {
        let records = moscow_records();
        let filter = GeoRadiusFilter::new(&records);

        let found = filter.find_within_radius(55.75, 37.61, 1.5).unwrap();
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].price_per_meter, 100_000.0);
        assert_eq!(found[1].price_per_meter, 120_000.0);
    }

    #[test]
    fn test_radius_excludes_far_neighbour() {
        let records = moscow_records();
        let filter = GeoRadiusFilter::new(&records);

        let found = filter.find_within_radius(55.75, 37.61, 1.0).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].price_per_meter, 100_000.0);
    }

    #[test]
    fn test_zero_radius_matches_exact_point_only() {
        let records = moscow_records();
        let filter = GeoRadiusFilter::new(&records);

        let found = filter.find_within_radius(55.76, 37.62, 0.0).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].latitude, 55.76);
    }

    #[test]
    fn test_boundary_is_inclusive() {
        let records = moscow_records();
        let filter = GeoRadiusFilter::new(&records);
        let exact = haversine_distance(55.75, 37.61, 55.76, 37.62);

        let found = filter.find_within_radius(55.75, 37.61, exact).unwrap();
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn test_antipodal_record_found_with_large_radius() {
        for lat in [-87.5, -45.0, 0.0, 12.3, 89.9] {
            let records = vec![PriceRecord::new(-lat, 180.0, 1.0)];
            let filter = GeoRadiusFilter::new(&records);

            let found = filter.find_within_radius(lat, 0.0, 25_000.0).unwrap();
            assert_eq!(found.len(), 1, "antipode of ({}, 0)", lat);
        }
    }

    #[test]
    fn test_invalid_arguments_rejected() {
        let records = moscow_records();
        let filter = GeoRadiusFilter::new(&records);

        for (lat, lon, radius) in [
            (91.0, 37.61, 1.0),
            (55.75, -181.0, 1.0),
            (55.75, 37.61, -0.5),
            (f64::NAN, 37.61, 1.0),
            (55.75, 37.61, f64::INFINITY),
        ] {
            let err = filter.find_within_radius(lat, lon, radius).unwrap_err();
            assert!(matches!(err, AdvisorError::InvalidArgument(_)), "{:?}", (lat, lon, radius));
        }
    }

    #[test]
    fn test_summarize() {
        let records = moscow_records();
        let refs: Vec<&PriceRecord> = records.iter().collect();

        let summary = summarize(&refs).unwrap();
        assert_eq!(summary.count, 2);
        assert_eq!(summary.min_price_per_meter, 100_000.0);
        assert_eq!(summary.max_price_per_meter, 120_000.0);
        assert_eq!(summary.mean_price_per_meter, 110_000.0);

        assert!(summarize(&[]).is_none());
    }

    #[test]
    fn test_summarize_within_radius_empty() {
        let records = moscow_records();
        let filter = GeoRadiusFilter::new(&records);

        let summary = filter.summarize_within_radius(0.0, 0.0, 5.0).unwrap();
        assert!(summary.is_none());
    }
}
