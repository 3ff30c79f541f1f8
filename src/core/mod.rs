// Core algorithm exports
pub mod distance;
pub mod eligibility;
pub mod filters;
pub mod radius;

pub use distance::{haversine_distance, LatitudeBand, EARTH_RADIUS_KM};
pub use eligibility::EligibilityEvaluator;
pub use filters::EligibilityCriteria;
pub use radius::{summarize, GeoRadiusFilter, PriceSummary};
