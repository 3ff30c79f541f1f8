use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for the radius price lookups
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LocationRequest {
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
    /// Search radius in kilometers
    #[validate(range(min = 0.0))]
    pub radius: f64,
}
