// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Bounds, ChainRule, FacilityRule, FacilitySubmission, FloorRequirement, LandRule,
    LandSubmission, PriceDataset, PriceRecord, RuleCatalog, VISITORS_FLAG_EQUIVALENT,
};
pub use requests::LocationRequest;
pub use responses::{CriteriaResponse, EligibilityResponse, ErrorResponse, HealthResponse};
