//! Realty Advisor - comparable price lookup and chain tenant eligibility
//!
//! Two independent read-only cores over tables loaded once at startup:
//! a great-circle radius filter over a price dataset, and a rule evaluator
//! that matches facility or land submissions against a chain catalog.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{haversine_distance, EligibilityEvaluator, GeoRadiusFilter, PriceSummary};
pub use error::{AdvisorError, Result};
pub use models::{
    FacilityRule, FacilitySubmission, LandRule, LandSubmission, PriceDataset, PriceRecord,
    RuleCatalog,
};
