use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::domain::ChainRule;

/// Response for the eligibility check endpoints
#[derive(Debug, Clone, Serialize)]
pub struct EligibilityResponse<'a, R> {
    pub eligible_chains: Vec<&'a R>,
    /// Chain names per category, categories in sorted order
    pub by_category: BTreeMap<String, Vec<String>>,
}

impl<'a, R: ChainRule> EligibilityResponse<'a, R> {
    pub fn new(eligible_chains: Vec<&'a R>) -> Self {
        let mut by_category: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for rule in &eligible_chains {
            by_category
                .entry(rule.category().to_string())
                .or_default()
                .push(rule.chain().to_string());
        }

        Self {
            eligible_chains,
            by_category,
        }
    }
}

/// Response for the criteria listing endpoints
#[derive(Debug, Clone, Serialize)]
pub struct CriteriaResponse<'a, R> {
    pub eligibility_criteria: &'a [R],
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub price_records: usize,
    pub facility_rules: usize,
    pub land_rules: usize,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
