use crate::core::filters::EligibilityCriteria;
use crate::error::{AdvisorError, Result};
use crate::models::{FacilityRule, FacilitySubmission, LandRule, LandSubmission, RuleCatalog};

/// Matches submissions against the chain catalog
///
/// Results keep catalog order; any ranking or grouping is left to the caller.
#[derive(Debug, Clone, Copy)]
pub struct EligibilityEvaluator<'a> {
    catalog: &'a RuleCatalog,
}

impl<'a> EligibilityEvaluator<'a> {
    pub fn new(catalog: &'a RuleCatalog) -> Self {
        Self { catalog }
    }

    /// Facility rules fully satisfied by the submission
    pub fn evaluate_facility(
        &self,
        submission: &FacilitySubmission,
    ) -> Result<Vec<&'a FacilityRule>> {
        validate_area(submission.total_area)?;
        if let Some(height) = submission.ceiling_height {
            if !height.is_finite() || height < 0.0 {
                return Err(AdvisorError::validation(format!(
                    "ceiling_height must be a non-negative number, got {}",
                    height
                )));
            }
        }

        Ok(matching(&self.catalog.facility, submission))
    }

    /// Land rules fully satisfied by the submission
    pub fn evaluate_land(&self, submission: &LandSubmission) -> Result<Vec<&'a LandRule>> {
        validate_area(submission.total_area)?;

        Ok(matching(&self.catalog.land, submission))
    }
}

fn matching<'a, R: EligibilityCriteria>(rules: &'a [R], submission: &R::Submission) -> Vec<&'a R> {
    let matched: Vec<&R> = rules
        .iter()
        .filter(|rule| rule.is_satisfied_by(submission))
        .collect();

    tracing::debug!("{} of {} rules satisfied", matched.len(), rules.len());
    matched
}

fn validate_area(total_area: f64) -> Result<()> {
    if !total_area.is_finite() || total_area < 0.0 {
        return Err(AdvisorError::validation(format!(
            "total_area must be a non-negative number, got {}",
            total_area
        )));
    }
    Ok(())
}
