use crate::models::{
    ChainRule, FacilityRule, FacilitySubmission, FloorRequirement, LandRule, LandSubmission,
};

/// A rule that can be checked against one kind of submission
pub trait EligibilityCriteria: ChainRule {
    type Submission;

    fn is_satisfied_by(&self, submission: &Self::Submission) -> bool;
}

/// A rule flag only ever demands a feature; it never forbids one
#[inline]
fn requires(rule_flag: bool, submitted: bool) -> bool {
    !rule_flag || submitted
}

#[inline]
fn floor_matches(requirement: FloorRequirement, floor: i32) -> bool {
    match requirement {
        FloorRequirement::Any => true,
        FloorRequirement::Exact(required) => floor == required,
        FloorRequirement::Range(bounds) => bounds.contains(floor),
    }
}

impl EligibilityCriteria for FacilityRule {
    type Submission = FacilitySubmission;

    fn is_satisfied_by(&self, submission: &FacilitySubmission) -> bool {
        if !self.area_bounds().contains(submission.total_area) {
            return false;
        }

        if !floor_matches(self.floor_requirement(), submission.floor) {
            return false;
        }

        // An unanswered ceiling height cannot satisfy a minimum
        if let Some(min_height) = self.min_ceiling_height {
            match submission.ceiling_height {
                Some(height) if height >= min_height => {}
                _ => return false,
            }
        }

        if let Some(threshold) = self.expected_visitors {
            if submission.expected_visitors < threshold {
                return false;
            }
        }

        requires(self.near_residential_area, submission.near_residential_area)
            && requires(self.high_pedestrian_traffic, submission.high_pedestrian_traffic)
            && requires(self.high_vehicle_traffic, submission.high_vehicle_traffic)
            && requires(self.utilities, submission.utilities)
            && requires(self.sanitary_facility, submission.sanitary_facility)
            && requires(self.cargo_unloading, submission.cargo_unloading)
            && requires(self.parking_available, submission.parking_available)
    }
}

impl EligibilityCriteria for LandRule {
    type Submission = LandSubmission;

    fn is_satisfied_by(&self, submission: &LandSubmission) -> bool {
        self.area_bounds().contains(submission.total_area)
            && requires(self.near_residential_area, submission.near_residential_area)
            && requires(self.high_vehicle_traffic, submission.high_vehicle_traffic)
            && requires(self.utilities, submission.utilities)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn facility(total_area: f64, floor: i32) -> FacilitySubmission {
        FacilitySubmission {
            total_area,
            floor,
            ..Default::default()
        }
    }

    #[test]
    fn test_area_and_utilities_rule() {
        let rule = FacilityRule {
            chain: "X".to_string(),
            min_area: Some(50.0),
            max_area: Some(200.0),
            utilities: true,
            ..Default::default()
        };

        let mut with_utilities = facility(150.0, 1);
        with_utilities.utilities = true;
        assert!(rule.is_satisfied_by(&with_utilities));

        assert!(!rule.is_satisfied_by(&facility(150.0, 1)));

        let mut too_small = facility(30.0, 1);
        too_small.utilities = true;
        assert!(!rule.is_satisfied_by(&too_small));
    }

    #[test]
    fn test_exact_floor() {
        let rule = FacilityRule {
            min_floor: Some(5),
            max_floor: Some(5),
            ..Default::default()
        };

        assert!(rule.is_satisfied_by(&facility(100.0, 5)));
        assert!(!rule.is_satisfied_by(&facility(100.0, 4)));
        assert!(!rule.is_satisfied_by(&facility(100.0, 6)));
    }

    #[test]
    fn test_floor_range_one_sided() {
        let rule = FacilityRule {
            max_floor: Some(1),
            ..Default::default()
        };

        assert!(rule.is_satisfied_by(&facility(100.0, 0)));
        assert!(rule.is_satisfied_by(&facility(100.0, 1)));
        assert!(!rule.is_satisfied_by(&facility(100.0, 2)));
    }

    #[test]
    fn test_empty_rule_matches_everything() {
        let rule = FacilityRule::default();
        assert!(rule.is_satisfied_by(&facility(0.0, -2)));
        assert!(rule.is_satisfied_by(&facility(10_000.0, 80)));

        let land = LandRule::default();
        assert!(land.is_satisfied_by(&LandSubmission::default()));
    }

    #[test]
    fn test_flags_are_one_directional() {
        let rule = FacilityRule::default();
        let mut submission = facility(100.0, 1);
        submission.parking_available = true;
        submission.cargo_unloading = true;

        assert!(rule.is_satisfied_by(&submission));
    }

    #[test]
    fn test_ceiling_height_minimum() {
        let rule = FacilityRule {
            min_ceiling_height: Some(3.0),
            ..Default::default()
        };

        let mut submission = facility(100.0, 1);
        assert!(!rule.is_satisfied_by(&submission));

        submission.ceiling_height = Some(2.7);
        assert!(!rule.is_satisfied_by(&submission));

        submission.ceiling_height = Some(3.0);
        assert!(rule.is_satisfied_by(&submission));
    }

    #[test]
    fn test_expected_visitors_threshold() {
        let rule = FacilityRule {
            expected_visitors: Some(20_000),
            ..Default::default()
        };

        let mut submission = facility(100.0, 1);
        submission.expected_visitors = 19_999;
        assert!(!rule.is_satisfied_by(&submission));

        submission.expected_visitors = 20_000;
        assert!(rule.is_satisfied_by(&submission));
    }

    #[test]
    fn test_land_rule() {
        let rule = LandRule {
            min_area: Some(1500.0),
            near_residential_area: true,
            high_vehicle_traffic: true,
            ..Default::default()
        };

        let submission = LandSubmission {
            total_area: 2000.0,
            near_residential_area: true,
            high_vehicle_traffic: true,
            utilities: false,
        };
        assert!(rule.is_satisfied_by(&submission));

        let quiet = LandSubmission {
            high_vehicle_traffic: false,
            ..submission.clone()
        };
        assert!(!rule.is_satisfied_by(&quiet));

        let small = LandSubmission {
            total_area: 1000.0,
            ..submission
        };
        assert!(!rule.is_satisfied_by(&small));
    }
}
