use std::path::Path;

use crate::error::{AdvisorError, Result};
use crate::models::{Bounds, ChainRule, FacilityRule, RuleCatalog};

/// Load the chain rule catalog from a TOML file
///
/// The file holds `[[facility]]` and `[[land]]` tables, one per chain.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<RuleCatalog> {
    let path = path.as_ref();
    let source_name = path.display().to_string();
    let text = std::fs::read_to_string(path)
        .map_err(|e| AdvisorError::data_unavailable(&source_name, e))?;

    parse_catalog(&text, &source_name)
}

/// Parse and sanity-check a TOML rule catalog
pub fn parse_catalog(text: &str, source_name: &str) -> Result<RuleCatalog> {
    let catalog: RuleCatalog =
        toml::from_str(text).map_err(|e| AdvisorError::data_unavailable(source_name, e))?;

    for (index, rule) in catalog.facility.iter().enumerate() {
        check_rule(rule, "facility", index, source_name)?;
        check_facility(rule, index, source_name)?;
    }
    for (index, rule) in catalog.land.iter().enumerate() {
        check_rule(rule, "land", index, source_name)?;
    }

    tracing::info!(
        "Loaded {} facility and {} land rules from {}",
        catalog.facility.len(),
        catalog.land.len(),
        source_name
    );

    Ok(catalog)
}

fn check_rule<R: ChainRule>(rule: &R, kind: &str, index: usize, source_name: &str) -> Result<()> {
    let fail = |reason: String| {
        AdvisorError::data_unavailable(source_name, format!("{} rule #{}: {}", kind, index, reason))
    };

    if rule.chain().trim().is_empty() {
        return Err(fail("chain name is empty".to_string()));
    }
    check_bounds(rule.area_bounds(), "area").map_err(|reason| fail(format!("{} ({})", reason, rule.chain())))
}

fn check_facility(rule: &FacilityRule, index: usize, source_name: &str) -> Result<()> {
    let fail = |reason: String| {
        AdvisorError::data_unavailable(
            source_name,
            format!("facility rule #{}: {} ({})", index, reason, rule.chain),
        )
    };

    if Bounds::new(rule.min_floor, rule.max_floor).is_inverted() {
        return Err(fail("min_floor is above max_floor".to_string()));
    }
    if let Some(height) = rule.min_ceiling_height {
        if !height.is_finite() || height < 0.0 {
            return Err(fail(format!("min_ceiling_height {} is not a valid height", height)));
        }
    }
    Ok(())
}

fn check_bounds(bounds: Bounds<f64>, name: &str) -> std::result::Result<(), String> {
    for value in [bounds.min, bounds.max].into_iter().flatten() {
        if !value.is_finite() || value < 0.0 {
            return Err(format!("{} bound {} is not a valid quantity", name, value));
        }
    }
    if bounds.is_inverted() {
        return Err(format!("min_{} is above max_{}", name, name));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
[[facility]]
chain = "Ригла"
category = "Аптеки"
min_area = 50.0
max_area = 200.0
min_floor = 1
max_floor = 1
utilities = true
sanitary_facility = true

[[facility]]
chain = "Ozon"
category = "Пункты выдачи"
max_area = 100.0

[[land]]
chain = "Пятерочка"
category = "Супермаркеты"
min_area = 1500.0
high_vehicle_traffic = true
"#;

    #[test]
    fn test_parse_catalog() {
        let catalog = parse_catalog(SAMPLE, "sample").unwrap();

        assert_eq!(catalog.facility.len(), 2);
        assert_eq!(catalog.land.len(), 1);

        let rigla = &catalog.facility[0];
        assert_eq!(rigla.min_floor, Some(1));
        assert!(rigla.utilities);
        assert!(!rigla.parking_available);
        assert_eq!(rigla.expected_visitors, None);

        let ozon = &catalog.facility[1];
        assert_eq!(ozon.min_area, None);
        assert_eq!(ozon.max_area, Some(100.0));
    }

    #[test]
    fn test_inverted_area_rejected() {
        let text = r#"
[[land]]
chain = "Broken"
category = "Test"
min_area = 500.0
max_area = 100.0
"#;
        let err = parse_catalog(text, "sample").unwrap_err();
        assert!(matches!(err, AdvisorError::DataUnavailable { .. }));
        assert!(err.to_string().contains("min_area is above max_area"), "{}", err);
    }

    #[test]
    fn test_inverted_floor_rejected() {
        let text = r#"
[[facility]]
chain = "Broken"
category = "Test"
min_floor = 3
max_floor = 1
"#;
        let err = parse_catalog(text, "sample").unwrap_err();
        assert!(err.to_string().contains("min_floor"), "{}", err);
    }

    #[test]
    fn test_empty_chain_rejected() {
        let text = "[[land]]\nchain = \"\"\ncategory = \"Test\"\n";
        assert!(parse_catalog(text, "sample").is_err());
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let err = parse_catalog("[[facility]\nchain = ", "sample").unwrap_err();
        assert!(matches!(err, AdvisorError::DataUnavailable { .. }));
    }

    #[test]
    fn test_empty_catalog_is_allowed() {
        let catalog = parse_catalog("", "sample").unwrap();
        assert!(catalog.facility.is_empty());
        assert!(catalog.land.is_empty());
    }
}
