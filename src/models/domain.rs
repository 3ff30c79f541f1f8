use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Daily visitor count assumed when a submission answers the
/// "at least 20,000 visitors per day" question with a plain `true`
pub const VISITORS_FLAG_EQUIVALENT: u32 = 20_000;

/// Priced listing with coordinates; any extra dataset columns ride along
/// in `attributes` and serialize flat next to the typed fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    pub latitude: f64,
    pub longitude: f64,
    pub price_per_meter: f64,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl PriceRecord {
    pub fn new(latitude: f64, longitude: f64, price_per_meter: f64) -> Self {
        Self {
            latitude,
            longitude,
            price_per_meter,
            attributes: Map::new(),
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }
}

/// Price table loaded once at startup, kept in source order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceDataset {
    records: Vec<PriceRecord>,
}

impl PriceDataset {
    pub fn new(records: Vec<PriceRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[PriceRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Inclusive numeric range where either side may be open
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds<T> {
    pub min: Option<T>,
    pub max: Option<T>,
}

impl<T: PartialOrd + Copy> Bounds<T> {
    pub fn new(min: Option<T>, max: Option<T>) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn contains(&self, value: T) -> bool {
        if let Some(min) = self.min {
            if value < min {
                return false;
            }
        }
        if let Some(max) = self.max {
            if value > max {
                return false;
            }
        }
        true
    }

    /// Both sides present and min above max: nothing can satisfy it
    pub fn is_inverted(&self) -> bool {
        matches!((self.min, self.max), (Some(min), Some(max)) if min > max)
    }
}

/// How a facility rule constrains the floor
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FloorRequirement {
    Any,
    Exact(i32),
    Range(Bounds<i32>),
}

/// Fields shared by facility and land rules
pub trait ChainRule {
    fn chain(&self) -> &str;
    fn category(&self) -> &str;
    fn area_bounds(&self) -> Bounds<f64>;
}

/// Siting requirements a chain publishes for commercial premises
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FacilityRule {
    pub chain: String,
    pub category: String,
    #[serde(default)]
    pub min_area: Option<f64>,
    #[serde(default)]
    pub max_area: Option<f64>,
    #[serde(default)]
    pub min_floor: Option<i32>,
    #[serde(default)]
    pub max_floor: Option<i32>,
    #[serde(default)]
    pub min_ceiling_height: Option<f64>,
    #[serde(default)]
    pub near_residential_area: bool,
    #[serde(default)]
    pub high_pedestrian_traffic: bool,
    #[serde(default)]
    pub high_vehicle_traffic: bool,
    #[serde(default)]
    pub utilities: bool,
    #[serde(default)]
    pub sanitary_facility: bool,
    #[serde(default)]
    pub cargo_unloading: bool,
    #[serde(default)]
    pub parking_available: bool,
    #[serde(default)]
    pub expected_visitors: Option<u32>,
}

impl FacilityRule {
    pub fn floor_requirement(&self) -> FloorRequirement {
        match (self.min_floor, self.max_floor) {
            (None, None) => FloorRequirement::Any,
            (Some(min), Some(max)) if min == max => FloorRequirement::Exact(min),
            (min, max) => FloorRequirement::Range(Bounds::new(min, max)),
        }
    }
}

impl ChainRule for FacilityRule {
    fn chain(&self) -> &str {
        &self.chain
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn area_bounds(&self) -> Bounds<f64> {
        Bounds::new(self.min_area, self.max_area)
    }
}

/// Siting requirements a chain publishes for land parcels
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LandRule {
    pub chain: String,
    pub category: String,
    #[serde(default)]
    pub min_area: Option<f64>,
    #[serde(default)]
    pub max_area: Option<f64>,
    #[serde(default)]
    pub near_residential_area: bool,
    #[serde(default)]
    pub high_vehicle_traffic: bool,
    #[serde(default)]
    pub utilities: bool,
}

impl ChainRule for LandRule {
    fn chain(&self) -> &str {
        &self.chain
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn area_bounds(&self) -> Bounds<f64> {
        Bounds::new(self.min_area, self.max_area)
    }
}

/// Both rule tables, read-only after load
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleCatalog {
    #[serde(default)]
    pub facility: Vec<FacilityRule>,
    #[serde(default)]
    pub land: Vec<LandRule>,
}

/// Description of premises submitted for an eligibility check
///
/// The web form's `nearby_facilities` answer is accepted but not evaluated;
/// no chain rule constrains it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FacilitySubmission {
    pub total_area: f64,
    #[serde(deserialize_with = "deserialize_floor")]
    pub floor: i32,
    #[serde(default)]
    pub ceiling_height: Option<f64>,
    #[serde(default)]
    pub near_residential_area: bool,
    #[serde(default)]
    pub high_pedestrian_traffic: bool,
    #[serde(default)]
    pub high_vehicle_traffic: bool,
    #[serde(default)]
    pub utilities: bool,
    #[serde(default)]
    pub sanitary_facility: bool,
    #[serde(default)]
    pub cargo_unloading: bool,
    #[serde(default)]
    pub parking_available: bool,
    #[serde(default, deserialize_with = "deserialize_visitors")]
    pub expected_visitors: u32,
}

/// Description of a land parcel submitted for an eligibility check
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LandSubmission {
    pub total_area: f64,
    #[serde(default)]
    pub near_residential_area: bool,
    #[serde(default)]
    pub high_vehicle_traffic: bool,
    #[serde(default)]
    pub utilities: bool,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FloorAnswer {
    Whole(i32),
    Fractional(f64),
}

/// Accepts an integer floor or a float with no fractional part (slider values)
fn deserialize_floor<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    match FloorAnswer::deserialize(deserializer)? {
        FloorAnswer::Whole(floor) => Ok(floor),
        FloorAnswer::Fractional(value)
            if value.fract() == 0.0 && value >= i32::MIN as f64 && value <= i32::MAX as f64 =>
        {
            Ok(value as i32)
        }
        FloorAnswer::Fractional(value) => Err(D::Error::custom(format!(
            "floor must be a whole number, got {}",
            value
        ))),
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum VisitorsAnswer {
    Count(u32),
    Flag(bool),
}

/// Accepts either a daily visitor count or the yes/no answer the web form sends
fn deserialize_visitors<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match VisitorsAnswer::deserialize(deserializer)? {
        VisitorsAnswer::Count(count) => count,
        VisitorsAnswer::Flag(true) => VISITORS_FLAG_EQUIVALENT,
        VisitorsAnswer::Flag(false) => 0,
    })
}
