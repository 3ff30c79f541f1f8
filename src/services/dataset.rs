use serde_json::{Map, Number, Value};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{AdvisorError, Result};
use crate::models::{PriceDataset, PriceRecord};

const LATITUDE: &str = "latitude";
const LONGITUDE: &str = "longitude";
const PRICE_PER_METER: &str = "price_per_meter";

/// Load the price table from a CSV file with a header row
///
/// Rows with unparsable numbers or coordinates off the globe fail the whole
/// load; the service is not meant to start on a partially read table.
pub fn load_prices<P: AsRef<Path>>(path: P) -> Result<PriceDataset> {
    let path = path.as_ref();
    let source_name = path.display().to_string();
    let file = File::open(path).map_err(|e| AdvisorError::data_unavailable(&source_name, e))?;

    read_prices(file, &source_name)
}

/// Parse a price table from any CSV reader
pub fn read_prices<R: Read>(reader: R, source_name: &str) -> Result<PriceDataset> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| AdvisorError::data_unavailable(source_name, e))?
        .clone();

    let column = |name: &str| {
        headers.iter().position(|header| header == name).ok_or_else(|| {
            AdvisorError::data_unavailable(source_name, format!("missing column '{}'", name))
        })
    };
    let lat_idx = column(LATITUDE)?;
    let lon_idx = column(LONGITUDE)?;
    let price_idx = column(PRICE_PER_METER)?;

    let mut records = Vec::new();
    for (index, row) in csv_reader.records().enumerate() {
        let row = row.map_err(|e| AdvisorError::data_unavailable(source_name, e))?;
        let line = row
            .position()
            .map(|position| position.line())
            .unwrap_or(index as u64 + 2);

        let number = |idx: usize, name: &str| -> Result<f64> {
            let cell = row.get(idx).unwrap_or_default();
            cell.parse::<f64>()
                .ok()
                .filter(|value| value.is_finite())
                .ok_or_else(|| {
                    AdvisorError::data_unavailable(
                        source_name,
                        format!("line {}: {} '{}' is not a finite number", line, name, cell),
                    )
                })
        };

        let latitude = number(lat_idx, LATITUDE)?;
        let longitude = number(lon_idx, LONGITUDE)?;
        let price_per_meter = number(price_idx, PRICE_PER_METER)?;

        if !(-90.0..=90.0).contains(&latitude) {
            return Err(AdvisorError::data_unavailable(
                source_name,
                format!("line {}: latitude {} outside [-90, 90]", line, latitude),
            ));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(AdvisorError::data_unavailable(
                source_name,
                format!("line {}: longitude {} outside [-180, 180]", line, longitude),
            ));
        }

        let mut attributes = Map::new();
        for (idx, (header, cell)) in headers.iter().zip(row.iter()).enumerate() {
            // Unnamed columns are usually an exported row index
            if idx == lat_idx || idx == lon_idx || idx == price_idx || header.is_empty() {
                continue;
            }
            attributes.insert(header.to_string(), cell_value(cell));
        }

        records.push(PriceRecord {
            latitude,
            longitude,
            price_per_meter,
            attributes,
        });
    }

    tracing::info!("Loaded {} price records from {}", records.len(), source_name);

    Ok(PriceDataset::new(records))
}

/// Numbers stay numbers, empty cells become null, anything else is text
fn cell_value(cell: &str) -> Value {
    if cell.is_empty() {
        return Value::Null;
    }
    if let Ok(integer) = cell.parse::<i64>() {
        return Value::Number(integer.into());
    }
    if let Some(number) = cell.parse::<f64>().ok().and_then(Number::from_f64) {
        return Value::Number(number);
    }
    Value::String(cell.to_string())
}
