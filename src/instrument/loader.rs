//! Load instrument records from CSV

use super::{InstrumentParameters, InstrumentRecord};
use crate::error::{EngineError, EngineResult};
use chrono::NaiveDate;
use csv::Reader;
use log::info;
use std::path::Path;

/// Raw CSV row matching the instrument export columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    id: u32,
    name: String,
    #[serde(default)]
    institution: String,
    index_rate_annual: f64,
    percent_of_index: f64,
    principal: f64,
    #[serde(default)]
    monthly_contribution: f64,
    start_date: String,
    #[serde(default)]
    apply_withholding: String,
}

impl CsvRow {
    fn to_record(self, row: usize) -> EngineResult<InstrumentRecord> {
        let start_date = NaiveDate::parse_from_str(self.start_date.trim(), "%Y-%m-%d").map_err(|e| {
            EngineError::Load(format!("row {}: bad start_date {:?}: {}", row, self.start_date, e))
        })?;

        let apply_withholding = match self.apply_withholding.trim().to_lowercase().as_str() {
            "true" | "1" | "sim" | "yes" => true,
            "false" | "0" | "não" | "nao" | "no" | "" => false,
            other => {
                return Err(EngineError::Load(format!(
                    "row {}: unknown apply_withholding: {}",
                    row, other
                )))
            }
        };

        let parameters = InstrumentParameters {
            index_rate_annual: self.index_rate_annual,
            percent_of_index: self.percent_of_index,
            principal: self.principal,
            monthly_contribution: self.monthly_contribution,
            start_date,
            apply_withholding,
        };
        parameters
            .validate()
            .map_err(|e| EngineError::Load(format!("row {}: {}", row, e)))?;

        Ok(InstrumentRecord {
            id: self.id,
            name: self.name,
            institution: self.institution,
            parameters,
        })
    }
}

/// Load all instruments from a CSV file
pub fn load_instruments<P: AsRef<Path>>(path: P) -> EngineResult<Vec<InstrumentRecord>> {
    let path = path.as_ref();
    let reader = Reader::from_path(path)?;
    let records = read_all(reader)?;
    info!("Loaded {} instruments from {}", records.len(), path.display());
    Ok(records)
}

/// Load instruments from any reader (e.g., string buffer, stdin)
pub fn load_instruments_from_reader<R: std::io::Read>(reader: R) -> EngineResult<Vec<InstrumentRecord>> {
    read_all(Reader::from_reader(reader))
}

fn read_all<R: std::io::Read>(mut reader: Reader<R>) -> EngineResult<Vec<InstrumentRecord>> {
    let mut records = Vec::new();

    for (idx, result) in reader.deserialize().enumerate() {
        let row: CsvRow = result.map_err(|e| EngineError::Load(format!("row {}: {}", idx + 1, e)))?;
        records.push(row.to_record(idx + 1)?);
    }

    Ok(records)
}
