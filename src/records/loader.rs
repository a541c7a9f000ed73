//! Flat-file loading and saving of records
//!
//! A data directory holds up to four files, each optional:
//! - `assets.csv`    name,amount,interest_rate,type
//! - `monthly.csv`   year,month,total_income,total_expense
//! - `goals.csv`     name,cost,start_year,duration_years,type
//! - `settings.json` {"inflation_rate": 2.0, "return_rate": 5.0}
//!
//! Row order is creation order, so the first row of `monthly.csv` is the
//! record the projection uses.

use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;

use log::{debug, info};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::store::{MemoryStore, Repository, Table};
use super::validate::Validate;
use super::{Asset, LifeGoal, MonthlyFinancial, SimulationSettings};
use crate::error::{Error, Result};

pub const ASSETS_FILE: &str = "assets.csv";
pub const MONTHLY_FILE: &str = "monthly.csv";
pub const GOALS_FILE: &str = "goals.csv";
pub const SETTINGS_FILE: &str = "settings.json";

/// Parse and validate CSV records from any reader
pub fn read_records<T, R>(reader: R) -> Result<Vec<T>>
where
    T: DeserializeOwned + Validate,
    R: Read,
{
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut records = Vec::new();

    for (idx, row) in csv_reader.deserialize::<T>().enumerate() {
        let record = row?;
        record.validate().map_err(|e| match e {
            // Data rows start on line 2, after the header
            Error::InvalidRecord { kind, reason } => Error::InvalidRecord {
                kind,
                reason: format!("line {}: {}", idx + 2, reason),
            },
            other => other,
        })?;
        records.push(record);
    }

    Ok(records)
}

/// Write records as CSV with a header row
pub fn write_records<T: Serialize, W: Write>(writer: W, records: &[&T]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for record in records {
        csv_writer.serialize(record)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Parse settings JSON from any reader
pub fn read_settings<R: Read>(reader: R) -> Result<SimulationSettings> {
    let settings: SimulationSettings = serde_json::from_reader(reader)?;
    settings.validate()?;
    Ok(settings)
}

fn load_table<T>(dir: &Path, file_name: &str) -> Result<Table<T>>
where
    T: DeserializeOwned + Validate,
{
    let mut table = Table::new();
    let path = dir.join(file_name);
    if !path.exists() {
        debug!("{} not found, starting with no {} records", path.display(), T::KIND);
        return Ok(table);
    }

    let file = File::open(&path)?;
    for record in read_records::<T, _>(BufReader::new(file))? {
        table.create(record)?;
    }
    info!("Loaded {} {} records from {}", table.len(), T::KIND, path.display());
    Ok(table)
}

/// Load every record file found in `dir`
pub fn load_store(dir: impl AsRef<Path>) -> Result<MemoryStore> {
    let dir = dir.as_ref();

    let settings_path = dir.join(SETTINGS_FILE);
    let settings = if settings_path.exists() {
        Some(read_settings(BufReader::new(File::open(&settings_path)?))?)
    } else {
        None
    };

    Ok(MemoryStore {
        assets: load_table::<Asset>(dir, ASSETS_FILE)?,
        monthly: load_table::<MonthlyFinancial>(dir, MONTHLY_FILE)?,
        goals: load_table::<LifeGoal>(dir, GOALS_FILE)?,
        settings,
    })
}

/// Write the store back to `dir`, creating it if needed.
/// Settings are written only once they exist.
pub fn save_store(store: &MemoryStore, dir: impl AsRef<Path>) -> Result<()> {
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir)?;

    write_records(File::create(dir.join(ASSETS_FILE))?, &store.assets.values().collect::<Vec<_>>())?;
    write_records(File::create(dir.join(MONTHLY_FILE))?, &store.monthly.values().collect::<Vec<_>>())?;
    write_records(File::create(dir.join(GOALS_FILE))?, &store.goals.values().collect::<Vec<_>>())?;

    if let Some(settings) = &store.settings {
        let file = File::create(dir.join(SETTINGS_FILE))?;
        serde_json::to_writer_pretty(file, settings)?;
    }

    info!("Saved records to {}", dir.display());
    Ok(())
}
