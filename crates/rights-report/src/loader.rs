//! CSV loaders for the rights dataset and the democracy-index table

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use rights_core::{DemocracyRecord, DemocracyTable, Record, RightsTable};
use tracing::{debug, instrument, warn};

use crate::Result;

/// Header names accepted for the democracy country column
pub const COUNTRY_HEADERS: [&str; 2] = ["Country", "Country (or dependency)"];

/// Header names accepted for the democracy score column
pub const DEMOCRACY_INDEX_HEADERS: [&str; 2] = ["Democracy Index", "Democracy Index 2023"];

/// Read the rights CSV. Every column except `territory_column` is an indicator.
#[instrument(skip(reader))]
pub fn load_rights_csv<R: Read>(reader: R, territory_column: &str) -> Result<RightsTable> {
    let mut csv = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
    let headers = csv.headers()?.clone();
    let key_idx = find_column(&headers, &[territory_column])?;

    let indicators: Vec<(usize, String)> = headers
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != key_idx)
        .map(|(i, name)| (i, name.to_string()))
        .collect();

    let mut records = Vec::new();
    for (line, row) in csv.records().enumerate() {
        let row = row?;
        let territory = row.get(key_idx).unwrap_or_default();
        if territory.is_empty() {
            warn!("Skipping rights row {} with blank {:?}", line + 1, territory_column);
            continue;
        }
        let record = indicators
            .iter()
            .filter_map(|(i, name)| row.get(*i).map(|cell| (name, cell)))
            .fold(Record::new(territory), |record, (name, cell)| {
                record.with_value(name.as_str(), cell)
            });
        records.push(record);
    }

    debug!("Loaded {} rights rows with {} indicators", records.len(), indicators.len());
    let names = indicators.into_iter().map(|(_, name)| name).collect();
    Ok(RightsTable::new(names, records)?)
}

/// Read the democracy-index CSV written by the scraper.
///
/// Unparsable or out-of-range scores become missing rather than dropping
/// the row.
#[instrument(skip(reader))]
pub fn load_democracy_csv<R: Read>(reader: R) -> Result<DemocracyTable> {
    let mut csv = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
    let headers = csv.headers()?.clone();
    let country_idx = find_column(&headers, &COUNTRY_HEADERS)?;
    let index_idx = find_column(&headers, &DEMOCRACY_INDEX_HEADERS)?;

    let mut records = Vec::new();
    let mut coerced = 0usize;
    for (line, row) in csv.records().enumerate() {
        let row = row?;
        let country = row.get(country_idx).unwrap_or_default();
        if country.is_empty() {
            warn!(
                "Skipping democracy row {} with blank {:?}",
                line + 1,
                headers.get(country_idx).unwrap_or_default()
            );
            continue;
        }
        let raw = row.get(index_idx).unwrap_or_default();
        let record = DemocracyRecord::parse(country, raw);
        if record.democracy_index().is_none() {
            coerced += 1;
            debug!("Democracy index {:?} for {} coerced to missing", raw, country);
        }
        records.push(record);
    }

    if coerced > 0 {
        warn!("{} democracy-index values were unparsable and recorded as missing", coerced);
    }
    Ok(DemocracyTable::new(records)?)
}

pub fn load_rights_path(path: impl AsRef<Path>, territory_column: &str) -> Result<RightsTable> {
    load_rights_csv(File::open(path)?, territory_column)
}

pub fn load_democracy_path(path: impl AsRef<Path>) -> Result<DemocracyTable> {
    load_democracy_csv(File::open(path)?)
}

fn find_column(headers: &StringRecord, candidates: &[&str]) -> Result<usize> {
    candidates
        .iter()
        .find_map(|name| headers.iter().position(|h| h == *name))
        .ok_or_else(|| rights_core::Error::MissingColumn(candidates[0].to_string()).into())
}
