//! Tabular data model for the two sources and their join

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::normalize::{coerce_democracy_index, normalize_key, parse_democracy_index};
use crate::{Error, Result};

/// One row of the rights dataset: a territory and its indicator values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    territory: String,
    values: BTreeMap<String, String>,
}

impl Record {
    /// Create a record with no indicator values
    pub fn new(territory: impl Into<String>) -> Self {
        Self {
            territory: territory.into(),
            values: BTreeMap::new(),
        }
    }

    /// Set the value of an indicator, builder style
    pub fn with_value(mut self, indicator: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(indicator.into(), value.into());
        self
    }

    /// Territory name as given by the source
    pub fn territory(&self) -> &str {
        &self.territory
    }

    /// Normalised join key
    pub fn key(&self) -> String {
        normalize_key(&self.territory)
    }

    /// Categorical value for `indicator`, if the cell is present
    pub fn value(&self, indicator: &str) -> Option<&str> {
        self.values.get(indicator).map(String::as_str)
    }
}

/// One row of the democracy-index table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawDemocracyRecord")]
pub struct DemocracyRecord {
    country: String,
    democracy_index: Option<f64>,
}

impl DemocracyRecord {
    /// Create a record; a NaN or out-of-range index is stored as missing
    pub fn new(country: impl Into<String>, democracy_index: f64) -> Self {
        Self {
            country: country.into(),
            democracy_index: coerce_democracy_index(democracy_index),
        }
    }

    /// Create a record from a raw text cell, coercing unparsable input to missing
    pub fn parse(country: impl Into<String>, raw_index: &str) -> Self {
        Self {
            country: country.into(),
            democracy_index: parse_democracy_index(raw_index),
        }
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn key(&self) -> String {
        normalize_key(&self.country)
    }

    pub fn democracy_index(&self) -> Option<f64> {
        self.democracy_index
    }
}

#[derive(Deserialize)]
struct RawDemocracyRecord {
    country: String,
    democracy_index: Option<f64>,
}

impl From<RawDemocracyRecord> for DemocracyRecord {
    fn from(raw: RawDemocracyRecord) -> Self {
        Self {
            country: raw.country,
            democracy_index: raw.democracy_index.and_then(coerce_democracy_index),
        }
    }
}

/// Rights dataset: ordered indicator schema plus records unique by territory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRightsTable")]
pub struct RightsTable {
    indicators: Vec<String>,
    records: Vec<Record>,
}

impl RightsTable {
    /// Build a table, rejecting territories that collide after normalisation
    pub fn new(indicators: Vec<String>, records: Vec<Record>) -> Result<Self> {
        ensure_unique(records.iter().map(Record::key))?;
        Ok(Self {
            indicators,
            records,
        })
    }

    pub fn indicators(&self) -> &[String] {
        &self.indicators
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[derive(Deserialize)]
struct RawRightsTable {
    indicators: Vec<String>,
    records: Vec<Record>,
}

impl TryFrom<RawRightsTable> for RightsTable {
    type Error = Error;

    fn try_from(raw: RawRightsTable) -> Result<Self> {
        Self::new(raw.indicators, raw.records)
    }
}

/// Democracy-index table, unique by country
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "RawDemocracyTable")]
pub struct DemocracyTable {
    records: Vec<DemocracyRecord>,
}

impl DemocracyTable {
    /// Build a table, rejecting countries that collide after normalisation
    pub fn new(records: Vec<DemocracyRecord>) -> Result<Self> {
        ensure_unique(records.iter().map(DemocracyRecord::key))?;
        Ok(Self { records })
    }

    pub fn records(&self) -> &[DemocracyRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[derive(Deserialize)]
struct RawDemocracyTable {
    records: Vec<DemocracyRecord>,
}

impl TryFrom<RawDemocracyTable> for DemocracyTable {
    type Error = Error;

    fn try_from(raw: RawDemocracyTable) -> Result<Self> {
        Self::new(raw.records)
    }
}

/// A rights record matched to its democracy-index row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JoinedRecord {
    pub territory: String,
    pub country: String,
    pub values: BTreeMap<String, String>,
    pub democracy_index: Option<f64>,
}

impl JoinedRecord {
    /// Combine a rights record with its democracy counterpart
    pub fn from_pair(record: &Record, democracy: &DemocracyRecord) -> Self {
        Self {
            territory: record.territory.clone(),
            country: democracy.country.clone(),
            values: record.values.clone(),
            democracy_index: democracy.democracy_index,
        }
    }

    pub fn value(&self, indicator: &str) -> Option<&str> {
        self.values.get(indicator).map(String::as_str)
    }
}

/// Inner-join result carrying the rights schema forward
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct JoinedTable {
    indicators: Vec<String>,
    rows: Vec<JoinedRecord>,
}

impl JoinedTable {
    pub fn new(indicators: Vec<String>, rows: Vec<JoinedRecord>) -> Self {
        Self { indicators, rows }
    }

    pub fn indicators(&self) -> &[String] {
        &self.indicators
    }

    pub fn rows(&self) -> &[JoinedRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Fail with `MissingColumn` unless `indicator` is part of the schema
    pub fn ensure_indicator(&self, indicator: &str) -> Result<()> {
        if self.indicators.iter().any(|name| name == indicator) {
            Ok(())
        } else {
            Err(Error::MissingColumn(indicator.to_string()))
        }
    }
}

fn ensure_unique(keys: impl Iterator<Item = String>) -> Result<()> {
    let mut seen = HashSet::new();
    for key in keys {
        if !seen.insert(key.clone()) {
            return Err(Error::DuplicateKey(key));
        }
    }
    Ok(())
}
