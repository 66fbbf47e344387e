//! Categorical-to-binary encoding of indicator cells

use std::collections::BTreeMap;

use rights_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Maps categorical values to 1.0, 0.0 or missing.
///
/// Values absent from the mapping (free-text legal statuses, blanks) encode
/// as missing, the same as an explicit `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<String, Option<f64>>", into = "BTreeMap<String, Option<f64>>")]
pub struct Encoding {
    codes: BTreeMap<String, Option<f64>>,
}

impl Encoding {
    /// Empty encoding: every value is missing
    pub fn new() -> Self {
        Self {
            codes: BTreeMap::new(),
        }
    }

    /// "Yes" → 1, "No" → 0, "Unknown" → missing
    pub fn yes_no() -> Self {
        let codes = BTreeMap::from([
            ("Yes".to_string(), Some(1.0)),
            ("No".to_string(), Some(0.0)),
            ("Unknown".to_string(), None),
        ]);
        Self { codes }
    }

    /// Add or replace the code for `value`; only 0.0, 1.0 or missing
    pub fn insert(&mut self, value: impl Into<String>, code: Option<f64>) -> Result<()> {
        let value = value.into();
        if let Some(c) = code {
            if c != 0.0 && c != 1.0 {
                return Err(Error::InvalidInput(format!(
                    "encoding for {value:?} must be 0 or 1, got {c}"
                )));
            }
        }
        self.codes.insert(value.trim().to_string(), code);
        Ok(())
    }

    /// Builder form of [`Encoding::insert`]
    pub fn with(mut self, value: impl Into<String>, code: Option<f64>) -> Result<Self> {
        self.insert(value, code)?;
        Ok(self)
    }

    /// Encode one cell; absent cells and unmapped values are missing
    pub fn encode(&self, cell: Option<&str>) -> Option<f64> {
        cell.and_then(|raw| self.codes.get(raw.trim()).copied().flatten())
    }
}

impl Default for Encoding {
    fn default() -> Self {
        Self::yes_no()
    }
}

impl TryFrom<BTreeMap<String, Option<f64>>> for Encoding {
    type Error = Error;

    fn try_from(codes: BTreeMap<String, Option<f64>>) -> Result<Self> {
        codes
            .into_iter()
            .try_fold(Self::new(), |enc, (value, code)| enc.with(value, code))
    }
}

impl From<Encoding> for BTreeMap<String, Option<f64>> {
    fn from(encoding: Encoding) -> Self {
        encoding.codes
    }
}
