//! Descriptive profile of the rights table: overview and value counts

use std::collections::{BTreeMap, BTreeSet};

use rights_core::RightsTable;
use serde::{Deserialize, Serialize};

/// Dataset-level facts shown before the per-indicator sections
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetOverview {
    /// Distinct territory names
    pub territory_count: usize,
    /// Territory names, ascending and de-duplicated
    pub territories: Vec<String>,
    /// Territory column followed by the indicator columns
    pub columns: Vec<String>,
}

impl DatasetOverview {
    pub fn from_table(table: &RightsTable, territory_column: &str) -> Self {
        let territories: Vec<String> = table
            .records()
            .iter()
            .map(|r| r.territory().to_string())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let columns = std::iter::once(territory_column.to_string())
            .chain(table.indicators().iter().cloned())
            .collect();

        Self {
            territory_count: territories.len(),
            territories,
            columns,
        }
    }
}

/// Distribution of values for one indicator column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicatorProfile {
    pub indicator: String,
    pub description: Option<String>,
    /// Number of distinct non-blank values
    pub unique_values: usize,
    /// (value, count), by count descending then value ascending
    pub value_counts: Vec<(String, usize)>,
}

impl IndicatorProfile {
    /// Count values of `indicator`; blank and absent cells are not counted
    pub fn from_table(table: &RightsTable, indicator: &str, description: Option<&str>) -> Self {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for value in table
            .records()
            .iter()
            .filter_map(|r| r.value(indicator))
            .map(str::trim)
            .filter(|v| !v.is_empty())
        {
            *counts.entry(value).or_default() += 1;
        }

        let mut value_counts: Vec<(String, usize)> = counts
            .into_iter()
            .map(|(value, count)| (value.to_string(), count))
            .collect();
        // BTreeMap order already breaks ties by value; a stable sort keeps it
        value_counts.sort_by(|a, b| b.1.cmp(&a.1));

        Self {
            indicator: indicator.to_string(),
            description: description.map(str::to_string),
            unique_values: value_counts.len(),
            value_counts,
        }
    }

    /// Share of counted rows holding `value`, in percent
    pub fn percentage(&self, value: &str) -> Option<f64> {
        let total: usize = self.value_counts.iter().map(|(_, c)| c).sum();
        let count = self
            .value_counts
            .iter()
            .find(|(v, _)| v == value)
            .map(|(_, c)| *c)?;
        Some(100.0 * count as f64 / total as f64)
    }
}
