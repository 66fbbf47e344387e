//! Shared fixtures for hypothesis tests

use std::collections::BTreeMap;

use rights_core::{JoinedRecord, JoinedTable};

pub const INDICATOR: &str = "Same-sex marriage";

/// Joined table with one indicator column
pub fn joined(rows: &[(&str, &str, Option<f64>)]) -> JoinedTable {
    JoinedTable::new(
        vec![INDICATOR.to_string()],
        rows.iter()
            .map(|(territory, value, index)| JoinedRecord {
                territory: territory.to_string(),
                country: territory.to_string(),
                values: BTreeMap::from([(INDICATOR.to_string(), value.to_string())]),
                democracy_index: *index,
            })
            .collect(),
    )
}
