//! Shared fixtures for join tests

use rights_core::{DemocracyRecord, DemocracyTable, Record, RightsTable};

pub const INDICATOR: &str = "Same-sex marriage";

/// Rights table with one indicator, every territory set to "Yes"
pub fn rights_table(names: &[String]) -> RightsTable {
    RightsTable::new(
        vec![INDICATOR.to_string()],
        names
            .iter()
            .map(|name| Record::new(name.as_str()).with_value(INDICATOR, "Yes"))
            .collect(),
    )
    .unwrap()
}

/// Democracy table with a constant index per country
pub fn democracy_table(names: &[String], index: f64) -> DemocracyTable {
    DemocracyTable::new(
        names
            .iter()
            .map(|name| DemocracyRecord::new(name.as_str(), index))
            .collect(),
    )
    .unwrap()
}
