//! Shared fixtures for report tests

use std::path::PathBuf;

use rights_core::{DemocracyRecord, DemocracyTable, Record, RightsTable};

pub const MARRIAGE: &str = "Same-sex marriage";

/// Path to a file under the crate's `data/` directory
pub fn data_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data").join(name)
}

/// The three-territory scenario: one "Yes", one "No", one "Unknown"
pub fn scenario() -> (RightsTable, DemocracyTable) {
    let rights = RightsTable::new(
        vec![MARRIAGE.to_string()],
        vec![
            Record::new("Utopia").with_value(MARRIAGE, "Yes"),
            Record::new("Dystopia").with_value(MARRIAGE, "No"),
            Record::new("Limbo").with_value(MARRIAGE, "Unknown"),
        ],
    )
    .unwrap();
    let democracy = DemocracyTable::new(vec![
        DemocracyRecord::new("Utopia", 9.0),
        DemocracyRecord::new("Dystopia", 3.0),
        DemocracyRecord::new("Limbo", 5.0),
    ])
    .unwrap();
    (rights, democracy)
}
