//! Key-based inner join of the rights table with the democracy index
//!
//! Territories are matched to countries by normalised name only (trimmed,
//! lowercased). There is no alias table, so naming differences between the
//! two sources drop rows. Those drops are reported in [`JoinOutcome`] and
//! logged, never swallowed.
//!
//! # Example
//!
//! ```rust
//! use rights_core::{DemocracyRecord, DemocracyTable, Record, RightsTable};
//! use rights_join::join;
//!
//! let rights = RightsTable::new(
//!     vec!["Same-sex marriage".to_string()],
//!     vec![
//!         Record::new("Utopia").with_value("Same-sex marriage", "Yes"),
//!         Record::new("South Korea").with_value("Same-sex marriage", "No"),
//!     ],
//! )
//! .unwrap();
//! let democracy = DemocracyTable::new(vec![
//!     DemocracyRecord::new("UTOPIA", 9.0),
//!     DemocracyRecord::new("Republic of Korea", 8.0),
//! ])
//! .unwrap();
//!
//! let outcome = join(&rights, &democracy);
//! assert_eq!(outcome.table.len(), 1);
//! assert_eq!(outcome.unmatched_rights, vec!["South Korea".to_string()]);
//! ```

use std::collections::{HashMap, HashSet};

use rights_core::{
    DemocracyRecord, DemocracyTable, Error, JoinedRecord, JoinedTable, Result, RightsTable,
};
use tracing::{debug, instrument, warn};

/// Result of [`join`]: the surviving rows plus every name that was dropped
#[derive(Debug, Clone, PartialEq, Default)]
pub struct JoinOutcome {
    /// Matched rows, in rights input order
    pub table: JoinedTable,
    /// Rights territories with no democracy counterpart, in input order
    pub unmatched_rights: Vec<String>,
    /// Democracy countries with no rights counterpart, in input order
    pub unmatched_democracy: Vec<String>,
}

impl JoinOutcome {
    /// Number of rows dropped from both sides
    pub fn dropped(&self) -> usize {
        self.unmatched_rights.len() + self.unmatched_democracy.len()
    }

    /// Checked view of the join.
    ///
    /// Fails with `JoinKeyMismatch` when both sources had rows but none
    /// matched. An empty source still yields an empty, valid table.
    pub fn require_matches(&self) -> Result<&JoinedTable> {
        let rights = self.table.len() + self.unmatched_rights.len();
        let democracy = self.table.len() + self.unmatched_democracy.len();
        if self.table.is_empty() && rights > 0 && democracy > 0 {
            return Err(Error::JoinKeyMismatch { rights, democracy });
        }
        Ok(&self.table)
    }
}

/// Inner join on normalised territory/country name.
///
/// An empty input on either side produces an empty result. A democracy row
/// with a missing index still joins; the index stays missing on the output.
#[instrument(skip_all, fields(rights = rights.len(), democracy = democracy.len()))]
pub fn join(rights: &RightsTable, democracy: &DemocracyTable) -> JoinOutcome {
    let by_key: HashMap<String, &DemocracyRecord> = democracy
        .records()
        .iter()
        .map(|row| (row.key(), row))
        .collect();

    let mut rows = Vec::with_capacity(rights.len().min(democracy.len()));
    let mut unmatched_rights = Vec::new();
    let mut matched_keys = HashSet::new();

    for record in rights.records() {
        let key = record.key();
        match by_key.get(&key) {
            Some(row) => {
                rows.push(JoinedRecord::from_pair(record, row));
                matched_keys.insert(key);
            }
            None => unmatched_rights.push(record.territory().to_string()),
        }
    }

    let unmatched_democracy: Vec<String> = democracy
        .records()
        .iter()
        .filter(|row| !matched_keys.contains(&row.key()))
        .map(|row| row.country().to_string())
        .collect();

    let missing_index = rows.iter().filter(|row| row.democracy_index.is_none()).count();
    debug!(
        "Joined {} rows ({} with missing democracy index)",
        rows.len(),
        missing_index
    );
    if !unmatched_rights.is_empty() {
        warn!(
            "{} territories had no democracy-index match: {:?}",
            unmatched_rights.len(),
            unmatched_rights
        );
    }
    if !unmatched_democracy.is_empty() {
        debug!(
            "{} democracy-index countries had no rights match",
            unmatched_democracy.len()
        );
    }

    JoinOutcome {
        table: JoinedTable::new(rights.indicators().to_vec(), rows),
        unmatched_rights,
        unmatched_democracy,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rights_core::Record;

    fn rights(names: &[&str]) -> RightsTable {
        RightsTable::new(
            vec!["Same-sex marriage".to_string()],
            names
                .iter()
                .map(|n| Record::new(*n).with_value("Same-sex marriage", "Yes"))
                .collect(),
        )
        .unwrap()
    }

    fn democracy(rows: &[(&str, f64)]) -> DemocracyTable {
        DemocracyTable::new(
            rows.iter()
                .map(|(c, v)| DemocracyRecord::new(*c, *v))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_join_follows_rights_order() {
        let outcome = join(
            &rights(&["B", "A", "C"]),
            &democracy(&[("a", 1.0), ("c", 3.0), ("b", 2.0)]),
        );
        let names: Vec<&str> = outcome
            .table
            .rows()
            .iter()
            .map(|r| r.territory.as_str())
            .collect();
        assert_eq!(names, vec!["B", "A", "C"]);
        assert_eq!(outcome.table.rows()[0].country, "b");
        assert_eq!(outcome.table.rows()[0].democracy_index, Some(2.0));
    }

    #[test]
    fn test_join_keeps_missing_index_rows() {
        let table = DemocracyTable::new(vec![DemocracyRecord::parse("A", "n/a")]).unwrap();
        let outcome = join(&rights(&["A"]), &table);
        assert_eq!(outcome.table.len(), 1);
        assert_eq!(outcome.table.rows()[0].democracy_index, None);
    }

    #[test]
    fn test_empty_inputs_are_not_errors() {
        let outcome = join(&rights(&[]), &democracy(&[("A", 1.0)]));
        assert!(outcome.table.is_empty());
        assert!(outcome.require_matches().is_ok());

        let outcome = join(&rights(&["A"]), &democracy(&[]));
        assert!(outcome.table.is_empty());
        assert!(outcome.require_matches().is_ok());
    }

    #[test]
    fn test_require_matches_flags_key_mismatch() {
        let outcome = join(&rights(&["South Korea"]), &democracy(&[("Republic of Korea", 8.0)]));
        assert_eq!(outcome.dropped(), 2);
        assert_eq!(
            outcome.require_matches(),
            Err(Error::JoinKeyMismatch {
                rights: 1,
                democracy: 1
            })
        );
    }
}
