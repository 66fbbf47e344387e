//! Structural properties of the correlation matrix

use std::collections::BTreeMap;

use approx::assert_abs_diff_eq;
use proptest::prelude::*;
use rights_core::{Error, JoinedRecord, JoinedTable};
use rights_correlation::{correlation_matrix, Encoding};

const INDICATORS: [&str; 3] = [
    "Same-sex marriage",
    "Adoption by same-sex couples",
    "Anti-discrimination laws",
];

fn table(rows: &[[&str; 3]]) -> JoinedTable {
    JoinedTable::new(
        INDICATORS.iter().map(|s| s.to_string()).collect(),
        rows.iter()
            .enumerate()
            .map(|(i, cells)| JoinedRecord {
                territory: format!("T{i}"),
                country: format!("T{i}"),
                values: INDICATORS
                    .iter()
                    .zip(cells)
                    .map(|(name, cell)| (name.to_string(), cell.to_string()))
                    .collect::<BTreeMap<_, _>>(),
                democracy_index: Some(5.0),
            })
            .collect(),
    )
}

#[test]
fn test_matrix_known_values() {
    let joined = table(&[
        ["Yes", "Yes", "No"],
        ["Yes", "No", "No"],
        ["No", "No", "Yes"],
        ["No", "Unknown", "Yes"],
    ]);
    let matrix = correlation_matrix(&joined, &INDICATORS, &Encoding::yes_no()).unwrap();

    assert_eq!(matrix.len(), 3);
    // marriage vs anti-discrimination are perfect opposites here
    assert_abs_diff_eq!(matrix.get(0, 2).unwrap(), -1.0, epsilon = 1e-12);
    // marriage vs adoption over the three complete rows: (1,1), (1,0), (0,0)
    assert_abs_diff_eq!(matrix.get(0, 1).unwrap(), 0.5, epsilon = 1e-12);
    assert_eq!(matrix.observations(0, 1), Some(3));
    assert_eq!(matrix.observations(0, 2), Some(4));
}

#[test]
fn test_sparse_column_yields_missing_entries() {
    let joined = table(&[
        ["Yes", "Unknown", "No"],
        ["No", "Pending", "Yes"],
        ["Yes", "Yes", "No"],
    ]);
    let matrix = correlation_matrix(&joined, &INDICATORS, &Encoding::yes_no()).unwrap();

    assert_eq!(matrix.get(1, 1), None);
    assert_eq!(matrix.get(0, 1), None);
    assert_abs_diff_eq!(matrix.get(0, 2).unwrap(), -1.0, epsilon = 1e-12);
}

#[test]
fn test_unknown_indicator_is_missing_column() {
    let joined = table(&[["Yes", "Yes", "Yes"]]);
    let result = correlation_matrix(&joined, &["Blood donation"], &Encoding::yes_no());
    assert_eq!(result, Err(Error::MissingColumn("Blood donation".to_string())));
}

fn cell() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["Yes", "No", "Unknown", "Partial"])
}

proptest! {
    #[test]
    fn prop_matrix_is_symmetric_and_bounded(
        rows in prop::collection::vec([cell(), cell(), cell()], 0..40)
    ) {
        let joined = table(&rows);
        let matrix = correlation_matrix(&joined, &INDICATORS, &Encoding::yes_no()).unwrap();

        for i in 0..matrix.len() {
            let observed = matrix.observations(i, i).unwrap();
            if observed >= 2 {
                prop_assert_eq!(matrix.get(i, i), Some(1.0));
            }
            for j in 0..matrix.len() {
                prop_assert_eq!(matrix.get(i, j), matrix.get(j, i));
                if i != j {
                    if let Some(r) = matrix.get(i, j) {
                        prop_assert!((-1.0..=1.0).contains(&r));
                    }
                }
            }
        }
    }
}
