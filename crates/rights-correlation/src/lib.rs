//! Correlation between categorical rights indicators
//!
//! Indicator cells are encoded to 1.0 / 0.0 / missing with an [`Encoding`]
//! and correlated pairwise with the standard Pearson formula. Missing values
//! are excluded per pair, never imputed, so one sparse column does not shrink
//! every other entry of the matrix.
//!
//! # Example
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use rights_core::{JoinedRecord, JoinedTable};
//! use rights_correlation::{correlation_matrix, Encoding};
//!
//! let row = |marriage: &str, adoption: &str| JoinedRecord {
//!     territory: "T".to_string(),
//!     country: "T".to_string(),
//!     values: BTreeMap::from([
//!         ("Marriage".to_string(), marriage.to_string()),
//!         ("Adoption".to_string(), adoption.to_string()),
//!     ]),
//!     democracy_index: None,
//! };
//! let joined = JoinedTable::new(
//!     vec!["Marriage".to_string(), "Adoption".to_string()],
//!     vec![row("Yes", "Yes"), row("No", "No"), row("Unknown", "Yes")],
//! );
//!
//! let indicators = ["Marriage", "Adoption"];
//! let matrix = correlation_matrix(&joined, &indicators, &Encoding::yes_no()).unwrap();
//! assert_eq!(matrix.get(0, 0), Some(1.0));
//! assert_eq!(matrix.get_by_name("Marriage", "Adoption"), Some(1.0));
//! assert_eq!(matrix.observations(0, 1), Some(2));
//! ```

mod encoding;
mod matrix;

pub use encoding::Encoding;
pub use matrix::{correlation_matrix, pairwise_pearson, CorrelationMatrix};
