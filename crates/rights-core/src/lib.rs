//! Core types for the rights/democracy join-and-aggregate pipeline
//!
//! This crate holds what every pipeline stage shares: the error type, the
//! tabular data model for both sources and their join, key normalisation,
//! and a couple of descriptive helpers.
//!
//! All tables are immutable values. Each stage takes its inputs explicitly
//! and returns new derived data.
//!
//! # Example
//!
//! ```rust
//! use rights_core::{DemocracyRecord, Record, RightsTable};
//!
//! let rights = RightsTable::new(
//!     vec!["Same-sex marriage".to_string()],
//!     vec![Record::new("Utopia").with_value("Same-sex marriage", "Yes")],
//! )
//! .unwrap();
//!
//! let row = DemocracyRecord::parse("utopia ", "9.0");
//! assert_eq!(rights.records()[0].key(), row.key());
//! ```

pub mod descriptive;
pub mod error;
pub mod normalize;
pub mod types;

pub use error::{Error, Result};
pub use normalize::{normalize_key, parse_democracy_index, DEMOCRACY_INDEX_RANGE};
pub use types::{DemocracyRecord, DemocracyTable, JoinedRecord, JoinedTable, Record, RightsTable};
