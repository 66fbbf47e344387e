//! Join-and-aggregate pipeline for LGBTQ+ legal-rights indicators
//!
//! Umbrella crate re-exporting the workspace members:
//!
//! - [`data`]: data model, key normalisation, error type
//! - [`join`]: inner join on normalised territory/country name
//! - [`hypothesis`]: group means and Welch's t-test
//! - [`correlation`]: pairwise-complete Pearson matrix
//! - [`report`]: CSV loaders, configuration, report assembly, DataFrame export
//!
//! # Example
//!
//! ```rust
//! use rights_stats::data::{DemocracyRecord, DemocracyTable, Record, RightsTable};
//! use rights_stats::hypothesis::group_means;
//! use rights_stats::join::join;
//!
//! let rights = RightsTable::new(
//!     vec!["Same-sex marriage".to_string()],
//!     vec![
//!         Record::new("Utopia").with_value("Same-sex marriage", "Yes"),
//!         Record::new("Dystopia").with_value("Same-sex marriage", "No"),
//!         Record::new("Limbo").with_value("Same-sex marriage", "Unknown"),
//!     ],
//! )
//! .unwrap();
//! let democracy = DemocracyTable::new(vec![
//!     DemocracyRecord::new("Utopia", 9.0),
//!     DemocracyRecord::new("Dystopia", 3.0),
//!     DemocracyRecord::new("Limbo", 5.0),
//! ])
//! .unwrap();
//!
//! let outcome = join(&rights, &democracy);
//! let (yes, rest) = group_means(&outcome.table, "Same-sex marriage", "Yes").unwrap();
//! assert_eq!((yes.n, yes.mean), (1, 9.0));
//! assert_eq!((rest.n, rest.mean), (2, 4.0));
//! ```

pub use rights_core as data;
pub use rights_correlation as correlation;
pub use rights_hypothesis as hypothesis;
pub use rights_join as join;
pub use rights_report as report;

pub use rights_core::{Error, Result};
