//! Group statistics and significance testing over joined rows
//!
//! Rows are split by whether an indicator equals a target value (usually
//! "Yes"). The democracy index of each side is summarised, and Welch's
//! t-test decides whether the difference is significant at the fixed
//! [`SIGNIFICANCE_LEVEL`].
//!
//! The negative side merges "No", "Unknown" and any other value. That
//! policy changes the reported statistics and is kept deliberately; see
//! [`group_means`].
//!
//! # Example
//!
//! ```rust
//! use rights_hypothesis::welch_t_test;
//!
//! let free = [9.8, 9.5, 9.1, 8.9];
//! let restricted = [2.1, 3.4, 2.8, 3.9];
//!
//! let result = welch_t_test(&free, &restricted).unwrap();
//! assert!(result.statistic > 0.0);
//! assert!(result.is_significant());
//! ```

mod compare;
mod group;
mod welch;

pub use compare::{compare_groups, GroupComparison};
pub use group::{group_means, partition, GroupSummary, Partition, PartitionedSamples};
pub use welch::{welch_t_test, TTestResult, SIGNIFICANCE_LEVEL};
