//! Report layer for the rights/democracy pipeline
//!
//! Loads both sources from CSV, reads a [`ReportConfig`], runs the join,
//! group comparisons and correlation matrix, and hands the results to a
//! presentation layer as plain structs or Polars DataFrames.
//!
//! # Example
//!
//! ```rust,ignore
//! use rights_report::{
//!     build_report, load_democracy_path, load_rights_path, ReportConfig, ToDataFrame,
//! };
//!
//! let config = ReportConfig::default();
//! let rights = load_rights_path("lgbtq_rights_by_country.csv", &config.territory_column)?;
//! let democracy = load_democracy_path("democracy_index.csv")?;
//!
//! let report = build_report(&rights, &democracy, &config)?;
//! println!("{}", report.to_dataframe()?);
//! ```

mod config;
mod error;
mod frame;
mod loader;
mod profile;
mod report;

pub use config::*;
pub use error::{Error, Result};
pub use frame::ToDataFrame;
pub use loader::*;
pub use profile::{DatasetOverview, IndicatorProfile};
pub use report::{build_report, IndicatorSection, JoinSummary, RightsReport};

// Re-export the pipeline types a presentation layer needs
pub use rights_correlation::{CorrelationMatrix, Encoding};
pub use rights_hypothesis::{GroupComparison, GroupSummary, TTestResult, SIGNIFICANCE_LEVEL};
