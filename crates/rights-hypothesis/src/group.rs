//! Boolean partitioning of joined rows and per-partition means

use rights_core::descriptive::mean;
use rights_core::{JoinedTable, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Side of an indicator partition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Partition {
    /// Rows whose indicator equals the target value
    Positive,
    /// Every other row, including "No", "Unknown" and absent cells
    Negative,
}

/// Democracy-index summary for one side of a partition
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GroupSummary {
    pub partition: Partition,
    /// Rows with a present democracy index
    pub n: usize,
    /// Mean over present values; NaN when `n == 0`
    pub mean: f64,
    /// Rows excluded because their democracy index is missing
    pub missing: usize,
}

impl GroupSummary {
    /// All rows that fell on this side, present or not
    pub fn rows(&self) -> usize {
        self.n + self.missing
    }
}

/// Democracy-index samples split by an indicator value
#[derive(Debug, Clone, PartialEq)]
pub struct PartitionedSamples {
    pub indicator: String,
    pub target_value: String,
    pub positive: Vec<f64>,
    pub negative: Vec<f64>,
    pub positive_missing: usize,
    pub negative_missing: usize,
}

impl PartitionedSamples {
    /// Summaries for (positive, negative)
    pub fn summaries(&self) -> (GroupSummary, GroupSummary) {
        (
            GroupSummary {
                partition: Partition::Positive,
                n: self.positive.len(),
                mean: mean(&self.positive),
                missing: self.positive_missing,
            },
            GroupSummary {
                partition: Partition::Negative,
                n: self.negative.len(),
                mean: mean(&self.negative),
                missing: self.negative_missing,
            },
        )
    }
}

/// Split joined rows into `indicator == target_value` and everything else.
///
/// Cells are compared after trimming, case-sensitively. "No" and "Unknown"
/// both land in the negative partition.
#[instrument(skip(joined), fields(rows = joined.len()))]
pub fn partition(
    joined: &JoinedTable,
    indicator: &str,
    target_value: &str,
) -> Result<PartitionedSamples> {
    joined.ensure_indicator(indicator)?;

    let target = target_value.trim();
    let mut samples = PartitionedSamples {
        indicator: indicator.to_string(),
        target_value: target_value.to_string(),
        positive: Vec::new(),
        negative: Vec::new(),
        positive_missing: 0,
        negative_missing: 0,
    };

    for row in joined.rows() {
        let is_positive = row.value(indicator).map(str::trim) == Some(target);
        match (is_positive, row.democracy_index) {
            (true, Some(index)) => samples.positive.push(index),
            (true, None) => samples.positive_missing += 1,
            (false, Some(index)) => samples.negative.push(index),
            (false, None) => samples.negative_missing += 1,
        }
    }

    debug!(
        "Partitioned {:?}: {} positive ({} missing), {} negative ({} missing)",
        indicator,
        samples.positive.len(),
        samples.positive_missing,
        samples.negative.len(),
        samples.negative_missing
    );
    Ok(samples)
}

/// Mean democracy index for the positive and negative partitions
pub fn group_means(
    joined: &JoinedTable,
    indicator: &str,
    target_value: &str,
) -> Result<(GroupSummary, GroupSummary)> {
    Ok(partition(joined, indicator, target_value)?.summaries())
}
