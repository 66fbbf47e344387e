//! Group means and significance test for one indicator in a single pass

use rights_core::{JoinedTable, Result};
use tracing::{instrument, warn};

use crate::group::{partition, GroupSummary};
use crate::welch::{welch_t_test, TTestResult};

/// Positive/negative summaries with the Welch test between them
#[derive(Debug, Clone, PartialEq)]
pub struct GroupComparison {
    pub indicator: String,
    pub target_value: String,
    pub positive: GroupSummary,
    pub negative: GroupSummary,
    /// Test failure stays local to this comparison
    pub test: Result<TTestResult>,
}

impl GroupComparison {
    /// Significance at the fixed 0.05 level; false whenever the test failed
    pub fn is_significant(&self) -> bool {
        self.test.as_ref().map_or(false, TTestResult::is_significant)
    }
}

/// Compare the democracy index of `indicator == target_value` rows against
/// the rest.
///
/// Only a schema problem (`MissingColumn`) fails the call. A partition too
/// small or too uniform to test is recorded in `test`.
#[instrument(skip(joined), fields(rows = joined.len()))]
pub fn compare_groups(
    joined: &JoinedTable,
    indicator: &str,
    target_value: &str,
) -> Result<GroupComparison> {
    let samples = partition(joined, indicator, target_value)?;
    let (positive, negative) = samples.summaries();

    let test = welch_t_test(&samples.positive, &samples.negative);
    if let Err(e) = &test {
        warn!("No significance test for {:?}: {}", indicator, e);
    }

    Ok(GroupComparison {
        indicator: indicator.to_string(),
        target_value: target_value.to_string(),
        positive,
        negative,
        test,
    })
}
