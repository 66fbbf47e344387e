//! Full report: profile, join, per-indicator comparison and correlation

use rights_core::{DemocracyTable, JoinedTable, RightsTable};
use rights_correlation::{correlation_matrix, CorrelationMatrix};
use rights_hypothesis::{compare_groups, GroupComparison};
use rights_join::join;
use tracing::{info, instrument, warn};

use crate::config::ReportConfig;
use crate::profile::{DatasetOverview, IndicatorProfile};
use crate::Result;

/// How the two sources lined up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinSummary {
    pub matched: usize,
    pub unmatched_rights: Vec<String>,
    pub unmatched_democracy: Vec<String>,
}

/// Everything reported for one indicator
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorSection {
    pub profile: IndicatorProfile,
    /// Group means and Welch test, or why they could not be computed
    pub comparison: rights_core::Result<GroupComparison>,
}

/// Output of [`build_report`], consumed by the presentation layer
#[derive(Debug, Clone, PartialEq)]
pub struct RightsReport {
    pub overview: DatasetOverview,
    pub join: JoinSummary,
    pub joined: JoinedTable,
    pub sections: Vec<IndicatorSection>,
    /// Over the configured indicators present in the data
    pub correlation: rights_core::Result<CorrelationMatrix>,
}

impl RightsReport {
    pub fn section(&self, indicator: &str) -> Option<&IndicatorSection> {
        self.sections.iter().find(|s| s.profile.indicator == indicator)
    }

    /// Indicators whose democracy-index difference is significant
    pub fn significant_indicators(&self) -> Vec<&str> {
        self.sections
            .iter()
            .filter_map(|s| s.comparison.as_ref().ok())
            .filter(|c| c.is_significant())
            .map(|c| c.indicator.as_str())
            .collect()
    }
}

/// Assemble the report from freshly loaded tables.
///
/// Fails only when both tables have rows and none of them join. Any
/// per-indicator failure is recorded in its section and the rest of the
/// report is still computed.
#[instrument(skip_all, fields(rights = rights.len(), democracy = democracy.len()))]
pub fn build_report(
    rights: &RightsTable,
    democracy: &DemocracyTable,
    config: &ReportConfig,
) -> Result<RightsReport> {
    let overview = DatasetOverview::from_table(rights, &config.territory_column);

    let outcome = join(rights, democracy);
    let joined = outcome.require_matches()?.clone();
    info!(
        "Joined {} of {} territories ({} rights and {} democracy rows dropped)",
        joined.len(),
        rights.len(),
        outcome.unmatched_rights.len(),
        outcome.unmatched_democracy.len()
    );

    let sections = config
        .indicators
        .iter()
        .map(|spec| {
            let profile = IndicatorProfile::from_table(rights, &spec.name, Some(&spec.description));
            let comparison = compare_groups(&joined, &spec.name, &config.target_value);
            if let Err(e) = &comparison {
                warn!("Section {:?} has no comparison: {}", spec.name, e);
            }
            IndicatorSection {
                profile,
                comparison,
            }
        })
        .collect();

    let present: Vec<&str> = config
        .indicator_names()
        .into_iter()
        .filter(|name| {
            let ok = joined.ensure_indicator(name).is_ok();
            if !ok {
                warn!("Indicator {:?} left out of the correlation matrix", name);
            }
            ok
        })
        .collect();
    let correlation = correlation_matrix(&joined, &present, &config.encoding);

    Ok(RightsReport {
        overview,
        join: JoinSummary {
            matched: joined.len(),
            unmatched_rights: outcome.unmatched_rights,
            unmatched_democracy: outcome.unmatched_democracy,
        },
        joined,
        sections,
        correlation,
    })
}
