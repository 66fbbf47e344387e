//! Polars export of pipeline results
//!
//! Missing and NaN values become nulls so the presentation layer renders
//! them as unknown, never as zero.

use polars::prelude::*;
use rights_core::JoinedTable;
use rights_correlation::CorrelationMatrix;
use rights_hypothesis::{GroupComparison, GroupSummary, Partition};

use crate::profile::IndicatorProfile;
use crate::report::RightsReport;
use crate::Result;

/// Conversion of a pipeline result into a Polars DataFrame
pub trait ToDataFrame {
    fn to_dataframe(&self) -> Result<DataFrame>;
}

fn column<T, P: ?Sized>(name: &str, values: T) -> Column
where
    Series: NamedFrom<T, P>,
{
    Series::new(PlSmallStr::from(name), values).into()
}

fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

impl ToDataFrame for JoinedTable {
    /// One row per joined territory, one column per indicator
    fn to_dataframe(&self) -> Result<DataFrame> {
        let rows = self.rows();
        let mut columns = vec![
            column(
                "territory",
                rows.iter().map(|r| r.territory.clone()).collect::<Vec<_>>(),
            ),
            column(
                "country",
                rows.iter().map(|r| r.country.clone()).collect::<Vec<_>>(),
            ),
            column(
                "democracy_index",
                rows.iter().map(|r| r.democracy_index).collect::<Vec<_>>(),
            ),
        ];
        for indicator in self.indicators() {
            let values: Vec<Option<String>> = rows
                .iter()
                .map(|r| r.value(indicator).map(str::to_string))
                .collect();
            columns.push(column(indicator, values));
        }
        Ok(DataFrame::new(columns)?)
    }
}

fn partition_label(summary: &GroupSummary) -> &'static str {
    match summary.partition {
        Partition::Positive => "positive",
        Partition::Negative => "negative",
    }
}

impl ToDataFrame for GroupComparison {
    /// Two rows (positive, negative); test columns are null if the test failed
    fn to_dataframe(&self) -> Result<DataFrame> {
        let groups = [self.positive, self.negative];
        let test = self.test.as_ref().ok();
        let statistic = test.map(|t| t.statistic).and_then(finite);

        Ok(DataFrame::new(vec![
            column("indicator", vec![self.indicator.clone(); 2]),
            column(
                "partition",
                groups.iter().map(partition_label).collect::<Vec<_>>(),
            ),
            column("n", groups.iter().map(|g| g.n as u64).collect::<Vec<_>>()),
            column(
                "mean",
                groups.iter().map(|g| finite(g.mean)).collect::<Vec<_>>(),
            ),
            column(
                "missing",
                groups.iter().map(|g| g.missing as u64).collect::<Vec<_>>(),
            ),
            column("t_statistic", vec![statistic; 2]),
            column("p_value", vec![test.map(|t| t.p_value); 2]),
            column("significant", vec![test.map(|t| t.is_significant()); 2]),
        ])?)
    }
}

impl ToDataFrame for CorrelationMatrix {
    /// Square frame: an `indicator` label column, then one column per indicator
    fn to_dataframe(&self) -> Result<DataFrame> {
        let mut columns = vec![column("indicator", self.indicators().to_vec())];
        for (j, name) in self.indicators().iter().enumerate() {
            let values: Vec<Option<f64>> = (0..self.len()).map(|i| self.get(i, j)).collect();
            columns.push(column(name, values));
        }
        Ok(DataFrame::new(columns)?)
    }
}

impl ToDataFrame for IndicatorProfile {
    fn to_dataframe(&self) -> Result<DataFrame> {
        let total: usize = self.value_counts.iter().map(|(_, c)| c).sum();
        Ok(DataFrame::new(vec![
            column(
                "value",
                self.value_counts.iter().map(|(v, _)| v.clone()).collect::<Vec<_>>(),
            ),
            column(
                "count",
                self.value_counts.iter().map(|(_, c)| *c as u64).collect::<Vec<_>>(),
            ),
            column(
                "percentage",
                self.value_counts
                    .iter()
                    .map(|(_, c)| 100.0 * *c as f64 / total as f64)
                    .collect::<Vec<_>>(),
            ),
        ])?)
    }
}

impl ToDataFrame for RightsReport {
    /// One summary row per configured indicator
    fn to_dataframe(&self) -> Result<DataFrame> {
        let mut indicator = Vec::new();
        let mut description = Vec::new();
        let mut positive_mean = Vec::new();
        let mut negative_mean = Vec::new();
        let mut p_value = Vec::new();
        let mut significant = Vec::new();
        let mut error = Vec::new();

        for section in &self.sections {
            indicator.push(section.profile.indicator.clone());
            description.push(section.profile.description.clone());
            match &section.comparison {
                Ok(c) => {
                    positive_mean.push(finite(c.positive.mean));
                    negative_mean.push(finite(c.negative.mean));
                    let test = c.test.as_ref();
                    p_value.push(test.ok().map(|t| t.p_value));
                    significant.push(test.ok().map(|t| t.is_significant()));
                    error.push(test.err().map(|e| e.to_string()));
                }
                Err(e) => {
                    positive_mean.push(None);
                    negative_mean.push(None);
                    p_value.push(None);
                    significant.push(None);
                    error.push(Some(e.to_string()));
                }
            }
        }

        Ok(DataFrame::new(vec![
            column("indicator", indicator),
            column("description", description),
            column("positive_mean", positive_mean),
            column("negative_mean", negative_mean),
            column("p_value", p_value),
            column("significant", significant),
            column("error", error),
        ])?)
    }
}
