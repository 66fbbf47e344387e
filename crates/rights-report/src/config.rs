//! Report configuration
//!
//! The indicator list doubles as the static indicator → description mapping
//! handed to the presentation layer.

use std::fs;
use std::path::Path;

use rights_correlation::Encoding;
use serde::{Deserialize, Serialize};

use crate::Result;

/// One indicator column and the text shown next to its section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicatorSpec {
    pub name: String,
    pub description: String,
}

impl IndicatorSpec {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Everything `build_report` needs besides the two tables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Key column of the rights CSV
    pub territory_column: String,
    /// Indicators to report on, in display order
    pub indicators: Vec<IndicatorSpec>,
    /// Value defining the positive partition
    pub target_value: String,
    /// Binary encoding used by the correlation matrix
    pub encoding: Encoding,
}

impl ReportConfig {
    /// Parse a JSON config; omitted fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Description for `indicator`, if configured
    pub fn description(&self, indicator: &str) -> Option<&str> {
        self.indicators
            .iter()
            .find(|spec| spec.name == indicator)
            .map(|spec| spec.description.as_str())
    }

    pub fn indicator_names(&self) -> Vec<&str> {
        self.indicators.iter().map(|spec| spec.name.as_str()).collect()
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            territory_column: "Territory".to_string(),
            indicators: vec![
                IndicatorSpec::new(
                    "Same-sex sexual activity",
                    "Whether consensual same-sex sexual activity is legal.",
                ),
                IndicatorSpec::new(
                    "Recognition of same-sex unions",
                    "Whether same-sex couples can enter civil unions or registered partnerships.",
                ),
                IndicatorSpec::new(
                    "Same-sex marriage",
                    "Whether same-sex couples can legally marry.",
                ),
                IndicatorSpec::new(
                    "Adoption by same-sex couples",
                    "Whether same-sex couples can jointly adopt children.",
                ),
                IndicatorSpec::new(
                    "LGB people allowed to serve openly in military?",
                    "Whether lesbian, gay and bisexual people can serve openly in the military.",
                ),
                IndicatorSpec::new(
                    "Anti-discrimination laws concerning sexual orientation",
                    "Whether law protects against discrimination based on sexual orientation.",
                ),
                IndicatorSpec::new(
                    "Laws concerning gender identity/expression",
                    "Whether legal gender change or gender-identity protections exist.",
                ),
            ],
            target_value: "Yes".to_string(),
            encoding: Encoding::yes_no(),
        }
    }
}
