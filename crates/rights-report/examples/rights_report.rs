//! Print a full rights/democracy report for two CSV files
//!
//! ```text
//! RUST_LOG=debug cargo run -p rights-report --example rights_report -- \
//!     lgbtq_rights_by_country.csv democracy_index.csv [config.json]
//! ```
//!
//! Without arguments the bundled sample data is used.

use std::path::PathBuf;

use rights_report::{
    build_report, load_democracy_path, load_rights_path, ReportConfig, ToDataFrame,
    SIGNIFICANCE_LEVEL,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let data_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data");
    let mut args = std::env::args().skip(1);
    let rights_path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| data_dir.join("rights_sample.csv"));
    let democracy_path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| data_dir.join("democracy_sample.csv"));
    let config = match args.next() {
        Some(path) => ReportConfig::from_path(path)?,
        None => ReportConfig::default(),
    };

    info!("Loading {} and {}", rights_path.display(), democracy_path.display());
    let rights = load_rights_path(&rights_path, &config.territory_column)?;
    let democracy = load_democracy_path(&democracy_path)?;

    let report = build_report(&rights, &democracy, &config)?;

    println!("=== Dataset overview ===");
    println!("Number of territories: {}", report.overview.territory_count);
    println!("Columns: {:?}", report.overview.columns);
    println!();

    println!("=== Join ===");
    println!("Matched: {}", report.join.matched);
    println!("Territories without a democracy index: {:?}", report.join.unmatched_rights);
    println!("Countries without rights data: {:?}", report.join.unmatched_democracy);
    println!();

    for section in &report.sections {
        println!("=== {} ===", section.profile.indicator);
        if let Some(description) = &section.profile.description {
            println!("{description}");
        }
        println!("Unique values: {}", section.profile.unique_values);
        println!("{}", section.profile.to_dataframe()?);
        match &section.comparison {
            Ok(comparison) => println!("{}", comparison.to_dataframe()?),
            Err(e) => println!("No comparison: {e}"),
        }
        println!();
    }

    println!("=== Summary (significance level {SIGNIFICANCE_LEVEL}) ===");
    println!("{}", report.to_dataframe()?);
    println!("Significant: {:?}", report.significant_indicators());
    println!();

    println!("=== Correlation ===");
    match &report.correlation {
        Ok(matrix) => println!("{}", matrix.to_dataframe()?),
        Err(e) => println!("No correlation matrix: {e}"),
    }

    Ok(())
}
