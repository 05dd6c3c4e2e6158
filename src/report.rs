//! Top-level conversion: aggregate every package and assemble the report
//! root with overall totals and a timestamp.

use log::debug;

use crate::aggregate::aggregate_package;
use crate::error::Result;
use crate::gocov::GocovReport;
use crate::lines::LineResolver;
use crate::model::{rate, Coverage, PackageReport};

/// Version written to the `version` attribute of `<coverage>`.
pub const FORMAT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Current wall-clock time in milliseconds since the Unix epoch.
#[must_use]
pub fn timestamp_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Combine package reports into the report root.
#[must_use]
pub fn assemble(packages: Vec<PackageReport>, timestamp: i64) -> Coverage {
    let line_count: u64 = packages.iter().map(|p| p.line_count).sum();
    let line_hits: u64 = packages.iter().map(|p| p.line_hits).sum();

    Coverage {
        line_rate: rate(line_hits, line_count),
        version: FORMAT_VERSION.to_string(),
        timestamp,
        packages,
    }
}

/// Convert a decoded gocov report. Source files are read through `resolver`;
/// the first failure aborts the conversion.
pub fn convert(report: &GocovReport, resolver: &mut LineResolver) -> Result<Coverage> {
    let packages = report
        .packages
        .iter()
        .map(|p| aggregate_package(p, resolver))
        .collect::<Result<Vec<_>>>()?;

    let coverage = assemble(packages, timestamp_millis());
    debug!(
        "Converted {} packages from {} source files, {}/{} statements covered",
        coverage.packages.len(),
        resolver.cached_files(),
        coverage.line_hits(),
        coverage.line_count()
    );
    Ok(coverage)
}
