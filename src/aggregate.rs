/// Aggregation of one gocov package into a Cobertura package.
///
/// Counts are per statement, not per distinct line: two statements on the
/// same line produce two `Line` entries and both count toward the totals.
use std::path::Path;

use log::debug;

use crate::error::Result;
use crate::gocov::{Function, Package};
use crate::group::{group_functions, ClassGroup};
use crate::lines::LineResolver;
use crate::model::*;

/// Build the report for a single package, resolving statement offsets
/// through `resolver`.
pub fn aggregate_package(package: &Package, resolver: &mut LineResolver) -> Result<PackageReport> {
    let mut classes = Vec::new();
    for group in group_functions(&package.functions) {
        classes.push(aggregate_class(&group, resolver)?);
    }

    let line_count = classes.iter().map(|c| c.line_count).sum();
    let line_hits = classes.iter().map(|c| c.line_hits).sum();

    debug!(
        "Package {}: {} classes, {}/{} statements covered",
        package.name,
        classes.len(),
        line_hits,
        line_count
    );

    Ok(PackageReport {
        name: package.name.clone(),
        line_rate: rate(line_hits, line_count),
        line_count,
        line_hits,
        classes,
    })
}

fn aggregate_class(group: &ClassGroup<'_>, resolver: &mut LineResolver) -> Result<ClassReport> {
    let mut class = ClassReport::new(group.name.to_string(), group.filename.to_string());
    for &(method_name, function) in &group.functions {
        class.push_method(aggregate_method(method_name, function, resolver)?);
    }
    class.line_rate = rate(class.line_hits, class.line_count);
    Ok(class)
}

fn aggregate_method(
    name: &str,
    function: &Function,
    resolver: &mut LineResolver,
) -> Result<MethodReport> {
    let path = Path::new(&function.file);
    let lines = function
        .statements
        .iter()
        .map(|s| {
            Ok(Line {
                number: resolver.resolve(path, s.start)?,
                hits: s.reached,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let line_count = lines.len() as u64;
    let line_hits = lines.iter().map(|l| l.hits).sum();

    Ok(MethodReport {
        name: name.to_string(),
        line_rate: rate(line_hits, line_count),
        line_count,
        line_hits,
        lines,
    })
}
