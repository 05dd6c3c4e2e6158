/// Input model for gocov's JSON report.
///
/// Reference: https://github.com/axw/gocov
///
/// Format:
///   { "Packages": [
///       { "Name": "example.com/pkg",
///         "Functions": [
///           { "Name": "Type.Method", "File": "/src/pkg/file.go",
///             "Statements": [ { "Start": 120, "Reached": 3 }, ... ] } ] } ] }
///
/// Statement offsets are byte offsets into `File`; line numbers are not part
/// of the report and have to be recovered from the source (see `lines`).
use std::io::Read;

use serde::Deserialize;

use crate::error::Result;

/// A complete gocov report.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GocovReport {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub packages: Vec<Package>,
}

/// One Go package and the functions instrumented in it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Package {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub functions: Vec<Function>,
}

/// A function or method. `name` is dot-qualified for methods
/// (`Type.Method`, `(*Type).Method`) and bare for package-level functions.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Function {
    pub name: String,
    pub file: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub statements: Vec<Statement>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Statement {
    /// Byte offset of the statement in the source file.
    pub start: usize,
    /// Execution count; 0 means uncovered.
    pub reached: u64,
}

/// gocov writes `null` for empty slices.
fn null_as_empty<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decode a gocov report from a reader.
pub fn parse<R: Read>(reader: R) -> Result<GocovReport> {
    Ok(serde_json::from_reader(reader)?)
}
