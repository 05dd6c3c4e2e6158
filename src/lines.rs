/// Byte offset to line number resolution for source files.
///
/// gocov reports statements by byte offset. Each source file is read once,
/// its line starts are recorded in a `LineTable`, and the table is cached in
/// the `LineResolver` for the rest of the conversion.
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{Error, Result};

/// Offsets at which each line of a file begins.
#[derive(Debug, Clone)]
pub struct LineTable {
    /// `starts[i]` is the offset of line `i + 1`. Always begins with 0.
    starts: Vec<usize>,
    size: usize,
}

impl LineTable {
    pub fn new(content: &[u8]) -> Self {
        let size = content.len();
        let mut starts = vec![0];
        for (i, &b) in content.iter().enumerate() {
            // A trailing newline does not open a new line.
            if b == b'\n' && i + 1 < size {
                starts.push(i + 1);
            }
        }
        Self { starts, size }
    }

    /// 1-based line containing `offset`, or `None` if it lies past the end
    /// of the file. The end-of-file offset itself belongs to the last line.
    #[must_use]
    pub fn line(&self, offset: usize) -> Option<usize> {
        if offset > self.size {
            return None;
        }
        // Number of line starts <= offset.
        Some(self.starts.partition_point(|&start| start <= offset))
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.starts.len()
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }
}

/// Per-run cache of line tables keyed by source path.
#[derive(Debug, Default)]
pub struct LineResolver {
    tables: HashMap<PathBuf, LineTable>,
}

impl LineResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve `offset` in `path` to a 1-based line number, reading and
    /// caching the file on first use.
    pub fn resolve(&mut self, path: &Path, offset: usize) -> Result<usize> {
        let table = self.table(path)?;
        table.line(offset).ok_or_else(|| Error::OffsetOutOfRange {
            path: path.to_path_buf(),
            offset,
            size: table.size(),
        })
    }

    /// Number of distinct files read so far.
    #[must_use]
    pub fn cached_files(&self) -> usize {
        self.tables.len()
    }

    fn table(&mut self, path: &Path) -> Result<&LineTable> {
        if !self.tables.contains_key(path) {
            let content = std::fs::read(path).map_err(|source| Error::SourceFile {
                path: path.to_path_buf(),
                source,
            })?;
            let table = LineTable::new(&content);
            debug!(
                "Indexed {} ({} bytes, {} lines)",
                path.display(),
                table.size(),
                table.line_count()
            );
            self.tables.insert(path.to_path_buf(), table);
        }
        Ok(&self.tables[path])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_table() {
        // Line 1: bytes 0..=3 ("abc\n"), line 2: 4..=6 ("de\n"), line 3: 7.. ("f")
        let table = LineTable::new(b"abc\nde\nf");
        assert_eq!(table.line_count(), 3);
        assert_eq!(table.line(0), Some(1));
        assert_eq!(table.line(3), Some(1)); // the newline itself
        assert_eq!(table.line(4), Some(2));
        assert_eq!(table.line(6), Some(2));
        assert_eq!(table.line(7), Some(3));
        assert_eq!(table.line(8), Some(3)); // EOF
        assert_eq!(table.line(9), None);
    }

    #[test]
    fn test_line_table_trailing_newline() {
        let table = LineTable::new(b"a\nb\n");
        assert_eq!(table.line_count(), 2);
        assert_eq!(table.line(4), Some(2));
    }

    #[test]
    fn test_line_table_blank_lines() {
        let table = LineTable::new(b"\n\n\nx");
        assert_eq!(table.line(0), Some(1));
        assert_eq!(table.line(1), Some(2));
        assert_eq!(table.line(2), Some(3));
        assert_eq!(table.line(3), Some(4));
    }

    #[test]
    fn test_line_table_empty() {
        let table = LineTable::new(b"");
        assert_eq!(table.line_count(), 1);
        assert_eq!(table.line(0), Some(1));
        assert_eq!(table.line(1), None);
    }

    #[test]
    fn test_resolver_caches_tables() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.go");
        std::fs::write(&path, "package a\n\nfunc A() {}\n").unwrap();

        let mut resolver = LineResolver::new();
        assert_eq!(resolver.resolve(&path, 0).unwrap(), 1);
        assert_eq!(resolver.resolve(&path, 11).unwrap(), 3);
        assert_eq!(resolver.cached_files(), 1);

        // The cached table is used even after the file changes on disk.
        std::fs::remove_file(&path).unwrap();
        assert_eq!(resolver.resolve(&path, 10).unwrap(), 2);
    }

    #[test]
    fn test_resolver_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.go");

        let mut resolver = LineResolver::new();
        let err = resolver.resolve(&path, 0).unwrap_err();
        assert!(matches!(err, Error::SourceFile { .. }));
        assert_eq!(resolver.cached_files(), 0);
    }

    #[test]
    fn test_resolver_offset_out_of_range() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("short.go");
        std::fs::write(&path, "package short\n").unwrap();

        let mut resolver = LineResolver::new();
        let err = resolver.resolve(&path, 100).unwrap_err();
        match err {
            Error::OffsetOutOfRange { offset, size, .. } => {
                assert_eq!(offset, 100);
                assert_eq!(size, 14);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
