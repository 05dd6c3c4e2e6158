use tempfile::TempDir;

/// Two 20-byte lines: line 1 spans bytes 0-19, line 2 spans 20-39.
pub const TWO_LINES: &str = "package a // line 1\nfunc Add() // line2\n";

/// Write `files` (name, content) into a fresh temp directory.
/// The caller must hold onto `TempDir` to keep the files alive.
pub fn source_dir(files: &[(&str, &str)]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for (name, content) in files {
        std::fs::write(dir.path().join(name), content).unwrap();
    }
    dir
}

/// Absolute path of `name` inside `dir`, safe to embed in a JSON string.
#[allow(dead_code)]
pub fn path_in(dir: &TempDir, name: &str) -> String {
    dir.path()
        .join(name)
        .to_str()
        .unwrap()
        .replace('\\', "/")
}
