use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid gocov JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Failed to read source file {}: {source}", path.display())]
    SourceFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Offset {offset} is past the end of {} ({size} bytes)", path.display())]
    OffsetOutOfRange {
        path: PathBuf,
        offset: usize,
        size: usize,
    },

    #[error("XML write error: {0}")]
    Encode(#[from] quick_xml::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
