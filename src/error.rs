use std::path::PathBuf;
use thiserror::Error;

/// Fatal conversion failures. Per-row problems are never errors.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("failed to open workbook {}", .path.display())]
    Workbook {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    #[error("workbook {} has no worksheets", .0.display())]
    NoSheets(PathBuf),

    #[error("table needs at least 2 columns, found {0}")]
    TooFewColumns(usize),

    #[error("failed to serialize lookup table")]
    Serialize(#[from] serde_json::Error),

    #[error("I/O error on {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
