// File: crates/antrieb-core/src/error.rs
// Summary: Error type shared by loading and rendering.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("failed to fetch dataset: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV has no header row; expected a year column followed by series columns")]
    MissingYearColumn,

    /// Row index is zero-based and excludes the header.
    #[error("row {row}: cannot parse year from {value:?}")]
    InvalidYear { row: usize, value: String },

    #[error("dataset has no rows")]
    EmptyDataset,

    #[error("failed to create drawing surface ({width}x{height})")]
    Surface { width: i32, height: i32 },

    #[error("failed to encode {0}")]
    Encode(&'static str),
}

pub type Result<T> = std::result::Result<T, ChartError>;
