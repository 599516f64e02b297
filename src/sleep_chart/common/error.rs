use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("Image file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to open image: {0}")]
    DecodeError(String),

    #[error("Gray baseline not found in image")]
    BaselineNotFound,

    #[error("No gray pixels found on the scanning line (row {0})")]
    NoBaselinePixelOnRow(u32),

    #[error("Vertical grid lines not found (found {0} grid column(s), need at least 2)")]
    InsufficientGridLines(usize),

    #[error("Invalid extraction config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, ExtractionError>;
