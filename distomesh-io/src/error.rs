//! Error types for CSV import operations

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during a CSV import
///
/// Row-level problems are not errors; they skip the row and are reported via
/// [`ImportResult::skipped_lines`](crate::csv_points::ImportResult).
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("Failed to read CSV: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("No valid points found in {}", path.display())]
    NoValidPoints { path: PathBuf },

    #[error(transparent)]
    Scene(#[from] distomesh_core::Error),
}

/// Result type alias for CSV import operations
pub type Result<T> = std::result::Result<T, ImportError>;
