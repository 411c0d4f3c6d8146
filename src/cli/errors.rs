use std::path::PathBuf;

use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("'{}' is not a CSV file", path.display())]
    NotCsv { path: PathBuf },

    #[error(transparent)]
    Chart(#[from] orgdot::Error),
}
