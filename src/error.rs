//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O, CSV, and config errors, and provides semantic variants
//! for roster validation, hierarchy problems, and renderer failures.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Input file not found: {}", path.display())]
    InputNotFound { path: PathBuf },

    #[error("Malformed row {row}: expected at least {expected} columns, found {found}")]
    MalformedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Row {row} has no usable person name (no ASCII letters)")]
    UnnamedPerson { row: usize },

    #[error("Reporting cycle detected starting at supervisor: {key}")]
    ReportingCycle { key: String },

    #[error("Render tool '{tool}' unavailable or failed: {reason}")]
    RenderToolUnavailable {
        tool: String,
        reason: String,
        /// DOT file left on disk for a manual render
        kept_dot: Option<PathBuf>,
    },

    #[error("Failed to write output {}: {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },

    #[error("Config error in {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    pub fn output_write<P: Into<PathBuf>>(path: P, source: std::io::Error) -> Self {
        Error::OutputWrite {
            path: path.into(),
            source,
        }
    }
}
