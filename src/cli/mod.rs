//! Command Line Interface (CLI) layer for orgdot.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) that resolves where the chart
//! goes (stdout, a DOT file, or a rendered file) and calls into
//! `orgdot::api`.
//!
//! If you are embedding orgdot into another application, prefer using
//! the high-level `orgdot::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
