//! Output writers for generated DOT text.
pub mod dot;
pub use dot::{dot_sidecar_path, write_dot_file, write_dot_stdout, write_dot_temp};
