//! I/O layer: the roster CSV reader, DOT output writing, and the external
//! Graphviz renderer.
pub mod roster;
pub use roster::{read_roster, read_rows};

pub mod render;
pub use render::render_dot_file;

pub mod writers;
