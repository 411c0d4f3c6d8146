//! Core chart building blocks: chart parameters, the reporting hierarchy,
//! and DOT emission. These are internal primitives consumed by the
//! high-level `api` module.
pub mod dot;
pub mod hierarchy;
pub mod params;
