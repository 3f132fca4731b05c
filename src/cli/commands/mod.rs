//! CLI command implementations

pub mod params;
