pub mod inflation;

pub use inflation::{Inflation, InflationParams, ParamsOverride};
