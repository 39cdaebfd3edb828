//! # tally-core
//! Foundation types and traits for partner attribution.

pub mod constants;
pub mod error;
pub mod model;
pub mod traits;
pub mod types;
