//! Series analysis statistics.

pub mod chart;

pub use chart::control::*;
pub use chart::descriptive::*;
