//! Core domain: unit handling, resolved inputs, sizing, and reporting

pub mod input;
pub mod report;
pub mod sizing;
pub mod units;

pub use input::{CalculatorInput, WidthSpec};
pub use sizing::{SizingResult, WidthSource};
pub use units::UnitSystem;
