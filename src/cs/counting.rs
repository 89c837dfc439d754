pub mod comparison_counter;
pub mod median_trial;

pub use comparison_counter::{ComparisonCounter, ComparisonReport, CountedValue};
pub use median_trial::{median_comparison_trial, ComparisonTrialRow, TrialConfig};
