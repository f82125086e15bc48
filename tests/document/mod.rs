//! Document layer tests
//!
//! - End-to-end scenarios
//! - Mutators and the properties they keep
//! - Driver and device helpers

pub mod tests_drivers;
pub mod tests_scenarios;
