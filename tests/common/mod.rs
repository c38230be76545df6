//! Common utilities for integration tests

pub mod mock_models;
pub mod test_helpers;

// Re-export commonly used items
#[allow(unused_imports)]
pub use mock_models::{ConstantModel, CountingModel, PhRamp, RecordingModel};
#[allow(unused_imports)]
pub use test_helpers::{all_pairs, assert_result_consistent, grid};
