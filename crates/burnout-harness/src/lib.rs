//! Test harness for comparing inference engines.
//!
//! Wraps any [`burnout_core::Model`] in a [`ModelTester`] for synchronous
//! inference and warmup-then-timed-loop latency benchmarking, and provides
//! the tolerance-based output comparator used to gate parity between a
//! reference engine and a candidate engine.

pub mod compare;
pub mod data;
pub mod report;
pub mod suite;
pub mod tester;

pub use compare::{Comparison, Tolerance, compare_outputs};
pub use data::generate_test_data;
pub use report::{BenchmarkStats, save_test_results};
pub use suite::{SelfParitySuite, TestSuite};
pub use tester::ModelTester;
