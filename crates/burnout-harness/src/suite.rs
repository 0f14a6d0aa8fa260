//! Test-suite capability interface.

use std::collections::BTreeMap;

use burnout_core::{BurnoutError, DType, Device, Result, Sequential, Shape, simple_mlp};

use crate::compare::{Comparison, Tolerance, compare_outputs};
use crate::data::generate_test_data;
use crate::tester::ModelTester;

/// A runnable collection of named parity checks.
pub trait TestSuite {
    /// Prepare models, testers, and fixtures.
    fn setup(&mut self) -> Result<()>;

    /// Run every check, returning the outcome per check name.
    fn run(&mut self) -> Result<BTreeMap<String, Comparison>>;

    /// Release anything `setup` acquired.
    fn teardown(&mut self) -> Result<()>;
}

/// Sanity suite comparing the reference engine against itself.
///
/// Until a real MAX execution path exists this is the only candidate engine
/// available, so it doubles as a determinism check: a seeded model on seeded
/// data must reproduce its own output exactly.
pub struct SelfParitySuite {
    input_size: usize,
    output_size: usize,
    seed: u64,
    tester: Option<ModelTester<Sequential>>,
}

impl SelfParitySuite {
    pub fn new(input_size: usize, output_size: usize, seed: u64) -> Self {
        Self {
            input_size,
            output_size,
            seed,
            tester: None,
        }
    }
}

impl TestSuite for SelfParitySuite {
    fn setup(&mut self) -> Result<()> {
        let model = simple_mlp(self.input_size, self.output_size, self.seed)?;
        self.tester = Some(ModelTester::new(model, Device::Cpu)?);
        Ok(())
    }

    fn run(&mut self) -> Result<BTreeMap<String, Comparison>> {
        let tester = self.tester.as_ref().ok_or_else(|| {
            BurnoutError::InvalidArgument("suite not set up; call setup first".to_string())
        })?;

        let shape = Shape::new(vec![1, self.input_size]);
        let input = generate_test_data(&shape, DType::F32, Some(self.seed));

        let mut results = BTreeMap::new();

        // Same input through the same model twice.
        let first = tester.run_inference(&input)?;
        let second = tester.run_inference(&input)?;
        results.insert(
            "self_parity".to_string(),
            compare_outputs(&first, &second, Tolerance::default()),
        );

        // Regenerating the input from the same seed must not change the output.
        let regenerated = generate_test_data(&shape, DType::F32, Some(self.seed));
        let third = tester.run_inference(&regenerated)?;
        results.insert(
            "seeded_reproducibility".to_string(),
            compare_outputs(&first, &third, Tolerance::default()),
        );

        Ok(results)
    }

    fn teardown(&mut self) -> Result<()> {
        self.tester = None;
        Ok(())
    }
}
