//! Model test runner: synchronous inference and latency benchmarking.

use std::time::Instant;

use burnout_core::{BurnoutError, Device, Model, Result, Tensor};

use crate::report::BenchmarkStats;

/// Discarded inference calls before timing starts, excluding cold-start
/// costs (allocator warmup, cache population) from the statistics.
const WARMUP_RUNS: usize = 10;

/// Test runner wrapping an inference-capable model.
///
/// Construction moves the model to the requested device and switches it to
/// evaluation mode; the placement is fixed for the tester's lifetime.
pub struct ModelTester<M: Model> {
    model: M,
    device: Device,
}

impl<M: Model> ModelTester<M> {
    /// Wrap a model, placing it on `device` and putting it in eval mode.
    pub fn new(mut model: M, device: Device) -> Result<Self> {
        model.to_device(&device)?;
        model.set_eval(true);
        Ok(Self { model, device })
    }

    /// The device the model was placed on.
    pub fn device(&self) -> &Device {
        &self.device
    }

    /// Borrow the wrapped model.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Run one synchronous forward pass.
    pub fn run_inference(&self, input: &Tensor) -> Result<Tensor> {
        self.model.forward(input)
    }

    /// Benchmark inference latency: warmup, then `num_runs` timed calls.
    ///
    /// On accelerator devices the model's synchronize hook is invoked before
    /// each clock read so queued work is included in the measurement; on CPU
    /// the wall clock alone is accurate.
    pub fn benchmark(&self, input: &Tensor, num_runs: usize) -> Result<BenchmarkStats> {
        if num_runs == 0 {
            return Err(BurnoutError::InvalidArgument(
                "benchmark requires num_runs > 0".to_string(),
            ));
        }

        tracing::debug!(warmup_runs = WARMUP_RUNS, "benchmark warmup");
        for _ in 0..WARMUP_RUNS {
            let _ = self.run_inference(input)?;
        }

        let sync = self.device.is_accelerator();
        let mut times_ms = Vec::with_capacity(num_runs);
        for _ in 0..num_runs {
            let start = Instant::now();
            let _output = self.run_inference(input)?;
            if sync {
                self.model.synchronize();
            }
            times_ms.push(start.elapsed().as_secs_f64() * 1e3);
        }
        tracing::debug!(num_runs, "benchmark complete");

        Ok(BenchmarkStats::from_times_ms(&times_ms))
    }
}
