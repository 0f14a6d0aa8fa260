//! MAX graph test surface.
//!
//! The MAX engine is an externally defined, externally executed graph
//! representation, treated here as an opaque black box. Every entry point
//! below is declared but unconditionally fails with
//! [`BurnoutError::NotImplemented`] until the engine bindings land; the
//! errors propagate immediately and are never caught or retried.

use std::path::{Path, PathBuf};

use burnout_core::{BurnoutError, Result, Tensor};
use burnout_harness::BenchmarkStats;

/// Test runner for MAX graphs.
#[derive(Debug)]
pub struct MaxGraphTester {
    graph_path: PathBuf,
}

impl MaxGraphTester {
    /// Load a MAX graph from a file.
    pub fn new(graph_path: impl Into<PathBuf>) -> Result<Self> {
        let tester = Self {
            graph_path: graph_path.into(),
        };
        tester.load_graph()?;
        Ok(tester)
    }

    /// Path the graph would be loaded from.
    pub fn graph_path(&self) -> &Path {
        &self.graph_path
    }

    fn load_graph(&self) -> Result<()> {
        // Requires MAX SDK bindings.
        Err(BurnoutError::NotImplemented("MAX graph loading"))
    }

    /// Run inference on the MAX graph.
    pub fn run_inference(&self, _input: &Tensor) -> Result<Tensor> {
        Err(BurnoutError::NotImplemented("MAX graph inference"))
    }

    /// Benchmark MAX graph performance.
    pub fn benchmark(&self, _input: &Tensor, _num_runs: usize) -> Result<BenchmarkStats> {
        Err(BurnoutError::NotImplemented("MAX graph benchmarking"))
    }
}
