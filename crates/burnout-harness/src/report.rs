//! Benchmark statistics and JSON report saving.

use std::fs;
use std::path::Path;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use burnout_core::{BurnoutError, Result};

/// Aggregate timing statistics in milliseconds.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct BenchmarkStats {
    pub mean_time_ms: f64,
    pub std_time_ms: f64,
    pub min_time_ms: f64,
    pub max_time_ms: f64,
    pub num_runs: usize,
}

impl BenchmarkStats {
    /// Aggregate raw per-run timings. Uses the population standard deviation
    /// (dividing by n, not n-1).
    pub fn from_times_ms(times_ms: &[f64]) -> Self {
        let n = times_ms.len();
        if n == 0 {
            return Self {
                mean_time_ms: 0.0,
                std_time_ms: 0.0,
                min_time_ms: 0.0,
                max_time_ms: 0.0,
                num_runs: 0,
            };
        }
        let mean = times_ms.iter().sum::<f64>() / n as f64;
        let var = times_ms.iter().map(|t| (t - mean).powi(2)).sum::<f64>() / n as f64;
        let min = times_ms.iter().copied().fold(f64::INFINITY, f64::min);
        let max = times_ms.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Self {
            mean_time_ms: mean,
            std_time_ms: var.sqrt(),
            min_time_ms: min,
            max_time_ms: max,
            num_runs: n,
        }
    }
}

/// Save test results as pretty-printed JSON, appending an ISO-8601
/// `timestamp` field. Any existing file at `path` is overwritten.
///
/// The results must serialize to a JSON object so the timestamp has
/// somewhere to go.
pub fn save_test_results<T: Serialize>(results: &T, path: &Path) -> Result<()> {
    let mut value = serde_json::to_value(results)?;
    match value {
        Value::Object(ref mut map) => {
            map.insert(
                "timestamp".to_string(),
                Value::String(Utc::now().to_rfc3339()),
            );
        }
        _ => {
            return Err(BurnoutError::InvalidArgument(
                "test results must serialize to a JSON object".to_string(),
            ));
        }
    }
    fs::write(path, serde_json::to_string_pretty(&value)?)?;
    tracing::info!(path = %path.display(), "wrote test report");
    Ok(())
}
