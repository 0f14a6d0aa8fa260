//! Tolerance-based output comparison.
//!
//! Pure arithmetic over two payloads: no side effects, no faults. A shape
//! mismatch is reported as a failed [`Comparison`] rather than an error,
//! so callers can serialize the outcome alongside passing results.

use serde::Serialize;

use burnout_core::Tensor;

/// Guard against division by zero when normalizing relative differences.
const REL_DIFF_EPS: f64 = 1e-8;

/// Running maximum that propagates NaN instead of ignoring it, so a NaN
/// element poisons the diagnostic the same way it poisons the mean.
fn nan_sticky_max(acc: f64, v: f64) -> f64 {
    if v > acc || v.is_nan() { v } else { acc }
}

/// Relative/absolute tolerance bounds for approximate equality.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Tolerance {
    pub rtol: f64,
    pub atol: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            rtol: 1e-5,
            atol: 1e-8,
        }
    }
}

impl Tolerance {
    pub fn new(rtol: f64, atol: f64) -> Self {
        Self { rtol, atol }
    }
}

/// Outcome of comparing a reference output against a candidate output.
///
/// Numeric diagnostics are only populated when the shapes matched; on a
/// shape mismatch `error` carries the message and the diagnostic fields
/// are omitted from serialized output.
#[derive(Clone, Debug, Serialize)]
pub struct Comparison {
    pub passed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_abs_diff: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mean_abs_diff: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_rel_diff: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mean_rel_diff: Option<f64>,
    pub reference_shape: Vec<usize>,
    pub candidate_shape: Vec<usize>,
}

/// Compare a reference output against a candidate output.
///
/// Pass/fail uses the standard approximate-equality bound
/// `|a - b| <= atol + rtol * |b|` over every element, where `a` is the
/// reference and `b` the candidate. NaN elements never satisfy the bound;
/// bitwise-equal infinities do. Relative differences are normalized by
/// the reference magnitude (plus a small epsilon).
pub fn compare_outputs(reference: &Tensor, candidate: &Tensor, tol: Tolerance) -> Comparison {
    let reference_shape = reference.shape().dims().to_vec();
    let candidate_shape = candidate.shape().dims().to_vec();

    if reference.shape() != candidate.shape() {
        return Comparison {
            passed: false,
            error: Some(format!(
                "Shape mismatch: reference {} vs candidate {}",
                reference.shape(),
                candidate.shape()
            )),
            max_abs_diff: None,
            mean_abs_diff: None,
            max_rel_diff: None,
            mean_rel_diff: None,
            reference_shape,
            candidate_shape,
        };
    }

    let mut passed = true;
    let mut max_abs = 0.0f64;
    let mut sum_abs = 0.0f64;
    let mut max_rel = 0.0f64;
    let mut sum_rel = 0.0f64;

    for (&a, &b) in reference.as_slice().iter().zip(candidate.as_slice()) {
        let a = f64::from(a);
        let b = f64::from(b);
        let abs_diff = (a - b).abs();
        let rel_diff = abs_diff / (a.abs() + REL_DIFF_EPS);
        // NaN fails every bound; `a == b` admits equal infinities.
        if !(a == b || abs_diff <= tol.atol + tol.rtol * b.abs()) {
            passed = false;
        }
        max_abs = nan_sticky_max(max_abs, abs_diff);
        sum_abs += abs_diff;
        max_rel = nan_sticky_max(max_rel, rel_diff);
        sum_rel += rel_diff;
    }

    let n = reference.numel();
    let (mean_abs, mean_rel) = if n > 0 {
        (sum_abs / n as f64, sum_rel / n as f64)
    } else {
        (0.0, 0.0)
    };

    Comparison {
        passed,
        error: None,
        max_abs_diff: Some(max_abs),
        mean_abs_diff: Some(mean_abs),
        max_rel_diff: Some(max_rel),
        mean_rel_diff: Some(mean_rel),
        reference_shape,
        candidate_shape,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use burnout_core::{Device, Shape};

    fn tensor(data: &[f32], dims: Vec<usize>) -> Tensor {
        Tensor::from_f32(data, &Shape::new(dims), &Device::Cpu).unwrap()
    }

    #[test]
    fn test_identical_outputs_pass() {
        let a = tensor(&[1.0, 2.0, 3.0, 4.0], vec![2, 2]);
        let result = compare_outputs(&a, &a.clone(), Tolerance::default());
        assert!(result.passed);
        assert_eq!(result.max_abs_diff, Some(0.0));
        assert_eq!(result.mean_abs_diff, Some(0.0));
        assert!(result.error.is_none());
    }

    #[test]
    fn test_beyond_tolerance_fails() {
        let a = tensor(&[1.0, 2.0, 3.0, 4.0], vec![2, 2]);
        let b = tensor(&[1.1, 2.0, 3.0, 4.1], vec![2, 2]);
        let result = compare_outputs(&a, &b, Tolerance::default());
        assert!(!result.passed);
        assert!(result.max_abs_diff.unwrap() > 0.0);
    }

    #[test]
    fn test_within_tolerance_passes() {
        let a = tensor(&[1.0], vec![1]);
        let b = tensor(&[1.0001], vec![1]);
        let result = compare_outputs(&a, &b, Tolerance::new(1e-3, 1e-3));
        assert!(result.passed);
    }

    #[test]
    fn test_shape_mismatch() {
        let a = tensor(&[1.0, 2.0, 3.0, 4.0], vec![2, 2]);
        let b = tensor(&[1.0, 2.0, 3.0], vec![1, 3]);
        let result = compare_outputs(&a, &b, Tolerance::default());
        assert!(!result.passed);
        assert!(result.error.as_ref().unwrap().contains("Shape mismatch"));
        assert!(result.max_abs_diff.is_none());
        assert!(result.mean_abs_diff.is_none());
        assert!(result.max_rel_diff.is_none());
        assert!(result.mean_rel_diff.is_none());
        assert_eq!(result.reference_shape, vec![2, 2]);
        assert_eq!(result.candidate_shape, vec![1, 3]);
    }

    #[test]
    fn test_shape_mismatch_omits_diagnostics_in_json() {
        let a = tensor(&[1.0], vec![1]);
        let b = tensor(&[1.0, 2.0], vec![2]);
        let result = compare_outputs(&a, &b, Tolerance::default());
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("max_abs_diff").is_none());
        assert!(json.get("error").is_some());
    }

    #[test]
    fn test_nan_candidate_fails() {
        let a = tensor(&[1.0, 2.0], vec![2]);
        let b = tensor(&[1.0, f32::NAN], vec![2]);
        let result = compare_outputs(&a, &b, Tolerance::default());
        assert!(!result.passed);
        assert!(result.max_abs_diff.unwrap().is_nan());
        assert!(result.mean_abs_diff.unwrap().is_nan());
    }

    #[test]
    fn test_nan_reference_fails() {
        let a = tensor(&[f32::NAN], vec![1]);
        let b = tensor(&[1.0], vec![1]);
        assert!(!compare_outputs(&a, &b, Tolerance::default()).passed);
    }

    #[test]
    fn test_equal_infinities_pass() {
        let a = tensor(&[f32::INFINITY, f32::NEG_INFINITY], vec![2]);
        let b = tensor(&[f32::INFINITY, f32::NEG_INFINITY], vec![2]);
        assert!(compare_outputs(&a, &b, Tolerance::default()).passed);
    }

    #[test]
    fn test_opposite_infinities_fail() {
        let a = tensor(&[f32::INFINITY], vec![1]);
        let b = tensor(&[f32::NEG_INFINITY], vec![1]);
        assert!(!compare_outputs(&a, &b, Tolerance::default()).passed);
    }

    #[test]
    fn test_empty_tensors_pass() {
        let a = tensor(&[], vec![0, 3]);
        let b = tensor(&[], vec![0, 3]);
        let result = compare_outputs(&a, &b, Tolerance::default());
        assert!(result.passed);
        assert_eq!(result.mean_abs_diff, Some(0.0));
    }
}
