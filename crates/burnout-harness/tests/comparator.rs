//! Comparator behavior over the documented pass/fail/mismatch cases.

use burnout_core::{Device, Shape, Tensor};
use burnout_harness::{Tolerance, compare_outputs};

fn tensor(data: &[f32], dims: Vec<usize>) -> Tensor {
    Tensor::from_f32(data, &Shape::new(dims), &Device::Cpu).unwrap()
}

#[test]
fn identical_values_pass_with_zero_diff() {
    let reference = tensor(&[1.0, 2.0, 3.0, 4.0], vec![2, 2]);
    let candidate = tensor(&[1.0, 2.0, 3.0, 4.0], vec![2, 2]);
    let result = compare_outputs(&reference, &candidate, Tolerance::default());
    assert!(result.passed);
    assert_eq!(result.max_abs_diff, Some(0.0));
    assert_eq!(result.mean_abs_diff, Some(0.0));
    assert_eq!(result.max_rel_diff, Some(0.0));
    assert_eq!(result.mean_rel_diff, Some(0.0));
}

#[test]
fn single_element_beyond_tolerance_fails() {
    let reference = tensor(&[1.0, 2.0, 3.0, 4.0], vec![2, 2]);
    let candidate = tensor(&[1.0, 2.0, 3.0, 4.1], vec![2, 2]);
    let result = compare_outputs(&reference, &candidate, Tolerance::default());
    assert!(!result.passed);
    let max_abs = result.max_abs_diff.unwrap();
    assert!(max_abs > 0.0);
    assert!((max_abs - 0.1).abs() < 1e-6);
}

#[test]
fn mismatched_shapes_report_error_without_diagnostics() {
    let reference = tensor(&[1.0, 2.0, 3.0, 4.0], vec![2, 2]);
    let candidate = tensor(&[1.0, 2.0, 3.0], vec![1, 3]);
    let result = compare_outputs(&reference, &candidate, Tolerance::default());
    assert!(!result.passed);
    let message = result.error.expect("shape mismatch must carry an error");
    assert!(message.contains("Shape mismatch"));
    assert!(message.contains("(2, 2)"));
    assert!(message.contains("(1, 3)"));
    assert!(result.max_abs_diff.is_none());
    assert!(result.mean_abs_diff.is_none());
    assert!(result.max_rel_diff.is_none());
    assert!(result.mean_rel_diff.is_none());
}

#[test]
fn nan_elements_never_pass_the_gate() {
    let reference = tensor(&[1.0, 2.0], vec![2]);
    let candidate = tensor(&[1.0, f32::NAN], vec![2]);
    let result = compare_outputs(&reference, &candidate, Tolerance::default());
    assert!(!result.passed);
    // Diagnostics are poisoned consistently rather than masking the NaN.
    assert!(result.max_abs_diff.unwrap().is_nan());
    assert!(result.mean_abs_diff.unwrap().is_nan());

    // No tolerance is loose enough to admit NaN.
    let loose = compare_outputs(&reference, &candidate, Tolerance::new(1e10, 1e10));
    assert!(!loose.passed);
}

#[test]
fn loose_tolerance_accepts_small_drift() {
    let reference = tensor(&[10.0, 20.0], vec![2]);
    let candidate = tensor(&[10.0001, 20.0002], vec![2]);
    assert!(!compare_outputs(&reference, &candidate, Tolerance::default()).passed);
    assert!(compare_outputs(&reference, &candidate, Tolerance::new(1e-4, 1e-4)).passed);
}

#[test]
fn relative_diff_normalized_by_reference() {
    // reference 2.0, candidate 1.0: abs diff 1.0, rel diff ~0.5
    let reference = tensor(&[2.0], vec![1]);
    let candidate = tensor(&[1.0], vec![1]);
    let result = compare_outputs(&reference, &candidate, Tolerance::default());
    assert!((result.max_rel_diff.unwrap() - 0.5).abs() < 1e-6);
}
