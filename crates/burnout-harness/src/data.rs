//! Seeded test-data generation.

use burnout_core::{DType, Device, Shape, Tensor};

/// Generate standard-normal test data with the given shape and dtype.
///
/// Deterministic iff a seed is provided. Unseeded calls draw from entropy.
pub fn generate_test_data(shape: &Shape, dtype: DType, seed: Option<u64>) -> Tensor {
    Tensor::randn(shape, dtype, seed, &Device::Cpu)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_and_dtype() {
        let t = generate_test_data(&Shape::new(vec![2, 3]), DType::F32, Some(123));
        assert_eq!(t.shape(), &Shape::new(vec![2, 3]));
        assert_eq!(t.dtype(), DType::F32);
    }

    #[test]
    fn test_same_seed_reproducible() {
        let a = generate_test_data(&Shape::new(vec![2, 3]), DType::F32, Some(123));
        let b = generate_test_data(&Shape::new(vec![2, 3]), DType::F32, Some(123));
        assert_eq!(a.as_slice(), b.as_slice());
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = generate_test_data(&Shape::new(vec![2, 3]), DType::F32, Some(123));
        let b = generate_test_data(&Shape::new(vec![2, 3]), DType::F32, Some(456));
        assert_ne!(a.as_slice(), b.as_slice());
    }
}
