//! Tensor type — an eager n-dimensional f32 payload.
//!
//! Unlike a framework tensor there is no lazy graph behind this type: the
//! data is materialized at construction and identity is values + shape only.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, StandardNormal};

use crate::{BurnoutError, DType, Result, Shape};

/// Compute device a tensor or model is placed on.
///
/// Placement is a tag only; this workspace does no device management.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Device {
    Cpu,
    Cuda,
}

impl Device {
    /// Whether this device needs an explicit synchronize before reading
    /// a wall clock around inference.
    pub fn is_accelerator(&self) -> bool {
        matches!(self, Device::Cuda)
    }
}

impl std::str::FromStr for Device {
    type Err = BurnoutError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "cpu" => Ok(Device::Cpu),
            "cuda" => Ok(Device::Cuda),
            other => Err(BurnoutError::InvalidArgument(format!(
                "unknown device {other:?} (expected \"cpu\" or \"cuda\")"
            ))),
        }
    }
}

impl std::fmt::Display for Device {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Device::Cpu => write!(f, "cpu"),
            Device::Cuda => write!(f, "cuda"),
        }
    }
}

/// An n-dimensional numeric array.
#[derive(Clone, Debug, PartialEq)]
pub struct Tensor {
    data: Vec<f32>,
    shape: Shape,
    dtype: DType,
    device: Device,
}

impl Tensor {
    // ── Constructors ────────────────────────────────────────────────────

    /// Create a tensor filled with zeros.
    pub fn zeros(shape: &Shape, dtype: DType, device: &Device) -> Tensor {
        let n = shape.numel();
        Self {
            data: vec![0.0; n],
            shape: shape.clone(),
            dtype,
            device: device.clone(),
        }
    }

    /// Create a tensor filled with ones.
    pub fn ones(shape: &Shape, dtype: DType, device: &Device) -> Tensor {
        let n = shape.numel();
        Self {
            data: vec![1.0; n],
            shape: shape.clone(),
            dtype,
            device: device.clone(),
        }
    }

    /// Create a tensor from f32 data.
    pub fn from_f32(data: &[f32], shape: &Shape, device: &Device) -> Result<Tensor> {
        Self::from_vec(data.to_vec(), shape.clone(), DType::F32, device.clone())
    }

    /// Create a tensor from owned data with an explicit dtype.
    pub fn from_vec(data: Vec<f32>, shape: Shape, dtype: DType, device: Device) -> Result<Tensor> {
        let expected = shape.numel();
        if data.len() != expected {
            return Err(BurnoutError::InvalidArgument(format!(
                "data length {} does not match shape {} (expected {})",
                data.len(),
                shape,
                expected,
            )));
        }
        Ok(Self {
            data,
            shape,
            dtype,
            device,
        })
    }

    /// Sample a tensor from the standard normal distribution.
    ///
    /// Deterministic iff `seed` is provided: the same seed and shape always
    /// produce identical values.
    pub fn randn(shape: &Shape, dtype: DType, seed: Option<u64>, device: &Device) -> Tensor {
        let n = shape.numel();
        let data: Vec<f32> = match seed {
            Some(s) => {
                let mut rng = StdRng::seed_from_u64(s);
                (0..n).map(|_| StandardNormal.sample(&mut rng)).collect()
            }
            None => {
                let mut rng = rand::thread_rng();
                (0..n).map(|_| StandardNormal.sample(&mut rng)).collect()
            }
        };
        Self {
            data,
            shape: shape.clone(),
            dtype,
            device: device.clone(),
        }
    }

    /// Multiply every element by a scalar, consuming the tensor.
    pub fn scaled(mut self, factor: f32) -> Tensor {
        for v in &mut self.data {
            *v *= factor;
        }
        self
    }

    // ── Accessors ───────────────────────────────────────────────────────

    /// Get the tensor shape.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Get the tensor dtype.
    pub fn dtype(&self) -> DType {
        self.dtype
    }

    /// Get the tensor device.
    pub fn device(&self) -> &Device {
        &self.device
    }

    /// Number of elements.
    pub fn numel(&self) -> usize {
        self.shape.numel()
    }

    /// View the payload as a flat slice (row-major).
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Copy the payload out as a Vec<f32>.
    pub fn to_vec_f32(&self) -> Vec<f32> {
        self.data.clone()
    }

    /// Retag this tensor onto a device.
    pub fn to_device(&mut self, device: &Device) {
        self.device = device.clone();
    }

    /// Whether every element is finite (no NaN, no infinity).
    pub fn all_finite(&self) -> bool {
        self.data.iter().all(|v| v.is_finite())
    }
}
