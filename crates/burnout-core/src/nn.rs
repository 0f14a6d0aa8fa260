//! The `Model` capability trait and a small bundled MLP.
//!
//! A `Model` is any externally-constructed inference-capable object. The
//! harness only ever calls `forward` plus the placement/eval hooks at
//! construction time; it never inspects model internals.

use crate::{BurnoutError, DType, Device, Result, Shape, Tensor};

/// An inference-capable object.
pub trait Model: Send {
    /// Run one synchronous forward pass. No gradient tracking exists anywhere.
    fn forward(&self, input: &Tensor) -> Result<Tensor>;

    /// Move the model's parameters to a device. Called once at tester
    /// construction; the placement is fixed afterwards.
    fn to_device(&mut self, _device: &Device) -> Result<()> {
        Ok(())
    }

    /// Toggle evaluation mode (disables any training-only behavior).
    fn set_eval(&mut self, _eval: bool) {}

    /// Block until pending device work is complete. No-op for CPU models;
    /// accelerator-backed models override this so timing reads are accurate.
    fn synchronize(&self) {}

    /// Total number of parameters, for reporting.
    fn param_count(&self) -> usize {
        0
    }
}

/// A linear (fully-connected) layer: `y = x @ W^T + b`.
///
/// Weight has shape `[out_features, in_features]`. Bias (optional) has shape
/// `[out_features]`.
pub struct Linear {
    weight: Tensor,
    bias: Option<Tensor>,
}

impl Linear {
    /// Create a new Linear layer from pre-existing weight and bias tensors.
    pub fn new(weight: Tensor, bias: Option<Tensor>) -> Result<Self> {
        if weight.shape().ndim() != 2 {
            return Err(BurnoutError::InvalidArgument(format!(
                "Linear weight must be 2D, got shape {}",
                weight.shape()
            )));
        }
        if let Some(b) = &bias {
            let out_features = weight.shape().dims()[0];
            if b.shape().dims() != [out_features] {
                return Err(BurnoutError::ShapeMismatch {
                    expected: vec![out_features],
                    got: b.shape().dims().to_vec(),
                });
            }
        }
        Ok(Self { weight, bias })
    }

    /// Get a reference to the weight tensor.
    pub fn weight(&self) -> &Tensor {
        &self.weight
    }

    /// Get a reference to the bias tensor (if any).
    pub fn bias(&self) -> Option<&Tensor> {
        self.bias.as_ref()
    }
}

impl Model for Linear {
    fn forward(&self, input: &Tensor) -> Result<Tensor> {
        if input.shape().ndim() != 2 {
            return Err(BurnoutError::InvalidArgument(format!(
                "Linear input must be 2D, got shape {}",
                input.shape()
            )));
        }
        let dims = self.weight.shape().dims();
        let (out_features, in_features) = (dims[0], dims[1]);
        let (batch, in_got) = (input.shape().dims()[0], input.shape().dims()[1]);
        if in_got != in_features {
            return Err(BurnoutError::ShapeMismatch {
                expected: vec![batch, in_features],
                got: input.shape().dims().to_vec(),
            });
        }

        let x = input.as_slice();
        let w = self.weight.as_slice();
        let mut y = vec![0.0f32; batch * out_features];
        for b in 0..batch {
            for o in 0..out_features {
                let mut acc = 0.0f32;
                for k in 0..in_features {
                    acc += x[b * in_features + k] * w[o * in_features + k];
                }
                y[b * out_features + o] = acc;
            }
        }
        if let Some(bias) = &self.bias {
            let bv = bias.as_slice();
            for b in 0..batch {
                for o in 0..out_features {
                    y[b * out_features + o] += bv[o];
                }
            }
        }
        Tensor::from_vec(
            y,
            Shape::new(vec![batch, out_features]),
            input.dtype(),
            input.device().clone(),
        )
    }

    fn to_device(&mut self, device: &Device) -> Result<()> {
        self.weight.to_device(device);
        if let Some(bias) = &mut self.bias {
            bias.to_device(device);
        }
        Ok(())
    }

    fn param_count(&self) -> usize {
        self.weight.numel() + self.bias.as_ref().map_or(0, Tensor::numel)
    }
}

/// Rectified linear unit activation.
pub struct Relu;

impl Model for Relu {
    fn forward(&self, input: &Tensor) -> Result<Tensor> {
        let data = input.as_slice().iter().map(|v| v.max(0.0)).collect();
        Tensor::from_vec(
            data,
            input.shape().clone(),
            input.dtype(),
            input.device().clone(),
        )
    }
}

/// A sequential container running its layers in order.
pub struct Sequential {
    layers: Vec<Box<dyn Model>>,
    training: bool,
}

impl Sequential {
    pub fn new(layers: Vec<Box<dyn Model>>) -> Self {
        Self {
            layers,
            training: true,
        }
    }

    /// Whether the container is in training mode.
    pub fn training(&self) -> bool {
        self.training
    }
}

impl Model for Sequential {
    fn forward(&self, input: &Tensor) -> Result<Tensor> {
        let mut x = input.clone();
        for layer in &self.layers {
            x = layer.forward(&x)?;
        }
        Ok(x)
    }

    fn to_device(&mut self, device: &Device) -> Result<()> {
        for layer in &mut self.layers {
            layer.to_device(device)?;
        }
        Ok(())
    }

    fn set_eval(&mut self, eval: bool) {
        self.training = !eval;
        for layer in &mut self.layers {
            layer.set_eval(eval);
        }
    }

    fn synchronize(&self) {
        for layer in &self.layers {
            layer.synchronize();
        }
    }

    fn param_count(&self) -> usize {
        self.layers.iter().map(|l| l.param_count()).sum()
    }
}

/// Build a small deterministic MLP for harness tests and benchmarks:
/// Linear(in, 64) → ReLU → Linear(64, 32) → ReLU → Linear(32, out).
///
/// Weights are drawn from the seeded normal generator and scaled by
/// 1/sqrt(fan_in) so activations stay in a sane range.
pub fn simple_mlp(input_size: usize, output_size: usize, seed: u64) -> Result<Sequential> {
    let dims = [input_size, 64, 32, output_size];
    let mut layers: Vec<Box<dyn Model>> = Vec::new();
    for (i, pair) in dims.windows(2).enumerate() {
        let (fan_in, fan_out) = (pair[0], pair[1]);
        let weight = Tensor::randn(
            &Shape::new(vec![fan_out, fan_in]),
            DType::F32,
            Some(seed.wrapping_add(i as u64)),
            &Device::Cpu,
        )
        .scaled(1.0 / (fan_in as f32).sqrt());
        let bias = Tensor::zeros(&Shape::new(vec![fan_out]), DType::F32, &Device::Cpu);
        layers.push(Box::new(Linear::new(weight, Some(bias))?));
        if i + 1 < dims.windows(2).len() {
            layers.push(Box::new(Relu));
        }
    }
    Ok(Sequential::new(layers))
}
