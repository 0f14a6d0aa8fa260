//! Core types for the burnout test harness.
//!
//! `burnout-core` provides the foundational types (`Tensor`, `Device`, `DType`,
//! `Shape`), the [`Model`] capability trait for inference-capable objects, and
//! a small bundled MLP used by the harness's own tests and benchmarks.
//!
//! The tensor here is deliberately eager and minimal: a payload has no identity
//! beyond its values and shape. Graph compilation, device management, and
//! optimized kernels are out of scope for this workspace.

pub mod nn;
pub mod tensor;
pub mod types;

pub use nn::{Linear, Model, Relu, Sequential, simple_mlp};
pub use tensor::{Device, Tensor};
pub use types::{DType, Shape};

pub type Result<T> = std::result::Result<T, BurnoutError>;

#[derive(thiserror::Error, Debug)]
pub enum BurnoutError {
    #[error("Shape mismatch: expected {expected:?}, got {got:?}")]
    ShapeMismatch { expected: Vec<usize>, got: Vec<usize> },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("{0} not yet implemented")]
    NotImplemented(&'static str),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
