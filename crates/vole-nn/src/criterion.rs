// Criterions — Scalar loss functions
//
// A Criterion scores a pipeline's output against a target: forward()
// produces the scalar loss, backward() produces ∂Loss/∂input — the initial
// gradient fed into the chain's backward pass.
//
// KEY LOSSES:
//
// 1. MSECriterion: sum((input - target)²) / batch_size
//    Regression. Normalized by batch size, NOT by feature count.
//
// 2. ClassNLLCriterion: sum(-target ⊙ ln(input + ε)) / batch_size
//    Classification over per-class PROBABILITIES (pair with SoftMax) and
//    one-hot targets. The ε = 1e-16 shift keeps ln() finite when a
//    predicted probability is exactly zero; the gradient at such a
//    position is large but bounded by 1/ε.

use ndarray::Zip;

use crate::error::{ensure_same_shape, Result};
use crate::Tensor;

/// Epsilon added before the logarithm in [`ClassNLLCriterion`].
const NLL_EPS: f64 = 1e-16;

/// A scalar-valued loss unit that also produces the initial backward
/// gradient.
pub trait Criterion {
    /// Compute the scalar loss for `input` against `target`.
    fn update_output(&mut self, input: &Tensor, target: &Tensor) -> Result<f64>;

    /// Compute ∂Loss/∂input; same shape as `input`.
    fn update_grad_input(&mut self, input: &Tensor, target: &Tensor) -> Result<Tensor>;

    /// Forward pass: delegates to
    /// [`update_output`](Criterion::update_output).
    fn forward(&mut self, input: &Tensor, target: &Tensor) -> Result<f64> {
        self.update_output(input, target)
    }

    /// Backward pass: delegates to
    /// [`update_grad_input`](Criterion::update_grad_input).
    fn backward(&mut self, input: &Tensor, target: &Tensor) -> Result<Tensor> {
        self.update_grad_input(input, target)
    }
}

/// Mean squared error, normalized by batch size.
pub struct MSECriterion;

impl MSECriterion {
    pub fn new() -> Self {
        MSECriterion
    }
}

impl Default for MSECriterion {
    fn default() -> Self {
        Self::new()
    }
}

impl Criterion for MSECriterion {
    fn update_output(&mut self, input: &Tensor, target: &Tensor) -> Result<f64> {
        ensure_same_shape(input.dim(), target.dim())?;
        let batch = input.nrows() as f64;
        let diff = input - target;
        Ok(diff.mapv(|d| d * d).sum() / batch)
    }

    fn update_grad_input(&mut self, input: &Tensor, target: &Tensor) -> Result<Tensor> {
        ensure_same_shape(input.dim(), target.dim())?;
        let batch = input.nrows() as f64;
        Ok((input - target) * (2.0 / batch))
    }
}

/// Negative log-likelihood over per-class probabilities and one-hot
/// targets, normalized by batch size.
pub struct ClassNLLCriterion;

impl ClassNLLCriterion {
    pub fn new() -> Self {
        ClassNLLCriterion
    }
}

impl Default for ClassNLLCriterion {
    fn default() -> Self {
        Self::new()
    }
}

impl Criterion for ClassNLLCriterion {
    fn update_output(&mut self, input: &Tensor, target: &Tensor) -> Result<f64> {
        ensure_same_shape(input.dim(), target.dim())?;
        let batch = input.nrows() as f64;
        let mut loss = 0.0;
        Zip::from(input).and(target).for_each(|&p, &t| {
            loss -= t * (p + NLL_EPS).ln();
        });
        Ok(loss / batch)
    }

    fn update_grad_input(&mut self, input: &Tensor, target: &Tensor) -> Result<Tensor> {
        ensure_same_shape(input.dim(), target.dim())?;
        let batch = input.nrows() as f64;
        Ok(Zip::from(input)
            .and(target)
            .map_collect(|&p, &t| -t / ((p + NLL_EPS) * batch)))
    }
}
