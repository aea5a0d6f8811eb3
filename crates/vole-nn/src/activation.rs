// Activation modules — Stateless elementwise nonlinearities
//
// Each activation is a pure function of its input, so the backward pass
// recomputes whatever it needs from `input` directly; there is nothing to
// cache and no parameters to accumulate.

use ndarray::Zip;

use crate::error::{ensure_same_shape, Result};
use crate::module::Module;
use crate::Tensor;

/// ReLU activation: max(0, x)
///
/// The backward mask uses a strict comparison: the gradient at exactly
/// x == 0 is zero.
pub struct ReLU;

impl Module for ReLU {
    fn update_output(&mut self, input: &Tensor) -> Result<Tensor> {
        Ok(input.mapv(|x| x.max(0.0)))
    }

    fn update_grad_input(&mut self, input: &Tensor, grad_output: &Tensor) -> Result<Tensor> {
        ensure_same_shape(input.dim(), grad_output.dim())?;
        Ok(grad_output * &input.mapv(|x| if x > 0.0 { 1.0 } else { 0.0 }))
    }
}

/// LeakyReLU activation: x if x >= 0, negative_slope * x otherwise
///
/// Allows a small gradient when the unit is not active. Note the non-strict
/// comparison: x == 0 takes the positive branch, unlike ReLU's backward.
pub struct LeakyReLU {
    negative_slope: f64,
}

impl LeakyReLU {
    /// Create with default negative_slope = 0.01.
    pub fn new() -> Self {
        LeakyReLU {
            negative_slope: 0.01,
        }
    }

    /// Create with custom negative_slope.
    pub fn with_slope(negative_slope: f64) -> Self {
        LeakyReLU { negative_slope }
    }
}

impl Default for LeakyReLU {
    fn default() -> Self {
        Self::new()
    }
}

impl Module for LeakyReLU {
    fn update_output(&mut self, input: &Tensor) -> Result<Tensor> {
        let slope = self.negative_slope;
        Ok(input.mapv(|x| if x >= 0.0 { x } else { slope * x }))
    }

    fn update_grad_input(&mut self, input: &Tensor, grad_output: &Tensor) -> Result<Tensor> {
        ensure_same_shape(input.dim(), grad_output.dim())?;
        let slope = self.negative_slope;
        Ok(Zip::from(input)
            .and(grad_output)
            .map_collect(|&x, &g| if x >= 0.0 { g } else { slope * g }))
    }
}

/// SoftPlus activation: ln(1 + e^x), a smooth approximation of ReLU.
pub struct SoftPlus;

impl Module for SoftPlus {
    fn update_output(&mut self, input: &Tensor) -> Result<Tensor> {
        Ok(input.mapv(|x| (1.0 + x.exp()).ln()))
    }

    fn update_grad_input(&mut self, input: &Tensor, grad_output: &Tensor) -> Result<Tensor> {
        ensure_same_shape(input.dim(), grad_output.dim())?;
        Ok(Zip::from(input)
            .and(grad_output)
            .map_collect(|&x, &g| g * x.exp() / (1.0 + x.exp())))
    }
}

/// Sigmoid activation: 1 / (1 + e^(-x))
pub struct Sigmoid;

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

impl Module for Sigmoid {
    fn update_output(&mut self, input: &Tensor) -> Result<Tensor> {
        Ok(input.mapv(sigmoid))
    }

    fn update_grad_input(&mut self, input: &Tensor, grad_output: &Tensor) -> Result<Tensor> {
        ensure_same_shape(input.dim(), grad_output.dim())?;
        Ok(Zip::from(input).and(grad_output).map_collect(|&x, &g| {
            let s = sigmoid(x);
            g * s * (1.0 - s)
        }))
    }
}

/// Tanh activation
pub struct Tanh;

impl Module for Tanh {
    fn update_output(&mut self, input: &Tensor) -> Result<Tensor> {
        Ok(input.mapv(f64::tanh))
    }

    fn update_grad_input(&mut self, input: &Tensor, grad_output: &Tensor) -> Result<Tensor> {
        ensure_same_shape(input.dim(), grad_output.dim())?;
        Ok(Zip::from(input).and(grad_output).map_collect(|&x, &g| {
            let t = x.tanh();
            g * (1.0 - t * t)
        }))
    }
}
