// Linear — Fully-connected (dense) layer
//
// The most fundamental neural network layer: y = xW^T + b
//
// PARAMETER SHAPES:
//
//   weight: [out_features, in_features]  — stored transposed for matmul
//   bias:   [1, out_features]            — broadcast across batch dimension
//
// COMPUTATION:
//
//   forward:  y = x @ W^T + b            [batch, in] → [batch, out]
//   backward: grad_x = grad_y @ W        [batch, out] → [batch, in]
//             grad_W += grad_y^T @ x     accumulated in place
//             grad_b += sum(grad_y, axis=0)
//
// The gradient buffers are allocated once at construction and mutated in
// place; acc_grad_parameters ADDS into them, so contributions from several
// micro-batches sum until zero_grad_parameters resets the buffers.
//
// WEIGHT INITIALIZATION:
//
// Weights and bias are drawn from U(-k, k) where k = sqrt(1/in_features),
// which prevents the signal from vanishing or exploding as it passes
// through many layers.

use ndarray::Axis;
use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::{ensure_same_shape, Error, Result};
use crate::init;
use crate::module::Module;
use crate::Tensor;

/// A fully-connected (dense) layer: y = xW^T + b.
pub struct Linear {
    /// Weight matrix: [out_features, in_features]
    weight: Tensor,
    /// Bias: [1, out_features] — broadcasts over the batch dimension
    bias: Tensor,
    /// Gradient accumulator for `weight`, same shape, mutated in place.
    grad_weight: Tensor,
    /// Gradient accumulator for `bias`, same shape, mutated in place.
    grad_bias: Tensor,
    in_features: usize,
    out_features: usize,
}

impl Linear {
    /// Create a new Linear layer with fan-in uniform initialization.
    ///
    /// Weight and bias are sampled independently from U(-k, k) with
    /// k = 1/√in_features, using an `StdRng` seeded with `seed` so the
    /// same seed reproduces the same parameters.
    pub fn new(in_features: usize, out_features: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let k = 1.0 / (in_features as f64).sqrt();
        let weight = init::fan_in_uniform(out_features, in_features, &mut rng);
        let bias = init::uniform(1, out_features, -k, k, &mut rng);
        debug!("Linear {in_features}→{out_features} initialised (seed {seed})");
        Linear {
            weight,
            bias,
            grad_weight: init::zeros(out_features, in_features),
            grad_bias: init::zeros(1, out_features),
            in_features,
            out_features,
        }
    }

    /// Create a Linear layer from existing weight `[out, in]` and bias
    /// `[1, out]` tensors. Useful for tests and pre-trained parameters.
    pub fn from_parameters(weight: Tensor, bias: Tensor) -> Result<Self> {
        let (out_features, in_features) = weight.dim();
        ensure_same_shape((1, out_features), bias.dim())?;
        Ok(Linear {
            grad_weight: init::zeros(out_features, in_features),
            grad_bias: init::zeros(1, out_features),
            weight,
            bias,
            in_features,
            out_features,
        })
    }

    /// The input feature dimension.
    pub fn in_features(&self) -> usize {
        self.in_features
    }

    /// The output feature dimension.
    pub fn out_features(&self) -> usize {
        self.out_features
    }

    /// Direct access to the weight tensor.
    pub fn weight(&self) -> &Tensor {
        &self.weight
    }

    /// Direct access to the bias tensor.
    pub fn bias(&self) -> &Tensor {
        &self.bias
    }

    /// The accumulated weight gradient.
    pub fn grad_weight(&self) -> &Tensor {
        &self.grad_weight
    }

    /// The accumulated bias gradient.
    pub fn grad_bias(&self) -> &Tensor {
        &self.grad_bias
    }

    fn check_input(&self, input: &Tensor) -> Result<()> {
        if input.ncols() != self.in_features {
            return Err(Error::ShapeMismatch {
                expected: (input.nrows(), self.in_features),
                got: input.dim(),
            });
        }
        Ok(())
    }
}

impl Module for Linear {
    /// y = x @ W^T + b, bias broadcast over the batch axis.
    fn update_output(&mut self, input: &Tensor) -> Result<Tensor> {
        self.check_input(input)?;
        Ok(input.dot(&self.weight.t()) + &self.bias)
    }

    /// grad_x = grad_y @ W, shape [batch, in_features].
    fn update_grad_input(&mut self, input: &Tensor, grad_output: &Tensor) -> Result<Tensor> {
        self.check_input(input)?;
        ensure_same_shape((input.nrows(), self.out_features), grad_output.dim())?;
        Ok(grad_output.dot(&self.weight))
    }

    /// grad_W += grad_y^T @ x; grad_b += columnwise sum of grad_y.
    fn acc_grad_parameters(&mut self, input: &Tensor, grad_output: &Tensor) -> Result<()> {
        self.check_input(input)?;
        ensure_same_shape((input.nrows(), self.out_features), grad_output.dim())?;
        self.grad_weight += &grad_output.t().dot(input);
        self.grad_bias += &grad_output.sum_axis(Axis(0)).insert_axis(Axis(0));
        Ok(())
    }

    fn zero_grad_parameters(&mut self) {
        self.grad_weight.fill(0.0);
        self.grad_bias.fill(0.0);
    }

    fn parameters(&self) -> Vec<&Tensor> {
        vec![&self.weight, &self.bias]
    }

    fn grad_parameters(&self) -> Vec<&Tensor> {
        vec![&self.grad_weight, &self.grad_bias]
    }

    fn parameters_mut(&mut self) -> Vec<&mut Tensor> {
        vec![&mut self.weight, &mut self.bias]
    }
}
