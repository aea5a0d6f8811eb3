// SoftMax — Row-wise probability layer
//
// Maps each row of scores to a probability distribution:
//
//   p_j = exp(x_j - max(x)) / Σ_k exp(x_k - max(x))
//
// The row-max shift keeps exp() from overflowing; it cancels out of the
// ratio, so the result is the plain softmax.
//
// Backward uses the softmax Jacobian, contracted against the incoming
// gradient row by row:
//
//   grad_x_j = p_j * (grad_y_j - Σ_k grad_y_k * p_k)
//
// Pairs with ClassNLLCriterion, which consumes probabilities directly.

use crate::error::{ensure_same_shape, Result};
use crate::module::Module;
use crate::Tensor;

/// Row-wise softmax over the class axis.
pub struct SoftMax;

impl Module for SoftMax {
    fn update_output(&mut self, input: &Tensor) -> Result<Tensor> {
        let mut output = input.clone();
        for mut row in output.rows_mut() {
            let max = row.fold(f64::NEG_INFINITY, |m, &v| m.max(v));
            row.mapv_inplace(|v| (v - max).exp());
            let sum = row.sum();
            row.mapv_inplace(|v| v / sum);
        }
        Ok(output)
    }

    fn update_grad_input(&mut self, input: &Tensor, grad_output: &Tensor) -> Result<Tensor> {
        ensure_same_shape(input.dim(), grad_output.dim())?;
        let probs = self.update_output(input)?;
        let mut grad_input = Tensor::zeros(input.dim());
        for ((mut grad_row, prob_row), out_row) in grad_input
            .rows_mut()
            .into_iter()
            .zip(probs.rows())
            .zip(grad_output.rows())
        {
            let dot: f64 = out_row.iter().zip(prob_row.iter()).map(|(g, p)| g * p).sum();
            for ((d, &p), &g) in grad_row
                .iter_mut()
                .zip(prob_row.iter())
                .zip(out_row.iter())
            {
                *d = p * (g - dot);
            }
        }
        Ok(grad_input)
    }
}
