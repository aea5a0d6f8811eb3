// Module trait — The interface every layer implements
//
// A Module is a differentiable transformation unit with two halves:
//
//   update_output(input)                  — the forward computation
//   update_grad_input(input, grad_output) — ∂Loss/∂input via the chain rule
//
// Layers with parameters additionally accumulate ∂Loss/∂parameter in
// acc_grad_parameters(). The provided backward() ties the two together:
// grad-input first, then parameter accumulation, both observing the same
// (input, grad_output) pair.
//
// WHY A TRAIT?
//
// Each layer (Linear, Dropout, ReLU, ...) is a plain struct implementing
// Module, and Sequential composes them as trait objects. The set of layers
// is closed at the trait boundary: there is no "not implemented" base
// behavior to fall through to, because update_output/update_grad_input are
// required methods.
//
// REPLAY CONTRACT:
//
// backward() must observe the exact input the matching forward() observed.
// Modules do not keep a mutable copy of their last output; the caller
// (Sequential, or a training driver) owns the activation record and passes
// the right input back in. The one exception is per-call stochastic state:
// Dropout stores the mask drawn during forward because backward must reuse
// it, never redraw it.

use crate::error::Result;
use crate::Tensor;

/// The fundamental trait for all neural network layers.
///
/// Every layer implements:
/// - [`update_output`](Module::update_output): compute output from input
/// - [`update_grad_input`](Module::update_grad_input): compute the gradient
///   with respect to the input
///
/// and inherits `forward`/`backward` drivers plus parameter plumbing that
/// parameterless layers leave at the empty defaults.
pub trait Module {
    /// Compute the output tensor from the input tensor (forward pass).
    ///
    /// A pure function of `input` and the current parameters, except for
    /// layers with stochastic forward behavior (Dropout draws its mask here).
    fn update_output(&mut self, input: &Tensor) -> Result<Tensor>;

    /// Compute ∂Loss/∂input given `grad_output` = ∂Loss/∂output.
    ///
    /// The result always has the same shape as `input`. `input` must be the
    /// value seen by the matching `update_output` call.
    fn update_grad_input(&mut self, input: &Tensor, grad_output: &Tensor) -> Result<Tensor>;

    /// Accumulate (add into, never overwrite) this layer's parameter
    /// gradients. No-op for parameterless layers.
    ///
    /// Gradients accumulate across calls until [`zero_grad_parameters`]
    /// resets them; the training driver is responsible for zeroing between
    /// optimizer steps.
    ///
    /// [`zero_grad_parameters`]: Module::zero_grad_parameters
    fn acc_grad_parameters(&mut self, _input: &Tensor, _grad_output: &Tensor) -> Result<()> {
        Ok(())
    }

    /// Forward pass: delegates to [`update_output`](Module::update_output).
    fn forward(&mut self, input: &Tensor) -> Result<Tensor> {
        self.update_output(input)
    }

    /// Backward pass: grad-input first, then parameter accumulation, both
    /// against the same `(input, grad_output)` pair. Returns the grad-input.
    fn backward(&mut self, input: &Tensor, grad_output: &Tensor) -> Result<Tensor> {
        let grad_input = self.update_grad_input(input, grad_output)?;
        self.acc_grad_parameters(input, grad_output)?;
        Ok(grad_input)
    }

    /// Reset accumulated parameter gradients to zero, in place.
    /// No-op for parameterless layers.
    fn zero_grad_parameters(&mut self) {}

    /// All trainable parameters of this module, in a fixed order.
    /// Positionally aligned with [`grad_parameters`](Module::grad_parameters).
    fn parameters(&self) -> Vec<&Tensor> {
        Vec::new()
    }

    /// The gradient accumulators, aligned with
    /// [`parameters`](Module::parameters).
    fn grad_parameters(&self) -> Vec<&Tensor> {
        Vec::new()
    }

    /// Mutable access to the parameters, for an external update rule.
    fn parameters_mut(&mut self) -> Vec<&mut Tensor> {
        Vec::new()
    }

    /// Set training or evaluation mode.
    ///
    /// Override in modules whose forward/backward formula depends on mode
    /// (Dropout here). Default is a no-op.
    fn set_training(&mut self, _training: bool) {}

    /// Whether the module is in training mode (default: true).
    fn is_training(&self) -> bool {
        true
    }

    /// Convenience: set training mode.
    fn train(&mut self) {
        self.set_training(true);
    }

    /// Convenience: set evaluation mode.
    fn eval(&mut self) {
        self.set_training(false);
    }

    /// Total number of scalar parameters in this module.
    fn num_parameters(&self) -> usize {
        self.parameters().iter().map(|p| p.len()).sum()
    }
}
