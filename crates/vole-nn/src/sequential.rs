// Sequential — A chain of modules applied one after another
//
// Sequential is the simplest way to build a network: a list of layers
// applied in order. Each module's output becomes the next module's input.
//
//   let model = Sequential::new()
//       .add(Linear::new(4, 3, seed))
//       .add(ReLU)
//       .add(Linear::new(3, 2, seed + 1));
//
// THE REPLAY INVARIANT:
//
// forward() records every intermediate activation. backward() walks the
// layers in REVERSE order, and hands layer i the exact input it saw during
// forward: the Sequential's own input for i == 0, the recorded output of
// layer i-1 otherwise. Feeding any other value would silently produce
// wrong gradients, so the record is never recomputed — backward fails if
// no matching forward has run.

use crate::error::{Error, Result};
use crate::module::Module;
use crate::Tensor;

/// A container that chains modules sequentially.
///
/// Sequential itself implements [`Module`], so it can be nested.
pub struct Sequential {
    layers: Vec<Box<dyn Module>>,
    /// Activation record: outputs[i] is layer i's output from the most
    /// recent forward pass.
    outputs: Vec<Tensor>,
    training: bool,
}

impl Sequential {
    /// Create an empty Sequential.
    pub fn new() -> Self {
        Sequential {
            layers: Vec::new(),
            outputs: Vec::new(),
            training: true,
        }
    }

    /// Add a layer to the end of the chain. Returns self for chaining.
    ///
    /// Appending invalidates any recorded activations: a fresh forward is
    /// required before the next backward.
    #[allow(clippy::should_implement_trait)]
    pub fn add<M: Module + 'static>(mut self, module: M) -> Self {
        self.layers.push(Box::new(module));
        self.outputs.clear();
        self
    }

    /// Number of layers.
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Whether the chain is empty.
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// The intermediate activations recorded by the most recent forward
    /// pass, one per layer, in layer order. Empty before the first forward.
    pub fn outputs(&self) -> &[Tensor] {
        &self.outputs
    }
}

impl Default for Sequential {
    fn default() -> Self {
        Self::new()
    }
}

impl Module for Sequential {
    fn update_output(&mut self, input: &Tensor) -> Result<Tensor> {
        self.outputs.clear();
        let mut current = input.clone();
        for layer in self.layers.iter_mut() {
            current = layer.forward(&current)?;
            self.outputs.push(current.clone());
        }
        Ok(current)
    }

    /// Propagate gradients in reverse layer order, replaying the recorded
    /// activations. Child layers accumulate their own parameter gradients
    /// inside their backward calls.
    fn update_grad_input(&mut self, input: &Tensor, grad_output: &Tensor) -> Result<Tensor> {
        let Sequential {
            layers, outputs, ..
        } = self;
        if outputs.len() != layers.len() {
            return Err(Error::MissingForward {
                module: "Sequential",
            });
        }
        let mut grad = grad_output.clone();
        for i in (0..layers.len()).rev() {
            let layer_input = if i == 0 { input } else { &outputs[i - 1] };
            grad = layers[i].backward(layer_input, &grad)?;
        }
        Ok(grad)
    }

    // Parameter gradients are accumulated by the children during
    // update_grad_input's reverse sweep; nothing is owned directly here.

    fn zero_grad_parameters(&mut self) {
        for layer in self.layers.iter_mut() {
            layer.zero_grad_parameters();
        }
    }

    fn parameters(&self) -> Vec<&Tensor> {
        self.layers.iter().flat_map(|l| l.parameters()).collect()
    }

    fn grad_parameters(&self) -> Vec<&Tensor> {
        self.layers
            .iter()
            .flat_map(|l| l.grad_parameters())
            .collect()
    }

    fn parameters_mut(&mut self) -> Vec<&mut Tensor> {
        self.layers
            .iter_mut()
            .flat_map(|l| l.parameters_mut())
            .collect()
    }

    /// Propagate training mode to all child layers.
    fn set_training(&mut self, training: bool) {
        self.training = training;
        for layer in self.layers.iter_mut() {
            layer.set_training(training);
        }
    }

    fn is_training(&self) -> bool {
        self.training
    }
}
