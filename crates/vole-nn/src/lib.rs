//! # vole-nn
//!
//! Composable, differentiable neural network layers trained by manual
//! reverse-mode differentiation (backpropagation).
//!
//! Building blocks follow the [`Module`] trait pattern:
//!
//! 1. **Module trait** — every layer implements `update_output()` and
//!    `update_grad_input()`; `forward()`/`backward()` drive them
//! 2. **Linear** — fully connected: `y = xW^T + b`, with in-place gradient
//!    accumulators
//! 3. **Dropout** — regularization via random zeroing, seeded RNG, mask
//!    replay in backward
//! 4. **Activations** — ReLU, LeakyReLU, SoftPlus, Sigmoid, Tanh
//! 5. **SoftMax** — row-wise probability layer
//! 6. **Sequential** — chains modules and owns the activation record that
//!    backward replays
//! 7. **Criterions** — MSECriterion, ClassNLLCriterion: scalar loss plus
//!    the initial backward gradient
//!
//! Tensors are plain `ndarray` matrices (`Array2<f64>`, batch-first); this
//! crate implements no numeric primitives of its own.
//!
//! A training step looks like:
//!
//! ```ignore
//! let mut model = Sequential::new()
//!     .add(Linear::new(4, 16, 1))
//!     .add(ReLU)
//!     .add(Linear::new(16, 3, 2))
//!     .add(SoftMax);
//! let mut criterion = ClassNLLCriterion::new();
//!
//! model.zero_grad_parameters();
//! let predictions = model.forward(&batch)?;
//! let loss = criterion.forward(&predictions, &targets)?;
//! let grad = criterion.backward(&predictions, &targets)?;
//! model.backward(&batch, &grad)?;
//! // an external update rule now reads grad_parameters() / parameters_mut()
//! ```

pub mod activation;
pub mod criterion;
pub mod dropout;
pub mod error;
pub mod init;
pub mod linear;
pub mod metrics;
pub mod module;
pub mod sequential;
pub mod softmax;

pub use activation::{LeakyReLU, ReLU, Sigmoid, SoftPlus, Tanh};
pub use criterion::{ClassNLLCriterion, Criterion, MSECriterion};
pub use dropout::Dropout;
pub use error::{Error, Result};
pub use linear::Linear;
pub use metrics::accuracy;
pub use module::Module;
pub use sequential::Sequential;
pub use softmax::SoftMax;

/// The pipeline tensor type: a batch-first 2-D matrix `[batch, features]`.
pub type Tensor = ndarray::Array2<f64>;
