// Dropout — Regularization via random zeroing
//
// During training, Dropout zeros each element independently with probability
// p and scales the survivors by 1/(1-p) so the expected activation magnitude
// matches eval mode. During evaluation it is the identity.
//
// The mask drawn during a training-mode forward is stored and REUSED by the
// matching backward — never redrawn. Randomness comes from an StdRng owned
// by the layer and seeded at construction, so a fixed seed gives
// reproducible masks.
//
// p = 1 is rejected at construction: the 1/(1-p) rescale would divide by
// zero.

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{ensure_same_shape, Error, Result};
use crate::module::Module;
use crate::Tensor;

/// Applies dropout regularization.
///
/// Training: zeros elements with probability `p`, scales the rest by
/// `1/(1-p)`. Eval: identity.
pub struct Dropout {
    /// Probability of an element being zeroed. `0 <= p < 1`.
    p: f64,
    /// 0/1 keep-mask drawn by the most recent training-mode forward.
    mask: Option<Tensor>,
    rng: StdRng,
    training: bool,
}

impl Dropout {
    /// Create a new Dropout layer with its own seeded random source.
    ///
    /// # Panics
    ///
    /// Panics unless `0.0 <= p < 1.0`.
    pub fn new(p: f64, seed: u64) -> Self {
        assert!(
            (0.0..1.0).contains(&p),
            "dropout probability must be in [0, 1), got {p}"
        );
        debug!("Dropout p={p} initialised (seed {seed})");
        Dropout {
            p,
            mask: None,
            rng: StdRng::seed_from_u64(seed),
            training: true,
        }
    }

    /// The drop probability.
    pub fn p(&self) -> f64 {
        self.p
    }

    /// The keep-mask from the most recent training-mode forward, if any.
    pub fn mask(&self) -> Option<&Tensor> {
        self.mask.as_ref()
    }
}

impl Module for Dropout {
    fn update_output(&mut self, input: &Tensor) -> Result<Tensor> {
        if !self.training {
            return Ok(input.clone());
        }
        let keep = 1.0 - self.p;
        let rng = &mut self.rng;
        let mask = Tensor::from_shape_fn(input.dim(), |_| {
            if rng.gen::<f64>() < keep {
                1.0
            } else {
                0.0
            }
        });
        let output = (&mask * input) / keep;
        self.mask = Some(mask);
        Ok(output)
    }

    fn update_grad_input(&mut self, input: &Tensor, grad_output: &Tensor) -> Result<Tensor> {
        ensure_same_shape(input.dim(), grad_output.dim())?;
        if !self.training {
            return Ok(grad_output.clone());
        }
        let mask = self
            .mask
            .as_ref()
            .ok_or(Error::MissingForward { module: "Dropout" })?;
        // The mask must be the one drawn for this very input.
        ensure_same_shape(input.dim(), mask.dim())?;
        Ok((grad_output * mask) / (1.0 - self.p))
    }

    fn set_training(&mut self, training: bool) {
        self.training = training;
    }

    fn is_training(&self) -> bool {
        self.training
    }
}
