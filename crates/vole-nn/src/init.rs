// nn::init — Parameter Initialization Utilities
//
// Standalone functions for creating initialized tensors. These are useful
// when building custom layers or when you need fine-grained control over
// initialization.
//
// All randomness flows through an explicitly passed StdRng, so a fixed seed
// reproduces the exact same tensors run after run. There is no ambient
// global random state anywhere in the crate.

use ndarray::Array2;
use rand::rngs::StdRng;
use rand::Rng;

use crate::Tensor;

/// Initialize a `rows × cols` tensor from a uniform distribution
/// U(low, high).
pub fn uniform(rows: usize, cols: usize, low: f64, high: f64, rng: &mut StdRng) -> Tensor {
    Array2::from_shape_fn((rows, cols), |_| rng.gen_range(low..high))
}

/// Initialize a `rows × cols` tensor with all zeros.
pub fn zeros(rows: usize, cols: usize) -> Tensor {
    Array2::zeros((rows, cols))
}

/// Fan-in scaled uniform initialization: U(-k, k) with k = 1/√n_in.
///
/// This is the standard scheme for a fully-connected layer's weight matrix
/// (shape `n_out × n_in`); it keeps activation variance roughly constant
/// through the depth of the network.
pub fn fan_in_uniform(n_out: usize, n_in: usize, rng: &mut StdRng) -> Tensor {
    let k = 1.0 / (n_in as f64).sqrt();
    uniform(n_out, n_in, -k, k, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_uniform_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let t = uniform(20, 50, -2.0, 3.0, &mut rng);
        for &x in t.iter() {
            assert!(x >= -2.0 && x < 3.0, "value {} out of range [-2, 3)", x);
        }
    }

    #[test]
    fn test_uniform_deterministic() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        assert_eq!(
            uniform(4, 4, 0.0, 1.0, &mut a),
            uniform(4, 4, 0.0, 1.0, &mut b)
        );
    }

    #[test]
    fn test_fan_in_uniform_bounds() {
        let mut rng = StdRng::seed_from_u64(1);
        // n_in = 100 → k = 0.1
        let t = fan_in_uniform(50, 100, &mut rng);
        assert_eq!(t.dim(), (50, 100));
        for &x in t.iter() {
            assert!(
                x >= -0.1 && x <= 0.1,
                "value {} out of bounds [-0.1, 0.1]",
                x
            );
        }
    }

    #[test]
    fn test_zeros_values() {
        let t = zeros(3, 4);
        assert_eq!(t.dim(), (3, 4));
        assert!(t.iter().all(|&x| x == 0.0));
    }
}
