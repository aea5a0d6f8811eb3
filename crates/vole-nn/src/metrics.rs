// Evaluation metrics
//
// The training driver itself is out of scope, but its readout is not:
// accuracy compares row-wise argmax of predictions against one-hot targets.

use ndarray::ArrayView1;

use crate::error::ensure_same_shape;
use crate::{bail, Result, Tensor};

fn argmax(row: ArrayView1<'_, f64>) -> usize {
    let mut best = 0;
    let mut best_val = f64::NEG_INFINITY;
    for (i, &v) in row.iter().enumerate() {
        if v > best_val {
            best_val = v;
            best = i;
        }
    }
    best
}

/// Fraction of rows whose predicted argmax matches the target argmax.
///
/// `predictions` and `targets` must have the same `[batch, classes]` shape;
/// targets are one-hot (or any encoding where the true class holds the row
/// maximum).
pub fn accuracy(predictions: &Tensor, targets: &Tensor) -> Result<f64> {
    ensure_same_shape(predictions.dim(), targets.dim())?;
    if predictions.nrows() == 0 {
        bail!("accuracy: empty batch");
    }
    let correct = predictions
        .rows()
        .into_iter()
        .zip(targets.rows())
        .filter(|(p, t)| argmax(p.view()) == argmax(t.view()))
        .count();
    Ok(correct as f64 / predictions.nrows() as f64)
}
