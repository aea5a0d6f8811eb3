/// All errors that can occur within vole-nn.
///
/// This enum captures every failure mode of the pipeline: shape mismatches
/// between consecutive layers or between a criterion's input and target, and
/// backward calls that have no matching forward pass to replay. Using a
/// single error type across the crate simplifies error propagation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Shape mismatch between two tensors (e.g., feeding a `[2, 3]` batch
    /// into a layer expecting 4 input features).
    #[error("shape mismatch: expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        expected: (usize, usize),
        got: (usize, usize),
    },

    /// Backward was called with no recorded forward state to replay.
    #[error("{module}: backward called with no matching forward pass")]
    MissingForward { module: &'static str },

    /// Generic message for cases not covered above.
    #[error("{0}")]
    Msg(String),
}

impl Error {
    /// Create an error from any string message.
    pub fn msg(s: impl Into<String>) -> Self {
        Error::Msg(s.into())
    }
}

/// Convenience Result type used throughout vole-nn.
pub type Result<T> = std::result::Result<T, Error>;

/// Macro for early return with a formatted error message.
/// Usage: `bail!("something went wrong: {}", detail)`
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::Error::Msg(format!($($arg)*)))
    };
}

/// Fail with `ShapeMismatch` unless the two dimension pairs agree.
pub(crate) fn ensure_same_shape(expected: (usize, usize), got: (usize, usize)) -> Result<()> {
    if expected != got {
        return Err(Error::ShapeMismatch { expected, got });
    }
    Ok(())
}
