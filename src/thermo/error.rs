use std::path::PathBuf;
use thiserror::Error;

/// Errors from thermochemistry estimation.
#[derive(Debug, Error)]
pub enum Error {
    /// Predictor parameters could not be loaded.
    ///
    /// Fatal at estimator construction: there is no estimator without its
    /// parameters, and loading is not retried.
    #[error("failed to load predictor parameters from '{path}': {detail}")]
    Load {
        /// Resource path handed to the loader.
        path: PathBuf,
        /// Description of the problem.
        detail: String,
    },

    /// A point predictor failed on one structure.
    #[error("prediction failed for {formula}: {detail}")]
    Prediction {
        /// Formula of the structure being estimated.
        formula: String,
        /// Description of the problem.
        detail: String,
    },

    /// A point predictor returned the wrong number of values.
    #[error("predictor returned {got} values where {expected} were expected")]
    OutputShape {
        /// Values the estimator requires (grid length or 1 for scalars).
        expected: usize,
        /// Values actually returned.
        got: usize,
    },
}
