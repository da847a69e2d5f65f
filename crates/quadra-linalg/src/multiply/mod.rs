//! Matrix multiplication.
//!
//! One entry point, [`multiply`], checks the operand shapes once and then
//! dispatches to the selected [`Algorithm`]. Every algorithm returns a
//! `(a.rows, b.cols)` matrix equal to the standard product.

mod divide_and_conquer;
mod standard;
mod strassen;

use std::fmt;
use std::str::FromStr;

use quadra_rings::Ring;

use crate::dimensions::{check_dimensions, Operation};
use crate::error::{MatrixError, Result};
use crate::matrix::Matrix;

/// Side at or below which the recursive algorithms multiply directly.
pub(crate) const BASE_SIDE: usize = 2;

/// Multiplication algorithm.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Triple-loop accumulation, O(n³).
    #[default]
    Standard,
    /// Block recursion with 8 products per level, O(n³).
    DivideAndConquer,
    /// Block recursion with 7 products per level, O(n^log2(7)).
    Strassen,
}

impl Algorithm {
    /// Every algorithm, in order of introduction.
    pub const ALL: [Algorithm; 3] = [
        Algorithm::Standard,
        Algorithm::DivideAndConquer,
        Algorithm::Strassen,
    ];

    /// Canonical name, as accepted by `FromStr`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Standard => "standard",
            Algorithm::DivideAndConquer => "divide-and-conquer",
            Algorithm::Strassen => "strassen",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = MatrixError;

    /// Parses a name case-insensitively; `-` and `_` are interchangeable.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "standard" | "std" | "naive" => Ok(Algorithm::Standard),
            "divide-and-conquer" | "dac" | "recursive" => Ok(Algorithm::DivideAndConquer),
            "strassen" => Ok(Algorithm::Strassen),
            _ => Err(MatrixError::UnsupportedAlgorithm(s.to_string())),
        }
    }
}

/// Configuration for matrix multiplication.
#[derive(Clone, Debug)]
pub struct MultiplyConfig {
    /// Algorithm to run.
    pub algorithm: Algorithm,
    /// Row count of the left operand from which the standard algorithm
    /// computes output rows on the rayon pool. Defaults to `usize::MAX`,
    /// so multiplication runs on the calling thread unless lowered.
    pub parallel_threshold: usize,
}

impl Default for MultiplyConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::Standard,
            parallel_threshold: usize::MAX,
        }
    }
}

impl MultiplyConfig {
    /// Default configuration running `algorithm`.
    #[must_use]
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            ..Self::default()
        }
    }

    /// Opts into the parallel standard kernel for left operands with at
    /// least `parallel_threshold` rows.
    #[must_use]
    pub fn with_parallel_threshold(mut self, parallel_threshold: usize) -> Self {
        self.parallel_threshold = parallel_threshold;
        self
    }

    /// Runs every algorithm on the calling thread. This is the default.
    #[must_use]
    pub fn sequential(self) -> Self {
        self.with_parallel_threshold(usize::MAX)
    }
}

/// Multiplies `a · b` with the given algorithm.
///
/// # Errors
///
/// Returns [`MatrixError::DimensionMismatch`] if `a.cols() != b.rows()`.
///
/// # Panics
///
/// With machine integers, arithmetic overflow follows Rust's rules: it
/// panics in debug builds and wraps in release builds. Strassen and
/// divide-and-conquer add quadrants before multiplying, so their
/// intermediate values can overflow on inputs where the standard product
/// fits. Use [`quadra_rings::Z`] or [`quadra_rings::Q`] when entries are
/// near the machine range.
pub fn multiply<T: Ring + Send + Sync>(
    a: &Matrix<T>,
    b: &Matrix<T>,
    algorithm: Algorithm,
) -> Result<Matrix<T>> {
    multiply_with(a, b, &MultiplyConfig::new(algorithm))
}

/// Multiplies `a · b` as described by `config`.
///
/// # Errors
///
/// Returns [`MatrixError::DimensionMismatch`] if `a.cols() != b.rows()`.
///
/// # Panics
///
/// Same overflow behaviour as [`multiply`].
pub fn multiply_with<T: Ring + Send + Sync>(
    a: &Matrix<T>,
    b: &Matrix<T>,
    config: &MultiplyConfig,
) -> Result<Matrix<T>> {
    if !check_dimensions(&[a, b], Operation::Multiply) {
        tracing::debug!(left = %a.dimensions(), right = %b.dimensions(), "incompatible operands for multiply");
        return Err(MatrixError::DimensionMismatch {
            operation: Operation::Multiply,
            left: a.dimensions(),
            right: b.dimensions(),
        });
    }

    tracing::debug!(
        algorithm = %config.algorithm,
        left = %a.dimensions(),
        right = %b.dimensions(),
        "multiplying matrices"
    );

    match config.algorithm {
        Algorithm::Standard if a.rows() >= config.parallel_threshold => {
            Ok(standard::multiply_parallel(a, b))
        }
        Algorithm::Standard => Ok(standard::multiply(a, b)),
        Algorithm::DivideAndConquer => divide_and_conquer::multiply(a, b),
        Algorithm::Strassen => strassen::multiply(a, b),
    }
}
