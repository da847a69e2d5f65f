//! Errors reported by the matrix engine.

use thiserror::Error;

use crate::dimensions::{Dimensions, Operation};

/// Errors that can occur while building or combining matrices.
///
/// Every variant is detected before any arithmetic starts; an operation
/// either fails with one of these or returns a complete result.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// Operand shapes are incompatible for the requested operation.
    #[error("matrix dimensions do not match for {operation}: {left} and {right}")]
    DimensionMismatch {
        /// The operation that was rejected.
        operation: Operation,
        /// Shape of the first operand.
        left: Dimensions,
        /// Shape of the operand that disagrees with `left`.
        right: Dimensions,
    },

    /// A variadic operation received fewer than two matrices.
    #[error("{operation} needs at least two matrices, got {count}")]
    InsufficientOperands {
        /// The operation that was rejected.
        operation: Operation,
        /// Number of matrices supplied.
        count: usize,
    },

    /// A pad or crop target is on the wrong side of the matrix shape.
    #[error("cannot resize {dimensions} matrix to {target_rows}x{target_cols}")]
    ResizeOutOfBounds {
        /// Shape of the matrix being resized.
        dimensions: Dimensions,
        /// Requested row count.
        target_rows: usize,
        /// Requested column count.
        target_cols: usize,
    },

    /// A multiplication algorithm name was not recognised.
    #[error("multiplication algorithm '{0}' not implemented")]
    UnsupportedAlgorithm(String),

    /// A matrix needs at least one row and one column.
    #[error("matrix must have at least one row and one column")]
    Empty,

    /// Nested rows of different lengths.
    #[error("row {row} has {found} columns, expected {expected}")]
    RaggedRows {
        /// Index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },

    /// A flat buffer does not hold `rows * cols` elements.
    #[error("expected {expected} elements, got {found}")]
    DataLength {
        /// `rows * cols`.
        expected: usize,
        /// Buffer length.
        found: usize,
    },

    /// Quadrant split of a matrix that is not an even-sided square.
    #[error("cannot split {0} matrix into four equal quadrants")]
    UnevenSplit(Dimensions),

    /// Quadrants of different shapes passed to a join.
    #[error("quadrants must share one square shape: expected {expected}, found {found}")]
    QuadrantMismatch {
        /// Shape of the top-left quadrant.
        expected: Dimensions,
        /// Shape of the first quadrant that disagrees with it.
        found: Dimensions,
    },
}

/// Result type for matrix operations.
pub type Result<T> = std::result::Result<T, MatrixError>;
