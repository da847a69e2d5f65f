//! Shape bookkeeping and the precondition checks shared by every operation.

use std::fmt;

use crate::matrix::Matrix;

/// A `(rows, cols)` pair derived from a matrix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Dimensions {
    /// Number of rows.
    pub rows: usize,
    /// Number of columns.
    pub cols: usize,
}

impl Dimensions {
    /// Creates a dimension pair.
    #[must_use]
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Returns true if rows and columns agree.
    #[must_use]
    pub const fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Largest of the two extents.
    #[must_use]
    pub fn max_extent(&self) -> usize {
        self.rows.max(self.cols)
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// The operation a dimension check guards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Elementwise sum.
    Add,
    /// Elementwise difference.
    Subtract,
    /// Matrix product.
    Multiply,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
        };
        f.write_str(name)
    }
}

/// Checks whether `matrices` have compatible shapes for `operation`.
///
/// - `Add` / `Subtract`: every matrix has the same rows and columns.
/// - `Multiply`: exactly two matrices, and the first one's column count
///   equals the second one's row count.
///
/// Operand counts are not checked for `Add` / `Subtract`; an empty or
/// single-element slice is trivially compatible.
#[must_use]
pub fn check_dimensions<T>(matrices: &[&Matrix<T>], operation: Operation) -> bool {
    match operation {
        Operation::Add | Operation::Subtract => first_mismatch(matrices).is_none(),
        Operation::Multiply => match matrices {
            [a, b] => a.cols() == b.rows(),
            _ => false,
        },
    }
}

/// Index of the first matrix whose shape differs from `matrices[0]`.
pub(crate) fn first_mismatch<T>(matrices: &[&Matrix<T>]) -> Option<usize> {
    let (first, rest) = matrices.split_first()?;
    let expected = first.dimensions();
    rest.iter()
        .position(|m| m.dimensions() != expected)
        .map(|i| i + 1)
}
