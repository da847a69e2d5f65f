//! Dense matrix type.
//!
//! Matrices are values: every operation in this crate returns a freshly
//! allocated matrix and never mutates or aliases its inputs.

use std::fmt;
use std::ops::{Index, IndexMut, Neg};

use quadra_rings::Ring;

use crate::dimensions::Dimensions;
use crate::error::{MatrixError, Result};

/// Dense matrix stored in row-major order.
///
/// Always has at least one row and one column, and every row has the
/// same length.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Matrix<T> {
    /// Matrix entries in row-major order.
    data: Vec<T>,
    /// Number of rows.
    num_rows: usize,
    /// Number of columns.
    num_cols: usize,
}

impl<T> Matrix<T> {
    /// Creates a matrix from nested rows.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::Empty`] if there are no rows or the rows are
    /// empty, and [`MatrixError::RaggedRows`] if row lengths differ.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let num_rows = rows.len();
        let num_cols = rows.first().map_or(0, Vec::len);
        if num_cols == 0 {
            return Err(MatrixError::Empty);
        }
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != num_cols) {
            return Err(MatrixError::RaggedRows {
                row,
                expected: num_cols,
                found: r.len(),
            });
        }
        Ok(Self {
            data: rows.into_iter().flatten().collect(),
            num_rows,
            num_cols,
        })
    }

    /// Creates a matrix from a row-major buffer.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::Empty`] if either dimension is zero and
    /// [`MatrixError::DataLength`] if `data` does not hold `rows * cols`
    /// elements.
    pub fn from_vec(num_rows: usize, num_cols: usize, data: Vec<T>) -> Result<Self> {
        if num_rows == 0 || num_cols == 0 {
            return Err(MatrixError::Empty);
        }
        let expected = num_rows * num_cols;
        if data.len() != expected {
            return Err(MatrixError::DataLength {
                expected,
                found: data.len(),
            });
        }
        Ok(Self {
            data,
            num_rows,
            num_cols,
        })
    }

    /// Builds a matrix whose shape the caller has already validated.
    pub(crate) fn from_parts(num_rows: usize, num_cols: usize, data: Vec<T>) -> Self {
        debug_assert_eq!(data.len(), num_rows * num_cols);
        debug_assert!(num_rows > 0 && num_cols > 0);
        Self {
            data,
            num_rows,
            num_cols,
        }
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.num_rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.num_cols
    }

    /// Returns the `(rows, cols)` pair.
    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.num_rows, self.num_cols)
    }

    /// Checks if the matrix is square.
    #[must_use]
    pub fn is_square(&self) -> bool {
        self.num_rows == self.num_cols
    }

    /// Returns a reference to the entry at (row, col).
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.num_rows && col < self.num_cols {
            Some(&self.data[row * self.num_cols + col])
        } else {
            None
        }
    }

    /// Returns a slice of the specified row.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of range.
    #[must_use]
    pub fn row(&self, row: usize) -> &[T] {
        let start = row * self.num_cols;
        &self.data[start..start + self.num_cols]
    }

    /// Iterates over the rows as slices.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> {
        self.data.chunks_exact(self.num_cols)
    }

    /// Returns the entries in row-major order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consumes the matrix, returning its row-major buffer.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T: Ring> Matrix<T> {
    /// Creates a matrix with every entry set to `value`.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    #[must_use]
    pub fn filled(num_rows: usize, num_cols: usize, value: T) -> Self {
        assert!(
            num_rows > 0 && num_cols > 0,
            "matrix must have at least one row and one column"
        );
        Self::from_parts(num_rows, num_cols, vec![value; num_rows * num_cols])
    }

    /// Creates a matrix filled with zeros.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    #[must_use]
    pub fn zeros(num_rows: usize, num_cols: usize) -> Self {
        Self::filled(num_rows, num_cols, T::zero())
    }

    /// Creates an identity matrix.
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m[(i, i)] = T::one();
        }
        m
    }

    /// Returns the entries as nested rows.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.iter_rows().map(<[T]>::to_vec).collect()
    }

    /// Returns the transpose of the matrix.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.len());
        for j in 0..self.num_cols {
            for i in 0..self.num_rows {
                data.push(self[(i, j)].clone());
            }
        }
        Self::from_parts(self.num_cols, self.num_rows, data)
    }

    /// Multiplies every entry by -1.
    #[must_use]
    pub fn negate(&self) -> Self {
        self.map(|v| -v.clone())
    }

    /// Scales all entries by a scalar.
    #[must_use]
    pub fn scale(&self, scalar: &T) -> Self {
        self.map(|v| v.clone() * scalar.clone())
    }

    /// Returns true if every entry is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(T::is_zero)
    }

    /// Applies `f` to every entry.
    pub(crate) fn map(&self, f: impl Fn(&T) -> T) -> Self {
        Self::from_parts(self.num_rows, self.num_cols, self.data.iter().map(f).collect())
    }

    /// Combines two matrices of the same shape entry by entry.
    pub(crate) fn zip_with(&self, other: &Self, f: impl Fn(&T, &T) -> T) -> Self {
        debug_assert_eq!(self.dimensions(), other.dimensions());
        Self::from_parts(
            self.num_rows,
            self.num_cols,
            self.data.iter().zip(&other.data).map(|(a, b)| f(a, b)).collect(),
        )
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        assert!(col < self.num_cols, "column {col} out of range");
        &self.data[row * self.num_cols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        assert!(col < self.num_cols, "column {col} out of range");
        &mut self.data[row * self.num_cols + col]
    }
}

impl<T: Ring> Neg for &Matrix<T> {
    type Output = Matrix<T>;

    fn neg(self) -> Matrix<T> {
        self.negate()
    }
}

impl<T: Ring> Neg for Matrix<T> {
    type Output = Matrix<T>;

    fn neg(self) -> Matrix<T> {
        Matrix {
            data: self.data.into_iter().map(Neg::neg).collect(),
            num_rows: self.num_rows,
            num_cols: self.num_cols,
        }
    }
}

/// Formats as nested brackets, e.g. `[[1, 2], [3, 4]]`.
impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, row) in self.iter_rows().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str("[")?;
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{value}")?;
            }
            f.write_str("]")?;
        }
        f.write_str("]")
    }
}
