//! Square padding, cropping and quadrant decomposition.
//!
//! The recursive multiplication algorithms work on even-sided squares.
//! Operands are padded with zeros up to a common side, split into four
//! quadrants at the midpoint, and the combined result is cropped back to
//! the true output shape. Zero padding leaves every entry of the valid
//! sub-region unchanged.

use quadra_rings::Ring;

use crate::dimensions::Dimensions;
use crate::error::{MatrixError, Result};
use crate::matrix::Matrix;

/// Returns a `target_side × target_side` copy of `matrix` with `matrix` in
/// the top-left corner and `fill` everywhere else.
///
/// The result never shares storage with the input, including when no
/// padding is needed.
///
/// # Errors
///
/// Returns [`MatrixError::ResizeOutOfBounds`] if `target_side` is smaller
/// than either dimension of `matrix`.
pub fn square_pad<T: Ring>(matrix: &Matrix<T>, target_side: usize, fill: T) -> Result<Matrix<T>> {
    let dimensions = matrix.dimensions();
    if target_side < dimensions.rows || target_side < dimensions.cols {
        return Err(MatrixError::ResizeOutOfBounds {
            dimensions,
            target_rows: target_side,
            target_cols: target_side,
        });
    }
    if dimensions == Dimensions::new(target_side, target_side) {
        return Ok(matrix.clone());
    }

    let mut data = Vec::with_capacity(target_side * target_side);
    for row in matrix.iter_rows() {
        data.extend_from_slice(row);
        data.resize(data.len() + target_side - dimensions.cols, fill.clone());
    }
    data.resize(target_side * target_side, fill);
    Ok(Matrix::from_parts(target_side, target_side, data))
}

/// Returns the top-left `rows × cols` block of `matrix`.
///
/// # Errors
///
/// Returns [`MatrixError::Empty`] if either target is zero and
/// [`MatrixError::ResizeOutOfBounds`] if either exceeds the matrix.
pub fn crop<T: Ring>(matrix: &Matrix<T>, rows: usize, cols: usize) -> Result<Matrix<T>> {
    if rows == 0 || cols == 0 {
        return Err(MatrixError::Empty);
    }
    if rows > matrix.rows() || cols > matrix.cols() {
        return Err(MatrixError::ResizeOutOfBounds {
            dimensions: matrix.dimensions(),
            target_rows: rows,
            target_cols: cols,
        });
    }
    Ok(block(matrix, 0, 0, rows, cols))
}

/// Smallest even side that covers every dimension of both operands.
#[must_use]
pub fn padded_side(a: Dimensions, b: Dimensions) -> usize {
    let side = a.max_extent().max(b.max_extent());
    side + side % 2
}

/// The four equal blocks of an even-sided square matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quadrants<T> {
    /// Rows and columns `0..half`.
    pub top_left: Matrix<T>,
    /// Rows `0..half`, columns `half..`.
    pub top_right: Matrix<T>,
    /// Rows `half..`, columns `0..half`.
    pub bottom_left: Matrix<T>,
    /// Rows and columns `half..`.
    pub bottom_right: Matrix<T>,
}

impl<T: Ring> Quadrants<T> {
    /// Reassembles the quadrants into one matrix of twice the side.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::QuadrantMismatch`] unless all four blocks are
    /// squares of one shape.
    pub fn join(&self) -> Result<Matrix<T>> {
        let expected = self.top_left.dimensions();
        let blocks = [
            &self.top_left,
            &self.top_right,
            &self.bottom_left,
            &self.bottom_right,
        ];
        if let Some(found) = blocks
            .iter()
            .map(|b| b.dimensions())
            .find(|d| *d != expected || !d.is_square())
        {
            return Err(MatrixError::QuadrantMismatch { expected, found });
        }

        let half = expected.rows;
        let side = 2 * half;
        let mut data = Vec::with_capacity(side * side);
        for (left, right) in [
            (&self.top_left, &self.top_right),
            (&self.bottom_left, &self.bottom_right),
        ] {
            for (l, r) in left.iter_rows().zip(right.iter_rows()) {
                data.extend_from_slice(l);
                data.extend_from_slice(r);
            }
        }
        Ok(Matrix::from_parts(side, side, data))
    }
}

/// Splits an even-sided square matrix at its midpoint along both axes.
///
/// # Errors
///
/// Returns [`MatrixError::UnevenSplit`] if `matrix` is not square or its
/// side is odd.
pub fn split_quadrants<T: Ring>(matrix: &Matrix<T>) -> Result<Quadrants<T>> {
    let side = matrix.rows();
    if !matrix.is_square() || side % 2 != 0 {
        return Err(MatrixError::UnevenSplit(matrix.dimensions()));
    }
    let half = side / 2;
    Ok(Quadrants {
        top_left: block(matrix, 0, 0, half, half),
        top_right: block(matrix, 0, half, half, half),
        bottom_left: block(matrix, half, 0, half, half),
        bottom_right: block(matrix, half, half, half, half),
    })
}

/// Copies the `rows × cols` block starting at `(row, col)`.
fn block<T: Ring>(matrix: &Matrix<T>, row: usize, col: usize, rows: usize, cols: usize) -> Matrix<T> {
    let mut data = Vec::with_capacity(rows * cols);
    for r in row..row + rows {
        data.extend_from_slice(&matrix.row(r)[col..col + cols]);
    }
    Matrix::from_parts(rows, cols, data)
}
