//! Variadic elementwise addition and subtraction.

use quadra_rings::Ring;

use crate::dimensions::{check_dimensions, first_mismatch, Operation};
use crate::error::{MatrixError, Result};
use crate::matrix::Matrix;

/// Sums two or more matrices of the same shape.
///
/// # Errors
///
/// Returns [`MatrixError::InsufficientOperands`] for fewer than two
/// matrices and [`MatrixError::DimensionMismatch`] if any shape differs
/// from the first.
///
/// # Examples
///
/// ```
/// use quadra_linalg::{add, Matrix};
///
/// let a = Matrix::from_rows(vec![vec![1i64, 2], vec![3, 4]])?;
/// let b = Matrix::from_rows(vec![vec![10i64, 20], vec![30, 40]])?;
/// assert_eq!(add(&[&a, &b])?.to_rows(), vec![vec![11, 22], vec![33, 44]]);
/// # Ok::<(), quadra_linalg::MatrixError>(())
/// ```
pub fn add<T: Ring>(matrices: &[&Matrix<T>]) -> Result<Matrix<T>> {
    let (first, rest) = split_operands(matrices, Operation::Add)?;
    Ok(rest
        .iter()
        .fold((*first).clone(), |acc, m| acc.zip_with(m, |a, b| a.clone() + b.clone())))
}

/// Subtracts every later matrix from the first: `m0 - m1 - m2 - ...`.
///
/// # Errors
///
/// Same as [`add`].
pub fn subtract<T: Ring>(matrices: &[&Matrix<T>]) -> Result<Matrix<T>> {
    let (first, rest) = split_operands(matrices, Operation::Subtract)?;
    Ok(rest
        .iter()
        .fold((*first).clone(), |acc, m| acc.zip_with(m, |a, b| a.clone() - b.clone())))
}

fn split_operands<'a, 'm, T>(
    matrices: &'a [&'m Matrix<T>],
    operation: Operation,
) -> Result<(&'m Matrix<T>, &'a [&'m Matrix<T>])> {
    if matrices.len() < 2 {
        tracing::debug!(%operation, count = matrices.len(), "too few operands");
        return Err(MatrixError::InsufficientOperands {
            operation,
            count: matrices.len(),
        });
    }
    if !check_dimensions(matrices, operation) {
        let right = first_mismatch(matrices).map_or(matrices[1], |i| matrices[i]);
        tracing::debug!(%operation, left = %matrices[0].dimensions(), right = %right.dimensions(), "shape mismatch");
        return Err(MatrixError::DimensionMismatch {
            operation,
            left: matrices[0].dimensions(),
            right: right.dimensions(),
        });
    }
    Ok((matrices[0], &matrices[1..]))
}
