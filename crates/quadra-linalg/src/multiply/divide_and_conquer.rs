//! Divide-and-conquer block multiplication.
//!
//! With both operands split into quadrants,
//!
//! ```text
//! C11 = A11·B11 + A12·B21    C12 = A11·B12 + A12·B22
//! C21 = A21·B11 + A22·B21    C22 = A21·B12 + A22·B22
//! ```
//!
//! Eight recursive products per level, so the total cost stays O(n³).

use quadra_rings::Ring;

use super::{standard, BASE_SIDE};
use crate::elementwise::add;
use crate::error::Result;
use crate::matrix::Matrix;
use crate::padding::{crop, padded_side, split_quadrants, square_pad, Quadrants};

/// Pads both operands to a common even side, multiplies, and crops the
/// product to `(a.rows, b.cols)`. Operands must already be compatible.
pub(crate) fn multiply<T: Ring>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>> {
    let side = padded_side(a.dimensions(), b.dimensions());
    tracing::trace!(side, "divide-and-conquer on padded operands");
    let product = multiply_square(
        &square_pad(a, side, T::zero())?,
        &square_pad(b, side, T::zero())?,
    )?;
    crop(&product, a.rows(), b.cols())
}

fn multiply_square<T: Ring>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>> {
    let side = a.rows();
    if side <= BASE_SIDE {
        return Ok(standard::multiply(a, b));
    }
    if side % 2 == 1 {
        let even = side + 1;
        let product = multiply_square(
            &square_pad(a, even, T::zero())?,
            &square_pad(b, even, T::zero())?,
        )?;
        return crop(&product, side, side);
    }

    let a = split_quadrants(a)?;
    let b = split_quadrants(b)?;
    let block = |x: &Matrix<T>, y: &Matrix<T>, z: &Matrix<T>, w: &Matrix<T>| -> Result<Matrix<T>> {
        add(&[&multiply_square(x, y)?, &multiply_square(z, w)?])
    };

    Quadrants {
        top_left: block(&a.top_left, &b.top_left, &a.top_right, &b.bottom_left)?,
        top_right: block(&a.top_left, &b.top_right, &a.top_right, &b.bottom_right)?,
        bottom_left: block(&a.bottom_left, &b.top_left, &a.bottom_right, &b.bottom_left)?,
        bottom_right: block(&a.bottom_left, &b.top_right, &a.bottom_right, &b.bottom_right)?,
    }
    .join()
}
