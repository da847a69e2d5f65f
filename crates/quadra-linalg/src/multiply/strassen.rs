//! Strassen's algorithm.
//!
//! Seven recursive products per level instead of eight, built from ten
//! quadrant sums and differences:
//!
//! ```text
//! S1 = B12 - B22   S2 = A11 + A12   S3 = A21 + A22   S4 = B21 - B11
//! S5 = A11 + A22   S6 = B11 + B22   S7 = A12 - A22   S8 = B21 + B22
//! S9 = A11 - A21   S10 = B11 + B12
//!
//! P1 = A11·S1   P2 = S2·B22   P3 = S3·B11   P4 = A22·S4
//! P5 = S5·S6    P6 = S7·S8    P7 = S9·S10
//!
//! C11 = P5 + P4 - P2 + P6   C12 = P1 + P2
//! C21 = P3 + P4             C22 = P5 + P1 - P3 - P7
//! ```
//!
//! Cost O(n^log2(7)) ≈ O(n^2.807). The extra additions make it slower than
//! the standard algorithm for small matrices.

use quadra_rings::Ring;

use super::{standard, BASE_SIDE};
use crate::elementwise::{add, subtract};
use crate::error::Result;
use crate::matrix::Matrix;
use crate::padding::{crop, padded_side, split_quadrants, square_pad, Quadrants};

/// Pads both operands to a common even side, multiplies, and crops the
/// product to `(a.rows, b.cols)`. Operands must already be compatible.
pub(crate) fn multiply<T: Ring>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>> {
    let side = padded_side(a.dimensions(), b.dimensions());
    tracing::trace!(side, "strassen on padded operands");
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

    let Quadrants {
        top_left: a11,
        top_right: a12,
        bottom_left: a21,
        bottom_right: a22,
    } = split_quadrants(a)?;
    let Quadrants {
        top_left: b11,
        top_right: b12,
        bottom_left: b21,
        bottom_right: b22,
    } = split_quadrants(b)?;

    let s1 = subtract(&[&b12, &b22])?;
    let s2 = add(&[&a11, &a12])?;
    let s3 = add(&[&a21, &a22])?;
    let s4 = subtract(&[&b21, &b11])?;
    let s5 = add(&[&a11, &a22])?;
    let s6 = add(&[&b11, &b22])?;
    let s7 = subtract(&[&a12, &a22])?;
    let s8 = add(&[&b21, &b22])?;
    let s9 = subtract(&[&a11, &a21])?;
    let s10 = add(&[&b11, &b12])?;

    let p1 = multiply_square(&a11, &s1)?;
    let p2 = multiply_square(&s2, &b22)?;
    let p3 = multiply_square(&s3, &b11)?;
    let p4 = multiply_square(&a22, &s4)?;
    let p5 = multiply_square(&s5, &s6)?;
    let p6 = multiply_square(&s7, &s8)?;
    let p7 = multiply_square(&s9, &s10)?;

    Quadrants {
        top_left: add(&[&subtract(&[&add(&[&p5, &p4])?, &p2])?, &p6])?,
        top_right: add(&[&p1, &p2])?,
        bottom_left: add(&[&p3, &p4])?,
        bottom_right: subtract(&[&add(&[&p5, &p1])?, &p3, &p7])?,
    }
    .join()
}
