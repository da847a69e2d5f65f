//! # quadra-linalg
//!
//! Dense matrix engine for quadra.
//!
//! This crate provides:
//! - `Matrix<T>`: a validated, row-major dense matrix over any `Ring`
//! - Variadic elementwise `add` and `subtract`
//! - Three interchangeable multiplication algorithms behind one `multiply`
//! - Square padding, cropping and quadrant decomposition
//! - Dimension checks used as the guard for every operation
//!
//! ## Algorithm Selection
//!
//! - `Algorithm::Standard`: triple loop, O(n³); opt-in row parallelism via `MultiplyConfig`
//! - `Algorithm::DivideAndConquer`: 8 recursive block products, still O(n³)
//! - `Algorithm::Strassen`: 7 recursive block products, O(n^2.807)
//!
//! All three produce identical results for every pair of compatible
//! operands, square or not.
//!
//! ```
//! use quadra_linalg::{multiply, Algorithm, Matrix};
//!
//! let a = Matrix::from_rows(vec![vec![2i64, -1], vec![1, 3]])?;
//! let b = Matrix::from_rows(vec![vec![1i64, 2, -1], vec![3, 4, 0]])?;
//! let c = multiply(&a, &b, Algorithm::Strassen)?;
//! assert_eq!(c.to_rows(), vec![vec![-1, 0, -2], vec![10, 14, -1]]);
//! # Ok::<(), quadra_linalg::MatrixError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod dimensions;
pub mod elementwise;
pub mod error;
pub mod matrix;
pub mod multiply;
pub mod padding;

mod random;

pub use dimensions::{check_dimensions, Dimensions, Operation};
pub use elementwise::{add, subtract};
pub use error::{MatrixError, Result};
pub use matrix::Matrix;
pub use multiply::{multiply, multiply_with, Algorithm, MultiplyConfig};
pub use padding::{crop, padded_side, split_quadrants, square_pad, Quadrants};

#[cfg(test)]
mod proptests;
#[cfg(test)]
mod tests;
