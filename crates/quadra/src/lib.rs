//! # Quadra
//!
//! Textbook dense matrix algorithms over exact and machine arithmetic.
//!
//! ## Features
//!
//! - **Exact Arithmetic**: arbitrary precision integers `Z` and rationals `Q`
//! - **Variadic Elementwise Ops**: `add` and `subtract` over any number of matrices
//! - **Three Multipliers**: standard, divide-and-conquer and Strassen behind one call
//! - **Padding Toolkit**: square padding, cropping and quadrant splits
//!
//! ## Quick Start
//!
//! ```rust
//! use quadra::prelude::*;
//!
//! let a = Matrix::from_rows(vec![vec![Z::new(2), Z::new(-1)], vec![Z::new(1), Z::new(3)]])?;
//! let b = Matrix::identity(2);
//! assert_eq!(multiply(&a, &b, Algorithm::Strassen)?, a);
//! # Ok::<(), MatrixError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use quadra_linalg as linalg;
pub use quadra_rings as rings;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use quadra_linalg::{
        add, check_dimensions, multiply, multiply_with, square_pad, subtract, Algorithm,
        Dimensions, Matrix, MatrixError, MultiplyConfig, Operation,
    };
    pub use quadra_rings::{Ring, Q, Z};
}
