//! # quadra-rings
//!
//! Numeric element types for quadra matrices.
//!
//! This crate provides:
//! - The `Ring` trait: the arithmetic a matrix element must support
//! - Implementations for machine integers (`i32`, `i64`, `i128`) and `f64`
//! - Arbitrary precision integers `Z` and exact rationals `Q`, backed by `dashu`
//!
//! Machine integers follow Rust's usual overflow rules. Use `Z` or `Q` when
//! intermediate sums may exceed the machine range; Strassen's auxiliary sums
//! grow faster than the standard algorithm's.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod integers;
pub mod rationals;
pub mod traits;

#[cfg(test)]
mod proptests;

pub use integers::Z;
pub use rationals::Q;
pub use traits::Ring;
