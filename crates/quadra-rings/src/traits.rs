//! The element trait shared by every matrix operation.

use std::fmt::Debug;
use std::ops::{Neg, Sub};

use num_traits::{One, Zero};

/// A ring is a set with addition and multiplication operations.
///
/// Matrix elements only need the ring operations: the engine never divides.
/// Identities come from `num_traits::Zero` and `num_traits::One`, so every
/// primitive signed integer and float is a `Ring` through the blanket impl.
///
/// # Laws
///
/// - Addition is associative and commutative with identity `zero()`
/// - Multiplication is associative with identity `one()`
/// - Multiplication distributes over addition
/// - Every element has an additive inverse (`neg`)
///
/// Floating point types satisfy these laws only up to rounding.
pub trait Ring: Clone + PartialEq + Debug + Zero + One + Sub<Output = Self> + Neg<Output = Self> {}

impl<T> Ring for T where
    T: Clone + PartialEq + Debug + Zero + One + Sub<Output = T> + Neg<Output = T>
{
}
