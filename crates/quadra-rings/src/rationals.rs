//! The field of rational numbers Q.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use dashu::integer::{IBig, UBig};
use dashu::rational::RBig;
use num_traits::{One, Zero};

/// An exact rational number.
///
/// Wraps `dashu::rational::RBig`. Values are always stored in lowest terms
/// with a positive denominator, so structural equality is numeric equality.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Q(pub RBig);

impl Q {
    /// Creates a new rational from numerator and denominator.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    #[must_use]
    pub fn new(num: i64, den: i64) -> Self {
        assert!(den != 0, "denominator cannot be zero");
        let num = if den < 0 { -IBig::from(num) } else { IBig::from(num) };
        Self(RBig::from_parts(num, UBig::from(den.unsigned_abs())))
    }

    /// Creates a rational from an integer.
    #[must_use]
    pub fn from_integer(n: i64) -> Self {
        Self(RBig::from(IBig::from(n)))
    }

    /// Returns the numerator in lowest terms.
    #[must_use]
    pub fn numerator(&self) -> IBig {
        self.0.numerator().clone()
    }

    /// Returns the (positive) denominator in lowest terms.
    #[must_use]
    pub fn denominator(&self) -> IBig {
        IBig::from(self.0.denominator().clone())
    }

    /// Returns the inner `RBig`.
    #[must_use]
    pub fn into_inner(self) -> RBig {
        self.0
    }
}

impl Zero for Q {
    fn zero() -> Self {
        Self(RBig::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.0 == RBig::ZERO
    }
}

impl One for Q {
    fn one() -> Self {
        Self(RBig::ONE)
    }

    fn is_one(&self) -> bool {
        self.0 == RBig::ONE
    }
}

impl Add for Q {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Q {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Mul for Q {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl Neg for Q {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl From<i32> for Q {
    fn from(value: i32) -> Self {
        Self::from_integer(i64::from(value))
    }
}

impl From<i64> for Q {
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

impl From<RBig> for Q {
    fn from(value: RBig) -> Self {
        Self(value)
    }
}

impl fmt::Display for Q {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
