//! The field of rational numbers Q.

use num_rational::Ratio;
use num_traits::{One, Zero};

use crate::scalar::{Field, Scalar};

/// The field of rational numbers.
///
/// A wrapper around `num_rational::Ratio<i64>` that implements the
/// coefficient traits. Arithmetic is exact, so evaluation results are
/// reproducible bit-for-bit across runs.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Q(Ratio<i64>);

impl Q {
    /// Creates a new rational from numerator and denominator.
    ///
    /// # Panics
    ///
    /// Panics if `den` is zero.
    #[must_use]
    pub fn new(num: i64, den: i64) -> Self {
        Self(Ratio::new(num, den))
    }

    /// Creates a rational from an integer.
    #[must_use]
    pub fn from_integer(n: i64) -> Self {
        Self(Ratio::from_integer(n))
    }

    /// Returns the numerator (in lowest terms).
    #[must_use]
    pub fn numerator(&self) -> i64 {
        *self.0.numer()
    }

    /// Returns the denominator (in lowest terms, always positive).
    #[must_use]
    pub fn denominator(&self) -> i64 {
        *self.0.denom()
    }
}

impl Scalar for Q {
    fn zero() -> Self {
        Self(Ratio::zero())
    }

    fn one() -> Self {
        Self(Ratio::one())
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    fn is_one(&self) -> bool {
        self.0.is_one()
    }

    fn from_i64(n: i64) -> Self {
        Self::from_integer(n)
    }
}

impl Field for Q {
    fn inv(&self) -> Option<Self> {
        if self.0.is_zero() {
            None
        } else {
            Some(Self(self.0.recip()))
        }
    }
}

impl std::ops::Add for Q {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl std::ops::Sub for Q {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl std::ops::Mul for Q {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl std::ops::Neg for Q {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl From<i64> for Q {
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

impl std::fmt::Display for Q {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
