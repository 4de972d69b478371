//! Coefficient traits.
//!
//! These traits describe the coefficient arithmetic polynomials are generic
//! over. They are deliberately small: gramlift only ever needs a commutative
//! ring for polynomial arithmetic and a field for the symmetrizer.

use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::ops::{Add, Mul, Neg, Sub};

/// A commutative coefficient ring.
///
/// # Laws
///
/// - Addition is associative and commutative with identity `zero()`
/// - Multiplication is associative and commutative with identity `one()`
/// - Multiplication distributes over addition
/// - Every element has an additive inverse (`neg`)
pub trait Scalar:
    Clone
    + Eq
    + Hash
    + Debug
    + Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
    /// The additive identity.
    fn zero() -> Self;

    /// The multiplicative identity.
    fn one() -> Self;

    /// Returns true if this is the additive identity.
    fn is_zero(&self) -> bool;

    /// Returns true if this is the multiplicative identity.
    fn is_one(&self) -> bool;

    /// Embeds a machine integer.
    fn from_i64(n: i64) -> Self;
}

/// A coefficient field.
///
/// Required by the symmetrizer, which halves cell sums, and by callers that
/// divide through constraints.
pub trait Field: Scalar {
    /// Computes the multiplicative inverse.
    ///
    /// Returns `None` if the element is zero.
    fn inv(&self) -> Option<Self>;

    /// Divides by another element, `None` on division by zero.
    fn checked_div(&self, other: &Self) -> Option<Self> {
        other.inv().map(|i| self.clone() * i)
    }

    /// The literal 1/2.
    ///
    /// Only meaningful in characteristic ≠ 2; every field gramlift ships
    /// satisfies that.
    fn half() -> Self {
        let two = Self::one() + Self::one();
        match two.inv() {
            Some(h) => h,
            // Unreachable outside characteristic 2.
            None => Self::zero(),
        }
    }
}
