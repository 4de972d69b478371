//! # gramlift-algebra
//!
//! Scalar coefficient rings, monomials and sparse multivariate polynomials
//! for the gramlift sum-of-squares toolkit.
//!
//! This crate provides:
//! - `Scalar`/`Field` traits for exact coefficient arithmetic
//! - `Q`, the field of rationals backed by `num_rational`
//! - Trailing-zero-canonical exponent-vector monomials with grevlex ordering
//! - Sparse multivariate polynomials with sorted term storage
//! - The variable table distinguishing parameters from decision variables

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod monomial;
pub mod poly;
pub mod rational;
pub mod scalar;
pub mod symbols;

#[cfg(test)]
mod proptests;

pub use monomial::Monomial;
pub use poly::Polynomial;
pub use rational::Q;
pub use scalar::{Field, Scalar};
pub use symbols::{VarId, VarKind, VarTable};
