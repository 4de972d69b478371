//! # gramlift-sos
//!
//! Sum-of-squares problem construction on top of gramlift's sparse
//! polynomial matrices.
//!
//! This crate provides:
//! - Extraction of decision variables from lowered matrices
//! - The Gram-matrix lift turning a scalar polynomial constraint into a
//!   symmetric unknown matrix plus linear equality constraints
//! - The problem container handed to a semidefinite backend
//!
//! Solving the resulting semidefinite program is out of scope; this crate
//! produces exactly what a backend consumes: symmetric unknown matrices to
//! be declared PSD and linear equalities over their entries.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod constraint;
pub mod error;
pub mod extract;
pub mod gram;
pub mod program;

pub use constraint::LinearConstraint;
pub use error::SosError;
pub use extract::{decision_variables, decision_variables_of_poly};
pub use gram::{standard_basis, to_gram_matrix, GramMatrix};
pub use program::SosProgram;
