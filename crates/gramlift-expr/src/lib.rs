//! # gramlift-expr
//!
//! Lazy matrix expressions over sparse polynomial matrices.
//!
//! This crate provides:
//! - Arena-allocated matrix expression DAGs with lightweight handles
//! - Sparse matrices of multivariate polynomials
//! - A state-threaded, work-stack evaluator with per-call memoization
//! - Shape contracts with construction-site capture
//!
//! Expressions are built once, immutably, and lowered to a concrete
//! [`SparseMatrix`] in a single post-order pass.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod eval;
pub mod loc;
pub mod matrix;
pub mod node;


pub use error::EvalError;
pub use eval::{evaluate, EvalContext};
pub use loc::SourceLocation;
pub use matrix::SparseMatrix;
pub use node::{ExprDag, MatrixExpr, NodeId};
