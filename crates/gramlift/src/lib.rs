//! # gramlift
//!
//! A lazy expression-tree evaluator that lowers algebraic matrix
//! expressions into sparse polynomial matrices, used to build
//! sum-of-squares (SOS) optimization problems.
//!
//! Expressions are composed from constant sparse matrices and a closed set
//! of combinators (Kronecker product, block tiling, shape contracts,
//! symmetrization), then lowered in a single deterministic pass. The
//! Gram-matrix lift turns scalar polynomial constraints into symmetric
//! unknown matrices plus linear equalities, the exact shape a semidefinite
//! backend consumes.
//!
//! ## Quick Start
//!
//! ```rust
//! use gramlift::prelude::*;
//!
//! let mut vars = VarTable::new();
//! let x = vars.parameter("x");
//!
//! let mut dag = ExprDag::new();
//! let leaf = dag.constant(SparseMatrix::scalar(Polynomial::<Q>::var(x)));
//! let tiled = dag.repmat(leaf, (2, 2));
//!
//! let (ctx, matrix) = evaluate(EvalContext::with_vars(vars), &dag, tiled).unwrap();
//! assert_eq!(matrix.shape(), (2, 2));
//! assert_eq!(ctx.vars().len(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use gramlift_algebra as algebra;
pub use gramlift_expr as expr;
pub use gramlift_sos as sos;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use gramlift_algebra::{Field, Monomial, Polynomial, Q, Scalar, VarId, VarKind, VarTable};
    pub use gramlift_expr::{
        evaluate, EvalContext, EvalError, ExprDag, MatrixExpr, NodeId, SourceLocation,
        SparseMatrix,
    };
    pub use gramlift_sos::{
        decision_variables, standard_basis, to_gram_matrix, GramMatrix, LinearConstraint,
        SosError, SosProgram,
    };
}
