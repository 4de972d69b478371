//! Evaluation errors.
//!
//! Every error is a problem-construction bug: detection raises immediately
//! and propagates through the evaluator without recovery.

use thiserror::Error;

use crate::loc::SourceLocation;

/// Errors raised while lowering a matrix expression.
#[derive(Clone, Debug, Error)]
pub enum EvalError {
    /// Child shapes are incompatible with the requested combination.
    #[error("shape mismatch in {op}: {detail}")]
    ShapeMismatch {
        /// The node kind that detected the mismatch.
        op: &'static str,
        /// Human-readable description naming the offending shapes.
        detail: String,
    },

    /// A shape assertion failed.
    ///
    /// Carries the message rendered from the declared template, the shape
    /// actually observed, and the site where the assertion was declared.
    #[error("shape contract violated at {origin}: {message} (observed {rows}x{cols})")]
    ContractViolation {
        /// The rendered message template.
        message: String,
        /// Where the assertion was declared.
        origin: SourceLocation,
        /// Observed row count.
        rows: usize,
        /// Observed column count.
        cols: usize,
    },
}
