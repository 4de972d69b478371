//! The expression evaluator.
//!
//! `evaluate` lowers an expression DAG to a concrete sparse matrix in a
//! single post-order pass. The evaluation context is threaded value-style:
//! the caller hands it in, every step that needs bookkeeping produces a new
//! one, and the final context comes back with the result. No global state,
//! no interior mutability.
//!
//! Two properties the traversal guarantees:
//!
//! - **Sharing**: a handle reachable from several parents is lowered once;
//!   a per-call memo table keyed by handle supplies the cached matrix to
//!   every other parent. The table dies with the call.
//! - **Bounded native stack**: traversal runs on an explicit work stack, so
//!   chains of hundreds of combinators evaluate without recursion.

use rustc_hash::FxHashMap;

use gramlift_algebra::{Field, VarTable};

use crate::error::EvalError;
use crate::matrix::SparseMatrix;
use crate::node::{ExprDag, MatrixExpr, NodeId};

/// Bookkeeping threaded through evaluation and the Gram lift.
///
/// Owns the variable table and the fresh-symbol counter, so symbol
/// allocation is deterministic given the same starting context.
#[derive(Clone, Debug, Default)]
pub struct EvalContext {
    vars: VarTable,
}

impl EvalContext {
    /// Creates a context over an empty variable table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a context over an existing variable table.
    #[must_use]
    pub fn with_vars(vars: VarTable) -> Self {
        Self { vars }
    }

    /// Returns the variable table.
    #[must_use]
    pub fn vars(&self) -> &VarTable {
        &self.vars
    }

    /// Returns the variable table mutably.
    ///
    /// Used by components that allocate symbols while holding the context,
    /// such as the Gram-matrix lift.
    pub fn vars_mut(&mut self) -> &mut VarTable {
        &mut self.vars
    }

    /// Consumes the context, returning the variable table.
    #[must_use]
    pub fn into_vars(self) -> VarTable {
        self.vars
    }
}

/// Work items for the explicit post-order traversal.
enum Task {
    /// Ensure a node's children are scheduled before it is combined.
    Visit(NodeId),
    /// All children are lowered; combine them.
    Combine(NodeId),
}

/// Lowers the expression rooted at `root` to a sparse matrix.
///
/// Children of binary nodes are evaluated left to right; a shared handle is
/// lowered at most once per call.
///
/// # Errors
///
/// Propagates [`EvalError::ShapeMismatch`] from combination kernels and
/// [`EvalError::ContractViolation`] from failed shape assertions.
pub fn evaluate<C: Field>(
    ctx: EvalContext,
    dag: &ExprDag<C>,
    root: NodeId,
) -> Result<(EvalContext, SparseMatrix<C>), EvalError> {
    // Memo table scoped to this call; shared handles hit it instead of
    // re-evaluating.
    let mut memo: FxHashMap<NodeId, SparseMatrix<C>> = FxHashMap::default();
    let mut stack = vec![Task::Visit(root)];

    while let Some(task) = stack.pop() {
        match task {
            Task::Visit(id) => {
                if memo.contains_key(&id) {
                    continue;
                }
                let node = dag.get(id);
                if let MatrixExpr::Constant(matrix) = node {
                    memo.insert(id, matrix.clone());
                    continue;
                }
                stack.push(Task::Combine(id));
                // Reverse push so the leftmost child is visited first.
                for child in node.children().into_iter().rev() {
                    stack.push(Task::Visit(child));
                }
            }
            Task::Combine(id) => {
                let result = combine(dag.get(id), &memo)?;
                memo.insert(id, result);
            }
        }
    }

    // The loop terminates only after the root's Combine (or Visit, for a
    // leaf) has populated the table.
    let result = memo.remove(&root).expect("root lowered by traversal");
    Ok((ctx, result))
}

/// Combines a node from its already-lowered children.
fn combine<C: Field>(
    node: &MatrixExpr<C>,
    memo: &FxHashMap<NodeId, SparseMatrix<C>>,
) -> Result<SparseMatrix<C>, EvalError> {
    match node {
        // Leaves are handled in the Visit phase.
        MatrixExpr::Constant(matrix) => Ok(matrix.clone()),

        MatrixExpr::Kron(left, right) => Ok(memo[left].kron(&memo[right])),

        MatrixExpr::RepMat { child, reps } => memo[child].repmat(reps.0, reps.1),

        MatrixExpr::AssertShape {
            child,
            predicate,
            message,
            origin,
        } => {
            let matrix = &memo[child];
            let (rows, cols) = matrix.shape();
            if predicate(rows, cols) {
                Ok(matrix.clone())
            } else {
                Err(EvalError::ContractViolation {
                    message: message(rows, cols),
                    origin: *origin,
                    rows,
                    cols,
                })
            }
        }

        MatrixExpr::Symmetric(child) => Ok(memo[child].symmetrize()),
    }
}
