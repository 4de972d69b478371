//! Matrix expression nodes and the expression arena.
//!
//! Expressions are a closed sum type stored contiguously in an arena and
//! addressed by lightweight handles. Pushing the same handle under several
//! parents builds a DAG; the evaluator detects the sharing by handle
//! identity and lowers each node at most once.

use std::fmt::Write as _;

use gramlift_algebra::Scalar;

use crate::loc::SourceLocation;
use crate::matrix::SparseMatrix;

/// Shape predicate applied by a shape assertion.
pub type ShapePredicate = fn(usize, usize) -> bool;

/// Message template rendered when a shape assertion fails.
pub type ShapeMessage = fn(usize, usize) -> String;

/// A handle to a node in an [`ExprDag`].
///
/// A lightweight 32-bit index; two equal handles refer to the same node.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    /// Creates a handle from a raw index.
    #[must_use]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Returns the raw index of this handle.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Debug for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Node({})", self.0)
    }
}

/// A matrix expression node.
///
/// The set of variants is closed: the evaluator, the memoizer and the
/// pretty-printer all match exhaustively, so adding a combinator is a
/// compile-checked change across every consumer.
#[derive(Clone, Debug)]
pub enum MatrixExpr<C: Scalar> {
    /// Leaf wrapping a constant sparse matrix.
    Constant(SparseMatrix<C>),

    /// Kronecker product of two child expressions.
    Kron(NodeId, NodeId),

    /// Block tiling of a child expression.
    RepMat {
        /// The expression to tile.
        child: NodeId,
        /// Vertical and horizontal repetition factors.
        reps: (usize, usize),
    },

    /// Shape contract: identity pass-through when the predicate holds,
    /// evaluation error otherwise.
    AssertShape {
        /// The guarded expression.
        child: NodeId,
        /// Predicate over the child's evaluated shape.
        predicate: ShapePredicate,
        /// Message template invoked with the offending shape.
        message: ShapeMessage,
        /// Where the assertion was declared.
        origin: SourceLocation,
    },

    /// Symmetrization of a child expression.
    Symmetric(NodeId),
}

impl<C: Scalar> MatrixExpr<C> {
    /// Returns the children of this node, left to right.
    #[must_use]
    pub fn children(&self) -> Vec<NodeId> {
        match self {
            MatrixExpr::Constant(_) => Vec::new(),
            MatrixExpr::Kron(left, right) => vec![*left, *right],
            MatrixExpr::RepMat { child, .. }
            | MatrixExpr::AssertShape { child, .. }
            | MatrixExpr::Symmetric(child) => vec![*child],
        }
    }

    /// Returns the node kind name for diagnostics.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            MatrixExpr::Constant(_) => "Constant",
            MatrixExpr::Kron(_, _) => "Kron",
            MatrixExpr::RepMat { .. } => "RepMat",
            MatrixExpr::AssertShape { .. } => "AssertShape",
            MatrixExpr::Symmetric(_) => "Symmetric",
        }
    }
}

/// The arena holding a matrix expression DAG.
///
/// Nodes are immutable once pushed. Reusing a [`NodeId`] under several
/// parents shares the subexpression.
#[derive(Clone, Debug, Default)]
pub struct ExprDag<C: Scalar> {
    nodes: Vec<MatrixExpr<C>>,
}

impl<C: Scalar> ExprDag<C> {
    /// Creates an empty arena.
    #[must_use]
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Pushes a node, returning its handle.
    pub fn push(&mut self, node: MatrixExpr<C>) -> NodeId {
        let index = self.nodes.len();
        assert!(index < u32::MAX as usize, "expression arena capacity exceeded");

        self.nodes.push(node);
        NodeId::new(index as u32)
    }

    /// Gets the node at the given handle.
    ///
    /// # Panics
    ///
    /// Panics if the handle came from a different arena.
    #[must_use]
    pub fn get(&self, id: NodeId) -> &MatrixExpr<C> {
        &self.nodes[id.index()]
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the arena is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // === Convenience constructors ===

    /// Wraps a constant sparse matrix as a leaf.
    pub fn constant(&mut self, matrix: SparseMatrix<C>) -> NodeId {
        self.push(MatrixExpr::Constant(matrix))
    }

    /// Builds the Kronecker product of two expressions.
    pub fn kron(&mut self, left: NodeId, right: NodeId) -> NodeId {
        self.push(MatrixExpr::Kron(left, right))
    }

    /// Builds a block tiling of an expression.
    pub fn repmat(&mut self, child: NodeId, reps: (usize, usize)) -> NodeId {
        self.push(MatrixExpr::RepMat { child, reps })
    }

    /// Guards an expression with a shape contract.
    ///
    /// The declaration site is captured here, so failures report the line
    /// that built the assertion rather than the evaluator.
    #[track_caller]
    pub fn assert_shape(
        &mut self,
        child: NodeId,
        predicate: ShapePredicate,
        message: ShapeMessage,
    ) -> NodeId {
        self.push(MatrixExpr::AssertShape {
            child,
            predicate,
            message,
            origin: SourceLocation::caller(),
        })
    }

    /// Builds the symmetrization of an expression.
    pub fn symmetric(&mut self, child: NodeId) -> NodeId {
        self.push(MatrixExpr::Symmetric(child))
    }

    /// Renders the expression tree rooted at `id`.
    ///
    /// Shared subexpressions are printed each time they are reached; this
    /// is a debugging aid, not a canonical serialization.
    #[must_use]
    pub fn display(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.display_into(id, 0, &mut out);
        out
    }

    fn display_into(&self, id: NodeId, depth: usize, out: &mut String) {
        let indent = "  ".repeat(depth);
        match self.get(id) {
            MatrixExpr::Constant(m) => {
                let (r, c) = m.shape();
                let _ = writeln!(out, "{indent}Constant {r}x{c} ({} cells)", m.nnz());
            }
            MatrixExpr::Kron(left, right) => {
                let _ = writeln!(out, "{indent}Kron");
                self.display_into(*left, depth + 1, out);
                self.display_into(*right, depth + 1, out);
            }
            MatrixExpr::RepMat { child, reps } => {
                let _ = writeln!(out, "{indent}RepMat ({}, {})", reps.0, reps.1);
                self.display_into(*child, depth + 1, out);
            }
            MatrixExpr::AssertShape { child, origin, .. } => {
                let _ = writeln!(out, "{indent}AssertShape @ {origin}");
                self.display_into(*child, depth + 1, out);
            }
            MatrixExpr::Symmetric(child) => {
                let _ = writeln!(out, "{indent}Symmetric");
                self.display_into(*child, depth + 1, out);
            }
        }
    }
}
