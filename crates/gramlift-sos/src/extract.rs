//! Decision-variable extraction.
//!
//! Walks already-lowered data, collecting the identifiers tagged as
//! decision variables. No evaluation side effects; the result set is
//! ordered by [`VarId`] so callers see a deterministic enumeration.

use std::collections::BTreeSet;

use gramlift_algebra::{Polynomial, Scalar, VarId, VarTable};
use gramlift_expr::SparseMatrix;

/// Collects the distinct decision variables appearing in a polynomial.
#[must_use]
pub fn decision_variables_of_poly<C: Scalar>(
    poly: &Polynomial<C>,
    vars: &VarTable,
) -> BTreeSet<VarId> {
    let mut found = BTreeSet::new();
    for (monomial, _) in poly.terms() {
        for id in monomial.variables() {
            if vars.is_decision(id) {
                found.insert(id);
            }
        }
    }
    found
}

/// Collects the distinct decision variables appearing in a lowered matrix.
#[must_use]
pub fn decision_variables<C: Scalar>(
    matrix: &SparseMatrix<C>,
    vars: &VarTable,
) -> BTreeSet<VarId> {
    let mut found = BTreeSet::new();
    for (_, _, poly) in matrix.iter() {
        found.extend(decision_variables_of_poly(poly, vars));
    }
    found
}
