//! The problem container handed to a semidefinite backend.
//!
//! A backend consumes exactly two things from this core: symmetric unknown
//! matrices to be declared positive semidefinite, and linear equality
//! constraints over their entries. Nothing here solves anything.

use gramlift_algebra::Scalar;

use crate::constraint::LinearConstraint;
use crate::gram::GramMatrix;

/// An assembled sum-of-squares program.
#[derive(Clone, Debug, Default)]
pub struct SosProgram<C: Scalar> {
    psd: Vec<GramMatrix>,
    equalities: Vec<LinearConstraint<C>>,
}

impl<C: Scalar> SosProgram<C> {
    /// Creates an empty program.
    #[must_use]
    pub fn new() -> Self {
        Self {
            psd: Vec::new(),
            equalities: Vec::new(),
        }
    }

    /// Adds a symmetric unknown matrix to be declared PSD.
    pub fn add_psd(&mut self, gram: GramMatrix) {
        self.psd.push(gram);
    }

    /// Adds a batch of linear equality constraints.
    pub fn add_equalities(&mut self, constraints: impl IntoIterator<Item = LinearConstraint<C>>) {
        self.equalities.extend(constraints);
    }

    /// Returns the matrices to be declared PSD.
    #[must_use]
    pub fn psd_matrices(&self) -> &[GramMatrix] {
        &self.psd
    }

    /// Returns the equality constraints.
    #[must_use]
    pub fn equalities(&self) -> &[LinearConstraint<C>] {
        &self.equalities
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gram::to_gram_matrix;
    use gramlift_algebra::{Monomial, Polynomial, Q, VarTable};
    use gramlift_expr::EvalContext;

    #[test]
    fn test_assemble() {
        let mut vars = VarTable::new();
        let x = vars.parameter("x");

        let poly = Polynomial::<Q>::var(x).mul(&Polynomial::var(x));
        let basis = vec![Monomial::one(), Monomial::var(x)];
        let (_, gram, constraints) =
            to_gram_matrix(EvalContext::with_vars(vars), &poly, &basis).unwrap();

        let mut program = SosProgram::new();
        program.add_psd(gram);
        program.add_equalities(constraints);

        assert_eq!(program.psd_matrices().len(), 1);
        assert!(!program.equalities().is_empty());
    }
}
