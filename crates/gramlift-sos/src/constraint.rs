//! Linear equality constraints over decision variables.

use gramlift_algebra::{Scalar, VarId, VarTable};

/// A linear equality `sum(coeff * var) == rhs`.
///
/// Terms are sorted by [`VarId`] and never carry zero coefficients, so two
/// constraints over the same combination compare equal.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct LinearConstraint<C: Scalar> {
    terms: Vec<(VarId, C)>,
    rhs: C,
}

impl<C: Scalar> LinearConstraint<C> {
    /// Creates a constraint from terms and a right-hand side.
    ///
    /// Terms are sorted, duplicates combined, zero coefficients dropped.
    #[must_use]
    pub fn new(terms: Vec<(VarId, C)>, rhs: C) -> Self {
        let mut terms = terms;
        terms.sort_by_key(|(id, _)| *id);

        let mut combined: Vec<(VarId, C)> = Vec::with_capacity(terms.len());
        for (id, c) in terms {
            match combined.last_mut() {
                Some((last_id, last_c)) if *last_id == id => {
                    *last_c = last_c.clone() + c;
                }
                _ => combined.push((id, c)),
            }
        }
        combined.retain(|(_, c)| !c.is_zero());

        Self {
            terms: combined,
            rhs,
        }
    }

    /// Returns the terms, sorted by variable.
    #[must_use]
    pub fn terms(&self) -> &[(VarId, C)] {
        &self.terms
    }

    /// Returns the right-hand side literal.
    #[must_use]
    pub fn rhs(&self) -> &C {
        &self.rhs
    }

    /// Returns the coefficient of a variable, zero if absent.
    #[must_use]
    pub fn coefficient(&self, id: VarId) -> C {
        self.terms
            .iter()
            .find(|(t, _)| *t == id)
            .map_or_else(C::zero, |(_, c)| c.clone())
    }

    /// Evaluates the left-hand side under an assignment.
    ///
    /// Variables missing from the assignment read as zero.
    #[must_use]
    pub fn lhs_under(&self, assignment: &dyn Fn(VarId) -> C) -> C {
        let mut acc = C::zero();
        for (id, c) in &self.terms {
            acc = acc + c.clone() * assignment(*id);
        }
        acc
    }

    /// Returns true if the assignment satisfies the constraint.
    #[must_use]
    pub fn satisfied_by(&self, assignment: &dyn Fn(VarId) -> C) -> bool {
        self.lhs_under(assignment) == self.rhs
    }

    /// Renders the constraint against a variable table.
    #[must_use]
    pub fn display(&self, vars: &VarTable) -> String {
        if self.terms.is_empty() {
            return format!("0 == {}", self.rhs);
        }

        let lhs: Vec<_> = self
            .terms
            .iter()
            .map(|(id, c)| {
                let name = vars.name(*id).unwrap_or("?");
                if c.is_one() {
                    name.to_string()
                } else {
                    format!("{c}*{name}")
                }
            })
            .collect();
        format!("{} == {}", lhs.join(" + "), self.rhs)
    }
}
