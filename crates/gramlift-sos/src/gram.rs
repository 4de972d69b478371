//! The Gram-matrix lift.
//!
//! A polynomial `p` is a sum of squares iff `p = mᵀ Q m` for some monomial
//! basis vector `m` and positive semidefinite `Q`. This module performs the
//! symbolic half of that reduction: it mints a symmetric matrix of fresh
//! decision variables and emits the linear equalities that force `mᵀ Q m`
//! to re-expand, coefficient by coefficient, to `p`. Declaring `Q` PSD is
//! the downstream solver's job.

use std::collections::{BTreeMap, BTreeSet};

use gramlift_algebra::{Monomial, Polynomial, Scalar, VarId};
use gramlift_expr::{EvalContext, SparseMatrix};

use crate::constraint::LinearConstraint;
use crate::error::SosError;

/// A symmetric matrix of decision-variable unknowns over a monomial basis.
///
/// Only the upper triangle is stored; `entry(i, j)` and `entry(j, i)`
/// return the same symbol.
#[derive(Clone, Debug)]
pub struct GramMatrix {
    basis: Vec<Monomial>,
    /// Upper triangle, row-major: (0,0), (0,1), ..., (0,k-1), (1,1), ...
    entries: Vec<VarId>,
}

impl GramMatrix {
    /// Returns the basis dimension `k`.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.basis.len()
    }

    /// Returns the monomial basis.
    #[must_use]
    pub fn basis(&self) -> &[Monomial] {
        &self.basis
    }

    /// Returns the unknown at `(i, j)`; symmetric in its arguments.
    ///
    /// # Panics
    ///
    /// Panics if an index is out of range.
    #[must_use]
    pub fn entry(&self, i: usize, j: usize) -> VarId {
        let k = self.dim();
        assert!(i < k && j < k, "gram index ({i}, {j}) outside {k}x{k}");
        let (i, j) = if i <= j { (i, j) } else { (j, i) };
        self.entries[i * k - i * (i + 1) / 2 + j]
    }

    /// Iterates over the stored upper-triangle entries as `(i, j, var)`.
    pub fn upper_triangle(&self) -> impl Iterator<Item = (usize, usize, VarId)> + '_ {
        let k = self.dim();
        (0..k)
            .flat_map(move |i| (i..k).map(move |j| (i, j)))
            .zip(self.entries.iter().copied())
            .map(|((i, j), v)| (i, j, v))
    }

    /// Materializes the unknown matrix as a sparse polynomial matrix.
    ///
    /// Mirror cells hold the same variable, so the result is symmetric by
    /// construction.
    #[must_use]
    pub fn to_matrix<C: Scalar>(&self) -> SparseMatrix<C> {
        let k = self.dim();
        let mut matrix = SparseMatrix::new(k, k);
        for (i, j, var) in self.upper_triangle() {
            matrix.insert(i, j, Polynomial::var(var));
            if i != j {
                matrix.insert(j, i, Polynomial::var(var));
            }
        }
        matrix
    }

    /// Re-expands `mᵀ Q m` under a concrete assignment of the unknowns.
    ///
    /// Test and verification helper: the round-trip property states that an
    /// assignment satisfying the emitted equalities re-expands to the
    /// lifted polynomial exactly.
    #[must_use]
    pub fn quadratic_form<C: Scalar>(&self, assignment: &dyn Fn(VarId) -> C) -> Polynomial<C> {
        let k = self.dim();
        let mut acc = Polynomial::zero();
        for i in 0..k {
            for j in 0..k {
                let coeff = assignment(self.entry(i, j));
                let product = self.basis[i].mul(&self.basis[j]);
                acc = acc.add(&Polynomial::monomial(product, coeff));
            }
        }
        acc
    }
}

/// Lifts a scalar polynomial constraint into a quadratic form.
///
/// Mints one fresh decision variable per upper-triangle entry of a `k x k`
/// symmetric matrix over `basis`, and emits, for every monomial appearing
/// in `poly` or in any basis-pair product, the equality forcing the
/// quadratic form's coefficient to match the polynomial's. Off-diagonal
/// unknowns represent both mirror cells, so they enter their equality with
/// coefficient 2. Monomial-pair products absent from `poly` are constrained
/// to zero, which lets an over-parameterized basis net out.
///
/// # Errors
///
/// - [`SosError::EmptyBasis`] if `basis` is empty.
/// - [`SosError::BasisInsufficient`] if some monomial of `poly` is not the
///   product of any basis pair.
pub fn to_gram_matrix<C: Scalar>(
    mut ctx: EvalContext,
    poly: &Polynomial<C>,
    basis: &[Monomial],
) -> Result<(EvalContext, GramMatrix, Vec<LinearConstraint<C>>), SosError> {
    if basis.is_empty() {
        return Err(SosError::EmptyBasis);
    }

    let k = basis.len();
    let entries: Vec<VarId> = (0..k * (k + 1) / 2)
        .map(|_| ctx.vars_mut().fresh_decision("q"))
        .collect();
    let gram = GramMatrix {
        basis: basis.to_vec(),
        entries,
    };

    // Which upper-triangle pairs produce each monomial.
    let mut products: BTreeMap<Monomial, Vec<(usize, usize)>> = BTreeMap::new();
    for i in 0..k {
        for j in i..k {
            products
                .entry(basis[i].mul(&basis[j]))
                .or_default()
                .push((i, j));
        }
    }

    // Every monomial either side mentions, in grevlex order.
    let mut targets: BTreeSet<Monomial> = products.keys().cloned().collect();
    for (m, _) in poly.terms() {
        targets.insert(m.clone());
    }

    let mut constraints = Vec::with_capacity(targets.len());
    for target in targets {
        let rhs = poly.coefficient(&target);
        let Some(pairs) = products.get(&target) else {
            // Reachable only for monomials of the polynomial itself.
            return Err(SosError::BasisInsufficient {
                monomial: target.display(ctx.vars()),
            });
        };

        let two = C::one() + C::one();
        let terms = pairs
            .iter()
            .map(|&(i, j)| {
                let coeff = if i == j { C::one() } else { two.clone() };
                (gram.entry(i, j), coeff)
            })
            .collect();
        constraints.push(LinearConstraint::new(terms, rhs));
    }

    Ok((ctx, gram, constraints))
}

/// Builds the standard monomial basis: every monomial over `vars` with
/// total degree at most `max_degree`, in ascending grevlex order.
#[must_use]
pub fn standard_basis(vars: &[VarId], max_degree: u32) -> Vec<Monomial> {
    let mut basis = BTreeSet::new();
    let mut exps = vec![0u32; vars.len()];
    enumerate_exponents(vars, max_degree, 0, &mut exps, &mut basis);
    basis.into_iter().collect()
}

fn enumerate_exponents(
    vars: &[VarId],
    budget: u32,
    pos: usize,
    exps: &mut Vec<u32>,
    out: &mut BTreeSet<Monomial>,
) {
    if pos == vars.len() {
        let mut m = Monomial::one();
        for (var, &e) in vars.iter().zip(exps.iter()) {
            for _ in 0..e {
                m = m.mul(&Monomial::var(*var));
            }
        }
        out.insert(m);
        return;
    }

    for e in 0..=budget {
        exps[pos] = e;
        enumerate_exponents(vars, budget - e, pos + 1, exps, out);
    }
    exps[pos] = 0;
}

#[cfg(test)]
mod tests {
    use super::*;
    use gramlift_algebra::{Q, Scalar, VarTable};

    fn q(n: i64) -> Q {
        Q::from_integer(n)
    }

    /// Lifts x^2 + 2xy + y^2 over the basis (1, x, y), the canonical
    /// round-trip example.
    fn lift_square_sum() -> (EvalContext, GramMatrix, Vec<LinearConstraint<Q>>) {
        let mut vars = VarTable::new();
        let x = vars.parameter("x");
        let y = vars.parameter("y");

        let px = Polynomial::<Q>::var(x);
        let py = Polynomial::<Q>::var(y);
        // (x + y)^2
        let poly = px.add(&py).mul(&px.add(&py));

        let basis = vec![Monomial::one(), Monomial::var(x), Monomial::var(y)];
        to_gram_matrix(EvalContext::with_vars(vars), &poly, &basis).unwrap()
    }

    #[test]
    fn test_lift_shape_and_kinds() {
        let (ctx, gram, _) = lift_square_sum();

        assert_eq!(gram.dim(), 3);
        // 6 fresh upper-triangle unknowns, all decision variables
        for (_, _, var) in gram.upper_triangle() {
            assert!(ctx.vars().is_decision(var));
        }
        assert_eq!(gram.upper_triangle().count(), 6);
        // symmetric indexing
        assert_eq!(gram.entry(1, 2), gram.entry(2, 1));
    }

    #[test]
    fn test_round_trip() {
        let (_, gram, constraints) = lift_square_sum();

        // Q = [[0,0,0],[0,1,1],[0,1,1]] in basis (1, x, y)
        let assignment = |var: VarId| -> Q {
            for i in 0..3 {
                for j in i..3 {
                    if gram.entry(i, j) == var {
                        return if i >= 1 && j >= 1 { q(1) } else { q(0) };
                    }
                }
            }
            q(0)
        };

        for c in &constraints {
            assert!(c.satisfied_by(&assignment));
        }

        // mᵀ Q m re-expands to x^2 + 2xy + y^2 exactly
        let expanded = gram.quadratic_form(&assignment);
        let x = VarId::new(0);
        let y = VarId::new(1);
        let expected = Polynomial::<Q>::var(x)
            .add(&Polynomial::var(y))
            .mul(&Polynomial::var(x).add(&Polynomial::var(y)));
        assert_eq!(expanded, expected);
    }

    #[test]
    fn test_off_diagonal_coefficient_is_doubled() {
        let (_, gram, constraints) = lift_square_sum();

        // The xy equality reads 2*Q[1][2] == 2.
        let xy = Monomial::from_exponents(&[1, 1]);
        let c = constraints
            .iter()
            .find(|c| c.coefficient(gram.entry(1, 2)) != Q::zero())
            .unwrap();
        assert_eq!(c.coefficient(gram.entry(1, 2)), q(2));
        assert_eq!(c.rhs(), &q(2));
        // sanity: that equality came from the xy monomial
        assert_eq!(gram.basis()[1].mul(&gram.basis()[2]), xy);
    }

    #[test]
    fn test_overparameterized_basis_nets_to_zero() {
        let mut vars = VarTable::new();
        let x = vars.parameter("x");

        // p = x^2 over basis (1, x): the cross term x must net to zero.
        let poly = Polynomial::<Q>::var(x).mul(&Polynomial::var(x));
        let basis = vec![Monomial::one(), Monomial::var(x)];
        let (_, gram, constraints) =
            to_gram_matrix(EvalContext::with_vars(vars), &poly, &basis).unwrap();

        let cross = constraints
            .iter()
            .find(|c| c.coefficient(gram.entry(0, 1)) != Q::zero())
            .unwrap();
        assert_eq!(cross.rhs(), &Q::zero());
        assert_eq!(cross.coefficient(gram.entry(0, 1)), q(2));
    }

    #[test]
    fn test_basis_insufficient() {
        let mut vars = VarTable::new();
        let x = vars.parameter("x");

        // x^3 cannot be written as a product of two basis elements of (1, x)
        let poly = Polynomial::<Q>::var(x)
            .mul(&Polynomial::var(x))
            .mul(&Polynomial::var(x));
        let basis = vec![Monomial::one(), Monomial::var(x)];

        let err = to_gram_matrix(EvalContext::with_vars(vars), &poly, &basis).unwrap_err();
        match err {
            SosError::BasisInsufficient { monomial } => assert_eq!(monomial, "x^3"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_basis() {
        let poly = Polynomial::<Q>::one();
        let err = to_gram_matrix(EvalContext::new(), &poly, &[]).unwrap_err();
        assert!(matches!(err, SosError::EmptyBasis));
    }

    #[test]
    fn test_standard_basis() {
        let mut vars = VarTable::new();
        let x = vars.parameter("x");
        let y = vars.parameter("y");

        let basis = standard_basis(&[x, y], 2);
        // 1, x, y, x^2, xy, y^2
        assert_eq!(basis.len(), 6);
        assert_eq!(basis[0], Monomial::one());
        assert!(basis.contains(&Monomial::from_exponents(&[1, 1])));
        // ascending grevlex: constant first, top-degree last
        assert_eq!(basis.last().unwrap().total_degree(), 2);
    }

    #[test]
    fn test_unknown_matrix_is_symmetric() {
        let (_, gram, _) = lift_square_sum();
        let matrix: SparseMatrix<Q> = gram.to_matrix();

        assert_eq!(matrix.shape(), (3, 3));
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(matrix.get(i, j), matrix.get(j, i));
            }
        }
    }
}
