//! Sparse multivariate polynomials.
//!
//! Terms are stored as (monomial, coefficient) pairs sorted descending by
//! grevlex. The representation is canonical: no zero coefficients, no
//! duplicate monomials. Every operation allocates a new polynomial; values
//! held by matrix cells are never mutated in place.

use crate::monomial::Monomial;
use crate::scalar::Scalar;
use crate::symbols::{VarId, VarTable};

/// A sparse multivariate polynomial over the coefficient ring `C`.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Polynomial<C: Scalar> {
    /// Terms sorted descending by grevlex, leading term first.
    terms: Vec<(Monomial, C)>,
}

impl<C: Scalar> Polynomial<C> {
    /// Creates a polynomial from terms.
    ///
    /// Terms are sorted, like terms combined, and zero terms dropped.
    #[must_use]
    pub fn new(terms: Vec<(Monomial, C)>) -> Self {
        let mut poly = Self { terms };
        poly.normalize();
        poly
    }

    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self { terms: Vec::new() }
    }

    /// Creates the constant polynomial 1.
    #[must_use]
    pub fn one() -> Self {
        Self {
            terms: vec![(Monomial::one(), C::one())],
        }
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub fn constant(c: C) -> Self {
        if c.is_zero() {
            Self::zero()
        } else {
            Self {
                terms: vec![(Monomial::one(), c)],
            }
        }
    }

    /// Creates the polynomial consisting of a single variable.
    #[must_use]
    pub fn var(id: VarId) -> Self {
        Self {
            terms: vec![(Monomial::var(id), C::one())],
        }
    }

    /// Creates a single-term polynomial `c * m`.
    #[must_use]
    pub fn monomial(m: Monomial, c: C) -> Self {
        if c.is_zero() {
            Self::zero()
        } else {
            Self { terms: vec![(m, c)] }
        }
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the number of terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if there are no terms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the terms, leading term first.
    #[must_use]
    pub fn terms(&self) -> &[(Monomial, C)] {
        &self.terms
    }

    /// Returns the coefficient of a monomial, zero if absent.
    #[must_use]
    pub fn coefficient(&self, m: &Monomial) -> C {
        self.terms
            .iter()
            .find(|(t, _)| t == m)
            .map_or_else(C::zero, |(_, c)| c.clone())
    }

    /// Sorts terms and combines like terms.
    fn normalize(&mut self) {
        self.terms.sort_by(|a, b| b.0.cmp(&a.0));

        let mut i = 0;
        while i < self.terms.len() {
            let mut j = i + 1;
            while j < self.terms.len() && self.terms[i].0 == self.terms[j].0 {
                let c = self.terms.remove(j).1;
                self.terms[i].1 = self.terms[i].1.clone() + c;
            }
            if self.terms[i].1.is_zero() {
                self.terms.remove(i);
            } else {
                i += 1;
            }
        }
    }

    /// Adds two polynomials.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let mut terms = self.terms.clone();
        terms.extend(other.terms.clone());
        Self::new(terms)
    }

    /// Negates a polynomial.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self {
            terms: self
                .terms
                .iter()
                .map(|(m, c)| (m.clone(), -c.clone()))
                .collect(),
        }
    }

    /// Subtracts two polynomials.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Multiplies two polynomials (convolution of term maps).
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }

        let mut terms = Vec::with_capacity(self.len() * other.len());
        for (m1, c1) in &self.terms {
            for (m2, c2) in &other.terms {
                terms.push((m1.mul(m2), c1.clone() * c2.clone()));
            }
        }

        Self::new(terms)
    }

    /// Multiplies by a scalar, returning a new polynomial.
    #[must_use]
    pub fn scale(&self, c: &C) -> Self {
        if c.is_zero() {
            return Self::zero();
        }

        Self {
            terms: self
                .terms
                .iter()
                .map(|(m, x)| (m.clone(), x.clone() * c.clone()))
                .collect(),
        }
    }

    /// Computes the total degree; zero for the zero polynomial.
    #[must_use]
    pub fn total_degree(&self) -> u32 {
        self.terms
            .iter()
            .map(|(m, _)| m.total_degree())
            .max()
            .unwrap_or(0)
    }

    /// Iterates over the distinct variables appearing in the polynomial.
    pub fn variables(&self) -> impl Iterator<Item = VarId> + '_ {
        let mut seen = Vec::new();
        self.terms
            .iter()
            .flat_map(|(m, _)| m.variables().collect::<Vec<_>>())
            .filter(move |id| {
                if seen.contains(id) {
                    false
                } else {
                    seen.push(*id);
                    true
                }
            })
    }

    /// Renders the polynomial against a variable table.
    #[must_use]
    pub fn display(&self, vars: &VarTable) -> String {
        if self.is_zero() {
            return "0".to_string();
        }

        let parts: Vec<_> = self
            .terms
            .iter()
            .map(|(m, c)| {
                let mon = m.display(vars);
                if mon == "1" {
                    format!("{c}")
                } else if c.is_one() {
                    mon
                } else {
                    format!("{c}*{mon}")
                }
            })
            .collect();

        parts.join(" + ")
    }
}
