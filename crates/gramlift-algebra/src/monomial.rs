//! Exponent-vector monomials.
//!
//! A monomial is a product of variable powers, stored as one exponent per
//! variable index. Exponent vectors are kept in canonical form with trailing
//! zeros trimmed, so monomials built against variable tables of different
//! sizes compare equal whenever they are mathematically equal.

use std::cmp::Ordering;

use smallvec::SmallVec;

use crate::symbols::{VarId, VarTable};

/// A multivariate monomial.
///
/// Position `i` of the exponent vector is the power of the variable with
/// [`VarId`] `i`. The constant monomial 1 is the empty vector.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct Monomial(SmallVec<[u32; 6]>);

impl Monomial {
    /// Creates the monomial 1 (all exponents zero).
    #[must_use]
    pub fn one() -> Self {
        Self(SmallVec::new())
    }

    /// Creates the monomial for a single variable.
    #[must_use]
    pub fn var(id: VarId) -> Self {
        let mut exps = SmallVec::new();
        exps.resize(id.index() + 1, 0);
        exps[id.index()] = 1;
        Self(exps)
    }

    /// Creates a monomial from an exponent slice.
    #[must_use]
    pub fn from_exponents(exps: &[u32]) -> Self {
        let mut m = Self(SmallVec::from_slice(exps));
        m.trim();
        m
    }

    /// Returns the exponent of the variable at index `i`.
    ///
    /// Indices past the stored vector read as zero.
    #[must_use]
    pub fn exponent(&self, i: usize) -> u32 {
        self.0.get(i).copied().unwrap_or(0)
    }

    /// Returns the exponent of a variable.
    #[must_use]
    pub fn degree_in(&self, id: VarId) -> u32 {
        self.exponent(id.index())
    }

    /// Returns the number of variable slots in use.
    #[must_use]
    pub fn num_vars(&self) -> usize {
        self.0.len()
    }

    /// Returns true if this is the constant monomial 1.
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.0.is_empty()
    }

    /// Multiplies two monomials (adds exponents).
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        let (longer, shorter) = if self.0.len() >= other.0.len() {
            (&self.0, &other.0)
        } else {
            (&other.0, &self.0)
        };
        let mut exps = longer.clone();
        for (i, e) in shorter.iter().enumerate() {
            exps[i] += e;
        }
        // Addition of canonical vectors cannot create trailing zeros.
        Self(exps)
    }

    /// Divides by another monomial if every exponent stays non-negative.
    #[must_use]
    pub fn checked_div(&self, other: &Self) -> Option<Self> {
        if other.0.len() > self.0.len() {
            return None;
        }
        let mut exps = self.0.clone();
        for (i, e) in other.0.iter().enumerate() {
            exps[i] = exps[i].checked_sub(*e)?;
        }
        let mut m = Self(exps);
        m.trim();
        Some(m)
    }

    /// Computes the total degree.
    #[must_use]
    pub fn total_degree(&self) -> u32 {
        self.0.iter().sum()
    }

    /// Iterates over the variables appearing with nonzero exponent.
    pub fn variables(&self) -> impl Iterator<Item = VarId> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter(|(_, &e)| e > 0)
            .map(|(i, _)| VarId::new(i as u32))
    }

    /// Renders the monomial against a variable table.
    #[must_use]
    pub fn display(&self, vars: &VarTable) -> String {
        if self.is_one() {
            return "1".to_string();
        }

        let mut parts = Vec::new();
        for id in self.variables() {
            let name = vars.name(id).unwrap_or("?");
            let e = self.degree_in(id);
            if e == 1 {
                parts.push(name.to_string());
            } else {
                parts.push(format!("{name}^{e}"));
            }
        }
        parts.join("*")
    }

    fn trim(&mut self) {
        while self.0.last() == Some(&0) {
            self.0.pop();
        }
    }
}

/// Compares two monomials by graded reverse lexicographic order.
#[must_use]
pub fn cmp_grevlex(a: &Monomial, b: &Monomial) -> Ordering {
    match a.total_degree().cmp(&b.total_degree()) {
        Ordering::Equal => {}
        ord => return ord,
    }

    let n = a.num_vars().max(b.num_vars());
    for i in (0..n).rev() {
        match b.exponent(i).cmp(&a.exponent(i)) {
            Ordering::Equal => continue,
            ord => return ord,
        }
    }
    Ordering::Equal
}

impl PartialOrd for Monomial {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Monomial {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_grevlex(self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(i: u32) -> VarId {
        VarId::new(i)
    }

    #[test]
    fn test_basic() {
        let x = Monomial::var(v(0));
        let y = Monomial::var(v(1));

        assert_eq!(x.exponent(0), 1);
        assert_eq!(x.exponent(1), 0);
        assert_eq!(y.exponent(1), 1);
        assert!(Monomial::one().is_one());
    }

    #[test]
    fn test_mul() {
        let x = Monomial::var(v(0));
        let y = Monomial::var(v(1));

        let xy = x.mul(&y);
        assert_eq!(xy.exponent(0), 1);
        assert_eq!(xy.exponent(1), 1);

        let x2y = x.mul(&xy);
        assert_eq!(x2y, Monomial::from_exponents(&[2, 1]));
    }

    #[test]
    fn test_div() {
        let x2y = Monomial::from_exponents(&[2, 1]);
        let xy = Monomial::from_exponents(&[1, 1]);
        let x = Monomial::var(v(0));

        assert_eq!(x2y.checked_div(&xy), Some(x));
        assert_eq!(xy.checked_div(&x2y), None);
    }

    #[test]
    fn test_trailing_zero_canonical() {
        // x over a 3-variable table equals x over a 1-variable table
        let a = Monomial::from_exponents(&[1, 0, 0]);
        let b = Monomial::from_exponents(&[1]);
        assert_eq!(a, b);
        assert_eq!(a.num_vars(), 1);
    }

    #[test]
    fn test_grevlex_order() {
        let x2 = Monomial::from_exponents(&[2, 0]);
        let xy = Monomial::from_exponents(&[1, 1]);
        let y2 = Monomial::from_exponents(&[0, 2]);
        let one = Monomial::one();

        // In grevlex: x^2 > xy > y^2 > 1
        assert!(x2 > xy);
        assert!(xy > y2);
        assert!(y2 > one);
    }
}
