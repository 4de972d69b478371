//! Property-based tests for polynomial arithmetic.

use proptest::prelude::*;

use crate::monomial::Monomial;
use crate::poly::Polynomial;
use crate::rational::Q;
use crate::scalar::Scalar;

// Strategy for generating small rational coefficients
fn small_coeff() -> impl Strategy<Value = Q> {
    (-100i64..100i64).prop_map(Q::from_integer)
}

// Strategy for generating monomials in up to 3 variables, degree <= 4
fn small_monomial() -> impl Strategy<Value = Monomial> {
    proptest::collection::vec(0u32..=4, 0..=3).prop_map(|e| Monomial::from_exponents(&e))
}

// Strategy for generating small sparse polynomials
fn small_poly() -> impl Strategy<Value = Polynomial<Q>> {
    proptest::collection::vec((small_monomial(), small_coeff()), 0..=5)
        .prop_map(Polynomial::new)
}

proptest! {
    // Polynomial ring axioms

    #[test]
    fn poly_add_commutative(a in small_poly(), b in small_poly()) {
        prop_assert_eq!(a.add(&b), b.add(&a));
    }

    #[test]
    fn poly_add_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
        prop_assert_eq!(a.add(&b).add(&c), a.add(&b.add(&c)));
    }

    #[test]
    fn poly_mul_commutative(a in small_poly(), b in small_poly()) {
        prop_assert_eq!(a.mul(&b), b.mul(&a));
    }

    #[test]
    fn poly_mul_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
        prop_assert_eq!(a.mul(&b).mul(&c), a.mul(&b.mul(&c)));
    }

    #[test]
    fn poly_distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
        // a * (b + c) = a * b + a * c
        prop_assert_eq!(a.mul(&b.add(&c)), a.mul(&b).add(&a.mul(&c)));
    }

    #[test]
    fn poly_sub_self_is_zero(a in small_poly()) {
        prop_assert!(a.sub(&a).is_zero());
    }

    // Canonical-form invariants

    #[test]
    fn poly_no_zero_coefficients(a in small_poly(), b in small_poly()) {
        for (_, c) in a.mul(&b).terms() {
            prop_assert!(!c.is_zero());
        }
    }

    #[test]
    fn poly_terms_strictly_descending(a in small_poly(), b in small_poly()) {
        let p = a.add(&b);
        for pair in p.terms().windows(2) {
            prop_assert!(pair[0].0 > pair[1].0);
        }
    }

    // Monomial laws

    #[test]
    fn monomial_mul_degree_adds(a in small_monomial(), b in small_monomial()) {
        prop_assert_eq!(
            a.mul(&b).total_degree(),
            a.total_degree() + b.total_degree()
        );
    }

    #[test]
    fn monomial_div_roundtrip(a in small_monomial(), b in small_monomial()) {
        let prod = a.mul(&b);
        prop_assert_eq!(prod.checked_div(&b), Some(a));
    }
}
