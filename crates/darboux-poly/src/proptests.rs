//! Property-based tests for polynomial arithmetic and transforms.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use smallvec::smallvec;

    use crate::coeff::Coeff;
    use crate::flat::{Exponents, FlatPoly, Term};

    // Strategy for small integer coefficients
    fn small_coeff() -> impl Strategy<Value = Coeff> {
        (-20i64..20).prop_map(Coeff::int)
    }

    // Strategy for small arity-2 polynomials
    fn small_poly() -> impl Strategy<Value = FlatPoly> {
        proptest::collection::vec(((0u32..4, 0u32..4), small_coeff()), 0..6).prop_map(|terms| {
            FlatPoly::new(
                terms
                    .into_iter()
                    .map(|((ex, ey), c)| Term::new(smallvec![ex, ey], c))
                    .collect(),
                2,
            )
        })
    }

    // Strategy for small univariate polynomials
    fn small_univariate() -> impl Strategy<Value = FlatPoly> {
        proptest::collection::vec((0u32..6, small_coeff()), 0..5).prop_map(|terms| {
            FlatPoly::new(
                terms
                    .into_iter()
                    .map(|(e, c)| Term::new(Exponents::from_slice(&[e]), c))
                    .collect(),
                1,
            )
        })
    }

    proptest! {
        #[test]
        fn poly_add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.add(&b), b.add(&a));
        }

        #[test]
        fn poly_mul_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.mul(&b), b.mul(&a));
        }

        #[test]
        fn poly_distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
            let left = a.mul(&b.add(&c));
            let right = a.mul(&b).add(&a.mul(&c));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn poly_additive_inverse(a in small_poly()) {
            prop_assert!(a.add(&a.neg()).is_zero());
        }

        #[test]
        fn lower_raise_roundtrip(a in small_poly()) {
            prop_assert_eq!(a.lower_arity().raise_arity(2), a);
        }

        #[test]
        fn exact_division_roundtrip(a in small_poly(), b in small_poly()) {
            // a * b is always exactly divisible by a nonzero b
            if !b.is_zero() {
                let product = a.mul(&b);
                let q = product.checked_div_exact(&b);
                prop_assert_eq!(q, Some(a));
            }
        }

        #[test]
        fn pseudo_remainder_degree_drops(u in small_univariate(), v in small_univariate()) {
            if !v.is_zero() && v.degree() >= 1 && !u.is_zero() {
                let r = u.pseudo_remainder(&v);
                prop_assert!(r.is_zero() || r.degree() < v.degree());
            }
        }

        #[test]
        fn map_exponents_swap_involution(a in small_poly()) {
            let swap = |e: &[u32]| -> Exponents { smallvec![e[1], e[0]] };
            prop_assert_eq!(a.map_exponents(swap).map_exponents(swap), a);
        }
    }
}
