//! Property-based tests for the engine's algebraic contract.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use darboux_poly::{Coeff, Exponents, FlatPoly, Term};

    use crate::config::GcdConfig;
    use crate::engine::{CallCtx, GcdEngine};
    use crate::timebox::TimeBox;

    // Small arity-2 polynomials keep the euclidean chains short enough
    // for proptest's case counts.
    fn small_poly() -> impl Strategy<Value = Coeff> {
        proptest::collection::vec(((0u32..3, 0u32..3), -6i64..6), 1..4).prop_map(|terms| {
            Coeff::from_poly(FlatPoly::new(
                terms
                    .into_iter()
                    .map(|((ex, ey), c)| Term::new(Exponents::from_slice(&[ex, ey]), Coeff::int(c)))
                    .collect(),
                2,
            ))
        })
    }

    fn uncached_engine() -> GcdEngine {
        GcdEngine::with_initial_config(GcdConfig {
            cache_enabled: false,
            ..GcdConfig::default()
        })
    }

    fn divides(g: &Coeff, p: &Coeff) -> bool {
        p.is_zero() || p.checked_div_exact(g).is_some()
    }

    proptest! {
        #[test]
        fn gcd_commutative(a in small_poly(), b in small_poly()) {
            // without the cache the two orders take independent paths
            let engine = uncached_engine();
            let g1 = engine.gcd(&a, &b).unwrap();
            let g2 = engine.gcd(&b, &a).unwrap();
            prop_assert_eq!(g1, g2);
        }

        #[test]
        fn gcd_divides_both_operands(a in small_poly(), b in small_poly()) {
            let engine = GcdEngine::new();
            let g = engine.gcd(&a, &b).unwrap();
            if !g.is_zero() {
                prop_assert!(divides(&g, &a), "gcd {} does not divide {}", g, a);
                prop_assert!(divides(&g, &b), "gcd {} does not divide {}", g, b);
            }
        }

        #[test]
        fn gcd_zero_absorption(a in small_poly()) {
            let engine = GcdEngine::new();
            prop_assert_eq!(engine.gcd(&Coeff::zero(), &a).unwrap(), a.abs());
            prop_assert_eq!(engine.gcd(&a, &Coeff::zero()).unwrap(), a.abs());
        }

        #[test]
        fn gcd_idempotent(a in small_poly()) {
            let engine = GcdEngine::new();
            prop_assert_eq!(engine.gcd(&a, &a).unwrap(), a.abs());
        }

        #[test]
        fn gcd_scalar_reduction(m in -100i64..100, n in -100i64..100) {
            let engine = GcdEngine::new();
            let g = engine.gcd(&Coeff::int(m), &Coeff::int(n)).unwrap();
            let classical = {
                let (mut a, mut b) = (m.unsigned_abs(), n.unsigned_abs());
                while b != 0 {
                    let r = a % b;
                    a = b;
                    b = r;
                }
                a
            };
            #[allow(clippy::cast_possible_wrap)]
            let classical = Coeff::int(classical as i64);
            prop_assert_eq!(g, classical);
        }

        #[test]
        fn gcd_cache_transparent(a in small_poly(), b in small_poly()) {
            let cached = GcdEngine::new();
            let uncached = uncached_engine();
            prop_assert_eq!(cached.gcd(&a, &b).unwrap(), uncached.gcd(&a, &b).unwrap());
        }

        #[test]
        fn gcd_reorder_invariant(a in small_poly(), b in small_poly()) {
            // the variable-order optimizer is a pure performance
            // heuristic: running the recursion in the caller's
            // variable order must give the same normalized answer
            let engine = uncached_engine();
            let with_optimizer = engine.gcd(&a, &b).unwrap();

            let cfg = engine.config();
            let tb = TimeBox::unbounded();
            let ctx = CallCtx { tb: &tb, cfg: &cfg };
            let without_optimizer = engine.inner_gcd(&a, &b, &ctx).unwrap().abs();

            prop_assert_eq!(with_optimizer, without_optimizer);
        }

        #[test]
        fn lcm_times_gcd_is_product(a in small_poly(), b in small_poly()) {
            let engine = GcdEngine::new();
            let g = engine.gcd(&a, &b).unwrap();
            let l = engine.lcm(&a, &b).unwrap();
            prop_assert_eq!(g.mul(&l).abs(), a.mul(&b).abs());
        }
    }
}
