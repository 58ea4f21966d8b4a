//! The memoizing orchestrator.
//!
//! `GcdEngine` owns the cache, the counters, and the configuration; it
//! is a value injected at call sites rather than process-global state.
//! A process-wide default instance exists as a convenience wrapper for
//! embedders that don't care to own one.

use parking_lot::RwLock;
use std::sync::OnceLock;
use tracing::debug;

use darboux_poly::{Coeff, FlatPoly};

use crate::cache::{GcdCache, PairKey};
use crate::config::GcdConfig;
use crate::content::content_and_primitive;
use crate::error::GcdError;
use crate::euclid::euclid_gcd;
use crate::reorder::optimal_order;
use crate::stats::GcdStats;
use crate::timebox::TimeBox;
use crate::trivial::{monomial_gcd, trivial_gcd};

/// Per-call context threaded through the recursion: the call's time
/// box and a snapshot of the configuration. Being a stack value keeps
/// deadlines strictly call-scoped.
pub(crate) struct CallCtx<'a> {
    pub(crate) tb: &'a TimeBox,
    pub(crate) cfg: &'a GcdConfig,
}

/// The multivariate polynomial GCD engine.
///
/// All methods take `&self`; the cache and counters are internally
/// synchronized, so independent calls may run concurrently from
/// different threads.
#[derive(Debug, Default)]
pub struct GcdEngine {
    cache: GcdCache,
    stats: GcdStats,
    config: RwLock<GcdConfig>,
}

impl GcdEngine {
    /// Creates an engine with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine with the given configuration.
    #[must_use]
    pub fn with_initial_config(config: GcdConfig) -> Self {
        Self {
            cache: GcdCache::new(),
            stats: GcdStats::new(),
            config: RwLock::new(config),
        }
    }

    /// Returns the memoization cache.
    #[must_use]
    pub fn cache(&self) -> &GcdCache {
        &self.cache
    }

    /// Returns the diagnostics counters.
    #[must_use]
    pub fn stats(&self) -> &GcdStats {
        &self.stats
    }

    /// Returns a copy of the current configuration.
    #[must_use]
    pub fn config(&self) -> GcdConfig {
        self.config.read().clone()
    }

    /// Replaces the configuration.
    pub fn set_config(&self, config: GcdConfig) {
        *self.config.write() = config;
    }

    /// Runs `f` with the configuration replaced by `overrides`,
    /// restoring the previous configuration afterwards (also on
    /// panic).
    pub fn with_config<R>(&self, overrides: GcdConfig, f: impl FnOnce(&Self) -> R) -> R {
        struct Restore<'a> {
            engine: &'a GcdEngine,
            prev: Option<GcdConfig>,
        }
        impl Drop for Restore<'_> {
            fn drop(&mut self) {
                if let Some(prev) = self.prev.take() {
                    *self.engine.config.write() = prev;
                }
            }
        }

        let prev = std::mem::replace(&mut *self.config.write(), overrides);
        let _restore = Restore {
            engine: self,
            prev: Some(prev),
        };
        f(self)
    }

    /// Computes the greatest common divisor of two operands.
    ///
    /// Operands are scalars or polynomials of matching arity. The
    /// result's sign is normalized (leading scalar positive).
    ///
    /// # Errors
    ///
    /// [`GcdError::ArityMismatch`] for polynomials of different arity,
    /// [`GcdError::Unsupported`] for inexact scalar operands,
    /// [`GcdError::Timeout`] when the configured time budget elapses,
    /// and [`GcdError::InexactDivision`] on internal invariant
    /// violations.
    pub fn gcd(&self, u: &Coeff, v: &Coeff) -> Result<Coeff, GcdError> {
        let cfg = self.config();
        let tb = TimeBox::with_budget(cfg.time_limit);
        let ctx = CallCtx { tb: &tb, cfg: &cfg };
        self.top_gcd(u, v, &ctx)
    }

    /// Computes the gcd of any number of operands by pairwise left
    /// fold, short-circuiting once the running result is the unit.
    ///
    /// The empty fold yields zero; a single operand yields its
    /// absolute value. All operands share one time budget.
    ///
    /// # Errors
    ///
    /// As for [`GcdEngine::gcd`].
    pub fn gcd_many(&self, operands: &[Coeff]) -> Result<Coeff, GcdError> {
        let cfg = self.config();
        let tb = TimeBox::with_budget(cfg.time_limit);
        let ctx = CallCtx { tb: &tb, cfg: &cfg };

        match operands {
            [] => Ok(Coeff::zero()),
            [only] => {
                validate_operand(only)?;
                Ok(only.abs())
            }
            [first, rest @ ..] => {
                let mut g = first.clone();
                for op in rest {
                    if g.is_one() {
                        break;
                    }
                    g = self.top_gcd(&g, op, &ctx)?;
                }
                Ok(g.abs())
            }
        }
    }

    /// Computes the least common multiple `abs(u*v / gcd(u, v))`.
    ///
    /// # Errors
    ///
    /// As for [`GcdEngine::gcd`]; a gcd that fails to divide the
    /// product is an internal invariant violation.
    pub fn lcm(&self, u: &Coeff, v: &Coeff) -> Result<Coeff, GcdError> {
        if u.is_zero() && v.is_zero() {
            return Ok(Coeff::zero());
        }
        let g = self.gcd(u, v)?;
        let product = u.mul(v);
        let q = product
            .checked_div_exact(&g)
            .ok_or_else(|| GcdError::InexactDivision("lcm division by gcd".into()))?;
        Ok(q.abs())
    }

    /// Computes the gcd of all first partial derivatives of a
    /// polynomial; defined as 1 for non-polynomial input.
    ///
    /// # Errors
    ///
    /// As for [`GcdEngine::gcd_many`].
    pub fn gcd_of_partials(&self, p: &Coeff) -> Result<Coeff, GcdError> {
        let Some(poly) = p.as_poly() else {
            return Ok(Coeff::one());
        };
        let partials: Vec<Coeff> = (0..poly.arity())
            .map(|var| Coeff::from_poly(poly.derivative(var)))
            .collect();
        self.gcd_many(&partials)
    }

    /// The top-level path: validation, disjoint-footprint
    /// short-circuit, variable reordering, recursion, inverse
    /// permutation, sign normalization.
    fn top_gcd(&self, u: &Coeff, v: &Coeff, ctx: &CallCtx<'_>) -> Result<Coeff, GcdError> {
        validate_operand(u)?;
        validate_operand(v)?;

        if let (Some(pu), Some(pv)) = (u.as_poly(), v.as_poly()) {
            if pu.arity() != pv.arity() {
                return Err(GcdError::ArityMismatch {
                    left: pu.arity(),
                    right: pv.arity(),
                });
            }

            if disjoint_footprints(pu, pv) {
                if ctx.cfg.debug {
                    debug!("disjoint variable footprints; gcd reduces to coefficient gcd");
                }
                let g = self.coefficients_gcd(pu, pv, ctx)?;
                return Ok(g.abs());
            }

            let perm = optimal_order(pu, pv);
            if perm.is_identity() {
                return Ok(self.inner_gcd(u, v, ctx)?.abs());
            }

            let up = Coeff::from_poly(perm.permute_poly(pu));
            let vp = Coeff::from_poly(perm.permute_poly(pv));
            let g = self.inner_gcd(&up, &vp, ctx)?;
            let g = match g.as_poly() {
                Some(p) if p.arity() == perm.len() => {
                    Coeff::from_poly(perm.inverse().permute_poly(p))
                }
                _ => g,
            };
            return Ok(g.abs());
        }

        Ok(self.inner_gcd(u, v, ctx)?.abs())
    }

    /// The recursive dispatcher with memoization. Sign is normalized
    /// by the top level only.
    pub(crate) fn inner_gcd(
        &self,
        u: &Coeff,
        v: &Coeff,
        ctx: &CallCtx<'_>,
    ) -> Result<Coeff, GcdError> {
        ctx.tb.check("gcd dispatch")?;

        let key = ctx.cfg.cache_enabled.then(|| PairKey::new(u, v));
        if let Some(key) = &key {
            if let Some(hit) = self.cache.get(key) {
                self.stats.record_cache_hit();
                return Ok(hit);
            }
        }

        let result = self.dispatch(u, v, ctx)?;

        if let Some(key) = key {
            self.stats.record_cache_miss();
            self.cache.insert(key, result.clone());
        }
        Ok(result)
    }

    fn dispatch(&self, u: &Coeff, v: &Coeff, ctx: &CallCtx<'_>) -> Result<Coeff, GcdError> {
        if let Some(g) = trivial_gcd(self, u, v, ctx)? {
            self.stats.record_trivial_hit();
            return Ok(g);
        }

        // past the trivial resolver both operands are polynomials
        let (pu, pv) = match (u.as_poly(), v.as_poly()) {
            (Some(a), Some(b)) => (a, b),
            _ => {
                return Err(GcdError::Unsupported(
                    "non-polynomial operands past the trivial resolver".into(),
                ))
            }
        };
        if pu.arity() != pv.arity() {
            return Err(GcdError::ArityMismatch {
                left: pu.arity(),
                right: pv.arity(),
            });
        }

        // inexact coefficients: the unit is the only meaningful answer
        // here, and it keeps downstream simplification total
        if pu.has_inexact_coeff() || pv.has_inexact_coeff() {
            if ctx.cfg.debug {
                debug!("inexact coefficients; treating gcd as the unit");
            }
            return Ok(Coeff::one());
        }

        let arity = pu.arity();
        if ctx.cfg.debug {
            debug!(arity, u_terms = pu.len(), v_terms = pv.len(), "gcd dispatch");
        }

        if arity == 1 {
            return self.univariate_gcd(pu, pv, ctx);
        }

        if pu.is_monomial() {
            self.stats.record_monomial_hit();
            return monomial_gcd(self, pu, pv, ctx);
        }
        if pv.is_monomial() {
            self.stats.record_monomial_hit();
            return monomial_gcd(self, pv, pu, ctx);
        }

        if ctx.cfg.debug && arity > ctx.cfg.euclid_breakpoint_arity {
            debug!(
                arity,
                breakpoint = ctx.cfg.euclid_breakpoint_arity,
                "arity above euclid breakpoint; no sparse backend, continuing with euclidean reduction"
            );
        }
        self.general_gcd(pu, pv, ctx)
    }

    /// Arity 1: content-strip both operands, run the Euclidean loop on
    /// the primitive parts, reattach the content gcd.
    fn univariate_gcd(
        &self,
        pu: &FlatPoly,
        pv: &FlatPoly,
        ctx: &CallCtx<'_>,
    ) -> Result<Coeff, GcdError> {
        let g = self.primitive_euclid(pu, pv, ctx)?;
        Ok(Coeff::from_poly(g))
    }

    /// Arity N > 1: reinterpret both operands as univariate in the main
    /// variable with arity-(N-1) coefficients, recurse, and reinterpret
    /// the result back. A scalar result has no variable structure and
    /// passes through unchanged; everything else — including a result
    /// constant in the main variable but polynomial in the others —
    /// goes back to arity N.
    fn general_gcd(
        &self,
        pu: &FlatPoly,
        pv: &FlatPoly,
        ctx: &CallCtx<'_>,
    ) -> Result<Coeff, GcdError> {
        ctx.tb.check("arity reduction")?;
        let arity = pu.arity();
        let g = self.primitive_euclid(&pu.lower_arity(), &pv.lower_arity(), ctx)?;
        match g.as_constant() {
            Some(c) if c.is_scalar() => Ok(c),
            _ => Ok(Coeff::from_poly(g.raise_arity(arity))),
        }
    }

    /// Shared core of both reduced paths: contents off, Euclid on the
    /// primitive parts, primitive part of the result, content gcd back
    /// on.
    fn primitive_euclid(
        &self,
        u: &FlatPoly,
        v: &FlatPoly,
        ctx: &CallCtx<'_>,
    ) -> Result<FlatPoly, GcdError> {
        let (uc, up) = content_and_primitive(u, |a, b| self.inner_gcd(a, b, ctx))?;
        let (vc, vp) = content_and_primitive(v, |a, b| self.inner_gcd(a, b, ctx))?;
        let cont = self.inner_gcd(&uc, &vc, ctx)?;
        let g = euclid_gcd(self, &up, &vp, ctx)?;
        let (_, primitive) = content_and_primitive(&g, |a, b| self.inner_gcd(a, b, ctx))?;
        Ok(primitive.scale(&cont))
    }

    /// Disjoint footprints: the gcd can only divide the coefficients,
    /// so fold over all of them, short-circuiting at the unit.
    fn coefficients_gcd(
        &self,
        pu: &FlatPoly,
        pv: &FlatPoly,
        ctx: &CallCtx<'_>,
    ) -> Result<Coeff, GcdError> {
        let mut g = Coeff::zero();
        for c in pu.coefficients().chain(pv.coefficients()) {
            if g.is_one() {
                break;
            }
            g = self.inner_gcd(&g, c, ctx)?;
        }
        Ok(g)
    }
}

fn validate_operand(c: &Coeff) -> Result<(), GcdError> {
    match c {
        Coeff::Real(x) => Err(GcdError::Unsupported(format!(
            "inexact scalar operand: {x}"
        ))),
        _ => Ok(()),
    }
}

/// Two polynomials have disjoint footprints when no variable appears
/// with a positive exponent in both. Constants have empty footprints
/// but are the trivial resolver's business, not this check's.
fn disjoint_footprints(u: &FlatPoly, v: &FlatPoly) -> bool {
    if u.is_constant() || v.is_constant() {
        return false;
    }
    u.variable_footprint()
        .iter()
        .zip(v.variable_footprint())
        .all(|(&a, b)| !(a && b))
}

static DEFAULT_ENGINE: OnceLock<GcdEngine> = OnceLock::new();

/// Returns the process-wide default engine.
pub fn default_engine() -> &'static GcdEngine {
    DEFAULT_ENGINE.get_or_init(GcdEngine::new)
}

/// Computes a gcd on the process-wide default engine.
///
/// # Errors
///
/// As for [`GcdEngine::gcd`].
pub fn gcd(u: &Coeff, v: &Coeff) -> Result<Coeff, GcdError> {
    default_engine().gcd(u, v)
}

/// Computes a variadic gcd on the process-wide default engine.
///
/// # Errors
///
/// As for [`GcdEngine::gcd_many`].
pub fn gcd_many(operands: &[Coeff]) -> Result<Coeff, GcdError> {
    default_engine().gcd_many(operands)
}

/// Computes an lcm on the process-wide default engine.
///
/// # Errors
///
/// As for [`GcdEngine::lcm`].
pub fn lcm(u: &Coeff, v: &Coeff) -> Result<Coeff, GcdError> {
    default_engine().lcm(u, v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use darboux_poly::{Exponents, Term};
    use std::time::Duration;

    fn poly(terms: &[(&[u32], i64)], arity: usize) -> Coeff {
        Coeff::from_poly(FlatPoly::new(
            terms
                .iter()
                .map(|(e, c)| Term::new(Exponents::from_slice(e), Coeff::int(*c)))
                .collect(),
            arity,
        ))
    }

    #[test]
    fn test_scenario_a_shared_linear_factor() {
        // gcd(x^2 y + x y^2, x^2 - y^2) = x + y
        let engine = GcdEngine::new();
        let a = poly(&[(&[2, 1], 1), (&[1, 2], 1)], 2);
        let b = poly(&[(&[2, 0], 1), (&[0, 2], -1)], 2);
        let expected = poly(&[(&[1, 0], 1), (&[0, 1], 1)], 2);
        assert_eq!(engine.gcd(&a, &b).unwrap(), expected);
        assert_eq!(engine.gcd(&b, &a).unwrap(), expected);
    }

    #[test]
    fn test_scenario_b_disjoint_variables() {
        // gcd(x, y) = 1 via the disjoint-footprint short-circuit
        let engine = GcdEngine::new();
        let x = poly(&[(&[1, 0], 1)], 2);
        let y = poly(&[(&[0, 1], 1)], 2);
        assert_eq!(engine.gcd(&x, &y).unwrap(), Coeff::one());
    }

    #[test]
    fn test_result_constant_in_main_variable_keeps_arity() {
        // gcd(x y^2 + x, x y^2 + 2x) = x: constant in the main variable
        // y, but still a polynomial — the result must come back at
        // arity 2, not as a lower-arity coefficient
        let engine = GcdEngine::new();
        let a = poly(&[(&[1, 2], 1), (&[1, 0], 1)], 2);
        let b = poly(&[(&[1, 2], 1), (&[1, 0], 2)], 2);
        let g = engine.gcd(&a, &b).unwrap();
        assert_eq!(g, poly(&[(&[1, 0], 1)], 2));
        assert_eq!(g.arity(), Some(2));

        // the monomial fast path preserves arity the same way
        let x = poly(&[(&[1, 0], 1)], 2);
        let xy = poly(&[(&[1, 1], 1)], 2);
        assert_eq!(engine.gcd(&x, &xy).unwrap(), x);
    }

    #[test]
    fn test_scalar_reduction() {
        let engine = GcdEngine::new();
        assert_eq!(
            engine.gcd(&Coeff::int(48), &Coeff::int(-18)).unwrap(),
            Coeff::int(6)
        );
    }

    #[test]
    fn test_zero_absorption() {
        // the leading (main-variable) coefficient is negative, so the
        // absolute value flips every sign
        let engine = GcdEngine::new();
        let p = poly(&[(&[1, 0], 2), (&[0, 1], -4)], 2);
        let zero = Coeff::zero();
        let expected = poly(&[(&[1, 0], -2), (&[0, 1], 4)], 2);
        assert_eq!(engine.gcd(&zero, &p).unwrap(), expected);
        assert_eq!(engine.gcd(&p, &zero).unwrap(), expected);
    }

    #[test]
    fn test_idempotence() {
        let engine = GcdEngine::new();
        let p = poly(&[(&[2, 0], 3), (&[0, 1], -6)], 2);
        assert_eq!(engine.gcd(&p, &p).unwrap(), p.neg());
    }

    #[test]
    fn test_content_is_reattached() {
        // gcd(6x^2 + 12x, 4x) = 2x
        let engine = GcdEngine::new();
        let a = poly(&[(&[2], 6), (&[1], 12)], 1);
        let b = poly(&[(&[1], 4)], 1);
        assert_eq!(engine.gcd(&a, &b).unwrap(), poly(&[(&[1], 2)], 1));
    }

    #[test]
    fn test_monomial_fast_path_agrees_with_general_path() {
        let engine = GcdEngine::new();
        let mono = FlatPoly::monomial(Exponents::from_slice(&[2, 1]), Coeff::int(4), 2);
        let other = match poly(&[(&[3, 1], 2), (&[2, 2], 6)], 2) {
            Coeff::Poly(p) => *p,
            _ => unreachable!(),
        };

        let cfg = GcdConfig::default();
        let tb = TimeBox::unbounded();
        let ctx = CallCtx { tb: &tb, cfg: &cfg };

        let fast = monomial_gcd(&engine, &mono, &other, &ctx).unwrap().abs();
        let general = engine.general_gcd(&mono, &other, &ctx).unwrap().abs();
        assert_eq!(fast, general);
        // gcd(4x^2 y, 2x^3 y + 6x^2 y^2) = 2x^2 y
        assert_eq!(fast, poly(&[(&[2, 1], 2)], 2));
    }

    #[test]
    fn test_timeout_is_surfaced() {
        let engine = GcdEngine::new();
        let a = poly(&[(&[7, 0], 1), (&[5, 2], 3), (&[0, 6], -2), (&[1, 1], 1)], 2);
        let b = poly(&[(&[6, 1], 2), (&[4, 3], -1), (&[2, 2], 5), (&[0, 0], 7)], 2);

        let cfg = GcdConfig {
            time_limit: Duration::ZERO,
            ..GcdConfig::default()
        };
        let result = engine.with_config(cfg, |eng| eng.gcd(&a, &b));
        assert!(matches!(result, Err(GcdError::Timeout { .. })));
    }

    #[test]
    fn test_with_config_restores() {
        let engine = GcdEngine::new();
        let cfg = GcdConfig {
            cache_enabled: false,
            ..GcdConfig::default()
        };
        engine.with_config(cfg, |eng| {
            assert!(!eng.config().cache_enabled);
        });
        assert!(engine.config().cache_enabled);
    }

    #[test]
    fn test_cache_transparency() {
        let a = poly(&[(&[2, 1], 1), (&[1, 2], 1)], 2);
        let b = poly(&[(&[2, 0], 1), (&[0, 2], -1)], 2);

        let cached = GcdEngine::new();
        let uncached = GcdEngine::with_initial_config(GcdConfig {
            cache_enabled: false,
            ..GcdConfig::default()
        });

        let g1 = cached.gcd(&a, &b).unwrap();
        let g2 = cached.gcd(&a, &b).unwrap(); // second call hits the cache
        let g3 = uncached.gcd(&a, &b).unwrap();
        assert_eq!(g1, g2);
        assert_eq!(g1, g3);

        assert!(cached.stats().snapshot().cache_hits > 0);
        assert_eq!(uncached.stats().snapshot().cache_hits, 0);
        assert!(uncached.cache().is_empty());
    }

    #[test]
    fn test_arity_mismatch() {
        let engine = GcdEngine::new();
        let a = poly(&[(&[1, 0], 1)], 2);
        let b = poly(&[(&[1, 0, 0], 1)], 3);
        assert_eq!(
            engine.gcd(&a, &b),
            Err(GcdError::ArityMismatch { left: 2, right: 3 })
        );
    }

    #[test]
    fn test_inexact_scalar_is_unsupported() {
        let engine = GcdEngine::new();
        let result = engine.gcd(&Coeff::Real(1.5), &Coeff::int(3));
        assert!(matches!(result, Err(GcdError::Unsupported(_))));
    }

    #[test]
    fn test_inexact_polynomial_gcd_is_unit() {
        // polynomial/polynomial with an inexact coefficient: unit gcd
        let engine = GcdEngine::new();
        let a = Coeff::from_poly(FlatPoly::new(
            vec![
                Term::new(Exponents::from_slice(&[2, 0]), Coeff::Real(1.5)),
                Term::new(Exponents::from_slice(&[0, 1]), Coeff::int(2)),
            ],
            2,
        ));
        let b = poly(&[(&[1, 0], 2), (&[0, 1], 2)], 2);
        assert_eq!(engine.gcd(&a, &b).unwrap(), Coeff::one());
    }

    #[test]
    fn test_gcd_many_short_circuits_at_unit() {
        let engine = GcdEngine::new();
        let ops = vec![
            Coeff::int(4),
            Coeff::int(6),
            Coeff::int(9), // running gcd reaches 1 here
            poly(&[(&[5, 5], 1)], 2),
        ];
        assert_eq!(engine.gcd_many(&ops).unwrap(), Coeff::one());
        assert_eq!(engine.gcd_many(&[]).unwrap(), Coeff::zero());
        assert_eq!(engine.gcd_many(&[Coeff::int(-5)]).unwrap(), Coeff::int(5));
    }

    #[test]
    fn test_lcm() {
        let engine = GcdEngine::new();
        assert_eq!(
            engine.lcm(&Coeff::int(4), &Coeff::int(6)).unwrap(),
            Coeff::int(12)
        );

        // lcm(x^2 - y^2, x + y) = x^2 - y^2 (up to sign)
        let a = poly(&[(&[2, 0], 1), (&[0, 2], -1)], 2);
        let b = poly(&[(&[1, 0], 1), (&[0, 1], 1)], 2);
        let l = engine.lcm(&a, &b).unwrap();
        assert_eq!(l, a.abs());

        assert_eq!(engine.lcm(&Coeff::zero(), &Coeff::zero()).unwrap(), Coeff::zero());
    }

    #[test]
    fn test_gcd_of_partials() {
        let engine = GcdEngine::new();
        // p = (x + y)^2: both partials are 2(x + y)
        let p = poly(&[(&[2, 0], 1), (&[1, 1], 2), (&[0, 2], 1)], 2);
        let expected = poly(&[(&[1, 0], 2), (&[0, 1], 2)], 2);
        assert_eq!(engine.gcd_of_partials(&p).unwrap(), expected);

        assert_eq!(engine.gcd_of_partials(&Coeff::int(17)).unwrap(), Coeff::one());
    }

    #[test]
    fn test_reordering_is_transparent() {
        // skewed degrees force a non-identity permutation; the result
        // still comes back in the caller's variable order
        let engine = GcdEngine::new();
        let a = poly(&[(&[5, 1], 1), (&[4, 2], 1)], 2); // x^4 y (x + y)
        let b = poly(&[(&[5, 0], 1), (&[4, 1], 1)], 2); // x^4 (x + y)
        let g = engine.gcd(&a, &b).unwrap();
        assert_eq!(g, poly(&[(&[5, 0], 1), (&[4, 1], 1)], 2));
    }

    #[test]
    fn test_default_engine_free_functions() {
        assert_eq!(gcd(&Coeff::int(21), &Coeff::int(14)).unwrap(), Coeff::int(7));
        assert_eq!(lcm(&Coeff::int(3), &Coeff::int(4)).unwrap(), Coeff::int(12));
        assert_eq!(
            gcd_many(&[Coeff::int(8), Coeff::int(12), Coeff::int(20)]).unwrap(),
            Coeff::int(4)
        );
    }
}
