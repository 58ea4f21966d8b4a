//! The Euclidean pseudo-remainder inner loop.
//!
//! Operands are univariate (possibly with polynomial coefficients after
//! arity reduction). Every iteration checks the time box, retries the
//! trivial resolver as a fast exit, computes a pseudo-remainder, and
//! strips the remainder's content before continuing — the content
//! stripping is what keeps coefficient growth in check across the
//! remainder sequence.

use darboux_poly::{Coeff, FlatPoly};

use crate::content::content_and_primitive;
use crate::engine::{CallCtx, GcdEngine};
use crate::error::GcdError;
use crate::trivial::trivial_gcd;

/// Runs the pseudo-remainder sequence on two univariate polynomials.
///
/// Callers pass primitive operands; the result may still carry content
/// (pseudo-division scales by leading coefficients) and is stripped by
/// the caller.
///
/// # Errors
///
/// [`GcdError::Timeout`] when the call's time box expires mid-loop;
/// content stripping and coefficient gcds propagate their own failures.
pub(crate) fn euclid_gcd(
    engine: &GcdEngine,
    u: &FlatPoly,
    v: &FlatPoly,
    ctx: &CallCtx<'_>,
) -> Result<FlatPoly, GcdError> {
    debug_assert_eq!(u.arity(), 1);
    debug_assert_eq!(v.arity(), 1);

    let (mut u, mut v) = if u.degree() >= v.degree() {
        (u.clone(), v.clone())
    } else {
        (v.clone(), u.clone())
    };

    loop {
        ctx.tb.check("euclidean pseudo-remainder loop")?;
        engine.stats().record_euclid_round();

        let cu = Coeff::from_poly(u.clone());
        let cv = Coeff::from_poly(v.clone());
        if let Some(g) = trivial_gcd(engine, &cu, &cv, ctx)? {
            return Ok(as_univariate(&g));
        }

        if u.degree() < v.degree() {
            std::mem::swap(&mut u, &mut v);
        }

        let remainder = u.pseudo_remainder(&v);
        if remainder.is_zero() {
            return Ok(v);
        }

        let (_, stripped) =
            content_and_primitive(&remainder, |a, b| engine.inner_gcd(a, b, ctx))?;
        u = v;
        v = stripped;
    }
}

/// Re-embeds a trivial-resolver answer as a univariate polynomial.
fn as_univariate(c: &Coeff) -> FlatPoly {
    match c.as_poly() {
        Some(p) if p.arity() == 1 => p.clone(),
        _ => FlatPoly::constant(c.clone(), 1),
    }
}
