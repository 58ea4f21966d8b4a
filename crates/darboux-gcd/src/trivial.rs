//! Trivial-case resolver and monomial fast path.
//!
//! Both paths produce an answer without entering the arity-reduction
//! recursion. The trivial resolver is also retried at every Euclidean
//! iteration, so it doubles as the loop's termination test.

use darboux_poly::{Coeff, Exponents, FlatPoly};

use crate::engine::{CallCtx, GcdEngine};
use crate::error::GcdError;

/// Attempts an immediate answer: zero operand, scalar/scalar,
/// structurally identical operands, or scalar against polynomial.
///
/// `Ok(None)` means "no trivial answer"; the caller continues with the
/// full machinery.
///
/// # Errors
///
/// Scalar gcd over an inexact operand is [`GcdError::Unsupported`];
/// coefficient folds propagate engine failures.
pub(crate) fn trivial_gcd(
    engine: &GcdEngine,
    u: &Coeff,
    v: &Coeff,
    ctx: &CallCtx<'_>,
) -> Result<Option<Coeff>, GcdError> {
    if u.is_zero() {
        return Ok(Some(v.abs()));
    }
    if v.is_zero() {
        return Ok(Some(u.abs()));
    }
    if u == v {
        return Ok(Some(u.abs()));
    }

    match (u.as_poly(), v.as_poly()) {
        (None, None) => match u.scalar_gcd(v) {
            Some(g) => Ok(Some(g)),
            None => Err(GcdError::Unsupported(format!(
                "scalar gcd over inexact operands: {u}, {v}"
            ))),
        },
        (None, Some(p)) => Ok(Some(fold_scalar_with_coefficients(engine, u, p, ctx)?)),
        (Some(p), None) => Ok(Some(fold_scalar_with_coefficients(engine, v, p, ctx)?)),
        (Some(_), Some(_)) => Ok(None),
    }
}

/// gcd of a scalar with a polynomial: the scalar folded against the
/// polynomial's coefficients, short-circuiting at the unit.
fn fold_scalar_with_coefficients(
    engine: &GcdEngine,
    scalar: &Coeff,
    p: &FlatPoly,
    ctx: &CallCtx<'_>,
) -> Result<Coeff, GcdError> {
    let mut g = scalar.abs();
    for c in p.coefficients() {
        if g.is_one() {
            break;
        }
        g = engine.inner_gcd(&g, c, ctx)?;
    }
    Ok(g.abs())
}

/// Monomial fast path: one operand is a single term.
///
/// The result exponent vector is the element-wise minimum of the
/// monomial's exponents against the per-coordinate minimum over the
/// other polynomial's terms; the coefficient is the gcd of the
/// monomial's coefficient with the other polynomial's content. No
/// recursion on the main structure is needed.
///
/// # Errors
///
/// Propagates failures of the coefficient-content fold.
pub(crate) fn monomial_gcd(
    engine: &GcdEngine,
    mono: &FlatPoly,
    other: &FlatPoly,
    ctx: &CallCtx<'_>,
) -> Result<Coeff, GcdError> {
    debug_assert_eq!(mono.arity(), other.arity());
    debug_assert!(mono.is_monomial());

    let Some(lead) = mono.leading_term() else {
        return Ok(Coeff::from_poly(other.abs()));
    };
    if other.is_zero() {
        return Ok(Coeff::from_poly(mono.abs()));
    }

    let mut mins: Option<Exponents> = None;
    for t in other.terms() {
        mins = Some(match mins {
            None => t.exponents.clone(),
            Some(m) => m
                .iter()
                .zip(t.exponents.iter())
                .map(|(&a, &b)| a.min(b))
                .collect(),
        });
    }
    let mins = mins.unwrap_or_else(|| lead.exponents.clone());

    let exponents: Exponents = lead
        .exponents
        .iter()
        .zip(mins.iter())
        .map(|(&a, &b)| a.min(b))
        .collect();

    let coeff = fold_scalar_with_coefficients(engine, &lead.coeff, other, ctx)?;
    Ok(Coeff::from_poly(FlatPoly::monomial(
        exponents,
        coeff,
        mono.arity(),
    )))
}
