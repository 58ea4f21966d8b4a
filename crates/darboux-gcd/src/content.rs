//! Content/primitive-part separation.
//!
//! Stripping content — the gcd of a polynomial's coefficients — before
//! and during the Euclidean loop is the primary defense against
//! intermediate expression swell: pseudo-remainders accumulate large
//! contents fast, and dividing them out keeps every later step small.

use darboux_poly::{Coeff, FlatPoly};

use crate::error::GcdError;

/// Splits `p` into `(content, primitive)` with
/// `content * primitive == p`.
///
/// The content is `gcd_fn` folded over the coefficients, stopping early
/// once the running value reaches the multiplicative unit. The
/// coefficient gcd is a parameter because it differs by level: plain
/// scalar gcd for flat polynomials, a recursive engine call for the
/// lowered univariate form whose coefficients are polynomials.
///
/// The zero polynomial yields `(1, p)` so the round-trip invariant
/// holds without a special case at call sites.
///
/// # Errors
///
/// Returns [`GcdError::InexactDivision`] when the computed content
/// fails to divide a coefficient — an internal invariant violation —
/// and propagates failures of `gcd_fn`.
pub fn content_and_primitive<F>(p: &FlatPoly, mut gcd_fn: F) -> Result<(Coeff, FlatPoly), GcdError>
where
    F: FnMut(&Coeff, &Coeff) -> Result<Coeff, GcdError>,
{
    let Some(lead) = p.leading_coeff() else {
        return Ok((Coeff::one(), p.clone()));
    };

    let mut content = lead.clone();
    for c in p.coefficients().skip(1) {
        if content.is_one() {
            break;
        }
        content = gcd_fn(&content, c)?;
    }

    let primitive = p
        .checked_div_exact_coeff(&content)
        .ok_or_else(|| GcdError::InexactDivision("content removal".into()))?;
    Ok((content, primitive))
}

#[cfg(test)]
mod tests {
    use super::*;
    use darboux_poly::{Exponents, Term};

    fn scalar_gcd_fn(a: &Coeff, b: &Coeff) -> Result<Coeff, GcdError> {
        a.scalar_gcd(b)
            .ok_or_else(|| GcdError::Unsupported("non-scalar coefficient".into()))
    }

    fn univariate(terms: &[(u32, i64)]) -> FlatPoly {
        FlatPoly::new(
            terms
                .iter()
                .map(|&(e, c)| Term::new(Exponents::from_slice(&[e]), Coeff::int(c)))
                .collect(),
            1,
        )
    }

    #[test]
    fn test_content_extraction() {
        // 6x^2 + 12x: content 6, primitive x^2 + 2x
        let p = univariate(&[(2, 6), (1, 12)]);
        let (content, primitive) = content_and_primitive(&p, scalar_gcd_fn).unwrap();
        assert_eq!(content, Coeff::int(6));
        assert_eq!(primitive, univariate(&[(2, 1), (1, 2)]));
    }

    #[test]
    fn test_round_trip() {
        let p = univariate(&[(3, -9), (1, 6), (0, 15)]);
        let (content, primitive) = content_and_primitive(&p, scalar_gcd_fn).unwrap();
        assert_eq!(primitive.scale(&content), p);

        // the primitive part's content is the unit
        let (inner, _) = content_and_primitive(&primitive, scalar_gcd_fn).unwrap();
        assert!(inner.is_unit());
    }

    #[test]
    fn test_zero_polynomial() {
        let p = FlatPoly::zero(1);
        let (content, primitive) = content_and_primitive(&p, scalar_gcd_fn).unwrap();
        assert!(content.is_one());
        assert!(primitive.is_zero());
    }

    #[test]
    fn test_unit_short_circuit() {
        // once the running gcd is 1 the remaining coefficients are not visited
        let p = univariate(&[(2, 3), (1, 2), (0, 0)]);
        let mut calls = 0;
        let (content, _) = content_and_primitive(&p, |a, b| {
            calls += 1;
            scalar_gcd_fn(a, b)
        })
        .unwrap();
        assert!(content.is_one());
        assert_eq!(calls, 1);
    }
}
