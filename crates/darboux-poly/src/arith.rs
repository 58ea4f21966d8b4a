//! Polynomial arithmetic and structural transforms.
//!
//! Everything here is representation-level: ring operations, exact
//! division, the fraction-free pseudo-remainder, exponent-map
//! transforms, and the arity shifts between the flat form and the
//! univariate-with-polynomial-coefficients form.

use std::collections::BTreeMap;

use crate::coeff::Coeff;
use crate::flat::{Exponents, FlatPoly, Term};

impl FlatPoly {
    /// Adds two polynomials.
    ///
    /// # Panics
    ///
    /// Panics on arity mismatch.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        assert_eq!(self.arity(), other.arity(), "arity mismatch in add");
        let mut terms: Vec<Term> = self.terms().to_vec();
        terms.extend_from_slice(other.terms());
        Self::new(terms, self.arity())
    }

    /// Negates a polynomial.
    #[must_use]
    pub fn neg(&self) -> Self {
        let terms = self
            .terms()
            .iter()
            .map(|t| Term::new(t.exponents.clone(), t.coeff.neg()))
            .collect();
        Self::new(terms, self.arity())
    }

    /// Subtracts two polynomials.
    ///
    /// # Panics
    ///
    /// Panics on arity mismatch.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Multiplies two polynomials (schoolbook algorithm).
    ///
    /// # Panics
    ///
    /// Panics on arity mismatch.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        assert_eq!(self.arity(), other.arity(), "arity mismatch in mul");
        if self.is_zero() || other.is_zero() {
            return Self::zero(self.arity());
        }

        let mut terms = Vec::with_capacity(self.len() * other.len());
        for a in self.terms() {
            for b in other.terms() {
                let exponents: Exponents = a
                    .exponents
                    .iter()
                    .zip(b.exponents.iter())
                    .map(|(&x, &y)| x + y)
                    .collect();
                terms.push(Term::new(exponents, a.coeff.mul(&b.coeff)));
            }
        }
        Self::new(terms, self.arity())
    }

    /// Multiplies every coefficient by `c`.
    #[must_use]
    pub fn scale(&self, c: &Coeff) -> Self {
        if c.is_zero() {
            return Self::zero(self.arity());
        }
        let terms = self
            .terms()
            .iter()
            .map(|t| Term::new(t.exponents.clone(), t.coeff.mul(c)))
            .collect();
        Self::new(terms, self.arity())
    }

    /// Divides every coefficient exactly by `d`, `None` when any
    /// division is inexact.
    #[must_use]
    pub fn checked_div_exact_coeff(&self, d: &Coeff) -> Option<Self> {
        let mut terms = Vec::with_capacity(self.len());
        for t in self.terms() {
            let c = t.coeff.checked_div_exact(d)?;
            terms.push(Term::new(t.exponents.clone(), c));
        }
        Some(Self::new(terms, self.arity()))
    }

    /// Divides exactly by another polynomial via leading-term
    /// elimination, `None` when the division leaves a remainder.
    ///
    /// # Panics
    ///
    /// Panics on arity mismatch.
    #[must_use]
    pub fn checked_div_exact(&self, divisor: &Self) -> Option<Self> {
        assert_eq!(self.arity(), divisor.arity(), "arity mismatch in division");
        if divisor.is_zero() {
            return None;
        }

        let mut rem = self.clone();
        let mut quotient: Vec<Term> = Vec::new();
        while !rem.is_zero() {
            let lr = rem.leading_term()?;
            let ld = divisor.leading_term()?;
            let mut exponents: Exponents = Exponents::new();
            for (&a, &b) in lr.exponents.iter().zip(ld.exponents.iter()) {
                if a < b {
                    return None;
                }
                exponents.push(a - b);
            }
            let c = lr.coeff.checked_div_exact(&ld.coeff)?;
            let step = Self::monomial(exponents.clone(), c.clone(), self.arity());
            quotient.push(Term::new(exponents, c));
            rem = rem.sub(&divisor.mul(&step));
        }
        Some(Self::new(quotient, self.arity()))
    }

    /// Computes the pseudo-remainder of `self` by `divisor` for
    /// univariate operands: the leading coefficient of the divisor is
    /// multiplied through at every elimination step so that no
    /// fractions appear in the coefficient domain.
    ///
    /// # Panics
    ///
    /// Panics unless both operands have arity 1 and the divisor is
    /// nonzero.
    #[must_use]
    pub fn pseudo_remainder(&self, divisor: &Self) -> Self {
        assert_eq!(self.arity(), 1, "pseudo-remainder needs univariate operands");
        assert_eq!(divisor.arity(), 1, "pseudo-remainder needs univariate operands");
        assert!(!divisor.is_zero(), "pseudo-remainder by zero polynomial");

        let n = divisor.degree();
        let mut rem = self.clone();
        while !rem.is_zero() && rem.degree() >= n {
            let k = rem.degree() - n;
            let lead_r = match rem.leading_coeff() {
                Some(c) => c.clone(),
                None => break,
            };
            let lead_d = match divisor.leading_coeff() {
                Some(c) => c.clone(),
                None => break,
            };
            let shift = Self::monomial(Exponents::from_slice(&[k]), lead_r, 1);
            rem = rem.scale(&lead_d).sub(&divisor.mul(&shift));
        }
        rem
    }

    /// Differentiates with respect to variable `var`.
    ///
    /// # Panics
    ///
    /// Panics if `var >= arity`.
    #[must_use]
    pub fn derivative(&self, var: usize) -> Self {
        assert!(var < self.arity(), "variable index out of range");
        let mut terms = Vec::new();
        for t in self.terms() {
            let e = t.exponents[var];
            if e == 0 {
                continue;
            }
            let mut exponents = t.exponents.clone();
            exponents[var] = e - 1;
            terms.push(Term::new(exponents, t.coeff.mul(&Coeff::int(i64::from(e)))));
        }
        Self::new(terms, self.arity())
    }

    /// Returns the absolute value: negated when the leading coefficient
    /// sign is negative.
    #[must_use]
    pub fn abs(&self) -> Self {
        if self.signum() < 0 {
            self.neg()
        } else {
            self.clone()
        }
    }

    /// Rewrites every exponent vector through `f`, renormalizing.
    ///
    /// The transform must preserve vector length; variable permutations
    /// are the intended use.
    #[must_use]
    pub fn map_exponents<F>(&self, f: F) -> Self
    where
        F: Fn(&[u32]) -> Exponents,
    {
        let terms = self
            .terms()
            .iter()
            .map(|t| Term::new(f(&t.exponents), t.coeff.clone()))
            .collect();
        Self::new(terms, self.arity())
    }

    /// Reinterprets an arity-N polynomial (N > 1) as univariate in the
    /// main (highest-index) variable with arity-(N-1) coefficients.
    ///
    /// Coefficients that come out constant are left as bare scalars.
    ///
    /// # Panics
    ///
    /// Panics if the arity is 1.
    #[must_use]
    pub fn lower_arity(&self) -> Self {
        assert!(self.arity() > 1, "cannot lower a univariate polynomial");
        let main = self.arity() - 1;

        let mut groups: BTreeMap<u32, Vec<Term>> = BTreeMap::new();
        for t in self.terms() {
            let e = t.exponents[main];
            let rest: Exponents = t.exponents[..main].iter().copied().collect();
            groups
                .entry(e)
                .or_default()
                .push(Term::new(rest, t.coeff.clone()));
        }

        let terms = groups
            .into_iter()
            .map(|(e, inner)| {
                let coeff = Coeff::from_poly(Self::new(inner, main));
                Term::new(Exponents::from_slice(&[e]), coeff)
            })
            .collect();
        Self::new(terms, 1)
    }

    /// Reinterprets a univariate polynomial with arity-(N-1)
    /// coefficients back to a flat arity-N polynomial. Inverse of
    /// [`FlatPoly::lower_arity`].
    ///
    /// # Panics
    ///
    /// Panics unless `self` has arity 1, `target_arity >= 1`, and every
    /// polynomial coefficient has arity `target_arity - 1`.
    #[must_use]
    pub fn raise_arity(&self, target_arity: usize) -> Self {
        assert_eq!(self.arity(), 1, "raise_arity needs a univariate polynomial");
        assert!(target_arity >= 1, "polynomial arity must be at least 1");

        let mut terms = Vec::new();
        for t in self.terms() {
            let main_exp = t.exponents[0];
            match &t.coeff {
                Coeff::Poly(q) => {
                    assert_eq!(
                        q.arity(),
                        target_arity - 1,
                        "coefficient arity does not match target"
                    );
                    for qt in q.terms() {
                        let mut exponents = qt.exponents.clone();
                        exponents.push(main_exp);
                        terms.push(Term::new(exponents, qt.coeff.clone()));
                    }
                }
                scalar => {
                    let mut exponents: Exponents =
                        std::iter::repeat(0).take(target_arity - 1).collect();
                    exponents.push(main_exp);
                    terms.push(Term::new(exponents, scalar.clone()));
                }
            }
        }
        Self::new(terms, target_arity)
    }
}
