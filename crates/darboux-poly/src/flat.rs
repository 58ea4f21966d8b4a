//! Flat sparse multivariate polynomials.
//!
//! A polynomial of arity N is a sorted list of terms, each mapping a
//! length-N exponent vector to a coefficient. Invariants: exponent
//! vectors are unique, no term carries a zero coefficient, and every
//! exponent vector has length equal to the arity.
//!
//! Terms are kept in descending lexicographic order reading exponents
//! from the main variable (highest index) down, so the leading term has
//! maximal main-variable degree.

use smallvec::SmallVec;
use std::cmp::Ordering;
use std::fmt;

use crate::coeff::Coeff;

/// Exponent vector storage; inline up to 8 variables.
pub type Exponents = SmallVec<[u32; 8]>;

/// A single polynomial term: exponent vector and coefficient.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Term {
    /// Per-variable exponents; length equals the owning polynomial's arity.
    pub exponents: Exponents,
    /// The term's coefficient.
    pub coeff: Coeff,
}

impl Term {
    /// Creates a new term.
    #[must_use]
    pub fn new(exponents: Exponents, coeff: Coeff) -> Self {
        Self { exponents, coeff }
    }
}

/// A flat sparse multivariate polynomial.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FlatPoly {
    terms: Vec<Term>,
    arity: usize,
}

/// Compares exponent vectors from the main variable (highest index) down.
pub(crate) fn cmp_exponents(a: &[u32], b: &[u32]) -> Ordering {
    debug_assert_eq!(a.len(), b.len());
    for i in (0..a.len()).rev() {
        match a[i].cmp(&b[i]) {
            Ordering::Equal => {}
            other => return other,
        }
    }
    Ordering::Equal
}

impl FlatPoly {
    /// Creates a polynomial from terms.
    ///
    /// Terms are sorted, like terms combined, and zero terms dropped.
    ///
    /// # Panics
    ///
    /// Panics if `arity` is zero or a term's exponent vector has the
    /// wrong length.
    #[must_use]
    pub fn new(terms: Vec<Term>, arity: usize) -> Self {
        assert!(arity >= 1, "polynomial arity must be at least 1");
        for t in &terms {
            assert_eq!(t.exponents.len(), arity, "exponent vector length must equal arity");
        }
        let mut poly = Self { terms, arity };
        poly.normalize();
        poly
    }

    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero(arity: usize) -> Self {
        assert!(arity >= 1, "polynomial arity must be at least 1");
        Self { terms: Vec::new(), arity }
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub fn constant(c: Coeff, arity: usize) -> Self {
        if c.is_zero() {
            Self::zero(arity)
        } else {
            let exponents: Exponents = std::iter::repeat(0).take(arity).collect();
            Self::new(vec![Term::new(exponents, c)], arity)
        }
    }

    /// Creates the single variable x_i.
    ///
    /// # Panics
    ///
    /// Panics if `i >= arity`.
    #[must_use]
    pub fn var(i: usize, arity: usize) -> Self {
        assert!(i < arity, "variable index out of range");
        let mut exponents: Exponents = std::iter::repeat(0).take(arity).collect();
        exponents[i] = 1;
        Self::new(vec![Term::new(exponents, Coeff::one())], arity)
    }

    /// Creates a single-term polynomial.
    #[must_use]
    pub fn monomial(exponents: Exponents, coeff: Coeff, arity: usize) -> Self {
        Self::new(vec![Term::new(exponents, coeff)], arity)
    }

    /// Returns the number of variables.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Returns the terms in descending order.
    #[must_use]
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Returns true for the zero polynomial.
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

    /// Returns true for a polynomial with at most one term.
    #[must_use]
    pub fn is_monomial(&self) -> bool {
        self.terms.len() <= 1
    }

    /// Returns true for a polynomial with no variable structure.
    #[must_use]
    pub fn is_constant(&self) -> bool {
        self.as_constant().is_some()
    }

    /// Returns the constant value of a constant polynomial.
    ///
    /// The zero polynomial yields the zero coefficient; a single term
    /// with an all-zero exponent vector yields its coefficient.
    #[must_use]
    pub fn as_constant(&self) -> Option<Coeff> {
        if self.terms.is_empty() {
            return Some(Coeff::zero());
        }
        if self.terms.len() == 1 && self.terms[0].exponents.iter().all(|&e| e == 0) {
            return Some(self.terms[0].coeff.clone());
        }
        None
    }

    /// Returns the leading term (maximal main-variable degree).
    #[must_use]
    pub fn leading_term(&self) -> Option<&Term> {
        self.terms.first()
    }

    /// Returns the leading coefficient.
    #[must_use]
    pub fn leading_coeff(&self) -> Option<&Coeff> {
        self.terms.first().map(|t| &t.coeff)
    }

    /// Returns the degree in the main (highest-index) variable.
    #[must_use]
    pub fn degree(&self) -> u32 {
        self.terms
            .first()
            .map_or(0, |t| t.exponents[self.arity - 1])
    }

    /// Returns the component-wise maximum exponent over all terms.
    #[must_use]
    pub fn max_exponents(&self) -> Vec<u32> {
        let mut maxes = vec![0u32; self.arity];
        for t in &self.terms {
            for (m, &e) in maxes.iter_mut().zip(t.exponents.iter()) {
                *m = (*m).max(e);
            }
        }
        maxes
    }

    /// Returns, per variable, whether it appears with a positive
    /// exponent in any term.
    #[must_use]
    pub fn variable_footprint(&self) -> Vec<bool> {
        self.max_exponents().into_iter().map(|e| e > 0).collect()
    }

    /// Iterates over the coefficients.
    pub fn coefficients(&self) -> impl Iterator<Item = &Coeff> {
        self.terms.iter().map(|t| &t.coeff)
    }

    /// Returns true if any coefficient is inexact.
    #[must_use]
    pub fn has_inexact_coeff(&self) -> bool {
        self.terms.iter().any(|t| !t.coeff.is_exact())
    }

    /// Returns the sign of the leading coefficient: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        self.leading_coeff().map_or(0, Coeff::signum)
    }

    /// Total order on polynomials used for canonical pair keys.
    #[must_use]
    pub fn canonical_cmp(&self, other: &Self) -> Ordering {
        self.arity
            .cmp(&other.arity)
            .then_with(|| self.terms.len().cmp(&other.terms.len()))
            .then_with(|| {
                for (a, b) in self.terms.iter().zip(&other.terms) {
                    let ord = cmp_exponents(&a.exponents, &b.exponents)
                        .then_with(|| a.coeff.canonical_cmp(&b.coeff));
                    if ord != Ordering::Equal {
                        return ord;
                    }
                }
                Ordering::Equal
            })
    }

    /// Sorts terms, combines like terms, drops zeros.
    fn normalize(&mut self) {
        self.terms
            .sort_by(|a, b| cmp_exponents(&b.exponents, &a.exponents));

        let mut i = 0;
        while i < self.terms.len() {
            while i + 1 < self.terms.len() && self.terms[i].exponents == self.terms[i + 1].exponents
            {
                let c = self.terms.remove(i + 1).coeff;
                self.terms[i].coeff = self.terms[i].coeff.add(&c);
            }
            if self.terms[i].coeff.is_zero() {
                self.terms.remove(i);
            } else {
                i += 1;
            }
        }
    }
}

impl fmt::Display for FlatPoly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let rendered: Vec<String> = self
            .terms
            .iter()
            .map(|t| {
                let vars: Vec<String> = t
                    .exponents
                    .iter()
                    .enumerate()
                    .filter(|(_, &e)| e > 0)
                    .map(|(i, &e)| {
                        if e == 1 {
                            format!("x{i}")
                        } else {
                            format!("x{i}^{e}")
                        }
                    })
                    .collect();
                if vars.is_empty() {
                    format!("{}", t.coeff)
                } else if t.coeff.is_one() {
                    vars.join("*")
                } else {
                    format!("{}*{}", t.coeff, vars.join("*"))
                }
            })
            .collect();

        write!(f, "{}", rendered.join(" + "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn test_normalize_combines_and_sorts() {
        let p = FlatPoly::new(
            vec![
                Term::new(smallvec![1, 0], Coeff::int(2)),
                Term::new(smallvec![0, 1], Coeff::int(3)),
                Term::new(smallvec![1, 0], Coeff::int(-2)),
            ],
            2,
        );
        // 2x - 2x cancels; only 3y survives
        assert_eq!(p.len(), 1);
        assert_eq!(p.terms()[0].coeff, Coeff::int(3));
    }

    #[test]
    fn test_leading_term_is_main_variable_maximal() {
        // x^5 + y^2: main variable is x1 (y), so y^2 leads
        let p = FlatPoly::new(
            vec![
                Term::new(smallvec![5, 0], Coeff::int(1)),
                Term::new(smallvec![0, 2], Coeff::int(1)),
            ],
            2,
        );
        assert_eq!(p.leading_term().unwrap().exponents.as_slice(), &[0, 2]);
        assert_eq!(p.degree(), 2);
    }

    #[test]
    fn test_as_constant() {
        assert_eq!(FlatPoly::zero(2).as_constant(), Some(Coeff::zero()));
        assert_eq!(FlatPoly::constant(Coeff::int(5), 3).as_constant(), Some(Coeff::int(5)));
        assert_eq!(FlatPoly::var(0, 2).as_constant(), None);
    }

    #[test]
    fn test_footprint_and_max_exponents() {
        let p = FlatPoly::new(
            vec![
                Term::new(smallvec![2, 0, 1], Coeff::int(1)),
                Term::new(smallvec![1, 0, 3], Coeff::int(4)),
            ],
            3,
        );
        assert_eq!(p.max_exponents(), vec![2, 0, 3]);
        assert_eq!(p.variable_footprint(), vec![true, false, true]);
    }

    #[test]
    fn test_display() {
        let p = FlatPoly::new(
            vec![
                Term::new(smallvec![2, 1], Coeff::int(3)),
                Term::new(smallvec![0, 0], Coeff::int(-1)),
            ],
            2,
        );
        assert_eq!(p.to_string(), "3*x0^2*x1 + -1");
    }
}
