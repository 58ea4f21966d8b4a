//! The universal coefficient value.
//!
//! A `Coeff` is what sits in a polynomial term: an exact integer or
//! rational, an inexact real, or — recursively — a lower-arity
//! polynomial. The recursive case is what lets an arity-N polynomial be
//! reinterpreted as univariate with arity-(N-1) coefficients.

use num_traits::{One, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use darboux_integers::{Integer, Rational};

use crate::flat::FlatPoly;

/// A polynomial coefficient: exact scalar, inexact real, or a
/// lower-arity polynomial.
///
/// Values are kept canonical: integral rationals demote to `Int`, and
/// constant polynomials collapse to their constant (see
/// [`Coeff::from_poly`]). Structural equality is therefore meaningful.
#[derive(Clone, Debug)]
pub enum Coeff {
    /// An exact arbitrary-precision integer.
    Int(Integer),
    /// An exact arbitrary-precision rational.
    Rat(Rational),
    /// An inexact floating-point value. Supported by arithmetic, not by
    /// exact gcd computation.
    Real(f64),
    /// A lower-arity polynomial coefficient.
    Poly(Box<FlatPoly>),
}

impl Coeff {
    /// The zero coefficient.
    #[must_use]
    pub fn zero() -> Self {
        Self::Int(Integer::zero())
    }

    /// The unit coefficient.
    #[must_use]
    pub fn one() -> Self {
        Self::Int(Integer::one())
    }

    /// Creates an integer coefficient from an i64.
    #[must_use]
    pub fn int(value: i64) -> Self {
        Self::Int(Integer::new(value))
    }

    /// Creates a rational coefficient, demoting to `Int` when integral.
    #[must_use]
    pub fn rat(value: Rational) -> Self {
        match value.to_integer() {
            Some(n) => Self::Int(n),
            None => Self::Rat(value),
        }
    }

    /// Wraps a polynomial, collapsing constants to their scalar value.
    #[must_use]
    pub fn from_poly(p: FlatPoly) -> Self {
        match p.as_constant() {
            Some(c) => c,
            None => Self::Poly(Box::new(p)),
        }
    }

    /// Returns the polynomial payload, if any.
    #[must_use]
    pub fn as_poly(&self) -> Option<&FlatPoly> {
        match self {
            Self::Poly(p) => Some(p),
            _ => None,
        }
    }

    /// Returns true for the zero coefficient.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Int(n) => n.is_zero(),
            Self::Rat(r) => r.is_zero(),
            Self::Real(x) => *x == 0.0,
            Self::Poly(p) => p.is_zero(),
        }
    }

    /// Returns true for the unit coefficient.
    #[must_use]
    pub fn is_one(&self) -> bool {
        match self {
            Self::Int(n) => n.is_one(),
            Self::Rat(r) => r.is_one(),
            Self::Real(x) => *x == 1.0,
            Self::Poly(_) => false,
        }
    }

    /// Returns true for ±1.
    #[must_use]
    pub fn is_unit(&self) -> bool {
        self.is_one() || self.neg().is_one()
    }

    /// Returns true if this is not a polynomial.
    #[must_use]
    pub fn is_scalar(&self) -> bool {
        !matches!(self, Self::Poly(_))
    }

    /// Returns true if the value is exact all the way down.
    #[must_use]
    pub fn is_exact(&self) -> bool {
        match self {
            Self::Int(_) | Self::Rat(_) => true,
            Self::Real(_) => false,
            Self::Poly(p) => !p.has_inexact_coeff(),
        }
    }

    /// Returns the arity of a polynomial coefficient, `None` for scalars.
    #[must_use]
    pub fn arity(&self) -> Option<usize> {
        self.as_poly().map(FlatPoly::arity)
    }

    /// Returns the sign of the leading scalar: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        match self {
            Self::Int(n) => n.signum(),
            Self::Rat(r) => r.signum(),
            Self::Real(x) => {
                if *x > 0.0 {
                    1
                } else if *x < 0.0 {
                    -1
                } else {
                    0
                }
            }
            Self::Poly(p) => p.signum(),
        }
    }

    /// Returns the absolute value (negates when the leading sign is
    /// negative).
    #[must_use]
    pub fn abs(&self) -> Self {
        if self.signum() < 0 {
            self.neg()
        } else {
            self.clone()
        }
    }

    /// Negates the coefficient.
    #[must_use]
    pub fn neg(&self) -> Self {
        match self {
            Self::Int(n) => Self::Int(-n),
            Self::Rat(r) => Self::Rat(-r),
            Self::Real(x) => Self::Real(-x),
            Self::Poly(p) => Self::Poly(Box::new(p.neg())),
        }
    }

    /// Adds two coefficients, promoting across Int → Rat → Real and
    /// embedding scalars as constants against polynomials.
    ///
    /// # Panics
    ///
    /// Panics if both operands are polynomials of different arity.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        use Coeff::{Int, Poly, Rat, Real};
        match (self, other) {
            (Int(a), Int(b)) => Int(a + b),
            (Int(a), Rat(b)) | (Rat(b), Int(a)) => {
                Self::rat(&Rational::from_integer(a.clone()) + b)
            }
            (Rat(a), Rat(b)) => Self::rat(a + b),
            (Poly(p), Poly(q)) => Self::from_poly(p.add(q)),
            (Poly(p), s) | (s, Poly(p)) => {
                Self::from_poly(p.add(&FlatPoly::constant(s.clone(), p.arity())))
            }
            (Real(a), s) | (s, Real(a)) => Real(a + s.scalar_to_f64()),
        }
    }

    /// Subtracts `other` from `self`.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Multiplies two coefficients with the same promotion rules as
    /// [`Coeff::add`].
    ///
    /// # Panics
    ///
    /// Panics if both operands are polynomials of different arity.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        use Coeff::{Int, Poly, Rat, Real};
        match (self, other) {
            (Int(a), Int(b)) => Int(a * b),
            (Int(a), Rat(b)) | (Rat(b), Int(a)) => {
                Self::rat(&Rational::from_integer(a.clone()) * b)
            }
            (Rat(a), Rat(b)) => Self::rat(a * b),
            (Poly(p), Poly(q)) => Self::from_poly(p.mul(q)),
            (Poly(p), s) | (s, Poly(p)) => Self::from_poly(p.scale(s)),
            (Real(a), s) | (s, Real(a)) => Real(a * s.scalar_to_f64()),
        }
    }

    /// Divides exactly, returning `None` when the division is not exact
    /// (integer remainder, polynomial remainder, or zero divisor).
    #[must_use]
    pub fn checked_div_exact(&self, divisor: &Self) -> Option<Self> {
        use Coeff::{Int, Poly, Rat, Real};
        if divisor.is_zero() {
            return None;
        }
        match (self, divisor) {
            (Int(a), Int(b)) => a.checked_div_exact(b).map(Int),
            (Int(a), Rat(b)) => {
                Rational::from_integer(a.clone()).checked_div_exact(b).map(Self::rat)
            }
            (Rat(a), Int(b)) => a
                .checked_div_exact(&Rational::from_integer(b.clone()))
                .map(Self::rat),
            (Rat(a), Rat(b)) => a.checked_div_exact(b).map(Self::rat),
            (Poly(p), Poly(q)) => {
                if p.arity() == q.arity() {
                    p.checked_div_exact(q).map(Self::from_poly)
                } else {
                    None
                }
            }
            (Poly(p), s) => p.checked_div_exact_coeff(s).map(Self::from_poly),
            // a scalar is never exactly divisible by a non-constant polynomial
            (_, Poly(_)) => None,
            (Real(a), s) => Some(Real(a / s.scalar_to_f64())),
            (s, Real(b)) => Some(Real(s.scalar_to_f64() / b)),
        }
    }

    /// Computes the gcd of two scalars, `None` when either operand is
    /// outside the exact scalar domain.
    ///
    /// Integer gcds are non-negative; mixed operands promote to the
    /// rational convention (gcd of numerators over lcm of denominators).
    #[must_use]
    pub fn scalar_gcd(&self, other: &Self) -> Option<Self> {
        use Coeff::{Int, Rat};
        match (self, other) {
            (Int(a), Int(b)) => Some(Int(a.gcd(b))),
            (Int(a), Rat(b)) | (Rat(b), Int(a)) => {
                Some(Self::rat(Rational::from_integer(a.clone()).gcd(b)))
            }
            (Rat(a), Rat(b)) => Some(Self::rat(a.gcd(b))),
            _ => None,
        }
    }

    /// Total order used to canonicalize unordered operand pairs.
    ///
    /// The order is arbitrary but deterministic: variant rank first,
    /// then value.
    #[must_use]
    pub fn canonical_cmp(&self, other: &Self) -> Ordering {
        use Coeff::{Int, Poly, Rat, Real};
        match (self, other) {
            (Int(a), Int(b)) => a.cmp(b),
            (Rat(a), Rat(b)) => a.cmp(b),
            (Real(a), Real(b)) => a.total_cmp(b),
            (Poly(p), Poly(q)) => p.canonical_cmp(q),
            _ => self.rank().cmp(&other.rank()),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Self::Int(_) => 0,
            Self::Rat(_) => 1,
            Self::Real(_) => 2,
            Self::Poly(_) => 3,
        }
    }

    /// Converts a scalar to f64.
    ///
    /// Only meaningful for scalar variants; callers guard on
    /// [`Coeff::is_scalar`].
    #[must_use]
    pub(crate) fn scalar_to_f64(&self) -> f64 {
        match self {
            Self::Int(n) => n.to_f64(),
            Self::Rat(r) => r.to_f64(),
            Self::Real(x) => *x,
            Self::Poly(_) => {
                debug_assert!(false, "scalar_to_f64 on a polynomial coefficient");
                f64::NAN
            }
        }
    }
}

impl PartialEq for Coeff {
    fn eq(&self, other: &Self) -> bool {
        use Coeff::{Int, Poly, Rat, Real};
        match (self, other) {
            (Int(a), Int(b)) => a == b,
            (Rat(a), Rat(b)) => a == b,
            // bit equality keeps Eq reflexive in the presence of NaN
            (Real(a), Real(b)) => a.to_bits() == b.to_bits(),
            (Poly(p), Poly(q)) => p == q,
            _ => false,
        }
    }
}

impl Eq for Coeff {}

impl Hash for Coeff {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rank().hash(state);
        match self {
            Self::Int(n) => n.hash(state),
            Self::Rat(r) => r.hash(state),
            Self::Real(x) => x.to_bits().hash(state),
            Self::Poly(p) => p.hash(state),
        }
    }
}

impl fmt::Display for Coeff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Rat(r) => write!(f, "{r}"),
            Self::Real(x) => write!(f, "{x}"),
            Self::Poly(p) => write!(f, "({p})"),
        }
    }
}

impl From<i64> for Coeff {
    fn from(value: i64) -> Self {
        Self::int(value)
    }
}

impl From<Integer> for Coeff {
    fn from(value: Integer) -> Self {
        Self::Int(value)
    }
}

impl From<Rational> for Coeff {
    fn from(value: Rational) -> Self {
        Self::rat(value)
    }
}
