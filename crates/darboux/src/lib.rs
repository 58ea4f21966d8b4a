//! # Darboux
//!
//! Exact symbolic algebra infrastructure for differential geometry and
//! physics modeling, written in Rust.
//!
//! The workspace centers on the multivariate polynomial GCD engine
//! that keeps rational expressions reduced everywhere else:
//!
//! - **Exact scalars**: arbitrary precision integers and rationals
//! - **Flat polynomials**: sparse multivariate representation with
//!   recursive (lower-arity polynomial) coefficients
//! - **GCD engine**: content separation, variable-order heuristics,
//!   monomial fast paths, arity-reduction recursion, time-boxed
//!   Euclidean reduction, and a memoizing cache
//!
//! ## Quick Start
//!
//! ```rust
//! use darboux::prelude::*;
//!
//! // gcd(x^2 - y^2, x + y) = x + y
//! let x = FlatPoly::var(0, 2);
//! let y = FlatPoly::var(1, 2);
//! let a = Coeff::from_poly(x.mul(&x).sub(&y.mul(&y)));
//! let b = Coeff::from_poly(x.add(&y));
//!
//! let engine = GcdEngine::new();
//! assert_eq!(engine.gcd(&a, &b).unwrap(), b);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use darboux_gcd as gcd;
pub use darboux_integers as integers;
pub use darboux_poly as poly;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use darboux_gcd::{gcd, gcd_many, lcm, GcdConfig, GcdEngine, GcdError, TimeBox};
    pub use darboux_integers::{Integer, Rational};
    pub use darboux_poly::{Coeff, FlatPoly, Term};
}
