//! # darboux-poly
//!
//! Flat sparse multivariate polynomials for Darboux.
//!
//! This crate provides:
//! - `Coeff`: the universal coefficient value — an exact scalar, an
//!   inexact real, or (recursively) a lower-arity polynomial
//! - `FlatPoly`: a sparse multivariate polynomial stored as sorted
//!   (exponent vector, coefficient) terms
//! - Arity shifts between the flat form and the univariate-with-
//!   polynomial-coefficients form used by recursive algorithms
//! - Fraction-free pseudo-remainder for univariate operands
//!
//! The representation is the contract consumed by the GCD engine in
//! `darboux-gcd`; no algorithmic policy lives here.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod arith;
pub mod coeff;
pub mod flat;

#[cfg(test)]
mod proptests;

pub use coeff::Coeff;
pub use flat::{Exponents, FlatPoly, Term};
