//! # darboux-gcd
//!
//! The multivariate polynomial GCD engine for Darboux.
//!
//! Exact GCD computation is what keeps rational expressions small
//! everywhere else in the system, and it is notoriously prone to
//! intermediate expression swell. This crate layers the classical
//! defenses on top of a pseudo-remainder-sequence Euclidean core:
//!
//! - Content/primitive-part separation, reapplied to every
//!   pseudo-remainder
//! - The Liao–Fateman variable-order heuristic
//! - Trivial-case and monomial fast paths
//! - Arity-reduction recursion (multivariate → univariate with
//!   polynomial coefficients)
//! - A call-scoped time box with cooperative cancellation
//! - A process-lifetime memoization cache with hit/miss diagnostics
//!
//! The engine is a value: construct a [`GcdEngine`] (or use
//! [`default_engine`]) and call [`GcdEngine::gcd`]. Free functions
//! [`gcd`], [`gcd_many`], and [`lcm`] delegate to the process-wide
//! default engine.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cache;
pub mod config;
pub mod content;
pub mod engine;
pub mod error;
pub mod reorder;
pub mod stats;
pub mod timebox;

mod euclid;
mod trivial;

#[cfg(test)]
mod proptests;

pub use cache::GcdCache;
pub use config::GcdConfig;
pub use engine::{default_engine, gcd, gcd_many, lcm, GcdEngine};
pub use error::GcdError;
pub use stats::{GcdStats, StatsSnapshot};
pub use timebox::{with_time_budget, TimeBox};
