//! Engine failure kinds.

use std::time::Duration;
use thiserror::Error;

/// Errors surfaced by the GCD engine.
///
/// Every variant is terminal for the call that raised it; the engine
/// performs no internal retries and never substitutes a weaker answer
/// for a failure.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GcdError {
    /// Operands are polynomials of different arity.
    #[error("operand arity mismatch: {left} vs {right}")]
    ArityMismatch {
        /// Arity of the left operand.
        left: usize,
        /// Arity of the right operand.
        right: usize,
    },

    /// A division that must be exact left a remainder. This is an
    /// internal invariant violation (content must divide its
    /// polynomial; pseudo-remainder steps stay in the coefficient
    /// domain), never an input error.
    #[error("inexact division during {0}")]
    InexactDivision(String),

    /// The call's time budget elapsed. The computation was abandoned;
    /// no partial answer exists.
    #[error("gcd timed out after {elapsed:?} during {context}")]
    Timeout {
        /// What the engine was doing when the deadline was noticed.
        context: String,
        /// Time elapsed since the time box was opened.
        elapsed: Duration,
    },

    /// GCD requested over a domain the engine does not support.
    #[error("gcd unsupported: {0}")]
    Unsupported(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let e = GcdError::ArityMismatch { left: 2, right: 3 };
        assert_eq!(e.to_string(), "operand arity mismatch: 2 vs 3");

        let e = GcdError::Unsupported("inexact scalar operand".into());
        assert!(e.to_string().contains("inexact scalar"));
    }
}
