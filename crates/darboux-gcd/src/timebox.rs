//! Call-scoped time budgeting.
//!
//! A [`TimeBox`] is created per top-level gcd invocation and threaded
//! by reference down the recursion. It is a plain stack value — never
//! thread-local or global — so concurrent calls cannot observe or
//! corrupt each other's deadlines, and teardown is automatic when the
//! call returns.
//!
//! Per call the box moves idle → running → converged | timed out:
//! construction arms the deadline, every checkpoint self-loops while
//! time remains, and expiry surfaces as [`GcdError::Timeout`] rather
//! than a partial answer.

use std::time::{Duration, Instant};

use crate::error::GcdError;

/// A deadline bound to one top-level call.
#[derive(Clone, Debug)]
pub struct TimeBox {
    started: Instant,
    deadline: Option<Instant>,
}

impl TimeBox {
    /// Creates a box with no deadline; checkpoints always pass.
    #[must_use]
    pub fn unbounded() -> Self {
        Self {
            started: Instant::now(),
            deadline: None,
        }
    }

    /// Creates a box whose deadline is `budget` from now.
    #[must_use]
    pub fn with_budget(budget: Duration) -> Self {
        let started = Instant::now();
        Self {
            started,
            deadline: Some(started + budget),
        }
    }

    /// Returns the time elapsed since the box was opened.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Returns true iff a deadline is active and has passed.
    #[must_use]
    pub fn expired(&self) -> bool {
        self.deadline.is_some_and(|d| Instant::now() >= d)
    }

    /// Checkpoint: fails with [`GcdError::Timeout`] when the deadline
    /// has passed, recording what the engine was doing.
    ///
    /// # Errors
    ///
    /// Returns [`GcdError::Timeout`] iff the deadline has passed.
    pub fn check(&self, context: &str) -> Result<(), GcdError> {
        if self.expired() {
            Err(GcdError::Timeout {
                context: context.to_owned(),
                elapsed: self.elapsed(),
            })
        } else {
            Ok(())
        }
    }
}

/// Runs `f` against a fresh time box with the given budget.
///
/// The box lives exactly for the dynamic extent of `f`.
pub fn with_time_budget<R>(budget: Duration, f: impl FnOnce(&TimeBox) -> R) -> R {
    let tb = TimeBox::with_budget(budget);
    f(&tb)
}
