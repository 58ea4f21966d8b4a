//! Engine diagnostics counters.
//!
//! Counters are atomics so concurrent calls update them without a
//! lock. Observability only: nothing here feeds back into results.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Hit/miss and fast-path counters for one engine instance.
#[derive(Debug, Default)]
pub struct GcdStats {
    cache_hits: AtomicU64,
    cache_misses: AtomicU64,
    trivial_hits: AtomicU64,
    monomial_hits: AtomicU64,
    euclid_rounds: AtomicU64,
}

impl GcdStats {
    /// Creates zeroed counters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_cache_hit(&self) {
        self.cache_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_cache_miss(&self) {
        self.cache_misses.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_trivial_hit(&self) {
        self.trivial_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_monomial_hit(&self) {
        self.monomial_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_euclid_round(&self) {
        self.euclid_rounds.fetch_add(1, Ordering::Relaxed);
    }

    /// Takes a point-in-time copy of the counters.
    #[must_use]
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            cache_hits: self.cache_hits.load(Ordering::Relaxed),
            cache_misses: self.cache_misses.load(Ordering::Relaxed),
            trivial_hits: self.trivial_hits.load(Ordering::Relaxed),
            monomial_hits: self.monomial_hits.load(Ordering::Relaxed),
            euclid_rounds: self.euclid_rounds.load(Ordering::Relaxed),
        }
    }

    /// Resets all counters to zero.
    pub fn reset(&self) {
        self.cache_hits.store(0, Ordering::Relaxed);
        self.cache_misses.store(0, Ordering::Relaxed);
        self.trivial_hits.store(0, Ordering::Relaxed);
        self.monomial_hits.store(0, Ordering::Relaxed);
        self.euclid_rounds.store(0, Ordering::Relaxed);
    }
}

/// A point-in-time copy of [`GcdStats`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StatsSnapshot {
    /// Memoization cache hits.
    pub cache_hits: u64,
    /// Memoization cache misses.
    pub cache_misses: u64,
    /// Calls resolved by the trivial-case resolver.
    pub trivial_hits: u64,
    /// Calls resolved by the monomial fast path.
    pub monomial_hits: u64,
    /// Iterations of the Euclidean pseudo-remainder loop.
    pub euclid_rounds: u64,
}

impl StatsSnapshot {
    /// Cache hit rate in [0, 1]; zero when no lookups happened.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn hit_rate(&self) -> f64 {
        let total = self.cache_hits + self.cache_misses;
        if total == 0 {
            0.0
        } else {
            self.cache_hits as f64 / total as f64
        }
    }
}

impl fmt::Display for StatsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cache: {} hits / {} misses ({:.1}% hit rate), trivial: {}, monomial: {}, euclid rounds: {}",
            self.cache_hits,
            self.cache_misses,
            self.hit_rate() * 100.0,
            self.trivial_hits,
            self.monomial_hits,
            self.euclid_rounds,
        )
    }
}
