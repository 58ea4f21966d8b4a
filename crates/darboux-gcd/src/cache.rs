//! The memoization cache.
//!
//! Results are keyed by the operand pair canonicalized to be
//! order-independent, so `gcd(a, b)` and `gcd(b, a)` share an entry.
//! The cache is internally synchronized, lives for the process (or the
//! owning engine), is unbounded, and is only ever cleared explicitly.

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::cmp::Ordering;

use darboux_poly::Coeff;

/// An unordered operand pair, stored in canonical order.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PairKey {
    lo: Coeff,
    hi: Coeff,
}

impl PairKey {
    /// Builds the canonical key for an operand pair.
    #[must_use]
    pub fn new(a: &Coeff, b: &Coeff) -> Self {
        if a.canonical_cmp(b) == Ordering::Greater {
            Self {
                lo: b.clone(),
                hi: a.clone(),
            }
        } else {
            Self {
                lo: a.clone(),
                hi: b.clone(),
            }
        }
    }
}

/// A concurrent map from canonicalized operand pairs to their GCD.
#[derive(Debug, Default)]
pub struct GcdCache {
    map: RwLock<FxHashMap<PairKey, Coeff>>,
}

impl GcdCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self {
            map: RwLock::new(FxHashMap::default()),
        }
    }

    /// Looks up a previously computed result.
    #[must_use]
    pub fn get(&self, key: &PairKey) -> Option<Coeff> {
        self.map.read().get(key).cloned()
    }

    /// Stores a computed result.
    pub fn insert(&self, key: PairKey, value: Coeff) {
        self.map.write().insert(key, value);
    }

    /// Returns the number of cached results.
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.read().len()
    }

    /// Returns true if nothing is cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.read().is_empty()
    }

    /// Drops every cached result.
    pub fn clear(&self) {
        self.map.write().clear();
    }
}
