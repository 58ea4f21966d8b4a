//! Engine tuning knobs.

use std::time::Duration;

/// Tuning configuration for a [`crate::GcdEngine`].
///
/// The configuration is an explicit value held by the engine; it is
/// never ambient global state. Scoped overrides go through
/// [`crate::GcdEngine::with_config`], which restores the previous
/// configuration when the closure returns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GcdConfig {
    /// Per-call time budget for a top-level gcd invocation.
    pub time_limit: Duration,
    /// Whether results are memoized in the engine's cache.
    pub cache_enabled: bool,
    /// Whether dispatch decisions are reported as `tracing` debug
    /// events. Observability only.
    pub debug: bool,
    /// Arity above which a sparse-interpolation algorithm would be
    /// preferred over Euclidean reduction. The Euclidean path is
    /// currently the only backend, so crossing the breakpoint is only
    /// reported, never acted on.
    pub euclid_breakpoint_arity: usize,
    /// Reserved "cut losses" policy extension point; not consulted by
    /// any current code path.
    pub cut_losses: Option<Duration>,
}

impl Default for GcdConfig {
    fn default() -> Self {
        Self {
            time_limit: Duration::from_secs(1),
            cache_enabled: true,
            debug: false,
            euclid_breakpoint_arity: 3,
            cut_losses: None,
        }
    }
}
