//! Variable-order optimization (Liao–Fateman).
//!
//! Sorting variables by ascending maximum exponent before the recursion
//! tends to keep the coefficient domain small: the main variable — the
//! one the Euclidean loop reduces on — ends up being the heaviest,
//! and the cheap variables sink into the coefficients. This is purely a
//! performance heuristic; results are identical with or without it.

use darboux_poly::{Exponents, FlatPoly};

/// A bijection on variable indices.
///
/// `order[new] = old`: applying the permutation moves the exponent of
/// old variable `order[k]` to position `k`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VarPerm {
    order: Vec<usize>,
}

impl VarPerm {
    /// The identity permutation on `arity` variables.
    #[must_use]
    pub fn identity(arity: usize) -> Self {
        Self {
            order: (0..arity).collect(),
        }
    }

    /// Returns true if applying this permutation changes nothing.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.order.iter().enumerate().all(|(new, &old)| new == old)
    }

    /// Number of variables the permutation acts on.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns true for the empty permutation.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Applies the permutation to one exponent vector.
    #[must_use]
    pub fn apply(&self, exponents: &[u32]) -> Exponents {
        self.order.iter().map(|&old| exponents[old]).collect()
    }

    /// Returns the inverse permutation.
    #[must_use]
    pub fn inverse(&self) -> Self {
        let mut order = vec![0; self.order.len()];
        for (new, &old) in self.order.iter().enumerate() {
            order[old] = new;
        }
        Self { order }
    }

    /// Applies the permutation to every term of a polynomial.
    #[must_use]
    pub fn permute_poly(&self, p: &FlatPoly) -> FlatPoly {
        debug_assert_eq!(self.len(), p.arity());
        p.map_exponents(|e| self.apply(e))
    }
}

/// Derives the permutation sorting variables by ascending maximum
/// exponent over the combined term set of both operands.
///
/// The per-variable weight is the component-wise max over all terms,
/// not a sum; ties keep the original variable order (stable sort), so
/// the permutation is deterministic.
#[must_use]
pub fn optimal_order(u: &FlatPoly, v: &FlatPoly) -> VarPerm {
    let mu = u.max_exponents();
    let mv = v.max_exponents();
    let combined: Vec<u32> = mu
        .into_iter()
        .zip(mv)
        .map(|(a, b)| a.max(b))
        .collect();

    let mut order: Vec<usize> = (0..combined.len()).collect();
    order.sort_by_key(|&i| combined[i]);
    VarPerm { order }
}
