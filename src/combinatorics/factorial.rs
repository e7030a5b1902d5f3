//! Factorial providers: a plain fold and a memoized, cache-backed variant.
//!
//! Both satisfy the same contract (`n!` with `0! = 1`, exact through `20!`,
//! `FactorialOverflow` beyond that) and differ only in cost profile. The
//! cache-backed form answers repeated or overlapping requests in O(1) with
//! exactly one write per previously-unseen integer.

use crate::combinatorics::sequence::sequence;
use crate::pascal_error::PascalError;

/// Computes `n!` by folding multiplication over [`sequence`]`(n)`.
///
/// Every step is a `checked_mul`, so a product that leaves the `u64` range
/// (first at `21!`) fails with [`PascalError::FactorialOverflow`] instead of
/// wrapping.
pub fn factorial(n: u32) -> Result<u64, PascalError> {
    sequence(n).into_iter().try_fold(1u64, |acc, el| {
        acc.checked_mul(el)
            .ok_or(PascalError::FactorialOverflow { n })
    })
}

/// Memoized factorial provider over a dense prefix of cached values.
///
/// `cache[i]` holds `i!`; whenever an index is present, every smaller index
/// is present too, so the mapping is structurally a `Vec`. The cache is
/// seeded with `0! = 1`, grows monotonically and never shrinks. Callers hold
/// the provider by `&mut`, which rules out concurrent access without any
/// locking.
#[derive(Debug, Clone)]
pub struct FactorialCache {
    cache: Vec<u64>,
}

impl FactorialCache {
    /// Creates a cache holding only the seed entry `0! = 1`.
    pub fn new() -> Self {
        Self { cache: vec![1] }
    }

    /// Returns `n!`, extending the cached prefix when `n` is unseen.
    ///
    /// A hit returns the stored value with no writes. A miss iterates from
    /// the highest cached index forward, multiplying by each next integer and
    /// storing every newly computed factorial, so across repeated calls each
    /// distinct integer is computed and written exactly once. If a step
    /// overflows, the values cached before that step are kept, so the dense
    /// prefix stays intact.
    pub fn factorial(&mut self, n: u32) -> Result<u64, PascalError> {
        let target = n as usize;
        if let Some(&hit) = self.cache.get(target) {
            return Ok(hit);
        }
        for el in self.cache.len()..=target {
            let val = self.cache[el - 1]
                .checked_mul(el as u64)
                .ok_or(PascalError::FactorialOverflow { n })?;
            self.cache.push(val);
        }
        log::debug!("factorial cache extended to {} entries", self.cache.len());
        Ok(self.cache[target])
    }

    /// Number of cached entries; the cached indices are always `0..len()`.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Always false: the seed entry `0! = 1` is never evicted.
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

impl Default for FactorialCache {
    fn default() -> Self {
        Self::new()
    }
}
