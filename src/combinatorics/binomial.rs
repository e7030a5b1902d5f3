//! Binomial coefficients via the factorial providers.

use crate::combinatorics::factorial::FactorialCache;
use crate::pascal_error::PascalError;

/// Computes `C(n, k) = n! / (k!(n-k)!)` against a shared factorial cache.
///
/// Fails with [`PascalError::KOutOfRange`] when `k > n`, before any factorial
/// work is done. The only side effect is growing the caller's cache.
pub fn binomial_with(cache: &mut FactorialCache, n: u32, k: u32) -> Result<u64, PascalError> {
    if k > n {
        return Err(PascalError::KOutOfRange { n, k });
    }
    let n_fact = cache.factorial(n)?;
    let k_fact = cache.factorial(k)?;
    let rest_fact = cache.factorial(n - k)?;
    // k!(n-k)! divides n!, so the denominator fits whenever n! does and the
    // division is exact.
    Ok(n_fact / (k_fact * rest_fact))
}

/// Computes `C(n, k)` over a fresh, single-use cache.
///
/// Share a [`FactorialCache`] via [`binomial_with`] instead when making many
/// related requests.
pub fn binomial(n: u32, k: u32) -> Result<u64, PascalError> {
    binomial_with(&mut FactorialCache::new(), n, k)
}
