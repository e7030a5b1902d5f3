//! Whole triangle rows, computed from the left half by symmetry.

use crate::combinatorics::binomial::binomial_with;
use crate::combinatorics::factorial::FactorialCache;
use crate::pascal_error::PascalError;

/// Returns row `row` of Pascal's triangle: `[C(row, 0), ..., C(row, row)]`.
///
/// The coefficients are symmetric (`C(R, i) = C(R, R-i)`), so only the left
/// half of the row goes through the binomial calculator; the right half is
/// the left half mirrored. Row 0 short-circuits to `[1]` without any
/// binomial work.
pub fn row_factors_with(cache: &mut FactorialCache, row: u32) -> Result<Vec<u64>, PascalError> {
    if row == 0 {
        return Ok(vec![1]);
    }
    let width = row as usize + 1;
    let cutoff = width.div_ceil(2);
    let mut factors = Vec::with_capacity(width);
    for i in 0..cutoff {
        factors.push(binomial_with(cache, row, i as u32)?);
    }
    // Mirror the left half; when the width is odd the first mirrored element
    // duplicates the true middle and is dropped.
    let mirrored: Vec<u64> = factors.iter().rev().skip(width % 2).copied().collect();
    factors.extend(mirrored);
    Ok(factors)
}

/// Returns row `row` over a fresh, single-use cache.
///
/// Share a [`FactorialCache`] via [`row_factors_with`] instead when emitting
/// several rows of the same triangle.
pub fn row_factors(row: u32) -> Result<Vec<u64>, PascalError> {
    row_factors_with(&mut FactorialCache::new(), row)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_zero_short_circuits() {
        assert_eq!(row_factors(0), Ok(vec![1]));
    }

    #[test]
    fn small_rows() {
        assert_eq!(row_factors(1), Ok(vec![1, 1]));
        assert_eq!(row_factors(2), Ok(vec![1, 2, 1]));
        assert_eq!(row_factors(4), Ok(vec![1, 4, 6, 4, 1]));
    }

    #[test]
    fn row_fourteen_matches_reference() {
        assert_eq!(
            row_factors(14),
            Ok(vec![
                1, 14, 91, 364, 1001, 2002, 3003, 3432, 3003, 2002, 1001, 364, 91, 14, 1
            ])
        );
    }

    #[test]
    fn length_is_row_plus_one() {
        for row in 0..=20u32 {
            assert_eq!(row_factors(row).unwrap().len(), row as usize + 1);
        }
    }

    #[test]
    fn rows_are_palindromes() {
        for row in 0..=20u32 {
            let factors = row_factors(row).unwrap();
            let mut reversed = factors.clone();
            reversed.reverse();
            assert_eq!(factors, reversed);
        }
    }

    #[test]
    fn shared_cache_spans_rows() {
        let mut cache = FactorialCache::new();
        row_factors_with(&mut cache, 12).unwrap();
        let len_after_first = cache.len();
        // A smaller row only needs factorials the first row already cached.
        row_factors_with(&mut cache, 9).unwrap();
        assert_eq!(cache.len(), len_after_first);
    }

    #[test]
    fn overflow_propagates_from_the_provider() {
        assert_eq!(
            row_factors(21),
            Err(PascalError::FactorialOverflow { n: 21 })
        );
    }
}
