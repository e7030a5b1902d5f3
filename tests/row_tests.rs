use pascal_rows::combinatorics::binomial::{binomial, binomial_with};
use pascal_rows::combinatorics::factorial::{FactorialCache, factorial};
use pascal_rows::combinatorics::row::{row_factors, row_factors_with};
use pascal_rows::combinatorics::sequence::sequence;
use pascal_rows::pascal_error::PascalError;

#[test]
fn sequence_feeds_the_factorial_fold() {
    assert_eq!(sequence(0), Vec::<u64>::new());
    assert_eq!(sequence(4), vec![1, 2, 3, 4]);
    assert_eq!(factorial(4), Ok(24));
}

#[test]
fn reference_rows() {
    assert_eq!(row_factors(0), Ok(vec![1]));
    assert_eq!(row_factors(1), Ok(vec![1, 1]));
    assert_eq!(row_factors(4), Ok(vec![1, 4, 6, 4, 1]));
    assert_eq!(
        row_factors(14),
        Ok(vec![
            1, 14, 91, 364, 1001, 2002, 3003, 3432, 3003, 2002, 1001, 364, 91, 14, 1
        ])
    );
}

#[test]
fn reference_binomials() {
    assert_eq!(binomial(10, 3), Ok(120));
    assert_eq!(binomial(5, 2), Ok(10));
}

#[test]
fn one_cache_serves_a_whole_triangle() {
    let mut cache = FactorialCache::new();
    for row in 0..=20u32 {
        let factors = row_factors_with(&mut cache, row).unwrap();
        assert_eq!(factors.len(), row as usize + 1);
        // Every row stays consistent with the per-coefficient calculator.
        for (k, factor) in factors.iter().enumerate() {
            assert_eq!(*factor, binomial_with(&mut cache, row, k as u32).unwrap());
        }
    }
    // 0..=20 factorials, each written once.
    assert_eq!(cache.len(), 21);
}

#[test]
fn error_kinds_reach_the_caller_untouched() {
    assert_eq!(
        binomial(2, 5),
        Err(PascalError::KOutOfRange { n: 2, k: 5 })
    );
    assert_eq!(factorial(40), Err(PascalError::FactorialOverflow { n: 40 }));
    assert_eq!(
        row_factors(22),
        Err(PascalError::FactorialOverflow { n: 22 })
    );
}
