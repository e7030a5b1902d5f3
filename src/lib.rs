//! # pascal-rows
//!
//! pascal-rows computes rows of Pascal's triangle (binomial coefficients) for
//! a single row index or an inclusive range of rows. The arithmetic core is a
//! factorial provider (a plain fold and a memoized, cache-backed variant)
//! feeding a binomial calculator and a row generator that exploits the
//! left/right symmetry of the coefficients to halve the work.
//!
//! ## Features
//! - Plain and memoized factorial providers sharing one contract
//! - Binomial coefficients C(n, k) with range checking
//! - Whole triangle rows via half-row computation plus mirroring
//! - A small console adapter (`pascal` binary) for single rows and ranges
//!
//! ## Numeric range
//!
//! All values are `u64` and exact through 20!. A request whose factorial
//! would leave that range fails with [`PascalError::FactorialOverflow`]
//! rather than wrapping; see `pascal_error` for the full taxonomy.
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! pascal-rows = "0.1"
//! ```
//!
//! ```rust
//! use pascal_rows::prelude::*;
//!
//! let row = row_factors(4)?;
//! assert_eq!(row, vec![1, 4, 6, 4, 1]);
//! # Ok::<(), PascalError>(())
//! ```

pub mod cli;
pub mod combinatorics;
pub mod pascal_error;

pub use pascal_error::PascalError;

/// A convenient prelude to import the most-used functions & types:
pub mod prelude {
    pub use crate::combinatorics::binomial::{binomial, binomial_with};
    pub use crate::combinatorics::factorial::{FactorialCache, factorial};
    pub use crate::combinatorics::row::{row_factors, row_factors_with};
    pub use crate::combinatorics::sequence::sequence;
    pub use crate::pascal_error::PascalError;
}
