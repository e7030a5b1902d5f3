//! Re-export the combinatorial building blocks.

pub mod binomial;
pub mod factorial;
pub mod row;
pub mod sequence;

pub use binomial::{binomial, binomial_with};
pub use factorial::{FactorialCache, factorial};
pub use row::{row_factors, row_factors_with};
pub use sequence::sequence;

#[cfg(test)]
mod tests;
