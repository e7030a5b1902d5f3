//! PascalError: unified error type for pascal-rows public APIs
//!
//! Every fallible operation in the crate reports through this enum so callers
//! get non-panicking error handling with a single match surface. The core
//! never catches its own errors; the binary is the only recovery point.

use thiserror::Error;

/// Unified error type for pascal-rows operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PascalError {
    /// A supplied token could not be read as an integer (textual, fractional,
    /// or outside the supported row range).
    #[error("invalid argument `{given}`: supply an integer")]
    InvalidArgument { given: String },
    /// `k` exceeded `n` in a binomial request.
    #[error("k must be <= n (got n = {n}, k = {k})")]
    KOutOfRange { n: u32, k: u32 },
    /// The requested factorial leaves the exactly-representable `u64` range.
    #[error("{n}! exceeds the supported u64 range")]
    FactorialOverflow { n: u32 },
}
