//! Primality Core - deterministic primality check for `u64`
//!
//! The crate answers one question: is this unsigned 64-bit integer prime?
//! [`is_prime`] does it by trial division with an early exit for even
//! numbers, and is total over `u64`:
//!
//! - `0` and `1` are not prime
//! - `2` is prime, and is the only even prime
//! - every other even number is not prime
//! - an odd number `n >= 3` is prime iff no odd `d` with `d * d <= n`
//!   divides it
//!
//! Around that function sit a few conveniences used by the `primality`
//! command-line example: [`smallest_witness`] reports the divisor that
//! proves a number composite, [`Verdict`] bundles the answer for display,
//! and [`Candidate`] parses user text with typed errors.
//!
//! ## Usage
//!
//! ```rust
//! use primality_core::prelude::*;
//!
//! assert!(is_prime(97));
//! assert!(!is_prime(100));
//!
//! let candidate: Candidate = "1_000_003".parse()?;
//! let verdict = Verdict::classify(candidate.get());
//! assert!(verdict.is_prime());
//! # Ok::<(), DomainError>(())
//! ```
//!
//! There is no memoization, no probabilistic test and no big-integer
//! support. Each call is O(sqrt(n)) and independent of every other.

pub mod domain;

pub mod error;

pub use domain::{Candidate, Verdict, VerdictKind, is_prime, smallest_witness};

// Public API - what external crates should use
pub mod prelude {
    pub use crate::domain::{
        Candidate, DomainError, Verdict, VerdictKind, is_prime, smallest_witness,
    };
    pub use crate::error::{PrimalityError, PrimalityResult};
    pub use crate::parse_candidate;
}

/// Parse user text into a [`Candidate`], wrapping failures in
/// [`PrimalityError`](error::PrimalityError).
pub fn parse_candidate(input: &str) -> error::PrimalityResult<Candidate> {
    Ok(input.parse()?)
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
