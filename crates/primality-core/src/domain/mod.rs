//! Domain layer: the primality check and the values around it.
//!
//! - **No I/O**: nothing here reads, writes or allocates beyond error text
//! - **No state**: every function is pure and safe to call from any thread
//! - **No subscribers**: spans and events are emitted, never collected

pub mod candidate;
pub mod error;
pub mod primality;
pub mod verdict;

pub use candidate::Candidate;
pub use error::{DomainError, ErrorCategory};
pub use primality::{is_prime, smallest_witness};
pub use verdict::{Verdict, VerdictKind};
