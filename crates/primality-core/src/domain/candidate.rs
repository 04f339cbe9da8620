//! The integer under test, and how text becomes one.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::error::DomainError;

/// A value to be checked for primality.
///
/// Any `u64` is a valid candidate; the newtype exists so that parsing from
/// user input has a single, well-defined home.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Candidate(u64);

impl Candidate {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for Candidate {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<Candidate> for u64 {
    fn from(candidate: Candidate) -> Self {
        candidate.0
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for Candidate {
    type Err = DomainError;

    /// Parse a decimal candidate.
    ///
    /// Surrounding whitespace and a single leading `+` are accepted, and
    /// digits may be grouped with single underscores (`1_000_003`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let result = parse_decimal(s);
        if let Err(e) = &result {
            debug!(input = s, error = %e, "Rejected candidate");
        }
        result.map(Self)
    }
}

fn parse_decimal(input: &str) -> Result<u64, DomainError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(DomainError::Empty);
    }

    if let Some(rest) = trimmed.strip_prefix('-') {
        return if is_digit_group(rest) {
            Err(DomainError::Negative {
                input: trimmed.to_owned(),
            })
        } else {
            Err(DomainError::InvalidDigits {
                input: trimmed.to_owned(),
            })
        };
    }

    let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
    if !is_digit_group(digits) {
        return Err(DomainError::InvalidDigits {
            input: trimmed.to_owned(),
        });
    }

    digits
        .bytes()
        .filter(u8::is_ascii_digit)
        .try_fold(0u64, |acc, b| {
            acc.checked_mul(10)?.checked_add(u64::from(b - b'0'))
        })
        .ok_or_else(|| DomainError::OutOfRange {
            input: trimmed.to_owned(),
        })
}

/// Digits, optionally separated by single underscores.
fn is_digit_group(s: &str) -> bool {
    let bytes = s.as_bytes();
    match (bytes.first(), bytes.last()) {
        (Some(first), Some(last)) if first.is_ascii_digit() && last.is_ascii_digit() => {}
        _ => return false,
    }
    bytes.iter().all(|b| b.is_ascii_digit() || *b == b'_') && !s.contains("__")
}
