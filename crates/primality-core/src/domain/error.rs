use thiserror::Error;

/// Errors raised at the type boundary, when text is turned into a candidate.
///
/// The primality check itself is total and has no error cases.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Candidate is empty")]
    Empty,

    #[error("Negative candidate '{input}': only unsigned integers can be checked")]
    Negative { input: String },

    #[error("Candidate '{input}' is larger than {max}", max = u64::MAX)]
    OutOfRange { input: String },

    #[error("Candidate '{input}' is not a decimal integer")]
    InvalidDigits { input: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Empty => vec!["Pass a non-negative integer, e.g. `primality check 97`".into()],
            Self::Negative { .. } => vec![
                "Negative numbers are never prime".into(),
                "Pass a value between 0 and 18446744073709551615".into(),
            ],
            Self::OutOfRange { .. } => vec![
                format!("The largest value that can be checked is {}", u64::MAX),
                "Arbitrary-precision integers are not supported".into(),
            ],
            Self::InvalidDigits { input } => vec![
                format!("'{}' contains characters other than digits", input.trim()),
                "Digits may be grouped with underscores: 1_000_003".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Empty | Self::InvalidDigits { .. } => ErrorCategory::Validation,
            Self::Negative { .. } | Self::OutOfRange { .. } => ErrorCategory::Range,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Range,
}
