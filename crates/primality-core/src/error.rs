//! Unified error handling for Primality Core.

use thiserror::Error;

use crate::domain::DomainError;

/// Root error type for Primality Core operations.
///
/// [`is_prime`](crate::is_prime) cannot fail; errors only arise where
/// untyped input crosses into the library.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PrimalityError {
    /// Errors from the domain layer.
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl PrimalityError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Range => ErrorCategory::Range,
            },
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Range,
}

/// Convenient result type alias.
pub type PrimalityResult<T> = Result<T, PrimalityError>;
