//! Classification of a candidate, with the witness that decided it.

use std::fmt;

use serde::Serialize;
use tracing::trace;

use crate::domain::primality::smallest_witness;

/// What trial division concluded about a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerdictKind {
    /// `0` or `1`: neither prime nor composite.
    Unit,
    Prime,
    /// `witness` is the smallest divisor greater than one.
    Composite { witness: u64 },
}

impl VerdictKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unit => "unit",
            Self::Prime => "prime",
            Self::Composite { .. } => "composite",
        }
    }
}

/// The answer for one candidate.
///
/// Serialises as `{"candidate", "prime", "kind", "witness"}`, with
/// `witness` set to `null` unless the candidate is composite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "VerdictRepr")]
pub struct Verdict {
    candidate: u64,
    kind: VerdictKind,
}

impl Verdict {
    /// Classify `candidate` by trial division.
    ///
    /// ```
    /// use primality_core::{Verdict, VerdictKind};
    ///
    /// assert_eq!(Verdict::classify(1).kind(), VerdictKind::Unit);
    /// assert_eq!(Verdict::classify(97).kind(), VerdictKind::Prime);
    /// assert_eq!(Verdict::classify(91).witness(), Some(7));
    /// ```
    pub fn classify(candidate: u64) -> Self {
        let kind = match (candidate, smallest_witness(candidate)) {
            (0 | 1, _) => VerdictKind::Unit,
            (_, Some(witness)) => VerdictKind::Composite { witness },
            (_, None) => VerdictKind::Prime,
        };
        trace!(candidate, kind = kind.as_str(), "Classified candidate");
        Self { candidate, kind }
    }

    pub fn candidate(&self) -> u64 {
        self.candidate
    }

    pub fn kind(&self) -> VerdictKind {
        self.kind
    }

    pub fn is_prime(&self) -> bool {
        self.kind == VerdictKind::Prime
    }

    pub fn witness(&self) -> Option<u64> {
        match self.kind {
            VerdictKind::Composite { witness } => Some(witness),
            _ => None,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            VerdictKind::Unit => write!(f, "{} is not prime", self.candidate),
            VerdictKind::Prime => write!(f, "{} is prime", self.candidate),
            VerdictKind::Composite { witness } => write!(
                f,
                "{} is not prime ({} = {} x {})",
                self.candidate,
                self.candidate,
                witness,
                self.candidate / witness
            ),
        }
    }
}

#[derive(Serialize)]
struct VerdictRepr {
    candidate: u64,
    prime: bool,
    kind: &'static str,
    witness: Option<u64>,
}

impl From<Verdict> for VerdictRepr {
    fn from(v: Verdict) -> Self {
        Self {
            candidate: v.candidate,
            prime: v.is_prime(),
            kind: v.kind.as_str(),
            witness: v.witness(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::primality::is_prime;

    #[test]
    fn units() {
        for n in [0, 1] {
            let v = Verdict::classify(n);
            assert_eq!(v.kind(), VerdictKind::Unit);
            assert!(!v.is_prime());
            assert_eq!(v.witness(), None);
        }
    }

    #[test]
    fn agrees_with_is_prime() {
        for n in 0..20_000u64 {
            assert_eq!(Verdict::classify(n).is_prime(), is_prime(n), "{n}");
        }
    }

    #[test]
    fn composite_carries_witness() {
        let v = Verdict::classify(104_730);
        assert_eq!(v.kind(), VerdictKind::Composite { witness: 2 });
        assert_eq!(v.candidate(), 104_730);
    }

    #[test]
    fn display() {
        assert_eq!(Verdict::classify(97).to_string(), "97 is prime");
        assert_eq!(Verdict::classify(1).to_string(), "1 is not prime");
        assert_eq!(
            Verdict::classify(91).to_string(),
            "91 is not prime (91 = 7 x 13)"
        );
    }

    #[test]
    fn json_shape() {
        let json = serde_json::to_value(Verdict::classify(91)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "candidate": 91,
                "prime": false,
                "kind": "composite",
                "witness": 7,
            })
        );

        let json = serde_json::to_value(Verdict::classify(2)).unwrap();
        assert_eq!(json["prime"], true);
        assert_eq!(json["kind"], "prime");
        assert!(json["witness"].is_null());
    }
}
