//! Exact length evaluator (`len:N`)
//!
//! Length is measured with the configured [`LengthMode`]; Unicode scalar
//! values by default.

use std::fmt;

use crate::config::LengthMode;
use crate::foundation::{Evaluate, FailureKind, RuleError, Scalar, StructuralError};

/// Validates that text has exactly `length` elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExactLength {
    /// Required length.
    pub length: usize,
    /// How to count length.
    pub mode: LengthMode,
}

impl ExactLength {
    /// Creates an exact length evaluator that counts chars.
    #[must_use]
    pub fn new(length: usize) -> Self {
        Self {
            length,
            mode: LengthMode::Chars,
        }
    }

    /// Creates an exact length evaluator that counts bytes.
    #[must_use]
    pub fn bytes(length: usize) -> Self {
        Self {
            length,
            mode: LengthMode::Bytes,
        }
    }
}

impl Evaluate for ExactLength {
    fn evaluate(&self, scalar: Scalar<'_>) -> Result<(), RuleError> {
        match scalar {
            Scalar::Text(text) if self.mode.measure(text) == self.length => Ok(()),
            Scalar::Text(_) => Err(FailureKind::LengthMismatch.into()),
            other => Err(StructuralError::unsupported(self.to_string(), other.kind_name()).into()),
        }
    }
}

impl fmt::Display for ExactLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "len:{}", self.length)
    }
}

/// Creates an exact length evaluator.
#[must_use]
pub fn exact_length(length: usize) -> ExactLength {
    ExactLength::new(length)
}
