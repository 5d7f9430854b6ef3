//! Regular expression evaluator (`regexp:...`)
//!
//! Matching is unanchored, the same as `Regex::is_match`; anchor the pattern
//! with `^`/`$` to require a full match.

use std::fmt;

use regex::Regex;

use crate::foundation::{Evaluate, FailureKind, RuleError, Scalar, StructuralError};

/// Validates that text matches a regular expression.
#[derive(Debug, Clone)]
pub struct MatchesPattern {
    /// Compiled pattern.
    pub pattern: Regex,
}

impl MatchesPattern {
    /// Compiles `source` into an evaluator.
    ///
    /// A pattern that does not compile is a `WrongValue` error.
    pub fn new(source: &str) -> Result<Self, StructuralError> {
        Regex::new(source)
            .map(|pattern| Self { pattern })
            .map_err(|err| {
                StructuralError::wrong_value(format!("regexp:{source}"), err.to_string())
            })
    }
}

impl Evaluate for MatchesPattern {
    fn evaluate(&self, scalar: Scalar<'_>) -> Result<(), RuleError> {
        match scalar {
            Scalar::Text(text) if self.pattern.is_match(text) => Ok(()),
            Scalar::Text(_) => Err(FailureKind::PatternMismatch.into()),
            other => Err(StructuralError::unsupported(self.to_string(), other.kind_name()).into()),
        }
    }
}

impl PartialEq for MatchesPattern {
    fn eq(&self, other: &Self) -> bool {
        self.pattern.as_str() == other.pattern.as_str()
    }
}

impl Eq for MatchesPattern {}

impl fmt::Display for MatchesPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "regexp:{}", self.pattern.as_str())
    }
}

/// Compiles a pattern evaluator.
pub fn matches_pattern(source: &str) -> Result<MatchesPattern, StructuralError> {
    MatchesPattern::new(source)
}
