//! Set membership evaluator (`in:a,b,c`)
//!
//! Alternatives are kept as written. For integer scalars they are parsed at
//! evaluation time, in order, stopping at the first match; an unparsable
//! alternative reached before a match is a structural error.

use std::fmt;

use crate::foundation::{Evaluate, FailureKind, RuleError, Scalar, StructuralError};

/// Validates that a value equals one of a list of alternatives.
///
/// Duplicates are kept; order does not affect the outcome.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OneOf {
    /// Literal alternatives in rule order.
    pub alternatives: Vec<String>,
}

impl OneOf {
    /// Creates a membership evaluator.
    pub fn new<I, S>(alternatives: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            alternatives: alternatives.into_iter().map(Into::into).collect(),
        }
    }

    fn contains_integer(&self, n: i64) -> Result<bool, StructuralError> {
        for alt in &self.alternatives {
            let parsed = alt.parse::<i64>().map_err(|_| {
                StructuralError::wrong_value(
                    self.to_string(),
                    format!("alternative `{alt}` is not an integer"),
                )
            })?;
            if parsed == n {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

impl Evaluate for OneOf {
    fn evaluate(&self, scalar: Scalar<'_>) -> Result<(), RuleError> {
        let found = match scalar {
            Scalar::Text(text) => self.alternatives.iter().any(|alt| alt == text),
            Scalar::Integer(n) => self.contains_integer(n)?,
        };

        if found {
            Ok(())
        } else {
            Err(FailureKind::OutOfSet.into())
        }
    }
}

impl fmt::Display for OneOf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "in:{}", self.alternatives.join(","))
    }
}

/// Creates a membership evaluator.
pub fn one_of<I, S>(alternatives: I) -> OneOf
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    OneOf::new(alternatives)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_membership() {
        let validator = one_of(["admin", "stuff"]);
        assert!(validator.evaluate(Scalar::Text("admin")).is_ok());
        assert!(validator.evaluate(Scalar::Text("stuff")).is_ok());
        assert_eq!(
            validator.evaluate(Scalar::Text("aaaaa")),
            Err(RuleError::Violation(FailureKind::OutOfSet))
        );
    }

    #[test]
    fn test_text_is_case_sensitive_and_exact() {
        let validator = one_of(["foo", "bar"]);
        assert!(validator.evaluate(Scalar::Text("Foo")).is_err());
        assert!(validator.evaluate(Scalar::Text("foobar")).is_err());
        assert!(validator.evaluate(Scalar::Text("")).is_err());
    }

    #[test]
    fn test_integer_membership() {
        let validator = one_of(["200", "404", "500"]);
        assert!(validator.evaluate(Scalar::Integer(404)).is_ok());
        assert_eq!(
            validator.evaluate(Scalar::Integer(201)),
            Err(RuleError::Violation(FailureKind::OutOfSet))
        );
    }

    #[test]
    fn test_signed_integer_alternatives() {
        let validator = one_of(["-1", "+2"]);
        assert!(validator.evaluate(Scalar::Integer(-1)).is_ok());
        assert!(validator.evaluate(Scalar::Integer(2)).is_ok());
    }

    #[test]
    fn test_bad_integer_alternative_is_structural() {
        let validator = one_of(["3", "1d"]);
        let err = validator.evaluate(Scalar::Integer(4)).unwrap_err();
        assert!(matches!(
            err,
            RuleError::Structural(StructuralError::WrongValue { .. })
        ));

        // Text values never parse alternatives.
        assert!(validator.evaluate(Scalar::Text("1d")).is_ok());
    }

    #[test]
    fn test_integer_match_stops_before_bad_alternative() {
        assert!(one_of(["1", "x"]).evaluate(Scalar::Integer(1)).is_ok());

        let err = one_of(["x", "1"]).evaluate(Scalar::Integer(1)).unwrap_err();
        assert!(matches!(
            err,
            RuleError::Structural(StructuralError::WrongValue { .. })
        ));
    }

    #[test]
    fn test_duplicates_allowed() {
        let validator = one_of(["a", "a", "b"]);
        assert_eq!(validator.alternatives.len(), 3);
        assert!(validator.evaluate(Scalar::Text("b")).is_ok());
    }

    #[test]
    fn test_display() {
        assert_eq!(one_of(["16", "24"]).to_string(), "in:16,24");
    }
}
