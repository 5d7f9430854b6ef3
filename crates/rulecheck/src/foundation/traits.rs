//! Core trait for rule evaluators

use crate::foundation::{RuleError, Scalar};

/// The trait every rule evaluator implements.
///
/// An evaluator checks one [`Scalar`] and returns:
///
/// * `Ok(())` if the value satisfies the rule
/// * `Err(RuleError::Violation(kind))` if it does not
/// * `Err(RuleError::Structural(_))` if the rule cannot be applied to this
///   kind of scalar, or its parameter turns out to be malformed
///
/// # Examples
///
/// ```rust
/// use nebula_rulecheck::foundation::{Evaluate, FailureKind, RuleError, Scalar, StructuralError};
///
/// struct NonEmpty;
///
/// impl Evaluate for NonEmpty {
///     fn evaluate(&self, scalar: Scalar<'_>) -> Result<(), RuleError> {
///         match scalar {
///             Scalar::Text(s) if s.is_empty() => Err(FailureKind::LengthMismatch.into()),
///             Scalar::Text(_) => Ok(()),
///             other => Err(StructuralError::unsupported("non_empty", other.kind_name()).into()),
///         }
///     }
/// }
///
/// assert!(NonEmpty.evaluate(Scalar::Text("a")).is_ok());
/// assert!(NonEmpty.evaluate(Scalar::Text("")).is_err());
/// ```
pub trait Evaluate {
    /// Evaluates a single scalar.
    fn evaluate(&self, scalar: Scalar<'_>) -> Result<(), RuleError>;
}

impl<E: Evaluate + ?Sized> Evaluate for &E {
    fn evaluate(&self, scalar: Scalar<'_>) -> Result<(), RuleError> {
        (**self).evaluate(scalar)
    }
}
