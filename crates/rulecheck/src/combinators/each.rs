//! EACH combinator - applies a scalar evaluator to every element of a sequence

use crate::foundation::{Evaluate, RuleError, Scalar, StructuralError, Value};

// ============================================================================
// EACH COMBINATOR
// ============================================================================

/// Applies an evaluator to each element of a homogeneous sequence.
///
/// Stops at the first element that fails and returns that element's error
/// unchanged, so one sequence field yields at most one failure per rule.
/// An empty sequence passes.
///
/// # Examples
///
/// ```rust
/// use nebula_rulecheck::combinators::Each;
/// use nebula_rulecheck::foundation::{FailureKind, RuleError, Scalar};
/// use nebula_rulecheck::validators::exact_length;
///
/// let each = Each::new(exact_length(2));
///
/// assert!(each.evaluate_all(["ab", "cd"].map(Scalar::Text)).is_ok());
/// assert_eq!(
///     each.evaluate_all(["ab", "c", "d"].map(Scalar::Text)),
///     Err(RuleError::Violation(FailureKind::LengthMismatch)),
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Each<E> {
    inner: E,
}

impl<E: Evaluate> Each<E> {
    /// Creates a new EACH combinator.
    pub fn new(inner: E) -> Self {
        Self { inner }
    }

    /// Returns a reference to the inner evaluator.
    pub fn inner(&self) -> &E {
        &self.inner
    }

    /// Extracts the inner evaluator.
    pub fn into_inner(self) -> E {
        self.inner
    }

    /// Evaluates every element in order, stopping at the first error.
    pub fn evaluate_all<'a, I>(&self, elements: I) -> Result<(), RuleError>
    where
        I: IntoIterator<Item = Scalar<'a>>,
    {
        for (index, element) in elements.into_iter().enumerate() {
            if let Err(err) = self.inner.evaluate(element) {
                tracing::trace!(index, "sequence element failed");
                return Err(err);
            }
        }
        Ok(())
    }

    /// Evaluates a sequence [`Value`].
    ///
    /// Sequences of any element kind other than text or integer, and
    /// non-sequence values, are `UnsupportedType`.
    pub fn evaluate_value(&self, value: &Value<'_>, rule: &str) -> Result<(), RuleError> {
        match value {
            Value::TextSequence(items) => self.evaluate_all(items.iter().copied().map(Scalar::Text)),
            Value::IntegerSequence(items) => {
                self.evaluate_all(items.iter().copied().map(Scalar::Integer))
            }
            other => Err(StructuralError::unsupported(rule, other.kind_name()).into()),
        }
    }
}

/// Creates an EACH combinator.
pub fn each<E: Evaluate>(evaluator: E) -> Each<E> {
    Each::new(evaluator)
}

// ============================================================================
// TESTS
// ============================================================================
