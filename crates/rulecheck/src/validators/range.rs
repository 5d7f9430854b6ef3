//! Numeric bound evaluators (`min:N`, `max:N`)

use std::fmt;

use crate::foundation::{Evaluate, FailureKind, RuleError, Scalar, StructuralError};

/// Which side of the range a [`Bound`] guards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// `min:`, value must be at least the limit.
    Lower,
    /// `max:`, value must be at most the limit.
    Upper,
}

impl Direction {
    /// Rule prefix for this direction.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Lower => "min",
            Self::Upper => "max",
        }
    }
}

/// Validates that an integer is on the inclusive side of a limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bound {
    /// Lower or upper.
    pub direction: Direction,
    /// Inclusive limit.
    pub limit: i64,
}

impl Bound {
    /// Creates a bound evaluator.
    #[must_use]
    pub fn new(direction: Direction, limit: i64) -> Self {
        Self { direction, limit }
    }

    fn holds(&self, value: i64) -> bool {
        match self.direction {
            Direction::Lower => value >= self.limit,
            Direction::Upper => value <= self.limit,
        }
    }
}

impl Evaluate for Bound {
    fn evaluate(&self, scalar: Scalar<'_>) -> Result<(), RuleError> {
        match scalar {
            Scalar::Integer(n) if self.holds(n) => Ok(()),
            Scalar::Integer(_) => Err(FailureKind::OutOfBounds.into()),
            other => Err(StructuralError::unsupported(self.to_string(), other.kind_name()).into()),
        }
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.direction.prefix(), self.limit)
    }
}

/// Creates a lower bound (`min:`) evaluator.
#[must_use]
pub fn min(limit: i64) -> Bound {
    Bound::new(Direction::Lower, limit)
}

/// Creates an upper bound (`max:`) evaluator.
#[must_use]
pub fn max(limit: i64) -> Bound {
    Bound::new(Direction::Upper, limit)
}
