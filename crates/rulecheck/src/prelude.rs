//! Prelude module for convenient imports.
//!
//! ```rust
//! use nebula_rulecheck::prelude::*;
//!
//! let kinds = Validator::default()
//!     .verify_value(&"admin".to_value(), "in:admin,stuff|len:5")
//!     .unwrap();
//! assert!(kinds.is_empty());
//! ```

// ============================================================================
// FOUNDATION
// ============================================================================

pub use crate::foundation::{
    Element, ElementKind, Error, Evaluate, Failure, FailureKind, Inspect, Report, RuleError,
    Scalar, StructuralError, ValidationResult, Value,
};

// ============================================================================
// RECORDS & WALKER
// ============================================================================

pub use crate::config::{LengthMode, UnknownRules, ValidatorConfig};
pub use crate::record::{Field, Record};
pub use crate::rules::{Direction, Rule, parse_rules};
pub use crate::walker::{Validator, validate};

#[cfg(feature = "derive")]
pub use nebula_rulecheck_macros::Record;

// ============================================================================
// VALIDATORS & COMBINATORS
// ============================================================================

pub use crate::combinators::{Each, each};
pub use crate::validators::{
    Bound, ExactLength, MatchesPattern, OneOf, exact_length, matches_pattern, max, min, one_of,
};
