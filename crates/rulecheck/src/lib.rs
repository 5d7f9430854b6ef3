//! # nebula-rulecheck
//!
//! Declarative record validation driven by per-field rule strings.
//!
//! ## Quick Start
//!
//! ```rust
//! use nebula_rulecheck::prelude::*;
//!
//! #[derive(Record)]
//! struct User {
//!     #[validate(rule = "len:36")]
//!     id: String,
//!     #[validate(rule = "min:18|max:50")]
//!     age: i32,
//!     #[validate(rule = "in:admin,stuff")]
//!     role: String,
//!     nickname: String,
//! }
//!
//! let user = User {
//!     id: "1".into(),
//!     age: 51,
//!     role: "admin".into(),
//!     nickname: String::new(),
//! };
//!
//! let err = user.validate().unwrap_err();
//! assert_eq!(
//!     err.report().unwrap().kinds(),
//!     [("id", FailureKind::LengthMismatch), ("age", FailureKind::OutOfBounds)],
//! );
//! ```
//!
//! ## Rule Grammar
//!
//! ```text
//! rule  := token ('|' token)*
//! token := 'len:' <int> | 'in:' <lit> (',' <lit>)* | 'min:' <int> | 'max:' <int>
//!        | 'regexp:' <pattern>
//! ```
//!
//! ## Errors
//!
//! A pass returns `Ok(())`, a single [`StructuralError`] (malformed rule,
//! unsupported value kind, non-record input), or a [`Report`] listing every
//! violated `(field, rule)` pair. Never a mix of the last two.
//!
//! ## Logging
//!
//! Pass boundaries and aborts are emitted as `tracing` events at `debug`,
//! individual rule evaluations at `trace`. No subscriber is installed.

#![forbid(unsafe_code)]

extern crate self as nebula_rulecheck;

pub mod combinators;
pub mod config;
pub mod foundation;
pub mod prelude;
pub mod record;
pub mod rules;
pub mod validators;
pub mod walker;

pub use config::{LengthMode, UnknownRules, ValidatorConfig};
pub use foundation::{
    Element, ElementKind, Error, Evaluate, Failure, FailureKind, Inspect, Report, RuleError,
    Scalar, StructuralError, ValidationResult, Value,
};
pub use record::{Field, Record};
pub use rules::{Rule, parse_rules};
pub use walker::{Validator, validate};

#[cfg(feature = "derive")]
pub use nebula_rulecheck_macros::Record;
