//! Core validation types and traits
//!
//! This module contains the fundamental building blocks of the engine:
//!
//! - **Values**: [`Value`], [`Scalar`], [`Inspect`], [`Element`]
//! - **Traits**: [`Evaluate`]
//! - **Errors**: [`Failure`], [`Report`], [`StructuralError`], [`Error`]
//!
//! # Architecture
//!
//! Field values are converted to a closed set of shapes ([`Value`]) by the
//! [`Inspect`] trait. Rule evaluators only ever see a [`Scalar`]; sequences
//! are handled by lifting an evaluator with
//! [`Each`](crate::combinators::Each).
//!
//! Evaluators return [`RuleError`], which separates recoverable violations
//! from structural errors so the walker can aggregate the former and abort on
//! the latter.

pub mod error;
pub mod traits;
pub mod value;

pub use error::{Error, Failure, FailureKind, Report, RuleError, StructuralError};
pub use traits::Evaluate;
pub use value::{Element, ElementKind, Inspect, Scalar, Value};

/// A validation result using the pass-level [`Error`].
pub type ValidationResult<T> = Result<T, Error>;
