//! Built-in rule evaluators
//!
//! One evaluator per rule kind. Each works on a single [`Scalar`]; lift
//! them over sequences with [`Each`](crate::combinators::Each).
//!
//! | Rule        | Evaluator          | Text | Integer |
//! |-------------|--------------------|------|---------|
//! | `len:N`     | [`ExactLength`]    | yes  | no      |
//! | `in:a,b`    | [`OneOf`]          | yes  | yes     |
//! | `min:N`     | [`Bound`]          | no   | yes     |
//! | `max:N`     | [`Bound`]          | no   | yes     |
//! | `regexp:re` | [`MatchesPattern`] | yes  | no      |
//!
//! [`Scalar`]: crate::foundation::Scalar

pub mod length;
pub mod membership;
pub mod pattern;
pub mod range;

pub use length::{ExactLength, exact_length};
pub use membership::{OneOf, one_of};
pub use pattern::{MatchesPattern, matches_pattern};
pub use range::{Bound, Direction, max, min};
