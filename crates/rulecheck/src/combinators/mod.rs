//! Combinators over the built-in evaluators

pub mod each;

pub use each::{Each, each};
