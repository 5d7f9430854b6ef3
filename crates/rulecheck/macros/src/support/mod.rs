//! Internal support utilities for the derive.
//!
//! Attribute parsing, diagnostics and struct-shape checks.

pub mod attrs;
pub mod diag;
pub mod utils;
