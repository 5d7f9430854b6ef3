//! # Nebula Rulecheck Macros
//!
//! `#[derive(Record)]` for `nebula-rulecheck`.
//!
//! Use it through the re-export in `nebula_rulecheck`; the generated code
//! refers to that crate by absolute path.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

extern crate proc_macro;

use proc_macro::TokenStream;

mod record;
mod support;

/// Derive macro for the `Record` trait.
///
/// Generates `Record`, `Inspect` (as a composite value) and `Element` (as an
/// unsupported sequence element) for a struct with named fields.
///
/// # Field attributes
///
/// - `#[validate(rule = "...")]` - Rule string for the field (required
///   inside `#[validate]`)
/// - `#[validate(name = "...")]` - Name used in failures (default: the
///   field identifier)
///
/// Fields without `#[validate]` are listed as untagged and never inspected,
/// so their types need no trait implementations.
///
/// # Example
///
/// ```ignore
/// use nebula_rulecheck::Record;
///
/// #[derive(Record)]
/// struct App {
///     #[validate(rule = "len:5")]
///     version: String,
///     #[validate(rule = "in:200,404,500", name = "status")]
///     code: i32,
///     notes: Vec<u8>,
/// }
/// ```
#[proc_macro_derive(Record, attributes(validate))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    record::derive(input)
}
