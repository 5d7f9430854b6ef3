//! Compile-time tests for `#[derive(Record)]`.
//!
//! These use trybuild to check that the derive expands to code that
//! compiles against the public API.

#[test]
fn test_record_derive() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/record_pass.rs");
}

#[test]
fn test_record_derive_generics() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/record_generics_pass.rs");
}
