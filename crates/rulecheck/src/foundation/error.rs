//! Error types for validation passes
//!
//! Two tiers live here:
//!
//! - [`Failure`] / [`Report`]: recoverable, per-field-per-rule outcomes that
//!   are collected in declaration order and returned once at the end.
//! - [`StructuralError`]: a broken rule string or a rule applied to a type it
//!   cannot handle. These abort the pass and are returned alone.
//!
//! [`Error`] is the single error type returned by a pass and is always one of
//! the two, never a mix.
//!
//! All string fields use `Cow<'static, str>` so that field names coming from
//! the derive macro (always `&'static str`) never allocate.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// FAILURE KIND
// ============================================================================

/// The kind of rule a field violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum FailureKind {
    /// `len:N` did not match the element count.
    LengthMismatch,
    /// `in:a,b,...` did not contain the value.
    OutOfSet,
    /// `min:N` or `max:N` was crossed.
    OutOfBounds,
    /// `regexp:...` did not match.
    PatternMismatch,
}

impl FailureKind {
    /// Stable error code for programmatic handling.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::LengthMismatch => "length_mismatch",
            Self::OutOfSet => "out_of_set",
            Self::OutOfBounds => "out_of_bounds",
            Self::PatternMismatch => "pattern_mismatch",
        }
    }

    /// Message used in rendered reports.
    ///
    /// These strings are compared verbatim by existing consumers; do not
    /// reword them.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::LengthMismatch => "len doesn't satisfy the rule",
            Self::OutOfSet => "value doesn't belong to the set",
            Self::OutOfBounds => "values is less or over the limit",
            Self::PatternMismatch => "value doesn't satisfy the regexp",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

// ============================================================================
// FAILURE
// ============================================================================

/// One violated rule on one field.
///
/// # Examples
///
/// ```rust
/// use nebula_rulecheck::{Failure, FailureKind};
///
/// let failure = Failure::new("id", FailureKind::LengthMismatch)
///     .with_param("expected", "36")
///     .with_param("actual", "1");
///
/// assert_eq!(failure.to_string(), "field: id, error: len doesn't satisfy the rule");
/// assert_eq!(failure.param("actual"), Some("1"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Failure {
    /// Name of the field that failed.
    pub field: Cow<'static, str>,

    /// Which rule kind was violated.
    pub kind: FailureKind,

    /// Diagnostic parameters, e.g. `[("rule", "len:36"), ("actual", "1")]`.
    ///
    /// Not part of the rendered text.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<(Cow<'static, str>, Cow<'static, str>)>,
}

impl Failure {
    /// Creates a failure for `field`.
    pub fn new(field: impl Into<Cow<'static, str>>, kind: FailureKind) -> Self {
        Self {
            field: field.into(),
            kind,
            params: Vec::new(),
        }
    }

    /// Adds a diagnostic parameter.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "field: {}, error: {}", self.field, self.kind.message())
    }
}

// ============================================================================
// REPORT
// ============================================================================

/// Ordered collection of [`Failure`]s from one validation pass.
///
/// Failures appear in field declaration order, then rule order within a
/// field. An empty report means the pass succeeded; use
/// [`into_result`](Report::into_result) to turn it into `Result`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Report {
    failures: Vec<Failure>,
}

impl Report {
    /// Creates an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self {
            failures: Vec::new(),
        }
    }

    /// Appends a failure.
    pub fn add(&mut self, failure: Failure) {
        self.failures.push(failure);
    }

    /// Returns the number of failures.
    #[must_use]
    pub fn len(&self) -> usize {
        self.failures.len()
    }

    /// Returns true if no failure was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    /// Returns all failures in order.
    #[must_use]
    pub fn failures(&self) -> &[Failure] {
        &self.failures
    }

    /// Iterates over the failures in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Failure> {
        self.failures.iter()
    }

    /// Returns `(field, kind)` pairs, handy for assertions.
    #[must_use]
    pub fn kinds(&self) -> Vec<(&str, FailureKind)> {
        self.failures
            .iter()
            .map(|f| (f.field.as_ref(), f.kind))
            .collect()
    }

    /// `Ok(ok_value)` when empty, otherwise `Err(self)`.
    #[must_use = "result must be used"]
    pub fn into_result<T>(self, ok_value: T) -> Result<T, Report> {
        if self.is_empty() {
            Ok(ok_value)
        } else {
            Err(self)
        }
    }

    /// Renders the report in the legacy text format.
    ///
    /// Every entry is `field: <name>, error: <message> `, trailing space
    /// included, concatenated in order.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        for failure in &self.failures {
            out.push_str(&format!("{failure} "));
        }
        out
    }

    /// Converts the report to a JSON array.
    pub fn to_json_value(&self) -> serde_json::Value {
        use serde_json::json;

        self.failures
            .iter()
            .map(|f| {
                let params: serde_json::Map<String, serde_json::Value> = f
                    .params
                    .iter()
                    .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.to_string())))
                    .collect();

                json!({
                    "field": f.field,
                    "code": f.kind.code(),
                    "message": f.kind.message(),
                    "params": params,
                })
            })
            .collect()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl std::error::Error for Report {}

impl FromIterator<Failure> for Report {
    fn from_iter<I: IntoIterator<Item = Failure>>(iter: I) -> Self {
        Self {
            failures: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Report {
    type Item = Failure;
    type IntoIter = std::vec::IntoIter<Failure>;

    fn into_iter(self) -> Self::IntoIter {
        self.failures.into_iter()
    }
}

impl<'a> IntoIterator for &'a Report {
    type Item = &'a Failure;
    type IntoIter = std::slice::Iter<'a, Failure>;

    fn into_iter(self) -> Self::IntoIter {
        self.failures.iter()
    }
}

// ============================================================================
// STRUCTURAL ERROR
// ============================================================================

/// A broken rule string, or a rule applied to a value kind it cannot check.
///
/// The display text is fixed per variant; the details are kept in the
/// fields and in `Debug` output.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum StructuralError {
    /// Malformed rule token, bad numeric literal or bad pattern.
    #[error("error during parsing input")]
    WrongValue {
        /// The offending token as written.
        rule: String,
        /// What was wrong with it.
        reason: Cow<'static, str>,
    },

    /// A rule applied to a value kind it does not support, or a
    /// non-composite top-level input.
    #[error("unsupported type for validation")]
    UnsupportedType {
        /// The rule that was being applied, if any.
        rule: Option<String>,
        /// What was found instead.
        found: Cow<'static, str>,
    },
}

impl StructuralError {
    /// Creates a `WrongValue` error.
    pub fn wrong_value(rule: impl Into<String>, reason: impl Into<Cow<'static, str>>) -> Self {
        Self::WrongValue {
            rule: rule.into(),
            reason: reason.into(),
        }
    }

    /// Creates an `UnsupportedType` error for a rule.
    pub fn unsupported(rule: impl Into<String>, found: impl Into<Cow<'static, str>>) -> Self {
        Self::UnsupportedType {
            rule: Some(rule.into()),
            found: found.into(),
        }
    }

    /// Creates an `UnsupportedType` error for a top-level input.
    pub fn unsupported_input(found: impl Into<Cow<'static, str>>) -> Self {
        Self::UnsupportedType {
            rule: None,
            found: found.into(),
        }
    }

    /// Returns true for `WrongValue`.
    #[must_use]
    pub fn is_wrong_value(&self) -> bool {
        matches!(self, Self::WrongValue { .. })
    }

    /// Returns true for `UnsupportedType`.
    #[must_use]
    pub fn is_unsupported_type(&self) -> bool {
        matches!(self, Self::UnsupportedType { .. })
    }
}

// ============================================================================
// PASS ERROR
// ============================================================================

/// Error returned by a validation pass.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The pass was aborted; no partial report exists.
    #[error(transparent)]
    Structural(#[from] StructuralError),

    /// Every rule was evaluated and at least one failed.
    #[error(transparent)]
    Invalid(#[from] Report),
}

impl Error {
    /// Returns the report for `Invalid`.
    #[must_use]
    pub fn report(&self) -> Option<&Report> {
        match self {
            Self::Invalid(report) => Some(report),
            Self::Structural(_) => None,
        }
    }

    /// Returns the structural error for `Structural`.
    #[must_use]
    pub fn structural(&self) -> Option<&StructuralError> {
        match self {
            Self::Structural(err) => Some(err),
            Self::Invalid(_) => None,
        }
    }

    /// Returns true if the pass was aborted.
    #[must_use]
    pub fn is_structural(&self) -> bool {
        matches!(self, Self::Structural(_))
    }
}

// ============================================================================
// RULE ERROR
// ============================================================================

/// Outcome of a single failed rule evaluation.
///
/// Evaluators return this so `?` can carry structural errors straight up
/// while violations are caught and aggregated by the walker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    /// The value broke the rule.
    Violation(FailureKind),
    /// The rule or the value kind is unusable.
    Structural(StructuralError),
}

impl From<StructuralError> for RuleError {
    fn from(err: StructuralError) -> Self {
        Self::Structural(err)
    }
}

impl From<FailureKind> for RuleError {
    fn from(kind: FailureKind) -> Self {
        Self::Violation(kind)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_display() {
        let failure = Failure::new("age", FailureKind::OutOfBounds);
        assert_eq!(
            failure.to_string(),
            "field: age, error: values is less or over the limit"
        );
    }

    #[test]
    fn test_failure_params() {
        let failure = Failure::new("id", FailureKind::LengthMismatch)
            .with_param("expected", "36")
            .with_param("actual", "1");

        assert_eq!(failure.param("expected"), Some("36"));
        assert_eq!(failure.param("actual"), Some("1"));
        assert_eq!(failure.param("missing"), None);
    }

    #[test]
    fn test_report_render_keeps_trailing_space() {
        let report: Report = [
            Failure::new("ID", FailureKind::LengthMismatch),
            Failure::new("Role", FailureKind::OutOfSet),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            report.render(),
            "field: ID, error: len doesn't satisfy the rule \
             field: Role, error: value doesn't belong to the set "
        );
        assert_eq!(report.to_string(), report.render());
    }

    #[test]
    fn test_empty_report() {
        let report = Report::new();
        assert!(report.is_empty());
        assert_eq!(report.render(), "");
        assert_eq!(report.into_result(7), Ok(7));
    }

    #[test]
    fn test_report_into_result_err() {
        let mut report = Report::new();
        report.add(Failure::new("x", FailureKind::PatternMismatch));
        let err = report.clone().into_result(()).unwrap_err();
        assert_eq!(err, report);
    }

    #[test]
    fn test_structural_display_is_stable() {
        let wrong = StructuralError::wrong_value("len:8a", "not an integer");
        let unsupported = StructuralError::unsupported("len:8", "integer");

        assert_eq!(wrong.to_string(), "error during parsing input");
        assert_eq!(unsupported.to_string(), "unsupported type for validation");
        assert!(wrong.is_wrong_value());
        assert!(unsupported.is_unsupported_type());
    }

    #[test]
    fn test_error_is_transparent() {
        let err = Error::from(StructuralError::unsupported_input("i32"));
        assert_eq!(err.to_string(), "unsupported type for validation");
        assert!(err.is_structural());
        assert!(err.report().is_none());

        let report: Report = std::iter::once(Failure::new("a", FailureKind::OutOfSet)).collect();
        let err = Error::from(report);
        assert_eq!(
            err.to_string(),
            "field: a, error: value doesn't belong to the set "
        );
        assert_eq!(err.report().map(Report::len), Some(1));
    }

    #[test]
    fn test_report_json() {
        let report: Report = std::iter::once(
            Failure::new("age", FailureKind::OutOfBounds).with_param("rule", "max:50"),
        )
        .collect();

        let json = report.to_json_value();
        assert_eq!(json[0]["field"], "age");
        assert_eq!(json[0]["code"], "out_of_bounds");
        assert_eq!(json[0]["params"]["rule"], "max:50");
    }

    #[test]
    fn test_failure_kind_codes() {
        assert_eq!(FailureKind::LengthMismatch.code(), "length_mismatch");
        assert_eq!(FailureKind::OutOfSet.code(), "out_of_set");
        assert_eq!(FailureKind::OutOfBounds.code(), "out_of_bounds");
        assert_eq!(FailureKind::PatternMismatch.code(), "pattern_mismatch");
    }
}
