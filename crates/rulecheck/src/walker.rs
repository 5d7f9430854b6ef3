//! Field walker
//!
//! [`Validator`] takes a record, walks its fields in order, parses each
//! tagged field's rule string and evaluates every token against the value.
//! Violations are collected into a [`Report`]; the first structural error
//! aborts the pass and is returned alone.

use crate::combinators::each;
use crate::config::ValidatorConfig;
use crate::foundation::{
    Error, Evaluate, Failure, FailureKind, Inspect, Report, RuleError, StructuralError, Value,
};
use crate::rules::{Rule, parse_rules_for};

/// Validates records against their field rules.
///
/// Holds only configuration; a validator can be shared freely and reused.
///
/// # Examples
///
/// ```rust
/// use nebula_rulecheck::{Field, Inspect, Record, Validator, ValidatorConfig, Value};
///
/// struct Tag<'a>(&'a str);
///
/// impl Inspect for Tag<'_> {
///     fn to_value(&self) -> Value<'_> {
///         Value::Composite(self)
///     }
/// }
///
/// impl Record for Tag<'_> {
///     fn fields(&self) -> Vec<Field<'_>> {
///         vec![Field::tagged("tag", "len:3|colour:red", &self.0)]
///     }
/// }
///
/// assert!(Validator::default().validate(&Tag("abc")).is_ok());
///
/// let strict = Validator::new(ValidatorConfig::strict());
/// let err = strict.validate(&Tag("abc")).unwrap_err();
/// assert!(err.is_structural());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Validator {
    config: ValidatorConfig,
}

impl Validator {
    /// Creates a validator with the given configuration.
    #[must_use]
    pub fn new(config: ValidatorConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validates every tagged field of a record.
    ///
    /// # Errors
    ///
    /// - [`Error::Structural`] when the input is not a record, a rule string
    ///   is malformed, or a rule meets a value kind it cannot check.
    /// - [`Error::Invalid`] with every `(field, rule)` violation otherwise.
    pub fn validate<T: Inspect + ?Sized>(&self, input: &T) -> Result<(), Error> {
        let record = match input.to_value() {
            Value::Composite(record) => record,
            other => {
                tracing::debug!(found = other.kind_name(), "input is not a record");
                return Err(StructuralError::unsupported_input(other.kind_name()).into());
            }
        };

        let fields = record.fields();
        tracing::debug!(fields = fields.len(), "validation pass started");

        let mut report = Report::new();
        for field in &fields {
            if !field.is_tagged() {
                tracing::trace!(field = field.name, "untagged field skipped");
                continue;
            }
            let (Some(rules), Some(value)) = (field.rules, &field.value) else {
                continue;
            };

            if let Err(err) = self.validate_field(field.name, value, rules, &mut report) {
                tracing::debug!(field = field.name, error = ?err, "validation pass aborted");
                return Err(err.into());
            }
        }

        tracing::debug!(failures = report.len(), "validation pass finished");
        report.into_result(()).map_err(Error::from)
    }

    /// Validates one field, appending violations to `report`.
    ///
    /// Nested records and absent values are skipped without parsing the rule
    /// string. A value of unsupported kind fails whatever its rules are. Each
    /// token's kind is checked against the value's kind (a sequence's element
    /// kind, even when empty) before its parameter is parsed.
    ///
    /// # Errors
    ///
    /// Returns the first structural error; `report` may already hold this
    /// field's earlier violations and should be discarded.
    pub fn validate_field(
        &self,
        name: &'static str,
        value: &Value<'_>,
        rules: &str,
        report: &mut Report,
    ) -> Result<(), StructuralError> {
        let target = match value {
            Value::Unsupported(found) => return Err(StructuralError::unsupported(rules, *found)),
            _ => value.element_kind(),
        };
        let Some(target) = target else {
            tracing::trace!(field = name, kind = value.kind_name(), "field skipped");
            return Ok(());
        };

        for rule in parse_rules_for(rules, &self.config, target)? {
            tracing::trace!(field = name, %rule, "evaluating rule");
            match apply(&rule, value) {
                Ok(()) => {}
                Err(RuleError::Violation(kind)) => report.add(describe(name, kind, &rule, value)),
                Err(RuleError::Structural(err)) => return Err(err),
            }
        }

        Ok(())
    }

    /// Checks a single value against a rule string.
    ///
    /// Returns the violated kinds in rule order; empty means the value
    /// passes.
    ///
    /// # Errors
    ///
    /// Structural errors, as for [`validate`](Self::validate).
    ///
    /// ```rust
    /// use nebula_rulecheck::{FailureKind, Inspect, Validator};
    ///
    /// let validator = Validator::default();
    /// let kinds = validator.verify_value(&51i32.to_value(), "min:18|max:50").unwrap();
    /// assert_eq!(kinds, [FailureKind::OutOfBounds]);
    /// ```
    pub fn verify_value(
        &self,
        value: &Value<'_>,
        rules: &str,
    ) -> Result<Vec<FailureKind>, StructuralError> {
        let mut report = Report::new();
        self.validate_field("value", value, rules, &mut report)?;
        Ok(report.iter().map(|failure| failure.kind).collect())
    }
}

/// Validates a record with the default configuration.
///
/// # Errors
///
/// See [`Validator::validate`].
pub fn validate<T: Inspect + ?Sized>(input: &T) -> Result<(), Error> {
    Validator::default().validate(input)
}

fn apply(rule: &Rule, value: &Value<'_>) -> Result<(), RuleError> {
    let Some(kind) = value.element_kind() else {
        return Ok(());
    };
    if !rule.supports(kind) {
        return Err(StructuralError::unsupported(rule.to_string(), kind.name()).into());
    }

    match value.as_scalar() {
        Some(scalar) => rule.evaluate(scalar),
        None => each(rule).evaluate_value(value, &rule.to_string()),
    }
}

fn describe(name: &'static str, kind: FailureKind, rule: &Rule, value: &Value<'_>) -> Failure {
    let failure = Failure::new(name, kind).with_param("rule", rule.to_string());

    match (rule, value) {
        (Rule::Length(len), Value::Text(text)) => failure
            .with_param("expected", len.length.to_string())
            .with_param("actual", len.mode.measure(text).to_string()),
        (Rule::Bound(bound), Value::Integer(n)) => failure
            .with_param("expected", bound.to_string())
            .with_param("actual", n.to_string()),
        (_, Value::Integer(n)) => failure.with_param("actual", n.to_string()),
        _ => failure,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LengthMode, UnknownRules};
    use crate::record::{Field, Record};

    #[allow(dead_code)]
    struct Sample {
        id: String,
        age: i32,
        tags: Vec<String>,
        score: f64,
        parent: Option<Box<Sample>>,
    }

    impl Sample {
        fn new() -> Self {
            Self {
                id: "abc".into(),
                age: 30,
                tags: vec!["ab".into(), "cd".into()],
                score: 1.0,
                parent: None,
            }
        }
    }

    impl Inspect for Sample {
        fn to_value(&self) -> Value<'_> {
            Value::Composite(self)
        }
    }

    impl Record for Sample {
        fn fields(&self) -> Vec<Field<'_>> {
            vec![
                Field::tagged("id", "len:3", &self.id),
                Field::tagged("age", "min:18|max:50", &self.age),
                Field::tagged("tags", "len:2", &self.tags),
                Field::untagged("score"),
                Field::tagged("parent", "len:999", &self.parent),
            ]
        }
    }

    #[test]
    fn test_valid_record() {
        assert_eq!(validate(&Sample::new()), Ok(()));
    }

    #[test]
    fn test_failures_in_declaration_order() {
        let mut sample = Sample::new();
        sample.id = "a".into();
        sample.age = 70;

        let err = validate(&sample).unwrap_err();
        let report = err.report().unwrap();
        assert_eq!(
            report.kinds(),
            [
                ("id", FailureKind::LengthMismatch),
                ("age", FailureKind::OutOfBounds),
            ]
        );
        assert_eq!(report.failures()[0].param("actual"), Some("1"));
        assert_eq!(report.failures()[1].param("rule"), Some("max:50"));
    }

    #[test]
    fn test_nested_record_is_skipped() {
        let mut sample = Sample::new();
        let mut parent = Sample::new();
        parent.id = "way too long".into();
        sample.parent = Some(Box::new(parent));
        assert!(validate(&sample).is_ok());
    }

    #[test]
    fn test_non_record_input() {
        let err = validate(&5i32).unwrap_err();
        assert!(err.structural().unwrap().is_unsupported_type());
        assert!(validate("text").unwrap_err().is_structural());
    }

    #[test]
    fn test_field_collects_every_violation() {
        let mut report = Report::new();
        Validator::default()
            .validate_field("x", &Value::Integer(5), "min:10|max:1|in:7", &mut report)
            .unwrap();
        assert_eq!(
            report.kinds(),
            [
                ("x", FailureKind::OutOfBounds),
                ("x", FailureKind::OutOfBounds),
                ("x", FailureKind::OutOfSet),
            ]
        );
    }

    #[test]
    fn test_unsupported_value_with_rule() {
        let err = Validator::default()
            .verify_value(&true.to_value(), "in:true")
            .unwrap_err();
        assert!(err.is_unsupported_type());
    }

    #[test]
    fn test_unsupported_value_fails_before_parsing() {
        let validator = Validator::default();
        for rules in ["unknown:1", "max:1,2", "len:8"] {
            let err = validator.verify_value(&1.5f64.to_value(), rules).unwrap_err();
            assert!(err.is_unsupported_type(), "{rules}");
        }
    }

    #[test]
    fn test_length_counts_bytes_by_default() {
        let kinds = Validator::default()
            .verify_value(&"h\u{e9}llo".to_value(), "len:5")
            .unwrap();
        assert_eq!(kinds, [FailureKind::LengthMismatch]);
        assert!(validate_len("h\u{e9}llo", "len:6", Validator::default()).is_empty());
    }

    fn validate_len(text: &str, rules: &str, validator: Validator) -> Vec<FailureKind> {
        validator.verify_value(&text.to_value(), rules).unwrap()
    }

    #[test]
    fn test_empty_sequence_kind_mismatch_is_structural() {
        let validator = Validator::default();
        let empty_i64 = Vec::<i64>::new();
        let empty_string = Vec::<String>::new();
        let empty_i32 = Vec::<i32>::new();
        let cases: [(Value<'_>, &str); 3] = [
            (empty_i64.to_value(), "len:3"),
            (empty_string.to_value(), "min:1"),
            (empty_i32.to_value(), r"regexp:\d+"),
        ];
        for (value, rules) in &cases {
            let err = validator.verify_value(value, rules).unwrap_err();
            assert!(err.is_unsupported_type(), "{rules}");
        }

        let err = validator.verify_value(&vec![1i64].to_value(), "len:3").unwrap_err();
        assert_eq!(err, StructuralError::unsupported("len:3", "integer"));
    }

    #[test]
    fn test_kind_mismatch_wins_over_bad_parameter() {
        let err = Validator::default()
            .verify_value(&"abc".to_value(), "min:abc")
            .unwrap_err();
        assert!(err.is_unsupported_type());
    }

    #[test]
    fn test_untagged_fields_are_skipped() {
        struct Bare;

        impl Inspect for Bare {
            fn to_value(&self) -> Value<'_> {
                Value::Composite(self)
            }
        }

        impl Record for Bare {
            fn fields(&self) -> Vec<Field<'_>> {
                vec![Field::untagged("a"), Field::untagged("b")]
            }
        }

        assert!(!Field::untagged("a").is_tagged());
        assert_eq!(validate(&Bare), Ok(()));
    }

    #[test]
    fn test_config_is_honoured() {
        let config = ValidatorConfig::default()
            .with_length_mode(LengthMode::Chars)
            .with_unknown_rules(UnknownRules::Reject);
        let validator = Validator::new(config);

        assert!(validate_len("\u{e9}", "len:1", validator).is_empty());
        assert!(validator.verify_value(&"x".to_value(), "size:1").is_err());
    }
}
