//! Rule string parser

use crate::config::{UnknownRules, ValidatorConfig};
use crate::foundation::{ElementKind, StructuralError};
use crate::validators::{Bound, Direction, ExactLength, MatchesPattern, OneOf};

use super::{ALTERNATIVE_DELIMITER, KIND_DELIMITER, Rule, RuleKind, SEPARATOR};

/// Parses a whole rule string into tokens, in order.
///
/// Every token is parsed before the caller evaluates any of them, so a
/// malformed token anywhere in the string fails the field even if earlier
/// tokens would have been violated.
///
/// # Errors
///
/// `WrongValue` when a known kind has a malformed parameter, or, with
/// [`UnknownRules::Reject`], when a token has an unknown kind or no `:`.
///
/// # Examples
///
/// ```rust
/// use nebula_rulecheck::ValidatorConfig;
/// use nebula_rulecheck::rules::parse_rules;
///
/// let rules = parse_rules("min:18|max:50|note:ignored", &ValidatorConfig::default()).unwrap();
/// let text: Vec<String> = rules.iter().map(ToString::to_string).collect();
/// assert_eq!(text, ["min:18", "max:50"]);
/// ```
pub fn parse_rules(rule: &str, config: &ValidatorConfig) -> Result<Vec<Rule>, StructuralError> {
    parse(rule, config, None)
}

/// Parses a rule string for values of a known kind.
///
/// Like [`parse_rules`], but each known token is first checked against
/// `target`; a token that cannot apply to it is `UnsupportedType` before its
/// parameter is read. Tokens are still handled left to right, so an earlier
/// malformed parameter wins over a later kind mismatch.
///
/// # Errors
///
/// `UnsupportedType` for a rule kind that does not apply to `target`,
/// otherwise as for [`parse_rules`].
///
/// ```rust
/// use nebula_rulecheck::{ElementKind, ValidatorConfig};
/// use nebula_rulecheck::rules::parse_rules_for;
///
/// let err = parse_rules_for("min:abc", &ValidatorConfig::default(), ElementKind::Text).unwrap_err();
/// assert!(err.is_unsupported_type());
/// ```
pub fn parse_rules_for(
    rule: &str,
    config: &ValidatorConfig,
    target: ElementKind,
) -> Result<Vec<Rule>, StructuralError> {
    parse(rule, config, Some(target))
}

fn parse(
    rule: &str,
    config: &ValidatorConfig,
    target: Option<ElementKind>,
) -> Result<Vec<Rule>, StructuralError> {
    let mut rules = Vec::new();

    for token in rule.split(SEPARATOR) {
        let Some((prefix, param)) = token.split_once(KIND_DELIMITER) else {
            unknown(token, config, "token has no kind prefix")?;
            continue;
        };

        let Some(kind) = RuleKind::from_prefix(prefix) else {
            unknown(token, config, "unknown rule kind")?;
            continue;
        };

        if let Some(target) = target.filter(|target| !kind.supports(*target)) {
            return Err(StructuralError::unsupported(token, target.name()));
        }

        let parsed = match (kind, prefix) {
            (RuleKind::Length, _) => Rule::Length(parse_length(token, param, config)?),
            (RuleKind::Membership, _) => {
                Rule::Membership(OneOf::new(param.split(ALTERNATIVE_DELIMITER)))
            }
            (RuleKind::Bound, "min") => Rule::Bound(parse_bound(token, Direction::Lower, param)?),
            (RuleKind::Bound, _) => Rule::Bound(parse_bound(token, Direction::Upper, param)?),
            (RuleKind::Pattern, _) => Rule::Pattern(MatchesPattern::new(param)?),
        };
        rules.push(parsed);
    }

    Ok(rules)
}

fn unknown(
    token: &str,
    config: &ValidatorConfig,
    reason: &'static str,
) -> Result<(), StructuralError> {
    match config.unknown_rules {
        UnknownRules::Ignore => {
            tracing::debug!(token, reason, "skipping rule token");
            Ok(())
        }
        UnknownRules::Reject => Err(StructuralError::wrong_value(token, reason)),
    }
}

fn parse_length(
    token: &str,
    param: &str,
    config: &ValidatorConfig,
) -> Result<ExactLength, StructuralError> {
    let length = param
        .parse::<usize>()
        .map_err(|_| StructuralError::wrong_value(token, "length is not a non-negative integer"))?;

    Ok(ExactLength {
        length,
        mode: config.length_mode,
    })
}

fn parse_bound(token: &str, direction: Direction, param: &str) -> Result<Bound, StructuralError> {
    let limit = parse_int_literal(param)
        .ok_or_else(|| StructuralError::wrong_value(token, "limit is not a 64-bit integer"))?;

    Ok(Bound::new(direction, limit))
}

/// Parses a signed 64-bit integer literal.
///
/// Accepts an optional sign, then either a `0x`, `0o` or `0b` prefix, a
/// leading `0` (octal), or plain decimal digits. Single `_` separators are
/// allowed between digits and after a prefix.
///
/// ```rust
/// use nebula_rulecheck::rules::parse_int_literal;
///
/// assert_eq!(parse_int_literal("-0x1F"), Some(-31));
/// assert_eq!(parse_int_literal("1_000"), Some(1000));
/// assert_eq!(parse_int_literal("017"), Some(15));
/// assert_eq!(parse_int_literal("8a"), None);
/// ```
#[must_use]
pub fn parse_int_literal(literal: &str) -> Option<i64> {
    let (negative, unsigned) = match literal.as_bytes().first()? {
        b'-' => (true, &literal[1..]),
        b'+' => (false, &literal[1..]),
        _ => (false, literal),
    };

    let (radix, digits, prefixed) = split_radix(unsigned);

    if !underscores_ok(digits, prefixed) {
        return None;
    }

    let digits: String = digits.chars().filter(|c| *c != '_').collect();
    if digits.is_empty() || digits.starts_with(['+', '-']) {
        return None;
    }

    let magnitude = i128::from_str_radix(&digits, radix).ok()?;
    let value = if negative { -magnitude } else { magnitude };
    i64::try_from(value).ok()
}

fn split_radix(unsigned: &str) -> (u32, &str, bool) {
    let Some(rest) = unsigned.strip_prefix('0').filter(|rest| !rest.is_empty()) else {
        return (10, unsigned, false);
    };

    match rest.as_bytes()[0] {
        b'x' | b'X' => (16, &rest[1..], true),
        b'o' | b'O' => (8, &rest[1..], true),
        b'b' | b'B' => (2, &rest[1..], true),
        _ => (8, rest, true),
    }
}

/// `_` may only separate digits, or follow a base prefix.
fn underscores_ok(digits: &str, prefixed: bool) -> bool {
    if digits.ends_with('_') || digits.contains("__") {
        return false;
    }
    prefixed || !digits.starts_with('_')
}
