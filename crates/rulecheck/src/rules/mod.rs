//! Rule tokens
//!
//! A rule string such as `min:18|max:50` is parsed into an ordered list of
//! [`Rule`]s by [`parse_rules`]. Each variant wraps the evaluator that
//! checks it, so a parsed rule can be applied directly.

mod parser;

use std::fmt;

pub use parser::{parse_int_literal, parse_rules, parse_rules_for};

use crate::foundation::{ElementKind, Evaluate, RuleError, Scalar};
pub use crate::validators::Direction;
use crate::validators::{Bound, ExactLength, MatchesPattern, OneOf};

/// Token separator.
pub const SEPARATOR: char = '|';

/// Separator between a token's kind and its parameter.
pub const KIND_DELIMITER: char = ':';

/// Separator between `in:` alternatives.
pub const ALTERNATIVE_DELIMITER: char = ',';

/// Kind of a rule token, known from its prefix alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    /// `len`
    Length,
    /// `in`
    Membership,
    /// `min` and `max`
    Bound,
    /// `regexp`
    Pattern,
}

impl RuleKind {
    /// Looks up a kind prefix. `None` for unknown prefixes.
    #[must_use]
    pub fn from_prefix(prefix: &str) -> Option<Self> {
        match prefix {
            "len" => Some(Self::Length),
            "in" => Some(Self::Membership),
            "min" | "max" => Some(Self::Bound),
            "regexp" => Some(Self::Pattern),
            _ => None,
        }
    }

    /// Whether rules of this kind can check values of `kind`.
    ///
    /// ```rust
    /// use nebula_rulecheck::ElementKind;
    /// use nebula_rulecheck::rules::RuleKind;
    ///
    /// assert!(RuleKind::Membership.supports(ElementKind::Integer));
    /// assert!(!RuleKind::Length.supports(ElementKind::Integer));
    /// ```
    #[must_use]
    pub const fn supports(self, kind: ElementKind) -> bool {
        matches!(
            (self, kind),
            (Self::Length | Self::Pattern, ElementKind::Text)
                | (Self::Bound, ElementKind::Integer)
                | (Self::Membership, ElementKind::Text | ElementKind::Integer)
        )
    }
}

/// One parsed rule token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// `len:N`
    Length(ExactLength),
    /// `in:a,b,...`
    Membership(OneOf),
    /// `min:N` / `max:N`
    Bound(Bound),
    /// `regexp:...`
    Pattern(MatchesPattern),
}

impl Rule {
    /// Kind prefix as written in rule strings.
    #[must_use]
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Length(_) => "len",
            Self::Membership(_) => "in",
            Self::Bound(bound) => bound.direction.prefix(),
            Self::Pattern(_) => "regexp",
        }
    }

    /// Kind of this rule.
    #[must_use]
    pub fn kind(&self) -> RuleKind {
        match self {
            Self::Length(_) => RuleKind::Length,
            Self::Membership(_) => RuleKind::Membership,
            Self::Bound(_) => RuleKind::Bound,
            Self::Pattern(_) => RuleKind::Pattern,
        }
    }

    /// Whether this rule can check values of `kind`.
    #[must_use]
    pub fn supports(&self, kind: ElementKind) -> bool {
        self.kind().supports(kind)
    }
}

impl Evaluate for Rule {
    fn evaluate(&self, scalar: Scalar<'_>) -> Result<(), RuleError> {
        match self {
            Self::Length(v) => v.evaluate(scalar),
            Self::Membership(v) => v.evaluate(scalar),
            Self::Bound(v) => v.evaluate(scalar),
            Self::Pattern(v) => v.evaluate(scalar),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Length(v) => fmt::Display::fmt(v, f),
            Self::Membership(v) => fmt::Display::fmt(v, f),
            Self::Bound(v) => fmt::Display::fmt(v, f),
            Self::Pattern(v) => fmt::Display::fmt(v, f),
        }
    }
}
