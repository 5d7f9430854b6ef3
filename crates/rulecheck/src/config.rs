//! Validator configuration
//!
//! Everything here is plain data with serde derives so hosts can keep it in
//! their own config files.
//!
//! ```rust
//! use nebula_rulecheck::{LengthMode, UnknownRules, ValidatorConfig};
//!
//! let config = ValidatorConfig::strict().with_length_mode(LengthMode::Bytes);
//! assert_eq!(config.unknown_rules, UnknownRules::Reject);
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// UNKNOWN RULES
// ============================================================================

/// What the parser does with a token whose kind prefix it does not know.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownRules {
    /// Skip the token as if it were not there.
    #[default]
    Ignore,
    /// Abort with `WrongValue`.
    Reject,
}

// ============================================================================
// LENGTH MODE
// ============================================================================

/// How to count text length for `len:` rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthMode {
    /// Count UTF-8 bytes.
    Bytes,
    /// Count Unicode scalar values.
    #[default]
    Chars,
}

impl LengthMode {
    /// Measures the length of a string according to this mode.
    #[inline]
    pub fn measure(self, input: &str) -> usize {
        match self {
            LengthMode::Bytes => input.len(),
            LengthMode::Chars => input.chars().count(),
        }
    }
}

// ============================================================================
// CONFIG
// ============================================================================

/// Settings for a [`Validator`](crate::Validator).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Handling of unknown rule prefixes.
    pub unknown_rules: UnknownRules,
    /// Unit used by `len:` rules. Bytes unless set.
    pub length_mode: LengthMode,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            unknown_rules: UnknownRules::Ignore,
            length_mode: LengthMode::Bytes,
        }
    }
}

impl ValidatorConfig {
    /// Lenient defaults: unknown rules are ignored, length counts bytes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejects unknown rule prefixes.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            unknown_rules: UnknownRules::Reject,
            ..Self::default()
        }
    }

    /// Sets the unknown rule policy.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_unknown_rules(mut self, unknown_rules: UnknownRules) -> Self {
        self.unknown_rules = unknown_rules;
        self
    }

    /// Sets the length unit.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_length_mode(mut self, length_mode: LengthMode) -> Self {
        self.length_mode = length_mode;
        self
    }
}
