//! Record contract
//!
//! A record lists its fields, in declaration order, each with an optional
//! rule string. `#[derive(Record)]` writes the implementation; it can also
//! be written by hand:
//!
//! ```rust
//! use nebula_rulecheck::{Field, Inspect, Record, Value};
//!
//! struct Login {
//!     user: String,
//!     attempts: u8,
//!     note: String,
//! }
//!
//! impl Inspect for Login {
//!     fn to_value(&self) -> Value<'_> {
//!         Value::Composite(self)
//!     }
//! }
//!
//! impl Record for Login {
//!     fn fields(&self) -> Vec<Field<'_>> {
//!         vec![
//!             Field::tagged("user", "len:5", &self.user),
//!             Field::tagged("attempts", "max:3", &self.attempts),
//!             Field::untagged("note"),
//!         ]
//!     }
//! }
//!
//! let login = Login { user: "alice".into(), attempts: 4, note: String::new() };
//! let report = login.validate().unwrap_err();
//! assert_eq!(
//!     report.to_string(),
//!     "field: attempts, error: values is less or over the limit ",
//! );
//! ```

use crate::foundation::{Error, Inspect, Value};
use crate::walker::Validator;

/// A struct-shaped value whose fields can be validated.
pub trait Record: Inspect {
    /// Field descriptors in declaration order.
    fn fields(&self) -> Vec<Field<'_>>;

    /// Validates with the default [`Validator`].
    ///
    /// # Errors
    ///
    /// See [`Validator::validate`].
    fn validate(&self) -> Result<(), Error> {
        Validator::default().validate(self)
    }
}

/// One field of a [`Record`].
#[derive(Debug, Clone)]
pub struct Field<'a> {
    /// Name used in failures.
    pub name: &'static str,
    /// Rule string, if the field is tagged.
    pub rules: Option<&'static str>,
    /// Current value. `None` for untagged fields.
    pub value: Option<Value<'a>>,
}

impl<'a> Field<'a> {
    /// A field with a rule string.
    pub fn tagged<T: Inspect + ?Sized>(
        name: &'static str,
        rules: &'static str,
        value: &'a T,
    ) -> Self {
        Self {
            name,
            rules: Some(rules),
            value: Some(value.to_value()),
        }
    }

    /// A field without rules. It is never inspected.
    #[must_use]
    pub fn untagged(name: &'static str) -> Self {
        Self {
            name,
            rules: None,
            value: None,
        }
    }

    /// Returns true if the field carries a rule string.
    #[must_use]
    pub fn is_tagged(&self) -> bool {
        self.rules.is_some()
    }
}
