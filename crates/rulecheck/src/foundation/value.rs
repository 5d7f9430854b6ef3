//! Field value model
//!
//! Every value the walker looks at is first turned into a [`Value`], a closed
//! set of shapes the rule evaluators understand. The conversion goes through
//! the [`Inspect`] trait, which is implemented here for the standard text,
//! integer, sequence and pointer-like types, and by `#[derive(Record)]` for
//! records.
//!
//! Nothing is inspected at runtime by type id: which shape a Rust type maps to
//! is fixed by its `Inspect` impl.

use std::borrow::Cow;
use std::collections::VecDeque;
use std::rc::Rc;
use std::sync::Arc;

use crate::record::Record;

// ============================================================================
// VALUE
// ============================================================================

/// The shape of a field value as seen by the rule evaluators.
#[derive(Clone)]
pub enum Value<'a> {
    /// A text scalar.
    Text(&'a str),
    /// An integer scalar, widened to `i64`.
    Integer(i64),
    /// A homogeneous sequence of text.
    TextSequence(Vec<&'a str>),
    /// A homogeneous sequence of integers.
    IntegerSequence(Vec<i64>),
    /// A nested record. Never validated recursively.
    Composite(&'a dyn Record),
    /// An empty optional.
    Absent,
    /// Anything else; the payload names the type for diagnostics.
    Unsupported(&'static str),
}

impl Value<'_> {
    /// Short human name of the shape, used in error details.
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Integer(_) => "integer",
            Self::TextSequence(_) => "text sequence",
            Self::IntegerSequence(_) => "integer sequence",
            Self::Composite(_) => "record",
            Self::Absent => "absent",
            Self::Unsupported(name) => *name,
        }
    }

    /// Returns the scalar view for `Text` and `Integer`.
    #[must_use]
    pub fn as_scalar(&self) -> Option<Scalar<'_>> {
        match self {
            Self::Text(s) => Some(Scalar::Text(s)),
            Self::Integer(n) => Some(Scalar::Integer(*n)),
            _ => None,
        }
    }

    /// Kind a rule is checked against: the scalar's own kind, or the element
    /// kind of a sequence. `None` for records and absent values.
    #[must_use]
    pub fn element_kind(&self) -> Option<ElementKind> {
        match self {
            Self::Text(_) | Self::TextSequence(_) => Some(ElementKind::Text),
            Self::Integer(_) | Self::IntegerSequence(_) => Some(ElementKind::Integer),
            Self::Unsupported(name) => Some(ElementKind::Unsupported(*name)),
            Self::Composite(_) | Self::Absent => None,
        }
    }
}

impl std::fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(s) => f.debug_tuple("Text").field(s).finish(),
            Self::Integer(n) => f.debug_tuple("Integer").field(n).finish(),
            Self::TextSequence(v) => f.debug_tuple("TextSequence").field(v).finish(),
            Self::IntegerSequence(v) => f.debug_tuple("IntegerSequence").field(v).finish(),
            Self::Composite(_) => f.write_str("Composite(..)"),
            Self::Absent => f.write_str("Absent"),
            Self::Unsupported(name) => f.debug_tuple("Unsupported").field(name).finish(),
        }
    }
}

// ============================================================================
// SCALAR
// ============================================================================

/// A single value handed to a scalar evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scalar<'a> {
    /// Text.
    Text(&'a str),
    /// Integer.
    Integer(i64),
}

impl Scalar<'_> {
    /// Short human name of the scalar kind.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Integer(_) => "integer",
        }
    }
}

// ============================================================================
// INSPECT
// ============================================================================

/// Types that can present themselves to the walker.
///
/// # Examples
///
/// ```rust
/// use nebula_rulecheck::{Inspect, Value};
///
/// assert!(matches!("abc".to_value(), Value::Text("abc")));
/// assert!(matches!(42u8.to_value(), Value::Integer(42)));
/// assert!(matches!(None::<String>.to_value(), Value::Absent));
/// assert!(matches!(1.5f64.to_value(), Value::Unsupported("f64")));
/// ```
pub trait Inspect {
    /// Returns the shape of this value.
    fn to_value(&self) -> Value<'_>;
}

// ============================================================================
// ELEMENT
// ============================================================================

/// Element kind of a sequence, fixed by the element type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// Text elements.
    Text,
    /// Integer elements.
    Integer,
    /// Elements no rule applies to; the payload names the type.
    Unsupported(&'static str),
}

impl ElementKind {
    /// Short human name, matching [`Scalar::kind_name`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Integer => "integer",
            Self::Unsupported(name) => name,
        }
    }
}

/// Types that may appear as elements of a validated sequence.
///
/// The kind is an associated constant so an empty `Vec<f64>` is still known
/// to be an unsupported sequence.
pub trait Element {
    /// Kind shared by every element of this type.
    const KIND: ElementKind;

    /// Scalar view of one element. `None` for unsupported kinds.
    fn scalar(&self) -> Option<Scalar<'_>> {
        None
    }
}

// ── text ────────────────────────────────────────────────────────────────────

impl Inspect for str {
    #[inline]
    fn to_value(&self) -> Value<'_> {
        Value::Text(self)
    }
}

impl Element for str {
    const KIND: ElementKind = ElementKind::Text;

    #[inline]
    fn scalar(&self) -> Option<Scalar<'_>> {
        Some(Scalar::Text(self))
    }
}

impl Inspect for String {
    #[inline]
    fn to_value(&self) -> Value<'_> {
        Value::Text(self)
    }
}

impl Element for String {
    const KIND: ElementKind = ElementKind::Text;

    #[inline]
    fn scalar(&self) -> Option<Scalar<'_>> {
        Some(Scalar::Text(self))
    }
}

// ── integers ────────────────────────────────────────────────────────────────

macro_rules! integer {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Inspect for $ty {
                #[inline]
                fn to_value(&self) -> Value<'_> {
                    Value::Integer(i64::from(*self))
                }
            }

            impl Element for $ty {
                const KIND: ElementKind = ElementKind::Integer;

                #[inline]
                fn scalar(&self) -> Option<Scalar<'_>> {
                    Some(Scalar::Integer(i64::from(*self)))
                }
            }
        )+
    };
}

integer!(i8, i16, i32, i64, u8, u16, u32);

impl Inspect for isize {
    #[inline]
    fn to_value(&self) -> Value<'_> {
        // isize is at most 64 bits on every supported target.
        Value::Integer(*self as i64)
    }
}

impl Element for isize {
    const KIND: ElementKind = ElementKind::Integer;

    #[inline]
    fn scalar(&self) -> Option<Scalar<'_>> {
        Some(Scalar::Integer(*self as i64))
    }
}

// ── unsupported scalars ─────────────────────────────────────────────────────

macro_rules! unsupported {
    ($($ty:ty => $name:literal),+ $(,)?) => {
        $(
            impl Inspect for $ty {
                fn to_value(&self) -> Value<'_> {
                    Value::Unsupported($name)
                }
            }

            impl Element for $ty {
                const KIND: ElementKind = ElementKind::Unsupported($name);
            }
        )+
    };
}

unsupported!(
    bool => "bool",
    char => "char",
    f32 => "f32",
    f64 => "f64",
    u64 => "u64",
    usize => "usize",
    i128 => "i128",
    u128 => "u128",
    () => "()",
);

// ── sequences ───────────────────────────────────────────────────────────────

fn sequence<'a, T, I>(items: I) -> Value<'a>
where
    T: Element + 'a,
    I: IntoIterator<Item = &'a T>,
{
    match T::KIND {
        ElementKind::Text => Value::TextSequence(
            items
                .into_iter()
                .filter_map(|item| match item.scalar() {
                    Some(Scalar::Text(s)) => Some(s),
                    _ => None,
                })
                .collect(),
        ),
        ElementKind::Integer => Value::IntegerSequence(
            items
                .into_iter()
                .filter_map(|item| match item.scalar() {
                    Some(Scalar::Integer(n)) => Some(n),
                    _ => None,
                })
                .collect(),
        ),
        ElementKind::Unsupported(_) => Value::Unsupported("sequence"),
    }
}

impl<T: Element> Inspect for [T] {
    fn to_value(&self) -> Value<'_> {
        sequence(self)
    }
}

impl<T: Element> Inspect for Vec<T> {
    fn to_value(&self) -> Value<'_> {
        sequence(self)
    }
}

impl<T: Element, const N: usize> Inspect for [T; N] {
    fn to_value(&self) -> Value<'_> {
        sequence(self)
    }
}

impl<T: Element> Inspect for VecDeque<T> {
    fn to_value(&self) -> Value<'_> {
        sequence(self)
    }
}

// ── pointer-like wrappers ───────────────────────────────────────────────────

macro_rules! pointer {
    ($($ptr:ident),+ $(,)?) => {
        $(
            impl<T: Inspect + ?Sized> Inspect for $ptr<T> {
                #[inline]
                fn to_value(&self) -> Value<'_> {
                    (**self).to_value()
                }
            }

            impl<T: Element + ?Sized> Element for $ptr<T> {
                const KIND: ElementKind = T::KIND;

                #[inline]
                fn scalar(&self) -> Option<Scalar<'_>> {
                    (**self).scalar()
                }
            }
        )+
    };
}

pointer!(Box, Rc, Arc);

impl<T: Inspect + ?Sized> Inspect for &T {
    #[inline]
    fn to_value(&self) -> Value<'_> {
        (**self).to_value()
    }
}

impl<T: Element + ?Sized> Element for &T {
    const KIND: ElementKind = T::KIND;

    #[inline]
    fn scalar(&self) -> Option<Scalar<'_>> {
        (**self).scalar()
    }
}

impl<B: Inspect + ToOwned + ?Sized> Inspect for Cow<'_, B> {
    #[inline]
    fn to_value(&self) -> Value<'_> {
        (**self).to_value()
    }
}

impl<B: Element + ToOwned + ?Sized> Element for Cow<'_, B> {
    const KIND: ElementKind = B::KIND;

    #[inline]
    fn scalar(&self) -> Option<Scalar<'_>> {
        (**self).scalar()
    }
}

impl<T: Inspect> Inspect for Option<T> {
    #[inline]
    fn to_value(&self) -> Value<'_> {
        match self {
            Some(inner) => inner.to_value(),
            None => Value::Absent,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_shapes() {
        assert!(matches!("abc".to_value(), Value::Text("abc")));
        assert!(matches!(String::from("x").to_value(), Value::Text("x")));
        assert!(matches!(Cow::Borrowed("y").to_value(), Value::Text("y")));
    }

    #[test]
    fn test_integer_widening() {
        assert!(matches!((-3i8).to_value(), Value::Integer(-3)));
        assert!(matches!(u32::MAX.to_value(), Value::Integer(n) if n == i64::from(u32::MAX)));
        assert!(matches!(7isize.to_value(), Value::Integer(7)));
    }

    #[test]
    fn test_unsupported_scalars() {
        assert!(matches!(true.to_value(), Value::Unsupported("bool")));
        assert!(matches!(1.0f32.to_value(), Value::Unsupported("f32")));
        assert!(matches!(5usize.to_value(), Value::Unsupported("usize")));
    }

    #[test]
    fn test_sequences() {
        let words = vec![String::from("a"), String::from("bb")];
        match words.to_value() {
            Value::TextSequence(items) => assert_eq!(items, vec!["a", "bb"]),
            other => panic!("unexpected {other:?}"),
        }

        match [1i32, 2, 3].to_value() {
            Value::IntegerSequence(items) => assert_eq!(items, vec![1, 2, 3]),
            other => panic!("unexpected {other:?}"),
        }

        assert!(matches!(vec![1.0f64].to_value(), Value::Unsupported(_)));
        assert!(matches!(Vec::<bool>::new().to_value(), Value::Unsupported(_)));
        assert!(matches!(vec!["x", "y"].to_value(), Value::TextSequence(v) if v == ["x", "y"]));
        assert!(matches!(vec![Box::<str>::from("z")].to_value(), Value::TextSequence(v) if v == ["z"]));
        assert!(matches!(Vec::<String>::new().to_value(), Value::TextSequence(v) if v.is_empty()));
    }

    #[test]
    fn test_pointer_like_deref() {
        assert!(matches!(Box::new(5i64).to_value(), Value::Integer(5)));
        assert!(matches!(Arc::new(String::from("s")).to_value(), Value::Text("s")));
        assert!(matches!(Some(4u16).to_value(), Value::Integer(4)));
        assert!(matches!(None::<i32>.to_value(), Value::Absent));
    }

    #[test]
    fn test_as_scalar() {
        assert_eq!(Value::Text("a").as_scalar(), Some(Scalar::Text("a")));
        assert_eq!(Value::Integer(1).as_scalar(), Some(Scalar::Integer(1)));
        assert_eq!(Value::Absent.as_scalar(), None);
    }

    #[test]
    fn test_element_kind_ignores_sequence_length() {
        assert_eq!(Vec::<i64>::new().to_value().element_kind(), Some(ElementKind::Integer));
        assert_eq!(Vec::<String>::new().to_value().element_kind(), Some(ElementKind::Text));
        assert_eq!("a".to_value().element_kind(), Some(ElementKind::Text));
        assert_eq!(None::<i32>.to_value().element_kind(), None);
        assert_eq!(ElementKind::Integer.name(), Scalar::Integer(0).kind_name());
    }
}
