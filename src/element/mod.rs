//! Element capabilities used by matchers and quantifiers.
//!
//! Combinators never inspect elements directly. Whatever they need to know
//! about an element goes through the [`Element`] trait:
//!
//! - [`Element::is_truthy`]: the fallback test of `my_all`, `my_any` and
//!   `my_none` when no block or matcher is given
//! - [`Element::text`]: the textual form a pattern is matched against
//! - [`Element::is_a`]: the capability check behind [`TypeTag`] matchers
//!
//! Every method has a default, so a domain type only overrides what it needs:
//!
//! ```rust
//! use enumerables::{Element, TypeTag};
//!
//! struct Ticket(u32);
//!
//! impl Element for Ticket {}
//!
//! let ticket = Ticket(7);
//! assert!(ticket.is_truthy());
//! assert!(ticket.text().is_none());
//! assert!(ticket.is_a(TypeTag::Object));
//! assert!(!ticket.is_a(TypeTag::Numeric));
//! ```
//!
//! The dynamically typed [`Value`] covers heterogeneous sequences such as
//! `[nil, true, 99]`.

mod value;

pub use value::Value;

use std::borrow::Cow;
use std::fmt;

/// A type or capability an element can be checked against.
///
/// Tags form a small hierarchy: every element is an [`TypeTag::Object`],
/// integers and floats are also [`TypeTag::Numeric`].
///
/// # Examples
///
/// ```rust
/// use enumerables::{Element, TypeTag};
///
/// assert!(42_i32.is_a(TypeTag::Integer));
/// assert!(42_i32.is_a(TypeTag::Numeric));
/// assert!(!42_i32.is_a(TypeTag::Float));
/// assert!("ant".is_a(TypeTag::Text));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    /// Satisfied by every element.
    Object,
    /// The absent value.
    Nil,
    /// `true` and `false`.
    Boolean,
    /// Integers and floats.
    Numeric,
    /// Integers of any width.
    Integer,
    /// Floating point numbers.
    Float,
    /// Strings and characters.
    Text,
    /// Positionally ordered sequences, mapping entries included.
    Sequence,
    /// Key/value mappings.
    Mapping,
}

impl TypeTag {
    /// Returns the name of the tag.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Object => "Object",
            Self::Nil => "Nil",
            Self::Boolean => "Boolean",
            Self::Numeric => "Numeric",
            Self::Integer => "Integer",
            Self::Float => "Float",
            Self::Text => "Text",
            Self::Sequence => "Sequence",
            Self::Mapping => "Mapping",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

/// The capabilities an element exposes to matchers and quantifiers.
pub trait Element {
    /// Returns whether the element counts as true when no predicate is given.
    ///
    /// Only false-like sentinels (`false`, `None`, [`Value::Nil`]) are falsy.
    fn is_truthy(&self) -> bool {
        true
    }

    /// Returns the textual representation patterns are matched against.
    ///
    /// `None` means the element has no textual form.
    fn text(&self) -> Option<Cow<'_, str>> {
        None
    }

    /// Returns whether the element satisfies the given type tag.
    fn is_a(&self, tag: TypeTag) -> bool {
        tag == TypeTag::Object
    }
}

impl<T: Element + ?Sized> Element for &T {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }

    fn text(&self) -> Option<Cow<'_, str>> {
        (**self).text()
    }

    fn is_a(&self, tag: TypeTag) -> bool {
        (**self).is_a(tag)
    }
}

impl<T: Element + ?Sized> Element for Box<T> {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }

    fn text(&self) -> Option<Cow<'_, str>> {
        (**self).text()
    }

    fn is_a(&self, tag: TypeTag) -> bool {
        (**self).is_a(tag)
    }
}

// Floats render through `Debug` so whole values keep their fractional part.
macro_rules! numeric_element {
    ($tag:ident, $render:literal: $($number:ty),*) => {
        $(
            impl Element for $number {
                fn text(&self) -> Option<Cow<'_, str>> {
                    Some(Cow::Owned(format!($render, self)))
                }

                fn is_a(&self, tag: TypeTag) -> bool {
                    matches!(tag, TypeTag::Object | TypeTag::Numeric | TypeTag::$tag)
                }
            }
        )*
    };
}

numeric_element!(Integer, "{}": i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
numeric_element!(Float, "{:?}": f32, f64);

impl Element for bool {
    fn is_truthy(&self) -> bool {
        *self
    }

    fn text(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(if *self { "true" } else { "false" }))
    }

    fn is_a(&self, tag: TypeTag) -> bool {
        matches!(tag, TypeTag::Object | TypeTag::Boolean)
    }
}

impl Element for str {
    fn text(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self))
    }

    fn is_a(&self, tag: TypeTag) -> bool {
        matches!(tag, TypeTag::Object | TypeTag::Text)
    }
}

impl Element for String {
    fn text(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self.as_str()))
    }

    fn is_a(&self, tag: TypeTag) -> bool {
        matches!(tag, TypeTag::Object | TypeTag::Text)
    }
}

impl Element for char {
    fn text(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Owned(self.to_string()))
    }

    fn is_a(&self, tag: TypeTag) -> bool {
        matches!(tag, TypeTag::Object | TypeTag::Text)
    }
}

impl<T: Element> Element for Option<T> {
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Element::is_truthy)
    }

    fn text(&self) -> Option<Cow<'_, str>> {
        self.as_ref().and_then(Element::text)
    }

    fn is_a(&self, tag: TypeTag) -> bool {
        self.as_ref().map_or_else(
            || matches!(tag, TypeTag::Object | TypeTag::Nil),
            |element| element.is_a(tag),
        )
    }
}

impl<T: Element> Element for [T] {
    fn text(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Owned(inspect_sequence(self)))
    }

    fn is_a(&self, tag: TypeTag) -> bool {
        matches!(tag, TypeTag::Object | TypeTag::Sequence)
    }
}

impl<T: Element> Element for Vec<T> {
    fn text(&self) -> Option<Cow<'_, str>> {
        self.as_slice().text()
    }

    fn is_a(&self, tag: TypeTag) -> bool {
        self.as_slice().is_a(tag)
    }
}

impl<T: Element, const N: usize> Element for [T; N] {
    fn text(&self) -> Option<Cow<'_, str>> {
        self.as_slice().text()
    }

    fn is_a(&self, tag: TypeTag) -> bool {
        self.as_slice().is_a(tag)
    }
}

/// Mapping entries behave as two-element sequences.
impl<K: Element, V: Element> Element for (K, V) {
    fn text(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Owned(format!(
            "[{}, {}]",
            describe(&self.0),
            describe(&self.1)
        )))
    }

    fn is_a(&self, tag: TypeTag) -> bool {
        matches!(tag, TypeTag::Object | TypeTag::Sequence)
    }
}

/// Renders an element for use inside a composite's textual form.
pub(crate) fn describe<T: Element + ?Sized>(element: &T) -> Cow<'_, str> {
    element.text().unwrap_or(Cow::Borrowed("nil"))
}

fn inspect_sequence<T: Element>(elements: &[T]) -> String {
    let parts: Vec<Cow<'_, str>> = elements.iter().map(|element| describe(element)).collect();
    format!("[{}]", parts.join(", "))
}
