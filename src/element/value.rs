//! A dynamically typed element.

use std::borrow::Cow;
use std::fmt;

use super::{Element, TypeTag, describe};

/// A dynamically typed element for heterogeneous sequences.
///
/// `Value` lets a single `Vec` hold nils, booleans, numbers, text and nested
/// lists, which is what truthiness and type-tag matching are usually
/// exercised against.
///
/// # Examples
///
/// ```rust
/// use enumerables::{Element, TypeTag, Value};
///
/// let values = vec![Value::Nil, Value::from(true), Value::from(99)];
///
/// assert!(!values[0].is_truthy());
/// assert!(values[1].is_truthy());
/// assert!(values[2].is_a(TypeTag::Numeric));
/// assert_eq!(values[2].to_string(), "99");
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Value {
    /// The absent value.
    #[default]
    Nil,
    /// A boolean.
    Boolean(bool),
    /// A signed integer.
    Integer(i64),
    /// A floating point number.
    Float(f64),
    /// A string.
    Text(String),
    /// A nested sequence of values.
    List(Vec<Value>),
}

impl Value {
    /// Returns `true` for [`Value::Nil`].
    #[must_use]
    pub const fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// Returns a short description of the variant, used in error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Nil => "nil",
            Self::Boolean(_) => "boolean",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::Text(_) => "text",
            Self::List(_) => "list",
        }
    }
}

impl Element for Value {
    fn is_truthy(&self) -> bool {
        !matches!(self, Self::Nil | Self::Boolean(false))
    }

    fn text(&self) -> Option<Cow<'_, str>> {
        match self {
            Self::Nil => None,
            Self::Boolean(value) => value.text(),
            Self::Integer(value) => value.text(),
            Self::Float(value) => value.text(),
            Self::Text(value) => Some(Cow::Borrowed(value.as_str())),
            Self::List(values) => values.text(),
        }
    }

    fn is_a(&self, tag: TypeTag) -> bool {
        match self {
            Self::Nil => matches!(tag, TypeTag::Object | TypeTag::Nil),
            Self::Boolean(value) => value.is_a(tag),
            Self::Integer(value) => value.is_a(tag),
            Self::Float(value) => value.is_a(tag),
            Self::Text(value) => value.is_a(tag),
            Self::List(values) => values.is_a(tag),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&describe(self))
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Nil, Into::into)
    }
}

impl<T: Into<Self>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}
