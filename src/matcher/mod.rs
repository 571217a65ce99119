//! Polymorphic predicate matching.
//!
//! Filter, quantifier and count combinators accept four kinds of matcher
//! argument and treat them uniformly:
//!
//! - [`Matcher::Callable`]: a block invoked with the element
//! - [`Matcher::Pattern`]: a regular expression matched against the
//!   element's textual form (`pattern` feature)
//! - [`Matcher::Kind`]: a [`TypeTag`] the element must satisfy
//! - [`Matcher::Literal`]: a value the element must equal
//!
//! [`build_predicate`] normalizes any of them into a [`Predicate`], a single
//! fallible boolean test. [`Args`] models the arguments of one call site and
//! rejects the combinations a call may not mix.
//!
//! # Examples
//!
//! ```rust
//! use enumerables::{Matcher, TypeTag, Value, build_predicate};
//!
//! let mut numeric = build_predicate(Matcher::kind(TypeTag::Numeric));
//! assert_eq!(numeric.test(&Value::from(99)), Ok(true));
//! assert_eq!(numeric.test(&Value::Nil), Ok(false));
//!
//! let mut equal = build_predicate(Matcher::literal(3));
//! assert_eq!(equal.test(&3), Ok(true));
//! assert_eq!(equal.test(&4), Ok(false));
//! ```

mod args;

pub use args::Args;

#[cfg(feature = "pattern")]
pub use regex::Regex;

use std::fmt;

use crate::element::{Element, TypeTag};
use crate::error::EnumerableError;

/// A caller-supplied block testing one element.
pub type Block<'m, T> = Box<dyn FnMut(&T) -> bool + 'm>;

/// A matcher argument: one of the four ways to describe a test.
pub enum Matcher<'m, T> {
    /// A block invoked directly with the element.
    ///
    /// Mapping entries arrive as `&(K, V)` and can be destructured.
    Callable(Block<'m, T>),
    /// A pattern matched against the element's textual representation.
    #[cfg(feature = "pattern")]
    Pattern(Regex),
    /// A type or capability the element must satisfy.
    Kind(TypeTag),
    /// A value the element must equal.
    Literal(T),
}

impl<'m, T> Matcher<'m, T> {
    /// Creates a [`Matcher::Callable`] from a closure.
    pub fn callable<F>(block: F) -> Self
    where
        F: FnMut(&T) -> bool + 'm,
    {
        Self::Callable(Box::new(block))
    }

    /// Creates a [`Matcher::Pattern`].
    #[cfg(feature = "pattern")]
    #[must_use]
    pub const fn pattern(pattern: Regex) -> Self {
        Self::Pattern(pattern)
    }

    /// Compiles `source` into a [`Matcher::Pattern`].
    ///
    /// # Errors
    ///
    /// Returns the regex compilation error when `source` is not a valid pattern.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerables::Matcher;
    ///
    /// assert!(Matcher::<String>::try_pattern("a+").is_ok());
    /// assert!(Matcher::<String>::try_pattern("(").is_err());
    /// ```
    #[cfg(feature = "pattern")]
    pub fn try_pattern(source: &str) -> Result<Self, regex::Error> {
        Regex::new(source).map(Self::Pattern)
    }

    /// Creates a [`Matcher::Kind`].
    #[must_use]
    pub const fn kind(tag: TypeTag) -> Self {
        Self::Kind(tag)
    }

    /// Creates a [`Matcher::Literal`].
    pub const fn literal(value: T) -> Self {
        Self::Literal(value)
    }

    /// Returns the name of the matcher variant.
    #[must_use]
    pub const fn variant_name(&self) -> &'static str {
        match self {
            Self::Callable(_) => "callable",
            #[cfg(feature = "pattern")]
            Self::Pattern(_) => "pattern",
            Self::Kind(_) => "kind",
            Self::Literal(_) => "literal",
        }
    }
}

impl<T> From<TypeTag> for Matcher<'_, T> {
    fn from(tag: TypeTag) -> Self {
        Self::Kind(tag)
    }
}

#[cfg(feature = "pattern")]
impl<T> From<Regex> for Matcher<'_, T> {
    fn from(pattern: Regex) -> Self {
        Self::Pattern(pattern)
    }
}

impl<T: fmt::Debug> fmt::Debug for Matcher<'_, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Callable(_) => formatter.write_str("Callable(..)"),
            #[cfg(feature = "pattern")]
            Self::Pattern(pattern) => formatter.debug_tuple("Pattern").field(pattern).finish(),
            Self::Kind(tag) => formatter.debug_tuple("Kind").field(tag).finish(),
            Self::Literal(value) => formatter.debug_tuple("Literal").field(value).finish(),
        }
    }
}

/// A normalized, single-argument boolean test.
///
/// Testing can fail when the underlying matcher cannot be applied to an
/// element, e.g. a pattern against an element with no textual form.
pub struct Predicate<'m, T> {
    test: Box<dyn FnMut(&T) -> Result<bool, EnumerableError> + 'm>,
}

impl<'m, T> Predicate<'m, T> {
    /// Wraps a fallible test.
    pub fn new<F>(test: F) -> Self
    where
        F: FnMut(&T) -> Result<bool, EnumerableError> + 'm,
    {
        Self {
            test: Box::new(test),
        }
    }

    /// A predicate that holds for every element.
    #[must_use]
    pub fn always() -> Self {
        Self::new(|_| Ok(true))
    }

    /// Tests one element.
    ///
    /// # Errors
    ///
    /// Propagates the failure of the underlying matcher unchanged.
    pub fn test(&mut self, element: &T) -> Result<bool, EnumerableError> {
        (self.test)(element)
    }
}

impl<T: Element> Predicate<'_, T> {
    /// A predicate that holds for truthy elements.
    #[must_use]
    pub fn truthy() -> Self {
        Self::new(|element: &T| Ok(element.is_truthy()))
    }
}

impl<T> fmt::Debug for Predicate<'_, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Predicate(..)")
    }
}

/// Normalizes a matcher argument into a [`Predicate`].
///
/// | Matcher | Predicate holds when |
/// |---|---|
/// | `Callable(block)` | `block(element)` returns `true` |
/// | `Pattern(regex)` | `regex` matches `element.text()` |
/// | `Kind(tag)` | `element.is_a(tag)` |
/// | `Literal(value)` | `element == value` |
///
/// A pattern tested against an element without a textual representation
/// fails with [`EnumerableError::NotTextual`].
///
/// # Examples
///
/// ```rust
/// use enumerables::{Matcher, build_predicate};
///
/// let mut long = build_predicate(Matcher::callable(|word: &&str| word.len() >= 4));
/// assert_eq!(long.test(&"bear"), Ok(true));
/// assert_eq!(long.test(&"ant"), Ok(false));
/// ```
pub fn build_predicate<'m, T>(matcher: Matcher<'m, T>) -> Predicate<'m, T>
where
    T: Element + PartialEq + 'm,
{
    match matcher {
        Matcher::Callable(mut block) => Predicate::new(move |element: &T| Ok(block(element))),
        #[cfg(feature = "pattern")]
        Matcher::Pattern(pattern) => Predicate::new(move |element: &T| {
            let text = element
                .text()
                .ok_or_else(|| EnumerableError::NotTextual {
                    pattern: pattern.as_str().to_string(),
                })?;
            Ok(pattern.is_match(&text))
        }),
        Matcher::Kind(tag) => Predicate::new(move |element: &T| Ok(element.is_a(tag))),
        Matcher::Literal(expected) => Predicate::new(move |element: &T| Ok(*element == expected)),
    }
}
