//! Call-site arguments.

use std::fmt;

use super::{Block, Matcher, Predicate, build_predicate};
use crate::element::{Element, TypeTag};
use crate::error::EnumerableError;

#[cfg(feature = "pattern")]
use super::Regex;

/// The block and positional matcher arguments of one combinator call.
///
/// A call accepts at most one positional argument and never a positional
/// argument together with a block; [`Args::into_predicate`] enforces both.
///
/// # Examples
///
/// ```rust
/// use enumerables::{Args, EnumerableError, TypeTag};
///
/// let none: Args<'_, i32> = Args::none();
/// assert!(none.into_predicate().unwrap().is_none());
///
/// let mut even = Args::block(|value: &i32| value % 2 == 0).into_predicate().unwrap().unwrap();
/// assert_eq!(even.test(&4), Ok(true));
///
/// let mixed = Args::kind(TypeTag::Integer).with_block(|_: &i32| true);
/// assert_eq!(mixed.into_predicate().err(), Some(EnumerableError::BlockWithArgument));
/// ```
pub struct Args<'m, T> {
    arguments: Vec<Matcher<'m, T>>,
    block: Option<Block<'m, T>>,
}

impl<'m, T> Args<'m, T> {
    /// No block and no argument.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            arguments: Vec::new(),
            block: None,
        }
    }

    /// Only a block.
    pub fn block<F>(block: F) -> Self
    where
        F: FnMut(&T) -> bool + 'm,
    {
        Self::none().with_block(block)
    }

    /// Only one positional matcher argument.
    pub fn argument(matcher: impl Into<Matcher<'m, T>>) -> Self {
        Self::none().with_argument(matcher)
    }

    /// Only a pattern argument.
    #[cfg(feature = "pattern")]
    #[must_use]
    pub fn pattern(pattern: Regex) -> Self {
        Self::argument(Matcher::Pattern(pattern))
    }

    /// Only a type tag argument.
    #[must_use]
    pub fn kind(tag: TypeTag) -> Self {
        Self::argument(Matcher::Kind(tag))
    }

    /// Only a literal argument.
    pub fn literal(value: T) -> Self {
        Self::argument(Matcher::Literal(value))
    }

    /// Attaches a block, replacing any previous one.
    #[must_use]
    pub fn with_block<F>(mut self, block: F) -> Self
    where
        F: FnMut(&T) -> bool + 'm,
    {
        self.block = Some(Box::new(block));
        self
    }

    /// Appends a positional argument.
    #[must_use]
    pub fn with_argument(mut self, matcher: impl Into<Matcher<'m, T>>) -> Self {
        self.arguments.push(matcher.into());
        self
    }

    /// Number of positional arguments.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.arguments.len()
    }

    /// Returns `true` when a block was supplied.
    #[must_use]
    pub const fn has_block(&self) -> bool {
        self.block.is_some()
    }

    /// Returns `true` when neither a block nor an argument was supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.arguments.is_empty() && self.block.is_none()
    }

    /// Validates the call and normalizes it into at most one predicate.
    ///
    /// Returns `Ok(None)` when nothing was supplied, leaving the fallback to
    /// the combinator.
    ///
    /// # Errors
    ///
    /// - [`EnumerableError::ArgumentCount`] for more than one positional argument
    /// - [`EnumerableError::BlockWithArgument`] for a block next to an argument
    pub fn into_predicate(self) -> Result<Option<Predicate<'m, T>>, EnumerableError>
    where
        T: Element + PartialEq + 'm,
    {
        let Self {
            mut arguments,
            block,
        } = self;

        let given = arguments.len();
        if given > 1 {
            let error = EnumerableError::ArgumentCount { given };
            debug!(%error, "rejected call-site arguments");
            return Err(error);
        }

        match (arguments.pop(), block) {
            (Some(_), Some(_)) => {
                let error = EnumerableError::BlockWithArgument;
                debug!(%error, "rejected call-site arguments");
                Err(error)
            }
            (Some(matcher), None) => Ok(Some(build_predicate(matcher))),
            (None, Some(block)) => Ok(Some(build_predicate(Matcher::Callable(block)))),
            (None, None) => Ok(None),
        }
    }
}

impl<T> Default for Args<'_, T> {
    fn default() -> Self {
        Self::none()
    }
}

impl<T> fmt::Debug for Args<'_, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let variants: Vec<&'static str> = self
            .arguments
            .iter()
            .map(Matcher::variant_name)
            .collect();
        formatter
            .debug_struct("Args")
            .field("arguments", &variants)
            .field("block", &self.has_block())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Value;
    use rstest::rstest;

    #[rstest]
    fn test_none_yields_no_predicate() {
        let args: Args<'_, i32> = Args::none();
        assert!(args.is_empty());
        assert!(args.into_predicate().unwrap().is_none());
        assert!(Args::<i32>::default().is_empty());
    }

    #[rstest]
    fn test_block_becomes_predicate() {
        let args = Args::block(|value: &i32| *value > 2);
        assert!(args.has_block());
        assert_eq!(args.arity(), 0);

        let mut predicate = args.into_predicate().unwrap().unwrap();
        assert_eq!(predicate.test(&3), Ok(true));
        assert_eq!(predicate.test(&2), Ok(false));
    }

    #[rstest]
    fn test_single_argument_becomes_predicate() {
        let mut predicate = Args::kind(TypeTag::Numeric).into_predicate().unwrap().unwrap();
        assert_eq!(predicate.test(&Value::from(1.5)), Ok(true));
        assert_eq!(predicate.test(&Value::from("a")), Ok(false));

        let mut literal = Args::literal(7_i32).into_predicate().unwrap().unwrap();
        assert_eq!(literal.test(&7), Ok(true));
    }

    #[rstest]
    #[case(2)]
    #[case(3)]
    fn test_too_many_arguments_rejected(#[case] given: usize) {
        let args = (0..given).fold(Args::none(), |args, value| {
            args.with_argument(Matcher::literal(value))
        });
        assert_eq!(args.arity(), given);
        assert_eq!(
            args.into_predicate().err(),
            Some(EnumerableError::ArgumentCount { given })
        );
    }

    #[rstest]
    fn test_block_with_argument_rejected() {
        let args = Args::literal(1_i32).with_block(|_: &i32| true);
        assert_eq!(
            args.into_predicate().err(),
            Some(EnumerableError::BlockWithArgument)
        );
    }

    #[cfg(feature = "pattern")]
    #[rstest]
    fn test_pattern_argument() {
        let mut predicate = Args::pattern(Regex::new("^b").unwrap())
            .into_predicate()
            .unwrap()
            .unwrap();
        assert_eq!(predicate.test(&"bear"), Ok(true));
        assert_eq!(predicate.test(&"cat"), Ok(false));
    }

    #[rstest]
    fn test_debug_lists_argument_kinds() {
        let args = Args::kind(TypeTag::Text).with_argument(Matcher::literal("a"));
        assert_eq!(
            format!("{args:?}"),
            r#"Args { arguments: ["kind", "literal"], block: false }"#
        );
    }
}
