//! Error types for the combinator core.
//!
//! Every fallible combinator returns [`EnumerableError`]. The variants fall
//! into three groups:
//!
//! - caller argument errors: a call site supplied the wrong combination of
//!   block and matcher arguments ([`EnumerableError::ArgumentCount`],
//!   [`EnumerableError::BlockWithArgument`]);
//! - empty reduction: a seedless `inject` over an empty source
//!   ([`EnumerableError::EmptyReduction`]);
//! - evaluation errors: a matcher or operator could not be applied to an
//!   element ([`EnumerableError::NotTextual`],
//!   [`EnumerableError::UndefinedOperator`], [`EnumerableError::Arithmetic`]).
//!
//! Panics raised inside caller-supplied blocks are never caught.

use crate::combinator::Operator;

/// Represents errors that can occur while running a combinator.
///
/// # Examples
///
/// ```rust
/// use enumerables::EnumerableError;
///
/// let error = EnumerableError::ArgumentCount { given: 2 };
/// assert_eq!(
///     error.to_string(),
///     "wrong number of arguments (given 2, expected 0..1)"
/// );
/// assert!(error.is_argument_error());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnumerableError {
    /// More than one positional matcher argument was supplied.
    #[error("wrong number of arguments (given {given}, expected 0..1)")]
    ArgumentCount {
        /// The number of positional arguments at the call site.
        given: usize,
    },

    /// A block and a positional matcher argument were supplied together.
    #[error("a block cannot be combined with a matcher argument")]
    BlockWithArgument,

    /// `inject` was called on an empty source without an initial value.
    #[error("cannot reduce an empty enumerable without an initial value")]
    EmptyReduction,

    /// A pattern was tested against an element with no textual form.
    #[error("element has no textual representation to match against /{pattern}/")]
    NotTextual {
        /// The source text of the pattern.
        pattern: String,
    },

    /// A symbol operator is not defined for the operands it was given.
    #[error("undefined operator `{operator}` for {operand}")]
    UndefinedOperator {
        /// The operator that was applied.
        operator: Operator,
        /// A description of the operand types.
        operand: &'static str,
    },

    /// A symbol operator overflowed or divided by zero.
    #[error("arithmetic failure while applying `{operator}`")]
    Arithmetic {
        /// The operator that was applied.
        operator: Operator,
    },
}

impl EnumerableError {
    /// Returns `true` for errors caused by the arguments of a call site.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerables::EnumerableError;
    ///
    /// assert!(EnumerableError::BlockWithArgument.is_argument_error());
    /// assert!(!EnumerableError::EmptyReduction.is_argument_error());
    /// ```
    #[must_use]
    pub const fn is_argument_error(&self) -> bool {
        matches!(self, Self::ArgumentCount { .. } | Self::BlockWithArgument)
    }
}
