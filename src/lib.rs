//! # enumerables
//!
//! Generic iteration combinators that work uniformly over sequences,
//! integer ranges and insertion-ordered hashes.
//!
//! ## Overview
//!
//! - **Sources**: [`Enumerable`] is the one capability a collection supplies,
//!   a fresh cursor over its elements in natural order. It is implemented for
//!   `Vec<T>`, arrays, slices, integer ranges and [`OrderedHash`].
//! - **Combinators**: [`Combinators`] adds `my_each`, `my_each_with_index`,
//!   `my_select`, `my_map`, `my_count`, `my_all`, `my_any`, `my_none` and
//!   `my_inject` to every source.
//! - **Matchers**: [`Matcher`] turns a callable, a pattern, a type tag or a
//!   literal into one [`Predicate`]; [`Args`] models the block and positional
//!   arguments of a single call.
//! - **Enumerators**: [`Enumerator`] is the restartable handle returned when
//!   no block is supplied.
//!
//! ## Feature Flags
//!
//! - `pattern` (default): regular expression matchers
//! - `tracing` (default): structured `tracing` events for every combinator
//! - `serde`: serialization for [`OrderedHash`] and [`Value`]
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use enumerables::prelude::*;
//!
//! let numbers = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
//!
//! let evens = numbers.my_select(Args::block(|value: &i32| value % 2 == 0)).unwrap();
//! assert_eq!(evens.into_selection(), Some(vec![2, 4, 6, 8, 10]));
//!
//! assert_eq!(numbers.my_count(Args::literal(3)), Ok(1));
//! assert_eq!((1_i32..=10).my_none(Args::block(|value: &i32| *value > 10)), Ok(true));
//! assert_eq!(vec![1, 2, 3].my_inject_with("+".parse().unwrap()), Ok(6));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Emits a `trace` event when the `tracing` feature is enabled.
macro_rules! trace {
    ($($field:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::trace!($($field)*);
    };
}

/// Emits a `debug` event when the `tracing` feature is enabled.
macro_rules! debug {
    ($($field:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!($($field)*);
    };
}

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use enumerables::prelude::*;
/// ```
pub mod prelude {
    pub use crate::combinator::*;
    pub use crate::element::*;
    pub use crate::error::*;
    pub use crate::matcher::*;
    pub use crate::ordered_hash;
    pub use crate::source::*;
}

pub mod combinator;
pub mod element;
pub mod error;
pub mod matcher;
pub mod source;

pub use combinator::{
    Combinators, Enumerator, Method, Operand, Operator, ParseOperatorError, Selected,
};
pub use element::{Element, TypeTag, Value};
pub use error::EnumerableError;
#[cfg(feature = "pattern")]
pub use matcher::Regex;
pub use matcher::{Args, Matcher, Predicate, build_predicate};
pub use source::{Enumerable, OrderedHash};
