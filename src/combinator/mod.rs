//! Enumeration combinators.
//!
//! This module provides the [`Combinators`] extension trait, implemented for
//! every [`Enumerable`] source. Each combinator traverses the source's cursor
//! in natural order and never mutates the source.
//!
//! # Properties
//!
//! For any source `s` and block `f`:
//!
//! ```text
//! s.my_each(f)                      == s            // f called |s| times, in order
//! s.my_map(f).len()                 == |s|
//! s.my_count(Args::none())          == |s|
//! s.my_count(Args::block(p))        == |s.my_select(Args::block(p))|
//! empty.my_all / my_any / my_none   == true / false / true
//! ```
//!
//! Quantifiers stop evaluating the predicate as soon as the answer is known.
//!
//! # Examples
//!
//! ```rust
//! use enumerables::prelude::*;
//!
//! let words = vec!["ant", "bear", "cat"];
//!
//! assert_eq!(words.my_all(Args::block(|word: &&str| word.len() >= 4)), Ok(false));
//! assert_eq!(words.my_map(|word| word.len()), vec![3, 4, 3]);
//!
//! let codes = ordered_hash! { "kenya" => 254, "uganda" => 256, "eritrea" => 291 };
//! assert_eq!(codes.my_map(|(_, code)| code + 1), vec![255, 257, 292]);
//! ```

mod enumerator;
mod operator;

pub use enumerator::{Enumerator, Method};
pub use operator::{Operand, Operator, ParseOperatorError};

use std::borrow::Borrow;
use std::fmt;

use crate::element::Element;
use crate::error::EnumerableError;
use crate::matcher::{Args, Predicate};
use crate::source::Enumerable;

/// The result of `my_select`: a deferred handle when nothing was supplied,
/// the selected elements otherwise.
pub enum Selected<'a, S>
where
    S: Enumerable + ?Sized + 'a,
{
    /// No block or matcher was given.
    Deferred(Enumerator<'a, S>),
    /// The matching elements, in the source's container kind.
    Ready(S::Selection),
}

impl<'a, S> Selected<'a, S>
where
    S: Enumerable + ?Sized + 'a,
{
    /// Returns `true` for [`Selected::Deferred`].
    #[must_use]
    pub const fn is_deferred(&self) -> bool {
        matches!(self, Self::Deferred(_))
    }

    /// Returns the selected elements, or `None` for a deferred handle.
    #[must_use]
    pub fn into_selection(self) -> Option<S::Selection> {
        match self {
            Self::Ready(selection) => Some(selection),
            Self::Deferred(_) => None,
        }
    }

    /// Returns the deferred handle, or `None` when elements were selected.
    #[must_use]
    pub fn into_enumerator(self) -> Option<Enumerator<'a, S>> {
        match self {
            Self::Deferred(enumerator) => Some(enumerator),
            Self::Ready(_) => None,
        }
    }
}

impl<'a, S> fmt::Debug for Selected<'a, S>
where
    S: Enumerable + ?Sized + 'a,
    S::Selection: fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Deferred(enumerator) => formatter.debug_tuple("Deferred").field(enumerator).finish(),
            Self::Ready(selection) => formatter.debug_tuple("Ready").field(selection).finish(),
        }
    }
}

/// Iteration combinators for every [`Enumerable`] source.
///
/// # Provided Methods
///
/// - `my_each`, `my_each_with_index`: run a block per element, return the source
/// - `my_select` / `my_filter`: keep the matching elements
/// - `my_map`: transform every element into a `Vec`
/// - `my_count`: count all, equal or matching elements
/// - `my_all`, `my_any`, `my_none`: short-circuiting quantifiers
/// - `my_inject` / `my_reduce` and their seeded and symbol forms: fold
///
/// Predicate-taking combinators accept [`Args`]: a block, a single matcher
/// argument, or nothing.
///
/// # Examples
///
/// ```rust
/// use enumerables::{Args, Combinators, TypeTag, Value};
///
/// let mixed = vec![Value::Nil, Value::from(true), Value::from(99)];
/// assert_eq!(mixed.my_any(Args::kind(TypeTag::Numeric)), Ok(true));
/// assert_eq!(mixed.my_none(Args::kind(TypeTag::Sequence)), Ok(true));
/// assert_eq!(mixed.my_all(Args::none()), Ok(false));
/// ```
pub trait Combinators: Enumerable {
    /// Calls `block` once per element, in order, and returns the source.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerables::Combinators;
    ///
    /// let numbers = vec![1, 2, 3];
    /// let mut doubled = Vec::new();
    /// let returned = numbers.my_each(|value| doubled.push(value * 2));
    ///
    /// assert_eq!(returned, &numbers);
    /// assert_eq!(doubled, vec![2, 4, 6]);
    /// ```
    fn my_each<F>(&self, mut block: F) -> &Self
    where
        F: FnMut(&Self::Item),
    {
        trace!(method = "my_each", "combinator");
        for yielded in self.cursor() {
            block(Borrow::<Self::Item>::borrow(&yielded));
        }
        self
    }

    /// Returns a deferred handle for `my_each`.
    fn my_each_enumerator(&self) -> Enumerator<'_, Self> {
        Enumerator::new(self, Method::Each)
    }

    /// Calls `block` with every element and its zero-based index, and
    /// returns the source.
    fn my_each_with_index<F>(&self, mut block: F) -> &Self
    where
        F: FnMut(&Self::Item, usize),
    {
        trace!(method = "my_each_with_index", "combinator");
        for (index, yielded) in self.cursor().enumerate() {
            block(Borrow::<Self::Item>::borrow(&yielded), index);
        }
        self
    }

    /// Returns a deferred handle for `my_each_with_index`.
    fn my_each_with_index_enumerator(&self) -> Enumerator<'_, Self> {
        Enumerator::new(self, Method::EachWithIndex)
    }

    /// Keeps the elements satisfying the call's block or matcher.
    ///
    /// The selection has the source's container kind: sequences and ranges
    /// select into a `Vec`, an [`OrderedHash`](crate::OrderedHash) into an
    /// `OrderedHash`. With neither a block nor a matcher, returns a
    /// [`Selected::Deferred`] handle.
    ///
    /// # Errors
    ///
    /// Rejects invalid call-site arguments (see [`Args::into_predicate`]) and
    /// propagates the first predicate failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerables::{Args, Combinators, ordered_hash};
    ///
    /// let codes = ordered_hash! { "kenya" => 254, "uganda" => 256 };
    /// let kenya = codes
    ///     .my_select(Args::block(|(country, _): &(&str, i32)| country.contains("kenya")))
    ///     .unwrap();
    /// assert_eq!(kenya.into_selection(), Some(ordered_hash! { "kenya" => 254 }));
    ///
    /// assert!(codes.my_select(Args::none()).unwrap().is_deferred());
    /// ```
    fn my_select<'m>(&self, args: Args<'m, Self::Item>) -> Result<Selected<'_, Self>, EnumerableError>
    where
        Self::Item: Element + PartialEq + Clone + 'm,
    {
        trace!(method = "my_select", "combinator");
        let Some(mut predicate) = args.into_predicate()? else {
            return Ok(Selected::Deferred(Enumerator::new(self, Method::Select)));
        };
        self.cursor()
            .filter_map(|yielded| {
                let element = Borrow::<Self::Item>::borrow(&yielded);
                match predicate.test(element) {
                    Ok(true) => Some(Ok(element.clone())),
                    Ok(false) => None,
                    Err(error) => Some(Err(error)),
                }
            })
            .collect::<Result<Self::Selection, _>>()
            .map(Selected::Ready)
    }

    /// Alias of [`my_select`](Self::my_select).
    ///
    /// # Errors
    ///
    /// Same as [`my_select`](Self::my_select).
    fn my_filter<'m>(&self, args: Args<'m, Self::Item>) -> Result<Selected<'_, Self>, EnumerableError>
    where
        Self::Item: Element + PartialEq + Clone + 'm,
    {
        self.my_select(args)
    }

    /// Collects `block` applied to every element.
    ///
    /// Always produces a `Vec`, mappings included.
    fn my_map<U, F>(&self, mut block: F) -> Vec<U>
    where
        F: FnMut(&Self::Item) -> U,
    {
        trace!(method = "my_map", "combinator");
        self.cursor()
            .map(|yielded| block(Borrow::<Self::Item>::borrow(&yielded)))
            .collect()
    }

    /// Returns a deferred handle for `my_map`.
    fn my_map_enumerator(&self) -> Enumerator<'_, Self> {
        Enumerator::new(self, Method::Map)
    }

    /// Counts elements.
    ///
    /// | Call | Counts |
    /// |---|---|
    /// | `Args::none()` | every element |
    /// | `Args::literal(value)` | elements equal to `value` |
    /// | `Args::block(f)` or another matcher | elements satisfying it |
    ///
    /// # Errors
    ///
    /// Rejects invalid call-site arguments and propagates predicate failures.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerables::{Args, Combinators};
    ///
    /// let numbers: Vec<i32> = (1..=10).collect();
    /// assert_eq!(numbers.my_count(Args::none()), Ok(10));
    /// assert_eq!(numbers.my_count(Args::literal(0)), Ok(0));
    /// assert_eq!(numbers.my_count(Args::block(|value: &i32| value % 2 == 0)), Ok(5));
    /// ```
    fn my_count<'m>(&self, args: Args<'m, Self::Item>) -> Result<usize, EnumerableError>
    where
        Self::Item: Element + PartialEq + 'm,
    {
        trace!(method = "my_count", "combinator");
        let Some(mut predicate) = args.into_predicate()? else {
            return Ok(self.cursor().count());
        };
        let mut count = 0;
        for yielded in self.cursor() {
            if predicate.test(Borrow::<Self::Item>::borrow(&yielded))? {
                count += 1;
            }
        }
        Ok(count)
    }

    /// Returns `true` when every element satisfies the call's predicate, or
    /// is truthy when none is given. `true` for an empty source.
    ///
    /// # Errors
    ///
    /// Rejects invalid call-site arguments and propagates predicate failures.
    fn my_all<'m>(&self, args: Args<'m, Self::Item>) -> Result<bool, EnumerableError>
    where
        Self::Item: Element + PartialEq + 'm,
    {
        trace!(method = "my_all", "combinator");
        let mut predicate = args.into_predicate()?.unwrap_or_else(Predicate::truthy);
        for yielded in self.cursor() {
            if !predicate.test(Borrow::<Self::Item>::borrow(&yielded))? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Returns `true` when some element satisfies the call's predicate, or
    /// is truthy when none is given. `false` for an empty source.
    ///
    /// # Errors
    ///
    /// Rejects invalid call-site arguments and propagates predicate failures.
    fn my_any<'m>(&self, args: Args<'m, Self::Item>) -> Result<bool, EnumerableError>
    where
        Self::Item: Element + PartialEq + 'm,
    {
        trace!(method = "my_any", "combinator");
        let mut predicate = args.into_predicate()?.unwrap_or_else(Predicate::truthy);
        for yielded in self.cursor() {
            if predicate.test(Borrow::<Self::Item>::borrow(&yielded))? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Returns `true` when no element satisfies the call's predicate, or is
    /// truthy when none is given. `true` for an empty source.
    ///
    /// # Errors
    ///
    /// Rejects invalid call-site arguments and propagates predicate failures.
    fn my_none<'m>(&self, args: Args<'m, Self::Item>) -> Result<bool, EnumerableError>
    where
        Self::Item: Element + PartialEq + 'm,
    {
        trace!(method = "my_none", "combinator");
        let mut predicate = args.into_predicate()?.unwrap_or_else(Predicate::truthy);
        for yielded in self.cursor() {
            if predicate.test(Borrow::<Self::Item>::borrow(&yielded))? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Folds the elements with `block`, seeded with the first element.
    ///
    /// # Errors
    ///
    /// Returns [`EnumerableError::EmptyReduction`] for an empty source.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerables::{Combinators, EnumerableError};
    ///
    /// assert_eq!(vec![1, 2, 3].my_inject(|sum, value| sum + value), Ok(6));
    /// assert_eq!(
    ///     Vec::<i32>::new().my_inject(|sum, value| sum + value),
    ///     Err(EnumerableError::EmptyReduction)
    /// );
    /// ```
    fn my_inject<F>(&self, mut block: F) -> Result<Self::Item, EnumerableError>
    where
        Self::Item: Clone,
        F: FnMut(Self::Item, &Self::Item) -> Self::Item,
    {
        trace!(method = "my_inject", "combinator");
        let mut cursor = self.cursor();
        let first = cursor.next().ok_or(EnumerableError::EmptyReduction)?;
        let seed = Borrow::<Self::Item>::borrow(&first).clone();
        Ok(cursor.fold(seed, |accumulator, yielded| {
            block(accumulator, Borrow::<Self::Item>::borrow(&yielded))
        }))
    }

    /// Folds the elements with `block`, starting from `seed`.
    ///
    /// An empty source returns `seed`.
    fn my_inject_from<B, F>(&self, seed: B, mut block: F) -> B
    where
        F: FnMut(B, &Self::Item) -> B,
    {
        trace!(method = "my_inject", "combinator");
        self.cursor().fold(seed, |accumulator, yielded| {
            block(accumulator, Borrow::<Self::Item>::borrow(&yielded))
        })
    }

    /// Folds the elements with a symbol [`Operator`], seeded with the first
    /// element.
    ///
    /// # Errors
    ///
    /// Returns [`EnumerableError::EmptyReduction`] for an empty source and
    /// propagates the first [`Operand::operate`] failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerables::{Combinators, Operator};
    ///
    /// let numbers = vec![1, 2, 3];
    /// assert_eq!(numbers.my_inject_with(":+".parse().unwrap()), Ok(6));
    /// assert_eq!(numbers.my_inject_with(Operator::Max), Ok(3));
    /// ```
    fn my_inject_with(&self, operator: Operator) -> Result<Self::Item, EnumerableError>
    where
        Self::Item: Operand + Clone,
    {
        trace!(method = "my_inject", %operator, "combinator");
        let mut cursor = self.cursor();
        let first = cursor.next().ok_or(EnumerableError::EmptyReduction)?;
        let seed = Borrow::<Self::Item>::borrow(&first).clone();
        cursor.try_fold(seed, |accumulator, yielded| {
            accumulator.operate(operator, Borrow::<Self::Item>::borrow(&yielded))
        })
    }

    /// Folds the elements with a symbol [`Operator`], starting from `seed`.
    ///
    /// # Errors
    ///
    /// Propagates the first [`Operand::operate`] failure.
    fn my_inject_from_with(
        &self,
        seed: Self::Item,
        operator: Operator,
    ) -> Result<Self::Item, EnumerableError>
    where
        Self::Item: Operand,
    {
        trace!(method = "my_inject", %operator, "combinator");
        self.cursor().try_fold(seed, |accumulator, yielded| {
            accumulator.operate(operator, Borrow::<Self::Item>::borrow(&yielded))
        })
    }

    /// Alias of [`my_inject`](Self::my_inject).
    ///
    /// # Errors
    ///
    /// Same as [`my_inject`](Self::my_inject).
    fn my_reduce<F>(&self, block: F) -> Result<Self::Item, EnumerableError>
    where
        Self::Item: Clone,
        F: FnMut(Self::Item, &Self::Item) -> Self::Item,
    {
        self.my_inject(block)
    }
}

impl<S: Enumerable + ?Sized> Combinators for S {}
