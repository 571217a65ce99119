//! Enumerable sources.
//!
//! This module provides the [`Enumerable`] trait, the single capability every
//! combinator is written against: a fresh cursor that produces the elements
//! of a collection in their natural order.
//!
//! Three shapes of source are supported:
//!
//! - positionally ordered sequences: `Vec<T>`, `[T; N]` and `[T]`
//! - integer ranges: `Range<I>` and `RangeInclusive<I>` for every primitive
//!   integer type, produced in ascending order
//! - insertion-ordered mappings: [`OrderedHash<K, V>`], whose elements are
//!   `(K, V)` entries
//!
//! # Borrowed and produced elements
//!
//! Sequences hand out references to stored elements while ranges produce
//! their elements on the fly. Generic associated types let both fit one
//! protocol: [`Enumerable::Yield`] is whatever the cursor produces, and it
//! always borrows as [`Enumerable::Item`].
//!
//! ```rust
//! use enumerables::Enumerable;
//! use std::borrow::Borrow;
//!
//! fn sum<S: Enumerable<Item = i32> + ?Sized>(source: &S) -> i32 {
//!     source
//!         .cursor()
//!         .map(|yielded| *Borrow::<i32>::borrow(&yielded))
//!         .sum()
//! }
//!
//! assert_eq!(sum(&vec![1, 2, 3]), 6);
//! assert_eq!(sum(&(1_i32..=3)), 6);
//! assert_eq!(sum(&[1, 2, 3][..]), 6);
//! ```

mod ordered_hash;

pub use ordered_hash::{OrderedHash, OrderedHashIntoIterator};

use std::borrow::{Borrow, Cow};
use std::ops::{Range, RangeInclusive};

use crate::element::Element;

/// A source whose elements can be enumerated in order.
///
/// # Laws
///
/// - **Restartable**: every call to [`cursor`](Enumerable::cursor) starts
///   from the first element; the source itself is never consumed.
/// - **Ordered**: the cursor produces elements in the source's natural order
///   (position for sequences, ascending for ranges, insertion for mappings).
/// - **Finite**: the cursor terminates.
///
/// # Examples
///
/// ```rust
/// use enumerables::{Enumerable, OrderedHash};
///
/// let codes: OrderedHash<&str, i32> = [("kenya", 254), ("uganda", 256)].into_iter().collect();
/// let keys: Vec<&str> = codes.cursor().map(|(key, _)| *key).collect();
/// assert_eq!(keys, vec!["kenya", "uganda"]);
///
/// assert_eq!((0_i32..3).cursor().collect::<Vec<_>>(), vec![0, 1, 2]);
/// ```
pub trait Enumerable {
    /// The element type a combinator's callbacks see.
    type Item;

    /// What the cursor produces: a reference into the source, or a value.
    type Yield<'a>: Borrow<Self::Item>
    where
        Self: 'a;

    /// The cursor over the source's elements.
    type Cursor<'a>: Iterator<Item = Self::Yield<'a>> + Clone
    where
        Self: 'a;

    /// The container `my_select` builds for this source.
    type Selection: FromIterator<Self::Item>;

    /// Returns a cursor positioned before the first element.
    fn cursor(&self) -> Self::Cursor<'_>;
}

impl<T> Enumerable for [T] {
    type Item = T;
    type Yield<'a>
        = &'a T
    where
        Self: 'a;
    type Cursor<'a>
        = std::slice::Iter<'a, T>
    where
        Self: 'a;
    type Selection = Vec<T>;

    #[inline]
    fn cursor(&self) -> Self::Cursor<'_> {
        self.iter()
    }
}

impl<T> Enumerable for Vec<T> {
    type Item = T;
    type Yield<'a>
        = &'a T
    where
        Self: 'a;
    type Cursor<'a>
        = std::slice::Iter<'a, T>
    where
        Self: 'a;
    type Selection = Self;

    #[inline]
    fn cursor(&self) -> Self::Cursor<'_> {
        self.iter()
    }
}

impl<T, const N: usize> Enumerable for [T; N] {
    type Item = T;
    type Yield<'a>
        = &'a T
    where
        Self: 'a;
    type Cursor<'a>
        = std::slice::Iter<'a, T>
    where
        Self: 'a;
    type Selection = Vec<T>;

    #[inline]
    fn cursor(&self) -> Self::Cursor<'_> {
        self.iter()
    }
}

macro_rules! range_enumerable {
    ($($integer:ty),*) => {
        $(
            impl Enumerable for Range<$integer> {
                type Item = $integer;
                type Yield<'a> = $integer;
                type Cursor<'a> = Self;
                type Selection = Vec<$integer>;

                #[inline]
                fn cursor(&self) -> Self::Cursor<'_> {
                    self.clone()
                }
            }

            impl Element for Range<$integer> {
                fn text(&self) -> Option<Cow<'_, str>> {
                    Some(Cow::Owned(format!("{}..{}", self.start, self.end)))
                }
            }

            impl Enumerable for RangeInclusive<$integer> {
                type Item = $integer;
                type Yield<'a> = $integer;
                type Cursor<'a> = Self;
                type Selection = Vec<$integer>;

                #[inline]
                fn cursor(&self) -> Self::Cursor<'_> {
                    self.clone()
                }
            }

            impl Element for RangeInclusive<$integer> {
                fn text(&self) -> Option<Cow<'_, str>> {
                    Some(Cow::Owned(format!("{}..={}", self.start(), self.end())))
                }
            }
        )*
    };
}

range_enumerable!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
