//! Deferred enumerator handles.

use std::borrow::Borrow;
use std::fmt;

use super::Combinators;
use crate::element::{Element, describe};
use crate::source::Enumerable;

/// The combinator a deferred [`Enumerator`] was created for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// `my_each`
    Each,
    /// `my_each_with_index`
    EachWithIndex,
    /// `my_select`
    Select,
    /// `my_map`
    Map,
}

impl Method {
    /// Returns the combinator name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Each => "my_each",
            Self::EachWithIndex => "my_each_with_index",
            Self::Select => "my_select",
            Self::Map => "my_map",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

/// A restartable cursor over a source, returned when a combinator is
/// called without a block.
///
/// The handle can be driven step by step as an [`Iterator`], or executed
/// with a block through [`my_each`](Self::my_each),
/// [`my_each_with_index`](Self::my_each_with_index), [`my_select`](Self::my_select)
/// and [`my_map`](Self::my_map). Execution always
/// re-traverses the source from its first element and leaves the cursor
/// where it was.
///
/// # Examples
///
/// ```rust
/// use enumerables::{Combinators, Method};
///
/// let numbers = vec![1, 2, 3];
/// let mut enumerator = numbers.my_each_enumerator();
///
/// assert_eq!(enumerator.method(), Method::Each);
/// assert_eq!(enumerator.to_string(), "#<Enumerator: [1, 2, 3]:my_each>");
///
/// assert_eq!(enumerator.next(), Some(&1));
/// assert_eq!(enumerator.peek(), Some(&2));
/// assert_eq!(enumerator.position(), 1);
///
/// assert_eq!(enumerator.my_map(|value| value * 2), vec![2, 4, 6]);
/// assert_eq!(enumerator.position(), 1);
///
/// enumerator.rewind();
/// assert_eq!(enumerator.collect::<Vec<_>>(), vec![&1, &2, &3]);
/// ```
pub struct Enumerator<'a, S>
where
    S: Enumerable + ?Sized + 'a,
{
    source: &'a S,
    method: Method,
    cursor: S::Cursor<'a>,
    position: usize,
}

impl<'a, S> Enumerator<'a, S>
where
    S: Enumerable + ?Sized + 'a,
{
    /// Creates a handle positioned before the first element of `source`.
    #[must_use]
    pub fn new(source: &'a S, method: Method) -> Self {
        Self {
            source,
            method,
            cursor: source.cursor(),
            position: 0,
        }
    }

    /// The source this handle enumerates.
    #[must_use]
    pub const fn source(&self) -> &'a S {
        self.source
    }

    /// The combinator this handle was created for.
    #[must_use]
    pub const fn method(&self) -> Method {
        self.method
    }

    /// Number of elements consumed through the cursor.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Returns `true` when the cursor has another element.
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.peek().is_some()
    }

    /// Returns the next element without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<S::Yield<'a>> {
        self.cursor.clone().next()
    }

    /// Moves the cursor back before the first element.
    pub fn rewind(&mut self) -> &mut Self {
        self.cursor = self.source.cursor();
        self.position = 0;
        self
    }

    /// Number of elements in the source, independent of the cursor.
    #[must_use]
    pub fn size(&self) -> usize {
        self.source.cursor().count()
    }

    /// Runs `block` for every element of the source and returns the source.
    pub fn my_each<F>(&self, block: F) -> &'a S
    where
        F: FnMut(&S::Item),
    {
        self.source.my_each(block)
    }

    /// Runs `block` with every element and its index and returns the source.
    pub fn my_each_with_index<F>(&self, block: F) -> &'a S
    where
        F: FnMut(&S::Item, usize),
    {
        self.source.my_each_with_index(block)
    }

    /// Collects the elements for which `block` returns `true`.
    pub fn my_select<F>(&self, mut block: F) -> S::Selection
    where
        F: FnMut(&S::Item) -> bool,
        S::Item: Clone,
    {
        self.source
            .cursor()
            .filter_map(|yielded| {
                let element = Borrow::<S::Item>::borrow(&yielded);
                block(element).then(|| element.clone())
            })
            .collect()
    }

    /// Collects the results of `block` for every element.
    pub fn my_map<U, F>(&self, block: F) -> Vec<U>
    where
        F: FnMut(&S::Item) -> U,
    {
        self.source.my_map(block)
    }
}

impl<'a, S> Iterator for Enumerator<'a, S>
where
    S: Enumerable + ?Sized + 'a,
{
    type Item = S::Yield<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let yielded = self.cursor.next()?;
        self.position += 1;
        Some(yielded)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.cursor.size_hint()
    }
}

impl<'a, S> Clone for Enumerator<'a, S>
where
    S: Enumerable + ?Sized + 'a,
{
    fn clone(&self) -> Self {
        Self {
            source: self.source,
            method: self.method,
            cursor: self.cursor.clone(),
            position: self.position,
        }
    }
}

impl<'a, S> fmt::Debug for Enumerator<'a, S>
where
    S: Enumerable + ?Sized + 'a,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Enumerator")
            .field("method", &self.method)
            .field("position", &self.position)
            .finish_non_exhaustive()
    }
}

impl<'a, S> fmt::Display for Enumerator<'a, S>
where
    S: Enumerable + Element + ?Sized + 'a,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "#<Enumerator: {}:{}>",
            describe(self.source),
            self.method
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ordered_hash;
    use crate::source::OrderedHash;
    use rstest::rstest;
    use static_assertions::assert_impl_all;

    assert_impl_all!(Enumerator<'static, Vec<i32>>: Clone, Iterator, fmt::Debug, fmt::Display);
    assert_impl_all!(Enumerator<'static, [u8]>: Clone, Iterator);
    assert_impl_all!(Method: Copy, Send, Sync);

    #[rstest]
    #[case(Method::Each, "my_each")]
    #[case(Method::EachWithIndex, "my_each_with_index")]
    #[case(Method::Select, "my_select")]
    #[case(Method::Map, "my_map")]
    fn test_method_names(#[case] method: Method, #[case] expected: &str) {
        assert_eq!(method.to_string(), expected);
    }

    #[rstest]
    fn test_cursor_operations() {
        let range = 1_i32..=3;
        let mut enumerator = Enumerator::new(&range, Method::Each);

        assert_eq!(enumerator.size(), 3);
        assert!(enumerator.has_next());
        assert_eq!(enumerator.peek(), Some(1));
        assert_eq!(enumerator.position(), 0);

        assert_eq!(enumerator.next(), Some(1));
        assert_eq!(enumerator.next(), Some(2));
        assert_eq!(enumerator.position(), 2);
        assert_eq!(enumerator.next(), Some(3));
        assert!(!enumerator.has_next());
        assert_eq!(enumerator.next(), None);
        assert_eq!(enumerator.position(), 3);

        enumerator.rewind();
        assert_eq!(enumerator.position(), 0);
        assert_eq!(enumerator.peek(), Some(1));
    }

    #[rstest]
    fn test_execution_restarts_from_source() {
        let numbers = vec![1, 2, 3, 4];
        let mut enumerator = Enumerator::new(&numbers, Method::Select);
        enumerator.next();
        enumerator.next();

        let first = enumerator.my_select(|value| value % 2 == 0);
        let second = enumerator.my_select(|value| value % 2 == 0);
        assert_eq!(first, vec![2, 4]);
        assert_eq!(first, second);
        assert_eq!(enumerator.position(), 2);
    }

    #[rstest]
    fn test_each_returns_source_and_repeats_side_effects() {
        let words = vec!["ant", "bear"];
        let enumerator = Enumerator::new(&words, Method::Each);

        let mut seen = Vec::new();
        let returned = enumerator.my_each(|word| seen.push(*word));
        assert!(std::ptr::eq(returned, &words));
        enumerator.my_each(|word| seen.push(*word));
        assert_eq!(seen, vec!["ant", "bear", "ant", "bear"]);
    }

    #[rstest]
    fn test_each_with_index_and_map() {
        let codes: OrderedHash<&str, i32> = ordered_hash! { "kenya" => 254, "uganda" => 256 };
        let enumerator = Enumerator::new(&codes, Method::EachWithIndex);

        let mut indexed = Vec::new();
        enumerator.my_each_with_index(|(country, _), index| indexed.push((index, *country)));
        assert_eq!(indexed, vec![(0, "kenya"), (1, "uganda")]);
        assert_eq!(enumerator.my_map(|(_, code)| code + 1), vec![255, 257]);
    }

    #[rstest]
    fn test_display_shows_source_and_method() {
        let range = 0_i32..=10;
        assert_eq!(
            Enumerator::new(&range, Method::Map).to_string(),
            "#<Enumerator: 0..=10:my_map>"
        );

        let codes: OrderedHash<&str, i32> = ordered_hash! { "kenya" => 254 };
        assert_eq!(
            Enumerator::new(&codes, Method::Select).to_string(),
            "#<Enumerator: {kenya => 254}:my_select>"
        );
    }

    #[rstest]
    fn test_clone_keeps_cursor_position() {
        let numbers = [10, 20, 30];
        let mut enumerator = Enumerator::new(&numbers, Method::Each);
        enumerator.next();

        let mut copy = enumerator.clone();
        assert_eq!(copy.position(), 1);
        assert_eq!(copy.next(), Some(&20));
        assert_eq!(enumerator.peek(), Some(&20));
        assert_eq!(
            format!("{enumerator:?}"),
            "Enumerator { method: Each, position: 1, .. }"
        );
    }
}
