use std::iter::FusedIterator;

use crate::traits::{RandomAccessSequence, Sequence};

/// Single-traversal cursor over a sequence.
///
/// - `current` is `None` before the first successful `move_next` and after
///   exhaustion.
/// - Once `move_next` returns `false` it keeps returning `false`.
pub trait Cursor {
    type Item;

    fn current(&self) -> Option<&Self::Item>;
    fn move_next(&mut self) -> bool;
}

/// Adapts a [`Cursor`] into a standard iterator.
#[derive(Clone, Debug)]
pub struct Iter<C> {
    cursor: C,
}

impl<C> Iter<C> {
    pub fn new(cursor: C) -> Self {
        Self { cursor }
    }
}

impl<C> Iterator for Iter<C>
where
    C: Cursor,
    C::Item: Clone,
{
    type Item = C::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor.move_next() {
            self.cursor.current().cloned()
        } else {
            None
        }
    }
}

impl<C> FusedIterator for Iter<C>
where
    C: Cursor,
    C::Item: Clone,
{
}

/// Cursor over a borrowed slice.
#[derive(Clone, Debug)]
pub struct SliceCursor<'a, T> {
    rest: std::slice::Iter<'a, T>,
    current: Option<&'a T>,
}

impl<'a, T> SliceCursor<'a, T> {
    pub(crate) fn new(items: &'a [T]) -> Self {
        Self {
            rest: items.iter(),
            current: None,
        }
    }
}

impl<'a, T> Cursor for SliceCursor<'a, T> {
    type Item = &'a T;

    #[inline]
    fn current(&self) -> Option<&Self::Item> {
        self.current.as_ref()
    }

    #[inline]
    fn move_next(&mut self) -> bool {
        self.current = self.rest.next();
        self.current.is_some()
    }
}

/// Cursor that walks a random-access sequence by index.
pub struct IndexCursor<'a, S: Sequence> {
    seq: &'a S,
    next: usize,
    current: Option<S::Item>,
}

impl<'a, S: Sequence> IndexCursor<'a, S> {
    pub(crate) fn new(seq: &'a S) -> Self {
        Self {
            seq,
            next: 0,
            current: None,
        }
    }
}

impl<S: RandomAccessSequence> Cursor for IndexCursor<'_, S> {
    type Item = S::Item;

    #[inline]
    fn current(&self) -> Option<&Self::Item> {
        self.current.as_ref()
    }

    fn move_next(&mut self) -> bool {
        if self.next >= self.seq.len() {
            self.current = None;
            return false;
        }
        self.current = self.seq.get(self.next);
        self.next += 1;
        self.current.is_some()
    }
}
