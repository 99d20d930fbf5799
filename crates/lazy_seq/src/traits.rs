use crate::cursor::{Cursor, Iter};
use crate::impls::take::Take;

/// Count used by [`Sequence::take`] when the count is omitted (`None`).
pub const DEFAULT_TAKE_COUNT: usize = 1;

/// What a visitor wants the traversal to do next.
///
/// Visitors may return `()` (always continue) or `bool`, where only `false`
/// stops the traversal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visit {
    Continue,
    Break,
}

impl Visit {
    #[inline]
    pub fn is_break(self) -> bool {
        self == Visit::Break
    }
}

/// Whether a visitor's return value asks to stop.
#[inline]
pub(crate) fn breaks<R: Into<Visit>>(flow: R) -> bool {
    let flow: Visit = flow.into();
    flow.is_break()
}

impl From<()> for Visit {
    #[inline]
    fn from(_: ()) -> Self {
        Visit::Continue
    }
}

impl From<bool> for Visit {
    #[inline]
    fn from(keep_going: bool) -> Self {
        if keep_going {
            Visit::Continue
        } else {
            Visit::Break
        }
    }
}

/// Lazy, restartable sequence.
///
/// - A sequence stores only its recipe (parent + closures); elements are
///   produced on demand by [`Sequence::each`] or a fresh [`Cursor`].
/// - Indices handed to visitors and closures are 0-based and dense for the
///   sequence that produces them.
/// - `map`/`filter` outputs are chosen by the implementor, so random-access
///   sources can keep index-aware wrappers.
pub trait Sequence: Sized {
    type Item: Clone;

    type Cursor<'a>: Cursor<Item = Self::Item>
    where
        Self: 'a;

    type Map<U, F>: Sequence<Item = U>
    where
        U: Clone,
        F: Fn(Self::Item, usize) -> U;

    type Filter<P>: Sequence<Item = Self::Item>
    where
        P: Fn(&Self::Item, usize) -> bool;

    /// Starts a fresh traversal.
    fn cursor(&self) -> Self::Cursor<'_>;

    fn map<U, F>(self, f: F) -> Self::Map<U, F>
    where
        U: Clone,
        F: Fn(Self::Item, usize) -> U;

    /// The predicate sees the parent's index, not the filtered one.
    fn filter<P>(self, predicate: P) -> Self::Filter<P>
    where
        P: Fn(&Self::Item, usize) -> bool;

    /// At most `count` leading elements. `take(0)` is empty.
    fn take(self, count: usize) -> Take<Self> {
        Take::new(self, count)
    }

    /// Like [`Sequence::take`], with `None` meaning [`DEFAULT_TAKE_COUNT`].
    fn take_or_default(self, count: Option<usize>) -> Take<Self> {
        self.take(count.unwrap_or(DEFAULT_TAKE_COUNT))
    }

    /// Calls `visit(element, index)` in order.
    ///
    /// Returns `false` as soon as the visitor breaks, `true` if every element
    /// was visited.
    fn each<R, V>(&self, mut visit: V) -> bool
    where
        R: Into<Visit>,
        V: FnMut(Self::Item, usize) -> R,
    {
        let mut cursor = self.cursor();
        let mut index = 0;
        while cursor.move_next() {
            let Some(item) = cursor.current() else {
                break;
            };
            if breaks(visit(item.clone(), index)) {
                return false;
            }
            index += 1;
        }
        true
    }

    /// `O(index)` unless the implementor has random access.
    fn get(&self, index: usize) -> Option<Self::Item> {
        let mut found = None;
        self.each(|item, i| {
            if i == index {
                found = Some(item);
                Visit::Break
            } else {
                Visit::Continue
            }
        });
        found
    }

    fn first(&self) -> Option<Self::Item> {
        self.get(0)
    }

    fn iter(&self) -> Iter<Self::Cursor<'_>> {
        Iter::new(self.cursor())
    }

    fn to_vec(&self) -> Vec<Self::Item> {
        let mut items = Vec::new();
        self.each(|item, _| items.push(item));
        items
    }
}

/// Sequence with `O(1)` length and `O(1)` [`Sequence::get`].
///
/// `get(i)` must agree with what `each` yields at position `i`, and `len()`
/// with the number of elements `each` yields.
pub trait RandomAccessSequence: Sequence {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
