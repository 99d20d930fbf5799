use crate::cursor::{Cursor, IndexCursor};
use crate::impls::filtered::Filtered;
use crate::impls::mapped::Mapped;
use crate::traits::{RandomAccessSequence, Sequence, Visit, breaks};

/// `map` over a random-access parent; keeps `O(1)` `get` and `len`.
#[derive(Clone, Debug)]
pub struct IndexedMapped<S, F> {
    parent: S,
    f: F,
}

impl<S, F> IndexedMapped<S, F> {
    pub(crate) fn new(parent: S, f: F) -> Self {
        Self { parent, f }
    }
}

impl<S, U, F> Sequence for IndexedMapped<S, F>
where
    S: RandomAccessSequence,
    U: Clone,
    F: Fn(S::Item, usize) -> U,
{
    type Item = U;

    type Cursor<'a>
        = IndexCursor<'a, Self>
    where
        Self: 'a;

    type Map<V, G>
        = IndexedMapped<Self, G>
    where
        V: Clone,
        G: Fn(Self::Item, usize) -> V;

    type Filter<P>
        = IndexedFiltered<Self, P>
    where
        P: Fn(&Self::Item, usize) -> bool;

    fn cursor(&self) -> Self::Cursor<'_> {
        IndexCursor::new(self)
    }

    fn map<V, G>(self, f: G) -> Self::Map<V, G>
    where
        V: Clone,
        G: Fn(Self::Item, usize) -> V,
    {
        IndexedMapped::new(self, f)
    }

    fn filter<P>(self, predicate: P) -> Self::Filter<P>
    where
        P: Fn(&Self::Item, usize) -> bool,
    {
        IndexedFiltered::new(self, predicate)
    }

    fn each<R, V>(&self, mut visit: V) -> bool
    where
        R: Into<Visit>,
        V: FnMut(Self::Item, usize) -> R,
    {
        self.parent.each(|item, index| -> Visit {
            visit((self.f)(item, index), index).into()
        })
    }

    #[inline]
    fn get(&self, index: usize) -> Option<Self::Item> {
        if index >= self.parent.len() {
            return None;
        }
        self.parent.get(index).map(|item| (self.f)(item, index))
    }
}

impl<S, U, F> RandomAccessSequence for IndexedMapped<S, F>
where
    S: RandomAccessSequence,
    U: Clone,
    F: Fn(S::Item, usize) -> U,
{
    #[inline]
    fn len(&self) -> usize {
        self.parent.len()
    }
}

/// `filter` over a random-access parent.
///
/// Walks the parent's indices instead of a parent cursor. The output has no
/// random access: which source index backs output `j` is only known after a
/// scan, so `get` is the `O(j)` default.
#[derive(Clone, Debug)]
pub struct IndexedFiltered<S, P> {
    parent: S,
    predicate: P,
}

impl<S, P> IndexedFiltered<S, P> {
    pub(crate) fn new(parent: S, predicate: P) -> Self {
        Self { parent, predicate }
    }
}

pub struct IndexFilterCursor<'a, S: Sequence, P> {
    parent: &'a S,
    predicate: &'a P,
    next: usize,
    current: Option<S::Item>,
}

impl<'a, S: Sequence, P> IndexFilterCursor<'a, S, P> {
    pub(crate) fn new(parent: &'a S, predicate: &'a P) -> Self {
        Self {
            parent,
            predicate,
            next: 0,
            current: None,
        }
    }
}

impl<S, P> Cursor for IndexFilterCursor<'_, S, P>
where
    S: RandomAccessSequence,
    P: Fn(&S::Item, usize) -> bool,
{
    type Item = S::Item;

    #[inline]
    fn current(&self) -> Option<&Self::Item> {
        self.current.as_ref()
    }

    fn move_next(&mut self) -> bool {
        self.current = None;
        let len = self.parent.len();
        while self.next < len {
            let index = self.next;
            self.next += 1;
            if let Some(item) = self.parent.get(index) {
                if (self.predicate)(&item, index) {
                    self.current = Some(item);
                    return true;
                }
            }
        }
        false
    }
}

impl<S, P> Sequence for IndexedFiltered<S, P>
where
    S: RandomAccessSequence,
    P: Fn(&S::Item, usize) -> bool,
{
    type Item = S::Item;

    type Cursor<'a>
        = IndexFilterCursor<'a, S, P>
    where
        Self: 'a;

    type Map<U, F>
        = Mapped<Self, F>
    where
        U: Clone,
        F: Fn(Self::Item, usize) -> U;

    type Filter<Q>
        = Filtered<Self, Q>
    where
        Q: Fn(&Self::Item, usize) -> bool;

    fn cursor(&self) -> Self::Cursor<'_> {
        IndexFilterCursor::new(&self.parent, &self.predicate)
    }

    fn map<U, F>(self, f: F) -> Self::Map<U, F>
    where
        U: Clone,
        F: Fn(Self::Item, usize) -> U,
    {
        Mapped::new(self, f)
    }

    fn filter<Q>(self, predicate: Q) -> Self::Filter<Q>
    where
        Q: Fn(&Self::Item, usize) -> bool,
    {
        Filtered::new(self, predicate)
    }

    fn each<R, V>(&self, mut visit: V) -> bool
    where
        R: Into<Visit>,
        V: FnMut(Self::Item, usize) -> R,
    {
        let mut j = 0;
        for index in 0..self.parent.len() {
            let Some(item) = self.parent.get(index) else {
                continue;
            };
            if !(self.predicate)(&item, index) {
                continue;
            }
            if breaks(visit(item, j)) {
                return false;
            }
            j += 1;
        }
        true
    }
}
