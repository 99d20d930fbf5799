use crate::cursor::{IndexCursor, SliceCursor};
use crate::impls::filtered::Filtered;
use crate::impls::indexed::{IndexFilterCursor, IndexedFiltered, IndexedMapped};
use crate::impls::mapped::Mapped;
use crate::traits::{RandomAccessSequence, Sequence, Visit, breaks};

/// Root sequence over a borrowed slice.
#[derive(Debug)]
pub struct ArrayWrapper<'a, T> {
    items: &'a [T],
}

impl<T> Clone for ArrayWrapper<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ArrayWrapper<'_, T> {}

impl<'a, T> ArrayWrapper<'a, T> {
    pub fn new(items: &'a [T]) -> Self {
        Self { items }
    }

    pub fn as_slice(&self) -> &'a [T] {
        self.items
    }
}

impl<'a, T> Sequence for ArrayWrapper<'a, T> {
    type Item = &'a T;

    type Cursor<'b>
        = SliceCursor<'a, T>
    where
        Self: 'b;

    type Map<U, F>
        = MappedArrayWrapper<'a, T, F>
    where
        U: Clone,
        F: Fn(Self::Item, usize) -> U;

    type Filter<P>
        = FilteredArrayWrapper<'a, T, P>
    where
        P: Fn(&Self::Item, usize) -> bool;

    fn cursor(&self) -> Self::Cursor<'_> {
        SliceCursor::new(self.items)
    }

    fn map<U, F>(self, f: F) -> Self::Map<U, F>
    where
        U: Clone,
        F: Fn(Self::Item, usize) -> U,
    {
        MappedArrayWrapper {
            source: self,
            f,
        }
    }

    fn filter<P>(self, predicate: P) -> Self::Filter<P>
    where
        P: Fn(&Self::Item, usize) -> bool,
    {
        FilteredArrayWrapper {
            source: self,
            predicate,
        }
    }

    fn each<R, V>(&self, mut visit: V) -> bool
    where
        R: Into<Visit>,
        V: FnMut(Self::Item, usize) -> R,
    {
        for (index, item) in self.items.iter().enumerate() {
            if breaks(visit(item, index)) {
                return false;
            }
        }
        true
    }

    #[inline]
    fn get(&self, index: usize) -> Option<Self::Item> {
        self.items.get(index)
    }
}

impl<T> RandomAccessSequence for ArrayWrapper<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.items.len()
    }
}

/// `map` applied directly to a root; reads the backing slice itself.
#[derive(Clone, Debug)]
pub struct MappedArrayWrapper<'a, T, F> {
    source: ArrayWrapper<'a, T>,
    f: F,
}

impl<'a, T, U, F> Sequence for MappedArrayWrapper<'a, T, F>
where
    U: Clone,
    F: Fn(&'a T, usize) -> U,
{
    type Item = U;

    type Cursor<'b>
        = IndexCursor<'b, Self>
    where
        Self: 'b;

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
        for (index, item) in self.source.as_slice().iter().enumerate() {
            if breaks(visit((self.f)(item, index), index)) {
                return false;
            }
        }
        true
    }

    #[inline]
    fn get(&self, index: usize) -> Option<Self::Item> {
        self.source
            .as_slice()
            .get(index)
            .map(|item| (self.f)(item, index))
    }
}

impl<'a, T, U, F> RandomAccessSequence for MappedArrayWrapper<'a, T, F>
where
    U: Clone,
    F: Fn(&'a T, usize) -> U,
{
    #[inline]
    fn len(&self) -> usize {
        self.source.len()
    }
}

/// `filter` applied directly to a root; scans the backing slice itself.
#[derive(Clone, Debug)]
pub struct FilteredArrayWrapper<'a, T, P> {
    source: ArrayWrapper<'a, T>,
    predicate: P,
}

impl<'a, T, P> Sequence for FilteredArrayWrapper<'a, T, P>
where
    P: Fn(&&'a T, usize) -> bool,
{
    type Item = &'a T;

    type Cursor<'b>
        = IndexFilterCursor<'b, ArrayWrapper<'a, T>, P>
    where
        Self: 'b;

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
        IndexFilterCursor::new(&self.source, &self.predicate)
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
        for (index, item) in self.source.as_slice().iter().enumerate() {
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
