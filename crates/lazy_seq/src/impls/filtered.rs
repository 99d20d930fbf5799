use crate::cursor::Cursor;
use crate::impls::mapped::Mapped;
use crate::traits::{Sequence, Visit, breaks};

/// `filter` over a sequence without random access.
#[derive(Clone, Debug)]
pub struct Filtered<S, P> {
    parent: S,
    predicate: P,
}

impl<S, P> Filtered<S, P> {
    pub(crate) fn new(parent: S, predicate: P) -> Self {
        Self { parent, predicate }
    }
}

pub struct FilteredCursor<'a, S: Sequence + 'a, P> {
    parent: S::Cursor<'a>,
    predicate: &'a P,
    parent_index: usize,
    exhausted: bool,
}

impl<'a, S, P> Cursor for FilteredCursor<'a, S, P>
where
    S: Sequence + 'a,
    P: Fn(&S::Item, usize) -> bool,
{
    type Item = S::Item;

    #[inline]
    fn current(&self) -> Option<&Self::Item> {
        if self.exhausted {
            None
        } else {
            self.parent.current()
        }
    }

    fn move_next(&mut self) -> bool {
        if self.exhausted {
            return false;
        }
        while self.parent.move_next() {
            let index = self.parent_index;
            self.parent_index += 1;
            let predicate = self.predicate;
            if self
                .parent
                .current()
                .is_some_and(|item| predicate(item, index))
            {
                return true;
            }
        }
        self.exhausted = true;
        false
    }
}

impl<S, P> Sequence for Filtered<S, P>
where
    S: Sequence,
    P: Fn(&S::Item, usize) -> bool,
{
    type Item = S::Item;

    type Cursor<'a>
        = FilteredCursor<'a, S, P>
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
        FilteredCursor {
            parent: self.parent.cursor(),
            predicate: &self.predicate,
            parent_index: 0,
            exhausted: false,
        }
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
        let mut index = 0;
        self.parent.each(|item, parent_index| {
            if !(self.predicate)(&item, parent_index) {
                return Visit::Continue;
            }
            let stop = breaks(visit(item, index));
            index += 1;
            if stop { Visit::Break } else { Visit::Continue }
        })
    }
}
