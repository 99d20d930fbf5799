use crate::cursor::Cursor;
use crate::impls::filtered::Filtered;
use crate::impls::mapped::Mapped;
use crate::traits::{Sequence, Visit, breaks};

/// The first `count` elements of a sequence.
#[derive(Clone, Debug)]
pub struct Take<S> {
    parent: S,
    count: usize,
}

impl<S> Take<S> {
    pub(crate) fn new(parent: S, count: usize) -> Self {
        Self { parent, count }
    }

    pub fn count(&self) -> usize {
        self.count
    }
}

/// Stops once `remaining` hits zero or the parent runs dry, whichever is first.
pub struct TakeCursor<'a, S: Sequence + 'a> {
    parent: S::Cursor<'a>,
    remaining: usize,
    exhausted: bool,
}

impl<'a, S: Sequence + 'a> Cursor for TakeCursor<'a, S> {
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
        if self.exhausted || self.remaining == 0 || !self.parent.move_next() {
            self.exhausted = true;
            return false;
        }
        self.remaining -= 1;
        true
    }
}

impl<S: Sequence> Sequence for Take<S> {
    type Item = S::Item;

    type Cursor<'a>
        = TakeCursor<'a, S>
    where
        Self: 'a;

    type Map<U, F>
        = Mapped<Self, F>
    where
        U: Clone,
        F: Fn(Self::Item, usize) -> U;

    type Filter<P>
        = Filtered<Self, P>
    where
        P: Fn(&Self::Item, usize) -> bool;

    fn cursor(&self) -> Self::Cursor<'_> {
        TakeCursor {
            parent: self.parent.cursor(),
            remaining: self.count,
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

    fn filter<P>(self, predicate: P) -> Self::Filter<P>
    where
        P: Fn(&Self::Item, usize) -> bool,
    {
        Filtered::new(self, predicate)
    }

    /// `true` only when exactly `count` elements were produced and the
    /// visitor never stopped, including on the last one.
    fn each<R, V>(&self, mut visit: V) -> bool
    where
        R: Into<Visit>,
        V: FnMut(Self::Item, usize) -> R,
    {
        if self.count == 0 {
            return true;
        }
        let mut produced = 0;
        let mut stopped = false;
        self.parent.each(|item, index| {
            stopped = breaks(visit(item, index));
            produced += 1;
            if stopped || produced == self.count {
                Visit::Break
            } else {
                Visit::Continue
            }
        });
        produced == self.count && !stopped
    }
}
