use crate::cursor::Cursor;
use crate::impls::filtered::Filtered;
use crate::traits::{Sequence, Visit};

/// `map` over a sequence without random access.
#[derive(Clone, Debug)]
pub struct Mapped<S, F> {
    parent: S,
    f: F,
}

impl<S, F> Mapped<S, F> {
    pub(crate) fn new(parent: S, f: F) -> Self {
        Self { parent, f }
    }
}

pub struct MappedCursor<'a, S: Sequence + 'a, F, U> {
    parent: S::Cursor<'a>,
    f: &'a F,
    index: usize,
    current: Option<U>,
}

impl<'a, S, F, U> Cursor for MappedCursor<'a, S, F, U>
where
    S: Sequence + 'a,
    F: Fn(S::Item, usize) -> U,
{
    type Item = U;

    #[inline]
    fn current(&self) -> Option<&Self::Item> {
        self.current.as_ref()
    }

    fn move_next(&mut self) -> bool {
        self.current = None;
        if !self.parent.move_next() {
            return false;
        }
        if let Some(item) = self.parent.current() {
            self.current = Some((self.f)(item.clone(), self.index));
            self.index += 1;
        }
        self.current.is_some()
    }
}

impl<S, U, F> Sequence for Mapped<S, F>
where
    S: Sequence,
    U: Clone,
    F: Fn(S::Item, usize) -> U,
{
    type Item = U;

    type Cursor<'a>
        = MappedCursor<'a, S, F, U>
    where
        Self: 'a;

    type Map<V, G>
        = Mapped<Self, G>
    where
        V: Clone,
        G: Fn(Self::Item, usize) -> V;

    type Filter<P>
        = Filtered<Self, P>
    where
        P: Fn(&Self::Item, usize) -> bool;

    fn cursor(&self) -> Self::Cursor<'_> {
        MappedCursor {
            parent: self.parent.cursor(),
            f: &self.f,
            index: 0,
            current: None,
        }
    }

    fn map<V, G>(self, f: G) -> Self::Map<V, G>
    where
        V: Clone,
        G: Fn(Self::Item, usize) -> V,
    {
        Mapped::new(self, f)
    }

    fn filter<P>(self, predicate: P) -> Self::Filter<P>
    where
        P: Fn(&Self::Item, usize) -> bool,
    {
        Filtered::new(self, predicate)
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
}
