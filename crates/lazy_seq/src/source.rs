use std::collections::{HashSet, VecDeque};

use crate::error::{Error, Result, SourceKind};
use crate::impls::array::ArrayWrapper;

/// A collection handed to [`crate::lazy`].
///
/// Only finite, ordered, indexable storage can back a root sequence; the
/// other variants exist so callers holding them get a typed refusal.
pub enum Source<'a, T> {
    Slice(&'a [T]),
    Deque(&'a VecDeque<T>),
    Stream(Box<dyn Iterator<Item = T> + 'a>),
    Unordered(Box<dyn Iterator<Item = &'a T> + 'a>),
}

impl<'a, T> Source<'a, T> {
    pub fn stream<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'a,
    {
        Source::Stream(Box::new(iter.into_iter()))
    }

    /// The kind that rejects this source, if any.
    pub fn unsupported_kind(&self) -> Option<SourceKind> {
        match self {
            Source::Slice(_) => None,
            Source::Deque(deque) => {
                let (_, back) = deque.as_slices();
                (!back.is_empty()).then_some(SourceKind::FragmentedDeque)
            }
            Source::Stream(_) => Some(SourceKind::Stream),
            Source::Unordered(_) => Some(SourceKind::Unordered),
        }
    }

    pub(crate) fn into_root(self) -> Result<ArrayWrapper<'a, T>> {
        let kind = match self {
            Source::Slice(items) => return Ok(ArrayWrapper::new(items)),
            Source::Deque(deque) => match deque.as_slices() {
                (front, []) => return Ok(ArrayWrapper::new(front)),
                _ => SourceKind::FragmentedDeque,
            },
            Source::Stream(_) => SourceKind::Stream,
            Source::Unordered(_) => SourceKind::Unordered,
        };
        Err(Error::UnsupportedSourceKind { kind })
    }
}

impl<'a, T> From<&'a [T]> for Source<'a, T> {
    fn from(items: &'a [T]) -> Self {
        Source::Slice(items)
    }
}

impl<'a, T, const N: usize> From<&'a [T; N]> for Source<'a, T> {
    fn from(items: &'a [T; N]) -> Self {
        Source::Slice(items)
    }
}

impl<'a, T> From<&'a Vec<T>> for Source<'a, T> {
    fn from(items: &'a Vec<T>) -> Self {
        Source::Slice(items)
    }
}

impl<'a, T> From<&'a VecDeque<T>> for Source<'a, T> {
    fn from(deque: &'a VecDeque<T>) -> Self {
        Source::Deque(deque)
    }
}

impl<'a, T, H> From<&'a HashSet<T, H>> for Source<'a, T> {
    fn from(set: &'a HashSet<T, H>) -> Self {
        Source::Unordered(Box::new(set.iter()))
    }
}
