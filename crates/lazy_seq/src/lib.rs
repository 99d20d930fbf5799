mod cursor;
mod error;
mod source;
mod traits;

pub mod impls;

pub use cursor::{Cursor, IndexCursor, Iter, SliceCursor};
pub use error::{Error, Result, SourceKind};
pub use impls::{
    array::{ArrayWrapper, FilteredArrayWrapper, MappedArrayWrapper},
    filtered::{Filtered, FilteredCursor},
    indexed::{IndexFilterCursor, IndexedFiltered, IndexedMapped},
    mapped::{Mapped, MappedCursor},
    take::{Take, TakeCursor},
};
pub use source::Source;
pub use traits::{DEFAULT_TAKE_COUNT, RandomAccessSequence, Sequence, Visit};

/// Wraps a finite ordered collection in a lazy root sequence.
///
/// Slices, arrays, vectors and contiguous deques are accepted; streams,
/// unordered collections and wrapped deques fail with
/// [`Error::UnsupportedSourceKind`].
pub fn lazy<'a, T, S>(source: S) -> Result<ArrayWrapper<'a, T>>
where
    S: Into<Source<'a, T>>,
{
    let root = source.into().into_root();
    match &root {
        Ok(root) => tracing::trace!(len = root.len(), "built array-backed root"),
        Err(error) => tracing::debug!(%error, "rejected lazy sequence source"),
    }
    root
}


#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::collections::{HashSet, VecDeque};

    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::test_utils::init_test_logging;
    use super::*;

    fn record<S: Sequence>(seq: &S) -> (Vec<(S::Item, usize)>, bool) {
        let mut seen = Vec::new();
        let completed = seq.each(|item, index| seen.push((item, index)));
        (seen, completed)
    }

    #[test]
    fn map_filter_take_visits_expected_pairs() {
        let values = [1, 2, 3, 4, 5];
        let mapped_calls = Cell::new(0);
        let seq = lazy(&values)
            .unwrap()
            .map(|x, _| {
                mapped_calls.set(mapped_calls.get() + 1);
                x * 2
            })
            .filter(|x, _| *x > 4)
            .take(2);

        let (seen, completed) = record(&seq);
        assert_eq!(seen, vec![(6, 0), (8, 1)]);
        assert!(completed);
        // 1 and 2 are mapped and rejected, 5 is never reached.
        assert_eq!(mapped_calls.get(), 4);
    }

    #[test]
    fn empty_source() {
        let values: [i32; 0] = [];
        let root = lazy(&values).unwrap();
        assert_eq!(root.get(0), None);
        assert!(root.is_empty());

        let mut calls = 0;
        assert!(root.each(|_, _| calls += 1));
        assert_eq!(calls, 0);
        assert_eq!(root.map(|x, _| *x).get(0), None);
        assert!(root.filter(|_, _| true).to_vec().is_empty());
    }

    #[test]
    fn take_zero_is_trivially_complete() {
        let values = [10, 20, 30];
        let mut calls = 0;
        assert!(lazy(&values).unwrap().take(0).each(|_, _| calls += 1));
        assert_eq!(calls, 0);
    }

    #[test]
    fn take_visits_min_of_count_and_len() {
        let values = [4, 5, 6];
        let root = lazy(&values).unwrap();
        for count in 0..6 {
            let (seen, completed) = record(&root.take(count));
            let expected: Vec<(&i32, usize)> = values
                .iter()
                .take(count)
                .enumerate()
                .map(|(i, v)| (v, i))
                .collect();
            assert_eq!(seen, expected, "count={count}");
            assert_eq!(completed, count <= values.len(), "count={count}");
        }
    }

    #[test]
    fn each_is_restartable() {
        let values: Vec<i32> = (0..30).collect();
        let root = lazy(&values).unwrap();
        let generic = root
            .filter(|x, _| **x % 4 != 0)
            .map(|x, i| x * i as i32)
            .take(9);
        let indexed = root.map(|x, _| x + 1).filter(|x, _| x % 3 == 0);

        assert_eq!(record(&generic), record(&generic));
        assert_eq!(record(&indexed), record(&indexed));
        assert_eq!(generic.iter().collect::<Vec<_>>(), generic.to_vec());
        assert_eq!(indexed.iter().collect::<Vec<_>>(), indexed.to_vec());
    }

    #[test]
    fn short_circuit_stops_transforms() {
        let values: Vec<i32> = (0..100).collect();
        let root = lazy(&values).unwrap();

        // Indexed path: root -> map -> filter.
        let mapped = Cell::new(0);
        let seq = root
            .map(|x, _| {
                mapped.set(mapped.get() + 1);
                *x
            })
            .filter(|x, _| x % 5 == 0);
        let completed = seq.each(|_, j| j < 2);
        assert!(!completed);
        // Output index 2 is source element 10.
        assert_eq!(mapped.get(), 11);

        // Cursor-backed path: root -> filter -> map -> take.
        let mapped = Cell::new(0);
        let seq = root
            .filter(|x, _| **x % 2 == 1)
            .map(|x, _| {
                mapped.set(mapped.get() + 1);
                *x
            })
            .take(3);
        assert!(seq.each(|_, _| ()));
        assert_eq!(mapped.get(), 3);

        let mapped_by_cursor = Cell::new(0);
        let seq = root
            .filter(|_, _| true)
            .map(|x, _| {
                mapped_by_cursor.set(mapped_by_cursor.get() + 1);
                *x
            })
            .take(4);
        assert_eq!(seq.iter().count(), 4);
        assert_eq!(mapped_by_cursor.get(), 4);
    }

    #[test]
    fn random_access_agrees_with_each() {
        let values: Vec<i32> = (0..17).map(|x| x * 7 % 11).collect();
        let root = lazy(&values).unwrap();
        let seq = root.map(|x, i| x - i as i32).map(|x, i| x * i as i32);
        let all = seq.to_vec();
        assert_eq!(seq.len(), all.len());
        for (i, expected) in all.iter().enumerate() {
            assert_eq!(seq.get(i), Some(*expected));
        }
        assert_eq!(seq.get(all.len()), None);

        for (i, expected) in values.iter().enumerate() {
            assert_eq!(root.get(i), Some(expected));
        }
    }

    #[test]
    fn deques_are_accepted_when_contiguous() {
        let deque: VecDeque<i32> = (1..=4).collect();
        let root = lazy(&deque).unwrap();
        assert_eq!(root.map(|x, _| x * x).to_vec(), vec![1, 4, 9, 16]);
    }

    #[test]
    fn unsupported_sources_fail_at_construction() {
        init_test_logging();

        let error = lazy(Source::stream(0..3)).unwrap_err();
        assert_eq!(
            error,
            Error::UnsupportedSourceKind {
                kind: SourceKind::Stream
            }
        );
        assert_eq!(error.to_string(), "unsupported source kind: stream");

        let set: HashSet<i32> = (0..3).collect();
        assert_eq!(
            lazy(&set).unwrap_err(),
            Error::UnsupportedSourceKind {
                kind: SourceKind::Unordered
            }
        );

        let mut wrapped = VecDeque::with_capacity(4);
        wrapped.push_back(1);
        wrapped.push_front(0);
        assert_eq!(
            lazy(&wrapped).unwrap_err().to_string(),
            "unsupported source kind: fragmented deque"
        );
    }

    #[test]
    fn visitor_return_conventions() {
        let values = [1, 2, 3];
        let root = lazy(&values).unwrap();
        assert!(root.each(|_, _| ()));
        assert!(root.each(|_, _| true));
        assert!(!root.each(|_, _| false));
        assert!(!root.each(|_, _| Visit::Break));
        assert_eq!(root.first(), Some(&1));
    }

    #[test]
    fn random_pipelines_match_vec_oracle() {
        let mut rng = StdRng::seed_from_u64(0x5EED_1A2F);

        for n in 0..64 {
            let values: Vec<i64> = (0..n).map(|_| rng.random_range(-20..=20)).collect();
            let threshold: i64 = rng.random_range(-20..=20);
            let count = rng.random_range(0..=n + 2);
            let root = lazy(&values).unwrap();

            // map -> filter -> take
            let seq = root
                .map(|x, i| x * 3 + i as i64)
                .filter(|x, _| *x > threshold)
                .take(count);
            let expected: Vec<i64> = values
                .iter()
                .enumerate()
                .map(|(i, x)| x * 3 + i as i64)
                .filter(|x| *x > threshold)
                .take(count)
                .collect();
            let full_len = values
                .iter()
                .enumerate()
                .filter(|&(i, x)| x * 3 + i as i64 > threshold)
                .count();
            assert_eq!(seq.to_vec(), expected, "n={n}");
            assert_eq!(seq.iter().collect::<Vec<_>>(), expected, "n={n}");
            assert_eq!(seq.each(|_, _| ()), count <= full_len, "n={n}");

            // filter -> map, where map sees the filtered index
            let seq = root.filter(|x, i| **x + i as i64 > threshold).map(|x, j| (*x, j));
            let expected: Vec<(i64, usize)> = values
                .iter()
                .enumerate()
                .filter(|&(i, x)| *x + i as i64 > threshold)
                .map(|(_, x)| *x)
                .enumerate()
                .map(|(j, x)| (x, j))
                .collect();
            assert_eq!(seq.to_vec(), expected, "n={n}");
            assert_eq!(seq.iter().collect::<Vec<_>>(), expected, "n={n}");
            for (j, pair) in expected.iter().enumerate() {
                assert_eq!(seq.get(j), Some(*pair), "n={n} j={j}");
            }
            assert_eq!(seq.get(expected.len()), None);

            // take -> map -> filter
            let seq = root.take(count).map(|x, i| x - i as i64).filter(|x, _| *x < threshold);
            let expected: Vec<i64> = values
                .iter()
                .take(count)
                .enumerate()
                .map(|(i, x)| x - i as i64)
                .filter(|x| *x < threshold)
                .collect();
            assert_eq!(seq.to_vec(), expected, "n={n}");
            assert_eq!(seq.iter().collect::<Vec<_>>(), expected, "n={n}");

            // map -> map keeps random access
            let seq = root.map(|x, _| x * x).map(|x, i| x - i as i64);
            assert_eq!(seq.len(), values.len());
            for (i, x) in values.iter().enumerate() {
                assert_eq!(seq.get(i), Some(x * x - i as i64), "n={n} i={i}");
            }
            assert_eq!(seq.iter().count(), values.len());

            // filter -> filter -> take
            let seq = root
                .filter(|x, _| **x >= 0)
                .filter(|x, _| **x != threshold)
                .take(count);
            let expected: Vec<&i64> = values
                .iter()
                .filter(|x| **x >= 0)
                .filter(|x| **x != threshold)
                .take(count)
                .collect();
            assert_eq!(seq.to_vec(), expected, "n={n}");
            assert_eq!(seq.iter().collect::<Vec<_>>(), expected, "n={n}");

            // map -> filter -> map, the last map sees the filtered index
            let seq = root
                .map(|x, _| x.abs())
                .filter(|x, _| x % 2 == 0)
                .map(|x, j| x + j as i64);
            let expected: Vec<i64> = values
                .iter()
                .map(|x| x.abs())
                .filter(|x| x % 2 == 0)
                .enumerate()
                .map(|(j, x)| x + j as i64)
                .collect();
            assert_eq!(seq.to_vec(), expected, "n={n}");
            assert_eq!(seq.iter().collect::<Vec<_>>(), expected, "n={n}");
        }
    }
}
