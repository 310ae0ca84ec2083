use std::fmt::Debug;

use super::{TextRange, binary_search_by_key};

///
/// Pairs of items from two sorted slices whose ranges intersect.
///
/// Both slices have to be sorted ascending by start and by end offset, which holds for
/// lists of non overlapping ranges. This is not validated: unsorted input may drop or
/// repeat pairs.
///
/// Every item of `first` is dropped from the sweep once an item of `second` ends at or
/// after it, so each slice is visited only once.
///
pub struct Intersections<'a, A, B, FA, FB> {
    first: &'a [A],
    second: &'a [B],
    // Cursor into `first`. Items before it can't intersect any remaining item of `second`
    first_idx: usize,
    second_idx: usize,
    range1: FA,
    range2: FB,
}

impl<'a, A, B, FA, FB> Intersections<'a, A, B, FA, FB> {
    pub fn new(first: &'a [A], second: &'a [B], range1: FA, range2: FB) -> Self {
        Self {
            first,
            second,
            first_idx: 0,
            second_idx: 0,
            range1,
            range2,
        }
    }

    fn current_first(&self) -> Option<&'a A> {
        self.first.get(self.first_idx)
    }

    fn current_second(&self) -> Option<&'a B> {
        self.second.get(self.second_idx)
    }
}

impl<'a, A, B, FA, FB, T> Iterator for Intersections<'a, A, B, FA, FB>
where
    FA: Fn(&A) -> TextRange<T>,
    FB: Fn(&B) -> TextRange<T>,
    T: Ord + Copy + Debug,
{
    type Item = (&'a A, &'a B);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let item2 = self.current_second()?;
            // `first` exhausted: nothing left for any later item of `second` either
            let item1 = self.current_first()?;
            let range1 = (self.range1)(item1);
            let range2 = (self.range2)(item2);

            if range2.end() < range1.end() {
                // item1 may reach into the next item2
                self.second_idx += 1;
            } else {
                self.first_idx += 1;
            }

            if range1.intersects(&range2) {
                return Some((item1, item2));
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.first.len() - self.first_idx.min(self.first.len()))
            + (self.second.len() - self.second_idx.min(self.second.len()));
        (0, Some(remaining))
    }
}

/// Calls `consumer` for every pair of intersecting items. See [`Intersections`] for the
/// required ordering of both slices.
pub fn process_intersections<A, B, T>(
    first: &[A],
    second: &[B],
    range1: impl Fn(&A) -> TextRange<T>,
    range2: impl Fn(&B) -> TextRange<T>,
    mut consumer: impl FnMut(&A, &B),
) where
    T: Ord + Copy + Debug,
{
    for (item1, item2) in Intersections::new(first, second, range1, range2) {
        consumer(item1, item2);
    }
}

///
/// Items of `second` intersecting `element`, in the order of `second`.
///
/// `second` has to be sorted ascending by end offset. The first candidate is found by
/// bisection, then items are scanned until one starts after `element` ends.
///
pub fn element_intersections<'a, A, B, T>(
    element: &A,
    second: &'a [B],
    range1: impl Fn(&A) -> TextRange<T>,
    range2: impl Fn(&B) -> TextRange<T> + 'a,
) -> impl Iterator<Item = &'a B> + 'a
where
    T: Ord + Copy + Debug + 'a,
{
    let range1 = range1(element);
    let first_candidate =
        binary_search_by_key(second, range1.start(), |item| range2(item).end());
    let candidates = &second[first_candidate.insertion_index()..];

    candidates
        .iter()
        .map(move |item| (item, range2(item)))
        .take_while(move |(_, range)| range.start() <= range1.end())
        .filter(move |(_, range)| range1.intersects(range))
        .map(|(item, _)| item)
}

/// Calls `consumer` with `element` and every intersecting item of `second`, which has to
/// be sorted ascending by end offset.
pub fn process_element_intersections<A, B, T>(
    element: &A,
    second: &[B],
    range1: impl Fn(&A) -> TextRange<T>,
    range2: impl Fn(&B) -> TextRange<T>,
    mut consumer: impl FnMut(&A, &B),
) where
    T: Ord + Copy + Debug,
{
    for item2 in element_intersections(element, second, range1, range2) {
        consumer(element, item2);
    }
}

#[cfg(test)]
mod tests {
    use std::ops::Range;

    use itertools::Itertools;

    use super::*;

    #[derive(Debug, PartialEq, Eq)]
    struct Change {
        id: u32,
        range: Range<u32>,
    }

    fn range_of(x: &Range<u32>) -> TextRange {
        TextRange::new(x.start, x.end)
    }

    fn change_range(x: &Change) -> TextRange {
        range_of(&x.range)
    }

    fn collect_pairs(a: &[Range<u32>], b: &[Range<u32>]) -> Vec<(Range<u32>, Range<u32>)> {
        let mut result = Vec::new();
        process_intersections(a, b, range_of, range_of, |x, y| {
            result.push((x.clone(), y.clone()))
        });
        result
    }

    fn brute_force(a: &[Range<u32>], b: &[Range<u32>]) -> Vec<(Range<u32>, Range<u32>)> {
        a.iter()
            .cartesian_product(b.iter())
            .filter(|(x, y)| x.start.max(y.start) < x.end.min(y.end))
            .map(|(x, y)| (x.clone(), y.clone()))
            .sorted_by_key(|(x, y)| (x.start, y.start))
            .collect_vec()
    }

    /// Sorted, non overlapping ranges, some of them touching and some empty
    fn random_ranges(max_len: usize) -> Vec<Range<u32>> {
        let mut pos = fastrand::u32(0..5);
        (0..fastrand::usize(0..=max_len))
            .map(|_| {
                pos += fastrand::u32(0..4);
                let start = pos;
                pos += fastrand::u32(0..7);
                start..pos
            })
            .collect_vec()
    }

    #[test]
    fn reports_all_overlaps() {
        assert_eq!(
            vec![(0..3, 2..5), (4..8, 2..5), (4..8, 6..9)],
            collect_pairs(&[0..3, 4..8], &[2..5, 6..9])
        );
    }

    #[test]
    fn touching_ranges_dont_intersect() {
        assert_eq!(Vec::<(Range<u32>, Range<u32>)>::new(), collect_pairs(&[0..5], &[5..10]));
        assert_eq!(Vec::<(Range<u32>, Range<u32>)>::new(), collect_pairs(&[5..10], &[0..5]));
    }

    #[test]
    fn empty_inputs() {
        let mut calls = 0;
        process_intersections(&[] as &[Range<u32>], &[0..5], range_of, range_of, |_, _| {
            calls += 1
        });
        process_intersections(&[0..5], &[] as &[Range<u32>], range_of, range_of, |_, _| {
            calls += 1
        });
        assert_eq!(0, calls);
    }

    #[test]
    fn long_range_spans_many() {
        assert_eq!(
            vec![(0..20, 1..2), (0..20, 4..6), (0..20, 18..25), (21..30, 18..25)],
            collect_pairs(&[0..20, 21..30], &[1..2, 4..6, 18..25])
        );
    }

    #[test]
    fn stops_when_first_is_exhausted() {
        let first = [0..1];
        let second = [0..2, 10..12, 20..22];
        let mut iter = Intersections::new(&first[..], &second[..], range_of, range_of);
        assert_eq!(Some((&(0..1), &(0..2))), iter.next());
        assert_eq!(None, iter.next());
        assert_eq!(0, iter.second_idx);
    }

    #[test]
    fn iterator_and_callback_agree() {
        let a = [0..3, 4..8, 9..9, 10..14];
        let b = [2..5, 6..9, 13..20];
        let from_iter = Intersections::new(&a[..], &b[..], range_of, range_of)
            .map(|(x, y)| (x.clone(), y.clone()))
            .collect_vec();
        assert_eq!(collect_pairs(&a, &b), from_iter);
    }

    #[test]
    fn matches_brute_force() {
        fastrand::seed(4_871_223);
        for _ in 0..500 {
            let a = random_ranges(12);
            let b = random_ranges(12);
            let found = collect_pairs(&a, &b)
                .into_iter()
                .sorted_by_key(|(x, y)| (x.start, y.start))
                .collect_vec();
            assert_eq!(brute_force(&a, &b), found, "a: {a:?}, b: {b:?}");
        }
    }

    #[test]
    fn works_with_projections() {
        let changes = [
            Change { id: 1, range: 0..4 },
            Change { id: 2, range: 10..12 },
        ];
        let lines = [0u32..2, 2..6, 6..10, 10..14];
        let mut hits = Vec::new();
        process_intersections(&changes, &lines, change_range, range_of, |c, l| {
            hits.push((c.id, l.start))
        });
        assert_eq!(vec![(1, 0), (1, 2), (2, 10)], hits);
    }

    #[test]
    fn element_lookup() {
        let second = [0..2, 3..5, 5..9, 9..12, 15..20];
        let hits = element_intersections(&(4..10), &second, range_of, range_of).collect_vec();
        assert_eq!(vec![&(3..5), &(5..9), &(9..12)], hits);
    }

    #[test]
    fn element_touching_is_ignored() {
        let second = [0..4, 10..12];
        let mut calls = 0;
        process_element_intersections(&(4..10), &second, range_of, range_of, |_, _| {
            calls += 1
        });
        assert_eq!(0, calls);
    }

    #[test]
    fn element_lookup_on_empty_list() {
        assert_eq!(
            0,
            element_intersections(&(4..10), &[] as &[Range<u32>], range_of, range_of).count()
        );
    }

    #[test]
    fn element_lookup_matches_sweep() {
        fastrand::seed(90_210);
        for _ in 0..500 {
            let a = random_ranges(8);
            let b = random_ranges(12);
            let pairs = collect_pairs(&a, &b);
            for element in &a {
                let mut found = Vec::new();
                process_element_intersections(element, &b, range_of, range_of, |x, y| {
                    found.push((x.clone(), y.clone()))
                });
                let expected = pairs
                    .iter()
                    .filter(|(x, _)| x == element)
                    .cloned()
                    .collect_vec();
                assert_eq!(expected, found, "element: {element:?}, b: {b:?}");
            }
        }
    }
}
