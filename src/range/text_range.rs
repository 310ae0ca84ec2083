use std::fmt::Debug;
use std::ops::{Add, Range, Sub};

use num_traits::PrimInt;

/// Half open `[start, end)` span of offsets, e.g. characters in a document.
/// Unlike `std::ops::Range` it is `Copy`. Empty ranges are allowed and never intersect anything.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextRange<T = u32> {
    start: T,
    end: T,
}

impl<T: Debug> Debug for TextRange<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{:?}..{:?}", self.start, self.end))
    }
}

impl<T> From<TextRange<T>> for Range<T> {
    fn from(value: TextRange<T>) -> Self {
        value.start..value.end
    }
}

impl<T: Ord> TryFrom<Range<T>> for TextRange<T> {
    type Error = InvalidRangeError<T>;

    fn try_from(value: Range<T>) -> Result<Self, Self::Error> {
        if value.start > value.end {
            Err(InvalidRangeError(value))
        } else {
            Ok(TextRange {
                start: value.start,
                end: value.end,
            })
        }
    }
}

impl<T: Ord + Copy + Debug> TextRange<T> {
    pub fn new(start: T, end: T) -> Self {
        assert!(
            start <= end,
            "TextRange start must not exceed end: {:?}..{:?}",
            start,
            end
        );
        Self { start, end }
    }

    pub fn empty_at(offset: T) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    #[inline]
    pub fn start(&self) -> T {
        self.start
    }

    #[inline]
    pub fn end(&self) -> T {
        self.end
    }

    /// Ranges which only touch at a boundary do not intersect
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        self.start.max(other.start) < self.end.min(other.end)
    }

    pub fn intersection(&self, other: &Self) -> Option<Self> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        (start < end).then_some(Self { start, end })
    }

    pub fn contains_offset(&self, offset: T) -> bool {
        self.start <= offset && offset < self.end
    }

    pub fn contains_range(&self, other: &Self) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl<T: PrimInt + Debug> TextRange<T> {
    pub fn len(&self) -> T {
        self.end - self.start
    }

    /// `None` if the shifted end does not fit into `T`
    pub fn checked_shift_right(&self, delta: T) -> Option<Self> {
        Some(Self {
            start: self.start.checked_add(&delta)?,
            end: self.end.checked_add(&delta)?,
        })
    }
}

impl<T: Add<Output = T> + Copy> Add<T> for TextRange<T> {
    type Output = TextRange<T>;

    fn add(self, rhs: T) -> Self::Output {
        TextRange {
            start: self.start + rhs,
            end: self.end + rhs,
        }
    }
}

impl<T: Sub<Output = T> + Copy> Sub<T> for TextRange<T> {
    type Output = TextRange<T>;

    fn sub(self, rhs: T) -> Self::Output {
        TextRange {
            start: self.start - rhs,
            end: self.end - rhs,
        }
    }
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("{0:?} ends before it starts")]
pub struct InvalidRangeError<T>(pub Range<T>);
