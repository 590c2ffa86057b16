// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Inclusive Intervals
//!
//! This module provides the closed integer interval `[start, end]` used as
//! the building block of every range mapping. Unlike a half-open span, both
//! bounds belong to the interval, so the smallest representable interval is
//! a single point and a zero-length interval cannot be constructed.

use num_traits::One;
use std::fmt;
use std::ops::{Add, RangeInclusive, Sub};

/// A closed interval `[start, end]`, inclusive on both ends.
///
/// The invariant `start <= end` is enforced at construction; every interval
/// therefore covers at least one value and [`Interval::length`] is always
/// positive.
///
/// # Examples
///
/// ```
/// use almanac_core::interval::Interval;
///
/// let interval = Interval::new(1, 5);
/// assert_eq!(interval.start(), 1);
/// assert_eq!(interval.end(), 5);
/// assert!(interval.contains(5)); // end is inclusive
/// assert_eq!(interval.length(), 5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Interval<T> {
    start: T,
    end: T,
}

impl<T> Interval<T> {
    /// Creates a new closed interval `[start, end]`.
    ///
    /// # Panics
    ///
    /// Panics if `start > end`. Use [`Interval::try_new`] where inverted
    /// bounds are a runtime condition rather than a programmer error.
    ///
    /// # Examples
    ///
    /// ```
    /// use almanac_core::interval::Interval;
    ///
    /// let interval = Interval::new(3, 3);
    /// assert_eq!(interval.length(), 1);
    /// ```
    #[inline]
    pub fn new(start: T, end: T) -> Self
    where
        T: PartialOrd,
    {
        assert!(start <= end, "Interval::new: start must be <= end");
        Self { start, end }
    }

    /// Creates a new closed interval, or `None` if the bounds are inverted.
    ///
    /// # Examples
    ///
    /// ```
    /// use almanac_core::interval::Interval;
    ///
    /// assert!(Interval::try_new(1, 5).is_some());
    /// assert!(Interval::try_new(5, 1).is_none());
    /// ```
    #[inline]
    pub fn try_new(start: T, end: T) -> Option<Self>
    where
        T: PartialOrd,
    {
        (start <= end).then_some(Self { start, end })
    }

    /// Returns the inclusive start of the interval.
    #[inline]
    pub fn start(&self) -> T
    where
        T: Copy,
    {
        self.start
    }

    /// Returns the inclusive end of the interval.
    #[inline]
    pub fn end(&self) -> T
    where
        T: Copy,
    {
        self.end
    }

    /// Checks whether a value lies within the interval.
    ///
    /// # Examples
    ///
    /// ```
    /// use almanac_core::interval::Interval;
    ///
    /// let interval = Interval::new(1, 5);
    /// assert!(interval.contains(1));
    /// assert!(interval.contains(5));
    /// assert!(!interval.contains(6));
    /// assert!(!interval.contains(0));
    /// ```
    #[inline]
    pub fn contains(&self, value: T) -> bool
    where
        T: PartialOrd,
    {
        self.start <= value && value <= self.end
    }

    /// Checks whether the interval fully contains another interval.
    #[inline]
    pub fn contains_interval(&self, other: &Self) -> bool
    where
        T: PartialOrd,
    {
        other.start >= self.start && other.end <= self.end
    }

    /// Checks whether this interval shares at least one value with another.
    ///
    /// Closed intervals that touch at an endpoint do intersect.
    ///
    /// # Examples
    ///
    /// ```
    /// use almanac_core::interval::Interval;
    ///
    /// let a = Interval::new(1, 5);
    /// assert!(a.intersects(&Interval::new(5, 9)));
    /// assert!(!a.intersects(&Interval::new(6, 9)));
    /// ```
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool
    where
        T: PartialOrd,
    {
        self.start <= other.end && other.start <= self.end
    }

    /// Returns the overlap of this interval with another, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use almanac_core::interval::Interval;
    ///
    /// let a = Interval::new(1, 5);
    /// assert_eq!(a.intersection(&Interval::new(3, 9)), Some(Interval::new(3, 5)));
    /// assert_eq!(a.intersection(&Interval::new(6, 9)), None);
    /// ```
    #[inline]
    pub fn intersection(&self, other: &Self) -> Option<Self>
    where
        T: Ord + Copy,
    {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        (start <= end).then_some(Self { start, end })
    }

    /// Returns the number of values covered by the interval.
    ///
    /// Always at least one by the construction invariant.
    ///
    /// # Examples
    ///
    /// ```
    /// use almanac_core::interval::Interval;
    ///
    /// assert_eq!(Interval::new(2, 5).length(), 4);
    /// assert_eq!(Interval::new(7, 7).length(), 1);
    /// ```
    #[inline]
    pub fn length(&self) -> T
    where
        T: Copy + Sub<Output = T> + Add<Output = T> + One,
    {
        self.end - self.start + T::one()
    }

    /// Shifts both bounds by a distance.
    ///
    /// # Examples
    ///
    /// ```
    /// use almanac_core::interval::Interval;
    ///
    /// assert_eq!(Interval::new(1, 5).translate(10), Interval::new(11, 15));
    /// ```
    #[inline]
    pub fn translate(&self, d: T) -> Self
    where
        T: Copy + PartialOrd + Add<Output = T>,
    {
        Self::new(self.start + d, self.end + d)
    }

    /// Splits this interval along the boundaries of another.
    ///
    /// Collects the four boundary values of `self` and `other` into a
    /// sorted, deduplicated coordinate set and emits one interval per
    /// consecutive coordinate pair.
    ///
    /// # Examples
    ///
    /// ```
    /// use almanac_core::interval::Interval;
    ///
    /// let pieces = Interval::new(0, 10).split_at(&Interval::new(4, 6));
    /// assert_eq!(
    ///     pieces,
    ///     vec![Interval::new(0, 4), Interval::new(4, 6), Interval::new(6, 10)]
    /// );
    /// ```
    pub fn split_at(&self, other: &Self) -> Vec<Self>
    where
        T: Ord + Copy,
    {
        let mut coords = vec![self.start, self.end, other.start, other.end];
        coords.sort_unstable();
        coords.dedup();
        coords
            .windows(2)
            .map(|pair| Self {
                start: pair[0],
                end: pair[1],
            })
            .collect()
    }
}

impl<T: fmt::Display> fmt::Display for Interval<T> {
    /// Formats the interval as `[start, end]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use almanac_core::interval::Interval;
    ///
    /// assert_eq!(format!("{}", Interval::new(1, 5)), "[1, 5]");
    /// ```
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

impl<T: Copy + PartialOrd> From<RangeInclusive<T>> for Interval<T> {
    #[inline]
    fn from(r: RangeInclusive<T>) -> Self {
        Interval::new(*r.start(), *r.end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_keeps_bounds() {
        let i = Interval::new(-4i64, 9i64);
        assert_eq!(i.start(), -4);
        assert_eq!(i.end(), 9);
    }

    #[test]
    #[should_panic(expected = "start must be <= end")]
    fn test_new_panics_on_inverted_bounds() {
        let _ = Interval::new(5i64, 3i64);
    }

    #[test]
    fn test_try_new_rejects_inverted_bounds() {
        assert_eq!(Interval::try_new(5i64, 3i64), None);
        assert_eq!(Interval::try_new(3i64, 5i64), Some(Interval::new(3, 5)));
    }

    #[test]
    fn test_single_point_interval_is_valid() {
        let i = Interval::new(7i64, 7i64);
        assert_eq!(i.length(), 1);
        assert!(i.contains(7));
    }

    #[test]
    fn test_contains_is_inclusive_on_both_ends() {
        let i = Interval::new(10i64, 20i64);
        assert!(i.contains(10));
        assert!(i.contains(20));
        assert!(!i.contains(9));
        assert!(!i.contains(21));
    }

    #[test]
    fn test_contains_interval_for_nested_and_equal() {
        let a = Interval::new(1i64, 5i64);
        assert!(a.contains_interval(&Interval::new(2, 4)));
        assert!(a.contains_interval(&Interval::new(1, 5)));
        assert!(!a.contains_interval(&Interval::new(0, 6)));
    }

    #[test]
    fn test_intersects_when_touching_at_endpoint() {
        let a = Interval::new(0i64, 10i64);
        assert!(a.intersects(&Interval::new(10, 20)));
        assert!(!a.intersects(&Interval::new(11, 20)));
    }

    #[test]
    fn test_intersection_returns_overlap() {
        let a = Interval::new(0i64, 10i64);
        assert_eq!(
            a.intersection(&Interval::new(5, 15)),
            Some(Interval::new(5, 10))
        );
        assert_eq!(
            a.intersection(&Interval::new(10, 20)),
            Some(Interval::new(10, 10))
        );
        assert_eq!(a.intersection(&Interval::new(11, 20)), None);
    }

    #[test]
    fn test_length_counts_both_endpoints() {
        assert_eq!(Interval::new(-3i64, 2i64).length(), 6);
        assert_eq!(Interval::new(20i64, 60i64).length(), 41);
    }

    #[test]
    fn test_translate_shifts_both_bounds() {
        assert_eq!(
            Interval::new(1i64, 5i64).translate(-1),
            Interval::new(0, 4)
        );
    }

    #[test]
    fn test_split_at_overlapping_intervals() {
        let pieces = Interval::new(0i64, 10i64).split_at(&Interval::new(4, 6));
        assert_eq!(
            pieces,
            vec![Interval::new(0, 4), Interval::new(4, 6), Interval::new(6, 10)]
        );
    }

    #[test]
    fn test_split_at_with_shared_boundary_deduplicates() {
        let pieces = Interval::new(0i64, 5i64).split_at(&Interval::new(5, 9));
        assert_eq!(pieces, vec![Interval::new(0, 5), Interval::new(5, 9)]);
    }

    #[test]
    fn test_split_at_identical_intervals_yields_single_piece() {
        let a = Interval::new(2i64, 8i64);
        assert_eq!(a.split_at(&a), vec![a]);
    }

    #[test]
    fn test_display_formats_as_closed() {
        assert_eq!(format!("{}", Interval::new(1i64, 5i64)), "[1, 5]");
    }

    #[test]
    fn test_from_range_inclusive() {
        let i: Interval<i64> = (3..=9).into();
        assert_eq!((i.start(), i.end()), (3, 9));
    }
}
