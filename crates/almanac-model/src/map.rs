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

//! # Range Maps and Mappings
//!
//! A [`RangeMap`] associates a source interval with an equal-length
//! destination interval; a value `v` in the source maps to
//! `destination.start + (v - source.start)`. A [`Mapping`] is a named
//! collection of range maps matched in storage order: the first entry whose
//! source contains a value wins, and values outside every source range are
//! identity-mapped. Storage order is therefore part of the contract when
//! source ranges overlap.

use crate::err::RangeMapLengthMismatchError;
use almanac_core::{MapValue, interval::Interval};
use std::fmt;

/// A bijection between two equal-length integer ranges.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RangeMap<T> {
    source: Interval<T>,
    destination: Interval<T>,
}

impl<T: MapValue> RangeMap<T> {
    /// Creates a new range map.
    ///
    /// # Panics
    ///
    /// Panics if the intervals have different lengths. Use
    /// [`RangeMap::try_new`] where a mismatch is a runtime condition.
    #[inline]
    pub fn new(source: Interval<T>, destination: Interval<T>) -> Self {
        assert_eq!(
            source.length(),
            destination.length(),
            "RangeMap::new: source and destination must have equal length"
        );
        Self {
            source,
            destination,
        }
    }

    /// Creates a new range map, or an error if the lengths differ.
    #[inline]
    pub fn try_new(
        source: Interval<T>,
        destination: Interval<T>,
    ) -> Result<Self, RangeMapLengthMismatchError<T>> {
        if source.length() == destination.length() {
            Ok(Self {
                source,
                destination,
            })
        } else {
            Err(RangeMapLengthMismatchError::new(source, destination))
        }
    }

    #[inline]
    pub fn source(&self) -> Interval<T> {
        self.source
    }

    #[inline]
    pub fn destination(&self) -> Interval<T> {
        self.destination
    }

    /// Maps a value from the source range into the destination range.
    ///
    /// Returns `None` if the value lies outside the source range.
    ///
    /// # Examples
    ///
    /// ```
    /// use almanac_core::interval::Interval;
    /// use almanac_model::map::RangeMap;
    ///
    /// let map = RangeMap::new(Interval::new(10i64, 19), Interval::new(50, 59));
    /// assert_eq!(map.remap(12), Some(52));
    /// assert_eq!(map.remap(9), None);
    /// ```
    #[inline]
    pub fn remap(&self, value: T) -> Option<T> {
        self.source
            .contains(value)
            .then(|| self.destination.start() + (value - self.source.start()))
    }

    /// Maps a value from the destination range back into the source range.
    #[inline]
    pub fn reverse_remap(&self, value: T) -> Option<T> {
        self.destination
            .contains(value)
            .then(|| self.source.start() + (value - self.destination.start()))
    }
}

impl<T: MapValue> fmt::Display for RangeMap<T> {
    /// Formats the pair as `"{src.start} - {src.end} -> {dst.start} - {dst.end}"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} -> {} - {}",
            self.source.start(),
            self.source.end(),
            self.destination.start(),
            self.destination.end()
        )
    }
}

/// A named piecewise-linear integer range mapping.
///
/// Entries need not be stored sorted or contiguous. Values covered by no
/// entry are identity-mapped by [`Mapping::apply`]; the entries themselves
/// only describe the explicitly remapped ranges.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mapping<T> {
    name: String,
    entries: Vec<RangeMap<T>>,
}

impl<T: MapValue> Mapping<T> {
    #[inline]
    pub fn new(name: impl Into<String>, entries: Vec<RangeMap<T>>) -> Self {
        Self {
            name: name.into(),
            entries,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn entries(&self) -> &[RangeMap<T>] {
        &self.entries
    }

    #[inline]
    pub fn push(&mut self, entry: RangeMap<T>) {
        self.entries.push(entry);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sorts the entries by source range start, ascending.
    #[inline]
    pub fn sort_by_source(&mut self) {
        self.entries.sort_by_key(|entry| entry.source().start());
    }

    /// Applies the mapping to a value.
    ///
    /// Values outside every source range pass through unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use almanac_core::interval::Interval;
    /// use almanac_model::map::{Mapping, RangeMap};
    ///
    /// let mapping = Mapping::new(
    ///     "seed-to-soil",
    ///     vec![RangeMap::new(Interval::new(50i64, 97), Interval::new(52, 99))],
    /// );
    /// assert_eq!(mapping.apply(79), 81);
    /// assert_eq!(mapping.apply(14), 14); // gap, identity
    /// ```
    #[inline]
    pub fn apply(&self, value: T) -> T {
        self.entries
            .iter()
            .find_map(|entry| entry.remap(value))
            .unwrap_or(value)
    }

    /// Applies the mapping in reverse.
    ///
    /// Values outside every destination range pass through unchanged,
    /// mirroring the identity semantics of [`Mapping::apply`].
    #[inline]
    pub fn apply_reverse(&self, value: T) -> T {
        self.entries
            .iter()
            .find_map(|entry| entry.reverse_remap(value))
            .unwrap_or(value)
    }

    /// Order-insensitive entry comparison.
    ///
    /// Two mappings are equivalent when they hold the same set of range
    /// maps, regardless of storage order. Names are not compared.
    pub fn equivalent(&self, other: &Self) -> bool {
        self.entries.len() == other.entries.len()
            && other
                .entries
                .iter()
                .all(|entry| self.entries.contains(entry))
    }

    /// Returns the smallest destination value reachable from the query ranges.
    ///
    /// Each query range is swept left to right: covered stretches contribute
    /// the image of their first value (the mapping is increasing within an
    /// entry), uncovered stretches contribute their own first value via the
    /// identity rule. Returns `None` when `ranges` is empty.
    pub fn minimum_destination(&self, ranges: &[Interval<T>]) -> Option<T> {
        let mut sorted = self.entries.clone();
        sorted.sort_by_key(|entry| entry.source().start());

        let mut best: Option<T> = None;
        let mut remember = |best: &mut Option<T>, candidate: T| {
            *best = Some(best.map_or(candidate, |b| b.min(candidate)));
        };

        for range in ranges {
            let mut cursor = range.start();
            for entry in &sorted {
                if cursor > range.end() {
                    break;
                }
                let source = entry.source();
                if source.end() < cursor {
                    continue;
                }
                if source.start() > cursor {
                    // identity gap in front of this entry
                    remember(&mut best, cursor);
                    if source.start() > range.end() {
                        cursor = range.end() + T::one();
                        break;
                    }
                    cursor = source.start();
                }
                let mapped = entry.destination().start() + (cursor - source.start());
                remember(&mut best, mapped);
                cursor = range.end().min(source.end()) + T::one();
            }
            if cursor <= range.end() {
                // identity tail past the last entry
                remember(&mut best, cursor);
            }
        }
        best
    }
}

impl<T: MapValue> fmt::Display for Mapping<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}:", self.name)?;
        for entry in &self.entries {
            writeln!(f, "\t{entry}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interval(start: i64, end: i64) -> Interval<i64> {
        Interval::new(start, end)
    }

    #[test]
    fn test_range_map_remap_inside_and_outside() {
        let map = RangeMap::new(interval(40, 50), interval(10, 20));
        assert_eq!(map.remap(40), Some(10));
        assert_eq!(map.remap(45), Some(15));
        assert_eq!(map.remap(50), Some(20));
        assert_eq!(map.remap(39), None);
        assert_eq!(map.remap(51), None);
    }

    #[test]
    fn test_range_map_reverse_remap() {
        let map = RangeMap::new(interval(40, 50), interval(10, 20));
        assert_eq!(map.reverse_remap(10), Some(40));
        assert_eq!(map.reverse_remap(15), Some(45));
        assert_eq!(map.reverse_remap(21), None);
    }

    #[test]
    #[should_panic(expected = "equal length")]
    fn test_range_map_new_panics_on_length_mismatch() {
        let _ = RangeMap::new(interval(0, 4), interval(10, 12));
    }

    #[test]
    fn test_range_map_try_new_rejects_length_mismatch() {
        assert!(RangeMap::try_new(interval(0, 4), interval(10, 12)).is_err());
        assert!(RangeMap::try_new(interval(0, 4), interval(10, 14)).is_ok());
    }

    #[test]
    fn test_range_map_display() {
        let map = RangeMap::new(interval(20, 29), interval(30, 39));
        assert_eq!(format!("{map}"), "20 - 29 -> 30 - 39");
    }

    #[test]
    fn test_mapping_apply_uses_identity_on_gaps() {
        let mapping = Mapping::new(
            "seed-to-soil",
            vec![
                RangeMap::new(interval(50, 97), interval(52, 99)),
                RangeMap::new(interval(98, 99), interval(50, 51)),
            ],
        );
        assert_eq!(mapping.apply(79), 81);
        assert_eq!(mapping.apply(98), 50);
        assert_eq!(mapping.apply(14), 14);
        assert_eq!(mapping.apply(49), 49);
    }

    #[test]
    fn test_mapping_apply_first_match_wins_on_overlap() {
        let mapping = Mapping::new(
            "m",
            vec![
                RangeMap::new(interval(10, 20), interval(60, 70)),
                RangeMap::new(interval(20, 29), interval(50, 59)),
            ],
        );
        assert_eq!(mapping.apply(20), 70);
        assert_eq!(mapping.apply(21), 51);
    }

    #[test]
    fn test_mapping_apply_reverse_round_trips() {
        let mapping = Mapping::new(
            "seed-to-soil",
            vec![RangeMap::new(interval(50, 97), interval(52, 99))],
        );
        for value in [14, 49, 50, 79, 97] {
            assert_eq!(mapping.apply_reverse(mapping.apply(value)), value);
        }
    }

    #[test]
    fn test_mapping_sort_by_source() {
        let mut mapping = Mapping::new(
            "soil-to-fertilizer",
            vec![
                RangeMap::new(interval(15, 51), interval(0, 36)),
                RangeMap::new(interval(0, 14), interval(39, 53)),
                RangeMap::new(interval(52, 53), interval(37, 38)),
            ],
        );
        mapping.sort_by_source();
        let starts: Vec<i64> = mapping
            .entries()
            .iter()
            .map(|entry| entry.source().start())
            .collect();
        assert_eq!(starts, vec![0, 15, 52]);
    }

    #[test]
    fn test_mapping_equivalent_ignores_order_and_name() {
        let a = Mapping::new(
            "a",
            vec![
                RangeMap::new(interval(0, 4), interval(10, 14)),
                RangeMap::new(interval(5, 9), interval(20, 24)),
            ],
        );
        let b = Mapping::new(
            "b",
            vec![
                RangeMap::new(interval(5, 9), interval(20, 24)),
                RangeMap::new(interval(0, 4), interval(10, 14)),
            ],
        );
        assert!(a.equivalent(&b));

        let c = Mapping::new("c", vec![RangeMap::new(interval(0, 4), interval(10, 14))]);
        assert!(!a.equivalent(&c));
    }

    #[test]
    fn test_minimum_destination_fully_covered_range() {
        let mapping = Mapping::new(
            "m",
            vec![RangeMap::new(interval(10, 20), interval(50, 60))],
        );
        assert_eq!(
            mapping.minimum_destination(&[interval(12, 18)]),
            Some(52)
        );
    }

    #[test]
    fn test_minimum_destination_prefers_identity_gap() {
        let mapping = Mapping::new(
            "m",
            vec![RangeMap::new(interval(10, 20), interval(50, 60))],
        );
        // 5..9 passes through unchanged and beats every mapped value
        assert_eq!(mapping.minimum_destination(&[interval(5, 18)]), Some(5));
    }

    #[test]
    fn test_minimum_destination_straddling_several_entries() {
        let mapping = Mapping::new(
            "m",
            vec![
                RangeMap::new(interval(0, 9), interval(100, 109)),
                RangeMap::new(interval(20, 29), interval(3, 12)),
            ],
        );
        // gap 10..19 (identity 10) vs entry at 20 (mapped 3)
        assert_eq!(mapping.minimum_destination(&[interval(5, 25)]), Some(3));
    }

    #[test]
    fn test_minimum_destination_identity_tail() {
        let mapping = Mapping::new(
            "m",
            vec![RangeMap::new(interval(0, 9), interval(100, 109))],
        );
        assert_eq!(mapping.minimum_destination(&[interval(8, 15)]), Some(10));
    }

    #[test]
    fn test_minimum_destination_multiple_ranges() {
        let mapping = Mapping::new(
            "m",
            vec![RangeMap::new(interval(10, 20), interval(50, 60))],
        );
        assert_eq!(
            mapping.minimum_destination(&[interval(10, 20), interval(100, 110)]),
            Some(50)
        );
    }

    #[test]
    fn test_minimum_destination_empty_query() {
        let mapping = Mapping::new(
            "m",
            vec![RangeMap::new(interval(10, 20), interval(50, 60))],
        );
        assert_eq!(mapping.minimum_destination(&[]), None);
    }

    #[test]
    fn test_mapping_display() {
        let mapping = Mapping::new(
            "one-to-third",
            vec![RangeMap::new(interval(20, 29), interval(30, 39))],
        );
        assert_eq!(format!("{mapping}"), "one-to-third:\n\t20 - 29 -> 30 - 39\n");
    }
}
