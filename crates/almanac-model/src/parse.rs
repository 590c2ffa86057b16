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

//! # Puzzle Parser
//!
//! Parses the almanac text format: a `seeds:` line of whitespace-separated
//! integers followed by named map blocks, each block holding one
//! `destination source length` triple per line. Every triple becomes a
//! [`RangeMap`] with source `[source, source + length - 1]` and destination
//! `[destination, destination + length - 1]`.

use crate::err::ParseAlmanacError;
use crate::map::{Mapping, RangeMap};
use almanac_core::{MapValue, interval::Interval};
use regex::Regex;
use std::str::FromStr;
use std::sync::LazyLock;

static SEEDS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"seeds:\s(?P<seeds>[0-9\s]+)").expect("valid seeds pattern"));

static BLOCK_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^(?P<name>[a-z-]+) map:\n(?P<rows>(?:\d+ \d+ \d+\n?)+)")
        .expect("valid map block pattern")
});

static ROW_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?P<destination>\d+)\s+(?P<source>\d+)\s+(?P<length>\d+)")
        .expect("valid map row pattern")
});

/// A parsed puzzle document: seed values and the ordered mapping chain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Almanac<T> {
    seeds: Vec<T>,
    mappings: Vec<Mapping<T>>,
}

impl<T> Almanac<T>
where
    T: MapValue + FromStr,
{
    /// Parses an almanac from its text representation.
    ///
    /// # Examples
    ///
    /// ```
    /// use almanac_model::parse::Almanac;
    ///
    /// let text = "seeds: 79 14\n\nseed-to-soil map:\n50 98 2\n52 50 48\n";
    /// let almanac: Almanac<i64> = Almanac::parse(text).unwrap();
    /// assert_eq!(almanac.seeds(), &[79, 14]);
    /// assert_eq!(almanac.mappings().len(), 1);
    /// ```
    pub fn parse(text: &str) -> Result<Self, ParseAlmanacError> {
        let seeds_match = SEEDS_PATTERN
            .captures(text)
            .ok_or(ParseAlmanacError::MissingSeeds)?;
        let seeds = seeds_match["seeds"]
            .split_whitespace()
            .map(parse_number)
            .collect::<Result<Vec<T>, _>>()?;

        let mut mappings = Vec::new();
        for block in BLOCK_PATTERN.captures_iter(text) {
            let name = &block["name"];
            let mut mapping = Mapping::new(name, Vec::new());
            for row in ROW_PATTERN.captures_iter(&block["rows"]) {
                let destination: T = parse_number(&row["destination"])?;
                let source: T = parse_number(&row["source"])?;
                let length: T = parse_number(&row["length"])?;
                if length < T::one() {
                    return Err(ParseAlmanacError::NonPositiveLength {
                        name: name.to_string(),
                    });
                }
                mapping.push(RangeMap::new(
                    Interval::new(source, source + length - T::one()),
                    Interval::new(destination, destination + length - T::one()),
                ));
            }
            mapping.sort_by_source();
            mappings.push(mapping);
        }

        if mappings.is_empty() {
            return Err(ParseAlmanacError::NoMappings);
        }

        Ok(Self { seeds, mappings })
    }

    #[inline]
    pub fn seeds(&self) -> &[T] {
        &self.seeds
    }

    #[inline]
    pub fn mappings(&self) -> &[Mapping<T>] {
        &self.mappings
    }

    /// Reads the seeds line as `(start, length)` pairs.
    ///
    /// A trailing unpaired seed and pairs with non-positive length are
    /// skipped.
    pub fn seed_ranges(&self) -> Vec<Interval<T>> {
        self.seeds
            .chunks_exact(2)
            .filter_map(|pair| Interval::try_new(pair[0], pair[0] + pair[1] - T::one()))
            .collect()
    }
}

fn parse_number<T: FromStr>(text: &str) -> Result<T, ParseAlmanacError> {
    text.parse()
        .map_err(|_| ParseAlmanacError::InvalidNumber(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
seeds: 79 14 55 13

seed-to-soil map:
50 98 2
52 50 48

soil-to-fertilizer map:
0 15 37
37 52 2
39 0 15
";

    #[test]
    fn test_parse_seeds() {
        let almanac: Almanac<i64> = Almanac::parse(EXAMPLE).unwrap();
        assert_eq!(almanac.seeds(), &[79, 14, 55, 13]);
    }

    #[test]
    fn test_parse_mappings_in_document_order() {
        let almanac: Almanac<i64> = Almanac::parse(EXAMPLE).unwrap();
        let names: Vec<&str> = almanac.mappings().iter().map(|m| m.name()).collect();
        assert_eq!(names, vec!["seed-to-soil", "soil-to-fertilizer"]);
    }

    #[test]
    fn test_parse_converts_triples_to_range_maps() {
        let almanac: Almanac<i64> = Almanac::parse(EXAMPLE).unwrap();
        let seed_to_soil = &almanac.mappings()[0];
        // entries sorted by source start: "52 50 48" then "50 98 2"
        assert_eq!(
            seed_to_soil.entries()[0],
            RangeMap::new(Interval::new(50, 97), Interval::new(52, 99))
        );
        assert_eq!(
            seed_to_soil.entries()[1],
            RangeMap::new(Interval::new(98, 99), Interval::new(50, 51))
        );
    }

    #[test]
    fn test_seed_ranges_pairs_start_and_length() {
        let almanac: Almanac<i64> = Almanac::parse(EXAMPLE).unwrap();
        assert_eq!(
            almanac.seed_ranges(),
            vec![Interval::new(79, 92), Interval::new(55, 67)]
        );
    }

    #[test]
    fn test_parse_missing_seeds_line() {
        let err = Almanac::<i64>::parse("seed-to-soil map:\n50 98 2\n").unwrap_err();
        assert_eq!(err, ParseAlmanacError::MissingSeeds);
    }

    #[test]
    fn test_parse_no_map_blocks() {
        let err = Almanac::<i64>::parse("seeds: 1 2 3\n").unwrap_err();
        assert_eq!(err, ParseAlmanacError::NoMappings);
    }

    #[test]
    fn test_parse_zero_length_row() {
        let err =
            Almanac::<i64>::parse("seeds: 1\n\nseed-to-soil map:\n50 98 0\n").unwrap_err();
        assert_eq!(
            err,
            ParseAlmanacError::NonPositiveLength {
                name: "seed-to-soil".into()
            }
        );
    }

    #[test]
    fn test_parse_number_overflow_is_invalid() {
        let text = format!("seeds: {}\n\na-to-b map:\n1 2 3\n", "9".repeat(40));
        let err = Almanac::<i64>::parse(&text).unwrap_err();
        assert!(matches!(err, ParseAlmanacError::InvalidNumber(_)));
    }
}
