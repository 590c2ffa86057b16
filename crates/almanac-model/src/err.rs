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

use almanac_core::{MapValue, interval::Interval};
use std::fmt::Display;

/// A range map was constructed from intervals of different lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RangeMapLengthMismatchError<T> {
    source: Interval<T>,
    destination: Interval<T>,
}

impl<T: MapValue> RangeMapLengthMismatchError<T> {
    #[inline]
    pub fn new(source: Interval<T>, destination: Interval<T>) -> Self {
        Self {
            source,
            destination,
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
}

impl<T: MapValue> Display for RangeMapLengthMismatchError<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Source range {} and destination range {} have different lengths: {} != {}",
            self.source,
            self.destination,
            self.source.length(),
            self.destination.length()
        )
    }
}

impl<T: MapValue> std::error::Error for RangeMapLengthMismatchError<T> {}

/// A puzzle document could not be parsed into an almanac.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseAlmanacError {
    /// No `seeds:` line was found.
    MissingSeeds,
    /// No `<name> map:` blocks were found.
    NoMappings,
    /// A token could not be parsed as a number.
    InvalidNumber(String),
    /// A map row declared a range of length zero or less.
    NonPositiveLength { name: String },
}

impl Display for ParseAlmanacError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseAlmanacError::MissingSeeds => write!(f, "No seeds line found in input"),
            ParseAlmanacError::NoMappings => write!(f, "No map blocks found in input"),
            ParseAlmanacError::InvalidNumber(text) => {
                write!(f, "Cannot parse '{text}' as a number")
            }
            ParseAlmanacError::NonPositiveLength { name } => {
                write!(f, "Mapping '{name}' contains a row with non-positive length")
            }
        }
    }
}

impl std::error::Error for ParseAlmanacError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_mismatch_error_display() {
        let err =
            RangeMapLengthMismatchError::new(Interval::new(0i64, 4), Interval::new(10i64, 12));
        assert_eq!(
            format!("{err}"),
            "Source range [0, 4] and destination range [10, 12] have different lengths: 5 != 3"
        );
    }

    #[test]
    fn test_parse_error_display() {
        assert_eq!(
            format!("{}", ParseAlmanacError::InvalidNumber("x7".into())),
            "Cannot parse 'x7' as a number"
        );
        assert_eq!(
            format!(
                "{}",
                ParseAlmanacError::NonPositiveLength {
                    name: "seed-to-soil".into()
                }
            ),
            "Mapping 'seed-to-soil' contains a row with non-positive length"
        );
    }
}
