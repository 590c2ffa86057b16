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

use crate::border::Border;
use almanac_core::{MapValue, interval::Interval};
use std::fmt::Display;

/// A merge failed, either on a precondition or on an internal invariant.
///
/// None of these are recoverable: a precondition variant indicates a defect
/// in the caller's input, every other variant an algorithmic bug. The
/// offending events are carried for diagnostics and never coerced into a
/// best-guess pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeError<T> {
    /// Two shared-axis ranges of one input mapping overlap.
    OverlappingRanges {
        name: String,
        first: Interval<T>,
        second: Interval<T>,
    },
    /// A pair of boundary events would bound a zero-length output range.
    EmptyOutput { left: Border<T>, right: Border<T> },
    /// A produced pair has source and destination of different lengths.
    MismatchedOutput {
        source: Interval<T>,
        destination: Interval<T>,
    },
    /// Two coincident events could not be collapsed into a merged point.
    InvalidMergePoint { left: Border<T>, right: Border<T> },
    /// The event classification reached a combination no split rule covers.
    UnsupportedGeometry { left: Border<T>, right: Border<T> },
    /// The event queue ran dry while a boundary was still unpaired.
    ExhaustedEvents,
}

impl<T: MapValue> Display for MergeError<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MergeError::OverlappingRanges {
                name,
                first,
                second,
            } => write!(
                f,
                "Mapping '{name}' has overlapping shared-axis ranges {first} and {second}"
            ),
            MergeError::EmptyOutput { left, right } => write!(
                f,
                "Events '{left}' and '{right}' bound a zero-length output range"
            ),
            MergeError::MismatchedOutput {
                source,
                destination,
            } => write!(
                f,
                "Composed pair has mismatched lengths: source {source}, destination {destination}"
            ),
            MergeError::InvalidMergePoint { left, right } => write!(
                f,
                "Cannot collapse events '{left}' and '{right}' into a merged point"
            ),
            MergeError::UnsupportedGeometry { left, right } => write!(
                f,
                "No rule covers the event combination '{left}' and '{right}'"
            ),
            MergeError::ExhaustedEvents => {
                write!(f, "Event queue exhausted with an unpaired boundary")
            }
        }
    }
}

impl<T: MapValue> std::error::Error for MergeError<T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::border::{BorderEdge, BorderKind};

    #[test]
    fn test_overlapping_ranges_display() {
        let err: MergeError<i64> = MergeError::OverlappingRanges {
            name: "seed-to-soil".into(),
            first: Interval::new(0, 10),
            second: Interval::new(5, 15),
        };
        assert_eq!(
            format!("{err}"),
            "Mapping 'seed-to-soil' has overlapping shared-axis ranges [0, 10] and [5, 15]"
        );
    }

    #[test]
    fn test_unsupported_geometry_names_both_events() {
        let err: MergeError<i64> = MergeError::UnsupportedGeometry {
            left: Border::new(3, 7, BorderKind::Merged, BorderEdge::End),
            right: Border::new(9, 1, BorderKind::FromFirst, BorderEdge::Begin),
        };
        let text = format!("{err}");
        assert!(text.contains("merged end at 3 (partner 7)"));
        assert!(text.contains("first begin at 9 (partner 1)"));
    }
}
