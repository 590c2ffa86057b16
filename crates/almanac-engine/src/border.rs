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

//! # Boundary Events
//!
//! Transient sweep-line markers for the start or end of an interval, tagged
//! with provenance and the paired coordinate on the other axis. Events are
//! created and consumed within a single merge call and own no resources.

use almanac_core::MapValue;
use std::fmt;

/// Provenance of a boundary event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BorderKind {
    /// Destination boundary of a first-mapping entry (`A -> B`).
    FromFirst,
    /// Source boundary of a second-mapping entry (`B -> C`).
    FromSecond,
    /// A collapsed point where both mappings coincide on the shared axis.
    Merged,
}

impl fmt::Display for BorderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BorderKind::FromFirst => write!(f, "first"),
            BorderKind::FromSecond => write!(f, "second"),
            BorderKind::Merged => write!(f, "merged"),
        }
    }
}

/// Whether an event marks the start or the end boundary of its interval.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BorderEdge {
    Begin,
    End,
}

impl fmt::Display for BorderEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BorderEdge::Begin => write!(f, "begin"),
            BorderEdge::End => write!(f, "end"),
        }
    }
}

/// A single sweep-line boundary event.
///
/// For `FromFirst` and `FromSecond` events `position` is the shared-axis
/// (`B`) coordinate and `partner` the corresponding coordinate on the other
/// axis (`A` or `C`). A `Merged` event has already left the shared axis:
/// its `position` is the composed source (`A`) coordinate and its `partner`
/// the composed destination (`C`) coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Border<T> {
    position: T,
    partner: T,
    kind: BorderKind,
    edge: BorderEdge,
}

impl<T: MapValue> Border<T> {
    #[inline]
    pub fn new(position: T, partner: T, kind: BorderKind, edge: BorderEdge) -> Self {
        Self {
            position,
            partner,
            kind,
            edge,
        }
    }

    #[inline]
    pub fn position(&self) -> T {
        self.position
    }

    #[inline]
    pub fn partner(&self) -> T {
        self.partner
    }

    #[inline]
    pub fn kind(&self) -> BorderKind {
        self.kind
    }

    #[inline]
    pub fn edge(&self) -> BorderEdge {
        self.edge
    }
}

impl<T: MapValue> fmt::Display for Border<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} at {} (partner {})",
            self.kind, self.edge, self.position, self.partner
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_border_accessors() {
        let border = Border::new(30i64, 20, BorderKind::FromFirst, BorderEdge::Begin);
        assert_eq!(border.position(), 30);
        assert_eq!(border.partner(), 20);
        assert_eq!(border.kind(), BorderKind::FromFirst);
        assert_eq!(border.edge(), BorderEdge::Begin);
    }

    #[test]
    fn test_border_display() {
        let border = Border::new(40i64, 10, BorderKind::FromSecond, BorderEdge::End);
        assert_eq!(format!("{border}"), "second end at 40 (partner 10)");
    }
}
