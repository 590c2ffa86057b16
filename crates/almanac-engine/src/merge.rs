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

//! # Mapping Composition
//!
//! [`merge`] composes two chained mappings `first: A -> B` and
//! `second: B -> C` into a single mapping `A -> C`. Applying `first` and
//! then `second` to any value of `first`'s covered domain equals applying
//! the composed mapping directly.
//!
//! The composition is computed as a boundary sweep along the shared `B`
//! axis: every interval start and end of both inputs becomes a
//! [`Border`] event, the events are sorted by shared-axis coordinate, and a
//! state machine walks them left to right with two working slots. Coincident
//! boundaries of different provenance collapse into merged points; partially
//! overlapping ranges are split at the offending coordinate and the pieces
//! re-queued. Each pass either emits one composed pair or strictly reduces
//! the unresolved span, so the sweep terminates in time linear in the number
//! of boundary events.

use crate::border::{Border, BorderEdge, BorderKind};
use crate::err::MergeError;
use almanac_core::{MapValue, interval::Interval};
use almanac_model::map::{Mapping, RangeMap};
use std::collections::VecDeque;
use tracing::{debug, trace};

/// States of the composition sweep.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum MergeState {
    Read,
    CreatePair,
    MergeLeft,
    MergeRight,
    Split,
    Done,
}

/// Composes two chained mappings into one.
///
/// `first` maps `A -> B`, `second` maps `B -> C`; the result maps `A -> C`
/// and is named from the leading segment of `first` and the trailing segment
/// of `second` (`seed-to-soil` + `soil-to-fertilizer` =
/// `seed-to-fertilizer`). Entry order of the inputs does not matter: the
/// boundary events are sorted internally.
///
/// In the output, pieces remapped through `first` precede the pass-through
/// pieces of `second`. A value of `first`'s source domain can also lie in a
/// pass-through source range (those ranges live on the `B` axis, and a `B`
/// value may equally be an `A` value); the ordering makes
/// [`Mapping::apply`]'s first-match rule resolve such a collision to the
/// remapped piece, which is the one composition demands.
///
/// # Errors
///
/// Fails with [`MergeError::OverlappingRanges`] when `first`'s destination
/// ranges or `second`'s source ranges overlap each other on the shared axis,
/// and with one of the internal-invariant variants when the sweep reaches a
/// geometry it cannot resolve; see [`MergeError`].
///
/// # Examples
///
/// ```
/// use almanac_core::interval::Interval;
/// use almanac_engine::merge;
/// use almanac_model::map::{Mapping, RangeMap};
///
/// let first = Mapping::new(
///     "seed-to-soil",
///     vec![RangeMap::new(Interval::new(20i64, 60), Interval::new(30, 70))],
/// );
/// let second = Mapping::new(
///     "soil-to-fertilizer",
///     vec![RangeMap::new(Interval::new(40i64, 50), Interval::new(10, 20))],
/// );
/// let composed = merge(&first, &second).unwrap();
/// assert_eq!(composed.name(), "seed-to-fertilizer");
/// assert_eq!(composed.apply(35), 15);
/// ```
pub fn merge<T: MapValue>(
    first: &Mapping<T>,
    second: &Mapping<T>,
) -> Result<Mapping<T>, MergeError<T>> {
    ensure_disjoint(
        first.name(),
        first.entries().iter().map(|entry| entry.destination()),
    )?;
    ensure_disjoint(
        second.name(),
        second.entries().iter().map(|entry| entry.source()),
    )?;

    let entries = Sweep::new(first, second).run()?;
    Ok(Mapping::new(
        composed_name(first.name(), second.name()),
        entries,
    ))
}

/// Builds the composed mapping name from two chained mapping names.
///
/// Names follow the hyphen-delimited `X-to-Y` convention; the leading
/// segment of `first` is joined with the trailing segment of `second`. A
/// name without hyphens is used whole.
pub fn composed_name(first: &str, second: &str) -> String {
    let head = first.split_once('-').map_or(first, |(head, _)| head);
    let tail = second.rsplit_once('-').map_or(second, |(_, tail)| tail);
    format!("{head}-to-{tail}")
}

/// Rejects inputs whose shared-axis ranges overlap within one mapping.
///
/// The sweep pairs boundaries strictly by coordinate order; overlapping
/// ranges inside a single input would interleave unrelated boundaries and
/// silently produce wrong output, so they are refused up front.
fn ensure_disjoint<T: MapValue>(
    name: &str,
    intervals: impl Iterator<Item = Interval<T>>,
) -> Result<(), MergeError<T>> {
    let mut sorted: Vec<Interval<T>> = intervals.collect();
    sorted.sort_by_key(|interval| interval.start());
    for pair in sorted.windows(2) {
        if pair[0].intersects(&pair[1]) {
            return Err(MergeError::OverlappingRanges {
                name: name.to_string(),
                first: pair[0],
                second: pair[1],
            });
        }
    }
    Ok(())
}

/// Collapses two coincident boundaries of opposite provenance into a merged
/// point carrying the composed-source (`A`) coordinate as position and the
/// composed-destination (`C`) coordinate as partner.
fn merge_point<T: MapValue>(
    left: Border<T>,
    right: Border<T>,
    edge: BorderEdge,
) -> Result<Border<T>, MergeError<T>> {
    match (left.kind(), right.kind()) {
        (BorderKind::FromFirst, BorderKind::FromSecond) => Ok(Border::new(
            left.partner(),
            right.partner(),
            BorderKind::Merged,
            edge,
        )),
        (BorderKind::FromSecond, BorderKind::FromFirst) => Ok(Border::new(
            right.partner(),
            left.partner(),
            BorderKind::Merged,
            edge,
        )),
        _ => Err(MergeError::InvalidMergePoint { left, right }),
    }
}

/// One composition sweep: the event queue, the two working slots and the
/// accumulated output.
///
/// Output is bucketed by provenance. Pieces remapped through the first
/// mapping have sources on the composed source axis; pass-through pieces of
/// the second mapping have sources on the shared axis, and the two groups
/// may collide on a value that is both. Emitting the remapped bucket first
/// lets [`Mapping::apply`]'s first-match rule resolve such a collision in
/// favor of the remapped piece.
struct Sweep<T> {
    queue: VecDeque<Border<T>>,
    left: Option<Border<T>>,
    right: Option<Border<T>>,
    remapped: Vec<RangeMap<T>>,
    passthrough: Vec<RangeMap<T>>,
}

impl<T: MapValue> Sweep<T> {
    fn new(first: &Mapping<T>, second: &Mapping<T>) -> Self {
        let mut borders =
            Vec::with_capacity(2 * (first.entries().len() + second.entries().len()));
        for entry in first.entries() {
            borders.push(Border::new(
                entry.destination().start(),
                entry.source().start(),
                BorderKind::FromFirst,
                BorderEdge::Begin,
            ));
            borders.push(Border::new(
                entry.destination().end(),
                entry.source().end(),
                BorderKind::FromFirst,
                BorderEdge::End,
            ));
        }
        for entry in second.entries() {
            borders.push(Border::new(
                entry.source().start(),
                entry.destination().start(),
                BorderKind::FromSecond,
                BorderEdge::Begin,
            ));
            borders.push(Border::new(
                entry.source().end(),
                entry.destination().end(),
                BorderKind::FromSecond,
                BorderEdge::End,
            ));
        }
        // Begins sort before ends at equal coordinates: ranges touching at a
        // shared-axis boundary must merge at that point, not pass through it.
        borders.sort_by_key(|border| {
            (
                border.position(),
                match border.edge() {
                    BorderEdge::Begin => 0u8,
                    BorderEdge::End => 1u8,
                },
            )
        });

        Self {
            queue: borders.into(),
            left: None,
            right: None,
            remapped: Vec::new(),
            passthrough: Vec::new(),
        }
    }

    fn run(mut self) -> Result<Vec<RangeMap<T>>, MergeError<T>> {
        let mut state = MergeState::Read;
        while state != MergeState::Done {
            trace!(?state, queued = self.queue.len(), "sweep transition");
            state = match state {
                MergeState::Read => self.read()?,
                MergeState::CreatePair => self.create_pair()?,
                MergeState::MergeLeft => self.merge_left()?,
                MergeState::MergeRight => self.merge_right()?,
                MergeState::Split => self.split()?,
                MergeState::Done => MergeState::Done,
            };
        }
        let mut entries = self.remapped;
        entries.extend(self.passthrough);
        Ok(entries)
    }

    /// Refills the working slots and classifies the pair.
    fn read(&mut self) -> Result<MergeState, MergeError<T>> {
        if self.queue.is_empty() && self.left.is_none() && self.right.is_none() {
            return Ok(MergeState::Done);
        }
        if self.left.is_none() {
            self.left = Some(self.queue.pop_front().ok_or(MergeError::ExhaustedEvents)?);
        }
        if self.right.is_none() {
            self.right = Some(self.queue.pop_front().ok_or(MergeError::ExhaustedEvents)?);
        }
        let (left, right) = self.slots();

        // A merged event's position is a composed-source coordinate, not a
        // shared-axis one; equality against the right slot only means
        // coincidence when the left event still lives on the shared axis.
        Ok(if left.kind() == right.kind() {
            MergeState::CreatePair
        } else if left.kind() != BorderKind::Merged && left.position() == right.position() {
            MergeState::MergeLeft
        } else if left.kind() == BorderKind::Merged
            && self
                .queue
                .front()
                .is_some_and(|next| next.position() == right.position())
        {
            MergeState::MergeRight
        } else {
            MergeState::Split
        })
    }

    /// Emits the composed pair bounded by the two slots.
    fn create_pair(&mut self) -> Result<MergeState, MergeError<T>> {
        let (left, right) = self.take_slots();
        let (source, destination) = match (left.kind(), right.kind()) {
            (BorderKind::FromSecond, BorderKind::FromSecond)
            | (BorderKind::Merged, BorderKind::Merged) => (
                (left.position(), right.position()),
                (left.partner(), right.partner()),
            ),
            (BorderKind::FromFirst, BorderKind::FromFirst) => (
                (left.partner(), right.partner()),
                (left.position(), right.position()),
            ),
            _ => return Err(MergeError::UnsupportedGeometry { left, right }),
        };

        let source = Interval::try_new(source.0, source.1)
            .ok_or(MergeError::EmptyOutput { left, right })?;
        let destination = Interval::try_new(destination.0, destination.1)
            .ok_or(MergeError::EmptyOutput { left, right })?;
        let pair = RangeMap::try_new(source, destination).map_err(|_| {
            MergeError::MismatchedOutput {
                source,
                destination,
            }
        })?;

        debug!(%pair, "emitting composed pair");
        if matches!(
            (left.kind(), right.kind()),
            (BorderKind::FromSecond, BorderKind::FromSecond)
        ) {
            self.passthrough.push(pair);
        } else {
            self.remapped.push(pair);
        }
        Ok(MergeState::Read)
    }

    /// Collapses two coincident boundaries into one merged point.
    fn merge_left(&mut self) -> Result<MergeState, MergeError<T>> {
        let (left, right) = self.take_slots();
        let point = merge_point(left, right, BorderEdge::Begin)?;
        self.queue.push_front(point);
        Ok(MergeState::Read)
    }

    /// Propagates a merge to the next queued event when three boundaries
    /// coincide at one shared-axis coordinate.
    fn merge_right(&mut self) -> Result<MergeState, MergeError<T>> {
        let (left, right) = self.take_slots();
        if left.kind() != BorderKind::Merged {
            return Err(MergeError::UnsupportedGeometry { left, right });
        }
        let next = self.queue.pop_front().ok_or(MergeError::ExhaustedEvents)?;
        let point = merge_point(right, next, BorderEdge::End)?;
        self.queue.push_front(point);
        self.queue.push_front(left);
        Ok(MergeState::Read)
    }

    /// Truncates the wider range at the narrower one's boundary, inserting a
    /// synthetic boundary pair at the gap and re-queuing the originals.
    fn split(&mut self) -> Result<MergeState, MergeError<T>> {
        let (left, right) = self.take_slots();
        let one = T::one();
        match (left.edge(), right.edge(), right.kind()) {
            (BorderEdge::Begin, BorderEdge::Begin, _) => {
                // cut left's range just before right's start
                let delta = right.position() - left.position();
                self.queue.push_front(Border::new(
                    left.position() + delta,
                    left.partner() + delta,
                    left.kind(),
                    BorderEdge::Begin,
                ));
                self.queue.push_front(right);
                self.queue.push_front(Border::new(
                    left.position() + delta - one,
                    left.partner() + delta - one,
                    left.kind(),
                    BorderEdge::End,
                ));
                self.queue.push_front(left);
            }
            (BorderEdge::End, BorderEdge::End, _) => {
                // cut right's range just after left's end
                let delta = right.position() - left.position();
                self.queue.push_front(right);
                self.queue.push_front(Border::new(
                    right.position() - delta + one,
                    right.partner() - delta + one,
                    right.kind(),
                    BorderEdge::Begin,
                ));
                self.queue.push_front(left);
                self.queue.push_front(Border::new(
                    right.position() - delta,
                    right.partner() - delta,
                    right.kind(),
                    BorderEdge::End,
                ));
            }
            (BorderEdge::Begin, BorderEdge::End, BorderKind::FromSecond) => {
                if left.kind() != BorderKind::Merged {
                    return Err(MergeError::UnsupportedGeometry { left, right });
                }
                // the merged point discarded its provenance; the synthetic
                // remainder takes the kind opposite to right's
                let delta = right.partner() - left.partner();
                self.queue.push_front(Border::new(
                    right.position() + one,
                    left.position() + delta + one,
                    BorderKind::FromFirst,
                    BorderEdge::Begin,
                ));
                self.queue.push_front(Border::new(
                    right.position(),
                    left.position() + delta,
                    BorderKind::FromFirst,
                    BorderEdge::End,
                ));
                self.queue.push_front(right);
                self.queue.push_front(left);
            }
            (BorderEdge::Begin, BorderEdge::End, BorderKind::FromFirst) => {
                if left.kind() != BorderKind::Merged {
                    return Err(MergeError::UnsupportedGeometry { left, right });
                }
                let delta = right.partner() - left.position();
                self.queue.push_front(Border::new(
                    right.position() + one,
                    left.partner() + delta + one,
                    BorderKind::FromSecond,
                    BorderEdge::Begin,
                ));
                self.queue.push_front(Border::new(
                    right.position(),
                    left.partner() + delta,
                    BorderKind::FromSecond,
                    BorderEdge::End,
                ));
                self.queue.push_front(right);
                self.queue.push_front(left);
            }
            _ => return Err(MergeError::UnsupportedGeometry { left, right }),
        }
        Ok(MergeState::Read)
    }

    fn slots(&self) -> (Border<T>, Border<T>) {
        match (self.left, self.right) {
            (Some(left), Some(right)) => (left, right),
            _ => unreachable!("both slots are filled before classification"),
        }
    }

    fn take_slots(&mut self) -> (Border<T>, Border<T>) {
        match (self.left.take(), self.right.take()) {
            (Some(left), Some(right)) => (left, right),
            _ => unreachable!("both slots are filled after READ"),
        }
    }
}
