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

//! # Almanac Model (`almanac-model`)
//!
//! This crate provides the data model for piecewise integer range mappings.
//! It builds on the interval primitives of `almanac-core` to represent:
//!
//! - **[`map::RangeMap`]**: a bijective association between a source interval
//!   and an equal-length destination interval.
//! - **[`map::Mapping`]**: a named, ordered collection of range maps with
//!   identity semantics on uncovered gaps.
//! - **[`parse::Almanac`]**: a parsed puzzle document holding the seed values
//!   and the ordered chain of mappings.
//!
//! All types are generic over the numeric coordinate type `T: MapValue`.

pub mod err;
pub mod map;
pub mod parse;

pub mod prelude {
    //! Convenience re-exports of the commonly used model types.
    pub use crate::err::{ParseAlmanacError, RangeMapLengthMismatchError};
    pub use crate::map::{Mapping, RangeMap};
    pub use crate::parse::Almanac;
    pub use almanac_core::{MapValue, interval::Interval};
}
