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

//! # Almanac Core (`almanac-core`)
//!
//! Foundational primitives for piecewise integer range mappings: the
//! inclusive [`interval::Interval`] value type and the [`MapValue`] trait
//! alias that fixes the numeric requirements every coordinate type must
//! satisfy.

use num_traits::{PrimInt, Signed};
use std::fmt::{Debug, Display};

pub mod interval;

/// Numeric requirements for a mapping coordinate.
///
/// Every model and engine type is generic over `T: MapValue`; `i64` is the
/// type drivers typically instantiate.
pub trait MapValue: PrimInt + Signed + Send + Sync + Debug + Display {}
impl<T> MapValue for T where T: PrimInt + Signed + Send + Sync + Debug + Display {}
