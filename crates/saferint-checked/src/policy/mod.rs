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

//! # Policies
//!
//! The two swappable halves of a checked operation, chosen per type through
//! the type parameters of `CheckedInteger`.
//!
//! ## Submodules
//!
//! - `result`: `ResultPolicy` decides which value an operation produces,
//!   with `NativeResult` (the native bit pattern) and `SaturatingResult`
//!   (clamped to the nearest bound).
//! - `error`: `ErrorPolicy` decides what happens to a detected error:
//!   reporting it to the sink, logging it through `tracing`, escalating it as
//!   a panic, or ignoring it. Policies compose as tuples.
//!
//! Overflow detection itself is never a policy: every combination runs the
//! same detectors and differs only in what it does with their verdict.

pub mod error;
pub mod result;
