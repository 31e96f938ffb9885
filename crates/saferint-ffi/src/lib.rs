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

//! # Saferint FFI
//!
//! C-compatible bindings for the conversion functions and the promotion table
//! of `saferint-core`. Every export is a plain function over plain values:
//! there are no handles to allocate or free.
//!
//! ## Exported API
//!
//! - `safer_<dst>_from_<src>`: clamping conversions between the eight
//!   fixed-width integers, returning `{ value, error }` structs.
//! - `safer_promote`: the common kind of two operands.
//! - `safer_integer_kind_bits`, `safer_integer_kind_is_signed`: kind widths
//!   and signedness on this target.
//! - `safer_integer_kind_name`, `safer_conversion_error_name`: static,
//!   NUL-terminated names.
//!
//! ## Safety
//!
//! `IntegerKind` and `ConversionError` are `#[repr(C)]` enums. Passing a
//! discriminant outside their declared range is undefined behavior.

pub mod convert;
pub mod kind;
