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

//! # Saferint Checked
//!
//! Integers that behave exactly like C integers, except that every overflow,
//! lossy conversion, division by zero and out-of-range shift is noticed.
//! Operands are promoted with the usual arithmetic conversions of
//! `saferint-core` before an operator runs, so results match what a C
//! compiler would produce for the same expression.
//!
//! ## Modules
//!
//! - `integer`: The `CheckedInteger<T, R, E>` wrapper and its operators.
//! - `policy`: What a faulty operation returns (`ResultPolicy`) and who hears
//!   about it (`ErrorPolicy`).
//! - `detect`: Pure overflow detection for every operator.
//! - `evaluate`: One-shot checked evaluation on plain primitives.
//! - `operation`, `error`: The vocabulary of operators and error codes.
//! - `diagnostics`: Debug contexts and the process-wide report sink.
//! - `config`: The build-time configuration selected by cargo features.
//! - `types`: `SafeInt32`, `SafeLong` and friends.
//!
//! ## Example
//!
//! ```
//! use saferint_checked::integer::CheckedInteger;
//! use saferint_checked::policy::error::SilentPolicy;
//! use saferint_checked::policy::result::{NativeResult, SaturatingResult};
//!
//! let wrapping = CheckedInteger::<i32, NativeResult, SilentPolicy>::new(i32::MAX);
//! assert_eq!((wrapping + 1i32).get(), i32::MIN);
//!
//! let saturating = CheckedInteger::<i32, SaturatingResult, SilentPolicy>::new(i32::MAX);
//! assert_eq!((saturating + 1i32).get(), i32::MAX);
//! ```

pub mod config;
pub mod detect;
pub mod diagnostics;
pub mod error;
pub mod evaluate;
pub mod integer;
pub mod operation;
pub mod policy;
pub mod types;

#[cfg(test)]
mod testing;
