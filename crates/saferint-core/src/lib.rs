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

//! # Saferint Core
//!
//! The foundations of C-style checked integer arithmetic: which integer kinds
//! exist, how wide they are, how values move between them, and how operands
//! are promoted before an operator runs.
//!
//! ## Modules
//!
//! - `kind`: The twelve C integer kinds (`IntegerKind`) and the data models
//!   (`DataModel`) that assign them widths, including the build target's own.
//! - `num`: The primitives standing in for each kind (`NativeInteger`,
//!   `Arithmetic`), the range check, and the clamping conversion functions
//!   (`int8_from_int16`, `uint64_from_int32`, ...).
//! - `promotion`: The usual arithmetic conversions, both as a compile-time
//!   table over kinds and as the `Promote` trait over primitives.
//!
//! Overflow detection and the checked wrapper type live in
//! `saferint-checked`, which builds on this crate.

pub mod kind;
pub mod num;
pub mod promotion;
