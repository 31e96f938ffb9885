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

//! # Build Configuration
//!
//! The cargo features of this crate, surfaced as one constant so policies and
//! tests can branch on them with ordinary `if`s.
//!
//! | Feature | Effect |
//! |---|---|
//! | `location` (default) | capture source locations in wrappers and reports |
//! | `saturating` | saturating instead of native results by default |
//! | `report-uninitialized` | report default construction |
//! | `quiet-conversion` | do not report lossy conversions |
//! | `quiet-operation` | do not report failed operations |
//! | `panic-on-uninitialized` | escalate default construction |
//! | `panic-on-conversion` | escalate lossy conversions |
//! | `panic-on-operation` | escalate failed operations |
//! | `native-types` | the `types` aliases become plain primitives |

use crate::error::ErrorCategory;

/// The switches this crate was built with.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Config {
    /// Source locations are captured.
    pub capture_location: bool,
    /// `DefaultResultPolicy` saturates.
    pub saturating: bool,
    /// Default construction is reported.
    pub report_uninitialized: bool,
    /// Lossy conversions are reported.
    pub report_conversion: bool,
    /// Failed operations are reported.
    pub report_operation: bool,
    /// Default construction is escalated.
    pub panic_on_uninitialized: bool,
    /// Lossy conversions are escalated.
    pub panic_on_conversion: bool,
    /// Failed operations are escalated.
    pub panic_on_operation: bool,
    /// The `types` aliases are plain primitives.
    pub native_types: bool,
}

impl Config {
    /// Returns `true` if errors of `category` are written to the sink.
    #[inline(always)]
    pub const fn reports(&self, category: ErrorCategory) -> bool {
        match category {
            ErrorCategory::Uninitialized => self.report_uninitialized,
            ErrorCategory::Conversion => self.report_conversion,
            ErrorCategory::Operation => self.report_operation,
        }
    }

    /// Returns `true` if errors of `category` are escalated.
    #[inline(always)]
    pub const fn escalates(&self, category: ErrorCategory) -> bool {
        match category {
            ErrorCategory::Uninitialized => self.panic_on_uninitialized,
            ErrorCategory::Conversion => self.panic_on_conversion,
            ErrorCategory::Operation => self.panic_on_operation,
        }
    }

    /// Returns `true` if default construction reaches the error policy at
    /// all.
    #[inline(always)]
    pub const fn tracks_uninitialized(&self) -> bool {
        self.report_uninitialized || self.panic_on_uninitialized
    }
}

/// The configuration of this build.
pub const CONFIG: Config = Config {
    capture_location: cfg!(feature = "location"),
    saturating: cfg!(feature = "saturating"),
    report_uninitialized: cfg!(feature = "report-uninitialized"),
    report_conversion: !cfg!(feature = "quiet-conversion"),
    report_operation: !cfg!(feature = "quiet-operation"),
    panic_on_uninitialized: cfg!(feature = "panic-on-uninitialized"),
    panic_on_conversion: cfg!(feature = "panic-on-conversion"),
    panic_on_operation: cfg!(feature = "panic-on-operation"),
    native_types: cfg!(feature = "native-types"),
};
