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

//! # Diagnostics
//!
//! The snapshot taken when a checked integer detects an error, and the
//! process-wide sink that reports are written to.
//!
//! A [`DebugContext`] is built once per failing operation and handed by value
//! to the error policy. Its `Display` impl renders the multi-line report: the
//! operation, each operand's kind, bounds and value (before and after
//! promotion), the result, and the source location when captured.
//!
//! The sink defaults to standard error. It is guarded by a reentrant mutex,
//! so replacing it while other threads report is safe, though reports from
//! different threads may interleave in any order. A report raised while the
//! sink itself is writing on the same thread (a sink that does checked
//! arithmetic) goes to standard error instead of deadlocking.

use crate::error::ErrorCode;
use crate::operation::Operation;
use parking_lot::ReentrantMutex;
use saferint_core::kind::{DataModel, IntegerKind};
use saferint_core::num::native::NativeInteger;
use std::cell::RefCell;
use std::fmt;
use std::io::{self, Write};
use std::panic::Location;
use tracing::{debug, warn};

/// One operand (or result) as it appears in a report.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct OperandReport {
    kind: IntegerKind,
    value: i128,
    promoted: Option<(IntegerKind, i128)>,
}

impl OperandReport {
    /// Records `value` as is.
    #[inline]
    pub fn of<T>(value: T) -> Self
    where
        T: NativeInteger,
    {
        Self {
            kind: T::KIND,
            value: value.as_i128(),
            promoted: None,
        }
    }

    /// Records `value` together with its value after promotion to `P`.
    ///
    /// The promoted half is omitted when promotion did not change the kind.
    #[inline]
    pub fn promoted<T, P>(value: T, promoted: P) -> Self
    where
        T: NativeInteger,
        P: NativeInteger,
    {
        Self {
            kind: T::KIND,
            value: value.as_i128(),
            promoted: (T::KIND != P::KIND).then(|| (P::KIND, promoted.as_i128())),
        }
    }

    /// Records a value of a runtime kind.
    #[inline]
    pub const fn from_kind(kind: IntegerKind, value: i128) -> Self {
        Self {
            kind,
            value,
            promoted: None,
        }
    }

    /// Returns the kind of the operand before promotion.
    #[inline(always)]
    pub const fn kind(&self) -> IntegerKind {
        self.kind
    }

    /// Returns the value of the operand before promotion.
    #[inline(always)]
    pub const fn value(&self) -> i128 {
        self.value
    }

    /// Returns the kind the operand was promoted to, if it changed.
    #[inline(always)]
    pub fn promoted_kind(&self) -> Option<IntegerKind> {
        self.promoted.map(|(kind, _)| kind)
    }

    /// Returns the operand's value after promotion, if the kind changed.
    #[inline(always)]
    pub fn promoted_value(&self) -> Option<i128> {
        self.promoted.map(|(_, value)| value)
    }
}

fn write_kind(f: &mut fmt::Formatter<'_>, kind: IntegerKind, value: i128) -> fmt::Result {
    let m = DataModel::NATIVE;
    write!(
        f,
        "{} ({}, {} bits, [{}, {}]) = {}",
        kind,
        if kind.is_signed(m) { "signed" } else { "unsigned" },
        kind.bits(m),
        kind.min_value(m),
        kind.max_value(m),
        value
    )
}

impl fmt::Display for OperandReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_kind(f, self.kind, self.value)?;
        if let Some((kind, value)) = self.promoted {
            f.write_str(", promoted to ")?;
            write_kind(f, kind, value)?;
        }
        Ok(())
    }
}

/// An immutable snapshot of a failing operation.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct DebugContext {
    operation: Operation,
    error: ErrorCode,
    operand_1: Option<OperandReport>,
    operand_2: Option<OperandReport>,
    result: Option<OperandReport>,
    location: Option<&'static Location<'static>>,
}

impl DebugContext {
    /// Creates a snapshot with no operands recorded yet.
    #[inline]
    pub const fn new(operation: Operation, error: ErrorCode) -> Self {
        Self {
            operation,
            error,
            operand_1: None,
            operand_2: None,
            result: None,
            location: None,
        }
    }

    /// Records the first operand.
    #[inline]
    pub const fn with_operand_1(mut self, operand: OperandReport) -> Self {
        self.operand_1 = Some(operand);
        self
    }

    /// Records the second operand.
    #[inline]
    pub const fn with_operand_2(mut self, operand: OperandReport) -> Self {
        self.operand_2 = Some(operand);
        self
    }

    /// Records the result.
    #[inline]
    pub const fn with_result(mut self, result: OperandReport) -> Self {
        self.result = Some(result);
        self
    }

    /// Records the source location, if one was captured.
    #[inline]
    pub const fn with_location(mut self, location: Option<&'static Location<'static>>) -> Self {
        self.location = location;
        self
    }

    /// Returns the operation.
    #[inline(always)]
    pub const fn operation(&self) -> Operation {
        self.operation
    }

    /// Returns the recorded error.
    #[inline(always)]
    pub const fn error(&self) -> ErrorCode {
        self.error
    }

    /// Returns the first operand, if recorded.
    #[inline(always)]
    pub const fn operand_1(&self) -> Option<&OperandReport> {
        self.operand_1.as_ref()
    }

    /// Returns the second operand, if recorded.
    #[inline(always)]
    pub const fn operand_2(&self) -> Option<&OperandReport> {
        self.operand_2.as_ref()
    }

    /// Returns the result, if recorded.
    #[inline(always)]
    pub const fn result(&self) -> Option<&OperandReport> {
        self.result.as_ref()
    }

    /// Returns the source location, if captured.
    #[inline(always)]
    pub const fn location(&self) -> Option<&'static Location<'static>> {
        self.location
    }
}

impl fmt::Display for DebugContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "integer error: {}", self.error)?;
        write!(
            f,
            "\n  operation: {} ({}), arity {}",
            self.operation,
            self.operation.symbol(),
            self.operation.arity()
        )?;
        if let Some(operand) = &self.operand_1 {
            write!(f, "\n  operand 1: {operand}")?;
        }
        if let Some(operand) = &self.operand_2 {
            write!(f, "\n  operand 2: {operand}")?;
        }
        if let Some(result) = &self.result {
            write!(f, "\n  result:    {result}")?;
        }
        if let Some(location) = self.location {
            write!(f, "\n  location:  {location}")?;
        }
        Ok(())
    }
}

/// A destination for diagnostic reports.
pub type OutputSink = Box<dyn Write + Send>;

static SINK: ReentrantMutex<RefCell<Option<OutputSink>>> =
    parking_lot::const_reentrant_mutex(RefCell::new(None));

fn stderr_sink() -> OutputSink {
    Box::new(io::stderr())
}

/// Replaces the diagnostic sink and returns the previous one.
///
/// The previous sink is standard error if none was set. Called from inside
/// the current sink's own `write`, nothing can be replaced and `sink` is
/// handed back.
pub fn set_output_sink(sink: OutputSink) -> OutputSink {
    let guard = SINK.lock();
    let Ok(mut slot) = guard.try_borrow_mut() else {
        warn!("diagnostic sink is busy on this thread; not replaced");
        return sink;
    };
    let previous = slot.replace(sink);
    debug!(replaced_custom = previous.is_some(), "diagnostic sink replaced");
    previous.unwrap_or_else(stderr_sink)
}

/// Restores standard error as the diagnostic sink and returns the previous
/// one.
///
/// Called from inside the current sink's own `write`, nothing is reset and
/// standard error is returned.
pub fn reset_output_sink() -> OutputSink {
    let guard = SINK.lock();
    let Ok(mut slot) = guard.try_borrow_mut() else {
        warn!("diagnostic sink is busy on this thread; not reset");
        return stderr_sink();
    };
    let previous = slot.take();
    debug!(replaced_custom = previous.is_some(), "diagnostic sink reset to stderr");
    previous.unwrap_or_else(stderr_sink)
}

fn write_report(out: &mut dyn Write, context: &DebugContext) -> io::Result<()> {
    writeln!(out, "{context}")?;
    out.flush()
}

/// Writes `context` to the diagnostic sink.
///
/// A failing write cannot be propagated out of an operator, so it is logged
/// and otherwise ignored. While the sink is writing, reports from the same
/// thread go to standard error.
pub fn report(context: &DebugContext) {
    let guard = SINK.lock();
    let written = match guard.try_borrow_mut() {
        Ok(mut slot) => match slot.as_mut() {
            Some(out) => write_report(out.as_mut(), context),
            None => write_report(&mut io::stderr().lock(), context),
        },
        Err(_) => write_report(&mut io::stderr().lock(), context),
    };
    if let Err(error) = written {
        warn!(%error, operation = %context.operation(), "failed to write integer diagnostic");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OperationError;
    use crate::testing::{sink_lock, SharedBuffer};
    use saferint_core::num::convert::ConversionError;

    fn overflow_context() -> DebugContext {
        DebugContext::new(Operation::Add, OperationError::SignedResultMoreThanMax.into())
            .with_operand_1(OperandReport::promoted(100i8, 100i32))
            .with_operand_2(OperandReport::of(i32::MAX))
            .with_result(OperandReport::of(i32::MAX))
    }

    #[test]
    fn test_operand_report_promotion() {
        let report = OperandReport::promoted(-1i8, u32::MAX);
        assert_eq!(report.kind(), IntegerKind::SignedChar);
        assert_eq!(report.value(), -1);
        assert_eq!(report.promoted_kind(), Some(<u32 as NativeInteger>::KIND));
        assert_eq!(report.promoted_value(), Some(u32::MAX as i128));

        let same = OperandReport::promoted(5i32, 5i32);
        assert_eq!(same.promoted_kind(), None);
        assert_eq!(same.promoted_value(), None);
    }

    #[test]
    fn test_operand_report_display() {
        let report = OperandReport::promoted(-3i8, -3i32);
        assert_eq!(
            report.to_string(),
            "signed char (signed, 8 bits, [-128, 127]) = -3, \
             promoted to int (signed, 32 bits, [-2147483648, 2147483647]) = -3"
        );
    }

    #[test]
    fn test_context_display_lists_every_part() {
        let text = overflow_context().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "integer error: signed_result_more_than_max");
        assert_eq!(lines[1], "  operation: add (+), arity 2");
        assert!(lines[2].starts_with("  operand 1: signed char"));
        assert!(lines[2].contains("promoted to int"));
        assert!(lines[3].starts_with("  operand 2: int"));
        assert!(lines[4].starts_with("  result:    int"));
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn test_context_records_location() {
        let here = Location::caller();
        let context = DebugContext::new(
            Operation::Construct,
            ConversionError::UnsignedValueGreaterThanMaximumOfTargetUnsignedInteger.into(),
        )
        .with_location(Some(here));
        assert_eq!(context.location(), Some(here));
        assert!(context.to_string().contains(here.file()));
        assert!(context.operand_1().is_none());
    }

    #[test]
    fn test_sink_swap_and_report() {
        let _serial = sink_lock();
        let buffer = SharedBuffer::default();
        drop(set_output_sink(Box::new(buffer.clone())));
        report(&overflow_context());
        drop(reset_output_sink());

        let text = buffer.contents();
        assert!(text.contains("integer error: signed_result_more_than_max"));
        assert!(text.contains("  operation: add (+), arity 2"));
        assert!(text.ends_with('\n'));
    }

    /// A sink that raises a diagnostic of its own while writing.
    struct ReentrantSink {
        buffer: SharedBuffer,
    }

    impl Write for ReentrantSink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            report(&overflow_context());
            let replacement = set_output_sink(Box::new(io::sink()));
            drop(replacement);
            self.buffer.write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_reporting_from_inside_the_sink_does_not_deadlock() {
        let _serial = sink_lock();
        let buffer = SharedBuffer::default();
        drop(set_output_sink(Box::new(ReentrantSink {
            buffer: buffer.clone(),
        })));
        report(&overflow_context());
        let restored = reset_output_sink();
        drop(restored);

        // The nested replacement was refused, so the outer report landed in
        // the original sink.
        assert!(buffer
            .contents()
            .contains("integer error: signed_result_more_than_max"));
    }
}
