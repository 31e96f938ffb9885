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

//! # Error Policies
//!
//! An error policy receives the [`DebugContext`] of every failing operation
//! and decides what happens next. It can report, log or escalate, but it can
//! never change the value the operation produced.
//!
//! Policies are zero-sized markers used as type parameters. Two policies
//! combine as a tuple `(A, B)`, which runs `A` and then `B` on a copy of the
//! same snapshot.

use crate::config::CONFIG;
use crate::diagnostics::{self, DebugContext};
use crate::error::IntegerError;
use tracing::{trace, warn};

/// Handles a detected error.
pub trait ErrorPolicy {
    /// Consumes the snapshot of one failing operation.
    fn handle(context: DebugContext);
}

/// Raises the error described by `context` as a panic carrying an
/// [`IntegerError`].
fn escalate(context: DebugContext) {
    if let Some(error) = IntegerError::from_context(context) {
        std::panic::panic_any(error);
    }
}

/// Reports to the diagnostic sink and escalates as the build configuration
/// dictates.
///
/// Each category is reported unless its `quiet-*` feature is on, and
/// escalated if its `panic-on-*` feature is on. Reporting happens first, so
/// an escalated error still leaves a report behind.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct ReportingPolicy;

impl ErrorPolicy for ReportingPolicy {
    fn handle(context: DebugContext) {
        let Some(category) = context.error().category() else {
            return;
        };
        trace!(
            %category,
            operation = %context.operation(),
            error = %context.error(),
            "error policy received context"
        );
        if CONFIG.reports(category) {
            diagnostics::report(&context);
        }
        if CONFIG.escalates(category) {
            escalate(context);
        }
    }
}

/// Ignores every error.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct SilentPolicy;

impl ErrorPolicy for SilentPolicy {
    #[inline(always)]
    fn handle(_context: DebugContext) {}
}

/// Escalates every error as a panic carrying an [`IntegerError`].
///
/// # Examples
///
/// ```rust
/// # use saferint_checked::diagnostics::DebugContext;
/// # use saferint_checked::error::{IntegerError, OperationError};
/// # use saferint_checked::operation::Operation;
/// # use saferint_checked::policy::error::{ErrorPolicy, PanicPolicy};
/// let context = DebugContext::new(Operation::Divide, OperationError::SignedDivisionByZero.into());
/// let payload = std::panic::catch_unwind(|| PanicPolicy::handle(context)).unwrap_err();
/// assert!(payload.downcast_ref::<IntegerError>().is_some());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct PanicPolicy;

impl ErrorPolicy for PanicPolicy {
    fn handle(context: DebugContext) {
        escalate(context);
    }
}

/// Emits every error as a structured `tracing` event instead of writing to
/// the diagnostic sink.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct TracingPolicy;

impl ErrorPolicy for TracingPolicy {
    fn handle(context: DebugContext) {
        let Some(category) = context.error().category() else {
            return;
        };
        let operation = context.operation();
        warn!(
            %category,
            operation = %operation,
            symbol = operation.symbol(),
            error = %context.error(),
            operand_1 = ?context.operand_1().map(|o| o.value()),
            operand_2 = ?context.operand_2().map(|o| o.value()),
            result = ?context.result().map(|o| o.value()),
            location = ?context.location(),
            "checked integer error"
        );
    }
}

impl<A, B> ErrorPolicy for (A, B)
where
    A: ErrorPolicy,
    B: ErrorPolicy,
{
    #[inline]
    fn handle(context: DebugContext) {
        A::handle(context.clone());
        B::handle(context);
    }
}

/// The error policy wrappers use unless told otherwise.
pub type DefaultErrorPolicy = ReportingPolicy;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::OperandReport;
    use crate::error::{ErrorCategory, ErrorCode, OperationError};
    use crate::operation::Operation;
    use crate::testing::{take_recorded, RecordingPolicy};
    use std::panic::catch_unwind;

    fn context() -> DebugContext {
        DebugContext::new(Operation::Multiply, OperationError::SignedResultLessThanMin.into())
            .with_operand_1(OperandReport::of(i32::MIN))
            .with_operand_2(OperandReport::of(2i32))
            .with_result(OperandReport::of(0i32))
    }

    #[test]
    fn test_panic_policy_escalates_integer_error() {
        let payload = catch_unwind(|| PanicPolicy::handle(context())).unwrap_err();
        let error = payload
            .downcast_ref::<IntegerError>()
            .expect("payload should be an IntegerError");
        assert_eq!(error.category(), ErrorCategory::Operation);
        assert_eq!(error.context(), &context());
    }

    #[test]
    fn test_panic_policy_ignores_non_errors() {
        PanicPolicy::handle(DebugContext::new(Operation::Add, ErrorCode::None));
    }

    #[test]
    fn test_silent_and_tracing_policies_do_not_panic() {
        SilentPolicy::handle(context());
        TracingPolicy::handle(context());
        TracingPolicy::handle(DebugContext::new(Operation::Add, ErrorCode::None));
    }

    #[test]
    fn test_composite_runs_both_in_order() {
        take_recorded();
        <(RecordingPolicy, (SilentPolicy, RecordingPolicy))>::handle(context());
        let recorded = take_recorded();
        assert_eq!(recorded.len(), 2);
        assert!(recorded.iter().all(|c| c == &context()));
    }

    #[test]
    fn test_composite_stops_at_escalation() {
        take_recorded();
        let result = catch_unwind(|| <(PanicPolicy, RecordingPolicy)>::handle(context()));
        assert!(result.is_err());
        assert!(take_recorded().is_empty());
    }

    #[test]
    fn test_reporting_policy_follows_config() {
        let result = catch_unwind(|| ReportingPolicy::handle(context()));
        assert_eq!(result.is_err(), CONFIG.escalates(ErrorCategory::Operation));
    }
}
