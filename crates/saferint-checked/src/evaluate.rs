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

//! # Stand-alone Evaluation
//!
//! Runs one operation on two values of the same primitive without wrapping
//! them: detector first, then the result policy. Nothing is reported. The
//! caller gets the value and the verdict and decides what to do.

use crate::detect;
use crate::diagnostics::{DebugContext, OperandReport};
use crate::error::{IntegerError, OperationError};
use crate::operation::Operation;
use crate::policy::result::ResultPolicy;
use saferint_core::num::native::Arithmetic;

/// The value and verdict of one evaluated operation.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Outcome<P> {
    /// The evaluated operation.
    pub operation: Operation,
    /// The first operand.
    pub lhs: P,
    /// The second operand, for binary operations.
    pub rhs: Option<P>,
    /// The value the result policy produced.
    pub value: P,
    /// The detector's verdict.
    pub error: OperationError,
}

impl<P> Outcome<P>
where
    P: Arithmetic,
{
    /// Returns `true` if the operation succeeded.
    #[inline(always)]
    pub fn is_ok(&self) -> bool {
        !self.error.is_error()
    }

    /// Builds the diagnostic snapshot of this evaluation.
    pub fn context(&self) -> DebugContext {
        let context = DebugContext::new(self.operation, self.error.into())
            .with_operand_1(OperandReport::of(self.lhs))
            .with_result(OperandReport::of(self.value));
        match self.rhs {
            Some(rhs) => context.with_operand_2(OperandReport::of(rhs)),
            None => context,
        }
    }

    /// Returns the value, or the error with its snapshot.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use saferint_checked::evaluate::evaluate;
    /// # use saferint_checked::operation::Operation;
    /// # use saferint_checked::policy::result::NativeResult;
    /// assert_eq!(evaluate::<NativeResult, i32>(Operation::Add, 2, 3).into_result().ok(), Some(5));
    /// assert!(evaluate::<NativeResult, u8>(Operation::Subtract, 2, 3).into_result().is_err());
    /// ```
    pub fn into_result(self) -> Result<P, IntegerError> {
        if self.is_ok() {
            return Ok(self.value);
        }
        Err(IntegerError::Operation {
            operation: self.operation,
            error: self.error,
            context: self.context(),
        })
    }
}

/// Evaluates `op` on `a` and `b` under the result policy `R`.
///
/// Unary operations ignore `b`.
///
/// # Examples
///
/// ```rust
/// # use saferint_checked::error::OperationError;
/// # use saferint_checked::evaluate::evaluate;
/// # use saferint_checked::operation::Operation;
/// # use saferint_checked::policy::result::SaturatingResult;
/// let outcome = evaluate::<SaturatingResult, i32>(Operation::Divide, i32::MIN, -1);
/// assert_eq!(outcome.value, i32::MAX);
/// assert_eq!(outcome.error, OperationError::DivisionOfMinByMinusOne);
/// ```
pub fn evaluate<R, P>(op: Operation, a: P, b: P) -> Outcome<P>
where
    R: ResultPolicy,
    P: Arithmetic,
{
    if op.arity() < 2 {
        return evaluate_unary::<R, P>(op, a);
    }
    let error = detect::binary(op, a, b);
    Outcome {
        operation: op,
        lhs: a,
        rhs: Some(b),
        value: R::compute(op, error, a, b),
        error,
    }
}

/// Evaluates the unary `op` on `a` under the result policy `R`.
pub fn evaluate_unary<R, P>(op: Operation, a: P) -> Outcome<P>
where
    R: ResultPolicy,
    P: Arithmetic,
{
    let error = detect::unary(op, a);
    Outcome {
        operation: op,
        lhs: a,
        rhs: None,
        value: R::compute(op, error, a, a),
        error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCategory;
    use crate::policy::result::{NativeResult, SaturatingResult};

    #[test]
    fn test_i8_overflow_under_both_policies() {
        let saturated = evaluate_unary::<SaturatingResult, i8>(Operation::PreIncrement, 127);
        assert_eq!(saturated.value, 127);
        assert_eq!(saturated.error, OperationError::SignedResultMoreThanMax);

        let native = evaluate::<NativeResult, i8>(Operation::Add, 127, 1);
        assert_eq!(native.value, -128);
        assert_eq!(native.error, OperationError::SignedResultMoreThanMax);
    }

    #[test]
    fn test_unary_dispatch_ignores_rhs() {
        let outcome = evaluate::<NativeResult, i32>(Operation::UnaryMinus, 5, 99);
        assert_eq!(outcome.value, -5);
        assert_eq!(outcome.rhs, None);
        assert!(outcome.is_ok());
    }

    #[test]
    fn test_into_result_carries_context() {
        let outcome = evaluate::<NativeResult, u16>(Operation::Multiply, 300, 300);
        let error = outcome.into_result().unwrap_err();
        assert_eq!(error.category(), ErrorCategory::Operation);
        let context = error.context();
        assert_eq!(context.operation(), Operation::Multiply);
        assert_eq!(context.operand_1().map(|o| o.value()), Some(300));
        assert_eq!(context.operand_2().map(|o| o.value()), Some(300));
        assert_eq!(context.result().map(|o| o.value()), Some((300u32 * 300 % 65536) as i128));
    }

    #[test]
    fn test_question_mark_propagation() {
        fn average(a: i32, b: i32) -> Result<i32, IntegerError> {
            let sum = evaluate::<NativeResult, i32>(Operation::Add, a, b).into_result()?;
            evaluate::<NativeResult, i32>(Operation::Divide, sum, 2).into_result()
        }
        assert_eq!(average(4, 8).ok(), Some(6));
        assert!(average(i32::MAX, 1).is_err());
    }
}
