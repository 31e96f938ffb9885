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

//! # Result Policies
//!
//! Given an operation, the detector's verdict and the promoted operands, a
//! result policy computes the value the operation exposes. It never decides
//! whether an error occurred and never panics, whatever the operands.

use crate::error::OperationError;
use crate::operation::Operation;
use saferint_core::num::native::Arithmetic;

/// Computes the exposed result of an operation.
pub trait ResultPolicy {
    /// Computes the result of a unary or binary operation on same-kind
    /// operands. Unary operations ignore `b`.
    fn compute<P: Arithmetic>(op: Operation, error: OperationError, a: P, b: P) -> P;

    /// Computes the result of a shift by `count`, whose kind is independent
    /// of `P`.
    fn shift<P: Arithmetic>(op: Operation, error: OperationError, a: P, count: i128) -> P;
}

#[inline(always)]
fn is_min_by_minus_one<P: Arithmetic>(a: P, b: P) -> bool {
    P::SIGNED && a == P::min_value() && b.as_i128() == -1
}

fn native_shift<P: Arithmetic>(op: Operation, a: P, count: i128) -> P {
    if count < 0 || count >= P::BITS as i128 {
        // The native result is undefined; zero stands in for it.
        return P::zero();
    }
    let count = count as u32;
    match op.base() {
        Operation::ShiftLeft => a.wrapping_shl(count),
        _ => a.wrapping_shr(count),
    }
}

fn native<P: Arithmetic>(op: Operation, a: P, b: P) -> P {
    let zero = P::zero();
    match op.base() {
        Operation::Add => a.wrapping_add(&b),
        Operation::Subtract => a.wrapping_sub(&b),
        Operation::Multiply => a.wrapping_mul(&b),
        Operation::Divide if b == zero => zero,
        Operation::Divide if is_min_by_minus_one(a, b) => a,
        Operation::Divide => a / b,
        Operation::Remainder if b == zero || is_min_by_minus_one(a, b) => zero,
        Operation::Remainder => a % b,
        Operation::BitwiseAnd => a & b,
        Operation::BitwiseOr => a | b,
        Operation::BitwiseXor => a ^ b,
        Operation::ShiftLeft | Operation::ShiftRight => native_shift(op, a, b.as_i128()),
        Operation::UnaryMinus => a.wrapping_neg(),
        Operation::BitwiseNot => !a,
        Operation::PreIncrement | Operation::PostIncrement => a.wrapping_add(&P::one()),
        Operation::PreDecrement | Operation::PostDecrement => a.wrapping_sub(&P::one()),
        _ => a,
    }
}

/// Produces the bit pattern the unchecked native operation yields.
///
/// Arithmetic wraps in two's complement. Division and remainder by zero
/// yield `0`, `MIN / -1` yields `MIN` and `MIN % -1` yields `0`. Shifts by an
/// out-of-range count yield `0`.
///
/// # Examples
///
/// ```rust
/// # use saferint_checked::detect;
/// # use saferint_checked::operation::Operation;
/// # use saferint_checked::policy::result::{NativeResult, ResultPolicy};
/// let error = detect::add(127i8, 1);
/// assert_eq!(NativeResult::compute(Operation::Add, error, 127i8, 1), -128);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct NativeResult;

impl ResultPolicy for NativeResult {
    #[inline]
    fn compute<P: Arithmetic>(op: Operation, _error: OperationError, a: P, b: P) -> P {
        native(op, a, b)
    }

    #[inline]
    fn shift<P: Arithmetic>(op: Operation, _error: OperationError, a: P, count: i128) -> P {
        native_shift(op, a, count)
    }
}

/// Clamps failed results to the bound in the direction of the failure.
///
/// Overflow above the maximum yields `MAX`, below the minimum `MIN`, and
/// unsigned results that would wrap below zero yield `0`. `MIN / -1` yields
/// `MAX` and `MIN % -1` yields `0`. Errors without a direction (division by
/// zero, bitwise sign violations, out-of-range shift counts) keep the native
/// result.
///
/// # Examples
///
/// ```rust
/// # use saferint_checked::detect;
/// # use saferint_checked::operation::Operation;
/// # use saferint_checked::policy::result::{ResultPolicy, SaturatingResult};
/// let error = detect::div(i32::MIN, -1);
/// assert_eq!(SaturatingResult::compute(Operation::Divide, error, i32::MIN, -1), i32::MAX);
/// let error = detect::sub(3u8, 5);
/// assert_eq!(SaturatingResult::compute(Operation::Subtract, error, 3u8, 5), 0);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct SaturatingResult;

impl ResultPolicy for SaturatingResult {
    fn compute<P: Arithmetic>(op: Operation, error: OperationError, a: P, b: P) -> P {
        if op.is_shift() {
            return Self::shift(op, error, a, b.as_i128());
        }
        match error {
            OperationError::SignedResultMoreThanMax | OperationError::UnsignedWraparoundToSmaller => {
                P::max_value()
            }
            OperationError::SignedResultLessThanMin
            | OperationError::UnsignedWraparoundToLarger
            | OperationError::NegationOfUnsigned => P::min_value(),
            OperationError::DivisionOfMinByMinusOne => match op.base() {
                Operation::Divide => P::max_value(),
                _ => P::zero(),
            },
            _ => native(op, a, b),
        }
    }

    fn shift<P: Arithmetic>(op: Operation, error: OperationError, a: P, count: i128) -> P {
        match error {
            OperationError::SignedResultMoreThanMax => P::max_value(),
            OperationError::ShiftLeftOperandNegative
                if matches!(op.base(), Operation::ShiftLeft) =>
            {
                // The count is in range, so the shifted value fits in i128.
                P::saturating_from_i128(a.as_i128() << count)
            }
            _ => native_shift(op, a, count),
        }
    }
}

/// The result policy selected by the `saturating` feature.
#[cfg(feature = "saturating")]
pub type DefaultResultPolicy = SaturatingResult;

/// The result policy selected by the `saturating` feature.
#[cfg(not(feature = "saturating"))]
pub type DefaultResultPolicy = NativeResult;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect;
    use proptest::prelude::*;

    fn both<P: Arithmetic>(op: Operation, a: P, b: P) -> (OperationError, P, P) {
        let error = detect::binary(op, a, b);
        (
            error,
            NativeResult::compute(op, error, a, b),
            SaturatingResult::compute(op, error, a, b),
        )
    }

    #[test]
    fn test_i8_increment_past_max() {
        let error = detect::unary(Operation::PreIncrement, 127i8);
        assert_eq!(error, OperationError::SignedResultMoreThanMax);
        assert_eq!(SaturatingResult::compute(Operation::PreIncrement, error, 127i8, 127), 127);
        assert_eq!(NativeResult::compute(Operation::PreIncrement, error, 127i8, 127), -128);
        assert_eq!(both(Operation::Add, 127i8, 1), (error, -128, 127));
    }

    #[test]
    fn test_min_divided_by_minus_one() {
        assert_eq!(
            both(Operation::Divide, i32::MIN, -1),
            (OperationError::DivisionOfMinByMinusOne, i32::MIN, i32::MAX)
        );
        assert_eq!(
            both(Operation::Remainder, i32::MIN, -1),
            (OperationError::DivisionOfMinByMinusOne, 0, 0)
        );
    }

    #[test]
    fn test_division_by_zero_yields_zero() {
        assert_eq!(both(Operation::Divide, 9i64, 0), (OperationError::SignedDivisionByZero, 0, 0));
        assert_eq!(
            both(Operation::RemainderAssign, 9u8, 0),
            (OperationError::UnsignedDivisionByZero, 0, 0)
        );
        assert_eq!(both(Operation::Divide, -9i64, 2), (OperationError::None, -4, -4));
        assert_eq!(both(Operation::Remainder, -9i64, 2), (OperationError::None, -1, -1));
    }

    #[test]
    fn test_saturation_direction() {
        assert_eq!(both(Operation::Multiply, i16::MIN, 2).2, i16::MIN);
        assert_eq!(both(Operation::Multiply, i16::MIN, -2).2, i16::MAX);
        assert_eq!(both(Operation::Add, u32::MAX, 5).2, u32::MAX);
        assert_eq!(both(Operation::Subtract, 1u32, 5), (OperationError::UnsignedWraparoundToLarger, u32::MAX - 3, 0));

        let error = detect::unary(Operation::UnaryMinus, 5u16);
        assert_eq!(NativeResult::compute(Operation::UnaryMinus, error, 5u16, 5), 65531);
        assert_eq!(SaturatingResult::compute(Operation::UnaryMinus, error, 5u16, 5), 0);

        let error = detect::unary(Operation::UnaryMinus, i64::MIN);
        assert_eq!(SaturatingResult::compute(Operation::UnaryMinus, error, i64::MIN, 0), i64::MAX);

        let error = detect::unary(Operation::PostDecrement, 0u8);
        assert_eq!(NativeResult::compute(Operation::PostDecrement, error, 0u8, 0), 255);
        assert_eq!(SaturatingResult::compute(Operation::PostDecrement, error, 0u8, 0), 0);
    }

    #[test]
    fn test_bitwise_keeps_native_pattern() {
        assert_eq!(
            both(Operation::BitwiseAnd, -4i32, 7),
            (OperationError::BitwiseAndOrLeftOperandNegative, 4, 4)
        );
        let error = detect::unary(Operation::BitwiseNot, -1i32);
        assert_eq!(SaturatingResult::compute(Operation::BitwiseNot, error, -1i32, 0), 0);
    }

    #[test]
    fn test_shift_results() {
        assert_eq!(NativeResult::shift(Operation::ShiftLeft, OperationError::None, 1u8, 7), 128);
        assert_eq!(NativeResult::shift(Operation::ShiftRight, OperationError::None, -16i32, 2), -4);

        let error = detect::shift(Operation::ShiftLeft, 1i32, 40);
        assert_eq!(NativeResult::shift(Operation::ShiftLeft, error, 1i32, 40), 0);
        assert_eq!(SaturatingResult::shift(Operation::ShiftLeft, error, 1i32, 40), 0);

        let error = detect::shift(Operation::ShiftLeft, 1i32, 31);
        assert_eq!(NativeResult::shift(Operation::ShiftLeft, error, 1i32, 31), i32::MIN);
        assert_eq!(SaturatingResult::shift(Operation::ShiftLeft, error, 1i32, 31), i32::MAX);

        let error = detect::shift(Operation::ShiftLeft, -1i8, 7);
        assert_eq!(NativeResult::shift(Operation::ShiftLeft, error, -1i8, 7), i8::MIN);
        assert_eq!(SaturatingResult::shift(Operation::ShiftLeft, error, -2i8, 7), i8::MIN);
        assert_eq!(SaturatingResult::shift(Operation::ShiftRight, error, -2i8, 1), -1);

        assert_eq!(both(Operation::ShiftLeftAssign, 3u16, 20), (OperationError::ShiftRightOperandOutOfRange, 0, 0));
    }

    proptest! {
        #[test]
        fn prop_unsigned_sub_saturates_to_zero(a in any::<u32>(), b in any::<u32>()) {
            let (error, _, saturated) = both(Operation::Subtract, a, b);
            prop_assert_eq!(error.is_error(), a < b);
            prop_assert_eq!(saturated, if a < b { 0 } else { a - b });
        }

        #[test]
        fn prop_saturating_is_clamped_exact(a in any::<i16>(), b in any::<i16>()) {
            for op in [Operation::Add, Operation::Subtract, Operation::Multiply] {
                let exact = match op {
                    Operation::Add => a as i128 + b as i128,
                    Operation::Subtract => a as i128 - b as i128,
                    _ => a as i128 * b as i128,
                };
                let (_, native, saturated) = both(op, a, b);
                prop_assert_eq!(saturated as i128, exact.clamp(i16::MIN as i128, i16::MAX as i128));
                prop_assert_eq!(native, exact as i16);
            }
        }

        #[test]
        fn prop_policies_agree_without_error(a in any::<i32>(), b in any::<i32>()) {
            for op in [Operation::Add, Operation::Multiply, Operation::Divide, Operation::BitwiseXor] {
                let (error, native, saturated) = both(op, a, b);
                if !error.is_error() {
                    prop_assert_eq!(native, saturated);
                }
            }
        }
    }
}
