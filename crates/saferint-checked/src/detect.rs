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

//! # Overflow Detectors
//!
//! One pure predicate per operator class. Every detector takes operands that
//! were already promoted to a common primitive `P` and classifies what the
//! native operation would do wrong, or returns [`OperationError::None`].
//!
//! The checks are sign-cased comparisons against the bounds of `P`, arranged
//! so that none of them can overflow on its own: `max - a` is only formed
//! for positive `a`, divisions only for non-zero divisors.

use crate::error::OperationError;
use crate::operation::Operation;
use saferint_core::num::native::Arithmetic;

/// Classifies `a + b`.
///
/// # Examples
///
/// ```rust
/// # use saferint_checked::detect::add;
/// # use saferint_checked::error::OperationError;
/// assert_eq!(add(i8::MAX, 1), OperationError::SignedResultMoreThanMax);
/// assert_eq!(add(250u8, 6), OperationError::UnsignedWraparoundToSmaller);
/// assert_eq!(add(-5i32, 5), OperationError::None);
/// ```
#[inline]
pub fn add<P: Arithmetic>(a: P, b: P) -> OperationError {
    let zero = P::zero();
    if P::SIGNED {
        if a > zero && b > zero && b > P::max_value() - a {
            OperationError::SignedResultMoreThanMax
        } else if a < zero && b < zero && b < P::min_value() - a {
            OperationError::SignedResultLessThanMin
        } else {
            OperationError::None
        }
    } else if b > P::max_value() - a {
        OperationError::UnsignedWraparoundToSmaller
    } else {
        OperationError::None
    }
}

/// Classifies `a - b`.
#[inline]
pub fn sub<P: Arithmetic>(a: P, b: P) -> OperationError {
    let zero = P::zero();
    if P::SIGNED {
        if a >= zero && b < zero && a > P::max_value() + b {
            OperationError::SignedResultMoreThanMax
        } else if a < zero && b > zero && a < P::min_value() + b {
            OperationError::SignedResultLessThanMin
        } else {
            OperationError::None
        }
    } else if a < b {
        OperationError::UnsignedWraparoundToLarger
    } else {
        OperationError::None
    }
}

/// Classifies `a * b`.
#[inline]
pub fn mul<P: Arithmetic>(a: P, b: P) -> OperationError {
    let zero = P::zero();
    let max = P::max_value();
    let min = P::min_value();
    if !P::SIGNED {
        return if a != zero && b > max / a {
            OperationError::UnsignedWraparoundToSmaller
        } else {
            OperationError::None
        };
    }

    if a > zero {
        if b > zero {
            if a > max / b {
                return OperationError::SignedResultMoreThanMax;
            }
        } else if b < min / a {
            return OperationError::SignedResultLessThanMin;
        }
    } else if b > zero {
        if a < min / b {
            return OperationError::SignedResultLessThanMin;
        }
    } else if a != zero && b < max / a {
        return OperationError::SignedResultMoreThanMax;
    }
    OperationError::None
}

/// Classifies `a / b`.
///
/// # Examples
///
/// ```rust
/// # use saferint_checked::detect::div;
/// # use saferint_checked::error::OperationError;
/// assert_eq!(div(i32::MIN, -1), OperationError::DivisionOfMinByMinusOne);
/// assert_eq!(div(7u16, 0), OperationError::UnsignedDivisionByZero);
/// ```
#[inline]
pub fn div<P: Arithmetic>(a: P, b: P) -> OperationError {
    if b == P::zero() {
        if P::SIGNED {
            OperationError::SignedDivisionByZero
        } else {
            OperationError::UnsignedDivisionByZero
        }
    } else if P::SIGNED && a == P::min_value() && b.as_i128() == -1 {
        OperationError::DivisionOfMinByMinusOne
    } else {
        OperationError::None
    }
}

/// Classifies `a % b`. The failure modes are those of division.
#[inline(always)]
pub fn rem<P: Arithmetic>(a: P, b: P) -> OperationError {
    div(a, b)
}

/// Classifies `a & b`, `a | b` and `a ^ b`, as selected by `op`, by the sign
/// of their operands.
///
/// The bit pattern of a negative value is implementation-defined in C, so
/// the result is well-defined only for non-negative operands. `&` and `|`
/// share one set of variants, `^` has its own.
///
/// # Examples
///
/// ```rust
/// # use saferint_checked::detect::bitwise;
/// # use saferint_checked::error::OperationError;
/// # use saferint_checked::operation::Operation;
/// assert_eq!(
///     bitwise(Operation::BitwiseOr, -1i32, 2),
///     OperationError::BitwiseAndOrLeftOperandNegative
/// );
/// assert_eq!(
///     bitwise(Operation::BitwiseXor, -1i32, 2),
///     OperationError::BitwiseXorLeftOperandNegative
/// );
/// ```
#[inline]
pub fn bitwise<P: Arithmetic>(op: Operation, a: P, b: P) -> OperationError {
    if !P::SIGNED {
        return OperationError::None;
    }
    let zero = P::zero();
    let xor = matches!(op.base(), Operation::BitwiseXor);
    match (a < zero, b < zero, xor) {
        (false, false, _) => OperationError::None,
        (true, true, false) => OperationError::BitwiseAndOrBothOperandsNegative,
        (true, false, false) => OperationError::BitwiseAndOrLeftOperandNegative,
        (false, true, false) => OperationError::BitwiseAndOrRightOperandNegative,
        (true, true, true) => OperationError::BitwiseXorBothOperandsNegative,
        (true, false, true) => OperationError::BitwiseXorLeftOperandNegative,
        (false, true, true) => OperationError::BitwiseXorRightOperandNegative,
    }
}

/// Classifies `~a`.
#[inline]
pub fn not<P: Arithmetic>(a: P) -> OperationError {
    if P::SIGNED && a < P::zero() {
        OperationError::BitwiseNotOperandNegative
    } else {
        OperationError::None
    }
}

/// Classifies `a << count` or `a >> count`, as selected by `op`.
///
/// The count is checked against the width of `P` regardless of its own kind.
/// A negative left operand and an out-of-range count are reported jointly
/// when both hold. A signed left shift that pushes a bit past the maximum is
/// an overflow.
///
/// # Examples
///
/// ```rust
/// # use saferint_checked::detect::shift;
/// # use saferint_checked::error::OperationError;
/// # use saferint_checked::operation::Operation;
/// assert_eq!(shift(Operation::ShiftLeft, 1i32, 32), OperationError::ShiftRightOperandOutOfRange);
/// assert_eq!(
///     shift(Operation::ShiftRight, -1i32, -1),
///     OperationError::ShiftLeftNegativeAndRightOutOfRange
/// );
/// assert_eq!(shift(Operation::ShiftLeft, 1i32, 31), OperationError::SignedResultMoreThanMax);
/// assert_eq!(shift(Operation::ShiftLeft, 1u32, 31), OperationError::None);
/// ```
#[inline]
pub fn shift<P: Arithmetic>(op: Operation, a: P, count: i128) -> OperationError {
    let negative = P::SIGNED && a < P::zero();
    let out_of_range = count < 0 || count >= P::BITS as i128;
    match (negative, out_of_range) {
        (true, true) => OperationError::ShiftLeftNegativeAndRightOutOfRange,
        (false, true) => OperationError::ShiftRightOperandOutOfRange,
        (true, false) => OperationError::ShiftLeftOperandNegative,
        (false, false) => {
            if P::SIGNED
                && matches!(op.base(), Operation::ShiftLeft)
                && (a.as_i128() << count) > P::MAX_VALUE
            {
                OperationError::SignedResultMoreThanMax
            } else {
                OperationError::None
            }
        }
    }
}

/// Classifies `++a` and `a++`.
#[inline]
pub fn increment<P: Arithmetic>(a: P) -> OperationError {
    if a != P::max_value() {
        OperationError::None
    } else if P::SIGNED {
        OperationError::SignedResultMoreThanMax
    } else {
        OperationError::UnsignedWraparoundToSmaller
    }
}

/// Classifies `--a` and `a--`.
#[inline]
pub fn decrement<P: Arithmetic>(a: P) -> OperationError {
    if a != P::min_value() {
        OperationError::None
    } else if P::SIGNED {
        OperationError::SignedResultLessThanMin
    } else {
        OperationError::UnsignedWraparoundToLarger
    }
}

/// Classifies `-a`.
///
/// Negating an unsigned value is well-defined wraparound in C, but almost
/// never intended, so every unsigned operand is flagged.
#[inline]
pub fn negate<P: Arithmetic>(a: P) -> OperationError {
    if !P::SIGNED {
        OperationError::NegationOfUnsigned
    } else if a == P::min_value() {
        OperationError::SignedResultMoreThanMax
    } else {
        OperationError::None
    }
}

/// Dispatches a unary operation to its detector.
#[inline]
pub fn unary<P: Arithmetic>(op: Operation, a: P) -> OperationError {
    match op {
        Operation::UnaryMinus => negate(a),
        Operation::BitwiseNot => not(a),
        Operation::PreIncrement | Operation::PostIncrement => increment(a),
        Operation::PreDecrement | Operation::PostDecrement => decrement(a),
        _ => OperationError::None,
    }
}

/// Dispatches a binary operation or compound assignment to its detector.
///
/// Comparisons and conversions never fail here.
#[inline]
pub fn binary<P: Arithmetic>(op: Operation, a: P, b: P) -> OperationError {
    match op.base() {
        Operation::Add => add(a, b),
        Operation::Subtract => sub(a, b),
        Operation::Multiply => mul(a, b),
        Operation::Divide => div(a, b),
        Operation::Remainder => rem(a, b),
        Operation::BitwiseAnd | Operation::BitwiseOr | Operation::BitwiseXor => bitwise(op, a, b),
        Operation::ShiftLeft | Operation::ShiftRight => shift(op, a, b.as_i128()),
        _ => OperationError::None,
    }
}
