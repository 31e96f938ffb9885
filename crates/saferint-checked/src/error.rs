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

//! # Errors
//!
//! What can go wrong with a checked integer, in three layers:
//!
//! - `OperationError`: the precise failure an overflow detector found.
//! - `ErrorCode`: what a diagnostic snapshot records, covering operation
//!   failures, lossy conversions and default construction.
//! - `IntegerError`: the payload raised when an error is escalated, either
//!   through a panic or through `Outcome::into_result`.

use crate::diagnostics::DebugContext;
use crate::operation::Operation;
use saferint_core::num::convert::ConversionError;
use std::fmt;

/// The failure an overflow detector classified.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum OperationError {
    /// No error.
    #[default]
    None,
    /// A signed result above the maximum of its kind.
    SignedResultMoreThanMax,
    /// A signed result below the minimum of its kind.
    SignedResultLessThanMin,
    /// An unsigned result wrapped past the maximum and came out smaller.
    UnsignedWraparoundToSmaller,
    /// An unsigned result wrapped past zero and came out larger.
    UnsignedWraparoundToLarger,
    /// A signed division or remainder by zero.
    SignedDivisionByZero,
    /// An unsigned division or remainder by zero.
    UnsignedDivisionByZero,
    /// The two's-complement trap `MIN / -1`.
    DivisionOfMinByMinusOne,
    /// Unary minus applied to an unsigned operand.
    NegationOfUnsigned,
    /// `&` or `|` with a negative left operand.
    BitwiseAndOrLeftOperandNegative,
    /// `&` or `|` with a negative right operand.
    BitwiseAndOrRightOperandNegative,
    /// `&` or `|` with both operands negative.
    BitwiseAndOrBothOperandsNegative,
    /// `^` with a negative left operand.
    BitwiseXorLeftOperandNegative,
    /// `^` with a negative right operand.
    BitwiseXorRightOperandNegative,
    /// `^` with both operands negative.
    BitwiseXorBothOperandsNegative,
    /// `~` applied to a negative operand.
    BitwiseNotOperandNegative,
    /// A shift of a negative value.
    ShiftLeftOperandNegative,
    /// A shift count that is negative or not below the bit width.
    ShiftRightOperandOutOfRange,
    /// A shift of a negative value by an out-of-range count.
    ShiftLeftNegativeAndRightOutOfRange,
}

impl OperationError {
    /// Returns the snake_case identifier of this error.
    pub const fn as_str(self) -> &'static str {
        match self {
            OperationError::None => "none",
            OperationError::SignedResultMoreThanMax => "signed_result_more_than_max",
            OperationError::SignedResultLessThanMin => "signed_result_less_than_min",
            OperationError::UnsignedWraparoundToSmaller => "unsigned_wraparound_to_smaller",
            OperationError::UnsignedWraparoundToLarger => "unsigned_wraparound_to_larger",
            OperationError::SignedDivisionByZero => "signed_division_by_zero",
            OperationError::UnsignedDivisionByZero => "unsigned_division_by_zero",
            OperationError::DivisionOfMinByMinusOne => "division_of_min_by_minus_one",
            OperationError::NegationOfUnsigned => "negation_of_unsigned",
            OperationError::BitwiseAndOrLeftOperandNegative => {
                "bitwise_and_or_left_operand_negative"
            }
            OperationError::BitwiseAndOrRightOperandNegative => {
                "bitwise_and_or_right_operand_negative"
            }
            OperationError::BitwiseAndOrBothOperandsNegative => {
                "bitwise_and_or_both_operands_negative"
            }
            OperationError::BitwiseXorLeftOperandNegative => "bitwise_xor_left_operand_negative",
            OperationError::BitwiseXorRightOperandNegative => "bitwise_xor_right_operand_negative",
            OperationError::BitwiseXorBothOperandsNegative => "bitwise_xor_both_operands_negative",
            OperationError::BitwiseNotOperandNegative => "bitwise_not_operand_negative",
            OperationError::ShiftLeftOperandNegative => "shift_left_operand_negative",
            OperationError::ShiftRightOperandOutOfRange => "shift_right_operand_out_of_range",
            OperationError::ShiftLeftNegativeAndRightOutOfRange => {
                "shift_left_negative_and_right_out_of_range"
            }
        }
    }

    /// Returns `true` unless this is [`OperationError::None`].
    #[inline(always)]
    pub const fn is_error(self) -> bool {
        !matches!(self, OperationError::None)
    }

    /// Returns `true` for division and remainder by zero.
    #[inline(always)]
    pub const fn is_division_by_zero(self) -> bool {
        matches!(
            self,
            OperationError::SignedDivisionByZero | OperationError::UnsignedDivisionByZero
        )
    }

    /// Returns `true` for the sign violations of `&`, `|`, `^` and `~`.
    #[inline(always)]
    pub const fn is_bitwise(self) -> bool {
        matches!(
            self,
            OperationError::BitwiseAndOrLeftOperandNegative
                | OperationError::BitwiseAndOrRightOperandNegative
                | OperationError::BitwiseAndOrBothOperandsNegative
                | OperationError::BitwiseXorLeftOperandNegative
                | OperationError::BitwiseXorRightOperandNegative
                | OperationError::BitwiseXorBothOperandsNegative
                | OperationError::BitwiseNotOperandNegative
        )
    }

    /// Returns `true` if the shift count was out of range.
    #[inline(always)]
    pub const fn is_shift_out_of_range(self) -> bool {
        matches!(
            self,
            OperationError::ShiftRightOperandOutOfRange
                | OperationError::ShiftLeftNegativeAndRightOutOfRange
        )
    }
}

impl fmt::Display for OperationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The three independently configurable error categories.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ErrorCategory {
    /// A checked integer was default-constructed.
    Uninitialized,
    /// A value did not survive a change of kind.
    Conversion,
    /// An operator overflowed or hit undefined behavior.
    Operation,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ErrorCategory::Uninitialized => "uninitialized",
            ErrorCategory::Conversion => "conversion",
            ErrorCategory::Operation => "operation",
        })
    }
}

/// The error recorded in a diagnostic snapshot.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum ErrorCode {
    /// No error.
    #[default]
    None,
    /// Default construction.
    Uninitialized,
    /// A lossy conversion.
    Conversion(ConversionError),
    /// A failed operation.
    Operation(OperationError),
}

impl ErrorCode {
    /// Returns the category of this error, or `None` for a non-error.
    pub const fn category(self) -> Option<ErrorCategory> {
        match self {
            ErrorCode::None
            | ErrorCode::Conversion(ConversionError::None)
            | ErrorCode::Operation(OperationError::None) => None,
            ErrorCode::Uninitialized => Some(ErrorCategory::Uninitialized),
            ErrorCode::Conversion(_) => Some(ErrorCategory::Conversion),
            ErrorCode::Operation(_) => Some(ErrorCategory::Operation),
        }
    }

    /// Returns `true` if this code describes an error.
    #[inline(always)]
    pub const fn is_error(self) -> bool {
        self.category().is_some()
    }

    /// Returns the snake_case identifier of this code.
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorCode::None => "none",
            ErrorCode::Uninitialized => "uninitialized",
            ErrorCode::Conversion(e) => e.as_str(),
            ErrorCode::Operation(e) => e.as_str(),
        }
    }
}

impl From<ConversionError> for ErrorCode {
    fn from(error: ConversionError) -> Self {
        ErrorCode::Conversion(error)
    }
}

impl From<OperationError> for ErrorCode {
    fn from(error: OperationError) -> Self {
        ErrorCode::Operation(error)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An escalated checked-integer error.
///
/// Raised with [`std::panic::panic_any`] by escalating error policies, so it
/// can be recovered with `catch_unwind` and `downcast`. Each variant carries
/// the full diagnostic snapshot.
#[derive(Clone, PartialEq, Eq, Debug, thiserror::Error)]
pub enum IntegerError {
    /// A checked integer was default-constructed.
    #[error("integer default-constructed without a value")]
    Uninitialized {
        /// The snapshot of the construction.
        context: DebugContext,
    },
    /// A value did not survive a change of kind.
    #[error("conversion during `{}` lost the value: {error}", .context.operation())]
    Conversion {
        /// The classification of the loss.
        error: ConversionError,
        /// The snapshot of the conversion.
        context: DebugContext,
    },
    /// An operator overflowed or hit undefined behavior.
    #[error("operation `{operation}` failed: {error}")]
    Operation {
        /// The failing operation.
        operation: Operation,
        /// The classification of the failure.
        error: OperationError,
        /// The snapshot of the operation.
        context: DebugContext,
    },
}

impl IntegerError {
    /// Builds the error described by `context`, or `None` if the snapshot
    /// records no error.
    pub fn from_context(context: DebugContext) -> Option<Self> {
        match context.error() {
            ErrorCode::None
            | ErrorCode::Conversion(ConversionError::None)
            | ErrorCode::Operation(OperationError::None) => None,
            ErrorCode::Uninitialized => Some(IntegerError::Uninitialized { context }),
            ErrorCode::Conversion(error) => Some(IntegerError::Conversion { error, context }),
            ErrorCode::Operation(error) => Some(IntegerError::Operation {
                operation: context.operation(),
                error,
                context,
            }),
        }
    }

    /// Returns the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            IntegerError::Uninitialized { .. } => ErrorCategory::Uninitialized,
            IntegerError::Conversion { .. } => ErrorCategory::Conversion,
            IntegerError::Operation { .. } => ErrorCategory::Operation,
        }
    }

    /// Returns the diagnostic snapshot.
    pub fn context(&self) -> &DebugContext {
        match self {
            IntegerError::Uninitialized { context }
            | IntegerError::Conversion { context, .. }
            | IntegerError::Operation { context, .. } => context,
        }
    }
}
