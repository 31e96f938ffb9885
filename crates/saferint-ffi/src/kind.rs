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

//! Exported queries over integer kinds and conversion errors.

use saferint_core::kind::{DataModel, IntegerKind};
use saferint_core::num::convert::ConversionError;
use saferint_core::promotion::promote;
use std::ffi::{c_char, CStr};

/// Returns the kind both operands of a binary operator are converted to
/// on this target.
#[no_mangle]
pub extern "C" fn safer_promote(lhs: IntegerKind, rhs: IntegerKind) -> IntegerKind {
    promote(lhs, rhs)
}

/// Returns the width of `kind` in bits on this target.
#[no_mangle]
pub extern "C" fn safer_integer_kind_bits(kind: IntegerKind) -> u32 {
    kind.bits(DataModel::NATIVE)
}

/// Returns `true` if `kind` is signed on this target.
#[no_mangle]
pub extern "C" fn safer_integer_kind_is_signed(kind: IntegerKind) -> bool {
    kind.is_signed(DataModel::NATIVE)
}

fn kind_name(kind: IntegerKind) -> &'static CStr {
    match kind {
        IntegerKind::Bool => c"bool",
        IntegerKind::Char => c"char",
        IntegerKind::SignedChar => c"signed char",
        IntegerKind::UnsignedChar => c"unsigned char",
        IntegerKind::Short => c"short",
        IntegerKind::UnsignedShort => c"unsigned short",
        IntegerKind::Int => c"int",
        IntegerKind::UnsignedInt => c"unsigned int",
        IntegerKind::Long => c"long",
        IntegerKind::UnsignedLong => c"unsigned long",
        IntegerKind::LongLong => c"long long",
        IntegerKind::UnsignedLongLong => c"unsigned long long",
    }
}

fn conversion_error_name(error: ConversionError) -> &'static CStr {
    match error {
        ConversionError::None => c"none",
        ConversionError::NegativeSignedValueLessThanMinimumOfTargetSignedInteger => {
            c"negative_signed_value_less_than_minimum_of_target_signed_integer"
        }
        ConversionError::PositiveSignedValueGreaterThanMaximumOfTargetSignedInteger => {
            c"positive_signed_value_greater_than_maximum_of_target_signed_integer"
        }
        ConversionError::UnsignedValueGreaterThanMaximumOfTargetSignedInteger => {
            c"unsigned_value_greater_than_maximum_of_target_signed_integer"
        }
        ConversionError::NegativeSignedValueCannotBeRepresentedByUnsignedInteger => {
            c"negative_signed_value_cannot_be_represented_by_unsigned_integer"
        }
        ConversionError::PositiveSignedValueGreaterThanMaximumOfTargetUnsignedInteger => {
            c"positive_signed_value_greater_than_maximum_of_target_unsigned_integer"
        }
        ConversionError::UnsignedValueGreaterThanMaximumOfTargetUnsignedInteger => {
            c"unsigned_value_greater_than_maximum_of_target_unsigned_integer"
        }
    }
}

/// Returns the C spelling of `kind` as a static, NUL-terminated string.
///
/// The pointer stays valid for the lifetime of the program and must not be
/// freed.
#[no_mangle]
pub extern "C" fn safer_integer_kind_name(kind: IntegerKind) -> *const c_char {
    kind_name(kind).as_ptr()
}

/// Returns the snake_case name of `error` as a static, NUL-terminated string.
///
/// The pointer stays valid for the lifetime of the program and must not be
/// freed.
#[no_mangle]
pub extern "C" fn safer_conversion_error_name(error: ConversionError) -> *const c_char {
    conversion_error_name(error).as_ptr()
}
