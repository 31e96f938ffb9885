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

//! Exported conversion functions.
//!
//! Every `safer_<dst>_from_<src>` function converts between two fixed-width
//! integers, clamping a value that does not fit, and returns the value together
//! with the reason it differs from the input. `error` is
//! `ConversionError::None` (zero) for exact conversions.

use saferint_core::num::convert::{Conversion, ConversionError};

macro_rules! ffi_result {
    ($($name:ident => $t:ty;)*) => {
        $(
            #[doc = concat!("A `", stringify!($t), "` conversion result as seen from C.")]
            #[repr(C)]
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
            pub struct $name {
                pub value: $t,
                pub error: ConversionError,
            }

            impl From<Conversion<$t>> for $name {
                #[inline(always)]
                fn from(conversion: Conversion<$t>) -> Self {
                    Self {
                        value: conversion.value,
                        error: conversion.error,
                    }
                }
            }
        )*
    };
}

ffi_result! {
    SaferInt8Result => i8;
    SaferUInt8Result => u8;
    SaferInt16Result => i16;
    SaferUInt16Result => u16;
    SaferInt32Result => i32;
    SaferUInt32Result => u32;
    SaferInt64Result => i64;
    SaferUInt64Result => u64;
}

macro_rules! ffi_conversion {
    ($($export:ident => $convert:ident, $src:ty => $result:ident;)*) => {
        $(
            #[doc = concat!(
                "C entry point for [`saferint_core::num::convert::", stringify!($convert), "`]."
            )]
            #[no_mangle]
            pub extern "C" fn $export(value: $src) -> $result {
                saferint_core::num::convert::$convert(value).into()
            }
        )*
    };
}

ffi_conversion! {
    safer_int8_from_int8 => int8_from_int8, i8 => SaferInt8Result;
    safer_int8_from_uint8 => int8_from_uint8, u8 => SaferInt8Result;
    safer_int8_from_int16 => int8_from_int16, i16 => SaferInt8Result;
    safer_int8_from_uint16 => int8_from_uint16, u16 => SaferInt8Result;
    safer_int8_from_int32 => int8_from_int32, i32 => SaferInt8Result;
    safer_int8_from_uint32 => int8_from_uint32, u32 => SaferInt8Result;
    safer_int8_from_int64 => int8_from_int64, i64 => SaferInt8Result;
    safer_int8_from_uint64 => int8_from_uint64, u64 => SaferInt8Result;
    safer_uint8_from_int8 => uint8_from_int8, i8 => SaferUInt8Result;
    safer_uint8_from_uint8 => uint8_from_uint8, u8 => SaferUInt8Result;
    safer_uint8_from_int16 => uint8_from_int16, i16 => SaferUInt8Result;
    safer_uint8_from_uint16 => uint8_from_uint16, u16 => SaferUInt8Result;
    safer_uint8_from_int32 => uint8_from_int32, i32 => SaferUInt8Result;
    safer_uint8_from_uint32 => uint8_from_uint32, u32 => SaferUInt8Result;
    safer_uint8_from_int64 => uint8_from_int64, i64 => SaferUInt8Result;
    safer_uint8_from_uint64 => uint8_from_uint64, u64 => SaferUInt8Result;
    safer_int16_from_int8 => int16_from_int8, i8 => SaferInt16Result;
    safer_int16_from_uint8 => int16_from_uint8, u8 => SaferInt16Result;
    safer_int16_from_int16 => int16_from_int16, i16 => SaferInt16Result;
    safer_int16_from_uint16 => int16_from_uint16, u16 => SaferInt16Result;
    safer_int16_from_int32 => int16_from_int32, i32 => SaferInt16Result;
    safer_int16_from_uint32 => int16_from_uint32, u32 => SaferInt16Result;
    safer_int16_from_int64 => int16_from_int64, i64 => SaferInt16Result;
    safer_int16_from_uint64 => int16_from_uint64, u64 => SaferInt16Result;
    safer_uint16_from_int8 => uint16_from_int8, i8 => SaferUInt16Result;
    safer_uint16_from_uint8 => uint16_from_uint8, u8 => SaferUInt16Result;
    safer_uint16_from_int16 => uint16_from_int16, i16 => SaferUInt16Result;
    safer_uint16_from_uint16 => uint16_from_uint16, u16 => SaferUInt16Result;
    safer_uint16_from_int32 => uint16_from_int32, i32 => SaferUInt16Result;
    safer_uint16_from_uint32 => uint16_from_uint32, u32 => SaferUInt16Result;
    safer_uint16_from_int64 => uint16_from_int64, i64 => SaferUInt16Result;
    safer_uint16_from_uint64 => uint16_from_uint64, u64 => SaferUInt16Result;
    safer_int32_from_int8 => int32_from_int8, i8 => SaferInt32Result;
    safer_int32_from_uint8 => int32_from_uint8, u8 => SaferInt32Result;
    safer_int32_from_int16 => int32_from_int16, i16 => SaferInt32Result;
    safer_int32_from_uint16 => int32_from_uint16, u16 => SaferInt32Result;
    safer_int32_from_int32 => int32_from_int32, i32 => SaferInt32Result;
    safer_int32_from_uint32 => int32_from_uint32, u32 => SaferInt32Result;
    safer_int32_from_int64 => int32_from_int64, i64 => SaferInt32Result;
    safer_int32_from_uint64 => int32_from_uint64, u64 => SaferInt32Result;
    safer_uint32_from_int8 => uint32_from_int8, i8 => SaferUInt32Result;
    safer_uint32_from_uint8 => uint32_from_uint8, u8 => SaferUInt32Result;
    safer_uint32_from_int16 => uint32_from_int16, i16 => SaferUInt32Result;
    safer_uint32_from_uint16 => uint32_from_uint16, u16 => SaferUInt32Result;
    safer_uint32_from_int32 => uint32_from_int32, i32 => SaferUInt32Result;
    safer_uint32_from_uint32 => uint32_from_uint32, u32 => SaferUInt32Result;
    safer_uint32_from_int64 => uint32_from_int64, i64 => SaferUInt32Result;
    safer_uint32_from_uint64 => uint32_from_uint64, u64 => SaferUInt32Result;
    safer_int64_from_int8 => int64_from_int8, i8 => SaferInt64Result;
    safer_int64_from_uint8 => int64_from_uint8, u8 => SaferInt64Result;
    safer_int64_from_int16 => int64_from_int16, i16 => SaferInt64Result;
    safer_int64_from_uint16 => int64_from_uint16, u16 => SaferInt64Result;
    safer_int64_from_int32 => int64_from_int32, i32 => SaferInt64Result;
    safer_int64_from_uint32 => int64_from_uint32, u32 => SaferInt64Result;
    safer_int64_from_int64 => int64_from_int64, i64 => SaferInt64Result;
    safer_int64_from_uint64 => int64_from_uint64, u64 => SaferInt64Result;
    safer_uint64_from_int8 => uint64_from_int8, i8 => SaferUInt64Result;
    safer_uint64_from_uint8 => uint64_from_uint8, u8 => SaferUInt64Result;
    safer_uint64_from_int16 => uint64_from_int16, i16 => SaferUInt64Result;
    safer_uint64_from_uint16 => uint64_from_uint16, u16 => SaferUInt64Result;
    safer_uint64_from_int32 => uint64_from_int32, i32 => SaferUInt64Result;
    safer_uint64_from_uint32 => uint64_from_uint32, u32 => SaferUInt64Result;
    safer_uint64_from_int64 => uint64_from_int64, i64 => SaferUInt64Result;
    safer_uint64_from_uint64 => uint64_from_uint64, u64 => SaferUInt64Result;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_conversion_reports_none() {
        let result = safer_int16_from_uint8(200);
        assert_eq!(result.value, 200);
        assert_eq!(result.error, ConversionError::None);
        assert_eq!(safer_uint64_from_int64(i64::MAX).value, i64::MAX as u64);
    }

    #[test]
    fn test_narrowing_clamps_and_reports() {
        let result = safer_int8_from_int32(1000);
        assert_eq!(result.value, i8::MAX);
        assert_eq!(
            result.error,
            ConversionError::PositiveSignedValueGreaterThanMaximumOfTargetSignedInteger
        );

        let result = safer_int8_from_int32(-1000);
        assert_eq!(result.value, i8::MIN);
        assert_eq!(
            result.error,
            ConversionError::NegativeSignedValueLessThanMinimumOfTargetSignedInteger
        );
    }

    #[test]
    fn test_sign_changes() {
        let result = safer_uint32_from_int16(-1);
        assert_eq!(result.value, 0);
        assert_eq!(
            result.error,
            ConversionError::NegativeSignedValueCannotBeRepresentedByUnsignedInteger
        );

        let result = safer_int64_from_uint64(u64::MAX);
        assert_eq!(result.value, i64::MAX);
        assert_eq!(
            result.error,
            ConversionError::UnsignedValueGreaterThanMaximumOfTargetSignedInteger
        );

        let result = safer_uint8_from_uint16(256);
        assert_eq!(result.value, u8::MAX);
        assert_eq!(
            result.error,
            ConversionError::UnsignedValueGreaterThanMaximumOfTargetUnsignedInteger
        );
    }

    #[test]
    fn test_error_discriminant_is_zero_on_success() {
        let result = safer_uint16_from_int32(7);
        assert_eq!(result.error as i32, 0);
    }
}
