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

//! Ready-made aliases for every supported integer type.
//!
//! The fixed-width names follow `<stdint.h>`, the others follow the C type
//! they stand for on the current target. With the `native-types` feature
//! every alias collapses to the plain primitive, so a program can switch the
//! checks off without touching its code.

#[cfg(not(feature = "native-types"))]
use crate::integer::CheckedInteger;
use core::ffi::{
    c_char, c_int, c_long, c_longlong, c_schar, c_short, c_uchar, c_uint, c_ulong, c_ulonglong,
    c_ushort,
};

macro_rules! safe_aliases {
    ($($(#[$meta:meta])* $name:ident => $t:ty;)*) => {
        $(
            $(#[$meta])*
            #[cfg(not(feature = "native-types"))]
            pub type $name = CheckedInteger<$t>;

            $(#[$meta])*
            #[cfg(feature = "native-types")]
            pub type $name = $t;
        )*
    };
}

safe_aliases! {
    /// A checked `bool`.
    SafeBool => bool;
    /// A checked `int8_t`.
    SafeInt8 => i8;
    /// A checked `uint8_t`.
    SafeUInt8 => u8;
    /// A checked `int16_t`.
    SafeInt16 => i16;
    /// A checked `uint16_t`.
    SafeUInt16 => u16;
    /// A checked `int32_t`.
    SafeInt32 => i32;
    /// A checked `uint32_t`.
    SafeUInt32 => u32;
    /// A checked `int64_t`.
    SafeInt64 => i64;
    /// A checked `uint64_t`.
    SafeUInt64 => u64;
    /// A checked `char`, signed or not as the target decides.
    SafeChar => c_char;
    /// A checked `signed char`.
    SafeSignedChar => c_schar;
    /// A checked `unsigned char`.
    SafeUnsignedChar => c_uchar;
    /// A checked `short`.
    SafeShort => c_short;
    /// A checked `unsigned short`.
    SafeUnsignedShort => c_ushort;
    /// A checked `int`.
    SafeInt => c_int;
    /// A checked `unsigned int`.
    SafeUnsignedInt => c_uint;
    /// A checked `long`.
    SafeLong => c_long;
    /// A checked `unsigned long`.
    SafeUnsignedLong => c_ulong;
    /// A checked `long long`.
    SafeLongLong => c_longlong;
    /// A checked `unsigned long long`.
    SafeUnsignedLongLong => c_ulonglong;
}

#[cfg(all(test, not(feature = "native-types")))]
mod tests {
    use super::*;
    use saferint_core::kind::{DataModel, IntegerKind};

    #[test]
    fn test_fixed_width_aliases_wrap_the_primitive() {
        let x: SafeInt16 = SafeInt16::new(-7);
        assert_eq!(x.get(), -7i16);
        assert_eq!(SafeUInt64::new(u64::MAX).get(), u64::MAX);
        assert!(SafeBool::new(true).get());
    }

    #[test]
    fn test_c_aliases_report_their_kind() {
        assert_eq!(SafeSignedChar::new(0).kind(), IntegerKind::SignedChar);
        assert_eq!(SafeUnsignedChar::new(0).kind(), IntegerKind::UnsignedChar);
        assert_eq!(SafeShort::new(0).kind(), IntegerKind::Short);
        assert_eq!(SafeInt::new(0).kind().bits(DataModel::NATIVE), c_int::BITS);
        assert_eq!(SafeLongLong::new(0).kind().bits(DataModel::NATIVE), 64);
    }
}
