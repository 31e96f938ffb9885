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

//! # Native Integer Traits
//!
//! Associated-constant traits describing the Rust primitives that stand in
//! for C integer kinds. [`NativeInteger`] covers everything that can be
//! converted and range checked (including `bool`), while [`Arithmetic`]
//! narrows that down to the eight fixed-width types that take part in
//! checked arithmetic.
//!
//! Every implementation carries its [`IntegerKind`] under the native data
//! model, so generic code can ask "which C type am I?" without runtime cost.

use crate::kind::{DataModel, IntegerKind};
use num_traits::{
    PrimInt, WrappingAdd, WrappingMul, WrappingNeg, WrappingShl, WrappingShr, WrappingSub,
};
use std::{
    fmt::{Debug, Display},
    hash::Hash,
};

mod sealed {
    pub trait Sealed {}
}

/// A primitive that represents one C integer kind on the build target.
///
/// All values of every implementing type are exactly representable as `i128`,
/// which is the width at which range checks are carried out.
///
/// # Examples
///
/// ```rust
/// # use saferint_core::num::native::NativeInteger;
/// assert!(<i16 as NativeInteger>::SIGNED);
/// assert_eq!(<u8 as NativeInteger>::MAX_VALUE, 255);
/// assert_eq!(<i8 as NativeInteger>::wrapping_from_i128(200), -56);
/// assert!(<bool as NativeInteger>::wrapping_from_i128(2));
/// ```
pub trait NativeInteger:
    Copy + Default + Debug + Display + Eq + Ord + Hash + Send + Sync + 'static + sealed::Sealed
{
    /// The C kind this primitive represents under [`DataModel::NATIVE`].
    const KIND: IntegerKind;
    /// `true` for signed primitives.
    const SIGNED: bool;
    /// The storage width in bits.
    const BITS: u32;
    /// The smallest value, widened to `i128`.
    const MIN_VALUE: i128;
    /// The largest value, widened to `i128`.
    const MAX_VALUE: i128;
    /// The Rust spelling of the primitive.
    const TYPE_NAME: &'static str;

    /// Widens the value to `i128` without loss.
    fn as_i128(self) -> i128;

    /// Converts with native `as` semantics: keeps the low bits, or for
    /// `bool`, tests against zero.
    fn wrapping_from_i128(value: i128) -> Self;
}

/// A [`NativeInteger`] that supports the full set of arithmetic, bitwise and
/// shift operators.
pub trait Arithmetic:
    NativeInteger
    + PrimInt
    + WrappingAdd
    + WrappingSub
    + WrappingMul
    + WrappingNeg
    + WrappingShl
    + WrappingShr
{
    /// Converts `value` if it lies within `[MIN_VALUE, MAX_VALUE]`.
    #[inline]
    fn from_i128_exact(value: i128) -> Option<Self> {
        if (Self::MIN_VALUE..=Self::MAX_VALUE).contains(&value) {
            Some(Self::wrapping_from_i128(value))
        } else {
            None
        }
    }

    /// Clamps `value` into `[MIN_VALUE, MAX_VALUE]` and converts it.
    #[inline]
    fn saturating_from_i128(value: i128) -> Self {
        Self::wrapping_from_i128(value.clamp(Self::MIN_VALUE, Self::MAX_VALUE))
    }
}

const fn native_kind(bits: u32, signed: bool) -> IntegerKind {
    match IntegerKind::for_fixed_width(bits, signed, DataModel::NATIVE) {
        Some(kind) => kind,
        None => panic!("no C integer kind has this width on the build target"),
    }
}

macro_rules! impl_native_integer {
    ($t:ty, $signed:expr) => {
        impl sealed::Sealed for $t {}

        impl NativeInteger for $t {
            const KIND: IntegerKind = native_kind(<$t>::BITS, $signed);
            const SIGNED: bool = $signed;
            const BITS: u32 = <$t>::BITS;
            const MIN_VALUE: i128 = <$t>::MIN as i128;
            const MAX_VALUE: i128 = <$t>::MAX as i128;
            const TYPE_NAME: &'static str = stringify!($t);

            #[inline(always)]
            fn as_i128(self) -> i128 {
                self as i128
            }

            #[inline(always)]
            fn wrapping_from_i128(value: i128) -> Self {
                value as $t
            }
        }

        impl Arithmetic for $t {}
    };
}

impl_native_integer!(i8, true);
impl_native_integer!(u8, false);
impl_native_integer!(i16, true);
impl_native_integer!(u16, false);
impl_native_integer!(i32, true);
impl_native_integer!(u32, false);
impl_native_integer!(i64, true);
impl_native_integer!(u64, false);

impl sealed::Sealed for bool {}

impl NativeInteger for bool {
    const KIND: IntegerKind = IntegerKind::Bool;
    const SIGNED: bool = false;
    const BITS: u32 = 8;
    const MIN_VALUE: i128 = 0;
    const MAX_VALUE: i128 = 1;
    const TYPE_NAME: &'static str = "bool";

    #[inline(always)]
    fn as_i128(self) -> i128 {
        self as i128
    }

    #[inline(always)]
    fn wrapping_from_i128(value: i128) -> Self {
        value != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds<T: NativeInteger>() -> (i128, i128) {
        (T::MIN_VALUE, T::MAX_VALUE)
    }

    #[test]
    fn test_bounds_match_kind_bounds() {
        let m = DataModel::NATIVE;
        assert_eq!(bounds::<i8>(), (i8::KIND.min_value(m), i8::KIND.max_value(m)));
        assert_eq!(bounds::<u16>(), (u16::KIND.min_value(m), u16::KIND.max_value(m)));
        assert_eq!(bounds::<i32>(), (i32::KIND.min_value(m), i32::KIND.max_value(m)));
        assert_eq!(bounds::<u64>(), (u64::KIND.min_value(m), u64::KIND.max_value(m)));
        assert_eq!(bounds::<bool>(), (0, 1));
    }

    #[test]
    fn test_kinds_of_fixed_widths() {
        assert_eq!(<i8 as NativeInteger>::KIND, IntegerKind::SignedChar);
        assert_eq!(<u8 as NativeInteger>::KIND, IntegerKind::UnsignedChar);
        assert_eq!(<i16 as NativeInteger>::KIND.bits(DataModel::NATIVE), 16);
        assert_eq!(<u64 as NativeInteger>::KIND.bits(DataModel::NATIVE), 64);
        assert!(!<u32 as NativeInteger>::KIND.is_signed(DataModel::NATIVE));
        assert_eq!(<bool as NativeInteger>::KIND, IntegerKind::Bool);
    }

    #[test]
    fn test_wrapping_from_i128() {
        assert_eq!(<u8 as NativeInteger>::wrapping_from_i128(-1), 255);
        assert_eq!(<i16 as NativeInteger>::wrapping_from_i128(40_000), -25_536);
        assert_eq!(<u64 as NativeInteger>::wrapping_from_i128(-1), u64::MAX);
        assert!(!<bool as NativeInteger>::wrapping_from_i128(0));
        assert!(<bool as NativeInteger>::wrapping_from_i128(-7));
    }

    #[test]
    fn test_from_i128_exact_and_saturating() {
        assert_eq!(<i8 as Arithmetic>::from_i128_exact(127), Some(127));
        assert_eq!(<i8 as Arithmetic>::from_i128_exact(128), None);
        assert_eq!(<u32 as Arithmetic>::saturating_from_i128(-5), 0);
        assert_eq!(<i16 as Arithmetic>::saturating_from_i128(1 << 40), i16::MAX);
    }

    #[test]
    fn test_type_names() {
        assert_eq!(<i32 as NativeInteger>::TYPE_NAME, "i32");
        assert_eq!(<bool as NativeInteger>::TYPE_NAME, "bool");
    }
}
