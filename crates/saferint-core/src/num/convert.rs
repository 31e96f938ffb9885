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

//! # Safe Conversions
//!
//! Total conversion functions between every pair of integer widths and
//! signedness. A conversion never traps: it always yields a best-effort value
//! clamped into the destination range, together with a precise
//! [`ConversionError`] explaining what was lost.
//!
//! [`convert`] is the generic implementation. The fixed-name functions
//! (`int8_from_int16`, `uint64_from_int32`, ...) are thin entry points for
//! every ordered pair of the eight core widths.

use crate::kind::{DataModel, IntegerKind};
use crate::num::native::NativeInteger;
use crate::num::range::{fits, kind_fits};

/// The classification of a lossy conversion.
///
/// `None` means the value was represented exactly. The enum is `#[repr(C)]`
/// so it can cross the FFI boundary.
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum ConversionError {
    /// The value was represented exactly.
    #[default]
    None,
    /// A signed value below the minimum of a signed destination.
    NegativeSignedValueLessThanMinimumOfTargetSignedInteger,
    /// A signed value above the maximum of a signed destination.
    PositiveSignedValueGreaterThanMaximumOfTargetSignedInteger,
    /// An unsigned value above the maximum of a signed destination.
    UnsignedValueGreaterThanMaximumOfTargetSignedInteger,
    /// A negative signed value converted to an unsigned destination.
    NegativeSignedValueCannotBeRepresentedByUnsignedInteger,
    /// A signed value above the maximum of an unsigned destination.
    PositiveSignedValueGreaterThanMaximumOfTargetUnsignedInteger,
    /// An unsigned value above the maximum of an unsigned destination.
    UnsignedValueGreaterThanMaximumOfTargetUnsignedInteger,
}

impl ConversionError {
    /// Returns the snake_case identifier of this error.
    pub const fn as_str(self) -> &'static str {
        match self {
            ConversionError::None => "none",
            ConversionError::NegativeSignedValueLessThanMinimumOfTargetSignedInteger => {
                "negative_signed_value_less_than_minimum_of_target_signed_integer"
            }
            ConversionError::PositiveSignedValueGreaterThanMaximumOfTargetSignedInteger => {
                "positive_signed_value_greater_than_maximum_of_target_signed_integer"
            }
            ConversionError::UnsignedValueGreaterThanMaximumOfTargetSignedInteger => {
                "unsigned_value_greater_than_maximum_of_target_signed_integer"
            }
            ConversionError::NegativeSignedValueCannotBeRepresentedByUnsignedInteger => {
                "negative_signed_value_cannot_be_represented_by_unsigned_integer"
            }
            ConversionError::PositiveSignedValueGreaterThanMaximumOfTargetUnsignedInteger => {
                "positive_signed_value_greater_than_maximum_of_target_unsigned_integer"
            }
            ConversionError::UnsignedValueGreaterThanMaximumOfTargetUnsignedInteger => {
                "unsigned_value_greater_than_maximum_of_target_unsigned_integer"
            }
        }
    }

    /// Returns `true` unless this is [`ConversionError::None`].
    #[inline]
    pub const fn is_error(self) -> bool {
        !matches!(self, ConversionError::None)
    }

    /// Returns `true` if source and destination share signedness and the
    /// value was simply too large in magnitude.
    pub const fn is_truncation(self) -> bool {
        matches!(
            self,
            ConversionError::NegativeSignedValueLessThanMinimumOfTargetSignedInteger
                | ConversionError::PositiveSignedValueGreaterThanMaximumOfTargetSignedInteger
                | ConversionError::UnsignedValueGreaterThanMaximumOfTargetUnsignedInteger
        )
    }

    /// Returns `true` if the conversion crossed signedness and lost the value.
    pub const fn is_signedness_loss(self) -> bool {
        self.is_error() && !self.is_truncation()
    }
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::error::Error for ConversionError {}

/// The outcome of a safe conversion: a best-effort value and its error.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Conversion<D> {
    /// The converted value, clamped into the destination range.
    pub value: D,
    /// Why the value differs from the source, if it does.
    pub error: ConversionError,
}

impl<D> Conversion<D> {
    /// Returns `true` if the value was represented exactly.
    #[inline]
    pub fn is_exact(&self) -> bool {
        !self.error.is_error()
    }

    /// Converts into a `Result`, discarding the clamped value on error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use saferint_core::num::convert::{int8_from_int16, ConversionError};
    /// assert_eq!(int8_from_int16(-3).into_result(), Ok(-3));
    /// assert_eq!(
    ///     int8_from_int16(-300).into_result(),
    ///     Err(ConversionError::NegativeSignedValueLessThanMinimumOfTargetSignedInteger)
    /// );
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<D, ConversionError> {
        if self.error.is_error() {
            Err(self.error)
        } else {
            Ok(self.value)
        }
    }
}

const fn classify_value(
    value: i128,
    source_signed: bool,
    dest_signed: bool,
    dest_min: i128,
    dest_max: i128,
) -> ConversionError {
    if value >= dest_min && value <= dest_max {
        return ConversionError::None;
    }
    match (dest_signed, source_signed) {
        (true, true) if value < dest_min => {
            ConversionError::NegativeSignedValueLessThanMinimumOfTargetSignedInteger
        }
        (true, true) => ConversionError::PositiveSignedValueGreaterThanMaximumOfTargetSignedInteger,
        (true, false) => ConversionError::UnsignedValueGreaterThanMaximumOfTargetSignedInteger,
        (false, true) if value < 0 => {
            ConversionError::NegativeSignedValueCannotBeRepresentedByUnsignedInteger
        }
        (false, true) => {
            ConversionError::PositiveSignedValueGreaterThanMaximumOfTargetUnsignedInteger
        }
        (false, false) => ConversionError::UnsignedValueGreaterThanMaximumOfTargetUnsignedInteger,
    }
}

/// Classifies what converting `value` into `D` would lose.
///
/// # Examples
///
/// ```rust
/// # use saferint_core::num::convert::{classify, ConversionError};
/// assert_eq!(classify::<u8, i16>(-5), ConversionError::NegativeSignedValueCannotBeRepresentedByUnsignedInteger);
/// assert_eq!(classify::<u8, i16>(5), ConversionError::None);
/// ```
pub fn classify<D, S>(value: S) -> ConversionError
where
    D: NativeInteger,
    S: NativeInteger,
{
    if fits::<D, S>(value) {
        ConversionError::None
    } else {
        classify_value(
            value.as_i128(),
            S::SIGNED,
            D::SIGNED,
            D::MIN_VALUE,
            D::MAX_VALUE,
        )
    }
}

/// Classifies converting a `source`-kind `value` into `dest` under `model`.
pub const fn classify_kind(
    value: i128,
    source: IntegerKind,
    dest: IntegerKind,
    model: DataModel,
) -> ConversionError {
    if kind_fits(value, dest, model) {
        ConversionError::None
    } else {
        classify_value(
            value,
            source.is_signed(model),
            dest.is_signed(model),
            dest.min_value(model),
            dest.max_value(model),
        )
    }
}

/// Converts `value` into `D`, clamping it into range on failure.
///
/// The returned value equals `value` exactly when the error is `None` and
/// `clamp(value, D::MIN, D::MAX)` otherwise. A `bool` destination follows the
/// C rule and becomes `value != 0`.
///
/// # Examples
///
/// ```rust
/// # use saferint_core::num::convert::{convert, ConversionError};
/// let c = convert::<i8, i16>(200);
/// assert_eq!(c.value, 127);
/// assert_eq!(c.error, ConversionError::PositiveSignedValueGreaterThanMaximumOfTargetSignedInteger);
/// ```
pub fn convert<D, S>(value: S) -> Conversion<D>
where
    D: NativeInteger,
    S: NativeInteger,
{
    let error = classify::<D, S>(value);
    let v = value.as_i128();
    let clamped = if error.is_error() {
        v.clamp(D::MIN_VALUE, D::MAX_VALUE)
    } else {
        v
    };
    Conversion {
        value: D::wrapping_from_i128(clamped),
        error,
    }
}

macro_rules! conversion_fn {
    ($name:ident, $src:ty => $dst:ty) => {
        #[doc = concat!(
            "Converts `", stringify!($src), "` to `", stringify!($dst),
            "`, clamping out-of-range values."
        )]
        #[inline]
        pub fn $name(value: $src) -> Conversion<$dst> {
            convert::<$dst, $src>(value)
        }
    };
}
conversion_fn!(int8_from_int8, i8 => i8);
conversion_fn!(int8_from_uint8, u8 => i8);
conversion_fn!(int8_from_int16, i16 => i8);
conversion_fn!(int8_from_uint16, u16 => i8);
conversion_fn!(int8_from_int32, i32 => i8);
conversion_fn!(int8_from_uint32, u32 => i8);
conversion_fn!(int8_from_int64, i64 => i8);
conversion_fn!(int8_from_uint64, u64 => i8);
conversion_fn!(uint8_from_int8, i8 => u8);
conversion_fn!(uint8_from_uint8, u8 => u8);
conversion_fn!(uint8_from_int16, i16 => u8);
conversion_fn!(uint8_from_uint16, u16 => u8);
conversion_fn!(uint8_from_int32, i32 => u8);
conversion_fn!(uint8_from_uint32, u32 => u8);
conversion_fn!(uint8_from_int64, i64 => u8);
conversion_fn!(uint8_from_uint64, u64 => u8);
conversion_fn!(int16_from_int8, i8 => i16);
conversion_fn!(int16_from_uint8, u8 => i16);
conversion_fn!(int16_from_int16, i16 => i16);
conversion_fn!(int16_from_uint16, u16 => i16);
conversion_fn!(int16_from_int32, i32 => i16);
conversion_fn!(int16_from_uint32, u32 => i16);
conversion_fn!(int16_from_int64, i64 => i16);
conversion_fn!(int16_from_uint64, u64 => i16);
conversion_fn!(uint16_from_int8, i8 => u16);
conversion_fn!(uint16_from_uint8, u8 => u16);
conversion_fn!(uint16_from_int16, i16 => u16);
conversion_fn!(uint16_from_uint16, u16 => u16);
conversion_fn!(uint16_from_int32, i32 => u16);
conversion_fn!(uint16_from_uint32, u32 => u16);
conversion_fn!(uint16_from_int64, i64 => u16);
conversion_fn!(uint16_from_uint64, u64 => u16);
conversion_fn!(int32_from_int8, i8 => i32);
conversion_fn!(int32_from_uint8, u8 => i32);
conversion_fn!(int32_from_int16, i16 => i32);
conversion_fn!(int32_from_uint16, u16 => i32);
conversion_fn!(int32_from_int32, i32 => i32);
conversion_fn!(int32_from_uint32, u32 => i32);
conversion_fn!(int32_from_int64, i64 => i32);
conversion_fn!(int32_from_uint64, u64 => i32);
conversion_fn!(uint32_from_int8, i8 => u32);
conversion_fn!(uint32_from_uint8, u8 => u32);
conversion_fn!(uint32_from_int16, i16 => u32);
conversion_fn!(uint32_from_uint16, u16 => u32);
conversion_fn!(uint32_from_int32, i32 => u32);
conversion_fn!(uint32_from_uint32, u32 => u32);
conversion_fn!(uint32_from_int64, i64 => u32);
conversion_fn!(uint32_from_uint64, u64 => u32);
conversion_fn!(int64_from_int8, i8 => i64);
conversion_fn!(int64_from_uint8, u8 => i64);
conversion_fn!(int64_from_int16, i16 => i64);
conversion_fn!(int64_from_uint16, u16 => i64);
conversion_fn!(int64_from_int32, i32 => i64);
conversion_fn!(int64_from_uint32, u32 => i64);
conversion_fn!(int64_from_int64, i64 => i64);
conversion_fn!(int64_from_uint64, u64 => i64);
conversion_fn!(uint64_from_int8, i8 => u64);
conversion_fn!(uint64_from_uint8, u8 => u64);
conversion_fn!(uint64_from_int16, i16 => u64);
conversion_fn!(uint64_from_uint16, u16 => u64);
conversion_fn!(uint64_from_int32, i32 => u64);
conversion_fn!(uint64_from_uint32, u32 => u64);
conversion_fn!(uint64_from_int64, i64 => u64);
conversion_fn!(uint64_from_uint64, u64 => u64);
