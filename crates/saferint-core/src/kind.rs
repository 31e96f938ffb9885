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

//! # Integer Kinds
//!
//! The twelve C integer roles (`bool`, the three `char` flavours, `short`,
//! `int`, `long`, `long long` and their unsigned partners) and the data models
//! that assign them concrete widths.
//!
//! A [`DataModel`] fixes exactly one width per kind. Widths never decrease in
//! rank order, and every model honours the C minimums. [`DataModel::NATIVE`]
//! is derived at compile time from `core::ffi`, so the build target decides
//! how wide `int` or `long` is, exactly as a C compiler would.

use core::ffi::{c_char, c_int, c_long, c_longlong, c_short};
use core::mem::size_of;

/// A conceptual C integer role.
///
/// The discriminants are stable and double as indices into the
/// promotion table. The enum is `#[repr(C)]` so it can cross the FFI boundary.
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum IntegerKind {
    /// `_Bool`.
    Bool,
    /// Plain `char`; its signedness depends on the data model.
    Char,
    /// `signed char`.
    SignedChar,
    /// `unsigned char`.
    UnsignedChar,
    /// `short`.
    Short,
    /// `unsigned short`.
    UnsignedShort,
    /// `int`.
    Int,
    /// `unsigned int`.
    UnsignedInt,
    /// `long`.
    Long,
    /// `unsigned long`.
    UnsignedLong,
    /// `long long`.
    LongLong,
    /// `unsigned long long`.
    UnsignedLongLong,
}

impl IntegerKind {
    /// The number of kinds.
    pub const COUNT: usize = 12;

    /// All kinds, in rank order.
    pub const ALL: [IntegerKind; Self::COUNT] = [
        IntegerKind::Bool,
        IntegerKind::Char,
        IntegerKind::SignedChar,
        IntegerKind::UnsignedChar,
        IntegerKind::Short,
        IntegerKind::UnsignedShort,
        IntegerKind::Int,
        IntegerKind::UnsignedInt,
        IntegerKind::Long,
        IntegerKind::UnsignedLong,
        IntegerKind::LongLong,
        IntegerKind::UnsignedLongLong,
    ];

    /// Returns the position of this kind in [`IntegerKind::ALL`].
    #[inline(always)]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns `true` if both kinds are the same, usable in `const` contexts.
    #[inline(always)]
    pub const fn same_as(self, other: IntegerKind) -> bool {
        self as u8 == other as u8
    }

    /// Returns the C conversion rank of this kind.
    ///
    /// Signed and unsigned partners share a rank, and all three `char`
    /// flavours share one as well.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use saferint_core::kind::IntegerKind;
    /// assert!(IntegerKind::Int.rank() < IntegerKind::Long.rank());
    /// assert_eq!(IntegerKind::Short.rank(), IntegerKind::UnsignedShort.rank());
    /// ```
    pub const fn rank(self) -> u8 {
        match self {
            IntegerKind::Bool => 0,
            IntegerKind::Char | IntegerKind::SignedChar | IntegerKind::UnsignedChar => 1,
            IntegerKind::Short | IntegerKind::UnsignedShort => 2,
            IntegerKind::Int | IntegerKind::UnsignedInt => 3,
            IntegerKind::Long | IntegerKind::UnsignedLong => 4,
            IntegerKind::LongLong | IntegerKind::UnsignedLongLong => 5,
        }
    }

    /// Returns `true` if values of this kind are signed under `model`.
    pub const fn is_signed(self, model: DataModel) -> bool {
        match self {
            IntegerKind::Char => model.char_signed,
            IntegerKind::SignedChar
            | IntegerKind::Short
            | IntegerKind::Int
            | IntegerKind::Long
            | IntegerKind::LongLong => true,
            _ => false,
        }
    }

    /// Returns the storage width in bits under `model`.
    pub const fn bits(self, model: DataModel) -> u32 {
        match self {
            IntegerKind::Bool
            | IntegerKind::Char
            | IntegerKind::SignedChar
            | IntegerKind::UnsignedChar => 8,
            IntegerKind::Short | IntegerKind::UnsignedShort => model.short_bits,
            IntegerKind::Int | IntegerKind::UnsignedInt => model.int_bits,
            IntegerKind::Long | IntegerKind::UnsignedLong => model.long_bits,
            IntegerKind::LongLong | IntegerKind::UnsignedLongLong => model.long_long_bits,
        }
    }

    /// Returns the smallest representable value under `model`.
    pub const fn min_value(self, model: DataModel) -> i128 {
        if self.is_signed(model) {
            -(1i128 << (self.bits(model) - 1))
        } else {
            0
        }
    }

    /// Returns the largest representable value under `model`.
    ///
    /// `bool` is the degenerate case with a maximum of `1`.
    pub const fn max_value(self, model: DataModel) -> i128 {
        if self.same_as(IntegerKind::Bool) {
            1
        } else if self.is_signed(model) {
            (1i128 << (self.bits(model) - 1)) - 1
        } else {
            (1i128 << self.bits(model)) - 1
        }
    }

    /// Returns `true` if every value of `other` is representable by `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use saferint_core::kind::{DataModel, IntegerKind};
    /// let m = DataModel::LP64;
    /// assert!(IntegerKind::Long.can_represent(IntegerKind::UnsignedInt, m));
    /// assert!(!IntegerKind::Int.can_represent(IntegerKind::UnsignedInt, m));
    /// ```
    pub const fn can_represent(self, other: IntegerKind, model: DataModel) -> bool {
        self.min_value(model) <= other.min_value(model) && other.max_value(model) <= self.max_value(model)
    }

    /// Returns the unsigned kind of the same rank.
    ///
    /// Plain `char` maps to `unsigned char`. Unsigned kinds and `bool` are
    /// returned unchanged.
    pub const fn to_unsigned(self) -> IntegerKind {
        match self {
            IntegerKind::Char | IntegerKind::SignedChar => IntegerKind::UnsignedChar,
            IntegerKind::Short => IntegerKind::UnsignedShort,
            IntegerKind::Int => IntegerKind::UnsignedInt,
            IntegerKind::Long => IntegerKind::UnsignedLong,
            IntegerKind::LongLong => IntegerKind::UnsignedLongLong,
            other => other,
        }
    }

    /// Returns the C spelling of this kind.
    pub const fn name(self) -> &'static str {
        match self {
            IntegerKind::Bool => "bool",
            IntegerKind::Char => "char",
            IntegerKind::SignedChar => "signed char",
            IntegerKind::UnsignedChar => "unsigned char",
            IntegerKind::Short => "short",
            IntegerKind::UnsignedShort => "unsigned short",
            IntegerKind::Int => "int",
            IntegerKind::UnsignedInt => "unsigned int",
            IntegerKind::Long => "long",
            IntegerKind::UnsignedLong => "unsigned long",
            IntegerKind::LongLong => "long long",
            IntegerKind::UnsignedLongLong => "unsigned long long",
        }
    }

    /// Maps a fixed-width role (`int8_t`, `uint32_t`, ...) to the
    /// lowest-ranked kind of that width and signedness.
    ///
    /// Plain `char` is never chosen. Returns `None` if no kind matches,
    /// for example 128-bit widths.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use saferint_core::kind::{DataModel, IntegerKind};
    /// assert_eq!(
    ///     IntegerKind::for_fixed_width(64, true, DataModel::LP64),
    ///     Some(IntegerKind::Long)
    /// );
    /// assert_eq!(
    ///     IntegerKind::for_fixed_width(64, true, DataModel::LLP64),
    ///     Some(IntegerKind::LongLong)
    /// );
    /// ```
    pub const fn for_fixed_width(bits: u32, signed: bool, model: DataModel) -> Option<IntegerKind> {
        const SIGNED: [IntegerKind; 5] = [
            IntegerKind::SignedChar,
            IntegerKind::Short,
            IntegerKind::Int,
            IntegerKind::Long,
            IntegerKind::LongLong,
        ];
        const UNSIGNED: [IntegerKind; 5] = [
            IntegerKind::UnsignedChar,
            IntegerKind::UnsignedShort,
            IntegerKind::UnsignedInt,
            IntegerKind::UnsignedLong,
            IntegerKind::UnsignedLongLong,
        ];

        let candidates = if signed { &SIGNED } else { &UNSIGNED };
        let mut i = 0;
        while i < candidates.len() {
            if candidates[i].bits(model) == bits {
                return Some(candidates[i]);
            }
            i += 1;
        }
        None
    }
}

impl std::fmt::Display for IntegerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The widths assigned to the C integer kinds for one build.
///
/// `char`, `signed char` and `unsigned char` are always eight bits wide;
/// only the signedness of plain `char` varies.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct DataModel {
    char_signed: bool,
    short_bits: u32,
    int_bits: u32,
    long_bits: u32,
    long_long_bits: u32,
}

impl DataModel {
    /// 64-bit Unix: 32-bit `int`, 64-bit `long`.
    pub const LP64: DataModel = DataModel::new_unchecked(true, 16, 32, 64, 64);
    /// 64-bit Windows: 32-bit `int` and `long`, 64-bit `long long`.
    pub const LLP64: DataModel = DataModel::new_unchecked(true, 16, 32, 32, 64);
    /// Classic 32-bit targets.
    pub const ILP32: DataModel = DataModel::new_unchecked(true, 16, 32, 32, 64);
    /// 16-bit `int` targets such as AVR, where `short` and `int` coincide.
    pub const I16LP32: DataModel = DataModel::new_unchecked(true, 16, 16, 32, 64);

    /// The data model of the build target.
    pub const NATIVE: DataModel = DataModel::new_unchecked(
        c_char::MIN != 0,
        (size_of::<c_short>() * 8) as u32,
        (size_of::<c_int>() * 8) as u32,
        (size_of::<c_long>() * 8) as u32,
        (size_of::<c_longlong>() * 8) as u32,
    );

    /// Creates a new `DataModel` if the widths satisfy the C requirements.
    ///
    /// Returns `None` unless `16 <= short <= int <= long <= long long <= 64`,
    /// `long >= 32`, `long long >= 64`, and every width is a multiple of eight.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use saferint_core::kind::DataModel;
    /// assert!(DataModel::new(false, 16, 32, 64, 64).is_some());
    /// assert!(DataModel::new(true, 32, 16, 32, 64).is_none());
    /// ```
    pub const fn new(
        char_signed: bool,
        short_bits: u32,
        int_bits: u32,
        long_bits: u32,
        long_long_bits: u32,
    ) -> Option<DataModel> {
        let model = DataModel::new_unchecked(
            char_signed,
            short_bits,
            int_bits,
            long_bits,
            long_long_bits,
        );
        if model.is_valid() {
            Some(model)
        } else {
            None
        }
    }

    const fn new_unchecked(
        char_signed: bool,
        short_bits: u32,
        int_bits: u32,
        long_bits: u32,
        long_long_bits: u32,
    ) -> DataModel {
        DataModel {
            char_signed,
            short_bits,
            int_bits,
            long_bits,
            long_long_bits,
        }
    }

    /// Returns `true` if the widths are ordered and meet the C minimums.
    pub const fn is_valid(&self) -> bool {
        let aligned = self.short_bits % 8 == 0
            && self.int_bits % 8 == 0
            && self.long_bits % 8 == 0
            && self.long_long_bits % 8 == 0;
        aligned
            && self.short_bits >= 16
            && self.short_bits <= self.int_bits
            && self.int_bits <= self.long_bits
            && self.long_bits >= 32
            && self.long_bits <= self.long_long_bits
            && self.long_long_bits >= 64
            && self.long_long_bits <= 64
    }

    /// Returns `true` if plain `char` is signed.
    #[inline]
    pub const fn char_signed(&self) -> bool {
        self.char_signed
    }

    /// Returns the width of `short` in bits.
    #[inline]
    pub const fn short_bits(&self) -> u32 {
        self.short_bits
    }

    /// Returns the width of `int` in bits.
    #[inline]
    pub const fn int_bits(&self) -> u32 {
        self.int_bits
    }

    /// Returns the width of `long` in bits.
    #[inline]
    pub const fn long_bits(&self) -> u32 {
        self.long_bits
    }

    /// Returns the width of `long long` in bits.
    #[inline]
    pub const fn long_long_bits(&self) -> u32 {
        self.long_long_bits
    }
}

impl Default for DataModel {
    fn default() -> Self {
        DataModel::NATIVE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MODELS: [DataModel; 5] = [
        DataModel::LP64,
        DataModel::LLP64,
        DataModel::ILP32,
        DataModel::I16LP32,
        DataModel::NATIVE,
    ];

    #[test]
    fn test_all_is_in_rank_order() {
        for pair in IntegerKind::ALL.windows(2) {
            assert!(pair[0].rank() <= pair[1].rank());
        }
        for (i, kind) in IntegerKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }

    #[test]
    fn test_widths_non_decreasing_in_rank_order() {
        for model in MODELS {
            assert!(model.is_valid(), "{:?}", model);
            for a in IntegerKind::ALL {
                for b in IntegerKind::ALL {
                    if a.rank() < b.rank() {
                        assert!(a.bits(model) <= b.bits(model), "{} vs {}", a, b);
                    }
                }
            }
        }
    }

    #[test]
    fn test_native_matches_ffi_sizes() {
        let m = DataModel::NATIVE;
        assert_eq!(m.int_bits() as usize, size_of::<c_int>() * 8);
        assert_eq!(m.long_bits() as usize, size_of::<c_long>() * 8);
        assert_eq!(m.char_signed(), c_char::MIN != 0);
        assert_eq!(IntegerKind::Int.max_value(m), c_int::MAX as i128);
        assert_eq!(IntegerKind::Long.min_value(m), c_long::MIN as i128);
    }

    #[test]
    fn test_new_rejects_invalid_models() {
        assert!(DataModel::new(true, 32, 16, 32, 64).is_none());
        assert!(DataModel::new(true, 8, 16, 32, 64).is_none());
        assert!(DataModel::new(true, 16, 32, 16, 64).is_none());
        assert!(DataModel::new(true, 16, 32, 64, 128).is_none());
        assert!(DataModel::new(true, 16, 24, 32, 64).is_some());
        assert_eq!(DataModel::new(true, 16, 32, 64, 64), Some(DataModel::LP64));
    }

    #[test]
    fn test_bounds() {
        let m = DataModel::LP64;
        assert_eq!(IntegerKind::Int.min_value(m), i32::MIN as i128);
        assert_eq!(IntegerKind::Int.max_value(m), i32::MAX as i128);
        assert_eq!(IntegerKind::UnsignedLongLong.max_value(m), u64::MAX as i128);
        assert_eq!(IntegerKind::UnsignedChar.min_value(m), 0);
        assert_eq!(IntegerKind::Bool.min_value(m), 0);
        assert_eq!(IntegerKind::Bool.max_value(m), 1);
        assert_eq!(IntegerKind::Short.max_value(DataModel::I16LP32), i16::MAX as i128);
    }

    #[test]
    fn test_char_signedness_follows_model() {
        let unsigned_char = DataModel::new(false, 16, 32, 64, 64).unwrap();
        assert!(!IntegerKind::Char.is_signed(unsigned_char));
        assert_eq!(IntegerKind::Char.max_value(unsigned_char), 255);
        assert!(IntegerKind::Char.is_signed(DataModel::LP64));
        assert_eq!(IntegerKind::Char.min_value(DataModel::LP64), -128);
    }

    #[test]
    fn test_for_fixed_width() {
        assert_eq!(
            IntegerKind::for_fixed_width(8, true, DataModel::LP64),
            Some(IntegerKind::SignedChar)
        );
        assert_eq!(
            IntegerKind::for_fixed_width(32, false, DataModel::LP64),
            Some(IntegerKind::UnsignedInt)
        );
        assert_eq!(
            IntegerKind::for_fixed_width(64, false, DataModel::LP64),
            Some(IntegerKind::UnsignedLong)
        );
        assert_eq!(
            IntegerKind::for_fixed_width(64, false, DataModel::LLP64),
            Some(IntegerKind::UnsignedLongLong)
        );
        assert_eq!(
            IntegerKind::for_fixed_width(16, true, DataModel::I16LP32),
            Some(IntegerKind::Short)
        );
        assert_eq!(
            IntegerKind::for_fixed_width(32, true, DataModel::I16LP32),
            Some(IntegerKind::Long)
        );
        assert_eq!(IntegerKind::for_fixed_width(128, true, DataModel::LP64), None);
    }

    #[test]
    fn test_can_represent() {
        let m = DataModel::LP64;
        assert!(IntegerKind::Int.can_represent(IntegerKind::Short, m));
        assert!(IntegerKind::Int.can_represent(IntegerKind::UnsignedShort, m));
        assert!(!IntegerKind::Int.can_represent(IntegerKind::UnsignedShort, DataModel::I16LP32));
        assert!(!IntegerKind::UnsignedLong.can_represent(IntegerKind::SignedChar, m));
        assert!(IntegerKind::UnsignedChar.can_represent(IntegerKind::Bool, m));
        assert!(!IntegerKind::Bool.can_represent(IntegerKind::UnsignedChar, m));
    }

    #[test]
    fn test_to_unsigned_keeps_rank() {
        for kind in IntegerKind::ALL {
            let u = kind.to_unsigned();
            assert_eq!(u.rank(), kind.rank());
            assert!(!u.is_signed(DataModel::LP64));
        }
        assert_eq!(IntegerKind::Long.to_unsigned(), IntegerKind::UnsignedLong);
    }

    #[test]
    fn test_display_uses_c_spelling() {
        assert_eq!(format!("{}", IntegerKind::UnsignedLongLong), "unsigned long long");
        assert_eq!(IntegerKind::SignedChar.to_string(), "signed char");
    }
}
