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

//! # Promotion
//!
//! The C "usual arithmetic conversions": the rule that decides which kind two
//! operands are converted to before a binary operator runs.
//!
//! The rule exists at two levels:
//!
//! - At runtime, over [`IntegerKind`] and any [`DataModel`]. The table for the
//!   build target, [`PromotionTable::NATIVE`], is evaluated at compile time.
//! - At the type level, through [`Promote`], so checked arithmetic on
//!   `CheckedInteger<i8>` and `CheckedInteger<u32>` can name its result type.

use crate::kind::{DataModel, IntegerKind};
use crate::num::native::{Arithmetic, NativeInteger};

/// Applies C integer promotion to a single operand kind.
///
/// Kinds ranked below `int` become `int`, or `unsigned int` when `int` cannot
/// hold every value of the narrower kind. All other kinds are unchanged.
///
/// # Examples
///
/// ```rust
/// # use saferint_core::kind::{DataModel, IntegerKind};
/// # use saferint_core::promotion::integer_promotion;
/// assert_eq!(integer_promotion(IntegerKind::UnsignedShort, DataModel::LP64), IntegerKind::Int);
/// assert_eq!(
///     integer_promotion(IntegerKind::UnsignedShort, DataModel::I16LP32),
///     IntegerKind::UnsignedInt
/// );
/// ```
pub const fn integer_promotion(kind: IntegerKind, model: DataModel) -> IntegerKind {
    if kind.rank() >= IntegerKind::Int.rank() {
        kind
    } else if IntegerKind::Int.can_represent(kind, model) {
        IntegerKind::Int
    } else {
        IntegerKind::UnsignedInt
    }
}

/// Returns the common kind of `lhs` and `rhs` under `model`.
///
/// Both operands are integer-promoted first. With equal signedness the
/// higher-ranked kind wins. With mixed signedness the unsigned kind wins if
/// its rank is at least the signed kind's rank; otherwise the signed kind wins
/// if it can hold every unsigned value, and its unsigned partner is used if it
/// cannot.
///
/// # Examples
///
/// ```rust
/// # use saferint_core::kind::{DataModel, IntegerKind};
/// # use saferint_core::promotion::promote_in;
/// let k = promote_in(IntegerKind::Long, IntegerKind::UnsignedInt, DataModel::LP64);
/// assert_eq!(k, IntegerKind::Long);
/// let k = promote_in(IntegerKind::Long, IntegerKind::UnsignedInt, DataModel::LLP64);
/// assert_eq!(k, IntegerKind::UnsignedLong);
/// ```
pub const fn promote_in(lhs: IntegerKind, rhs: IntegerKind, model: DataModel) -> IntegerKind {
    let a = integer_promotion(lhs, model);
    let b = integer_promotion(rhs, model);
    if a.same_as(b) {
        return a;
    }

    let a_signed = a.is_signed(model);
    if a_signed == b.is_signed(model) {
        return if a.rank() >= b.rank() { a } else { b };
    }

    let (signed, unsigned) = if a_signed { (a, b) } else { (b, a) };
    if unsigned.rank() >= signed.rank() {
        unsigned
    } else if signed.can_represent(unsigned, model) {
        signed
    } else {
        signed.to_unsigned()
    }
}

/// The promotion rule for every pair of kinds under one data model.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PromotionTable {
    model: DataModel,
    table: [[IntegerKind; IntegerKind::COUNT]; IntegerKind::COUNT],
}

impl PromotionTable {
    /// The table for the build target.
    pub const NATIVE: PromotionTable = PromotionTable::new(DataModel::NATIVE);

    /// Builds the table for `model`.
    pub const fn new(model: DataModel) -> Self {
        let mut table = [[IntegerKind::Bool; IntegerKind::COUNT]; IntegerKind::COUNT];
        let mut i = 0;
        while i < IntegerKind::COUNT {
            let mut j = 0;
            while j < IntegerKind::COUNT {
                table[i][j] = promote_in(IntegerKind::ALL[i], IntegerKind::ALL[j], model);
                j += 1;
            }
            i += 1;
        }
        Self { model, table }
    }

    /// Returns the data model this table was built for.
    #[inline(always)]
    pub const fn model(&self) -> DataModel {
        self.model
    }

    /// Returns the common kind of `lhs` and `rhs`.
    #[inline(always)]
    pub const fn get(&self, lhs: IntegerKind, rhs: IntegerKind) -> IntegerKind {
        self.table[lhs.index()][rhs.index()]
    }
}

impl Default for PromotionTable {
    fn default() -> Self {
        Self::NATIVE
    }
}

/// Returns the common kind of `lhs` and `rhs` on the build target.
///
/// # Examples
///
/// ```rust
/// # use saferint_core::kind::IntegerKind;
/// # use saferint_core::promotion::promote;
/// assert_eq!(promote(IntegerKind::Char, IntegerKind::Short), IntegerKind::Int);
/// assert_eq!(promote(IntegerKind::Int, IntegerKind::UnsignedInt), IntegerKind::UnsignedInt);
/// ```
#[inline(always)]
pub const fn promote(lhs: IntegerKind, rhs: IntegerKind) -> IntegerKind {
    PromotionTable::NATIVE.get(lhs, rhs)
}

/// Unary integer promotion at the type level.
pub trait IntegerPromotion: NativeInteger {
    /// The primitive this type promotes to.
    type Output: Arithmetic;
}

/// The usual arithmetic conversion between two already-promoted primitives.
pub trait UsualConversion<Rhs: Arithmetic>: Arithmetic {
    /// The common primitive.
    type Output: Arithmetic;
}

/// The full promotion of a binary operator's operands at the type level.
///
/// # Examples
///
/// ```rust
/// # use saferint_core::promotion::Promoted;
/// let x: Promoted<u8, i16> = 7i32;
/// let y: Promoted<i32, u32> = 7u32;
/// let z: Promoted<u32, i64> = 7i64;
/// # let _ = (x, y, z);
/// ```
pub trait Promote<Rhs: NativeInteger>: NativeInteger {
    /// The common primitive.
    type Output: Arithmetic;
}

impl<L, R> Promote<R> for L
where
    L: IntegerPromotion,
    R: IntegerPromotion,
    L::Output: UsualConversion<R::Output>,
{
    type Output = <L::Output as UsualConversion<R::Output>>::Output;
}

/// The common primitive of `L` and `R`.
pub type Promoted<L, R> = <L as Promote<R>>::Output;

macro_rules! integer_promotion {
    ($($t:ty => $out:ty),* $(,)?) => {
        $(
            impl IntegerPromotion for $t {
                type Output = $out;
            }
        )*
    };
}

macro_rules! usual_conversion {
    ($(($l:ty, $r:ty) => $out:ty),* $(,)?) => {
        $(
            impl UsualConversion<$r> for $l {
                type Output = $out;
            }
        )*
    };
}

#[cfg(not(any(target_arch = "avr", target_arch = "msp430")))]
integer_promotion! {
    bool => i32, i8 => i32, u8 => i32, i16 => i32, u16 => i32,
    i32 => i32, u32 => u32, i64 => i64, u64 => u64,
}

#[cfg(not(any(target_arch = "avr", target_arch = "msp430")))]
usual_conversion! {
    (i32, i32) => i32, (i32, u32) => u32, (i32, i64) => i64, (i32, u64) => u64,
    (u32, i32) => u32, (u32, u32) => u32, (u32, i64) => i64, (u32, u64) => u64,
    (i64, i32) => i64, (i64, u32) => i64, (i64, i64) => i64, (i64, u64) => u64,
    (u64, i32) => u64, (u64, u32) => u64, (u64, i64) => u64, (u64, u64) => u64,
}

// 16-bit `int`: `short` and `int` share a width, so `unsigned short` keeps
// its signedness.
#[cfg(any(target_arch = "avr", target_arch = "msp430"))]
integer_promotion! {
    bool => i16, i8 => i16, u8 => i16, i16 => i16, u16 => u16,
    i32 => i32, u32 => u32, i64 => i64, u64 => u64,
}

#[cfg(any(target_arch = "avr", target_arch = "msp430"))]
usual_conversion! {
    (i16, i16) => i16, (i16, u16) => u16, (i16, i32) => i32,
    (i16, u32) => u32, (i16, i64) => i64, (i16, u64) => u64,
    (u16, i16) => u16, (u16, u16) => u16, (u16, i32) => i32,
    (u16, u32) => u32, (u16, i64) => i64, (u16, u64) => u64,
    (i32, i16) => i32, (i32, u16) => i32, (i32, i32) => i32,
    (i32, u32) => u32, (i32, i64) => i64, (i32, u64) => u64,
    (u32, i16) => u32, (u32, u16) => u32, (u32, i32) => u32,
    (u32, u32) => u32, (u32, i64) => i64, (u32, u64) => u64,
    (i64, i16) => i64, (i64, u16) => i64, (i64, i32) => i64,
    (i64, u32) => i64, (i64, i64) => i64, (i64, u64) => u64,
    (u64, i16) => u64, (u64, u16) => u64, (u64, i32) => u64,
    (u64, u32) => u64, (u64, i64) => u64, (u64, u64) => u64,
}
