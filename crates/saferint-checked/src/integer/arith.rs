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

//! Operator overloads for [`CheckedInteger`].
//!
//! Every binary operator exists in three shapes (wrapper with wrapper,
//! wrapper with native, native with wrapper) and all of them funnel into one
//! checked routine. Shifts promote only their left operand. Compound
//! assignments compute in the promoted kind and narrow the result back
//! through the conversion path.

use super::{caller_location, convert_reporting, CheckedInteger};
use crate::detect;
use crate::diagnostics::{DebugContext, OperandReport};
use crate::error::ErrorCode;
use crate::operation::Operation;
use crate::policy::error::ErrorPolicy;
use crate::policy::result::ResultPolicy;
use saferint_core::num::native::NativeInteger;
use saferint_core::promotion::{IntegerPromotion, Promote, Promoted};
use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Mul, MulAssign, Neg, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub,
    SubAssign,
};
use std::panic::Location;

type Site = Option<&'static Location<'static>>;

fn binary<T, U, R, E>(op: Operation, lhs: T, rhs: U, location: Site) -> CheckedInteger<Promoted<T, U>, R, E>
where
    T: Promote<U>,
    U: NativeInteger,
    R: ResultPolicy,
    E: ErrorPolicy,
{
    let a = convert_reporting::<Promoted<T, U>, T, E>(op, lhs, location);
    let b = convert_reporting::<Promoted<T, U>, U, E>(op, rhs, location);
    let error = detect::binary(op, a, b);
    let value = R::compute(op, error, a, b);
    if error.is_error() {
        E::handle(
            DebugContext::new(op, ErrorCode::Operation(error))
                .with_operand_1(OperandReport::promoted(lhs, a))
                .with_operand_2(OperandReport::promoted(rhs, b))
                .with_result(OperandReport::of(value))
                .with_location(location),
        );
    }
    CheckedInteger::with_location(value, location)
}

fn shift<T, U, R, E>(
    op: Operation,
    lhs: T,
    count: U,
    location: Site,
) -> CheckedInteger<<T as IntegerPromotion>::Output, R, E>
where
    T: IntegerPromotion,
    U: NativeInteger,
    R: ResultPolicy,
    E: ErrorPolicy,
{
    let a = convert_reporting::<<T as IntegerPromotion>::Output, T, E>(op, lhs, location);
    let n = count.as_i128();
    let error = detect::shift(op, a, n);
    let value = R::shift(op, error, a, n);
    if error.is_error() {
        E::handle(
            DebugContext::new(op, ErrorCode::Operation(error))
                .with_operand_1(OperandReport::promoted(lhs, a))
                .with_operand_2(OperandReport::of(count))
                .with_result(OperandReport::of(value))
                .with_location(location),
        );
    }
    CheckedInteger::with_location(value, location)
}

fn unary<T, R, E>(
    op: Operation,
    operand: T,
    location: Site,
) -> CheckedInteger<<T as IntegerPromotion>::Output, R, E>
where
    T: IntegerPromotion,
    R: ResultPolicy,
    E: ErrorPolicy,
{
    let a = convert_reporting::<<T as IntegerPromotion>::Output, T, E>(op, operand, location);
    let error = detect::unary(op, a);
    let value = R::compute(op, error, a, a);
    if error.is_error() {
        E::handle(
            DebugContext::new(op, ErrorCode::Operation(error))
                .with_operand_1(OperandReport::promoted(operand, a))
                .with_result(OperandReport::of(value))
                .with_location(location),
        );
    }
    CheckedInteger::with_location(value, location)
}

macro_rules! impl_binary_operator {
    ($trait:ident, $method:ident, $op:ident, $assign_trait:ident, $assign_method:ident, $assign_op:ident) => {
        impl<T, U, R, E> $trait<CheckedInteger<U, R, E>> for CheckedInteger<T, R, E>
        where
            T: Promote<U>,
            U: NativeInteger,
            R: ResultPolicy,
            E: ErrorPolicy,
        {
            type Output = CheckedInteger<Promoted<T, U>, R, E>;

            #[track_caller]
            #[inline]
            fn $method(self, rhs: CheckedInteger<U, R, E>) -> Self::Output {
                binary::<T, U, R, E>(Operation::$op, self.value, rhs.value, caller_location())
            }
        }

        impl<T, U, R, E> $trait<U> for CheckedInteger<T, R, E>
        where
            T: Promote<U>,
            U: NativeInteger,
            R: ResultPolicy,
            E: ErrorPolicy,
        {
            type Output = CheckedInteger<Promoted<T, U>, R, E>;

            #[track_caller]
            #[inline]
            fn $method(self, rhs: U) -> Self::Output {
                binary::<T, U, R, E>(Operation::$op, self.value, rhs, caller_location())
            }
        }

        impl<T, U, R, E> $assign_trait<CheckedInteger<U, R, E>> for CheckedInteger<T, R, E>
        where
            T: Promote<U>,
            U: NativeInteger,
            R: ResultPolicy,
            E: ErrorPolicy,
        {
            #[track_caller]
            fn $assign_method(&mut self, rhs: CheckedInteger<U, R, E>) {
                let location = caller_location();
                let result =
                    binary::<T, U, R, E>(Operation::$assign_op, self.value, rhs.value, location);
                self.value = convert_reporting::<T, Promoted<T, U>, E>(
                    Operation::$assign_op,
                    result.value,
                    location,
                );
            }
        }

        impl<T, U, R, E> $assign_trait<U> for CheckedInteger<T, R, E>
        where
            T: Promote<U>,
            U: NativeInteger,
            R: ResultPolicy,
            E: ErrorPolicy,
        {
            #[track_caller]
            fn $assign_method(&mut self, rhs: U) {
                let location = caller_location();
                let result = binary::<T, U, R, E>(Operation::$assign_op, self.value, rhs, location);
                self.value = convert_reporting::<T, Promoted<T, U>, E>(
                    Operation::$assign_op,
                    result.value,
                    location,
                );
            }
        }
    };
}

impl_binary_operator!(Add, add, Add, AddAssign, add_assign, AddAssign);
impl_binary_operator!(Sub, sub, Subtract, SubAssign, sub_assign, SubtractAssign);
impl_binary_operator!(Mul, mul, Multiply, MulAssign, mul_assign, MultiplyAssign);
impl_binary_operator!(Div, div, Divide, DivAssign, div_assign, DivideAssign);
impl_binary_operator!(Rem, rem, Remainder, RemAssign, rem_assign, RemainderAssign);
impl_binary_operator!(BitAnd, bitand, BitwiseAnd, BitAndAssign, bitand_assign, BitwiseAndAssign);
impl_binary_operator!(BitOr, bitor, BitwiseOr, BitOrAssign, bitor_assign, BitwiseOrAssign);
impl_binary_operator!(BitXor, bitxor, BitwiseXor, BitXorAssign, bitxor_assign, BitwiseXorAssign);

macro_rules! impl_shift_operator {
    ($trait:ident, $method:ident, $op:ident, $assign_trait:ident, $assign_method:ident, $assign_op:ident) => {
        impl<T, U, R, E> $trait<CheckedInteger<U, R, E>> for CheckedInteger<T, R, E>
        where
            T: IntegerPromotion,
            U: NativeInteger,
            R: ResultPolicy,
            E: ErrorPolicy,
        {
            type Output = CheckedInteger<<T as IntegerPromotion>::Output, R, E>;

            #[track_caller]
            #[inline]
            fn $method(self, rhs: CheckedInteger<U, R, E>) -> Self::Output {
                shift::<T, U, R, E>(Operation::$op, self.value, rhs.value, caller_location())
            }
        }

        impl<T, U, R, E> $trait<U> for CheckedInteger<T, R, E>
        where
            T: IntegerPromotion,
            U: NativeInteger,
            R: ResultPolicy,
            E: ErrorPolicy,
        {
            type Output = CheckedInteger<<T as IntegerPromotion>::Output, R, E>;

            #[track_caller]
            #[inline]
            fn $method(self, rhs: U) -> Self::Output {
                shift::<T, U, R, E>(Operation::$op, self.value, rhs, caller_location())
            }
        }

        impl<T, U, R, E> $assign_trait<CheckedInteger<U, R, E>> for CheckedInteger<T, R, E>
        where
            T: IntegerPromotion,
            U: NativeInteger,
            R: ResultPolicy,
            E: ErrorPolicy,
        {
            #[track_caller]
            fn $assign_method(&mut self, rhs: CheckedInteger<U, R, E>) {
                let location = caller_location();
                let result =
                    shift::<T, U, R, E>(Operation::$assign_op, self.value, rhs.value, location);
                self.value = convert_reporting::<T, <T as IntegerPromotion>::Output, E>(
                    Operation::$assign_op,
                    result.value,
                    location,
                );
            }
        }

        impl<T, U, R, E> $assign_trait<U> for CheckedInteger<T, R, E>
        where
            T: IntegerPromotion,
            U: NativeInteger,
            R: ResultPolicy,
            E: ErrorPolicy,
        {
            #[track_caller]
            fn $assign_method(&mut self, rhs: U) {
                let location = caller_location();
                let result = shift::<T, U, R, E>(Operation::$assign_op, self.value, rhs, location);
                self.value = convert_reporting::<T, <T as IntegerPromotion>::Output, E>(
                    Operation::$assign_op,
                    result.value,
                    location,
                );
            }
        }
    };
}

impl_shift_operator!(Shl, shl, ShiftLeft, ShlAssign, shl_assign, ShiftLeftAssign);
impl_shift_operator!(Shr, shr, ShiftRight, ShrAssign, shr_assign, ShiftRightAssign);

impl<T, R, E> Neg for CheckedInteger<T, R, E>
where
    T: IntegerPromotion,
    R: ResultPolicy,
    E: ErrorPolicy,
{
    type Output = CheckedInteger<<T as IntegerPromotion>::Output, R, E>;

    #[track_caller]
    #[inline]
    fn neg(self) -> Self::Output {
        unary::<T, R, E>(Operation::UnaryMinus, self.value, caller_location())
    }
}

/// Bitwise complement, C's `~`.
impl<T, R, E> Not for CheckedInteger<T, R, E>
where
    T: IntegerPromotion,
    R: ResultPolicy,
    E: ErrorPolicy,
{
    type Output = CheckedInteger<<T as IntegerPromotion>::Output, R, E>;

    #[track_caller]
    #[inline]
    fn not(self) -> Self::Output {
        unary::<T, R, E>(Operation::BitwiseNot, self.value, caller_location())
    }
}

macro_rules! impl_native_lhs {
    (@op $t:ty, $trait:ident, $method:ident, $op:ident) => {
        impl<U, R, E> $trait<CheckedInteger<U, R, E>> for $t
        where
            $t: Promote<U>,
            U: NativeInteger,
            R: ResultPolicy,
            E: ErrorPolicy,
        {
            type Output = CheckedInteger<Promoted<$t, U>, R, E>;

            #[track_caller]
            #[inline]
            fn $method(self, rhs: CheckedInteger<U, R, E>) -> Self::Output {
                binary::<$t, U, R, E>(Operation::$op, self, rhs.value, caller_location())
            }
        }
    };
    ($($t:ty),* $(,)?) => {
        $(
            impl_native_lhs!(@op $t, Add, add, Add);
            impl_native_lhs!(@op $t, Sub, sub, Subtract);
            impl_native_lhs!(@op $t, Mul, mul, Multiply);
            impl_native_lhs!(@op $t, Div, div, Divide);
            impl_native_lhs!(@op $t, Rem, rem, Remainder);
            impl_native_lhs!(@op $t, BitAnd, bitand, BitwiseAnd);
            impl_native_lhs!(@op $t, BitOr, bitor, BitwiseOr);
            impl_native_lhs!(@op $t, BitXor, bitxor, BitwiseXor);
        )*
    };
}

impl_native_lhs!(bool, i8, u8, i16, u16, i32, u32, i64, u64);
