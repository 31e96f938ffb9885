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

//! Comparisons for [`CheckedInteger`].
//!
//! Both operands are promoted to their common kind first, exactly as C does,
//! so `-1 < 1u` is `false`. The sign loss that makes it so is reported on the
//! way. The answer itself is a plain `bool`.
//!
//! `partial_cmp` has no operator of its own and is reported as `less`; the
//! named comparisons report their own operation.

use super::{caller_location, convert_reporting, CheckedInteger};
use crate::operation::Operation;
use crate::policy::error::ErrorPolicy;
use saferint_core::num::native::NativeInteger;
use saferint_core::promotion::{Promote, Promoted};
use std::cmp::Ordering;
use std::panic::Location;

fn compare<T, U, E>(
    op: Operation,
    lhs: T,
    rhs: U,
    location: Option<&'static Location<'static>>,
) -> Ordering
where
    T: Promote<U>,
    U: NativeInteger,
    E: ErrorPolicy,
{
    let a = convert_reporting::<Promoted<T, U>, T, E>(op, lhs, location);
    let b = convert_reporting::<Promoted<T, U>, U, E>(op, rhs, location);
    a.cmp(&b)
}

macro_rules! impl_comparisons {
    ([$($generics:tt)*] $lhs:ty, $rhs:ty, $lhs_ty:ty, $rhs_ty:ty, |$l:ident, $r:ident| $values:expr) => {
        impl<$($generics)*> PartialEq<$rhs> for $lhs
        where
            $lhs_ty: Promote<$rhs_ty>,
            $rhs_ty: NativeInteger,
            E: ErrorPolicy,
        {
            #[track_caller]
            #[inline]
            fn eq(&self, other: &$rhs) -> bool {
                let ($l, $r) = (self, other);
                let (a, b) = $values;
                compare::<$lhs_ty, $rhs_ty, E>(Operation::Equal, a, b, caller_location()).is_eq()
            }

            #[track_caller]
            #[inline]
            #[allow(clippy::partialeq_ne_impl)]
            fn ne(&self, other: &$rhs) -> bool {
                let ($l, $r) = (self, other);
                let (a, b) = $values;
                compare::<$lhs_ty, $rhs_ty, E>(Operation::NotEqual, a, b, caller_location()).is_ne()
            }
        }

        impl<$($generics)*> PartialOrd<$rhs> for $lhs
        where
            $lhs_ty: Promote<$rhs_ty>,
            $rhs_ty: NativeInteger,
            E: ErrorPolicy,
        {
            #[track_caller]
            #[inline]
            fn partial_cmp(&self, other: &$rhs) -> Option<Ordering> {
                let ($l, $r) = (self, other);
                let (a, b) = $values;
                Some(compare::<$lhs_ty, $rhs_ty, E>(Operation::Less, a, b, caller_location()))
            }

            #[track_caller]
            #[inline]
            fn lt(&self, other: &$rhs) -> bool {
                let ($l, $r) = (self, other);
                let (a, b) = $values;
                compare::<$lhs_ty, $rhs_ty, E>(Operation::Less, a, b, caller_location()).is_lt()
            }

            #[track_caller]
            #[inline]
            fn le(&self, other: &$rhs) -> bool {
                let ($l, $r) = (self, other);
                let (a, b) = $values;
                compare::<$lhs_ty, $rhs_ty, E>(Operation::LessEqual, a, b, caller_location()).is_le()
            }

            #[track_caller]
            #[inline]
            fn gt(&self, other: &$rhs) -> bool {
                let ($l, $r) = (self, other);
                let (a, b) = $values;
                compare::<$lhs_ty, $rhs_ty, E>(Operation::Greater, a, b, caller_location()).is_gt()
            }

            #[track_caller]
            #[inline]
            fn ge(&self, other: &$rhs) -> bool {
                let ($l, $r) = (self, other);
                let (a, b) = $values;
                compare::<$lhs_ty, $rhs_ty, E>(Operation::GreaterEqual, a, b, caller_location())
                    .is_ge()
            }
        }
    };
}

impl_comparisons!(
    [T, U, R, E] CheckedInteger<T, R, E>, CheckedInteger<U, R, E>, T, U,
    |lhs, rhs| (lhs.value, rhs.value)
);
impl_comparisons!(
    [T, U, R, E] CheckedInteger<T, R, E>, U, T, U,
    |lhs, rhs| (lhs.value, *rhs)
);

macro_rules! impl_native_lhs_comparisons {
    ($($t:ty),* $(,)?) => {
        $(
            impl_comparisons!(
                [U, R, E] $t, CheckedInteger<U, R, E>, $t, U,
                |lhs, rhs| (*lhs, rhs.value)
            );
        )*
    };
}

impl_native_lhs_comparisons!(bool, i8, u8, i16, u16, i32, u32, i64, u64);

impl<T, R, E> Eq for CheckedInteger<T, R, E>
where
    T: Promote<T>,
    E: ErrorPolicy,
{
}

/// Same-kind ordering. Promotion within one kind never changes a value, so
/// this agrees with `partial_cmp`.
impl<T, R, E> Ord for CheckedInteger<T, R, E>
where
    T: Promote<T>,
    E: ErrorPolicy,
{
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ErrorCode;
    use crate::integer::CheckedInteger;
    use crate::operation::Operation;
    use crate::policy::result::NativeResult;
    use crate::testing::{take_recorded, RecordingPolicy};
    use saferint_core::num::convert::ConversionError;

    type Native<T> = CheckedInteger<T, NativeResult, RecordingPolicy>;

    #[test]
    fn test_minus_one_is_not_less_than_one_unsigned() {
        take_recorded();
        let minus_one = Native::<i32>::new(-1);
        assert!(!(minus_one < 1u32));
        let recorded = take_recorded();
        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0].operation(), Operation::Less);
        assert_eq!(
            recorded[0].error(),
            ErrorCode::Conversion(
                ConversionError::NegativeSignedValueCannotBeRepresentedByUnsignedInteger
            )
        );
    }

    #[test]
    fn test_mixed_kind_comparisons() {
        take_recorded();
        assert!(Native::<u8>::new(200) == 200i32);
        assert!(Native::<i64>::new(5) > Native::<u8>::new(3));
        assert!(Native::<u16>::new(7) >= 7u64);
        assert!(Native::<i8>::new(-3) <= Native::<i16>::new(-3));
        assert!(Native::<i32>::new(1) != Native::<i32>::new(2));
        assert!(take_recorded().is_empty());
    }

    #[test]
    fn test_native_left_operand() {
        take_recorded();
        assert!(3i32 < Native::<i32>::new(4));
        assert!(4u8 == Native::<i16>::new(4));
        assert!(-1i64 < Native::<u32>::new(0));
        assert!(take_recorded().is_empty());
    }

    #[test]
    fn test_named_comparisons_report_their_operation() {
        take_recorded();
        let x = Native::<i8>::new(-1);
        let _ = x >= 0u64;
        let _ = x == 0u32;
        let operations: Vec<Operation> = take_recorded().iter().map(|c| c.operation()).collect();
        assert_eq!(operations, vec![Operation::GreaterEqual, Operation::Equal]);
    }

    #[test]
    fn test_same_kind_ordering() {
        let mut values: Vec<Native<i32>> = [3, -1, 2].into_iter().map(Native::<i32>::new).collect();
        values.sort();
        let sorted: Vec<i32> = values.iter().map(|v| v.get()).collect();
        assert_eq!(sorted, vec![-1, 2, 3]);
        assert_eq!(values.iter().max().map(|v| v.get()), Some(3));
    }
}
