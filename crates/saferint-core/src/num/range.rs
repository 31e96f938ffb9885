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

//! # Range Check
//!
//! Pure predicates deciding whether a value of one integer kind is exactly
//! representable in another. Comparisons are carried out in `i128`, which
//! holds every value of every supported kind, so the check itself can never
//! overflow.

use crate::kind::{DataModel, IntegerKind};
use crate::num::native::NativeInteger;

/// Returns `true` if `value` is exactly representable in `D`.
///
/// A `bool` destination always fits: converting to `bool` tests against zero
/// and never loses information the destination could hold.
///
/// # Examples
///
/// ```rust
/// # use saferint_core::num::range::fits;
/// assert!(fits::<i8, i16>(-128));
/// assert!(!fits::<i8, i16>(200));
/// assert!(!fits::<u32, i64>(-1));
/// assert!(fits::<i64, u32>(u32::MAX));
/// assert!(fits::<bool, u64>(u64::MAX));
/// ```
#[inline]
pub fn fits<D, S>(value: S) -> bool
where
    D: NativeInteger,
    S: NativeInteger,
{
    if D::KIND == IntegerKind::Bool {
        return true;
    }

    let v = value.as_i128();
    match (D::SIGNED, S::SIGNED) {
        (true, true) => v >= D::MIN_VALUE && v <= D::MAX_VALUE,
        (true, false) => v <= D::MAX_VALUE,
        (false, true) => v >= 0 && v <= D::MAX_VALUE,
        (false, false) => v <= D::MAX_VALUE,
    }
}

/// Returns `true` if `value` is exactly representable by `kind` under `model`.
///
/// # Examples
///
/// ```rust
/// # use saferint_core::kind::{DataModel, IntegerKind};
/// # use saferint_core::num::range::kind_fits;
/// assert!(kind_fits(40_000, IntegerKind::UnsignedShort, DataModel::LP64));
/// assert!(!kind_fits(40_000, IntegerKind::Int, DataModel::I16LP32));
/// ```
pub const fn kind_fits(value: i128, kind: IntegerKind, model: DataModel) -> bool {
    if kind.same_as(IntegerKind::Bool) {
        return true;
    }
    value >= kind.min_value(model) && value <= kind.max_value(model)
}
