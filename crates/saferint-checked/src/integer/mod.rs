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

//! # Checked Integers
//!
//! [`CheckedInteger`] wraps one primitive and routes every operator through
//! the checked pipeline:
//!
//! 1. Promote both operands to their common primitive, reporting any value
//!    that changes on the way (a negative value meeting an unsigned kind).
//! 2. Run the overflow detector for the operator.
//! 3. Let the result policy `R` compute the exposed value.
//! 4. Hand a snapshot of any failure to the error policy `E`.
//! 5. Return the value wrapped in the promoted kind.
//!
//! Construction and assignment from another kind take the conversion path
//! instead: the value is converted with native semantics and any loss is
//! reported, but never corrected.

mod arith;
mod compare;

use crate::config::CONFIG;
use crate::detect;
use crate::diagnostics::{DebugContext, OperandReport};
use crate::error::ErrorCode;
use crate::operation::Operation;
use crate::policy::error::{DefaultErrorPolicy, ErrorPolicy};
use crate::policy::result::{DefaultResultPolicy, ResultPolicy};
use saferint_core::kind::IntegerKind;
use saferint_core::num::convert::classify;
use saferint_core::num::native::{Arithmetic, NativeInteger};
use saferint_core::promotion::IntegerPromotion;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::panic::Location;

/// A native integer whose every operation is checked.
///
/// `R` chooses the value failed operations produce and `E` what happens to
/// the failure. Both default to the policies selected by the cargo features.
///
/// # Examples
///
/// ```rust
/// # use saferint_checked::integer::CheckedInteger;
/// # use saferint_checked::policy::error::SilentPolicy;
/// # use saferint_checked::policy::result::SaturatingResult;
/// type Saturating<T> = CheckedInteger<T, SaturatingResult, SilentPolicy>;
///
/// let a = Saturating::<i32>::new(i32::MAX);
/// let b = Saturating::<i32>::new(1);
/// assert_eq!((a + b).get(), i32::MAX);
///
/// // u8 + u8 is computed in int, exactly as in C.
/// let c = Saturating::<u8>::new(200) + Saturating::<u8>::new(100);
/// assert_eq!(c.get(), 300i32);
/// ```
pub struct CheckedInteger<T, R = DefaultResultPolicy, E = DefaultErrorPolicy> {
    value: T,
    #[cfg(feature = "location")]
    location: Option<&'static Location<'static>>,
    _policies: PhantomData<fn() -> (R, E)>,
}

/// Returns the location of the outermost `#[track_caller]` call, if location
/// capture is enabled.
#[track_caller]
#[inline(always)]
pub(crate) fn caller_location() -> Option<&'static Location<'static>> {
    if CONFIG.capture_location {
        Some(Location::caller())
    } else {
        None
    }
}

/// Converts `value` to `D` with native semantics and hands any loss to `E`.
///
/// This is the conversion path shared by construction, assignment, the
/// narrowing step of compound assignment and operand promotion.
pub(crate) fn convert_reporting<D, S, E>(
    operation: Operation,
    value: S,
    location: Option<&'static Location<'static>>,
) -> D
where
    D: NativeInteger,
    S: NativeInteger,
    E: ErrorPolicy,
{
    let converted = D::wrapping_from_i128(value.as_i128());
    let error = classify::<D, S>(value);
    if error.is_error() {
        E::handle(
            DebugContext::new(operation, ErrorCode::Conversion(error))
                .with_operand_1(OperandReport::of(value))
                .with_result(OperandReport::of(converted))
                .with_location(location),
        );
    }
    converted
}

impl<T, R, E> CheckedInteger<T, R, E>
where
    T: NativeInteger,
{
    /// Wraps `value`, recording the caller as the definition site.
    #[track_caller]
    #[inline]
    pub fn new(value: T) -> Self {
        Self::with_location(value, caller_location())
    }

    #[inline(always)]
    pub(crate) fn with_location(value: T, location: Option<&'static Location<'static>>) -> Self {
        #[cfg(not(feature = "location"))]
        let _ = location;
        Self {
            value,
            #[cfg(feature = "location")]
            location,
            _policies: PhantomData,
        }
    }

    /// Returns the wrapped value.
    #[inline(always)]
    pub fn get(&self) -> T {
        self.value
    }

    /// Unwraps the value.
    #[inline(always)]
    pub fn into_inner(self) -> T {
        self.value
    }

    /// Returns the C kind of the wrapped primitive.
    #[inline(always)]
    pub fn kind(&self) -> IntegerKind {
        T::KIND
    }

    /// Returns where this value was defined.
    #[cfg(feature = "location")]
    #[inline(always)]
    pub fn location(&self) -> Option<&'static Location<'static>> {
        self.location
    }

    /// Returns `None`: locations are not captured in this build.
    #[cfg(not(feature = "location"))]
    #[inline(always)]
    pub fn location(&self) -> Option<&'static Location<'static>> {
        None
    }
}

impl<T, R, E> CheckedInteger<T, R, E>
where
    T: NativeInteger,
    E: ErrorPolicy,
{
    /// Wraps a value of any kind.
    ///
    /// The value is converted with native semantics. A value that does not
    /// survive the conversion is reported as a [`Operation::Construct`]
    /// error, and the truncated value is kept.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use saferint_checked::integer::CheckedInteger;
    /// # use saferint_checked::policy::error::SilentPolicy;
    /// # use saferint_checked::policy::result::NativeResult;
    /// let x = CheckedInteger::<u8, NativeResult, SilentPolicy>::from_native(-1i32);
    /// assert_eq!(x.get(), 255);
    /// ```
    #[track_caller]
    pub fn from_native<S>(value: S) -> Self
    where
        S: NativeInteger,
    {
        let location = caller_location();
        let value = convert_reporting::<T, S, E>(Operation::Construct, value, location);
        Self::with_location(value, location)
    }

    /// Converts to another kind through the conversion path.
    #[track_caller]
    pub fn cast<D>(self) -> CheckedInteger<D, R, E>
    where
        D: NativeInteger,
    {
        CheckedInteger::from_native(self.value)
    }

    /// Replaces the value with `value` converted to `T`.
    ///
    /// Loss is reported as an [`Operation::Assign`] error. The definition site
    /// is kept.
    #[track_caller]
    pub fn assign<S>(&mut self, value: S)
    where
        S: NativeInteger,
    {
        self.value = convert_reporting::<T, S, E>(Operation::Assign, value, caller_location());
    }

    /// Unary `+`: applies integer promotion.
    #[track_caller]
    pub fn plus(self) -> CheckedInteger<<T as IntegerPromotion>::Output, R, E>
    where
        T: IntegerPromotion,
    {
        let location = caller_location();
        let value = convert_reporting::<<T as IntegerPromotion>::Output, T, E>(
            Operation::UnaryPlus,
            self.value,
            location,
        );
        CheckedInteger::with_location(value, location)
    }
}

impl<T, R, E> CheckedInteger<T, R, E>
where
    T: Arithmetic,
    R: ResultPolicy,
    E: ErrorPolicy,
{
    fn step(&mut self, op: Operation, location: Option<&'static Location<'static>>) {
        let before = self.value;
        let error = detect::unary(op, before);
        let after = R::compute(op, error, before, before);
        if error.is_error() {
            E::handle(
                DebugContext::new(op, ErrorCode::Operation(error))
                    .with_operand_1(OperandReport::of(before))
                    .with_result(OperandReport::of(after))
                    .with_location(location),
            );
        }
        self.value = after;
    }

    /// `++x`: increments in place and returns the new value.
    ///
    /// Unlike the binary operators, increments stay in `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use saferint_checked::integer::CheckedInteger;
    /// # use saferint_checked::policy::error::SilentPolicy;
    /// # use saferint_checked::policy::result::SaturatingResult;
    /// let mut x = CheckedInteger::<i8, SaturatingResult, SilentPolicy>::new(127);
    /// assert_eq!(x.pre_increment().get(), 127);
    /// ```
    #[track_caller]
    pub fn pre_increment(&mut self) -> Self {
        self.step(Operation::PreIncrement, caller_location());
        *self
    }

    /// `x++`: increments in place and returns the previous value.
    #[track_caller]
    pub fn post_increment(&mut self) -> Self {
        let previous = *self;
        self.step(Operation::PostIncrement, caller_location());
        previous
    }

    /// `--x`: decrements in place and returns the new value.
    #[track_caller]
    pub fn pre_decrement(&mut self) -> Self {
        self.step(Operation::PreDecrement, caller_location());
        *self
    }

    /// `x--`: decrements in place and returns the previous value.
    #[track_caller]
    pub fn post_decrement(&mut self) -> Self {
        let previous = *self;
        self.step(Operation::PostDecrement, caller_location());
        previous
    }
}

impl<T, R, E> Clone for CheckedInteger<T, R, E>
where
    T: Copy,
{
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, R, E> Copy for CheckedInteger<T, R, E> where T: Copy {}

impl<T, R, E> Default for CheckedInteger<T, R, E>
where
    T: NativeInteger,
    E: ErrorPolicy,
{
    /// Wraps zero. Reaches the error policy as an uninitialized value when
    /// `report-uninitialized` or `panic-on-uninitialized` is enabled.
    #[track_caller]
    fn default() -> Self {
        let location = caller_location();
        let value = T::default();
        if CONFIG.tracks_uninitialized() {
            E::handle(
                DebugContext::new(Operation::DefaultConstruct, ErrorCode::Uninitialized)
                    .with_result(OperandReport::of(value))
                    .with_location(location),
            );
        }
        Self::with_location(value, location)
    }
}

impl<T, R, E> From<T> for CheckedInteger<T, R, E>
where
    T: NativeInteger,
{
    #[track_caller]
    #[inline]
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T, R, E> Hash for CheckedInteger<T, R, E>
where
    T: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T, R, E> fmt::Display for CheckedInteger<T, R, E>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

impl<T, R, E> fmt::Debug for CheckedInteger<T, R, E>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.value, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OperationError;
    use crate::policy::error::SilentPolicy;
    use crate::policy::result::{NativeResult, SaturatingResult};
    use crate::testing::{take_recorded, RecordingPolicy};
    use saferint_core::num::convert::ConversionError;

    type Native<T> = CheckedInteger<T, NativeResult, RecordingPolicy>;
    type Saturating<T> = CheckedInteger<T, SaturatingResult, RecordingPolicy>;

    #[test]
    fn test_new_and_accessors() {
        let x = Native::<i16>::new(-7);
        assert_eq!(x.get(), -7);
        assert_eq!(x.into_inner(), -7);
        assert_eq!(x.kind(), IntegerKind::Short);
        assert_eq!(x.to_string(), "-7");
        assert_eq!(format!("{x:?}"), "-7");
    }

    #[test]
    fn test_location_is_the_definition_site() {
        let x = Native::<u8>::new(1);
        let line = line!() - 1;
        match x.location() {
            Some(location) => {
                assert!(CONFIG.capture_location);
                assert_eq!(location.file(), file!());
                assert_eq!(location.line(), line);
            }
            None => assert!(!CONFIG.capture_location),
        }
    }

    #[test]
    fn test_from_native_reports_truncation() {
        take_recorded();
        let x = Native::<i8>::from_native(200i16);
        assert_eq!(x.get(), -56);

        let recorded = take_recorded();
        assert_eq!(recorded.len(), 1);
        let context = &recorded[0];
        assert_eq!(context.operation(), Operation::Construct);
        assert_eq!(
            context.error(),
            ErrorCode::Conversion(
                ConversionError::PositiveSignedValueGreaterThanMaximumOfTargetSignedInteger
            )
        );
        assert_eq!(context.operand_1().map(|o| o.value()), Some(200));
        assert_eq!(context.result().map(|o| o.value()), Some(-56));
    }

    #[test]
    fn test_exact_conversions_are_silent() {
        take_recorded();
        let x = Native::<u64>::from_native(5i8);
        let y: Native<i64> = x.cast();
        assert_eq!(y.get(), 5);
        assert!(take_recorded().is_empty());
    }

    #[test]
    fn test_assign_reports_sign_loss() {
        take_recorded();
        let mut x = Native::<u32>::new(3);
        x.assign(-1i64);
        assert_eq!(x.get(), u32::MAX);
        let recorded = take_recorded();
        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0].operation(), Operation::Assign);
        assert_eq!(
            recorded[0].error(),
            ErrorCode::Conversion(
                ConversionError::NegativeSignedValueCannotBeRepresentedByUnsignedInteger
            )
        );
    }

    #[test]
    fn test_default_is_zero() {
        take_recorded();
        let x = Native::<i32>::default();
        assert_eq!(x.get(), 0);
        let recorded = take_recorded();
        if CONFIG.tracks_uninitialized() {
            assert_eq!(recorded.len(), 1);
            assert_eq!(recorded[0].operation(), Operation::DefaultConstruct);
            assert_eq!(recorded[0].error(), ErrorCode::Uninitialized);
        } else {
            assert!(recorded.is_empty());
        }
    }

    #[test]
    fn test_increment_at_max() {
        take_recorded();
        let mut x = Saturating::<i8>::new(127);
        assert_eq!(x.pre_increment().get(), 127);
        let recorded = take_recorded();
        assert_eq!(recorded.len(), 1);
        assert_eq!(
            recorded[0].error(),
            ErrorCode::Operation(OperationError::SignedResultMoreThanMax)
        );

        let mut y = Native::<i8>::new(127);
        assert_eq!(y.post_increment().get(), 127);
        assert_eq!(y.get(), -128);
        take_recorded();
    }

    #[test]
    fn test_decrements() {
        take_recorded();
        let mut x = Native::<u8>::new(1);
        assert_eq!(x.pre_decrement().get(), 0);
        assert!(take_recorded().is_empty());
        assert_eq!(x.post_decrement().get(), 0);
        assert_eq!(x.get(), 255);
        assert_eq!(take_recorded().len(), 1);

        let mut y = Saturating::<u8>::new(0);
        assert_eq!(y.pre_decrement().get(), 0);
        take_recorded();
    }

    #[test]
    fn test_plus_promotes() {
        let x = CheckedInteger::<u16, NativeResult, SilentPolicy>::new(65535);
        let y = x.plus();
        assert_eq!(y.get().as_i128(), 65535);
        assert_eq!(y.kind(), IntegerKind::Int);
    }

    #[test]
    fn test_copies_are_independent() {
        let mut x = Native::<i32>::new(1);
        let y = x;
        x.assign(2i32);
        assert_eq!((x.get(), y.get()), (2, 1));
    }

    #[test]
    fn test_from_and_hash() {
        use std::collections::HashSet;
        let set: HashSet<Native<i32>> = [1, 2, 2, 3].into_iter().map(Native::<i32>::from).collect();
        assert_eq!(set.len(), 3);
        assert!(set.contains(&Native::new(2)));
    }
}
