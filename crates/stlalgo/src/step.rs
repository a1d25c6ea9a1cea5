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

//! # Range Stepping
//!
//! `Step` is the arithmetic an `XRange` cursor needs: an advance that reports
//! when the next value is no longer representable, and an exact count of the
//! values left before `stop` where one can be computed.
//!
//! Integer types advance with `checked_add`, so a cursor whose last step would
//! overflow ends instead of wrapping around below `stop`. Floating point types
//! advance with plain `+`; an overflow there saturates to infinity, which is
//! never less than `stop`.

use num_traits::{Num, PrimInt};

/// Arithmetic used by [`XRangeIter`](crate::range::XRangeIter) to advance a
/// cursor and to size the remaining sequence.
///
/// Implemented for all primitive integer and floating point types.
///
/// # Examples
///
/// ```rust
/// # use stlalgo::step::Step;
/// assert_eq!(254u8.forward_checked(2), None);
/// assert_eq!(252u8.forward_checked(2), Some(254));
/// assert_eq!(u8::steps_between(0, 255, 2), Some(128));
/// ```
pub trait Step: Num + Copy + PartialOrd {
    /// Returns `self + step`, or `None` if the sum is not representable.
    fn forward_checked(self, step: Self) -> Option<Self>;

    /// Returns how many values `start + k * step` (`k >= 0`) are strictly less
    /// than `stop`.
    ///
    /// Returns `Some(0)` if `start >= stop`. Returns `None` if the count is
    /// unbounded (a non-positive step), does not fit in `usize`, or cannot be
    /// computed exactly for the type.
    fn steps_between(start: Self, stop: Self, step: Self) -> Option<usize>;
}

#[inline]
fn integer_steps_between<T>(start: T, stop: T, step: T) -> Option<usize>
where
    T: PrimInt,
{
    if start >= stop {
        return Some(0);
    }
    if step <= T::zero() {
        return None;
    }

    let distance = stop.checked_sub(&start)?;
    let whole = distance / step;
    let count = if distance % step == T::zero() {
        whole
    } else {
        whole + T::one()
    };
    count.to_usize()
}

macro_rules! step_integer_impl {
    ($($t:ty),*) => {
        $(
            impl Step for $t {
                #[inline(always)]
                fn forward_checked(self, step: $t) -> Option<$t> {
                    <$t>::checked_add(self, step)
                }

                #[inline]
                fn steps_between(start: $t, stop: $t, step: $t) -> Option<usize> {
                    integer_steps_between(start, stop, step)
                }
            }
        )*
    };
}

macro_rules! step_float_impl {
    ($($t:ty),*) => {
        $(
            impl Step for $t {
                #[inline(always)]
                fn forward_checked(self, step: $t) -> Option<$t> {
                    Some(self + step)
                }

                // Rounding makes a closed form count disagree with iteration.
                #[inline]
                fn steps_between(start: $t, stop: $t, _step: $t) -> Option<usize> {
                    if start < stop { None } else { Some(0) }
                }
            }
        )*
    };
}

step_integer_impl!(u8, u16, u32, u64, u128, usize);
step_integer_impl!(i8, i16, i32, i64, i128, isize);
step_float_impl!(f32, f64);
