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

//! # Restartable Arithmetic Ranges
//!
//! `XRange<T>` describes the sequence `start, start + step, start + 2 * step, ...`
//! cut off at the first value that is not strictly less than `stop`. The
//! descriptor itself is never consumed: each call to `iter()` (or iterating
//! `&XRange`) hands out a fresh `XRangeIter<T>` cursor positioned at `start`,
//! so the same range can be traversed any number of times with identical
//! results.
//!
//! ## Termination
//!
//! The termination test is `current < stop`. The step direction plays no part
//! in it, which means a range with `start < stop` and a zero or negative step
//! does not end at `stop`: a zero step repeats `start` forever, and a negative
//! step runs until the next value leaves the representable range of `T`.
//! Descending ranges are not supported. `XRange::new` accepts such descriptors
//! (debug builds log a `tracing` warning); `XRange::try_new` rejects them.
//!
//! A cursor also ends when advancing past its last value would overflow `T`,
//! so `xrange(0u8, 255, 2)` yields `0, 2, ..., 254` and stops.
//!
//! ## Usage
//!
//! ```rust
//! use stlalgo::range::XRange;
//!
//! let r = XRange::new(1, 10, 1);
//! let first: Vec<i32> = r.iter().collect();
//! let second: Vec<i32> = r.iter().collect();
//! assert_eq!(first, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
//! assert_eq!(first, second);
//!
//! let halves: Vec<f64> = XRange::new(0.0, 2.0, 0.5).iter().collect();
//! assert_eq!(halves, vec![0.0, 0.5, 1.0, 1.5]);
//! ```

use crate::step::Step;
use num_traits::{NumCast, PrimInt};
use std::{fmt::Debug, iter::FusedIterator};

/// The error type returned by [`XRange::try_new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum XRangeError {
    /// The step is zero while `start < stop`; the cursor would never move.
    ZeroStep,
    /// The step is negative while `start < stop`; the cursor would move away
    /// from `stop`.
    Descending,
}

impl std::fmt::Display for XRangeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroStep => write!(f, "Range step must not be zero"),
            Self::Descending => {
                write!(f, "Descending ranges are not supported: step must be positive")
            }
        }
    }
}

impl std::error::Error for XRangeError {}

/// A lazy, restartable arithmetic sequence `[start, stop)` advancing by `step`.
///
/// # Examples
///
/// ```rust
/// # use stlalgo::range::XRange;
/// let r = XRange::up_to(4);
/// assert_eq!(r.iter().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
///
/// let mut total = 0;
/// for v in &r {
///     total += v;
/// }
/// assert_eq!(total, 6);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct XRange<T> {
    start: T,
    stop: T,
    step: T,
}

impl<T> XRange<T>
where
    T: Step + Debug,
{
    /// Creates a range from `start` to `stop` (exclusive) advancing by `step`.
    ///
    /// No validation is performed. A descriptor with `start < stop` and a
    /// non-positive `step` does not end at `stop`; debug builds log a warning
    /// through `tracing` when one is created.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stlalgo::range::XRange;
    /// let r = XRange::new(0, 10, 3);
    /// assert_eq!(r.iter().collect::<Vec<_>>(), vec![0, 3, 6, 9]);
    /// ```
    #[inline]
    pub fn new(start: T, stop: T, step: T) -> Self {
        if cfg!(debug_assertions) && Self::steps_away_from_stop(start, stop, step) {
            tracing::warn!(
                ?start,
                ?stop,
                ?step,
                "xrange step does not advance towards stop; traversal will not end at stop"
            );
        }
        Self { start, stop, step }
    }

    /// Creates a range from `start` to `stop` (exclusive) with a step of one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stlalgo::range::XRange;
    /// let r = XRange::between(3, 6);
    /// assert_eq!(r.iter().collect::<Vec<_>>(), vec![3, 4, 5]);
    /// ```
    #[inline]
    pub fn between(start: T, stop: T) -> Self {
        Self::new(start, stop, T::one())
    }

    /// Creates a range from zero to `stop` (exclusive) with a step of one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stlalgo::range::XRange;
    /// assert_eq!(XRange::up_to(3u8).iter().collect::<Vec<_>>(), vec![0, 1, 2]);
    /// ```
    #[inline]
    pub fn up_to(stop: T) -> Self {
        Self::new(T::zero(), stop, T::one())
    }

    /// Creates a range if its step moves the cursor towards `stop`.
    ///
    /// Returns an error if `start < stop` and `step` is zero or negative.
    /// Ranges with `start >= stop` are accepted for any step; they are empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stlalgo::range::{XRange, XRangeError};
    /// assert!(XRange::try_new(0, 10, 2).is_ok());
    /// assert_eq!(XRange::try_new(0, 10, 0), Err(XRangeError::ZeroStep));
    /// assert_eq!(XRange::try_new(0, 10, -1), Err(XRangeError::Descending));
    /// assert!(XRange::try_new(10, 0, -1).is_ok());
    /// ```
    #[inline]
    pub fn try_new(start: T, stop: T, step: T) -> Result<Self, XRangeError> {
        if Self::steps_away_from_stop(start, stop, step) {
            let err = if step == T::zero() {
                XRangeError::ZeroStep
            } else {
                XRangeError::Descending
            };
            tracing::debug!(?start, ?stop, ?step, %err, "rejected xrange descriptor");
            return Err(err);
        }
        Ok(Self { start, stop, step })
    }

    #[inline(always)]
    fn steps_away_from_stop(start: T, stop: T, step: T) -> bool {
        start < stop && step <= T::zero()
    }
}

impl<T> XRange<T>
where
    T: Step,
{
    /// Returns the first value of the sequence.
    #[inline]
    pub const fn start(&self) -> T {
        self.start
    }

    /// Returns the exclusive upper bound of the sequence.
    #[inline]
    pub const fn stop(&self) -> T {
        self.stop
    }

    /// Returns the increment applied between consecutive values.
    #[inline]
    pub const fn step(&self) -> T {
        self.step
    }

    /// Returns a fresh cursor positioned at `start`.
    ///
    /// The descriptor is left untouched, so repeated calls yield identical
    /// sequences.
    #[inline]
    pub fn iter(&self) -> XRangeIter<T> {
        XRangeIter {
            current: self.start,
            stop: self.stop,
            step: self.step,
        }
    }
}

impl<T> Debug for XRange<T>
where
    T: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "XRange({:?}..{:?} step {:?})",
            self.start, self.stop, self.step
        )
    }
}

impl<'a, T> IntoIterator for &'a XRange<T>
where
    T: Step,
{
    type Item = T;
    type IntoIter = XRangeIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for XRange<T>
where
    T: Step,
{
    type Item = T;
    type IntoIter = XRangeIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A single traversal over an [`XRange`].
///
/// Yields the current value and then advances it by `step`, as long as the
/// current value is strictly less than `stop`. If the advance overflows `T`,
/// the cursor ends.
///
/// Integer cursors with a positive step report an exact length and can be
/// walked from the back as well.
#[derive(Debug, Clone)]
pub struct XRangeIter<T> {
    current: T,
    stop: T,
    step: T,
}

impl<T> XRangeIter<T>
where
    T: Step,
{
    #[inline(always)]
    fn remaining(&self) -> Option<usize> {
        T::steps_between(self.current, self.stop, self.step)
    }
}

impl<T> Iterator for XRangeIter<T>
where
    T: Step,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.current < self.stop {
            let value = self.current;
            // An unrepresentable next value lies beyond `stop`.
            self.current = value.forward_checked(self.step).unwrap_or(self.stop);
            Some(value)
        } else {
            None
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining() {
            Some(n) => (n, Some(n)),
            None if self.current < self.stop && self.step == T::zero() => (usize::MAX, None),
            None => (0, None),
        }
    }
}

impl<T> DoubleEndedIterator for XRangeIter<T>
where
    T: Step + PrimInt,
{
    /// # Panics
    ///
    /// Panics if the remaining length is unbounded or exceeds `usize::MAX`.
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        let remaining = self.len();
        if remaining == 0 {
            return None;
        }
        let steps = <T as NumCast>::from(remaining - 1)?;
        let last = self.current.checked_add(&steps.checked_mul(&self.step)?)?;
        self.stop = last;
        Some(last)
    }
}

impl<T> ExactSizeIterator for XRangeIter<T>
where
    T: Step + PrimInt,
{
    /// # Panics
    ///
    /// Panics if the remaining length is unbounded or exceeds `usize::MAX`.
    fn len(&self) -> usize {
        self.remaining()
            .expect("XRangeIter: remaining length is unbounded or exceeds usize::MAX")
    }
}

// Reaching the end leaves `current` at or beyond `stop`.
impl<T> FusedIterator for XRangeIter<T> where T: Step {}

/// Shorthand for [`XRange::new`].
///
/// ```rust
/// # use stlalgo::range::xrange;
/// assert_eq!(xrange(1, 10, 4).iter().collect::<Vec<_>>(), vec![1, 5, 9]);
/// ```
#[inline]
pub fn xrange<T>(start: T, stop: T, step: T) -> XRange<T>
where
    T: Step + Debug,
{
    XRange::new(start, stop, step)
}

/// Shorthand for [`XRange::between`].
#[inline]
pub fn xrange_between<T>(start: T, stop: T) -> XRange<T>
where
    T: Step + Debug,
{
    XRange::between(start, stop)
}

/// Shorthand for [`XRange::up_to`].
#[inline]
pub fn xrange_to<T>(stop: T) -> XRange<T>
where
    T: Step + Debug,
{
    XRange::up_to(stop)
}
