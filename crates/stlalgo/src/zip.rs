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

//! # Lockstep Zip Adaptor
//!
//! `Zip<'a, A, B>` borrows two containers and walks them side by side,
//! yielding a clone of the current element of each as a pair. Traversal ends as
//! soon as either container runs out, so the number of pairs equals the length
//! of the shorter container.
//!
//! The adaptor owns no elements. Both containers are held through shared
//! borrows for `'a`, so they outlive the adaptor and cannot be mutated while it
//! exists. Like [`XRange`](crate::range::XRange), a `Zip` is a restartable
//! descriptor: every call to `iter()` starts a fresh pair of cursors at the
//! front of both containers.
//!
//! ## Usage
//!
//! ```rust
//! use std::collections::LinkedList;
//! use stlalgo::zip::Zip;
//!
//! let numbers: LinkedList<i32> = [1, 2, 3, 4, 5].into_iter().collect();
//! let letters = vec!['a', 'b', 'c', 'd'];
//!
//! let pairs: Vec<(i32, char)> = Zip::new(&numbers, &letters).iter().collect();
//! assert_eq!(pairs, vec![(1, 'a'), (2, 'b'), (3, 'c'), (4, 'd')]);
//! ```

use std::iter::FusedIterator;

/// A non-owning view over two containers that are traversed in lockstep.
///
/// # Examples
///
/// ```rust
/// # use stlalgo::zip::Zip;
/// let a = [1, 2, 3];
/// let b = ["x", "y"];
/// let z = Zip::new(&a, &b);
///
/// let mut seen = Vec::new();
/// for (n, s) in &z {
///     seen.push(format!("{n}{s}"));
/// }
/// assert_eq!(seen, vec!["1x", "2y"]);
/// ```
pub struct Zip<'a, A, B>
where
    A: ?Sized,
    B: ?Sized,
{
    first: &'a A,
    second: &'a B,
}

impl<'a, A, B> Zip<'a, A, B>
where
    A: ?Sized,
    B: ?Sized,
{
    /// Creates a zip adaptor over `first` and `second`.
    #[inline]
    pub const fn new(first: &'a A, second: &'a B) -> Self {
        Self { first, second }
    }

    /// Returns the container providing the left element of each pair.
    #[inline]
    pub const fn first(&self) -> &'a A {
        self.first
    }

    /// Returns the container providing the right element of each pair.
    #[inline]
    pub const fn second(&self) -> &'a B {
        self.second
    }
}

impl<'a, A, B, TA, TB> Zip<'a, A, B>
where
    A: ?Sized,
    B: ?Sized,
    &'a A: IntoIterator<Item = &'a TA>,
    &'a B: IntoIterator<Item = &'a TB>,
    TA: Clone + 'a,
    TB: Clone + 'a,
{
    /// Returns a fresh pair of cursors positioned at the front of both
    /// containers.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stlalgo::zip::Zip;
    /// let a = vec![1, 2];
    /// let b = vec![3.0, 4.0, 5.0];
    /// let z = Zip::new(&a, &b);
    /// assert_eq!(z.iter().count(), 2);
    /// assert_eq!(z.iter().last(), Some((2, 4.0)));
    /// ```
    #[inline]
    pub fn iter(
        &self,
    ) -> ZipIter<<&'a A as IntoIterator>::IntoIter, <&'a B as IntoIterator>::IntoIter> {
        ZipIter::new(self.first.into_iter(), self.second.into_iter())
    }
}

impl<A, B> Clone for Zip<'_, A, B>
where
    A: ?Sized,
    B: ?Sized,
{
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<A, B> Copy for Zip<'_, A, B>
where
    A: ?Sized,
    B: ?Sized,
{
}

impl<A, B> std::fmt::Debug for Zip<'_, A, B>
where
    A: ?Sized + std::fmt::Debug,
    B: ?Sized + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Zip")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

impl<'z, 'a, A, B, TA, TB> IntoIterator for &'z Zip<'a, A, B>
where
    A: ?Sized,
    B: ?Sized,
    &'a A: IntoIterator<Item = &'a TA>,
    &'a B: IntoIterator<Item = &'a TB>,
    TA: Clone + 'a,
    TB: Clone + 'a,
{
    type Item = (TA, TB);
    type IntoIter =
        ZipIter<<&'a A as IntoIterator>::IntoIter, <&'a B as IntoIterator>::IntoIter>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, A, B, TA, TB> IntoIterator for Zip<'a, A, B>
where
    A: ?Sized,
    B: ?Sized,
    &'a A: IntoIterator<Item = &'a TA>,
    &'a B: IntoIterator<Item = &'a TB>,
    TA: Clone + 'a,
    TB: Clone + 'a,
{
    type Item = (TA, TB);
    type IntoIter =
        ZipIter<<&'a A as IntoIterator>::IntoIter, <&'a B as IntoIterator>::IntoIter>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A single lockstep traversal produced by [`Zip`].
///
/// Both cursors advance by exactly one element per pair and are never
/// resynchronized. The traversal ends when either cursor is exhausted.
#[derive(Debug, Clone)]
pub struct ZipIter<IA, IB> {
    first: IA,
    second: IB,
}

impl<IA, IB> ZipIter<IA, IB> {
    #[inline]
    fn new(first: IA, second: IB) -> Self {
        Self { first, second }
    }
}

impl<'a, IA, IB, TA, TB> Iterator for ZipIter<IA, IB>
where
    IA: Iterator<Item = &'a TA>,
    IB: Iterator<Item = &'a TB>,
    TA: Clone + 'a,
    TB: Clone + 'a,
{
    type Item = (TA, TB);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let a = self.first.next()?;
        let b = self.second.next()?;
        Some((a.clone(), b.clone()))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let (a_lower, a_upper) = self.first.size_hint();
        let (b_lower, b_upper) = self.second.size_hint();

        let upper = match (a_upper, b_upper) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (Some(x), None) | (None, Some(x)) => Some(x),
            (None, None) => None,
        };
        (a_lower.min(b_lower), upper)
    }
}

impl<'a, IA, IB, TA, TB> ExactSizeIterator for ZipIter<IA, IB>
where
    IA: ExactSizeIterator<Item = &'a TA>,
    IB: ExactSizeIterator<Item = &'a TB>,
    TA: Clone + 'a,
    TB: Clone + 'a,
{
}

impl<'a, IA, IB, TA, TB> FusedIterator for ZipIter<IA, IB>
where
    IA: FusedIterator<Item = &'a TA>,
    IB: FusedIterator<Item = &'a TB>,
    TA: Clone + 'a,
    TB: Clone + 'a,
{
}

/// Shorthand for [`Zip::new`].
///
/// ```rust
/// # use stlalgo::zip::zip;
/// let pairs: Vec<_> = zip(&[1, 2, 3], &[4, 5, 6]).iter().collect();
/// assert_eq!(pairs, vec![(1, 4), (2, 5), (3, 6)]);
/// ```
#[inline]
pub const fn zip<'a, A, B>(first: &'a A, second: &'a B) -> Zip<'a, A, B>
where
    A: ?Sized,
    B: ?Sized,
{
    Zip::new(first, second)
}
