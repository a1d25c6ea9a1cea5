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

//! Value searches that report a position in the range.
//!
//! Positions are zero-based offsets from the front of the range. A result
//! equal to the number of elements denotes the end of the range and means that
//! nothing was found.
//!
//! The searched value is compared through `PartialEq<V>` on the range's item
//! type. When searching a borrowed slice (items are `&T`), pass the value by
//! reference as well.

/// Returns the position of the first element that is not equal to `value`.
///
/// Returns the length of the range if every element equals `value` or the
/// range is empty.
///
/// # Examples
///
/// ```rust
/// # use stlalgo::algorithm::search::find_not;
/// let v = [1, 1, 1, 2, 1];
/// assert_eq!(find_not(&v, &1), 3);
/// assert_eq!(find_not(&[1, 1], &1), 2);
/// ```
#[inline]
pub fn find_not<I, V>(range: I, value: V) -> usize
where
    I: IntoIterator,
    I::Item: PartialEq<V>,
{
    let mut position = 0;
    for item in range {
        if item != value {
            return position;
        }
        position += 1;
    }
    position
}

/// Returns the position of the last element equal to `value`, scanning from
/// the back of the range.
///
/// Returns the length of the range if no element matches.
///
/// # Panics
///
/// In debug builds, panics if the range is empty. Release builds return `0`
/// (the end position) for an empty range.
///
/// # Examples
///
/// ```rust
/// # use stlalgo::algorithm::search::find_backward;
/// let v = [1, 1, 1, 2, 1, 2, 1];
/// assert_eq!(find_backward(&v, &2), 5);
/// assert_eq!(find_backward(&v, &3), v.len());
/// ```
#[inline]
pub fn find_backward<I, V>(range: I, value: V) -> usize
where
    I: IntoIterator,
    I::IntoIter: DoubleEndedIterator + ExactSizeIterator,
    I::Item: PartialEq<V>,
{
    let mut iter = range.into_iter();
    let last = iter.len();
    debug_assert!(last > 0, "called `find_backward` on an empty range");

    iter.rposition(|item| item == value).unwrap_or(last)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::XRange;

    #[test]
    fn test_find_not_basic() {
        let fnot = vec![1, 1, 1, 2, 1];
        let pos = find_not(&fnot, &1);
        assert_eq!(pos, 3);
        assert_eq!(fnot[pos], 2);
    }

    #[test]
    fn test_find_not_first_element() {
        assert_eq!(find_not([5, 1, 1].into_iter(), 1), 0);
    }

    #[test]
    fn test_find_not_all_equal_returns_end() {
        let v = vec![7, 7, 7];
        assert_eq!(find_not(&v, &7), v.len());
    }

    #[test]
    fn test_find_not_empty_returns_end() {
        let empty: Vec<i32> = Vec::new();
        assert_eq!(find_not(&empty, &1), 0);
    }

    #[test]
    fn test_find_not_on_strings() {
        let words = ["a", "a", "b"];
        assert_eq!(find_not(words.iter().copied(), "a"), 2);
    }

    #[test]
    fn test_find_not_on_xrange() {
        let r = XRange::new(3, 4, 1);
        assert_eq!(find_not(&r, 3), 1);
    }

    #[test]
    fn test_find_backward_returns_last_occurrence() {
        let fback = vec![1, 1, 1, 2, 1, 2, 1];
        let pos = find_backward(&fback, &2);
        assert_eq!(pos, 5);
        assert_eq!(fback[pos], 2);
    }

    #[test]
    fn test_find_backward_first_and_last_positions() {
        let v = [4, 1, 1];
        assert_eq!(find_backward(&v, &4), 0);
        let w = [1, 1, 4];
        assert_eq!(find_backward(&w, &4), 2);
    }

    #[test]
    fn test_find_backward_absent_returns_end() {
        let v = vec![1, 1, 1];
        assert_eq!(find_backward(&v, &2), v.len());
    }

    #[test]
    fn test_find_backward_single_element() {
        assert_eq!(find_backward([9].into_iter(), 9), 0);
        assert_eq!(find_backward([9].into_iter(), 8), 1);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "called `find_backward` on an empty range")]
    fn test_find_backward_empty_panics_in_debug() {
        let empty: Vec<i32> = Vec::new();
        find_backward(&empty, &1);
    }
}
