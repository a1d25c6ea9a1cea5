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

//! Ordering and shape predicates: sortedness, partitioning and mirror symmetry.

use crate::algorithm::quantifier::none_of;

/// Returns `true` if `pred(e[i], e[i + 1])` holds for every adjacent pair.
///
/// `pred` is applied as given, so a strict comparator such as `<` rejects
/// ranges containing equal neighbours. A single element range is sorted.
///
/// # Panics
///
/// In debug builds, panics if the range is empty. An empty range is outside
/// the contract of this function; release builds return `true` for it.
///
/// # Examples
///
/// ```rust
/// # use stlalgo::algorithm::order::is_sorted;
/// assert!(is_sorted(&[1, 2, 3, 4, 5], |a, b| a < b));
/// assert!(!is_sorted(&[5, 2, 3, 4, 5], |a, b| a < b));
/// ```
#[inline]
pub fn is_sorted<I, P>(range: I, mut pred: P) -> bool
where
    I: IntoIterator,
    P: FnMut(&I::Item, &I::Item) -> bool,
{
    let mut iter = range.into_iter();
    let first = iter.next();
    debug_assert!(first.is_some(), "called `is_sorted` on an empty range");

    let Some(mut prev) = first else {
        return true;
    };
    for next in iter {
        if !pred(&prev, &next) {
            return false;
        }
        prev = next;
    }
    true
}

/// Returns `true` if every element satisfying `pred` precedes every element
/// that does not.
///
/// The leading run of matching elements is skipped, after which the remainder
/// must contain no match. The prefix is never re-evaluated. An empty range is
/// partitioned.
///
/// # Examples
///
/// ```rust
/// # use stlalgo::algorithm::order::is_partitioned;
/// assert!(is_partitioned(&[2, 4, 6, 7, 9, 11], |x| x % 2 == 0));
/// assert!(!is_partitioned(&[2, 4, 7, 6, 9, 11], |x| x % 2 == 0));
/// ```
#[inline]
pub fn is_partitioned<I, P>(range: I, mut pred: P) -> bool
where
    I: IntoIterator,
    P: FnMut(I::Item) -> bool,
{
    let mut iter = range.into_iter();
    for item in iter.by_ref() {
        if !pred(item) {
            break;
        }
    }
    none_of(iter, &mut pred)
}

/// Returns `true` if `pred(e[i], e[last - 1 - i])` holds for every mirrored
/// pair, walking inward from both ends.
///
/// The walk stops once the two ends meet or cross. In an odd length range the
/// middle element is never compared with itself.
///
/// # Panics
///
/// In debug builds, panics if the range is empty. Release builds return
/// `true` for an empty range.
///
/// # Examples
///
/// ```rust
/// # use stlalgo::algorithm::order::is_palindrome;
/// let same_parity = |a: &&i32, b: &&i32| *a % 2 == *b % 2;
/// assert!(is_palindrome(&[1, 2, 3, 4, 5], same_parity));
/// assert!(!is_palindrome(&[1, 2, 3, 4, 6], same_parity));
/// ```
#[inline]
pub fn is_palindrome<I, P>(range: I, mut pred: P) -> bool
where
    I: IntoIterator,
    I::IntoIter: DoubleEndedIterator,
    P: FnMut(&I::Item, &I::Item) -> bool,
{
    let mut iter = range.into_iter();
    let mut front = iter.next();
    debug_assert!(front.is_some(), "called `is_palindrome` on an empty range");

    while let Some(left) = front {
        let Some(right) = iter.next_back() else {
            break;
        };
        if !pred(&left, &right) {
            return false;
        }
        front = iter.next();
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::XRange;
    use std::cell::RefCell;
    use std::collections::{LinkedList, VecDeque};

    fn less(a: &i32, b: &i32) -> bool {
        a < b
    }

    fn is_even(x: i32) -> bool {
        x % 2 == 0
    }

    fn same_parity(a: &i32, b: &i32) -> bool {
        a % 2 == b % 2
    }

    #[test]
    fn test_is_sorted_basic() {
        let v = vec![1, 2, 3, 4, 5];
        let unsorted = vec![5, 2, 3, 4, 5];
        assert!(is_sorted(v.iter().copied(), less));
        assert!(!is_sorted(unsorted.iter().copied(), less));
    }

    #[test]
    fn test_is_sorted_single_element() {
        assert!(is_sorted([42].into_iter(), less));
    }

    #[test]
    fn test_is_sorted_strict_comparator_rejects_duplicates() {
        assert!(!is_sorted([1, 2, 2, 3].into_iter(), less));
        assert!(is_sorted([1, 2, 2, 3].into_iter(), |a, b| a <= b));
    }

    #[test]
    fn test_is_sorted_descending_comparator() {
        assert!(is_sorted([9, 7, 3, 1].into_iter(), |a, b| a > b));
    }

    #[test]
    fn test_is_sorted_on_xrange() {
        let r = XRange::new(0, 20, 3);
        assert!(is_sorted(&r, less));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "called `is_sorted` on an empty range")]
    fn test_is_sorted_empty_panics_in_debug() {
        let empty: [i32; 0] = [];
        is_sorted(empty.into_iter(), less);
    }

    #[test]
    fn test_is_partitioned_basic() {
        assert!(is_partitioned([2, 4, 6, 7, 9, 11].into_iter(), is_even));
        assert!(!is_partitioned([2, 4, 6, 7, 8, 11].into_iter(), is_even));
    }

    #[test]
    fn test_is_partitioned_edge_cases() {
        let empty: [i32; 0] = [];
        assert!(is_partitioned(empty.into_iter(), is_even));
        assert!(is_partitioned([2, 4, 6].into_iter(), is_even));
        assert!(is_partitioned([1, 3, 5].into_iter(), is_even));
        // A leading false followed by a true is not partitioned.
        assert!(!is_partitioned([1, 2].into_iter(), is_even));
    }

    #[test]
    fn test_is_partitioned_does_not_revisit_prefix() {
        let seen = RefCell::new(Vec::new());
        let result = is_partitioned([2, 4, 5, 7].into_iter(), |x| {
            seen.borrow_mut().push(x);
            is_even(x)
        });
        assert!(result);
        assert_eq!(*seen.borrow(), vec![2, 4, 5, 7]);
    }

    #[test]
    fn test_is_palindrome_parity() {
        let palik = vec![1, 2, 3, 4, 5];
        assert!(is_palindrome(palik.iter().copied(), same_parity));
        assert!(!is_palindrome([1, 2, 3, 4, 6].into_iter(), same_parity));
    }

    #[test]
    fn test_is_palindrome_equality() {
        assert!(is_palindrome("racecar".chars(), |a: &char, b: &char| a == b));
        assert!(!is_palindrome("rust".chars(), |a: &char, b: &char| a == b));
    }

    #[test]
    fn test_is_palindrome_single_element() {
        assert!(is_palindrome([7].into_iter(), |_: &i32, _: &i32| false));
    }

    #[test]
    fn test_is_palindrome_never_compares_middle_with_itself() {
        let pairs = RefCell::new(Vec::new());
        let result = is_palindrome([1, 2, 3, 4, 5].into_iter(), |a: &i32, b: &i32| {
            pairs.borrow_mut().push((*a, *b));
            true
        });
        assert!(result);
        assert_eq!(*pairs.borrow(), vec![(1, 5), (2, 4)]);
    }

    #[test]
    fn test_is_palindrome_even_length_pairs() {
        let pairs = RefCell::new(Vec::new());
        is_palindrome([1, 2, 3, 4].into_iter(), |a: &i32, b: &i32| {
            pairs.borrow_mut().push((*a, *b));
            true
        });
        assert_eq!(*pairs.borrow(), vec![(1, 4), (2, 3)]);
    }

    #[test]
    fn test_is_palindrome_on_bidirectional_containers() {
        let list: LinkedList<i32> = [1, 2, 1].into_iter().collect();
        assert!(is_palindrome(&list, |a, b| a == b));

        let deque: VecDeque<i32> = [1, 2, 3].into_iter().collect();
        assert!(!is_palindrome(&deque, |a, b| a == b));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "called `is_palindrome` on an empty range")]
    fn test_is_palindrome_empty_panics_in_debug() {
        let empty: [i32; 0] = [];
        is_palindrome(empty.into_iter(), same_parity);
    }
}
