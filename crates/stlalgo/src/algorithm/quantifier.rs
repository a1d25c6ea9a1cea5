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

//! Counting quantifiers over a range: "all", "any", "none" and "exactly one".
//!
//! Each function evaluates the predicate front to back and stops as soon as the
//! answer is settled. The predicate receives elements by value as produced by
//! the range's iterator (`&T` for a borrowed slice or `Vec`).

/// Returns `true` if every element of the range satisfies `pred`.
///
/// Returns `true` for an empty range. Stops at the first element for which
/// `pred` returns `false`.
///
/// # Examples
///
/// ```rust
/// # use stlalgo::algorithm::quantifier::all_of;
/// let even = [2, 4, 6, 8, 10];
/// assert!(all_of(&even, |x| x % 2 == 0));
/// assert!(all_of(&[] as &[i32], |x| x % 2 == 0));
/// ```
#[inline]
pub fn all_of<I, P>(range: I, mut pred: P) -> bool
where
    I: IntoIterator,
    P: FnMut(I::Item) -> bool,
{
    for item in range {
        if !pred(item) {
            return false;
        }
    }
    true
}

/// Returns `true` if at least one element of the range satisfies `pred`.
///
/// Returns `false` for an empty range. Stops at the first match.
///
/// # Examples
///
/// ```rust
/// # use stlalgo::algorithm::quantifier::any_of;
/// let one_even = [1, 2, 5, 7, 9];
/// assert!(any_of(&one_even, |x| x % 2 == 0));
/// ```
#[inline]
pub fn any_of<I, P>(range: I, mut pred: P) -> bool
where
    I: IntoIterator,
    P: FnMut(I::Item) -> bool,
{
    for item in range {
        if pred(item) {
            return true;
        }
    }
    false
}

/// Returns `true` if no element of the range satisfies `pred`.
///
/// Returns `true` for an empty range. Returns `false` at the first match
/// without looking at the rest of the range.
///
/// # Examples
///
/// ```rust
/// # use stlalgo::algorithm::quantifier::none_of;
/// let no_even = [1, 3, 5, 7, 9];
/// assert!(none_of(&no_even, |x| x % 2 == 0));
/// ```
#[inline]
pub fn none_of<I, P>(range: I, mut pred: P) -> bool
where
    I: IntoIterator,
    P: FnMut(I::Item) -> bool,
{
    for item in range {
        if pred(item) {
            return false;
        }
    }
    true
}

/// Returns `true` if exactly one element of the range satisfies `pred`.
///
/// Returns `false` for an empty range. A single match cannot settle the answer,
/// so the range is scanned to the end unless a second match shows up first.
///
/// # Examples
///
/// ```rust
/// # use stlalgo::algorithm::quantifier::one_of;
/// assert!(one_of(&[1, 2, 5, 7, 9], |x| x % 2 == 0));
/// assert!(!one_of(&[1, 2, 4, 7, 9], |x| x % 2 == 0));
/// assert!(!one_of(&[1, 3, 5], |x| x % 2 == 0));
/// ```
#[inline]
pub fn one_of<I, P>(range: I, mut pred: P) -> bool
where
    I: IntoIterator,
    P: FnMut(I::Item) -> bool,
{
    let mut found = false;
    for item in range {
        if pred(item) {
            if found {
                return false;
            }
            found = true;
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng, rngs::StdRng};
    use std::cell::Cell;
    use std::collections::LinkedList;

    fn is_even(x: &i32) -> bool {
        x % 2 == 0
    }

    fn random_vec(rng: &mut StdRng) -> Vec<i32> {
        let len = rng.random_range(0..12);
        (0..len).map(|_| rng.random_range(-20..20)).collect()
    }

    #[test]
    fn test_all_of() {
        assert!(all_of(&[2, 4, 6, 8, 10], is_even));
        assert!(!all_of(&[2, 4, 5, 8, 10], is_even));
    }

    #[test]
    fn test_any_of() {
        assert!(any_of(&[1, 2, 5, 7, 9], is_even));
        assert!(!any_of(&[1, 3, 5, 7, 9], is_even));
    }

    #[test]
    fn test_none_of() {
        assert!(none_of(&[1, 3, 5, 7, 9], is_even));
        assert!(!none_of(&[1, 3, 6, 7, 9], is_even));
    }

    #[test]
    fn test_one_of() {
        assert!(one_of(&[1, 2, 5, 7, 9], is_even));
        assert!(!one_of(&[1, 2, 5, 8, 9], is_even));
        assert!(!one_of(&[1, 3, 5, 7, 9], is_even));
    }

    #[test]
    fn test_empty_range_values() {
        let empty: [i32; 0] = [];
        assert!(all_of(&empty, is_even));
        assert!(!any_of(&empty, is_even));
        assert!(none_of(&empty, is_even));
        assert!(!one_of(&empty, is_even));
    }

    #[test]
    fn test_all_of_short_circuits_on_first_failure() {
        let calls = Cell::new(0);
        let result = all_of(&[2, 3, 4, 6], |x| {
            calls.set(calls.get() + 1);
            is_even(x)
        });
        assert!(!result);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_any_and_none_short_circuit_on_first_match() {
        let calls = Cell::new(0);
        assert!(any_of(&[1, 2, 4, 5], |x| {
            calls.set(calls.get() + 1);
            is_even(x)
        }));
        assert_eq!(calls.get(), 2);

        calls.set(0);
        assert!(!none_of(&[1, 2, 4, 5], |x| {
            calls.set(calls.get() + 1);
            is_even(x)
        }));
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_one_of_stops_at_second_match() {
        let calls = Cell::new(0);
        assert!(!one_of(&[2, 4, 1, 3, 5], |x| {
            calls.set(calls.get() + 1);
            is_even(x)
        }));
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_one_of_scans_full_range_after_single_match() {
        let calls = Cell::new(0);
        assert!(one_of(&[2, 1, 3, 5], |x| {
            calls.set(calls.get() + 1);
            is_even(x)
        }));
        assert_eq!(calls.get(), 4);
    }

    #[test]
    fn test_works_on_linked_list() {
        let list: LinkedList<i32> = [1, 2, 3].into_iter().collect();
        assert!(any_of(&list, is_even));
        assert!(one_of(&list, is_even));
        assert!(!all_of(&list, is_even));
    }

    #[test]
    fn test_all_of_equals_none_of_negated() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let v = random_vec(&mut rng);
            assert_eq!(all_of(&v, is_even), none_of(&v, |x| !is_even(x)));
        }
    }

    #[test]
    fn test_any_of_equals_not_none_of() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let v = random_vec(&mut rng);
            assert_eq!(any_of(&v, is_even), !none_of(&v, is_even));
        }
    }

    #[test]
    fn test_one_of_matches_brute_force_count() {
        let mut rng = StdRng::seed_from_u64(12345);
        for _ in 0..1000 {
            let v = random_vec(&mut rng);
            let count = v.iter().filter(|x| is_even(x)).count();
            assert_eq!(one_of(&v, is_even), count == 1, "input: {:?}", v);
        }
    }
}
