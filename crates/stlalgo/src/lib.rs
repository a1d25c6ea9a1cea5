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

//! # stlalgo
//!
//! Generic sequence predicates and two lightweight iteration adaptors,
//! modeled after the classic algorithms library. Everything in this crate is
//! stateless, allocation free and borrows the caller's data in place.
//!
//! ## Modules
//!
//! - `algorithm`: Nine free functions over a half-open range `[first, last)`
//!   (`all_of`, `any_of`, `none_of`, `one_of`, `is_sorted`, `is_partitioned`,
//!   `find_not`, `find_backward`, `is_palindrome`). A range is any
//!   `IntoIterator`; positions are zero-based offsets where the element count
//!   denotes `last`.
//! - `range`: `XRange<T>`, a restartable arithmetic sequence descriptor that
//!   hands out a fresh `XRangeIter<T>` cursor per traversal.
//! - `step`: The `Step` trait behind `XRange`, an overflow-aware advance and an
//!   exact remaining count for integer cursors.
//! - `zip`: `Zip<'a, A, B>`, a non-owning adaptor that walks two containers in
//!   lockstep and yields cloned pairs until the shorter one is exhausted.
//!
//! ## Preconditions
//!
//! Nothing here returns an error for malformed input. `is_sorted`,
//! `find_backward` and `is_palindrome` require a non-empty range; this is
//! checked by `debug_assert!` only, so release builds stay check free.
//!
//! ```rust
//! use stlalgo::{find_backward, is_sorted, xrange, Zip};
//!
//! let v = vec![1, 1, 1, 2, 1, 2, 1];
//! assert_eq!(find_backward(&v, &2), 5);
//!
//! let r = xrange(1, 10, 1);
//! assert!(is_sorted(&r, |a, b| a < b));
//!
//! let letters = ['a', 'b'];
//! let pairs: Vec<_> = Zip::new(&v, &letters).iter().collect();
//! assert_eq!(pairs, vec![(1, 'a'), (1, 'b')]);
//! ```

pub mod algorithm;
pub mod range;
pub mod step;
pub mod zip;

pub use algorithm::{
    all_of, any_of, find_backward, find_not, is_palindrome, is_partitioned, is_sorted, none_of,
    one_of,
};
pub use range::{XRange, XRangeError, XRangeIter, xrange, xrange_between, xrange_to};
pub use step::Step;
pub use zip::{Zip, ZipIter, zip};
