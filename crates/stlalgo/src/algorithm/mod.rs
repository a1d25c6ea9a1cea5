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

//! # Sequence Predicate Algorithms
//!
//! Free functions answering questions about a half-open range `[first, last)`
//! with a caller-supplied predicate or comparator. None of them mutate or copy
//! the range and all of them are single pass.
//!
//! ## Ranges and positions
//!
//! A range is anything implementing `IntoIterator`: a borrowed slice or `Vec`,
//! a `LinkedList`, an `XRange`, or an already adapted iterator. Operations that
//! report a position return the zero-based offset of the element from `first`.
//! The offset equal to the number of elements stands for `last`, i.e. "not
//! found".
//!
//! ## Submodules
//!
//! - `quantifier`: `all_of`, `any_of`, `none_of`, `one_of`.
//! - `order`: `is_sorted`, `is_partitioned`, `is_palindrome`.
//! - `search`: `find_not`, `find_backward`.
//!
//! ## Preconditions
//!
//! `is_sorted`, `find_backward` and `is_palindrome` are only defined for
//! non-empty ranges. Debug builds panic on an empty range; release builds do
//! not check.

pub mod order;
pub mod quantifier;
pub mod search;

pub use order::{is_palindrome, is_partitioned, is_sorted};
pub use quantifier::{all_of, any_of, none_of, one_of};
pub use search::{find_backward, find_not};
