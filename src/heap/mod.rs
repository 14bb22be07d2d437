//! Binary max-heap algorithms over a [`Sequence`].
//!
//! A sequence is a heap when, for every position `i` with a child at `2i + 1`
//! or `2i + 2`, the element at `i` is not ordered strictly before that child.
//! The greatest element is therefore always at position 0.
//!
//! Each operation rearranges the elements of the sequence it is given in
//! place, by swapping pairs of them, and never allocates. To work on part of a
//! sequence, pass a sub-slice or a [`Region`](crate::Region).
//!
//! Operations without a suffix order elements by [`PartialOrd`]; the `_by`
//! variants take any [`Less`] strategy. The `try_` variants check their
//! preconditions and report a [`HeapError`](crate::HeapError) rather than leaving the sequence
//! in an unspecified arrangement.
//!
//! # Time complexity
//!
//! | [make]   | [push]        | [pop]         | [sort]              | [is]     |
//! |----------|---------------|---------------|---------------------|----------|
//! | *O*(*n*) | *O*(log(*n*)) | *O*(log(*n*)) | *O*(*n* log(*n*))   | *O*(*n*) |
//!
//! [make]: make_heap
//! [push]: push_heap
//! [pop]: pop_heap
//! [sort]: sort_heap
//! [is]: is_heap
//! [`PartialOrd`]: core::cmp::PartialOrd

use crate::{Less, NaturalOrder, Sequence};

mod checked;
mod sift;

#[cfg(test)]
mod tests;

pub use checked::*;

/// Rearranges `seq` into a heap.
///
/// Empty and single-element sequences are left as they are.
///
/// ```
/// use slice_heap::{is_heap, make_heap};
///
/// let mut v = [3, 1, 4, 1, 5, 9, 2, 6];
/// make_heap(&mut v);
/// assert!(is_heap(&v));
/// assert_eq!(v[0], 9);
/// ```
pub fn make_heap<S>(seq: &mut S)
where
    S: ?Sized + Sequence,
    S::Item: PartialOrd,
{
    make_heap_by(seq, NaturalOrder::<S::Item>::new())
}

/// Rearranges `seq` into a heap under `less`.
///
/// ```
/// use slice_heap::make_heap_by;
///
/// // a min-heap
/// let mut v = vec![3, 1, 4, 1, 5];
/// make_heap_by(&mut v, |a: &i32, b: &i32| a > b);
/// assert_eq!(v[0], 1);
/// ```
pub fn make_heap_by<S, O>(seq: &mut S, less: O)
where
    S: ?Sized + Sequence,
    O: Less<S::Item>,
{
    build(seq, &less)
}

/// Adds the last element of `seq` to the heap formed by all the others.
///
/// The elements before the last one must already form a heap; if they do
/// not, the resulting arrangement is unspecified (but still a permutation of
/// the input). Does nothing to an empty sequence.
///
/// ```
/// use slice_heap::{is_heap, make_heap, push_heap};
///
/// let mut v = vec![1, 5, 2];
/// make_heap(&mut v);
/// v.push(7);
/// push_heap(&mut v);
/// assert!(is_heap(&v));
/// assert_eq!(v[0], 7);
/// ```
pub fn push_heap<S>(seq: &mut S)
where
    S: ?Sized + Sequence,
    S::Item: PartialOrd,
{
    push_heap_by(seq, NaturalOrder::<S::Item>::new())
}

/// Adds the last element of `seq` to the heap formed, under `less`, by all the
/// others.
pub fn push_heap_by<S, O>(seq: &mut S, less: O)
where
    S: ?Sized + Sequence,
    O: Less<S::Item>,
{
    if let Some(tail) = seq.len().checked_sub(1) {
        sift::sift_up(seq, tail, &less);
    }
}

/// Moves the greatest element of the heap `seq` to the end, and rearranges
/// the remaining elements into a heap.
///
/// `seq` must already be a heap; if it is not, the resulting arrangement is
/// unspecified. Does nothing to an empty sequence.
///
/// ```
/// use slice_heap::{is_heap, make_heap, pop_heap};
///
/// let mut v = vec![3, 1, 4, 1, 5];
/// make_heap(&mut v);
/// pop_heap(&mut v);
/// assert_eq!(v.pop(), Some(5));
/// assert!(is_heap(&v));
/// ```
pub fn pop_heap<S>(seq: &mut S)
where
    S: ?Sized + Sequence,
    S::Item: PartialOrd,
{
    pop_heap_by(seq, NaturalOrder::<S::Item>::new())
}

/// Moves the greatest element, under `less`, of the heap `seq` to the end, and
/// rearranges the remaining elements into a heap.
pub fn pop_heap_by<S, O>(seq: &mut S, less: O)
where
    S: ?Sized + Sequence,
    O: Less<S::Item>,
{
    let len = seq.len();
    if len > 0 {
        sift::pop_within(seq, len, &less);
    }
}

/// Sorts the heap `seq` in ascending order.
///
/// `seq` must already be a heap; if it is not, the result is some permutation
/// of it, but not necessarily a sorted one.
///
/// ```
/// use slice_heap::{make_heap, sort_heap};
///
/// let mut v = [3, 1, 4, 1, 5, 9, 2, 6];
/// make_heap(&mut v);
/// sort_heap(&mut v);
/// assert_eq!(v, [1, 1, 2, 3, 4, 5, 6, 9]);
/// ```
pub fn sort_heap<S>(seq: &mut S)
where
    S: ?Sized + Sequence,
    S::Item: PartialOrd,
{
    sort_heap_by(seq, NaturalOrder::<S::Item>::new())
}

/// Sorts the heap `seq` in ascending order under `less`.
pub fn sort_heap_by<S, O>(seq: &mut S, less: O)
where
    S: ?Sized + Sequence,
    O: Less<S::Item>,
{
    sort_down(seq, &less)
}

/// Sorts `seq` in ascending order, by first making it a heap.
///
/// Unlike the standard library's sorts this neither allocates nor recurses,
/// and it works on any [`Sequence`]. It is not stable.
///
/// ```
/// use slice_heap::heap_sort;
///
/// let mut v = vec![5, -3, 2, 8, 0];
/// heap_sort(&mut v);
/// assert_eq!(v, [-3, 0, 2, 5, 8]);
/// ```
pub fn heap_sort<S>(seq: &mut S)
where
    S: ?Sized + Sequence,
    S::Item: PartialOrd,
{
    heap_sort_by(seq, NaturalOrder::<S::Item>::new())
}

/// Sorts `seq` in ascending order under `less`, by first making it a heap.
pub fn heap_sort_by<S, O>(seq: &mut S, less: O)
where
    S: ?Sized + Sequence,
    O: Less<S::Item>,
{
    build(seq, &less);
    sort_down(seq, &less);
}

/// Returns `true` if `seq` is a heap.
///
/// Empty and single-element sequences are always heaps.
///
/// ```
/// use slice_heap::is_heap;
///
/// assert!(is_heap(&[9, 5, 8, 1, 2]));
/// assert!(!is_heap(&[1, 5, 8]));
/// assert!(is_heap::<[i32]>(&[]));
/// ```
pub fn is_heap<S>(seq: &S) -> bool
where
    S: ?Sized + Sequence,
    S::Item: PartialOrd,
{
    is_heap_by(seq, NaturalOrder::<S::Item>::new())
}

/// Returns `true` if `seq` is a heap under `less`.
pub fn is_heap_by<S, O>(seq: &S, less: O) -> bool
where
    S: ?Sized + Sequence,
    O: Less<S::Item>,
{
    let len = seq.len();
    let mut n = len / 2;
    while n > 0 {
        n -= 1;
        // every internal node has a left child; the right one may be missing
        let left = 2 * n + 1;
        if less.less(seq.get(n), seq.get(left)) {
            return false;
        }
        if left + 1 < len && less.less(seq.get(n), seq.get(left + 1)) {
            return false;
        }
    }
    true
}

/// Returns the length of the longest prefix of `seq` that is a heap.
///
/// This is `seq.len()` exactly when [`is_heap`] holds; otherwise it is the
/// position of the first element ordered after its parent.
///
/// ```
/// use slice_heap::is_heap_until;
///
/// assert_eq!(is_heap_until(&[9, 5, 8, 6, 2]), 3);
/// assert_eq!(is_heap_until(&[9, 5, 8]), 3);
/// ```
pub fn is_heap_until<S>(seq: &S) -> usize
where
    S: ?Sized + Sequence,
    S::Item: PartialOrd,
{
    is_heap_until_by(seq, NaturalOrder::<S::Item>::new())
}

/// Returns the length of the longest prefix of `seq` that is a heap under
/// `less`.
pub fn is_heap_until_by<S, O>(seq: &S, less: O) -> usize
where
    S: ?Sized + Sequence,
    O: Less<S::Item>,
{
    sift::heap_until_within(seq, seq.len(), &less)
}

fn build<S, O>(seq: &mut S, less: &O)
where
    S: ?Sized + Sequence,
    O: ?Sized + Less<S::Item>,
{
    let len = seq.len();
    if len < 2 {
        return;
    }
    trace!("make_heap over {} elements", len);

    // Sift down every internal node, deepest first, so that both subtrees of
    // a node are heaps by the time it is visited.
    let last = len - 1;
    let mut n = len / 2;
    while n > 0 {
        n -= 1;
        sift::sift_down(seq, n, last, less);
    }
}

fn sort_down<S, O>(seq: &mut S, less: &O)
where
    S: ?Sized + Sequence,
    O: ?Sized + Less<S::Item>,
{
    let mut end = seq.len();
    if end < 2 {
        return;
    }
    trace!("sort_heap over {} elements", end);

    // Each pop parks the current maximum just before `end`. A heap of one
    // element is already in place.
    while end > 1 {
        sift::pop_within(seq, end, less);
        end -= 1;
    }
}
