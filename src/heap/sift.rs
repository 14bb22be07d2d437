// The structural repairs everything else in this module is built from.
//
// All positions are relative to the head of the heap region (position 0 of the
// sequence), and every region bound passed in here is INCLUSIVE: `last` is the
// position of the last element that belongs to the heap. Children and loop
// bound are compared against the same `last`, so nothing past it is ever read
// or swapped.

use crate::{Less, Sequence};

/// Position of the left child of `parent`, or `None` if it would overflow
/// `usize` (only possible for sequences of zero-sized elements).
#[inline]
pub(super) fn left_child(parent: usize) -> Option<usize> {
    parent.checked_mul(2)?.checked_add(1)
}

/// Position of the parent of `child`, or `None` for the root.
#[inline]
pub(super) fn parent(child: usize) -> Option<usize> {
    match child {
        0 => None,
        _ => Some((child - 1) / 2),
    }
}

/// Moves the element at `tail` towards the root while it is greater than its
/// parent.
///
/// Requires positions `0..tail` to already form a heap.
pub(super) fn sift_up<S, O>(seq: &mut S, tail: usize, less: &O)
where
    S: ?Sized + Sequence,
    O: ?Sized + Less<S::Item>,
{
    let mut cur = tail;
    while let Some(up) = parent(cur) {
        if !less.less(seq.get(up), seq.get(cur)) {
            break;
        }
        seq.swap(up, cur);
        cur = up;
    }
}

/// Moves the element at `cur` towards the leaves while either child is greater
/// than it, never looking past position `last`.
///
/// Requires the subtrees below `cur` (within `..=last`) to already be heaps.
pub(super) fn sift_down<S, O>(seq: &mut S, mut cur: usize, last: usize, less: &O)
where
    S: ?Sized + Sequence,
    O: ?Sized + Less<S::Item>,
{
    while let Some(mut child) = left_child(cur).filter(|&left| left <= last) {
        // take the right child only if it is strictly greater; ties go left
        if child < last && less.less(seq.get(child), seq.get(child + 1)) {
            child += 1;
        }

        // if we are already in order, stop.
        if !less.less(seq.get(cur), seq.get(child)) {
            return;
        }

        seq.swap(cur, child);
        cur = child;
    }
}

/// Swaps the root with position `end - 1` and restores the heap over
/// `0..end - 1`.
///
/// Requires `1 <= end <= seq.len()` and `0..end` to be a heap.
pub(super) fn pop_within<S, O>(seq: &mut S, end: usize, less: &O)
where
    S: ?Sized + Sequence,
    O: ?Sized + Less<S::Item>,
{
    debug_assert!(end >= 1 && end <= seq.len());
    seq.swap(0, end - 1);
    // two or more elements remain: the new heap ends at `end - 2`, inclusive
    if end > 2 {
        sift_down(seq, 0, end - 2, less);
    }
}

/// Length of the longest prefix of `0..end` that is a heap.
pub(super) fn heap_until_within<S, O>(seq: &S, end: usize, less: &O) -> usize
where
    S: ?Sized + Sequence,
    O: ?Sized + Less<S::Item>,
{
    (1..end)
        .find(|&child| {
            let up = (child - 1) / 2;
            less.less(seq.get(up), seq.get(child))
        })
        .unwrap_or(end)
}
