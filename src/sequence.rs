//! Random-access sequences the heap algorithms can operate on.

use alloc::{collections::VecDeque, vec::Vec};
use core::ops::{Bound, RangeBounds};


/// A fixed-length, randomly addressable run of elements.
///
/// Positions are `usize` offsets from the start of the sequence. The heap
/// algorithms only ever read elements and exchange pairs of them, so this is
/// all a sequence has to provide; it is implemented for slices, arrays,
/// [`Vec`], [`VecDeque`], mutable references to any of those, and [`Region`].
pub trait Sequence {
    /// The element type.
    type Item;

    /// Returns the number of elements in the sequence.
    fn len(&self) -> usize;

    /// Returns `true` if the sequence has no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    fn get(&self, index: usize) -> &Self::Item;

    /// Exchanges the elements at positions `a` and `b`.
    ///
    /// # Panics
    ///
    /// Panics if either position is out of bounds.
    fn swap(&mut self, a: usize, b: usize);
}

impl<T> Sequence for [T] {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> &T {
        &self[index]
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        <[T]>::swap(self, a, b)
    }
}

impl<T, const N: usize> Sequence for [T; N] {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn get(&self, index: usize) -> &T {
        &self[index]
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        self.as_mut_slice().swap(a, b)
    }
}

impl<T> Sequence for Vec<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> &T {
        &self[index]
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        self.as_mut_slice().swap(a, b)
    }
}

impl<T> Sequence for VecDeque<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> &T {
        &self[index]
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        VecDeque::swap(self, a, b)
    }
}

impl<S: ?Sized + Sequence> Sequence for &mut S {
    type Item = S::Item;

    #[inline]
    fn len(&self) -> usize {
        (**self).len()
    }

    #[inline]
    fn get(&self, index: usize) -> &S::Item {
        (**self).get(index)
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        (**self).swap(a, b)
    }
}

/// A half-open sub-range `[first, last)` of another sequence, itself usable as
/// a sequence whose position 0 is `first`.
///
/// Slices can simply be re-sliced; `Region` exists for sequences that cannot,
/// such as a [`VecDeque`] whose storage has wrapped around. Every access
/// through a region is bounds-checked against the region, never only against
/// the underlying sequence.
///
/// ```
/// use std::collections::VecDeque;
/// use slice_heap::{is_heap, make_heap, Region};
///
/// let mut deque = VecDeque::from([9, 1, 2, 3, 0]);
/// deque.rotate_left(2);
///
/// let mut region = Region::new(&mut deque, 1..4);
/// make_heap(&mut region);
/// assert!(is_heap(&region));
/// assert_eq!(deque, [2, 9, 0, 3, 1]);
/// ```
#[derive(Debug)]
pub struct Region<'a, S: ?Sized> {
    seq: &'a mut S,
    first: usize,
    last: usize,
}

impl<'a, S: ?Sized + Sequence> Region<'a, S> {
    /// Borrows the positions of `seq` that fall within `range`.
    ///
    /// # Panics
    ///
    /// Panics if the range starts after it ends, or ends past the end of
    /// `seq`, exactly as slicing would.
    pub fn new<R: RangeBounds<usize>>(seq: &'a mut S, range: R) -> Self {
        let len = seq.len();
        let first = match range.start_bound() {
            Bound::Included(&start) => start,
            Bound::Excluded(&start) => start.saturating_add(1),
            Bound::Unbounded => 0,
        };
        let last = match range.end_bound() {
            Bound::Included(&end) => end.saturating_add(1),
            Bound::Excluded(&end) => end,
            Bound::Unbounded => len,
        };
        assert!(first <= last, "region starts at {first} but ends at {last}");
        assert!(last <= len, "region end {last} out of range for sequence of length {len}");
        Region { seq, first, last }
    }

    /// Position of the region's first element within the underlying sequence.
    #[inline]
    pub fn first(&self) -> usize {
        self.first
    }

    /// Position one past the region's last element within the underlying
    /// sequence.
    #[inline]
    pub fn last(&self) -> usize {
        self.last
    }

    /// Releases the borrow of the underlying sequence.
    #[inline]
    pub fn into_inner(self) -> &'a mut S {
        self.seq
    }

    #[inline]
    fn offset(&self, index: usize) -> usize {
        assert!(
            index < self.last - self.first,
            "index {index} out of range for region of length {}",
            self.last - self.first
        );
        self.first + index
    }
}

impl<S: ?Sized + Sequence> Sequence for Region<'_, S> {
    type Item = S::Item;

    #[inline]
    fn len(&self) -> usize {
        self.last - self.first
    }

    #[inline]
    fn get(&self, index: usize) -> &S::Item {
        self.seq.get(self.offset(index))
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        let (a, b) = (self.offset(a), self.offset(b));
        self.seq.swap(a, b)
    }
}
