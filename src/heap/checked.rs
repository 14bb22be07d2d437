// Operations that verify their precondition before touching the sequence.
//
// Verification costs a linear scan, so these trade the logarithmic bound of
// `push_heap`/`pop_heap` for the guarantee that a rejected call leaves the
// sequence exactly as it was.

use super::{sift, sort_down};
use crate::{HeapError, Less, NaturalOrder, Sequence};

/// Like [`push_heap`](super::push_heap), but first checks that `seq` is
/// non-empty and that every element but the last already forms a heap.
///
/// ```
/// use slice_heap::{try_push_heap, HeapError};
///
/// let mut v = vec![5, 3, 4];
/// v.push(8);
/// assert_eq!(try_push_heap(&mut v), Ok(()));
/// assert_eq!(v, [8, 5, 4, 3]);
///
/// let mut broken = vec![1, 3, 2, 7];
/// assert_eq!(try_push_heap(&mut broken), Err(HeapError::NotAHeap { index: 1 }));
/// assert_eq!(broken, [1, 3, 2, 7]);
/// ```
pub fn try_push_heap<S>(seq: &mut S) -> Result<(), HeapError>
where
    S: ?Sized + Sequence,
    S::Item: PartialOrd,
{
    try_push_heap_by(seq, NaturalOrder::<S::Item>::new())
}

/// Like [`push_heap_by`](super::push_heap_by), but first checks that `seq` is
/// non-empty and that every element but the last already forms a heap under
/// `less`.
pub fn try_push_heap_by<S, O>(seq: &mut S, less: O) -> Result<(), HeapError>
where
    S: ?Sized + Sequence,
    O: Less<S::Item>,
{
    let tail = match seq.len().checked_sub(1) {
        Some(tail) => tail,
        None => return Err(reject("push_heap", HeapError::EmptyRange)),
    };
    check_heap("push_heap", seq, tail, &less)?;
    sift::sift_up(seq, tail, &less);
    Ok(())
}

/// Like [`pop_heap`](super::pop_heap), but first checks that `seq` is a
/// non-empty heap.
///
/// ```
/// use slice_heap::{try_pop_heap, HeapError};
///
/// let mut v = vec![9, 4, 7];
/// assert_eq!(try_pop_heap(&mut v), Ok(()));
/// assert_eq!(v.pop(), Some(9));
///
/// let mut empty: Vec<i32> = Vec::new();
/// assert_eq!(try_pop_heap(&mut empty), Err(HeapError::EmptyRange));
/// ```
pub fn try_pop_heap<S>(seq: &mut S) -> Result<(), HeapError>
where
    S: ?Sized + Sequence,
    S::Item: PartialOrd,
{
    try_pop_heap_by(seq, NaturalOrder::<S::Item>::new())
}

/// Like [`pop_heap_by`](super::pop_heap_by), but first checks that `seq` is a
/// non-empty heap under `less`.
pub fn try_pop_heap_by<S, O>(seq: &mut S, less: O) -> Result<(), HeapError>
where
    S: ?Sized + Sequence,
    O: Less<S::Item>,
{
    let len = seq.len();
    if len == 0 {
        return Err(reject("pop_heap", HeapError::EmptyRange));
    }
    check_heap("pop_heap", seq, len, &less)?;
    sift::pop_within(seq, len, &less);
    Ok(())
}

/// Like [`sort_heap`](super::sort_heap), but first checks that `seq` is a
/// heap. Empty sequences are heaps, so they are accepted.
///
/// ```
/// use slice_heap::{try_sort_heap, HeapError};
///
/// let mut v = [6, 5, 2, 1, 3];
/// assert_eq!(try_sort_heap(&mut v), Ok(()));
/// assert_eq!(v, [1, 2, 3, 5, 6]);
///
/// let mut unsorted = [2, 6, 1];
/// assert_eq!(try_sort_heap(&mut unsorted), Err(HeapError::NotAHeap { index: 1 }));
/// ```
pub fn try_sort_heap<S>(seq: &mut S) -> Result<(), HeapError>
where
    S: ?Sized + Sequence,
    S::Item: PartialOrd,
{
    try_sort_heap_by(seq, NaturalOrder::<S::Item>::new())
}

/// Like [`sort_heap_by`](super::sort_heap_by), but first checks that `seq` is
/// a heap under `less`.
pub fn try_sort_heap_by<S, O>(seq: &mut S, less: O) -> Result<(), HeapError>
where
    S: ?Sized + Sequence,
    O: Less<S::Item>,
{
    check_heap("sort_heap", seq, seq.len(), &less)?;
    sort_down(seq, &less);
    Ok(())
}

/// Fails unless positions `0..end` of `seq` form a heap.
fn check_heap<S, O>(op: &str, seq: &S, end: usize, less: &O) -> Result<(), HeapError>
where
    S: ?Sized + Sequence,
    O: ?Sized + Less<S::Item>,
{
    match sift::heap_until_within(seq, end, less) {
        until if until == end => Ok(()),
        index => Err(reject(op, HeapError::NotAHeap { index })),
    }
}

fn reject(op: &str, err: HeapError) -> HeapError {
    debug!("rejecting {}: {}", op, err);
    err
}
