//! Ordering strategies for the heap algorithms.
//!
//! Every `_by` operation in this crate is parameterized by a [`Less`] strategy
//! rather than by the [`PartialOrd`] implementation of the element type. Any
//! closure of the form `Fn(&T, &T) -> bool` is already a strategy; the types in
//! this module cover the common cases that would otherwise be written out by
//! hand.
//!
//! [`PartialOrd`]: core::cmp::PartialOrd


/// A strict weak ordering over `T`, expressed as a "strictly less than"
/// predicate.
///
/// Implementations must be irreflexive (`less(a, a)` is false), transitive,
/// and treat incomparability as an equivalence relation for the elements
/// taking part in any single call. The heap algorithms never panic or access
/// out-of-range positions when a strategy breaks these rules, but the
/// resulting arrangement is then unspecified.
///
/// # Examples
///
/// ```
/// use slice_heap::{make_heap_by, Less};
///
/// // order by absolute value
/// struct Magnitude;
///
/// impl Less<i32> for Magnitude {
///     fn less(&self, a: &i32, b: &i32) -> bool {
///         a.unsigned_abs() < b.unsigned_abs()
///     }
/// }
///
/// let mut v = [3, -7, 1, 5];
/// make_heap_by(&mut v, Magnitude);
/// assert_eq!(v[0], -7);
/// ```
pub trait Less<T: ?Sized> {
    /// Returns `true` if `a` is ordered strictly before `b`.
    fn less(&self, a: &T, b: &T) -> bool;
}

impl<T, F> Less<T> for F
where
    T: ?Sized,
    F: ?Sized + Fn(&T, &T) -> bool,
{
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// Flips the strategy it wraps, so that a max-heap under `O` becomes a
/// min-heap.
///
/// ```
/// use slice_heap::{make_heap_by, NaturalOrder, Reversed};
///
/// let mut v = [4, 8, 2, 6];
/// make_heap_by(&mut v, Reversed(NaturalOrder::new()));
/// assert_eq!(v[0], 2);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reversed<O>(pub O);

impl<T: ?Sized, O: Less<T>> Less<T> for Reversed<O> {
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        self.0.less(b, a)
    }
}

/// Returns the lesser of `a` and `b` under `less`; `a` when they are
/// equivalent.
///
/// ```
/// use slice_heap::min_by_less;
///
/// let (a, b) = ((1, 'a'), (1, 'b'));
/// let by_number = |x: &(i32, char), y: &(i32, char)| x.0 < y.0;
/// assert_eq!(min_by_less(&a, &b, by_number), &a);
/// ```
#[inline]
pub fn min_by_less<'a, T, O>(a: &'a T, b: &'a T, less: O) -> &'a T
where
    T: ?Sized,
    O: Less<T>,
{
    if less.less(b, a) {
        b
    } else {
        a
    }
}

/// Returns the greater of `a` and `b` under `less`; `a` when they are
/// equivalent.
///
/// ```
/// use slice_heap::max_by_less;
///
/// let (a, b) = ((1, 'a'), (1, 'b'));
/// let by_number = |x: &(i32, char), y: &(i32, char)| x.0 < y.0;
/// assert_eq!(max_by_less(&a, &b, by_number), &a);
/// assert_eq!(max_by_less(&a, &(2, 'c'), by_number), &(2, 'c'));
/// ```
#[inline]
pub fn max_by_less<'a, T, O>(a: &'a T, b: &'a T, less: O) -> &'a T
where
    T: ?Sized,
    O: Less<T>,
{
    if less.less(a, b) {
        b
    } else {
        a
    }
}
