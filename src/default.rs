//! The natural-order strategy, used by every operation that is not suffixed
//! with `_by`.

use crate::Less;
use core::{fmt, marker::PhantomData};

/// A zero-sized strategy that delegates to the [`PartialOrd`] implementation
/// of its type parameter `T`.
///
/// Heaps built under `NaturalOrder` keep their greatest element first, as
/// [`make_heap`](crate::make_heap) and friends do.
pub struct NaturalOrder<T: ?Sized>(PhantomData<fn(&T)>);

impl<T: ?Sized> NaturalOrder<T> {
    /// Creates the strategy.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T: ?Sized> Default for NaturalOrder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> Clone for NaturalOrder<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for NaturalOrder<T> {}

impl<T: ?Sized> fmt::Debug for NaturalOrder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("NaturalOrder")
    }
}

impl<T: ?Sized + PartialOrd> Less<T> for NaturalOrder<T> {
    // Delegate to `T`'s `<` rather than going through `partial_cmp`, so that
    // types with a hand-written `lt` are honoured exactly.
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        a < b
    }
}
