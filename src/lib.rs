#![doc = include_str!("../README.md")]
#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![cfg_attr(feature = "error_in_core", feature(error_in_core))]
// documentation controls
#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]
#![deny(missing_docs)]
// linting controls
#![cfg_attr(
    test,
    allow(
        clippy::bool_assert_comparison,
        clippy::needless_range_loop,
        clippy::redundant_clone,
        clippy::useless_vec,
    )
)]

extern crate alloc;
#[macro_use]
extern crate log;

mod polyfill;

pub mod cmp;
mod default;
mod error;
pub mod heap;
mod sequence;

pub use cmp::{max_by_less, min_by_less, Less, Reversed};
pub use default::NaturalOrder;
pub use error::HeapError;
#[doc(no_inline)]
pub use heap::{
    heap_sort, heap_sort_by, is_heap, is_heap_by, is_heap_until, is_heap_until_by, make_heap,
    make_heap_by, pop_heap, pop_heap_by, push_heap, push_heap_by, sort_heap, sort_heap_by,
    try_pop_heap, try_pop_heap_by, try_push_heap, try_push_heap_by, try_sort_heap,
    try_sort_heap_by,
};
pub use sequence::{Region, Sequence};
