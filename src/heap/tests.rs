use super::*;
use crate::test_helpers::test_rng;
use crate::testing::crash_test::CrashTestOrder;
use crate::{HeapError, NaturalOrder, Region, Reversed};
use rand::{seq::SliceRandom, Rng};
use std::cell::Cell;
use std::collections::VecDeque;
use std::panic::{catch_unwind, AssertUnwindSafe};

fn sorted(v: &[i32]) -> Vec<i32> {
    let mut v = v.to_vec();
    v.sort();
    v
}

fn random_vec(rng: &mut impl Rng, len: usize) -> Vec<i32> {
    // a narrow value range so that duplicates are common
    (0..len).map(|_| rng.gen_range(-20..20)).collect()
}

fn permutations(items: &[i32]) -> Vec<Vec<i32>> {
    if items.len() <= 1 {
        return vec![items.to_vec()];
    }
    let mut out = Vec::new();
    for i in 0..items.len() {
        let mut rest = items.to_vec();
        let first = rest.remove(i);
        for mut tail in permutations(&rest) {
            tail.insert(0, first);
            out.push(tail);
        }
    }
    out
}

#[test]
fn test_make_then_sort() {
    let mut v = vec![3, 1, 4, 1, 5, 9, 2, 6];
    make_heap(&mut v);
    assert!(is_heap(&v));
    assert_eq!(v[0], 9);
    sort_heap(&mut v);
    assert_eq!(v, [1, 1, 2, 3, 4, 5, 6, 9]);
}

#[test]
fn test_empty() {
    let mut v: Vec<i32> = Vec::new();
    assert!(is_heap(&v));
    make_heap(&mut v);
    push_heap(&mut v);
    pop_heap(&mut v);
    sort_heap(&mut v);
    heap_sort(&mut v);
    assert!(v.is_empty());
    assert!(is_heap(&v));
    assert_eq!(is_heap_until(&v), 0);
}

#[test]
fn test_single_element() {
    let mut v = vec![5];
    assert!(is_heap(&v));
    make_heap(&mut v);
    assert_eq!(v, [5]);
    pop_heap(&mut v);
    assert_eq!(v, [5]);
    assert!(is_heap(&v));
    push_heap(&mut v);
    sort_heap(&mut v);
    assert_eq!(v, [5]);
}

#[test]
fn test_is_heap_small() {
    assert!(is_heap(&[2, 1]));
    assert!(!is_heap(&[1, 2]));
    assert!(is_heap(&[2, 2]));
    assert!(is_heap(&[3, 1, 2]));
    assert!(!is_heap(&[3, 1, 4]));
    // only the left child of the last internal node exists
    assert!(is_heap(&[4, 3, 2, 1]));
    assert!(!is_heap(&[4, 1, 2, 3]));
}

#[test]
fn test_make_heap_every_length() {
    let mut rng = test_rng();
    for len in 0..=64 {
        let original = random_vec(&mut rng, len);
        let mut v = original.clone();
        make_heap(&mut v);
        assert!(is_heap(&v), "not a heap after make_heap: {v:?}");
        assert_eq!(sorted(&v), sorted(&original));
    }
}

#[test]
fn test_push_heap_one_at_a_time() {
    let mut rng = test_rng();
    let mut heap = Vec::new();
    let mut pushed = Vec::new();
    for _ in 0..200 {
        let x = rng.gen_range(-100..100);
        pushed.push(x);
        heap.push(x);
        push_heap(&mut heap);
        assert!(is_heap(&heap));
        assert_eq!(heap[0], *pushed.iter().max().unwrap());
    }
    assert_eq!(sorted(&heap), sorted(&pushed));
}

#[test]
fn test_pop_heap_yields_maximum() {
    let mut rng = test_rng();
    let mut v = random_vec(&mut rng, 100);
    make_heap(&mut v);
    while !v.is_empty() {
        let max = *v.iter().max().unwrap();
        pop_heap(&mut v);
        assert_eq!(v.pop(), Some(max));
        assert!(is_heap(&v));
    }
}

#[test]
fn test_pop_heap_two_elements() {
    let mut v = vec![7, 3];
    pop_heap(&mut v);
    assert_eq!(v, [3, 7]);
}

#[test]
fn test_sort_heap_matches_std() {
    let mut rng = test_rng();
    for _ in 0..50 {
        let len = rng.gen_range(0..300);
        let original = random_vec(&mut rng, len);
        let mut v = original.clone();
        make_heap(&mut v);
        sort_heap(&mut v);
        assert_eq!(v, sorted(&original));
    }
}

#[test]
fn test_sort_heap_idempotent() {
    let mut rng = test_rng();
    let mut v = random_vec(&mut rng, 77);
    heap_sort(&mut v);
    let once = v.clone();
    make_heap(&mut v);
    sort_heap(&mut v);
    assert_eq!(v, once);
}

#[test]
fn test_all_permutations_of_multiset() {
    let multiset = [1, 1, 2, 3, 3, 4];
    let expected = sorted(&multiset);
    for perm in permutations(&multiset) {
        let mut v = perm.clone();
        make_heap(&mut v);
        assert!(is_heap(&v), "{perm:?} gave {v:?}");
        sort_heap(&mut v);
        assert_eq!(v, expected, "sorting {perm:?}");
    }
}

#[test]
fn test_reversed_order() {
    let mut v = vec![3, 1, 4, 1, 5, 9, 2, 6];
    make_heap_by(&mut v, Reversed(NaturalOrder::new()));
    assert_eq!(v[0], 1);
    assert!(is_heap_by(&v, Reversed(NaturalOrder::new())));
    assert!(!is_heap(&v));
    sort_heap_by(&mut v, Reversed(NaturalOrder::new()));
    assert_eq!(v, [9, 6, 5, 4, 3, 2, 1, 1]);
}

#[derive(Debug, Clone, PartialEq)]
struct Task {
    priority: u8,
    name: &'static str,
}

#[test]
fn test_closure_on_custom_type() {
    let by_priority = |a: &Task, b: &Task| a.priority < b.priority;
    let mut tasks = vec![
        Task { priority: 2, name: "write" },
        Task { priority: 9, name: "deploy" },
        Task { priority: 5, name: "review" },
        Task { priority: 1, name: "lunch" },
    ];
    make_heap_by(&mut tasks, by_priority);
    assert!(is_heap_by(&tasks, by_priority));

    let mut order = Vec::new();
    while !tasks.is_empty() {
        pop_heap_by(&mut tasks, by_priority);
        order.push(tasks.pop().unwrap().name);
    }
    assert_eq!(order, ["deploy", "review", "write", "lunch"]);
}

#[test]
fn test_equivalent_keys_sort_by_key_only() {
    let mut rng = test_rng();
    let by_key = |a: &(i32, usize), b: &(i32, usize)| a.0 < b.0;
    let mut v: Vec<(i32, usize)> = (0..60).map(|i| (rng.gen_range(0..4), i)).collect();
    heap_sort_by(&mut v, by_key);
    assert!(v.windows(2).all(|w| w[0].0 <= w[1].0));
    let mut labels: Vec<usize> = v.iter().map(|&(_, i)| i).collect();
    labels.sort();
    assert_eq!(labels, (0..60).collect::<Vec<_>>());
}

#[test]
fn test_dyn_strategy() {
    let less: &dyn Fn(&i32, &i32) -> bool = &|a: &i32, b: &i32| a < b;
    let mut v = vec![4, 8, 1, 9];
    heap_sort_by(&mut v, less);
    assert_eq!(v, [1, 4, 8, 9]);
}

#[test]
fn test_sub_slice() {
    let mut v = vec![0, 0, 5, 1, 7, 3, 0, 0];
    make_heap(&mut v[2..6]);
    assert_eq!(v[2], 7);
    assert!(is_heap(&v[2..6]));
    sort_heap(&mut v[2..6]);
    assert_eq!(v, [0, 0, 1, 3, 5, 7, 0, 0]);
}

#[test]
fn test_region_bounds_are_respected() {
    let mut v = vec![100, 9, 5, 8, 1, 2, 200];
    {
        let mut region = Region::new(&mut v, 1..6);
        assert!(is_heap(&region));
        pop_heap(&mut region);
    }
    assert_eq!(v[0], 100);
    assert_eq!(v[5], 9);
    assert_eq!(v[6], 200);
    assert!(is_heap(&v[1..5]));
}

#[test]
fn test_wrapped_vec_deque() {
    let mut rng = test_rng();
    let mut deque = VecDeque::with_capacity(16);
    for _ in 0..10 {
        deque.push_back(rng.gen_range(0..50));
    }
    for _ in 0..6 {
        deque.push_front(rng.gen_range(0..50));
    }
    let expected = sorted(&deque.iter().copied().collect::<Vec<_>>());

    make_heap(&mut deque);
    assert!(is_heap(&deque));
    sort_heap(&mut deque);
    assert_eq!(deque.into_iter().collect::<Vec<_>>(), expected);
}

#[test]
fn test_floats_with_nan_do_not_panic() {
    let mut v = vec![2.5, f64::NAN, -1.0, 7.25, f64::NAN, 0.0];
    heap_sort(&mut v);
    assert_eq!(v.len(), 6);
    assert_eq!(v.iter().filter(|x| x.is_nan()).count(), 2);

    let mut v = vec![2.5, -1.0, 7.25, 0.0];
    heap_sort(&mut v);
    assert_eq!(v, [-1.0, 0.0, 2.5, 7.25]);
}

#[test]
fn test_make_heap_is_linear() {
    let mut rng = test_rng();
    for len in [1, 2, 3, 10, 100, 1000, 4097] {
        let mut v = random_vec(&mut rng, len);
        let calls = Cell::new(0);
        make_heap_by(&mut v, CrashTestOrder::new(&calls));
        assert!(calls.get() <= 2 * len, "{} comparisons for {len} elements", calls.get());
    }
}

#[test]
fn test_push_pop_are_logarithmic() {
    let mut rng = test_rng();
    let mut v = random_vec(&mut rng, 1023);
    make_heap(&mut v);

    // a tree of 1024 nodes is 11 levels deep
    let calls = Cell::new(0);
    v.push(1000);
    push_heap_by(&mut v, CrashTestOrder::new(&calls));
    assert!(calls.get() <= 10);

    let calls = Cell::new(0);
    pop_heap_by(&mut v, CrashTestOrder::new(&calls));
    assert!(calls.get() <= 2 * 10);
    assert_eq!(v.pop(), Some(1000));
}

#[test]
fn test_panic_in_less_keeps_elements() {
    let mut rng = test_rng();
    let original = random_vec(&mut rng, 40);

    let total = Cell::new(0);
    heap_sort_by(&mut original.clone(), CrashTestOrder::new(&total));

    for panic_at in [1, 2, total.get() / 3, total.get() / 2, total.get()] {
        let mut v = original.clone();
        let calls = Cell::new(0);
        let result = catch_unwind(AssertUnwindSafe(|| {
            heap_sort_by(&mut v, CrashTestOrder::panic_at(&calls, panic_at))
        }));
        assert!(result.is_err());
        assert_eq!(calls.get(), panic_at);
        assert_eq!(sorted(&v), sorted(&original));
    }
}

#[test]
fn test_is_heap_until_agrees_with_is_heap() {
    let mut rng = test_rng();
    for _ in 0..200 {
        let len = rng.gen_range(0..12);
        let v = random_vec(&mut rng, len);
        let until = is_heap_until(&v);
        assert_eq!(until == v.len(), is_heap(&v), "{v:?}");
        assert!(is_heap(&v[..until]));
    }

    let mut v = random_vec(&mut rng, 30);
    make_heap(&mut v);
    v.shuffle(&mut rng);
    v.insert(0, i32::MIN);
    assert_eq!(is_heap_until(&v), 1);
}

#[test]
fn test_try_push_heap() {
    let mut empty: Vec<i32> = Vec::new();
    assert_eq!(try_push_heap(&mut empty), Err(HeapError::EmptyRange));

    let mut v = vec![9, 5, 8, 1];
    v.push(10);
    assert_eq!(try_push_heap(&mut v), Ok(()));
    assert!(is_heap(&v));

    // only the new last element may be out of place
    let mut v = vec![9, 5, 8, 6, 2];
    assert_eq!(try_push_heap(&mut v), Err(HeapError::NotAHeap { index: 3 }));
    assert_eq!(v, [9, 5, 8, 6, 2]);
}

#[test]
fn test_try_pop_heap() {
    let mut v = vec![1, 9];
    assert_eq!(try_pop_heap(&mut v), Err(HeapError::NotAHeap { index: 1 }));
    assert_eq!(v, [1, 9]);

    let mut v = vec![9, 1];
    assert_eq!(try_pop_heap(&mut v), Ok(()));
    assert_eq!(v, [1, 9]);

    let mut v = vec![5];
    assert_eq!(try_pop_heap(&mut v), Ok(()));
    assert_eq!(v, [5]);
}

#[test]
fn test_try_sort_heap() {
    let mut empty: [i32; 0] = [];
    assert_eq!(try_sort_heap(&mut empty), Ok(()));

    let mut v = [4, 9, 2];
    assert_eq!(try_sort_heap(&mut v), Err(HeapError::NotAHeap { index: 1 }));
    assert_eq!(v, [4, 9, 2]);

    let min_first = |a: &i32, b: &i32| a > b;
    let mut v = [2, 4, 9];
    assert_eq!(try_sort_heap_by(&mut v, min_first), Ok(()));
    assert_eq!(v, [9, 4, 2]);
}

#[test]
fn test_error_display() {
    assert_eq!(HeapError::EmptyRange.to_string(), "operation requires a non-empty range");
    assert_eq!(
        HeapError::NotAHeap { index: 4 }.to_string(),
        "range is not a heap: element 4 is greater than its parent"
    );
}
