//! Tests for the DP cache module.

use std::cell::Cell;
use std::rc::Rc;

use proptest::prelude::*;

use super::*;

struct Fibonacci;

impl DpProblem<usize, u64> for Fibonacci {
    fn deps(&self, n: &usize) -> Vec<usize> {
        if *n <= 1 { vec![] } else { vec![n - 1, n - 2] }
    }

    fn compute(&self, n: &usize, deps: Vec<u64>) -> u64 {
        if *n <= 1 { *n as u64 } else { deps[0] + deps[1] }
    }
}

fn fib_iterative(n: usize) -> u64 {
    let (mut a, mut b) = (0u64, 1u64);
    for _ in 0..n {
        (a, b) = (b, a + b);
    }
    a
}

#[test]
fn test_fibonacci_small_values() {
    let cache = DpCache::with_problem(VecBackend::new(), Fibonacci);

    assert_eq!(cache.get(&0), 0);
    assert_eq!(cache.get(&1), 1);
    assert_eq!(cache.get(&2), 1);
    assert_eq!(cache.get(&10), 55);
    assert_eq!(cache.get(&20), 6765);
}

#[test]
fn test_base_case_needs_no_fill() {
    let cache = DpCache::with_problem(VecBackend::new(), Fibonacci);
    assert!(cache.is_empty());
    assert_eq!(cache.get(&1), 1);
    assert_eq!(cache.len(), 1);
}

#[test]
fn test_diamond_computes_shared_dependency_once() {
    // 0 depends on 1 and 2, both depend on 3
    struct Diamond {
        computed: Rc<Cell<usize>>,
    }

    impl DpProblem<usize, u32> for Diamond {
        fn deps(&self, n: &usize) -> Vec<usize> {
            match n {
                0 => vec![1, 2],
                1 | 2 => vec![3],
                _ => vec![],
            }
        }

        fn compute(&self, n: &usize, deps: Vec<u32>) -> u32 {
            if *n == 3 {
                self.computed.set(self.computed.get() + 1);
            }
            deps.iter().sum::<u32>() + 1
        }
    }

    let computed = Rc::new(Cell::new(0));
    let cache = DpCache::with_problem(
        VecBackend::new(),
        Diamond {
            computed: Rc::clone(&computed),
        },
    );

    assert_eq!(cache.get(&0), 5);
    assert_eq!(cache.get(&0), 5);
    assert_eq!(cache.get(&3), 1);
    assert_eq!(computed.get(), 1);
    assert_eq!(cache.len(), 4);
}

#[test]
fn test_deep_chain_does_not_overflow_stack() {
    let cache = DpCache::new(
        VecBackend::with_capacity(200_001),
        |n: &usize| if *n == 0 { vec![] } else { vec![n - 1] },
        |n: &usize, deps: Vec<u64>| deps.first().copied().unwrap_or(0) + *n as u64,
    );

    let n = 200_000usize;
    assert_eq!(cache.get(&n), (n as u64) * (n as u64 + 1) / 2);
    assert_eq!(cache.len(), n + 1);
}

#[test]
fn test_hashmap_backend_with_tuple_index() {
    let cache = DpCache::new(
        HashMapBackend::new(),
        |&(r, c): &(u32, u32)| {
            let mut deps = Vec::new();
            if r > 0 {
                deps.push((r - 1, c));
            }
            if c > 0 {
                deps.push((r, c - 1));
            }
            deps
        },
        |_: &(u32, u32), deps: Vec<u64>| if deps.is_empty() { 1 } else { deps.iter().sum() },
    );

    // C(8, 4)
    assert_eq!(cache.get(&(4, 4)), 70);
    assert_eq!(cache.get(&(0, 7)), 1);
    // C(32, 16)
    assert_eq!(cache.get(&(16, 16)), 601_080_390);
}

#[test]
fn test_backend_keeps_first_value() {
    let mut vec_backend = VecBackend::new();
    vec_backend.insert(3, "first");
    vec_backend.insert(3, "second");
    assert_eq!(vec_backend.get(&3), Some(&"first"));
    assert_eq!(vec_backend.get(&1), None);
    assert_eq!(vec_backend.get(&10), None);
    assert_eq!(vec_backend.len(), 1);

    let mut map_backend = HashMapBackend::new();
    map_backend.insert("a", 1);
    map_backend.insert("a", 2);
    assert_eq!(map_backend.get(&"a"), Some(&1));
    assert!(!map_backend.is_empty());
}

#[test]
fn test_closure_and_trait_problems_agree() {
    let by_trait = DpCache::with_problem(VecBackend::new(), Fibonacci);
    let by_closure = DpCache::new(
        VecBackend::new(),
        |n: &usize| Fibonacci.deps(n),
        |n: &usize, deps: Vec<u64>| Fibonacci.compute(n, deps),
    );

    for n in 0..60 {
        assert_eq!(by_trait.get(&n), by_closure.get(&n));
    }
}

proptest! {
    #[test]
    fn prop_fibonacci_matches_iterative(n in 0usize..90) {
        let cache = DpCache::with_problem(VecBackend::new(), Fibonacci);
        prop_assert_eq!(cache.get(&n), fib_iterative(n));
    }

    #[test]
    fn prop_query_order_does_not_matter(order in prop::collection::vec(0usize..80, 1..20)) {
        let cache = DpCache::with_problem(HashMapBackend::new(), Fibonacci);
        for n in order {
            prop_assert_eq!(cache.get(&n), fib_iterative(n));
        }
    }
}
