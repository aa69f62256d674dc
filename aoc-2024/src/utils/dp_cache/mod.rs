//! Memoization for problems whose sub-results form a DAG.
//!
//! A [`DpProblem`] names the dependencies of an index and combines their
//! values; [`DpCache`] resolves them bottom-up with an explicit work stack,
//! so deep dependency chains do not grow the call stack.
//!
//! # Backends
//!
//! - [`VecBackend`]: dense `usize` indices, grows on demand
//! - [`HashMapBackend`]: any `Hash + Eq` index, e.g. `(stone, blinks)` pairs
//!
//! # Cycles
//!
//! Cycles are not detected. A problem whose dependencies loop back on
//! themselves makes [`DpCache::get`] spin forever.
//!
//! # Example
//!
//! ```rust
//! use aoc_2024::utils::dp_cache::{DpCache, DpProblem, VecBackend};
//!
//! struct Fibonacci;
//!
//! impl DpProblem<usize, u64> for Fibonacci {
//!     fn deps(&self, n: &usize) -> Vec<usize> {
//!         if *n <= 1 { vec![] } else { vec![n - 1, n - 2] }
//!     }
//!     fn compute(&self, n: &usize, deps: Vec<u64>) -> u64 {
//!         if *n <= 1 { *n as u64 } else { deps[0] + deps[1] }
//!     }
//! }
//!
//! let cache = DpCache::with_problem(VecBackend::new(), Fibonacci);
//! assert_eq!(cache.get(&90), 2_880_067_194_370_816_120);
//! ```
//!
//! Closures work too:
//!
//! ```rust
//! use aoc_2024::utils::dp_cache::{DpCache, HashMapBackend};
//!
//! let paths = DpCache::new(
//!     HashMapBackend::new(),
//!     |&(r, c): &(u32, u32)| {
//!         let mut deps = Vec::new();
//!         if r > 0 { deps.push((r - 1, c)); }
//!         if c > 0 { deps.push((r, c - 1)); }
//!         deps
//!     },
//!     |_: &(u32, u32), deps: Vec<u64>| if deps.is_empty() { 1 } else { deps.iter().sum() },
//! );
//! assert_eq!(paths.get(&(4, 4)), 70);
//! ```

mod backend;
mod cache;
mod problem;

pub use backend::{Backend, HashMapBackend, VecBackend};
pub use cache::DpCache;
pub use problem::{ClosureProblem, DpProblem};

#[cfg(test)]
mod tests;
