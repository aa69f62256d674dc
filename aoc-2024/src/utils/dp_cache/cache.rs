//! Single-threaded DP cache.

use std::cell::RefCell;
use std::marker::PhantomData;

use super::backend::Backend;
use super::problem::{ClosureProblem, DpProblem};

/// Lazily computes and memoizes the values of a [`DpProblem`].
///
/// Each index is computed at most once. Dependencies are resolved
/// iteratively, so the depth of the dependency graph is bounded by heap
/// memory rather than the thread's stack.
///
/// The graph must be acyclic; see the [module docs](super).
pub struct DpCache<I, K, B, P>
where
    B: Backend<I, K>,
    P: DpProblem<I, K>,
{
    backend: RefCell<B>,
    problem: P,
    _phantom: PhantomData<fn(&I) -> K>,
}

impl<I, K, B, P> DpCache<I, K, B, P>
where
    I: Clone,
    K: Clone,
    B: Backend<I, K>,
    P: DpProblem<I, K>,
{
    pub fn with_problem(backend: B, problem: P) -> Self {
        Self {
            backend: RefCell::new(backend),
            problem,
            _phantom: PhantomData,
        }
    }

    pub fn problem(&self) -> &P {
        &self.problem
    }

    /// Number of values computed so far.
    pub fn len(&self) -> usize {
        self.backend.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The value of `index`, computing it and any missing dependencies first.
    pub fn get(&self, index: &I) -> K {
        if let Some(value) = self.backend.borrow().get(index) {
            return value.clone();
        }

        let deps = self.problem.deps(index);
        let values = match self.resolved(&deps) {
            Some(values) => values,
            None => {
                self.fill(deps.clone());
                log::trace!("dp cache filled to {} entries", self.len());
                // `fill` leaves every index it was given computed
                deps.iter().map(|dep| self.get(dep)).collect()
            }
        };

        let value = self.problem.compute(index, values);
        self.backend.borrow_mut().insert(index.clone(), value.clone());
        value
    }

    /// Values of `deps` if all of them are cached.
    fn resolved(&self, deps: &[I]) -> Option<Vec<K>> {
        let backend = self.backend.borrow();
        deps.iter().map(|dep| backend.get(dep).cloned()).collect()
    }

    /// Compute every index in `pending` along with its transitive dependencies.
    ///
    /// An index stays on the stack until all of its dependencies are cached;
    /// it is then computed and popped.
    fn fill(&self, mut pending: Vec<I>) {
        while let Some(index) = pending.pop() {
            if self.backend.borrow().get(&index).is_some() {
                continue;
            }

            let deps = self.problem.deps(&index);
            match self.resolved(&deps) {
                Some(values) => {
                    let value = self.problem.compute(&index, values);
                    self.backend.borrow_mut().insert(index, value);
                }
                None => {
                    let missing: Vec<I> = {
                        let backend = self.backend.borrow();
                        deps.into_iter()
                            .filter(|dep| backend.get(dep).is_none())
                            .collect()
                    };
                    pending.push(index);
                    pending.extend(missing);
                }
            }
        }
    }
}

impl<I, K, B, D, C> DpCache<I, K, B, ClosureProblem<I, K, D, C>>
where
    I: Clone,
    K: Clone,
    B: Backend<I, K>,
    D: Fn(&I) -> Vec<I>,
    C: Fn(&I, Vec<K>) -> K,
{
    /// Closure form of [`with_problem`](DpCache::with_problem).
    pub fn new(backend: B, dep_fn: D, compute_fn: C) -> Self {
        Self::with_problem(backend, ClosureProblem::new(dep_fn, compute_fn))
    }
}
