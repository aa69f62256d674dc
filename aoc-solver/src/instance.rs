//! Solver instance implementation

use crate::error::{ParseError, SolveError};
use crate::solver::{Solver, SolverExt};

/// A parsed puzzle for one year/day, ready to answer its parts.
///
/// Owns the solver's shared data for the lifetime of the input, so parts
/// solved later can reuse what earlier parts stored.
pub struct SolverInstance<'a, S: Solver> {
    year: u16,
    day: u8,
    shared: S::SharedData<'a>,
}

impl<'a, S: Solver> SolverInstance<'a, S> {
    /// Parse `input` and wrap the result.
    pub fn new(year: u16, day: u8, input: &'a str) -> Result<Self, ParseError> {
        Ok(Self::from_shared(year, day, S::parse(input)?))
    }

    /// Wrap already parsed shared data.
    pub fn from_shared(year: u16, day: u8, shared: S::SharedData<'a>) -> Self {
        Self { year, day, shared }
    }

    /// Borrow the shared data, e.g. to inspect what earlier parts cached.
    pub fn shared(&self) -> &S::SharedData<'a> {
        &self.shared
    }
}

/// Type-erased interface for working with any solver through dynamic dispatch
///
/// The registry hands out `Box<dyn DynSolver>` so callers can drive solvers
/// for different days without knowing their shared data types.
///
/// ```no_run
/// use aoc_solver::DynSolver;
///
/// fn answer_all(solver: &mut dyn DynSolver) -> Vec<String> {
///     (1..=solver.parts())
///         .map(|part| match solver.solve(part) {
///             Ok(answer) => answer,
///             Err(e) => format!("error: {e}"),
///         })
///         .collect()
/// }
/// ```
pub trait DynSolver {
    /// Solve the specified part
    ///
    /// # Returns
    /// * `Ok(String)` - The answer
    /// * `Err(SolveError::PartOutOfRange)` - `part` is 0 or above [`DynSolver::parts`]
    /// * `Err(SolveError)` - Any other failure reported by the solver
    fn solve(&mut self, part: u8) -> Result<String, SolveError>;

    fn year(&self) -> u16;

    fn day(&self) -> u8;

    /// Number of parts this solver supports
    fn parts(&self) -> u8;
}

impl<'a, S: SolverExt> DynSolver for SolverInstance<'a, S> {
    fn solve(&mut self, part: u8) -> Result<String, SolveError> {
        log::debug!("solving {}/day{:02} part {}", self.year, self.day, part);
        S::solve_part_checked_range(&mut self.shared, part)
    }

    fn year(&self) -> u16 {
        self.year
    }

    fn day(&self) -> u8 {
        self.day
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}
