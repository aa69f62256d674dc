//! Advent of Code Solver Library
//!
//! A small, type-safe framework for daily puzzle solvers. Every solver parses
//! its input once into a shared data structure and then answers each part
//! from that data, so expensive work done for part 1 can be reused by part 2.
//!
//! # Overview
//!
//! - [`AocParser`] turns raw input text into the solver's shared data
//! - [`PartSolver<N>`] answers part `N` from the shared data
//! - [`Solver`] dispatches a runtime part number to the right `PartSolver`
//!   (usually generated with `#[derive(AocSolver)]`)
//! - [`RegistryBuilder`] / [`SolverRegistry`] map `(year, day)` to solver
//!   factories, optionally discovered through [`SolverPlugin`]s
//!
//! # Quick Example
//!
//! ```
//! use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, RegistryBuilder, SolveError};
//!
//! #[derive(AocSolver)]
//! #[aoc_solver(max_parts = 2)]
//! struct WallCounter;
//!
//! impl AocParser for WallCounter {
//!     type SharedData<'a> = Vec<&'a str>;
//!
//!     fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
//!         Ok(input.lines().collect())
//!     }
//! }
//!
//! impl PartSolver<1> for WallCounter {
//!     fn solve(rows: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(rows.iter().map(|r| r.matches('#').count()).sum::<usize>().to_string())
//!     }
//! }
//!
//! impl PartSolver<2> for WallCounter {
//!     fn solve(rows: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(rows.len().to_string())
//!     }
//! }
//!
//! let registry = RegistryBuilder::new()
//!     .register_solver::<WallCounter>(2024, 16)
//!     .unwrap()
//!     .build();
//!
//! let mut solver = registry.create_solver(2024, 16, "#.#\n.#.").unwrap();
//! assert_eq!(solver.solve(1).unwrap(), "3");
//! assert_eq!(solver.solve(2).unwrap(), "2");
//! ```
//!
//! # Plugin System
//!
//! `#[derive(AutoRegisterSolver)]` submits a [`SolverPlugin`] through
//! `inventory`, and [`RegistryBuilder::register_all_plugins`] picks every
//! submitted plugin up at runtime:
//!
//! ```ignore
//! #[derive(AocSolver, AutoRegisterSolver)]
//! #[aoc_solver(max_parts = 2)]
//! #[aoc(year = 2024, day = 16, tags = ["grid", "search"])]
//! pub struct Solver;
//! ```

mod error;
mod instance;
mod registry;
mod solver;

pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolverInstance};
pub use registry::{
    BASE_YEAR, DAYS_PER_YEAR, MAX_YEARS, RegisterableSolver, RegistryBuilder, SolverFactory,
    SolverPlugin, SolverRegistry,
};
pub use solver::{AocParser, PartSolver, Solver, SolverExt};

// Re-export inventory for use by the derive macro
pub use inventory;

pub use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
