//! Advent of Code 2024 puzzle solutions with automatic registration
//!
//! Each day is a unit `Solver` deriving `AocSolver` and
//! `AutoRegisterSolver`, so linking this crate is enough for
//! `RegistryBuilder::register_all_plugins` to find it.
//!
//! ```
//! use aoc_solver::RegistryBuilder;
//!
//! let registry = RegistryBuilder::new()
//!     .register_all_plugins()
//!     .unwrap()
//!     .build();
//! # let _ = aoc_2024::my_solutions::year_2024::day_16::maze::solve_maze;
//! let mut maze = registry.create_solver(2024, 16, "S..E").unwrap();
//! assert_eq!(maze.solve(1).unwrap(), "3");
//! assert_eq!(maze.solve(2).unwrap(), "4");
//! ```

pub mod utils;

#[cfg(feature = "my-solutions")]
pub mod my_solutions;
