//! Helpers shared by the daily solvers.

pub mod dp_cache;
pub mod grid;
