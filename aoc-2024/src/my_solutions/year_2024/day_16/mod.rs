//! Day 16: Reindeer Maze

pub mod maze;

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use maze::{Malformed, MazeError, MazeGraph, MazeSolution};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 16, tags = ["grid", "shortest-path"])]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData {
    maze: MazeGraph,
    solution: Option<Result<MazeSolution, MazeError>>,
}

impl From<Malformed> for ParseError {
    fn from(value: Malformed) -> Self {
        match value {
            Malformed::Missing(_) => ParseError::MissingData(value.to_string()),
            _ => ParseError::InvalidFormat(value.to_string()),
        }
    }
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let maze = MazeGraph::parse(input).map_err(|e| match e {
            MazeError::MalformedGrid(malformed) => ParseError::from(malformed),
            MazeError::Unreachable => ParseError::Other(e.to_string()),
        })?;
        Ok(SharedData {
            maze,
            solution: None,
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(solve_once_for_both(shared)?.minimal_cost.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(solve_once_for_both(shared)?.optimal_path_tile_count.to_string())
    }
}

fn solve_once_for_both(shared: &mut SharedData) -> Result<MazeSolution, SolveError> {
    let maze = &shared.maze;
    shared
        .solution
        .get_or_insert_with(|| {
            maze.search().map(|outcome| MazeSolution {
                minimal_cost: outcome.minimal_cost,
                optimal_path_tile_count: outcome.optimal_path_tiles.len(),
            })
        })
        .clone()
        .map_err(|e| SolveError::SolveFailed(Box::new(e)))
}
