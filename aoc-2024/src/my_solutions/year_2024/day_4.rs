//! Day 4: Ceres Search

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::{Grid, Position};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 4, tags = ["word-search"])]
pub struct Solver;

const WORD: &[char] = &['X', 'M', 'A', 'S'];

/// Horizontal, vertical and diagonal steps in both senses.
const RAYS: [(i32, i32); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

impl AocParser for Solver {
    type SharedData<'a> = Grid<char>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Grid::parse_with(input, |c| c.is_ascii_uppercase().then_some(c))
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

fn offset(origin: Position, (dx, dy): (i32, i32), distance: i32) -> Position {
    Position::new(origin.x + dx * distance, origin.y + dy * distance)
}

/// Occurrences of `XMAS` starting at `origin`, one per matching ray.
pub fn words_from(grid: &Grid<char>, origin: Position) -> usize {
    RAYS.iter()
        .filter(|&&ray| {
            WORD.iter()
                .zip(0..)
                .all(|(letter, distance)| grid.get(offset(origin, ray, distance)) == Some(letter))
        })
        .count()
}

/// Whether `center` is the `A` of two crossing `MAS` diagonals.
pub fn is_cross(grid: &Grid<char>, center: Position) -> bool {
    if grid.get(center) != Some(&'A') {
        return false;
    }
    let diagonal = |(dx, dy): (i32, i32)| {
        let ends = (
            grid.get(offset(center, (dx, dy), 1)),
            grid.get(offset(center, (-dx, -dy), 1)),
        );
        matches!(ends, (Some(&'M'), Some(&'S')) | (Some(&'S'), Some(&'M')))
    };
    diagonal((1, 1)) && diagonal((1, -1))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let grid: &Grid<char> = shared;
        let count: usize = grid
            .iter()
            .filter(|(_, c)| **c == WORD[0])
            .map(|(origin, _)| words_from(grid, origin))
            .sum();
        Ok(count.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let grid: &Grid<char> = shared;
        let count = grid
            .iter()
            .filter(|(center, _)| is_cross(grid, *center))
            .count();
        Ok(count.to_string())
    }
}
