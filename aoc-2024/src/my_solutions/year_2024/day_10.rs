//! Day 10: Hoof It

use std::collections::HashSet;

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::{Direction, Grid, Position};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 10, tags = ["graph"])]
pub struct Solver;

const TRAILHEAD: u8 = 0;
const SUMMIT: u8 = 9;

/// What a single trailhead leads to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Trails {
    /// Distinct summits reachable.
    pub score: usize,
    /// Distinct hiking trails, i.e. paths, ending on any summit.
    pub rating: usize,
}

#[derive(Debug)]
pub struct SharedData {
    map: Grid<u8>,
    totals: Option<Trails>,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let map = Grid::parse_with(input, |c| c.to_digit(10).and_then(|d| u8::try_from(d).ok()))
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))?;
        Ok(SharedData { map, totals: None })
    }
}

/// Follow every uphill-by-one path from `head`.
pub fn explore(map: &Grid<u8>, head: Position) -> Trails {
    let mut summits = HashSet::new();
    let mut rating = 0;
    let mut stack = vec![(head, TRAILHEAD)];
    while let Some((position, height)) = stack.pop() {
        if height == SUMMIT {
            summits.insert(position);
            rating += 1;
            continue;
        }
        for direction in Direction::ALL {
            let next = position.step(direction);
            if map.get(next) == Some(&(height + 1)) {
                stack.push((next, height + 1));
            }
        }
    }
    Trails {
        score: summits.len(),
        rating,
    }
}

fn totals_once(shared: &mut SharedData) -> Trails {
    let map = &shared.map;
    *shared.totals.get_or_insert_with(|| {
        map.iter()
            .filter(|(_, height)| **height == TRAILHEAD)
            .map(|(head, _)| explore(map, head))
            .fold(Trails::default(), |total, trails| Trails {
                score: total.score + trails.score,
                rating: total.rating + trails.rating,
            })
    })
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(totals_once(shared).score.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(totals_once(shared).rating.to_string())
    }
}
