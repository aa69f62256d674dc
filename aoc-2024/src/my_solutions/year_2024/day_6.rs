//! Day 6: Guard Gallivant

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use log::debug;
use thiserror::Error;

use crate::utils::grid::{Direction, Grid, Marks, Position};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 6, tags = ["simulation"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("the guard never leaves the lab")]
pub struct GuardLoops;

/// How a patrol ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patrol {
    /// Distinct cells in the order they were first entered, start included.
    Exits(Vec<Position>),
    /// The guard came back to a cell facing a way it already faced there.
    Loops,
}

#[derive(Debug)]
pub struct SharedData {
    lab: Grid<char>,
    start: Position,
    path: Option<Vec<Position>>,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let lab = Grid::parse_with(input, |c| matches!(c, '.' | '#' | '^').then_some(c))
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))?;
        let start = {
            let mut guards = lab.iter().filter(|(_, c)| **c == '^').map(|(p, _)| p);
            match (guards.next(), guards.next()) {
                (Some(start), None) => start,
                (None, _) => return Err(ParseError::MissingData("no guard `^`".to_string())),
                (Some(_), Some(_)) => {
                    return Err(ParseError::InvalidFormat("more than one guard".to_string()));
                }
            }
        };
        Ok(SharedData {
            lab,
            start,
            path: None,
        })
    }
}

/// Walk from `start` facing up, turning right at every obstacle, until the
/// guard steps off the map or repeats a state. `extra` is one more obstacle.
pub fn patrol(lab: &Grid<char>, start: Position, extra: Option<Position>) -> Patrol {
    let mut faced: [Marks; 4] = std::array::from_fn(|_| Marks::for_grid(lab));
    let mut entered = Marks::for_grid(lab);
    let mut path = Vec::new();
    let (mut position, mut heading) = (start, Direction::Up);

    loop {
        if !faced[heading as usize].mark(position) {
            return Patrol::Loops;
        }
        if entered.mark(position) {
            path.push(position);
        }
        let ahead = position.step(heading);
        match lab.get(ahead) {
            None => return Patrol::Exits(path),
            Some('#') => heading = heading.turn_right(),
            Some(_) if Some(ahead) == extra => heading = heading.turn_right(),
            Some(_) => position = ahead,
        }
    }
}

fn path_once(shared: &mut SharedData) -> Result<&[Position], SolveError> {
    let path = match shared.path.take() {
        Some(path) => path,
        None => match patrol(&shared.lab, shared.start, None) {
            Patrol::Exits(path) => path,
            Patrol::Loops => return Err(SolveError::SolveFailed(Box::new(GuardLoops))),
        },
    };
    Ok(shared.path.insert(path))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(path_once(shared)?.len().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        path_once(shared)?;
        let SharedData { lab, start, path } = shared;
        let candidates = path.as_deref().unwrap_or_default();
        // Only cells on the unobstructed route can change the patrol.
        let loops = candidates
            .iter()
            .filter(|&&cell| cell != *start)
            .filter(|&&cell| patrol(lab, *start, Some(cell)) == Patrol::Loops)
            .count();
        debug!("{} of {} obstruction spots loop the guard", loops, candidates.len());
        Ok(loops.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "\
....#.....
.........#
..........
..#.......
.......#..
..........
.#..^.....
........#.
#.........
......#...
";

    #[test]
    fn test_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "41");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "6");
    }

    #[test]
    fn test_part2_without_part1() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "6");
    }

    #[test]
    fn test_straight_exit() {
        let shared = Solver::parse(".\n.\n^").unwrap();
        assert_eq!(
            patrol(&shared.lab, shared.start, None),
            Patrol::Exits(vec![
                Position::new(0, 2),
                Position::new(0, 1),
                Position::new(0, 0)
            ])
        );
    }

    #[test]
    fn test_boxed_in_guard_loops() {
        let mut shared = Solver::parse(".#..\n...#\n#^..\n..#.").unwrap();
        assert_eq!(patrol(&shared.lab, shared.start, None), Patrol::Loops);
        assert!(matches!(
            Solver::solve_part(&mut shared, 1),
            Err(SolveError::SolveFailed(_))
        ));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(Solver::parse("..\n.."), Err(ParseError::MissingData(_))));
        assert!(matches!(Solver::parse("^.\n.^"), Err(ParseError::InvalidFormat(_))));
        assert!(matches!(Solver::parse("^.\n.x"), Err(ParseError::InvalidFormat(_))));
    }
}
