//! Day 12: Garden Groups

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::{Direction, Grid, Marks, Position};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 12, tags = ["grid", "flood-fill"])]
pub struct Solver;

/// Measurements of one 4-connected region of a single plant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub plant: char,
    pub area: u64,
    pub perimeter: u64,
    /// Straight fence runs; equal to the number of corners.
    pub sides: u64,
}

#[derive(Debug)]
pub struct SharedData {
    garden: Grid<char>,
    regions: Option<Vec<Region>>,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let garden = Grid::parse_with(input, |c| c.is_ascii_alphabetic().then_some(c))
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))?;
        Ok(SharedData {
            garden,
            regions: None,
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let price: u64 = regions_once(shared)
            .iter()
            .map(|region| region.area * region.perimeter)
            .sum();
        Ok(price.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let price: u64 = regions_once(shared)
            .iter()
            .map(|region| region.area * region.sides)
            .sum();
        Ok(price.to_string())
    }
}

fn regions_once(shared: &mut SharedData) -> &[Region] {
    let garden = &shared.garden;
    shared.regions.get_or_insert_with(|| find_regions(garden))
}

/// Every region of the garden, in order of its first cell row by row.
pub fn find_regions(garden: &Grid<char>) -> Vec<Region> {
    let mut visited = Marks::for_grid(garden);
    let mut regions = Vec::new();
    let mut stack = Vec::new();

    for (origin, &plant) in garden.iter() {
        if !visited.mark(origin) {
            continue;
        }
        let same = |p: Position| garden.get(p) == Some(&plant);
        let mut region = Region {
            plant,
            area: 0,
            perimeter: 0,
            sides: 0,
        };

        stack.push(origin);
        while let Some(cell) = stack.pop() {
            region.area += 1;
            for direction in Direction::ALL {
                let next = cell.step(direction);
                if !same(next) {
                    region.perimeter += 1;
                } else if visited.mark(next) {
                    stack.push(next);
                }
            }
            region.sides += corners(cell, same);
        }

        log::trace!(
            "region {:?} at ({}, {}): area {}, perimeter {}, sides {}",
            plant,
            origin.x,
            origin.y,
            region.area,
            region.perimeter,
            region.sides
        );
        regions.push(region);
    }

    regions
}

/// Corners of a region touching `cell`, checked in each quadrant.
fn corners(cell: Position, same: impl Fn(Position) -> bool) -> u64 {
    Direction::ALL
        .into_iter()
        .filter(|&first| {
            let second = first.turn_right();
            let a = same(cell.step(first));
            let b = same(cell.step(second));
            let diagonal = same(cell.step(first).step(second));
            // outer corner, or inner corner
            (!a && !b) || (a && b && !diagonal)
        })
        .count() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const SMALL: &str = "\
AAAA
BBCD
BBCC
EEEC
";

    const NESTED: &str = "\
OOOOO
OXOXO
OOOOO
OXOXO
OOOOO
";

    const LARGE: &str = "\
RRRRIICCFF
RRRRIICCCF
VVRRRCCFFF
VVRCCCJFFF
VVVVCJJCFE
VVIVCCJJEE
VVIIICJJEE
MIIIIIJJEE
MIIISIJEEE
MMMISSJEEE
";

    const E_SHAPE: &str = "\
EEEEE
EXXXX
EEEEE
EXXXX
EEEEE
";

    const DIAGONAL: &str = "\
AAAAAA
AAABBA
AAABBA
ABBAAA
ABBAAA
AAAAAA
";

    fn answers(input: &str) -> (String, String) {
        let mut shared = Solver::parse(input).unwrap();
        (
            Solver::solve_part(&mut shared, 1).unwrap(),
            Solver::solve_part(&mut shared, 2).unwrap(),
        )
    }

    #[test]
    fn test_small_regions() {
        let garden = Solver::parse(SMALL).unwrap().garden;
        let regions = find_regions(&garden);
        let summary: Vec<_> = regions
            .iter()
            .map(|r| (r.plant, r.area, r.perimeter, r.sides))
            .collect();
        assert_eq!(
            summary,
            vec![
                ('A', 4, 10, 4),
                ('B', 4, 8, 4),
                ('C', 4, 10, 8),
                ('D', 1, 4, 4),
                ('E', 3, 8, 4),
            ]
        );
    }

    #[test]
    fn test_examples() {
        assert_eq!(answers(SMALL), ("140".to_string(), "80".to_string()));
        assert_eq!(answers(NESTED), ("772".to_string(), "436".to_string()));
        assert_eq!(answers(LARGE), ("1930".to_string(), "1206".to_string()));
    }

    #[test]
    fn test_inner_corners() {
        assert_eq!(answers(E_SHAPE).1, "236");
        assert_eq!(answers(DIAGONAL).1, "368");
    }

    #[test]
    fn test_single_plot() {
        assert_eq!(answers("Z"), ("4".to_string(), "4".to_string()));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            Solver::parse("AB\nA"),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            Solver::parse("A1\nAA"),
            Err(ParseError::InvalidFormat(_))
        ));
    }
}
