//! Day 8: Resonant Collinearity

use std::collections::{BTreeMap, HashSet};

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::{Grid, Position};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 8, tags = ["geometry"])]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData {
    map: Grid<char>,
    /// Antenna positions per frequency, row by row.
    antennas: BTreeMap<char, Vec<Position>>,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let map = Grid::parse_with(input, |c| (c == '.' || c.is_ascii_alphanumeric()).then_some(c))
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))?;
        let mut antennas: BTreeMap<char, Vec<Position>> = BTreeMap::new();
        for (position, &frequency) in map.iter() {
            if frequency != '.' {
                antennas.entry(frequency).or_default().push(position);
            }
        }
        Ok(SharedData { map, antennas })
    }
}

fn gcd(a: i32, b: i32) -> i32 {
    let (mut a, mut b) = (a.abs(), b.abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Every ordered pair of distinct antennas sharing a frequency.
fn pairs(antennas: &BTreeMap<char, Vec<Position>>) -> impl Iterator<Item = (Position, Position)> + '_ {
    antennas.values().flat_map(|group| {
        group.iter().enumerate().flat_map(move |(i, &a)| {
            group
                .iter()
                .enumerate()
                .filter(move |&(j, _)| j != i)
                .map(move |(_, &b)| (a, b))
        })
    })
}

/// Antinodes at twice the distance, one beyond each antenna of a pair.
pub fn antinodes(shared: &SharedData) -> HashSet<Position> {
    pairs(&shared.antennas)
        .map(|(a, b)| Position::new(2 * b.x - a.x, 2 * b.y - a.y))
        .filter(|&p| shared.map.get(p).is_some())
        .collect()
}

/// Every grid point on a line through two same-frequency antennas.
pub fn resonant_antinodes(shared: &SharedData) -> HashSet<Position> {
    let mut found = HashSet::new();
    for (a, b) in pairs(&shared.antennas) {
        let (dx, dy) = (b.x - a.x, b.y - a.y);
        let g = gcd(dx, dy);
        let (dx, dy) = (dx / g, dy / g);
        let mut p = a;
        while shared.map.get(p).is_some() {
            found.insert(p);
            p = Position::new(p.x + dx, p.y + dy);
        }
    }
    found
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(antinodes(shared).len().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(resonant_antinodes(shared).len().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "\
............
........0...
.....0......
.......0....
....0.......
......A.....
............
............
........A...
.........A..
............
............
";

    #[test]
    fn test_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "14");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "34");
    }

    #[test]
    fn test_antinode_on_antenna_counts() {
        // The `b` pair projects onto the `a` antenna at (4, 0).
        let shared = Solver::parse("....a\n.....\n..b..\n.....\nb....").unwrap();
        assert_eq!(antinodes(&shared), HashSet::from([Position::new(4, 0)]));
    }

    #[test]
    fn test_resonance_covers_every_point_in_line() {
        let shared = Solver::parse("x.x..").unwrap();
        assert_eq!(
            resonant_antinodes(&shared),
            (0..5).map(|x| Position::new(x, 0)).collect::<HashSet<_>>()
        );
        let shared = Solver::parse("a....\n.....\n..a..\n.....\n.....").unwrap();
        assert_eq!(
            resonant_antinodes(&shared),
            (0..5).map(|i| Position::new(i, i)).collect::<HashSet<_>>()
        );
    }

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(4, -6), 2);
        assert_eq!(gcd(0, -3), 3);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(Solver::parse("..\n.!"), Err(ParseError::InvalidFormat(_))));
    }
}
