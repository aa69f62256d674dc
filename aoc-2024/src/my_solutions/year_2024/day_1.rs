//! Day 1: Historian Hysteria

use std::collections::HashMap;
use std::str::FromStr;

use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 1, tags = ["sorting"])]
pub struct Solver;

/// The two location-id columns.
#[derive(Debug)]
pub struct SharedData {
    left: Vec<u64>,
    right: Vec<u64>,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut data = SharedData {
            left: Vec::new(),
            right: Vec::new(),
        };
        for (line_idx, line) in input.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let (left, right) = parse_pair(line).map_err(|e| {
                ParseError::InvalidFormat(format!("(line {}) {}", line_idx + 1, e))
            })?;
            data.left.push(left);
            data.right.push(right);
        }
        if data.left.is_empty() {
            return Err(ParseError::MissingData("no location ids".to_string()));
        }
        Ok(data)
    }
}

fn parse_pair(line: &str) -> anyhow::Result<(u64, u64)> {
    let mut ids = line.split_whitespace().map(u64::from_str);
    match (ids.next(), ids.next(), ids.next()) {
        (Some(left), Some(right), None) => Ok((left?, right?)),
        _ => Err(anyhow!("expected two ids, got {:?}", line)),
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut left = shared.left.clone();
        let mut right = shared.right.clone();
        left.sort_unstable();
        right.sort_unstable();
        let distance: u64 = left.iter().zip(&right).map(|(l, r)| l.abs_diff(*r)).sum();
        Ok(distance.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut counts: HashMap<u64, u64> = HashMap::new();
        for &id in &shared.right {
            *counts.entry(id).or_default() += 1;
        }
        let similarity: u64 = shared
            .left
            .iter()
            .map(|id| id * counts.get(id).copied().unwrap_or(0))
            .sum();
        Ok(similarity.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "\
3   4
4   3
2   5
1   3
3   9
3   3
";

    #[test]
    fn test_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "11");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "31");
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            Solver::parse("3 4\n4 x\n"),
            Err(ParseError::InvalidFormat(msg)) if msg.starts_with("(line 2)")
        ));
        assert!(matches!(Solver::parse("3 4 5"), Err(ParseError::InvalidFormat(_))));
        assert!(matches!(Solver::parse("\n\n"), Err(ParseError::MissingData(_))));
    }
}
