//! Day 2: Red-Nosed Reports

use std::str::FromStr;

use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 2, tags = ["validation"])]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData {
    reports: Vec<Vec<i64>>,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let reports = input
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(line_idx, line)| {
                line.split_whitespace()
                    .map(i64::from_str)
                    .collect::<Result<Vec<_>, _>>()
                    .map_err(|e| anyhow!("(line {}) {}", line_idx + 1, e))
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))?;
        if reports.is_empty() {
            return Err(ParseError::MissingData("no reports".to_string()));
        }
        Ok(SharedData { reports })
    }
}

/// Strictly monotonic with every step between 1 and 3.
pub fn is_safe(levels: impl IntoIterator<Item = i64>) -> bool {
    let mut levels = levels.into_iter();
    let Some(mut previous) = levels.next() else {
        return true;
    };
    let mut trend = None;
    for level in levels {
        let step = level - previous;
        if !(1..=3).contains(&step.abs()) {
            return false;
        }
        if *trend.get_or_insert(step.signum()) != step.signum() {
            return false;
        }
        previous = level;
    }
    true
}

/// Safe as is, or after removing any single level.
pub fn is_safe_dampened(report: &[i64]) -> bool {
    is_safe(report.iter().copied())
        || (0..report.len()).any(|skip| {
            is_safe(
                report
                    .iter()
                    .enumerate()
                    .filter(|&(idx, _)| idx != skip)
                    .map(|(_, &level)| level),
            )
        })
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let safe = shared
            .reports
            .iter()
            .filter(|report| is_safe(report.iter().copied()))
            .count();
        Ok(safe.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let safe = shared
            .reports
            .iter()
            .filter(|report| is_safe_dampened(report))
            .count();
        Ok(safe.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "\
7 6 4 2 1
1 2 7 8 9
9 7 6 2 1
1 3 2 4 5
8 6 4 4 1
1 3 6 7 9
";

    #[test]
    fn test_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "2");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "4");
    }

    #[test]
    fn test_is_safe() {
        assert!(is_safe([7, 6, 4, 2, 1]));
        assert!(is_safe([5]));
        assert!(!is_safe([1, 2, 7]));
        assert!(!is_safe([1, 3, 2]));
        assert!(!is_safe([4, 4]));
    }

    #[test]
    fn test_dampener_can_drop_first_level() {
        assert!(!is_safe([9, 1, 2, 3]));
        assert!(is_safe_dampened(&[9, 1, 2, 3]));
        assert!(!is_safe_dampened(&[1, 2, 7, 8, 9]));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(Solver::parse("1 2 x"), Err(ParseError::InvalidFormat(_))));
        assert!(matches!(Solver::parse(""), Err(ParseError::MissingData(_))));
    }
}
