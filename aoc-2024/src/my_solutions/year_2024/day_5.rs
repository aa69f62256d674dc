//! Day 5: Print Queue

use std::cmp::Ordering;
use std::collections::HashSet;

use anyhow::{Context, anyhow};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 5, tags = ["sorting"])]
pub struct Solver;

/// `X|Y` rules: page `X` must be printed before page `Y`.
#[derive(Debug, Default)]
pub struct Rules(HashSet<(u32, u32)>);

impl Rules {
    pub fn compare(&self, a: u32, b: u32) -> Ordering {
        if self.0.contains(&(a, b)) {
            Ordering::Less
        } else if self.0.contains(&(b, a)) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    /// No pair of pages in `update` breaks a rule.
    pub fn is_ordered(&self, update: &[u32]) -> bool {
        update
            .iter()
            .enumerate()
            .all(|(i, &later)| update[..i].iter().all(|&earlier| !self.0.contains(&(later, earlier))))
    }
}

#[derive(Debug)]
pub struct SharedData {
    rules: Rules,
    updates: Vec<Vec<u32>>,
}

fn middle(update: &[u32]) -> u64 {
    update.get(update.len() / 2).copied().map_or(0, u64::from)
}

fn parse_rule(line: &str) -> anyhow::Result<(u32, u32)> {
    let (before, after) = line.split_once('|').context("expected `X|Y`")?;
    Ok((before.trim().parse()?, after.trim().parse()?))
}

fn parse_update(line: &str) -> anyhow::Result<Vec<u32>> {
    let pages = line
        .split(',')
        .map(|page| page.trim().parse::<u32>())
        .collect::<Result<Vec<_>, _>>()?;
    if pages.len() % 2 == 0 {
        return Err(anyhow!("update has no middle page"));
    }
    Ok(pages)
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut rules = Rules::default();
        let mut updates = Vec::new();
        for (line_idx, line) in input.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let parsed = if line.contains('|') {
                parse_rule(line).map(|rule| {
                    rules.0.insert(rule);
                })
            } else {
                parse_update(line).map(|update| updates.push(update))
            };
            parsed.map_err(|e| ParseError::InvalidFormat(format!("(line {}) {}", line_idx + 1, e)))?;
        }
        if updates.is_empty() {
            return Err(ParseError::MissingData("no updates".to_string()));
        }
        Ok(SharedData { rules, updates })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let sum: u64 = shared
            .updates
            .iter()
            .filter(|update| shared.rules.is_ordered(update))
            .map(|update| middle(update))
            .sum();
        Ok(sum.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let rules = &shared.rules;
        let sum: u64 = shared
            .updates
            .iter()
            .filter(|update| !rules.is_ordered(update))
            .map(|update| {
                let mut fixed = update.clone();
                fixed.sort_by(|&a, &b| rules.compare(a, b));
                middle(&fixed)
            })
            .sum();
        Ok(sum.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "\
47|53
97|13
97|61
97|47
75|29
61|13
75|53
29|13
97|29
53|29
61|53
97|53
61|29
47|13
75|47
97|75
47|61
75|61
47|29
75|13
53|13

75,47,61,53,29
97,61,53,29,13
75,29,13
75,97,47,61,53
61,13,29
97,13,75,29,47
";

    #[test]
    fn test_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "143");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "123");
    }

    #[test]
    fn test_rule_order() {
        let shared = Solver::parse(EXAMPLE).unwrap();
        assert!(shared.rules.is_ordered(&[75, 47, 61, 53, 29]));
        assert!(!shared.rules.is_ordered(&[61, 13, 29]));
        assert_eq!(shared.rules.compare(29, 13), Ordering::Less);
        assert_eq!(shared.rules.compare(13, 29), Ordering::Greater);
        assert_eq!(shared.rules.compare(1, 2), Ordering::Equal);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            Solver::parse("1|2\n\n1,x,3"),
            Err(ParseError::InvalidFormat(msg)) if msg.starts_with("(line 3)")
        ));
        assert!(matches!(
            Solver::parse("1|2\n\n1,2"),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(Solver::parse("1|2\n"), Err(ParseError::MissingData(_))));
    }
}
