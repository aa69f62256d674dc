//! Day 7: Bridge Repair

use std::str::FromStr;

use anyhow::Context;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 7, tags = ["search"])]
pub struct Solver;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Equation {
    pub target: u64,
    pub operands: Vec<u64>,
}

/// `10^digits(n)`, the factor `n` shifts its left neighbour by when concatenated.
fn digit_shift(n: u64) -> u64 {
    10u64.pow(n.checked_ilog10().unwrap_or(0) + 1)
}

impl Equation {
    /// Whether some left-to-right mix of `+`, `*` and, with `concat`, `||`
    /// evaluates to the target.
    ///
    /// Works backwards from the target: each operator is undone against the
    /// last operand, pruning branches that cannot divide or strip cleanly.
    pub fn is_solvable(&self, concat: bool) -> bool {
        let Some((&first, rest)) = self.operands.split_first() else {
            return false;
        };
        let mut stack = vec![(self.target, rest.len())];
        while let Some((value, len)) = stack.pop() {
            if len == 0 {
                if value == first {
                    return true;
                }
                continue;
            }
            let operand = rest[len - 1];
            if operand == 0 && value == 0 {
                // Multiplying by zero reaches zero from any prefix.
                return true;
            }
            if let Some(before) = value.checked_sub(operand) {
                stack.push((before, len - 1));
            }
            if operand != 0 && value % operand == 0 {
                stack.push((value / operand, len - 1));
            }
            if concat {
                let shift = digit_shift(operand);
                if value % shift == operand && value >= operand {
                    stack.push((value / shift, len - 1));
                }
            }
        }
        false
    }
}

impl FromStr for Equation {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let (target, operands) = line.split_once(':').context("expected `target: operands`")?;
        let operands = operands
            .split_whitespace()
            .map(u64::from_str)
            .collect::<Result<Vec<_>, _>>()?;
        if operands.is_empty() {
            anyhow::bail!("no operands");
        }
        Ok(Self {
            target: target.trim().parse()?,
            operands,
        })
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Equation>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let equations = input
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(line_idx, line)| {
                line.parse::<Equation>()
                    .with_context(|| format!("(line {})", line_idx + 1))
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ParseError::InvalidFormat(format!("{:#}", e)))?;
        if equations.is_empty() {
            return Err(ParseError::MissingData("no equations".to_string()));
        }
        Ok(equations)
    }
}

fn calibration(equations: &[Equation], concat: bool) -> u64 {
    equations
        .iter()
        .filter(|equation| equation.is_solvable(concat))
        .map(|equation| equation.target)
        .sum()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(calibration(shared, false).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(calibration(shared, true).to_string())
    }
}
