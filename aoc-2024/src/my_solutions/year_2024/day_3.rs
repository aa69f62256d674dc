//! Day 3: Mull It Over

use std::sync::LazyLock;

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use regex::Regex;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 3, tags = ["regex"])]
pub struct Solver;

static INSTRUCTION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"mul\((\d{1,3}),(\d{1,3})\)|do\(\)|don't\(\)").unwrap());

/// A recognised instruction in the corrupted memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    Mul(u64, u64),
    Do,
    Dont,
}

/// Every well-formed instruction, in order of appearance.
pub fn instructions(memory: &str) -> impl Iterator<Item = Instruction> + '_ {
    INSTRUCTION_REGEX.captures_iter(memory).filter_map(|caps| {
        match caps.get(0).map(|m| m.as_str()) {
            Some("do()") => Some(Instruction::Do),
            Some("don't()") => Some(Instruction::Dont),
            _ => {
                let left = caps.get(1)?.as_str().parse().ok()?;
                let right = caps.get(2)?.as_str().parse().ok()?;
                Some(Instruction::Mul(left, right))
            }
        }
    })
}

impl AocParser for Solver {
    /// The memory is scanned in place, so the input is borrowed as is.
    type SharedData<'a> = &'a str;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        if input.trim().is_empty() {
            return Err(ParseError::MissingData("empty memory".to_string()));
        }
        Ok(input)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let sum: u64 = instructions(*shared)
            .map(|instruction| match instruction {
                Instruction::Mul(left, right) => left * right,
                Instruction::Do | Instruction::Dont => 0,
            })
            .sum();
        Ok(sum.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (sum, _) = instructions(*shared).fold((0u64, true), |(sum, enabled), instruction| {
            match instruction {
                Instruction::Mul(left, right) if enabled => (sum + left * right, enabled),
                Instruction::Mul(..) => (sum, enabled),
                Instruction::Do => (sum, true),
                Instruction::Dont => (sum, false),
            }
        });
        Ok(sum.to_string())
    }
}
