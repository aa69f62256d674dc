//! Day 13: Claw Contraption

use std::sync::LazyLock;

use anyhow::{Context, anyhow};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use regex::Regex;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 13, tags = ["linear-algebra"])]
pub struct Solver;

/// Both prize coordinates move this far for part 2.
pub const PRIZE_SHIFT: i64 = 10_000_000_000_000;

const A_PRESS_COST: i128 = 3;
const B_PRESS_COST: i128 = 1;

static LINE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(Button A|Button B|Prize): X[+=](\d+), Y[+=](\d+)$").unwrap()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Machine {
    pub a: (i64, i64),
    pub b: (i64, i64),
    pub prize: (i64, i64),
}

impl Machine {
    /// Exact `(a_presses, b_presses)` reaching the prize, if there is one.
    ///
    /// The buttons are treated as a 2x2 linear system solved in `i128`;
    /// collinear buttons (zero determinant) count as unwinnable.
    pub fn presses(&self) -> Option<(i64, i64)> {
        let wide = |(x, y): (i64, i64)| (i128::from(x), i128::from(y));
        let (a, b, prize) = (wide(self.a), wide(self.b), wide(self.prize));

        let det = a.0 * b.1 - a.1 * b.0;
        if det == 0 {
            return None;
        }
        let det_a = prize.0 * b.1 - prize.1 * b.0;
        let det_b = a.0 * prize.1 - a.1 * prize.0;
        if det_a % det != 0 || det_b % det != 0 {
            return None;
        }
        let presses_a = i64::try_from(det_a / det).ok()?;
        let presses_b = i64::try_from(det_b / det).ok()?;
        (presses_a >= 0 && presses_b >= 0).then_some((presses_a, presses_b))
    }

    pub fn cost(&self) -> Option<i128> {
        self.presses().map(|(a, b)| {
            i128::from(a) * A_PRESS_COST + i128::from(b) * B_PRESS_COST
        })
    }

    /// The same machine with both prize coordinates moved by `by`, or
    /// `None` if a coordinate leaves `i64`.
    pub fn shifted(&self, by: i64) -> Option<Self> {
        Some(Self {
            prize: (self.prize.0.checked_add(by)?, self.prize.1.checked_add(by)?),
            ..*self
        })
    }
}

#[derive(Debug)]
pub struct SharedData {
    machines: Vec<Machine>,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let lines: Vec<(usize, &str)> = input
            .lines()
            .map(str::trim)
            .enumerate()
            .filter(|(_, line)| !line.is_empty())
            .collect();
        if lines.is_empty() {
            return Err(ParseError::MissingData("no machines".to_string()));
        }
        if lines.len() % 3 != 0 {
            return Err(ParseError::MissingData(format!(
                "{} lines do not form whole machines",
                lines.len()
            )));
        }

        lines
            .chunks_exact(3)
            .map(|block| {
                Ok(Machine {
                    a: read_pair(block[0], "Button A")?,
                    b: read_pair(block[1], "Button B")?,
                    prize: read_pair(block[2], "Prize")?,
                })
            })
            .collect::<anyhow::Result<Vec<_>>>()
            .map(|machines| SharedData { machines })
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

/// `(x, y)` of a `label: X+x, Y+y` or `label: X=x, Y=y` line.
fn read_pair((line_idx, line): (usize, &str), label: &str) -> anyhow::Result<(i64, i64)> {
    let caps = LINE_REGEX
        .captures(line)
        .ok_or_else(|| anyhow!("(line {}) unrecognized {:?}", line_idx + 1, line))?;
    if &caps[1] != label {
        return Err(anyhow!(
            "(line {}) expected {:?}, found {:?}",
            line_idx + 1,
            label,
            &caps[1]
        ));
    }
    let x = caps[2]
        .parse()
        .with_context(|| format!("(line {}) X out of range", line_idx + 1))?;
    let y = caps[3]
        .parse()
        .with_context(|| format!("(line {}) Y out of range", line_idx + 1))?;
    Ok((x, y))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(total_cost(shared.machines.iter().copied()).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        // a prize pushed past i64 cannot be won
        let far = shared.machines.iter().filter_map(|m| m.shifted(PRIZE_SHIFT));
        Ok(total_cost(far).to_string())
    }
}

fn total_cost(machines: impl Iterator<Item = Machine>) -> i128 {
    machines.filter_map(|machine| machine.cost()).sum()
}
