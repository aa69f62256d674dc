//! Day 14: Restroom Redoubt

use std::collections::HashSet;
use std::sync::LazyLock;

use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use log::debug;
use regex::Regex;
use thiserror::Error;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 14, tags = ["simulation"])]
pub struct Solver;

const SAFETY_SECONDS: i64 = 100;

static ROBOT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^p=(-?\d+),(-?\d+) v=(-?\d+),(-?\d+)$").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SpaceError {
    #[error("space must be at least 1x1, got {width}x{height}")]
    Empty { width: i64, height: i64 },
    #[error("robots never stand on distinct tiles within one cycle")]
    NoDistinctLayout,
}

/// The wrapping floor the robots patrol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Space {
    width: i64,
    height: i64,
}

impl Default for Space {
    fn default() -> Self {
        Self {
            width: 101,
            height: 103,
        }
    }
}

impl Space {
    pub fn new(width: i64, height: i64) -> Result<Self, SpaceError> {
        if width < 1 || height < 1 {
            return Err(SpaceError::Empty { width, height });
        }
        Ok(Self { width, height })
    }

    /// Where `robot` stands after `seconds`, wrapped onto the floor.
    ///
    /// Every factor is reduced modulo the floor size and multiplied in `i128`,
    /// so any time or velocity stays in range.
    pub fn position_after(&self, robot: &Robot, seconds: i64) -> (i64, i64) {
        let axis = |p: i64, v: i64, size: i64| {
            let reduce = |n: i64| i128::from(n.rem_euclid(size));
            let wrapped = (reduce(p) + reduce(v) * reduce(seconds)).rem_euclid(i128::from(size));
            i64::try_from(wrapped).unwrap_or_default()
        };
        (
            axis(robot.position.0, robot.velocity.0, self.width),
            axis(robot.position.1, robot.velocity.1, self.height),
        )
    }

    /// Product of robot counts per quadrant; the middle row and column count for none.
    pub fn safety_factor(&self, robots: &[Robot], seconds: i64) -> u64 {
        let (mid_x, mid_y) = (self.width / 2, self.height / 2);
        let mut quadrants = [0u64; 4];
        for robot in robots {
            let (x, y) = self.position_after(robot, seconds);
            if (self.width % 2 == 1 && x == mid_x) || (self.height % 2 == 1 && y == mid_y) {
                continue;
            }
            let index = usize::from(x >= mid_x) + 2 * usize::from(y >= mid_y);
            quadrants[index] += 1;
        }
        quadrants.iter().product()
    }

    /// First second at which no two robots share a tile.
    pub fn first_distinct_layout(&self, robots: &[Robot]) -> Option<i64> {
        let cycle = self.width.saturating_mul(self.height);
        (1..=cycle).find(|&seconds| {
            let mut seen = HashSet::with_capacity(robots.len());
            robots
                .iter()
                .all(|robot| seen.insert(self.position_after(robot, seconds)))
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Robot {
    pub position: (i64, i64),
    pub velocity: (i64, i64),
}

#[derive(Debug)]
pub struct SharedData {
    space: Space,
    robots: Vec<Robot>,
}

impl SharedData {
    /// Re-home the robots on a floor other than the default one.
    pub fn with_space(self, space: Space) -> Self {
        Self { space, ..self }
    }
}

fn parse_robot(line: &str) -> anyhow::Result<Robot> {
    let caps = ROBOT_REGEX
        .captures(line)
        .ok_or_else(|| anyhow!("expected `p=X,Y v=DX,DY`, got {:?}", line))?;
    let number = |i: usize| -> anyhow::Result<i64> { Ok(caps[i].parse()?) };
    Ok(Robot {
        position: (number(1)?, number(2)?),
        velocity: (number(3)?, number(4)?),
    })
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let robots = input
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(line_idx, line)| {
                parse_robot(line.trim())
                    .map_err(|e| ParseError::InvalidFormat(format!("(line {}) {}", line_idx + 1, e)))
            })
            .collect::<Result<Vec<_>, _>>()?;
        if robots.is_empty() {
            return Err(ParseError::MissingData("no robots".to_string()));
        }
        Ok(SharedData {
            space: Space::default(),
            robots,
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared
            .space
            .safety_factor(&shared.robots, SAFETY_SECONDS)
            .to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let seconds = shared
            .space
            .first_distinct_layout(&shared.robots)
            .ok_or_else(|| SolveError::SolveFailed(Box::new(SpaceError::NoDistinctLayout)))?;
        debug!("{} robots spread out after {}s", shared.robots.len(), seconds);
        Ok(seconds.to_string())
    }
}
