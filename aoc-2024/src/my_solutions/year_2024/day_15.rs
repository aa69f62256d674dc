//! Day 15: Warehouse Woes

use std::collections::HashSet;

use anyhow::{anyhow, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use log::trace;

use crate::utils::grid::{Direction, Grid, Position};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 15, tags = ["simulation"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Empty,
    Wall,
    Box,
    /// `[`, the left half of a wide box.
    BoxLeft,
    /// `]`, the right half of a wide box.
    BoxRight,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warehouse {
    tiles: Grid<Tile>,
    robot: Position,
}

impl Warehouse {
    /// Read a map of `#`, `.`, `O`, `[`, `]` and exactly one robot `@`.
    pub fn parse(layout: &str) -> anyhow::Result<Self> {
        let chars = Grid::parse_with(layout, |c| "#.O[]@".contains(c).then_some(c))?;
        let mut robots = chars.iter().filter(|(_, c)| **c == '@').map(|(p, _)| p);
        let robot = match (robots.next(), robots.next()) {
            (Some(robot), None) => robot,
            (None, _) => bail!("no robot `@`"),
            (Some(_), Some(_)) => bail!("more than one robot `@`"),
        };
        let tiles = chars.map(|&c| match c {
            '#' => Tile::Wall,
            'O' => Tile::Box,
            '[' => Tile::BoxLeft,
            ']' => Tile::BoxRight,
            _ => Tile::Empty,
        });
        for (position, tile) in tiles.iter() {
            let paired = match tile {
                Tile::BoxLeft => tiles.get(position.step(Direction::Right)) == Some(&Tile::BoxRight),
                Tile::BoxRight => tiles.get(position.step(Direction::Left)) == Some(&Tile::BoxLeft),
                _ => true,
            };
            if !paired {
                bail!("unpaired box half at ({}, {})", position.x, position.y);
            }
        }
        Ok(Self { tiles, robot })
    }

    pub fn robot(&self) -> Position {
        self.robot
    }

    pub fn tile(&self, position: Position) -> Option<Tile> {
        self.tiles.get(position).copied()
    }

    /// Move the robot one step, pushing every box in the way.
    ///
    /// Nothing moves if any pushed box would run into a wall.
    pub fn push(&mut self, direction: Direction) -> bool {
        let mut frontier = vec![self.robot.step(direction)];
        let mut seen = HashSet::new();
        let mut moving = Vec::new();
        while let Some(position) = frontier.pop() {
            if !seen.insert(position) {
                continue;
            }
            let tile = match self.tiles.get(position) {
                None | Some(Tile::Wall) => return false,
                Some(Tile::Empty) => continue,
                Some(&tile) => tile,
            };
            moving.push((position, tile));
            frontier.push(position.step(direction));
            match tile {
                Tile::BoxLeft => frontier.push(position.step(Direction::Right)),
                Tile::BoxRight => frontier.push(position.step(Direction::Left)),
                _ => {}
            }
        }

        for &(position, _) in &moving {
            if let Some(cell) = self.tiles.get_mut(position) {
                *cell = Tile::Empty;
            }
        }
        for &(position, tile) in &moving {
            if let Some(cell) = self.tiles.get_mut(position.step(direction)) {
                *cell = tile;
            }
        }
        self.robot = self.robot.step(direction);
        true
    }

    /// Sum of `100 * y + x` over every box, measured at its left edge.
    pub fn gps_sum(&self) -> i64 {
        self.tiles
            .iter()
            .filter(|(_, tile)| matches!(tile, Tile::Box | Tile::BoxLeft))
            .map(|(p, _)| 100 * i64::from(p.y) + i64::from(p.x))
            .sum()
    }
}

/// Double every column: walls and floor repeat, boxes become `[]`, the
/// robot keeps the left cell.
pub fn widen(layout: &str) -> anyhow::Result<String> {
    let mut wide = String::with_capacity(layout.len() * 2);
    for c in layout.chars() {
        wide.push_str(match c {
            '#' => "##",
            'O' => "[]",
            '.' => "..",
            '@' => "@.",
            '\n' => "\n",
            other => bail!("cannot widen {:?}", other),
        });
    }
    Ok(wide)
}

fn parse_moves<'a>(lines: impl Iterator<Item = &'a str>) -> anyhow::Result<Vec<Direction>> {
    lines
        .flat_map(str::chars)
        .filter(|c| !c.is_whitespace())
        .map(|c| match c {
            '^' => Ok(Direction::Up),
            '>' => Ok(Direction::Right),
            'v' => Ok(Direction::Down),
            '<' => Ok(Direction::Left),
            other => Err(anyhow!("unknown move {:?}", other)),
        })
        .collect()
}

#[derive(Debug)]
pub struct SharedData {
    narrow: Warehouse,
    wide: Warehouse,
    moves: Vec<Direction>,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut lines = input.lines().map(|line| line.trim_end_matches('\r'));
        let layout = lines
            .by_ref()
            .take_while(|line| !line.trim().is_empty())
            .collect::<Vec<_>>()
            .join("\n");
        if layout.is_empty() {
            return Err(ParseError::MissingData("no warehouse map".to_string()));
        }
        let moves = parse_moves(lines).map_err(|e| ParseError::InvalidFormat(e.to_string()))?;
        let narrow = Warehouse::parse(&layout)
            .map_err(|e| ParseError::InvalidFormat(format!("map: {}", e)))?;
        let wide = widen(&layout)
            .and_then(|wide| Warehouse::parse(&wide))
            .map_err(|e| ParseError::InvalidFormat(format!("wide map: {}", e)))?;
        Ok(SharedData {
            narrow,
            wide,
            moves,
        })
    }
}

fn run(mut warehouse: Warehouse, moves: &[Direction]) -> String {
    let pushed = moves.iter().filter(|&&direction| warehouse.push(direction)).count();
    trace!("robot moved on {} of {} attempts", pushed, moves.len());
    warehouse.gps_sum().to_string()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(run(shared.narrow.clone(), &shared.moves))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(run(shared.wide.clone(), &shared.moves))
    }
}
