//! Reindeer maze: shortest path over `(position, heading)` states where
//! turning costs extra, plus the set of tiles on every optimal path.

use std::cmp::Ordering;
use std::collections::hash_map::Entry;
use std::collections::{BinaryHeap, HashMap, HashSet};

use thiserror::Error;

use crate::utils::grid::{Direction, Grid, GridError, Position};

pub type Heading = Direction;

/// Heading of the reindeer on the start tile.
pub const START_HEADING: Heading = Heading::Right;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Wall,
    Start,
    Goal,
}

impl Cell {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(Cell::Empty),
            '#' => Some(Cell::Wall),
            'S' => Some(Cell::Start),
            'E' => Some(Cell::Goal),
            _ => None,
        }
    }
}

/// Why a maze text was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Malformed {
    #[error(transparent)]
    Shape(#[from] GridError),
    #[error("no {0:?} marker")]
    Missing(Cell),
    #[error("{marker:?} marker at ({}, {}) and ({}, {})", .first.x, .first.y, .second.x, .second.y)]
    Duplicate {
        marker: Cell,
        first: Position,
        second: Position,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    #[error("malformed grid: {0}")]
    MalformedGrid(#[from] Malformed),
    #[error("goal is unreachable from start")]
    Unreachable,
}

/// Edge costs of the search. Path costs saturate at `u64::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MazeCosts {
    /// Moving one tile forward
    pub step: u64,
    /// Rotating in place before a step
    pub turn: u64,
}

impl Default for MazeCosts {
    fn default() -> Self {
        Self {
            step: 1,
            turn: 1000,
        }
    }
}

impl MazeCosts {
    #[inline]
    fn edge(&self, from: Heading, to: Heading) -> u64 {
        if from == to {
            self.step
        } else {
            self.turn.saturating_add(self.step)
        }
    }
}

/// Unit of cost labeling: turning has a price, so the same tile reached
/// facing two ways is two different states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SearchState {
    pub position: Position,
    pub heading: Heading,
}

impl SearchState {
    pub const fn new(position: Position, heading: Heading) -> Self {
        Self { position, heading }
    }
}

/// Best known cost of a state and the tiles of every path achieving it.
#[derive(Debug, Clone)]
struct CostRecord {
    cost: u64,
    tiles: HashSet<Position>,
}

/// Min-heap entry ordered by cost only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct QueueEntry {
    cost: u64,
    state: SearchState,
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other.cost.cmp(&self.cost)
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Result of a successful search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    pub minimal_cost: u64,
    /// Every tile lying on at least one minimal-cost path, both ends included.
    pub optimal_path_tiles: HashSet<Position>,
}

/// What a day-runner reports for a maze.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MazeSolution {
    pub minimal_cost: u64,
    pub optimal_path_tile_count: usize,
}

/// An immutable maze with its start and goal extracted.
#[derive(Debug, Clone)]
pub struct MazeGraph {
    grid: Grid<Cell>,
    start: Position,
    goal: Position,
    costs: MazeCosts,
}

impl MazeGraph {
    /// Build a maze from newline-delimited rows of `.`, `#`, `S` and `E`.
    ///
    /// Rows must share one length and exactly one `S` and one `E` must be
    /// present.
    pub fn parse(text: &str) -> Result<Self, MazeError> {
        let grid = Grid::parse_with(text, Cell::from_char).map_err(Malformed::from)?;

        let mut start = None;
        let mut goal = None;
        for (position, &cell) in grid.iter() {
            let slot = match cell {
                Cell::Start => &mut start,
                Cell::Goal => &mut goal,
                Cell::Empty | Cell::Wall => continue,
            };
            if let Some(first) = *slot {
                return Err(Malformed::Duplicate {
                    marker: cell,
                    first,
                    second: position,
                }
                .into());
            }
            *slot = Some(position);
        }

        Ok(Self {
            grid,
            start: start.ok_or(Malformed::Missing(Cell::Start))?,
            goal: goal.ok_or(Malformed::Missing(Cell::Goal))?,
            costs: MazeCosts::default(),
        })
    }

    /// [`parse`](Self::parse) for rows that are already split.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, MazeError> {
        let text = rows.iter().map(|row| row.as_ref()).collect::<Vec<_>>().join("\n");
        Self::parse(&text)
    }

    pub fn with_costs(mut self, costs: MazeCosts) -> Self {
        self.costs = costs;
        self
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn goal(&self) -> Position {
        self.goal
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// The cell at `position`, `None` outside the maze.
    pub fn cell(&self, position: Position) -> Option<Cell> {
        self.grid.get(position).copied()
    }

    /// Append the outgoing edges of `state` to `buf` as `(next, cost)`.
    ///
    /// The goal is terminal and has no edges. Otherwise every in-bounds,
    /// non-wall neighbour is an edge; keeping the heading costs one step,
    /// any other heading costs a turn plus a step.
    pub fn expand(&self, state: SearchState, buf: &mut Vec<(SearchState, u64)>) {
        if state.position == self.goal {
            return;
        }
        for heading in Heading::ALL {
            let next = state.position.step(heading);
            match self.cell(next) {
                None | Some(Cell::Wall) => continue,
                Some(_) => buf.push((
                    SearchState::new(next, heading),
                    self.costs.edge(state.heading, heading),
                )),
            }
        }
    }

    /// Cheapest cost from the start (facing [`START_HEADING`]) to the goal
    /// in any heading, with every tile on any path of that cost.
    ///
    /// Label-correcting: a state's record is replaced only by a strictly
    /// cheaper path; an equally cheap path unions its tiles into the record
    /// and re-queues the state whenever that union grew, so merged tiles
    /// reach every successor.
    pub fn search(&self) -> Result<SearchOutcome, MazeError> {
        let start = SearchState::new(self.start, START_HEADING);
        let mut records: HashMap<SearchState, CostRecord> = HashMap::new();
        records.insert(
            start,
            CostRecord {
                cost: 0,
                tiles: HashSet::from([self.start]),
            },
        );

        let mut queue = BinaryHeap::new();
        queue.push(QueueEntry {
            cost: 0,
            state: start,
        });

        let mut edges = Vec::with_capacity(Heading::ALL.len());
        let mut expansions = 0usize;

        while let Some(QueueEntry { cost, state }) = queue.pop() {
            let tiles = match records.get(&state) {
                Some(record) if record.cost == cost => record.tiles.clone(),
                // superseded by a cheaper path
                _ => continue,
            };
            expansions += 1;

            edges.clear();
            self.expand(state, &mut edges);

            for &(next, edge_cost) in &edges {
                let candidate = cost.saturating_add(edge_cost);
                let requeue = match records.entry(next) {
                    Entry::Vacant(slot) => {
                        let mut next_tiles = tiles.clone();
                        next_tiles.insert(next.position);
                        slot.insert(CostRecord {
                            cost: candidate,
                            tiles: next_tiles,
                        });
                        true
                    }
                    Entry::Occupied(mut slot) => {
                        let record = slot.get_mut();
                        match candidate.cmp(&record.cost) {
                            Ordering::Less => {
                                record.cost = candidate;
                                record.tiles.clone_from(&tiles);
                                record.tiles.insert(next.position);
                                true
                            }
                            Ordering::Equal => {
                                let before = record.tiles.len();
                                record.tiles.extend(tiles.iter().copied());
                                record.tiles.len() > before
                            }
                            Ordering::Greater => false,
                        }
                    }
                };
                if requeue {
                    queue.push(QueueEntry {
                        cost: candidate,
                        state: next,
                    });
                }
            }
        }

        log::debug!(
            "maze {}x{}: {} states labeled, {} expansions",
            self.width(),
            self.height(),
            records.len(),
            expansions
        );

        let at_goal: Vec<&CostRecord> = Heading::ALL
            .iter()
            .filter_map(|&heading| records.get(&SearchState::new(self.goal, heading)))
            .collect();
        let minimal_cost = at_goal
            .iter()
            .map(|record| record.cost)
            .min()
            .ok_or(MazeError::Unreachable)?;
        let optimal_path_tiles = at_goal
            .into_iter()
            .filter(|record| record.cost == minimal_cost)
            .flat_map(|record| record.tiles.iter().copied())
            .collect();

        Ok(SearchOutcome {
            minimal_cost,
            optimal_path_tiles,
        })
    }
}

/// Minimal cost and optimal-path tile count of a maze, default costs.
pub fn solve_maze(text: &str) -> Result<MazeSolution, MazeError> {
    solve_maze_with(text, MazeCosts::default())
}

pub fn solve_maze_with(text: &str, costs: MazeCosts) -> Result<MazeSolution, MazeError> {
    let outcome = MazeGraph::parse(text)?.with_costs(costs).search()?;
    Ok(MazeSolution {
        minimal_cost: outcome.minimal_cost,
        optimal_path_tile_count: outcome.optimal_path_tiles.len(),
    })
}
