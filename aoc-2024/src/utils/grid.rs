//! Character grids addressed by `(x, y)` positions.
//!
//! X grows right, Y grows down; row `0` is the first line of the input.

use thiserror::Error;

/// A cell coordinate. Signed so that stepping off the edge is representable
/// and simply misses in [`Grid::get`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The adjacent position one step towards `direction`.
    #[inline]
    pub const fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.offset();
        Self::new(self.x + dx, self.y + dy)
    }
}

/// The four cardinal directions, in clockwise order starting from `Up`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// `(dx, dy)` of a single step.
    #[inline]
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
        }
    }

    #[inline]
    pub const fn turn_right(self) -> Self {
        match self {
            Direction::Up => Direction::Right,
            Direction::Right => Direction::Down,
            Direction::Down => Direction::Left,
            Direction::Left => Direction::Up,
        }
    }
}

/// Why a block of text could not be read as a rectangular grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid is empty")]
    Empty,
    #[error("row {row} has length {found}, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unexpected character {found:?} at ({}, {})", .position.x, .position.y)]
    InvalidCell { position: Position, found: char },
}

/// A rectangular grid stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T> Grid<T> {
    /// Parse newline-separated rows, mapping each character with `cell`.
    ///
    /// Trailing blank lines and `\r` line endings are ignored. Every row must
    /// have the same length; `cell` returning `None` rejects the character.
    pub fn parse_with<F>(input: &str, mut cell: F) -> Result<Self, GridError>
    where
        F: FnMut(char) -> Option<T>,
    {
        let mut width = None;
        let mut height = 0;
        let mut cells = Vec::with_capacity(input.len());

        for (y, line) in input.trim_end().lines().enumerate() {
            let line = line.trim_end_matches('\r');
            let found = line.chars().count();
            let expected = *width.get_or_insert(found);
            if found != expected {
                return Err(GridError::RaggedRow {
                    row: y,
                    expected,
                    found,
                });
            }
            for (x, c) in line.chars().enumerate() {
                let value = cell(c).ok_or(GridError::InvalidCell {
                    position: Position::new(x as i32, y as i32),
                    found: c,
                })?;
                cells.push(value);
            }
            height += 1;
        }

        match width {
            Some(width) if width > 0 => Ok(Self {
                width,
                height,
                cells,
            }),
            _ => Err(GridError::Empty),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn index(&self, position: Position) -> Option<usize> {
        let (x, y) = (usize::try_from(position.x).ok()?, usize::try_from(position.y).ok()?);
        (x < self.width && y < self.height).then_some(y * self.width + x)
    }

    /// The cell at `position`, or `None` outside the grid.
    #[inline]
    pub fn get(&self, position: Position) -> Option<&T> {
        self.index(position).map(|i| &self.cells[i])
    }

    #[inline]
    pub fn get_mut(&mut self, position: Position) -> Option<&mut T> {
        self.index(position).map(|i| &mut self.cells[i])
    }

    /// A grid of the same shape with every cell converted by `f`.
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            width: self.width,
            height: self.height,
            cells: self.cells.iter().map(f).collect(),
        }
    }

    /// Every position with its cell, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &T)> + '_ {
        self.cells.iter().enumerate().map(|(i, cell)| {
            let position = Position::new((i % self.width) as i32, (i / self.width) as i32);
            (position, cell)
        })
    }
}

/// Dense per-cell flags for a grid of the given shape, e.g. "visited".
#[derive(Debug, Clone)]
pub struct Marks {
    width: usize,
    height: usize,
    marked: Vec<bool>,
}

impl Marks {
    pub fn for_grid<T>(grid: &Grid<T>) -> Self {
        Self {
            width: grid.width,
            height: grid.height,
            marked: vec![false; grid.width * grid.height],
        }
    }

    fn index(&self, position: Position) -> Option<usize> {
        let (x, y) = (usize::try_from(position.x).ok()?, usize::try_from(position.y).ok()?);
        (x < self.width && y < self.height).then_some(y * self.width + x)
    }

    pub fn is_marked(&self, position: Position) -> bool {
        self.index(position).is_some_and(|i| self.marked[i])
    }

    /// Mark `position`; returns `true` if it was not marked before.
    pub fn mark(&mut self, position: Position) -> bool {
        match self.index(position) {
            Some(i) => !std::mem::replace(&mut self.marked[i], true),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digits(input: &str) -> Result<Grid<u32>, GridError> {
        Grid::parse_with(input, |c| c.to_digit(10))
    }

    #[test]
    fn test_parse_shape_and_lookup() {
        let grid = digits("123\n456\n").unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.get(Position::new(0, 0)), Some(&1));
        assert_eq!(grid.get(Position::new(2, 1)), Some(&6));
        assert_eq!(grid.get(Position::new(3, 1)), None);
        assert_eq!(grid.get(Position::new(-1, 0)), None);
    }

    #[test]
    fn test_get_mut() {
        let mut grid = digits("12\n34").unwrap();
        if let Some(cell) = grid.get_mut(Position::new(0, 1)) {
            *cell = 9;
        }
        assert_eq!(grid.get(Position::new(0, 1)), Some(&9));
        assert!(grid.get_mut(Position::new(2, 0)).is_none());
    }

    #[test]
    fn test_map_keeps_shape() {
        let grid = digits("12\n34").unwrap().map(|d| d % 2 == 0);
        assert_eq!((grid.width(), grid.height()), (2, 2));
        assert_eq!(grid.get(Position::new(1, 0)), Some(&true));
        assert_eq!(grid.get(Position::new(0, 1)), Some(&false));
    }

    #[test]
    fn test_crlf_input() {
        let grid = digits("12\r\n34\r\n").unwrap();
        assert_eq!(grid.get(Position::new(1, 1)), Some(&4));
    }

    #[test]
    fn test_ragged_row() {
        assert_eq!(
            digits("123\n45\n"),
            Err(GridError::RaggedRow {
                row: 1,
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn test_invalid_cell() {
        assert_eq!(
            digits("12\n3x"),
            Err(GridError::InvalidCell {
                position: Position::new(1, 1),
                found: 'x'
            })
        );
    }

    #[test]
    fn test_empty() {
        assert_eq!(digits(""), Err(GridError::Empty));
        assert_eq!(digits("\n\n"), Err(GridError::Empty));
    }

    #[test]
    fn test_iter_row_major() {
        let grid = digits("12\n34").unwrap();
        let seen: Vec<_> = grid.iter().map(|(p, v)| (p.x, p.y, *v)).collect();
        assert_eq!(seen, vec![(0, 0, 1), (1, 0, 2), (0, 1, 3), (1, 1, 4)]);
    }

    #[test]
    fn test_step_and_turn() {
        let p = Position::new(2, 2);
        assert_eq!(p.step(Direction::Up), Position::new(2, 1));
        assert_eq!(p.step(Direction::Left), Position::new(1, 2));
        assert_eq!(Direction::Left.turn_right(), Direction::Up);
        assert_eq!(
            Direction::ALL.map(Direction::turn_right),
            [Direction::Right, Direction::Down, Direction::Left, Direction::Up]
        );
    }

    #[test]
    fn test_marks() {
        let grid = digits("12\n34").unwrap();
        let mut marks = Marks::for_grid(&grid);
        assert!(marks.mark(Position::new(1, 0)));
        assert!(!marks.mark(Position::new(1, 0)));
        assert!(marks.is_marked(Position::new(1, 0)));
        assert!(!marks.is_marked(Position::new(0, 1)));
        assert!(!marks.mark(Position::new(5, 5)));
    }
}
