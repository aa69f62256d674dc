//! Core solver traits

use crate::error::{ParseError, SolveError};

/// Parses puzzle input into the data every part of a solver works on.
///
/// `SharedData` is generic over the input lifetime, so a solver can either
/// borrow from the input (`Vec<&'a str>`) or build an owned model
/// (a grid, a list of machines) and keep intermediate results in it.
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, ParseError};
///
/// struct Digits;
///
/// impl AocParser for Digits {
///     type SharedData<'a> = Vec<u8>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .trim()
///             .chars()
///             .map(|c| {
///                 c.to_digit(10)
///                     .map(|d| d as u8)
///                     .ok_or_else(|| ParseError::InvalidFormat(format!("not a digit: {c:?}")))
///             })
///             .collect()
///     }
/// }
///
/// assert_eq!(Digits::parse("2333\n").unwrap(), vec![2, 3, 3, 3]);
/// ```
pub trait AocParser {
    /// The parsed input plus any intermediate results shared between parts.
    type SharedData<'a>;

    /// Parse the input string into the shared data structure.
    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError>;
}

/// Solves part `N` of a puzzle.
///
/// Parts get mutable access to the shared data so a costly computation can
/// run once and be read back by later parts.
pub trait PartSolver<const N: u8>: AocParser {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError>;
}

/// Dispatches a runtime part number to the matching [`PartSolver`].
///
/// Implemented by hand or generated by `#[derive(AocSolver)]`, which maps
/// part `n` to `<Self as PartSolver<n>>::solve` for `n` in `1..=max_parts`
/// and answers [`SolveError::PartNotImplemented`] for anything else.
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, ParseError, SolveError, Solver};
///
/// struct Rows;
///
/// impl AocParser for Rows {
///     type SharedData<'a> = Vec<&'a str>;
///
///     fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
///         Ok(input.lines().collect())
///     }
/// }
///
/// impl Solver for Rows {
///     const PARTS: u8 = 2;
///
///     fn solve_part(rows: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
///         match part {
///             1 => Ok(rows.len().to_string()),
///             2 => Ok(rows.iter().map(|r| r.len()).max().unwrap_or(0).to_string()),
///             _ => Err(SolveError::PartNotImplemented(part)),
///         }
///     }
/// }
///
/// let mut rows = Rows::parse("S..\n#.E#").unwrap();
/// assert_eq!(Rows::solve_part(&mut rows, 2).unwrap(), "4");
/// ```
pub trait Solver: AocParser {
    /// Number of parts this solver implements
    const PARTS: u8;

    /// Solve a specific part of the problem
    ///
    /// # Returns
    /// * `Ok(String)` - The answer for this part
    /// * `Err(SolveError::PartNotImplemented)` - The part is not implemented
    /// * `Err(SolveError::SolveFailed)` - The input has no answer for this part
    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError>;
}

/// Range-checked dispatch, available on every [`Solver`].
pub trait SolverExt: Solver {
    /// Reject part `0` and parts above [`Solver::PARTS`] with
    /// [`SolveError::PartOutOfRange`] before dispatching.
    fn solve_part_checked_range(
        shared: &mut Self::SharedData<'_>,
        part: u8,
    ) -> Result<String, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::solve_part(shared, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
