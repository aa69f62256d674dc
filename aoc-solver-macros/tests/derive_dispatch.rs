//! `#[derive(AocSolver)]` dispatch: part `n` goes to `PartSolver<n>`,
//! anything outside `1..=max_parts` is `PartNotImplemented`.

use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, Solver, SolverExt};
use proptest::prelude::*;

/// Counts characters of a block grid: walls in part 1, open cells in part 2,
/// rows in part 3.
#[derive(AocSolver)]
#[aoc_solver(max_parts = 3)]
struct CellCounter;

impl AocParser for CellCounter {
    type SharedData<'a> = Vec<&'a str>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let rows: Vec<&str> = input.lines().filter(|l| !l.is_empty()).collect();
        if rows.iter().any(|r| r.chars().any(|c| c != '#' && c != '.')) {
            return Err(ParseError::InvalidFormat("only '#' and '.' allowed".into()));
        }
        Ok(rows)
    }
}

impl PartSolver<1> for CellCounter {
    fn solve(rows: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(rows.iter().map(|r| r.matches('#').count()).sum::<usize>().to_string())
    }
}

impl PartSolver<2> for CellCounter {
    fn solve(rows: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(rows.iter().map(|r| r.matches('.').count()).sum::<usize>().to_string())
    }
}

impl PartSolver<3> for CellCounter {
    fn solve(rows: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        if rows.is_empty() {
            Err(SolveError::SolveFailed("no rows".into()))
        } else {
            Ok(rows.len().to_string())
        }
    }
}

fn grid_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[#.]{1,8}", 1..6).prop_map(|rows| rows.join("\n"))
}

#[test]
fn test_parts_constant_matches_attribute() {
    assert_eq!(<CellCounter as Solver>::PARTS, 3);
}

#[test]
fn test_each_part_answers() {
    let mut rows = CellCounter::parse("#..#\n.##.\n").unwrap();
    assert_eq!(CellCounter::solve_part(&mut rows, 1).unwrap(), "4");
    assert_eq!(CellCounter::solve_part(&mut rows, 2).unwrap(), "4");
    assert_eq!(CellCounter::solve_part(&mut rows, 3).unwrap(), "2");
}

#[test]
fn test_part_error_is_forwarded() {
    let mut rows = CellCounter::parse("").unwrap();
    assert!(matches!(
        CellCounter::solve_part(&mut rows, 3),
        Err(SolveError::SolveFailed(_))
    ));
}

#[test]
fn test_checked_range_vs_generated_fallback() {
    let mut rows = CellCounter::parse("#").unwrap();
    assert!(matches!(
        CellCounter::solve_part(&mut rows, 4),
        Err(SolveError::PartNotImplemented(4))
    ));
    assert!(matches!(
        CellCounter::solve_part_checked_range(&mut rows, 4),
        Err(SolveError::PartOutOfRange(4))
    ));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_dispatch_matches_direct_call(input in grid_strategy(), part in 1u8..=3) {
        let mut via_dispatch = CellCounter::parse(&input).unwrap();
        let mut direct = CellCounter::parse(&input).unwrap();

        let dispatched = CellCounter::solve_part(&mut via_dispatch, part).unwrap();
        let expected = match part {
            1 => <CellCounter as PartSolver<1>>::solve(&mut direct),
            2 => <CellCounter as PartSolver<2>>::solve(&mut direct),
            3 => <CellCounter as PartSolver<3>>::solve(&mut direct),
            _ => unreachable!(),
        }
        .unwrap();

        prop_assert_eq!(dispatched, expected);
    }

    #[test]
    fn prop_unknown_parts_not_implemented(part in prop_oneof![Just(0u8), 4u8..=255]) {
        let mut rows = CellCounter::parse("#.").unwrap();
        match CellCounter::solve_part(&mut rows, part) {
            Err(SolveError::PartNotImplemented(p)) => prop_assert_eq!(p, part),
            other => prop_assert!(false, "expected PartNotImplemented, got {:?}", other),
        }
    }
}
