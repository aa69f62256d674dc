//! Day 11: Plutonian Pebbles

use anyhow::Context;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use thiserror::Error;

use crate::utils::dp_cache::{DpCache, DpProblem, HashMapBackend};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 11, tags = ["dp"])]
pub struct Solver;

/// `(engraving, blinks left)`
pub type StoneAt = (u64, u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("stones outgrew u64 within {blinks} blinks")]
pub struct Overflow {
    pub blinks: u32,
}

/// Counts the stones one stone turns into after some blinks.
///
/// Values are `None` once an engraving or a count no longer fits in `u64`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Blink;

impl Blink {
    /// What one stone becomes after a single blink, `None` on overflow.
    pub fn evolve(stone: u64) -> Option<(u64, Option<u64>)> {
        if stone == 0 {
            return Some((1, None));
        }
        let digits = stone.ilog10() + 1;
        if digits % 2 == 0 {
            let half = 10u64.pow(digits / 2);
            Some((stone / half, Some(stone % half)))
        } else {
            stone.checked_mul(2024).map(|next| (next, None))
        }
    }
}

impl DpProblem<StoneAt, Option<u64>> for Blink {
    fn deps(&self, &(stone, blinks): &StoneAt) -> Vec<StoneAt> {
        if blinks == 0 {
            return vec![];
        }
        match Blink::evolve(stone) {
            Some((left, Some(right))) => vec![(left, blinks - 1), (right, blinks - 1)],
            Some((next, None)) => vec![(next, blinks - 1)],
            None => vec![],
        }
    }

    fn compute(&self, &(stone, blinks): &StoneAt, deps: Vec<Option<u64>>) -> Option<u64> {
        if blinks == 0 {
            return Some(1);
        }
        Blink::evolve(stone)?;
        deps.into_iter()
            .try_fold(0u64, |total, count| total.checked_add(count?))
    }
}

pub type StoneCounter =
    DpCache<StoneAt, Option<u64>, HashMapBackend<StoneAt, Option<u64>>, Blink>;

pub struct SharedData {
    stones: Vec<u64>,
    counter: StoneCounter,
}

impl SharedData {
    pub fn count_after(&self, blinks: u32) -> Result<u64, Overflow> {
        self.stones
            .iter()
            .try_fold(0u64, |total, &stone| {
                total.checked_add(self.counter.get(&(stone, blinks))?)
            })
            .ok_or(Overflow { blinks })
    }
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let stones = input
            .split_whitespace()
            .map(|word| {
                word.parse::<u64>()
                    .with_context(|| format!("invalid stone {:?}", word))
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ParseError::InvalidFormat(format!("{:#}", e)))?;
        if stones.is_empty() {
            return Err(ParseError::MissingData("no stones".to_string()));
        }
        Ok(SharedData {
            stones,
            counter: DpCache::with_problem(HashMapBackend::new(), Blink),
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        count(shared, 25)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        count(shared, 75)
    }
}

fn count(shared: &SharedData, blinks: u32) -> Result<String, SolveError> {
    shared
        .count_after(blinks)
        .map(|n| n.to_string())
        .map_err(|e| SolveError::SolveFailed(Box::new(e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;
    use proptest::prelude::*;

    fn naive(stones: &[u64], blinks: u32) -> usize {
        let mut line = stones.to_vec();
        for _ in 0..blinks {
            line = line
                .into_iter()
                .flat_map(|stone| {
                    let (left, right) = Blink::evolve(stone).unwrap();
                    std::iter::once(left).chain(right)
                })
                .collect();
        }
        line.len()
    }

    #[test]
    fn test_evolve() {
        assert_eq!(Blink::evolve(0), Some((1, None)));
        assert_eq!(Blink::evolve(1), Some((2024, None)));
        assert_eq!(Blink::evolve(10), Some((1, Some(0))));
        assert_eq!(Blink::evolve(99), Some((9, Some(9))));
        assert_eq!(Blink::evolve(999), Some((2021976, None)));
        assert_eq!(Blink::evolve(1000), Some((10, Some(0))));
        assert_eq!(Blink::evolve(10u64.pow(18)), None);
    }

    #[test]
    fn test_example() {
        let shared = Solver::parse("125 17\n").unwrap();
        assert_eq!(shared.count_after(0), Ok(2));
        assert_eq!(shared.count_after(6), Ok(22));
        assert_eq!(shared.count_after(25), Ok(55312));
    }

    #[test]
    fn test_parts() {
        let mut shared = Solver::parse("125 17").unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "55312");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "65601038650482");
    }

    #[test]
    fn test_engraving_overflow_fails_to_solve() {
        // 19 digits: odd, so the next blink multiplies past u64::MAX
        let mut shared = Solver::parse("1000000000000000000").unwrap();
        assert_eq!(shared.count_after(0), Ok(1));
        assert_eq!(shared.count_after(1), Err(Overflow { blinks: 1 }));
        assert!(matches!(
            Solver::solve_part(&mut shared, 1),
            Err(SolveError::SolveFailed(_))
        ));
        assert!(matches!(
            Solver::solve_part(&mut shared, 2),
            Err(SolveError::SolveFailed(_))
        ));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            Solver::parse("125 x7"),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(Solver::parse("-3"), Err(ParseError::InvalidFormat(_))));
        assert!(matches!(Solver::parse("\n"), Err(ParseError::MissingData(_))));
    }

    proptest! {
        #[test]
        fn prop_matches_naive_simulation(
            stones in prop::collection::vec(0u64..10_000, 1..4),
            blinks in 0u32..12,
        ) {
            let shared = SharedData {
                stones: stones.clone(),
                counter: DpCache::with_problem(HashMapBackend::new(), Blink),
            };
            prop_assert_eq!(shared.count_after(blinks), Ok(naive(&stones, blinks) as u64));
        }
    }
}
