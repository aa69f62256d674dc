//! Day 9: Disk Fragmenter

use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 9, tags = ["compaction"])]
pub struct Solver;

/// Alternating file and free-space lengths, file first.
#[derive(Debug)]
pub struct SharedData {
    disk_map: Vec<u8>,
}

/// A contiguous run of blocks.
#[derive(Debug, Clone, Copy)]
struct Span {
    start: usize,
    len: usize,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .chars()
            .filter(|c| !c.is_whitespace())
            .enumerate()
            .map(|(idx, c)| {
                c.to_digit(10)
                    .map(|d| d as u8)
                    .ok_or_else(|| anyhow!("(offset {}) expected a digit, found {:?}", idx, c))
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))
            .and_then(|disk_map| {
                if disk_map.is_empty() {
                    Err(ParseError::MissingData("empty disk map".to_string()))
                } else {
                    Ok(SharedData { disk_map })
                }
            })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(compact_blocks(&shared.disk_map).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(compact_files(&shared.disk_map).to_string())
    }
}

/// Split the map into per-id file spans and the free spans between them.
fn spans(disk_map: &[u8]) -> (Vec<Span>, Vec<Span>) {
    let mut files = Vec::with_capacity(disk_map.len() / 2 + 1);
    let mut free = Vec::with_capacity(disk_map.len() / 2);
    let mut start = 0;
    for (idx, &len) in disk_map.iter().enumerate() {
        let span = Span {
            start,
            len: len as usize,
        };
        if idx % 2 == 0 {
            files.push(span);
        } else {
            free.push(span);
        }
        start += len as usize;
    }
    (files, free)
}

/// Sum of `position * id` over a file occupying `span`.
fn span_checksum(id: usize, span: Span) -> u64 {
    let first = span.start as u64;
    let len = span.len as u64;
    // first + (first + 1) + ... + (first + len - 1)
    id as u64 * (len * first + len * len.saturating_sub(1) / 2)
}

/// Move single blocks from the back into the frontmost gap.
pub fn compact_blocks(disk_map: &[u8]) -> u64 {
    let mut blocks: Vec<Option<usize>> = Vec::new();
    for (idx, &len) in disk_map.iter().enumerate() {
        let content = (idx % 2 == 0).then_some(idx / 2);
        blocks.extend(std::iter::repeat_n(content, len as usize));
    }

    let mut front = 0;
    let mut back = blocks.len();
    loop {
        while front < back && blocks[front].is_some() {
            front += 1;
        }
        while back > front && blocks[back - 1].is_none() {
            back -= 1;
        }
        if back <= front + 1 {
            break;
        }
        blocks.swap(front, back - 1);
    }

    blocks
        .iter()
        .enumerate()
        .filter_map(|(pos, id)| id.map(|id| (pos * id) as u64))
        .sum()
}

/// Move whole files, highest id first, into the leftmost gap that fits.
pub fn compact_files(disk_map: &[u8]) -> u64 {
    let (mut files, mut free) = spans(disk_map);

    for file in files.iter_mut().rev() {
        if file.len == 0 {
            continue;
        }
        let gap = free
            .iter_mut()
            .take_while(|gap| gap.start < file.start)
            .find(|gap| gap.len >= file.len);
        if let Some(gap) = gap {
            file.start = gap.start;
            gap.start += file.len;
            gap.len -= file.len;
        }
    }

    files
        .into_iter()
        .enumerate()
        .map(|(id, span)| span_checksum(id, span))
        .sum()
}
