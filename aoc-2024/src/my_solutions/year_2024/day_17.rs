//! Day 17: Chronospatial Computer

use anyhow::{Context, anyhow, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use log::debug;
use thiserror::Error;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 17, tags = ["vm", "reverse-engineering"])]
pub struct Solver;

/// Instructions executed before a run is abandoned as non-terminating.
pub const STEP_LIMIT: usize = 1_000_000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VmError {
    #[error("combo operand 7 at position {ip}")]
    ReservedOperand { ip: usize },
    #[error("still running after {0} instructions")]
    StepLimit(usize),
    #[error("no value of register A makes the program print itself")]
    NoQuine,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Registers {
    pub a: u64,
    pub b: u64,
    pub c: u64,
}

impl Registers {
    fn combo(&self, operand: u8, ip: usize) -> Result<u64, VmError> {
        match operand {
            0..=3 => Ok(u64::from(operand)),
            4 => Ok(self.a),
            5 => Ok(self.b),
            6 => Ok(self.c),
            _ => Err(VmError::ReservedOperand { ip }),
        }
    }

    /// `A >> shift`, zero once every bit has been shifted out.
    fn divide_a(&self, shift: u64) -> u64 {
        u32::try_from(shift)
            .ok()
            .and_then(|shift| self.a.checked_shr(shift))
            .unwrap_or(0)
    }
}

/// Execute `program` until the instruction pointer leaves it, returning
/// everything `out` printed.
pub fn run(program: &[u8], mut registers: Registers) -> Result<Vec<u8>, VmError> {
    let mut output = Vec::new();
    let mut ip = 0;
    for _ in 0..STEP_LIMIT {
        let (Some(&opcode), Some(&operand)) = (program.get(ip), program.get(ip + 1)) else {
            return Ok(output);
        };
        match opcode {
            0 => registers.a = registers.divide_a(registers.combo(operand, ip)?),
            1 => registers.b ^= u64::from(operand),
            2 => registers.b = registers.combo(operand, ip)? % 8,
            3 if registers.a != 0 => {
                ip = usize::from(operand);
                continue;
            }
            3 => {}
            4 => registers.b ^= registers.c,
            5 => output.push((registers.combo(operand, ip)? % 8) as u8),
            6 => registers.b = registers.divide_a(registers.combo(operand, ip)?),
            _ => registers.c = registers.divide_a(registers.combo(operand, ip)?),
        }
        ip += 2;
    }
    Err(VmError::StepLimit(STEP_LIMIT))
}

/// Lowest positive `A` for which the program prints its own source.
///
/// Assumes the usual loop shape: each pass prints one value and shifts `A`
/// right by three bits, so the suffix printed by the last passes only depends
/// on the high octal digits of `A`. Those are fixed first, one digit per pass.
pub fn find_quine(program: &[u8], registers: Registers) -> Result<u64, VmError> {
    let mut candidates = vec![0u64];
    for k in (0..program.len()).rev() {
        let mut next = Vec::new();
        for &high in &candidates {
            for digit in 0..8 {
                let Some(a) = high.checked_mul(8).and_then(|a| a.checked_add(digit)) else {
                    continue;
                };
                if run(program, Registers { a, ..registers })? == program[k..] {
                    next.push(a);
                }
            }
        }
        debug!("{} candidates print the last {} values", next.len(), program.len() - k);
        candidates = next;
    }
    candidates
        .into_iter()
        .filter(|&a| a > 0)
        .min()
        .ok_or(VmError::NoQuine)
}

#[derive(Debug)]
pub struct SharedData {
    registers: Registers,
    program: Vec<u8>,
}

fn register(line: Option<&str>, name: &str) -> anyhow::Result<u64> {
    let line = line.with_context(|| format!("missing register {}", name))?;
    let value = line
        .trim()
        .strip_prefix(&format!("Register {}:", name))
        .with_context(|| format!("expected `Register {}: N`, got {:?}", name, line))?;
    Ok(value.trim().parse()?)
}

fn program(line: Option<&str>) -> anyhow::Result<Vec<u8>> {
    let line = line.context("missing program")?;
    let values = line
        .trim()
        .strip_prefix("Program:")
        .with_context(|| format!("expected `Program: ...`, got {:?}", line))?;
    values
        .split(',')
        .map(|value| match value.trim().parse::<u8>() {
            Ok(value) if value < 8 => Ok(value),
            _ => Err(anyhow!("{:?} is not a 3-bit value", value.trim())),
        })
        .collect()
}

fn parse_computer(input: &str) -> anyhow::Result<SharedData> {
    let mut lines = input.lines().filter(|line| !line.trim().is_empty());
    let registers = Registers {
        a: register(lines.next(), "A")?,
        b: register(lines.next(), "B")?,
        c: register(lines.next(), "C")?,
    };
    let program = program(lines.next())?;
    if let Some(extra) = lines.next() {
        bail!("unexpected line {:?}", extra);
    }
    Ok(SharedData { registers, program })
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        if input.trim().is_empty() {
            return Err(ParseError::MissingData("empty input".to_string()));
        }
        parse_computer(input).map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let output = run(&shared.program, shared.registers)
            .map_err(|e| SolveError::SolveFailed(Box::new(e)))?;
        Ok(output
            .iter()
            .map(u8::to_string)
            .collect::<Vec<_>>()
            .join(","))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        find_quine(&shared.program, shared.registers)
            .map(|a| a.to_string())
            .map_err(|e| SolveError::SolveFailed(Box::new(e)))
    }
}
