//! Solutions implemented for Advent of Code 2023, days 1 through 4.
//!
//! This module provides [`run_day`] to run a solution by its day. Each submodule implements
//! [`AdventOfCode2023<DAY>`] for its day as a [`SolutionRunner`], and is matched in [`run_day`]:
//!
//! ```ignore
//! // matching for day 1
//! 1 => AdventOfCode2023::<1>::run(input, handler, timed),
//! ```

#![warn(clippy::dbg_macro, clippy::print_stderr, clippy::print_stdout)]

use aoc_framework::DynamicResult;
use aoc_framework::runner::{OutputHandler, SolutionRunner};
use thiserror::Error;

mod day01;
mod day02;
mod day03;
mod day04;

/// A structure collecting solutions by day.
///
/// In a submodule, implement this as a [`SolutionRunner`] for the day with
/// [`#[solution_runner]`][aoc_framework::runner::solution_runner]:
///
/// ```ignore
/// #[solution_runner(name = "Day 1: Trebuchet?!", part_one = Day01, part_two = Day01)]
/// impl super::AdventOfCode2023<1> {}
/// ```
struct AdventOfCode2023<const DAY: u8>;

/// A solution for a day is not available.
#[derive(Error, Debug)]
#[error("no solution available for day {0}")]
pub struct DayNotAvailable(u8);

/// Run a solution based on the day.
///
/// # Errors
///
/// If the solution for the given day is not available, a [`DayNotAvailable`] error is returned.
///
/// Any dynamically dispatched error from running the solution is propagated.
pub fn run_day(
    day: u8,
    input: &str,
    handler: &mut dyn OutputHandler,
    timed: bool,
) -> DynamicResult<()> {
    match day {
        1 => AdventOfCode2023::<1>::run(input, handler, timed),
        2 => AdventOfCode2023::<2>::run(input, handler, timed),
        3 => AdventOfCode2023::<3>::run(input, handler, timed),
        4 => AdventOfCode2023::<4>::run(input, handler, timed),
        _ => Err(DayNotAvailable(day).into()),
    }
}
