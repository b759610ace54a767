//! Functions and traits for running solutions.
//!
//! A structure or impl-block is annotated with the [`#[solution_runner]`][solution_runner]
//! attribute macro to make it a [`SolutionRunner`]:
//!
//! ```
//! # use aoc_framework::runner::solution_runner;
//! # use aoc_framework::{DynamicResult, PartOne, PartTwo, Solution};
//! #
//! struct LineCount;
//!
//! impl Solution<PartOne> for LineCount {
//!     type Input = str;
//!     /* ... */
//! #    type Output = usize;
//! #    fn solve(input: &str) -> DynamicResult<usize> {
//! #        Ok(input.lines().count())
//! #    }
//! }
//! # impl Solution<PartTwo> for LineCount {
//! #    type Input = str;
//! #    type Output = usize;
//! #    fn solve(input: &str) -> DynamicResult<usize> {
//! #        Ok(input.len())
//! #    }
//! # }
//!
//! #[solution_runner(name = "Line count", part_one = LineCount, part_two = LineCount)]
//! struct LineCountRunner;
//! ```

use std::fmt::Display;
use std::time::Duration;

use crate::{DynamicResult, ParseData, Part, PartKind, PartOne, PartTwo, Solution};

// re-export procedural macro
pub use aoc_framework_macros::solution_runner;

/// A trait for an output events handler.
///
/// Running a solution emits events in a fixed order: the solution name, then the parse step when
/// the solution has one, then each part. The handler decides what to log or print.
pub trait OutputHandler {
    /// Called to output the name of the solution, at the start of running the solution.
    fn solution_name(&mut self, name: &str);

    /// Called when the solution starts parsing input.
    fn parse_start(&mut self);

    /// Called when parsing input is finished, with the elapsed time when timing is enabled.
    fn parse_end(&mut self, duration_opt: Option<Duration>);

    /// Called when a solution part starts.
    fn part_start(&mut self, part: PartKind);

    /// Called when a part finishes to output its answer, with the elapsed time when timing is
    /// enabled.
    fn part_output(&mut self, part: PartKind, output: &dyn Display, duration_opt: Option<Duration>);
}

/// Evaluate an expression, measuring its duration only when `$timed` is `true`.
///
/// Expands to a tuple of the expression's result and an `Option<Duration>`.
macro_rules! measure_with_optional_duration {
    ($expr:expr, $timed:expr) => {{
        if $timed {
            let start = ::std::time::Instant::now();
            let result = $expr;
            (result, Some(start.elapsed()))
        } else {
            ($expr, None)
        }
    }};
}

/// Run a solution part, outputting events through the handler.
///
/// # Errors
///
/// Any dynamically dispatched error from the solution is propagated.
fn run_part<S, P>(
    input: &S::Input,
    handler: &mut dyn OutputHandler,
    timed: bool,
) -> DynamicResult<()>
where
    P: Part,
    S: Solution<P>,
{
    let part = P::kind();
    handler.part_start(part);
    let (result, duration_opt) = measure_with_optional_duration!(S::solve(input), timed);
    let output = result?;
    handler.part_output(part, &output, duration_opt);
    Ok(())
}

/// Run a solution's parse step, outputting events through the handler.
///
/// # Errors
///
/// Any dynamically dispatched error from parsing is propagated.
fn run_parse<D: ParseData>(
    input: &str,
    handler: &mut dyn OutputHandler,
    timed: bool,
) -> DynamicResult<D> {
    handler.parse_start();
    let (result, duration_opt) = measure_with_optional_duration!(D::parse(input), timed);
    let parsed = result?;
    handler.parse_end(duration_opt);
    Ok(parsed)
}

/// Run a solution whose parts both work on the raw input string.
///
/// # Errors
///
/// Any dynamically dispatched error from the solution parts is propagated; part two does not run
/// if part one fails.
pub fn solve_full_solution<S1, S2>(
    name: &str,
    input: &str,
    handler: &mut dyn OutputHandler,
    timed: bool,
) -> DynamicResult<()>
where
    S1: Solution<PartOne, Input = str>,
    S2: Solution<PartTwo, Input = str>,
{
    handler.solution_name(name);
    run_part::<S1, PartOne>(input, handler, timed)?;
    run_part::<S2, PartTwo>(input, handler, timed)
}

/// Run a solution that parses the input once, then solves both parts over the parsed records.
///
/// # Errors
///
/// Any dynamically dispatched error from parsing or the solution parts is propagated.
pub fn solve_parsed_full_solution<D, S1, S2>(
    name: &str,
    input: &str,
    handler: &mut dyn OutputHandler,
    timed: bool,
) -> DynamicResult<()>
where
    D: ParseData,
    S1: Solution<PartOne, Input = D>,
    S2: Solution<PartTwo, Input = D>,
{
    handler.solution_name(name);
    let parsed = run_parse::<D>(input, handler, timed)?;
    run_part::<S1, PartOne>(&parsed, handler, timed)?;
    run_part::<S2, PartTwo>(&parsed, handler, timed)
}

/// A trait for solutions that can be run.
///
/// The trait can be implemented with the [`solution_runner`] attribute macro.
pub trait SolutionRunner {
    /// Run the solution.
    ///
    /// # Arguments
    ///
    /// - `input` - The input string to solve.
    /// - `handler` - The output handler to output events to.
    /// - `timed` - A flag to measure the time of each step and pass it to the handler.
    ///
    /// # Errors
    ///
    /// Any dynamically dispatched error from running the solution is propagated.
    fn run(input: &str, handler: &mut dyn OutputHandler, timed: bool) -> DynamicResult<()>;
}

#[cfg(test)]
mod tests {
    use thiserror::Error;

    use super::*;

    /// Records every event as a line of text.
    #[derive(Default)]
    struct RecordingHandler {
        events: Vec<String>,
    }

    impl OutputHandler for RecordingHandler {
        fn solution_name(&mut self, name: &str) {
            self.events.push(format!("name {name}"));
        }

        fn parse_start(&mut self) {
            self.events.push("parse start".to_owned());
        }

        fn parse_end(&mut self, duration_opt: Option<Duration>) {
            self.events
                .push(format!("parse end timed={}", duration_opt.is_some()));
        }

        fn part_start(&mut self, part: PartKind) {
            self.events.push(format!("start {part}"));
        }

        fn part_output(
            &mut self,
            part: PartKind,
            output: &dyn Display,
            duration_opt: Option<Duration>,
        ) {
            self.events
                .push(format!("{part} = {output} timed={}", duration_opt.is_some()));
        }
    }

    #[derive(Error, Debug)]
    #[error("odd record")]
    struct OddRecord;

    struct Evens(Vec<u32>);

    impl ParseData for Evens {
        fn parse(input: &str) -> DynamicResult<Self> {
            let values = input
                .split_whitespace()
                .map(|token| -> DynamicResult<u32> {
                    let value: u32 = token.parse()?;
                    if value % 2 == 1 {
                        return Err(OddRecord.into());
                    }
                    Ok(value)
                })
                .collect::<DynamicResult<_>>()?;
            Ok(Self(values))
        }
    }

    struct SumAndCount;

    impl Solution<PartOne> for SumAndCount {
        type Input = Evens;
        type Output = u32;

        fn solve(input: &Evens) -> DynamicResult<u32> {
            Ok(input.0.iter().sum())
        }
    }

    impl Solution<PartTwo> for SumAndCount {
        type Input = Evens;
        type Output = usize;

        fn solve(input: &Evens) -> DynamicResult<usize> {
            Ok(input.0.len())
        }
    }

    struct Chars;

    impl Solution<PartOne> for Chars {
        type Input = str;
        type Output = usize;

        fn solve(input: &str) -> DynamicResult<usize> {
            Ok(input.chars().count())
        }
    }

    impl Solution<PartTwo> for Chars {
        type Input = str;
        type Output = String;

        fn solve(input: &str) -> DynamicResult<String> {
            Ok(input.to_uppercase())
        }
    }

    #[test]
    fn parsed_solution_emits_events_in_order() -> DynamicResult<()> {
        let mut handler = RecordingHandler::default();
        solve_parsed_full_solution::<Evens, SumAndCount, SumAndCount>(
            "Evens",
            "2 4 6",
            &mut handler,
            false,
        )?;
        assert_eq!(
            handler.events,
            [
                "name Evens",
                "parse start",
                "parse end timed=false",
                "start Part 1",
                "Part 1 = 12 timed=false",
                "start Part 2",
                "Part 2 = 3 timed=false",
            ]
        );
        Ok(())
    }

    #[test]
    fn timed_run_reports_durations() -> DynamicResult<()> {
        let mut handler = RecordingHandler::default();
        solve_full_solution::<Chars, Chars>("Chars", "abc", &mut handler, true)?;
        assert_eq!(
            handler.events,
            [
                "name Chars",
                "start Part 1",
                "Part 1 = 3 timed=true",
                "start Part 2",
                "Part 2 = ABC timed=true",
            ]
        );
        Ok(())
    }

    #[test]
    fn parse_failure_stops_before_parts() {
        let mut handler = RecordingHandler::default();
        let result = solve_parsed_full_solution::<Evens, SumAndCount, SumAndCount>(
            "Evens",
            "2 3",
            &mut handler,
            false,
        );
        assert!(result.is_err_and(|error| error.to_string() == "odd record"));
        assert_eq!(handler.events, ["name Evens", "parse start"]);
    }
}
