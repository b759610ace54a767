//! Framework of traits and utilities for solving Advent of Code puzzles.
//!
//! Every puzzle day is a pipeline of `text -> records -> filtered records -> number`. This crate
//! gives each stage a home:
//!
//! - [`ParseData`] turns the raw text into records,
//! - [`Solution`] folds records (or the raw text) into an answer for a [`Part`],
//! - [`parsing`] holds the small text utilities shared by every day,
//! - [`runner`] drives a day and reports progress through an output handler.
//!
//! # Examples
//!
//! ## Solution with `Input = str`
//!
//! ```
//! use aoc_framework::parsing::capture_first_int;
//! use aoc_framework::{DynamicResult, PartOne, Solution};
//!
//! struct FirstNumbers;
//!
//! impl Solution<PartOne> for FirstNumbers {
//!     type Input = str;
//!     type Output = u32;
//!
//!     fn solve(input: &str) -> DynamicResult<u32> {
//!         Ok(input.lines().filter_map(capture_first_int::<u32>).sum())
//!     }
//! }
//!
//! assert_eq!(<FirstNumbers as Solution<PartOne>>::solve("a1b\nno digits\n22 and 3").ok(), Some(23));
//! ```
//!
//! ## Solution with a custom `Input` struct
//!
//! ```
//! use aoc_framework::parsing::{parse_lines_with_offset, parse_with_context};
//! use aoc_framework::{DynamicResult, ParseData, PartOne, Solution};
//!
//! struct Readings(Vec<u32>);
//!
//! impl ParseData for Readings {
//!     fn parse(input: &str) -> DynamicResult<Self> {
//!         let values = parse_lines_with_offset(input, 0, |_, line| Ok(parse_with_context::<u32>(line)?))
//!             .collect::<Result<_, _>>()?;
//!         Ok(Self(values))
//!     }
//! }
//!
//! struct Largest;
//!
//! impl Solution<PartOne> for Largest {
//!     type Input = Readings;
//!     type Output = u32;
//!
//!     fn solve(input: &Readings) -> DynamicResult<u32> {
//!         Ok(input.0.iter().copied().max().unwrap_or(0))
//!     }
//! }
//!
//! let readings = Readings::parse("3\n14\n9\n").ok();
//! assert_eq!(readings.and_then(|r| <Largest as Solution<PartOne>>::solve(&r).ok()), Some(14));
//! ```

#![warn(clippy::pedantic)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::branches_sharing_code,
    clippy::collection_is_never_read,
    clippy::equatable_if_let,
    clippy::needless_collect,
    clippy::option_if_let_else,
    clippy::use_self,
    clippy::useless_let_if_seq
)]
#![deny(
    clippy::expect_used,
    clippy::print_stderr,
    clippy::print_stdout,
    clippy::unwrap_used
)]

use std::error::Error;
use std::fmt::Display;

pub mod parsing;
pub mod runner;

mod private {
    /// Sealed so only [`PartOne`](super::PartOne) and [`PartTwo`](super::PartTwo) are parts.
    pub trait Sealed {}
}

/// A dynamically dispatched error, wrapped in a [`Box`].
pub type DynamicError = Box<dyn Error + Send + Sync + 'static>;
/// A result that can return a [`DynamicError`] as an error.
pub type DynamicResult<T> = Result<T, DynamicError>;

/// An enum to identify a solution part.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartKind {
    One,
    Two,
}

impl Display for PartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::One => write!(f, "Part 1"),
            Self::Two => write!(f, "Part 2"),
        }
    }
}

/// A marker trait identifying which part a [`Solution<P>`] solves.
pub trait Part: private::Sealed {
    /// Get the related [`PartKind`] for this part.
    fn kind() -> PartKind;
}

/// Indicates a [`Solution`] implements part one.
pub struct PartOne;
impl private::Sealed for PartOne {}
impl Part for PartOne {
    fn kind() -> PartKind {
        PartKind::One
    }
}

/// Indicates a [`Solution`] implements part two.
pub struct PartTwo;
impl private::Sealed for PartTwo {}
impl Part for PartTwo {
    fn kind() -> PartKind {
        PartKind::Two
    }
}

/// A solution folding its input into the answer for a [`Part`].
///
/// A single type usually implements both `Solution<PartOne>` and `Solution<PartTwo>`.
pub trait Solution<P: Part> {
    /// The input data type passed to the solution.
    ///
    /// For direct string input, set to `str`.
    type Input: ?Sized;

    /// The answer type.
    type Output: Display;

    /// Solve with the given input.
    ///
    /// # Errors
    ///
    /// Malformed input or an arithmetic overflow while folding is returned as a dynamically
    /// dispatched error. Expected absences (a line without a value) are not errors.
    fn solve(input: &Self::Input) -> DynamicResult<Self::Output>;
}

/// A trait for record collections that are created by parsing the puzzle text.
pub trait ParseData {
    /// Parse an input string into an instance of self.
    ///
    /// # Errors
    ///
    /// A structurally malformed record is returned as a dynamically dispatched error.
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized;
}
