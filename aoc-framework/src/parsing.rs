//! Text utilities shared by every solution: strict number parsing, regex capture, and line parsing
//! with error context.
//!
//! Helpers returning [`Option`] model an *expected absence* (a line without a number, a color
//! missing from a round) and never fail loudly. Helpers returning [`Result`] are for structural
//! problems that must stop the solution.

use std::fmt::Display;
use std::str::FromStr;

use regex::Regex;
use thiserror::Error;

use crate::{DynamicError, DynamicResult};

/// A string parsing error with context of the string that was being parsed.
#[derive(Error, Debug)]
#[error("failed to parse string: {string:?}")]
pub struct ParseContextError<E>
where
    E: std::error::Error,
{
    /// The string that was being parsed.
    string: String,
    source: E,
}

/// Parse a string slice into another type.
///
/// This wraps [`str::parse`] and maps errors to [`ParseContextError`].
///
/// # Errors
///
/// Will return a [`ParseContextError`] with the given string as context and
/// [`F::Err`][FromStr::Err] as the source if it's not possible to parse the string into the desired
/// type.
pub fn parse_with_context<F>(string: &str) -> Result<F, ParseContextError<F::Err>>
where
    F: FromStr,
    F::Err: std::error::Error,
{
    string.parse::<F>().map_err(|source| ParseContextError {
        string: string.to_string(),
        source,
    })
}

/// Parse a decimal number, accepting only its canonical rendering.
///
/// The string must be exactly what formatting the parsed number would produce: no leading zeros,
/// signs, whitespace or fractional part. Anything else is `None`.
///
/// ```
/// use aoc_framework::parsing::parse_number_strict;
///
/// assert_eq!(parse_number_strict::<u32>("42"), Some(42));
/// assert_eq!(parse_number_strict::<u32>("0"), Some(0));
/// assert_eq!(parse_number_strict::<u32>("007"), None);
/// assert_eq!(parse_number_strict::<u32>("+7"), None);
/// assert_eq!(parse_number_strict::<u32>(" 7"), None);
/// ```
pub fn parse_number_strict<N>(string: &str) -> Option<N>
where
    N: FromStr + Display,
{
    if string.is_empty() || !string.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    string
        .parse::<N>()
        .ok()
        .filter(|number| number.to_string() == string)
}

/// Collect every match of `re` in `string`, left to right.
pub fn capture_regex<'s>(re: &Regex, string: &'s str) -> Vec<&'s str> {
    re.find_iter(string).map(|m| m.as_str()).collect()
}

/// Strictly parse the first maximal run of ASCII digits in `string`.
///
/// Only the first run is considered: if it is not canonical (`"05"`), the result is `None` even
/// when a later run would parse.
pub fn capture_first_int<N>(string: &str) -> Option<N>
where
    N: FromStr + Display,
{
    let start = string.find(|c: char| c.is_ascii_digit())?;
    let rest = &string[start..];
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    parse_number_strict(&rest[..end])
}

/// Reverse a string by characters.
pub fn reverse_string(string: &str) -> String {
    string.chars().rev().collect()
}

/// A line in an input string caused a parsing error.
#[derive(Error, Debug)]
#[error("failure parsing line {}", .line_index.saturating_add(1))]
pub struct InvalidLine {
    /// The line index, zero based.
    /// This will be formatted to a one-based number for display.
    line_index: usize,
    source: DynamicError,
}

/// Parse lines with a closure, mapping any line's dynamic error with an [`InvalidLine`].
///
/// Blank lines carry no record and are skipped, though they still count towards line indexes.
///
/// # Arguments
/// - `input` - The input string to parse.
/// - `offset` - An offset to add to the line index, for when `input` is a later slice of a larger
///   document. Set to `0` if no offset is needed.
/// - `parser` - A closure taking the (offset) line index and the line, returning a
///   [`DynamicResult`].
///
/// # Returns
///
/// An iterator of parsing results for each non-blank line.
pub fn parse_lines_with_offset<T, F>(
    input: &str,
    offset: usize,
    mut parser: F,
) -> impl Iterator<Item = Result<T, InvalidLine>>
where
    F: FnMut(usize, &str) -> DynamicResult<T>,
{
    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(move |(index, line)| {
            let line_index = index.saturating_add(offset);
            parser(line_index, line).map_err(|source| InvalidLine { line_index, source })
        })
}
