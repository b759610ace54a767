use std::fmt::Display;
use std::sync::LazyLock;

use aoc_framework::parsing::{capture_regex, parse_number_strict, reverse_string};
use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, PartOne, PartTwo, Solution};
use checked_sum::CheckedSum;
use regex::Regex;

use crate::reduce::Overflow;

#[solution_runner(name = "Day 1: Trebuchet?!", part_one = Day01, part_two = Day01)]
impl super::AdventOfCode2023<1> {}

/*
Input is a calibration document. Each line hides a calibration value: the first and last digit of
the line, combined into a two-digit number.

> If there's only one digit in the line, that digit is both the first & last.

A line with no digit at all has no calibration value and is skipped. The solution is the sum of
calibration values.
*/

type CalibrationValue = u32;

/// Concatenate the first and last digits, then read them back as a number.
fn combine_digits(first: impl Display, last: impl Display) -> Option<CalibrationValue> {
    parse_number_strict(&format!("{first}{last}"))
}

static DIGIT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[0-9]").expect("pattern should be valid"));

/// The calibration value from literal digit characters only.
fn basic_calibration(line: &str) -> Option<CalibrationValue> {
    let digits = capture_regex(&DIGIT_RE, line);
    combine_digits(digits.first()?, digits.last()?)
}

/// Sum the calibration values of each line, skipping lines without one.
///
/// # Errors
///
/// Returns [`Overflow`] if the sum does not fit in a [`CalibrationValue`].
fn total(
    calibration: impl Fn(&str) -> Option<CalibrationValue>,
    text: &str,
) -> Result<CalibrationValue, Overflow> {
    text.lines()
        .filter_map(calibration)
        .checked_sum()
        .ok_or(Overflow("summing calibration values"))
}

struct Day01;

impl Solution<PartOne> for Day01 {
    type Input = str;
    type Output = CalibrationValue;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(total(basic_calibration, input)?)
    }
}

/*
For part 2, digits may also be spelled out in english, "one" through "nine". Spellings can share
letters with each other ("twone", "eightwo"), so the first digit is searched from the front and the
last digit is searched from the back, independently.

Searching from the back is a forward search over the reversed line, with every spelling reversed.
*/

const DIGIT_NAMES: [&str; 9] = [
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

/// Build an alternation of the spelled digits (each passed through `spell`) and any digit char.
fn digit_pattern(spell: impl Fn(&str) -> String) -> Regex {
    let alternatives: Vec<String> = DIGIT_NAMES
        .iter()
        .map(|&name| spell(name))
        .chain(["[0-9]".to_owned()])
        .collect();
    Regex::new(&alternatives.join("|")).expect("digit alternation should be a valid pattern")
}

static FORWARD_DIGIT_RE: LazyLock<Regex> = LazyLock::new(|| digit_pattern(str::to_owned));

static BACKWARD_DIGIT_RE: LazyLock<Regex> = LazyLock::new(|| digit_pattern(reverse_string));

/// Map a matched token, spelled forwards, to its digit character.
fn token_to_digit(token: &str) -> Option<char> {
    if let Some(position) = DIGIT_NAMES.iter().position(|&name| name == token) {
        return char::from_digit(u32::try_from(position + 1).ok()?, 10);
    }

    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(digit), None) if digit.is_ascii_digit() => Some(digit),
        _ => None,
    }
}

/// The calibration value counting both digit characters and spelled digits.
fn advanced_calibration(line: &str) -> Option<CalibrationValue> {
    let first = FORWARD_DIGIT_RE.find(line)?;

    let reversed = reverse_string(line);
    let last = BACKWARD_DIGIT_RE.find(&reversed)?;
    let last = reverse_string(last.as_str());

    combine_digits(token_to_digit(first.as_str())?, token_to_digit(&last)?)
}

impl Solution<PartTwo> for Day01 {
    type Input = str;
    type Output = CalibrationValue;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(total(advanced_calibration, input)?)
    }
}
