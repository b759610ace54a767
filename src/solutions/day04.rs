use std::collections::HashSet;
use std::sync::LazyLock;

use aoc_framework::parsing::{parse_lines_with_offset, parse_number_strict};
use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use checked_sum::CheckedSum;
use regex::Regex;

use crate::reduce::{Overflow, add};

#[solution_runner(
    name = "Day 4: Scratchcards", parsed = ScratchcardTable, part_one = Day04, part_two = Day04
)]
impl super::AdventOfCode2023<4> {}

/*
Input is a table of scratchcards. Each line defines a scratchcard.

The format of a card includes a space-separated list of winning numbers and another
space-separated list of scratched numbers, separated by `|`.
*/

#[derive(thiserror::Error, Debug)]
enum Day04Error {
    /// The line is not shaped like `Card [id]: [numbers] | [numbers]`. Contains the line.
    #[error("expected pattern \"Card [id]: [numbers] | [numbers]\", found {0:?}")]
    NotScratchcard(String),
}

/// The integer type for numbers on a scratchcard.
type CardNumber = u32;

/// The numbers of a scratchcard.
#[derive(Debug)]
struct Scratchcard {
    winning_numbers: HashSet<CardNumber>,
    scratched_numbers: HashSet<CardNumber>,
}

impl Scratchcard {
    /// How many scratched numbers are also winning numbers.
    fn matches(&self) -> usize {
        self.winning_numbers
            .intersection(&self.scratched_numbers)
            .count()
    }
}

static CARD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Card +[0-9]+:([0-9 ]+)\|([0-9 ]+)").expect("pattern should be valid")
});

/// Strictly parse each whitespace separated token, dropping the ones that fail.
fn parse_numbers(list: &str) -> HashSet<CardNumber> {
    list.split_whitespace().filter_map(parse_number_strict).collect()
}

fn parse_card(line: &str) -> Result<Scratchcard, Day04Error> {
    let captures = CARD_RE
        .captures(line)
        .ok_or_else(|| Day04Error::NotScratchcard(line.to_owned()))?;

    Ok(Scratchcard {
        winning_numbers: parse_numbers(&captures[1]),
        scratched_numbers: parse_numbers(&captures[2]),
    })
}

#[derive(Debug)]
struct ScratchcardTable(Vec<Scratchcard>);

impl ParseData for ScratchcardTable {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let cards = parse_lines_with_offset(input, 0, |_, line| Ok(parse_card(line)?))
            .collect::<Result<_, _>>()?;
        Ok(Self(cards))
    }
}

/*
For part 1, find the total points across cards.

The first match is worth one point, and following matches double the point value: `2^(matches-1)`,
or nothing without a match.
*/

/// The integer type for the points of a scratchcard.
type Points = u64;

impl Scratchcard {
    fn points(&self) -> Option<Points> {
        match self.matches() {
            0 => Some(0),
            matches => {
                let exponent = u32::try_from(matches - 1).ok()?;
                Points::from(1u8).checked_shl(exponent)
            }
        }
    }
}

fn total_points(cards: &[Scratchcard]) -> Result<Points, Overflow> {
    cards
        .iter()
        .map(Scratchcard::points)
        .collect::<Option<Vec<_>>>()
        .and_then(|points| points.into_iter().checked_sum())
        .ok_or(Overflow("totalling card points"))
}

struct Day04;

impl Solution<PartOne> for Day04 {
    type Input = ScratchcardTable;
    type Output = Points;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(total_points(&input.0)?)
    }
}

/*
For part 2, calculate total scratchcards, originals and copies generated.

For the amount of matches to winning numbers, that card wins copies of that many subsequent cards.
Example: for card 10 matching 5 numbers, it wins copies of cards 11 through 15.

Copied cards are subject to the same logic, so every copy of card 10 also wins copies of 11 through
15. All copies of a card are known once every earlier card is processed, so a single pass in card
order settles the table.

Copies won't be generated if the card to copy is not in the table (there's not enough subsequent
cards).
*/

type CardCount = u64;

/// Copies held of each card, originals included.
fn copy_counts(cards: &[Scratchcard]) -> Result<Vec<CardCount>, Overflow> {
    let mut counts: Vec<CardCount> = vec![1; cards.len()];

    for (card_index, card) in cards.iter().enumerate() {
        let instances = counts[card_index];
        let won = card_index + 1..(card_index + 1 + card.matches()).min(cards.len());
        for count in &mut counts[won] {
            *count = add(*count, instances).ok_or(Overflow("counting card copies"))?;
        }
    }

    Ok(counts)
}

fn total_cards_with_copies(cards: &[Scratchcard]) -> Result<CardCount, Overflow> {
    copy_counts(cards)?
        .into_iter()
        .checked_sum()
        .ok_or(Overflow("totalling cards"))
}

impl Solution<PartTwo> for Day04 {
    type Input = ScratchcardTable;
    type Output = CardCount;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(total_cards_with_copies(&input.0)?)
    }
}
