use aoc_framework::parsing::{capture_first_int, parse_lines_with_offset};
use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use checked_sum::CheckedSum;

use crate::reduce::{CheckedProduct, Overflow, max};

#[solution_runner(name = "Day 2: Cube Conundrum", parsed = Games, part_one = Day02, part_two = Day02)]
impl super::AdventOfCode2023<2> {}

#[derive(thiserror::Error, Debug)]
enum Day02Error {
    /// Expected a `": "` delimiter splitting the line.
    #[error("no \": \" found to separate game ID from rounds")]
    NoColonDelimiter,

    /// Game label without an ID. Tuple contains the label to report in the error message.
    #[error("failed to detect game ID: expected pattern \"Game [id]\", found {0:?}")]
    NotGameId(String),
}

/*
Input is a record of games. A game has a secret number of red, green, and blue cubes in a bag, and
rounds where a handful of cubes is revealed then put back.

Each line is a game ID and a "; " separated list of rounds. A round is a ", " separated list of
`<count> <color>` entries. Colors left out of a round were not revealed, so count as 0.
*/

type CubeCount = u32;

/// Cube counts by color.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct CubeCounts {
    red: CubeCount,
    green: CubeCount,
    blue: CubeCount,
}

impl CubeCounts {
    /// The element-wise maximum of two counts.
    fn peak(self, other: Self) -> Self {
        Self {
            red: max(self.red, other.red),
            green: max(self.green, other.green),
            blue: max(self.blue, other.blue),
        }
    }

    fn fits_within(&self, limits: &Self) -> bool {
        self.red <= limits.red && self.green <= limits.green && self.blue <= limits.blue
    }
}

/// Read one round. The first entry mentioning a color gives that color's count.
fn parse_round(round: &str) -> CubeCounts {
    let count_of = |color: &str| {
        round
            .split(", ")
            .find(|entry| entry.contains(color))
            .and_then(capture_first_int::<CubeCount>)
            .unwrap_or(0)
    };

    CubeCounts {
        red: count_of("red"),
        green: count_of("green"),
        blue: count_of("blue"),
    }
}

type GameId = u32;

/// A game's ID and the most cubes of each color seen in any of its rounds.
#[derive(Debug, PartialEq, Eq)]
struct Game {
    id: GameId,
    maxes: CubeCounts,
}

fn parse_game(line: &str) -> Result<Game, Day02Error> {
    let (label, rounds) = line
        .split_once(": ")
        .ok_or(Day02Error::NoColonDelimiter)?;

    let id: GameId =
        capture_first_int(label).ok_or_else(|| Day02Error::NotGameId(label.to_owned()))?;

    let maxes = rounds
        .split("; ")
        .map(parse_round)
        .fold(CubeCounts::default(), CubeCounts::peak);

    Ok(Game { id, maxes })
}

struct Games(Vec<Game>);

impl ParseData for Games {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let games = parse_lines_with_offset(input, 0, |_, line| Ok(parse_game(line)?))
            .collect::<Result<_, _>>()?;
        Ok(Self(games))
    }
}

/*
For part 1, test each game for being possible with 12 red, 13 green, & 14 blue cubes in the bag.
Then, sum together the IDs of the possible games.
*/

const BAG_LIMITS: CubeCounts = CubeCounts {
    red: 12,
    green: 13,
    blue: 14,
};

/// Sum the IDs of games whose peak counts all fit within `limits`.
fn sum_feasible_ids(games: &[Game], limits: &CubeCounts) -> Result<GameId, Overflow> {
    games
        .iter()
        .filter(|game| game.maxes.fits_within(limits))
        .map(|game| game.id)
        .checked_sum()
        .ok_or(Overflow("summing game IDs"))
}

struct Day02;

impl Solution<PartOne> for Day02 {
    type Input = Games;
    type Output = GameId;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(sum_feasible_ids(&input.0, &BAG_LIMITS)?)
    }
}

/*
For part 2, the peak counts of a game are the fewest cubes that make it possible. The power of a
game is the product of those counts; the solution is the sum of powers.
*/

fn power(counts: &CubeCounts) -> Option<u32> {
    [counts.red, counts.green, counts.blue]
        .into_iter()
        .checked_product()
}

fn sum_powers(games: &[Game]) -> Result<u32, Overflow> {
    games
        .iter()
        .map(|game| power(&game.maxes))
        .collect::<Option<Vec<_>>>()
        .and_then(|powers| powers.into_iter().checked_sum())
        .ok_or(Overflow("summing game powers"))
}

impl Solution<PartTwo> for Day02 {
    type Input = Games;
    type Output = u32;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(sum_powers(&input.0)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"Game 1: 3 blue, 4 red; 1 red, 2 green, 6 blue; 2 green
Game 2: 1 blue, 2 green; 3 green, 4 blue, 1 red; 1 green, 1 blue
Game 3: 8 green, 6 blue, 20 red; 5 blue, 4 red, 13 green; 5 green, 1 red
Game 4: 1 green, 3 red, 6 blue; 3 green, 6 red; 3 green, 15 blue, 14 red
Game 5: 6 red, 1 blue, 3 green; 2 blue, 1 red, 2 green
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = Games::parse(EXAMPLE_INPUT)?;
        let result = <Day02 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 8);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = Games::parse(EXAMPLE_INPUT)?;
        let result = <Day02 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 2286);
        Ok(())
    }

    #[test]
    fn missing_colors_count_as_zero() {
        assert_eq!(
            parse_round("3 blue, 4 red"),
            CubeCounts {
                red: 4,
                green: 0,
                blue: 3
            }
        );
        assert_eq!(parse_round("2 green").red, 0);
    }

    #[test]
    fn round_takes_first_entry_per_color() {
        assert_eq!(
            parse_round("5 red, 1 blue, 7 red"),
            CubeCounts {
                red: 5,
                green: 0,
                blue: 1
            }
        );
        assert_eq!(parse_round(""), CubeCounts::default());
    }

    #[test]
    fn game_keeps_peak_of_each_color() -> DynamicResult<()> {
        let game = parse_game("Game 3: 8 green, 6 blue, 20 red; 5 blue, 4 red, 13 green")?;
        assert_eq!(
            game,
            Game {
                id: 3,
                maxes: CubeCounts {
                    red: 20,
                    green: 13,
                    blue: 6
                }
            }
        );
        Ok(())
    }

    #[test]
    fn limits_are_a_parameter() -> DynamicResult<()> {
        let parsed = Games::parse(EXAMPLE_INPUT)?;
        let generous = CubeCounts {
            red: 20,
            green: 13,
            blue: 15,
        };
        assert_eq!(sum_feasible_ids(&parsed.0, &generous)?, 15);
        assert_eq!(sum_feasible_ids(&parsed.0, &CubeCounts::default())?, 0);
        Ok(())
    }

    #[test]
    fn malformed_games_are_errors() {
        assert!(matches!(
            parse_game("Game 1 3 blue"),
            Err(Day02Error::NoColonDelimiter)
        ));
        assert!(matches!(
            parse_game("Game: 3 blue"),
            Err(Day02Error::NotGameId(label)) if label == "Game"
        ));
    }
}
