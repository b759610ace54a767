use std::sync::LazyLock;

use aoc_framework::parsing::{parse_lines_with_offset, parse_with_context};
use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use checked_sum::CheckedSum;
use regex::Regex;

use crate::reduce::{CheckedProduct, Overflow};

#[solution_runner(name = "Day 3: Gear Ratios", parsed = Schematic, part_one = Day03, part_two = Day03)]
impl super::AdventOfCode2023<3> {}

#[derive(thiserror::Error, Debug)]
enum Day03Error {
    /// The length of the line does not match the first line's length.
    #[error("expected line length matching first line ({first_length}), found {found}")]
    MismatchedLineLength { first_length: usize, found: usize },
}

/*
Input is an engine schematic, a visual representation of the engine. Numbers are runs of digits
read left-to-right, and any character other than a digit or `.` is a symbol.

Every number and symbol becomes a component spanning a range of columns on its row. A symbol's range
is widened by one column on each side, so "touches, including diagonally" becomes "column ranges
intersect and rows are at most one apart".
*/

/// Column position in the schematic. Signed, as a symbol in column 0 spans from column -1.
type Column = i32;

/// Half-open range of columns, `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ColumnRange {
    start: Column,
    end: Column,
}

impl ColumnRange {
    fn intersects(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Type for part numbers in schematic.
type PartNumber = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ComponentKind {
    Number(PartNumber),
    Symbol(char),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SchematicComponent {
    kind: ComponentKind,
    columns: ColumnRange,
    row: usize,
}

impl SchematicComponent {
    fn is_adjacent(&self, other: &Self) -> bool {
        self.columns.intersects(&other.columns) && self.row.abs_diff(other.row) <= 1
    }
}

static COMPONENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+|[^0-9.]").expect("pattern should be valid"));

/// Scan a row left-to-right for digit runs and symbols.
fn parse_row(row: usize, line: &str) -> DynamicResult<Vec<SchematicComponent>> {
    // column of the char at byte offset `scanned`
    let mut scanned = 0;
    let mut column = 0;
    COMPONENT_RE
        .find_iter(line)
        .map(|m| -> DynamicResult<SchematicComponent> {
            column += line[scanned..m.start()].chars().count();
            scanned = m.start();
            let start = Column::try_from(column)?;
            let token = m.as_str();

            let component = if token.starts_with(|c: char| c.is_ascii_digit()) {
                let width = Column::try_from(token.len())?;
                SchematicComponent {
                    kind: ComponentKind::Number(parse_with_context(token)?),
                    columns: ColumnRange {
                        start,
                        end: start + width,
                    },
                    row,
                }
            } else {
                let symbol = token.chars().next().unwrap_or_default();
                SchematicComponent {
                    kind: ComponentKind::Symbol(symbol),
                    columns: ColumnRange {
                        start: start - 1,
                        end: start + 2,
                    },
                    row,
                }
            };
            Ok(component)
        })
        .collect()
}

/// Components grouped by row, in row order. Each group is keyed by its line index, as blank lines
/// hold no row.
struct Schematic {
    rows: Vec<(usize, Vec<SchematicComponent>)>,
}

impl ParseData for Schematic {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let mut first_line_length = None;
        let rows = parse_lines_with_offset(input, 0, |line_idx, line| {
            // require all line lengths match
            let line_length = line.chars().count();
            if let Some(first_length) = first_line_length {
                if line_length != first_length {
                    return Err(Day03Error::MismatchedLineLength {
                        first_length,
                        found: line_length,
                    }
                    .into());
                }
            } else {
                first_line_length = Some(line_length);
            }

            Ok((line_idx, parse_row(line_idx, line)?))
        })
        .collect::<Result<_, _>>()?;

        Ok(Self { rows })
    }
}

impl Schematic {
    fn components(&self) -> impl Iterator<Item = &SchematicComponent> {
        self.rows.iter().flat_map(|(_, components)| components)
    }

    /// Components adjacent to `component`, only searching the rows next to it.
    fn neighbors<'a>(
        &'a self,
        component: &'a SchematicComponent,
    ) -> impl Iterator<Item = &'a SchematicComponent> {
        let first_row = component.row.saturating_sub(1);
        let last_row = component.row.saturating_add(1);
        self.rows
            .iter()
            .skip_while(move |(row, _)| *row < first_row)
            .take_while(move |(row, _)| *row <= last_row)
            .flat_map(|(_, components)| components)
            .filter(move |other| *other != component && component.is_adjacent(other))
    }
}

/*
For part 1, find the sum of all part numbers.

A part number is any number adjacent to a symbol, cardinal or diagonal.
*/

impl Schematic {
    fn find_part_numbers(&self) -> impl Iterator<Item = PartNumber> {
        self.components().filter_map(move |component| match component.kind {
            ComponentKind::Number(value) => self
                .neighbors(component)
                .any(|other| matches!(other.kind, ComponentKind::Symbol(_)))
                .then_some(value),
            ComponentKind::Symbol(_) => None,
        })
    }
}

fn sum_part_numbers(schematic: &Schematic) -> Result<PartNumber, Overflow> {
    schematic
        .find_part_numbers()
        .checked_sum()
        .ok_or(Overflow("summing part numbers"))
}

struct Day03;

impl Solution<PartOne> for Day03 {
    type Input = Schematic;
    type Output = PartNumber;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(sum_part_numbers(input)?)
    }
}

/*
For part 2, find the sum of all gear ratios.

A gear is a `*` symbol that is adjacent to exactly two part numbers. A gear ratio is calculated by
multiplying the two part numbers of the gear. Each `*` counts its own neighbors, so one number can
belong to several gears.
*/

type GearRatio = u64;

impl Schematic {
    /// Ratios of every gear, `None` in place of a ratio that overflowed.
    fn find_gear_ratios(&self) -> impl Iterator<Item = Option<GearRatio>> {
        self.components()
            .filter(|component| component.kind == ComponentKind::Symbol('*'))
            .filter_map(move |gear| {
                let numbers: Vec<GearRatio> = self
                    .neighbors(gear)
                    .filter_map(|other| match other.kind {
                        ComponentKind::Number(value) => Some(GearRatio::from(value)),
                        ComponentKind::Symbol(_) => None,
                    })
                    .collect();
                (numbers.len() == 2).then(|| numbers.into_iter().checked_product())
            })
    }
}

fn sum_gear_ratios(schematic: &Schematic) -> Result<GearRatio, Overflow> {
    schematic
        .find_gear_ratios()
        .collect::<Option<Vec<_>>>()
        .and_then(|ratios| ratios.into_iter().checked_sum())
        .ok_or(Overflow("summing gear ratios"))
}

impl Solution<PartTwo> for Day03 {
    type Input = Schematic;
    type Output = GearRatio;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(sum_gear_ratios(input)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"467..114..
...*......
..35..633.
......#...
617*......
.....+.58.
..592.....
......755.
...$.*....
.664.598..
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = Schematic::parse(EXAMPLE_INPUT)?;
        let result = <Day03 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 4361);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = Schematic::parse(EXAMPLE_INPUT)?;
        let result = <Day03 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 467_835);
        Ok(())
    }

    #[test]
    fn row_components_carry_padded_symbol_ranges() -> DynamicResult<()> {
        let components = parse_row(4, "617*..#")?;
        assert_eq!(
            components,
            [
                SchematicComponent {
                    kind: ComponentKind::Number(617),
                    columns: ColumnRange { start: 0, end: 3 },
                    row: 4,
                },
                SchematicComponent {
                    kind: ComponentKind::Symbol('*'),
                    columns: ColumnRange { start: 2, end: 5 },
                    row: 4,
                },
                SchematicComponent {
                    kind: ComponentKind::Symbol('#'),
                    columns: ColumnRange { start: 5, end: 8 },
                    row: 4,
                },
            ]
        );
        Ok(())
    }

    #[test]
    fn adjacency_is_range_intersection_within_one_row() -> DynamicResult<()> {
        let numbers = parse_row(1, "12...")?;
        let number = numbers[0];
        let touching = parse_row(2, "..*..")?[0];
        let diagonal_far = parse_row(0, "...*.")?[0];
        let two_rows_down = parse_row(3, "..*..")?[0];

        assert!(number.is_adjacent(&touching));
        assert!(!number.is_adjacent(&diagonal_far));
        assert!(!number.is_adjacent(&two_rows_down));
        Ok(())
    }

    #[test]
    fn gears_need_exactly_two_numbers() -> DynamicResult<()> {
        let one_neighbor = Schematic::parse("5*.\n...\n")?;
        assert_eq!(sum_gear_ratios(&one_neighbor)?, 0);

        let three_neighbors = Schematic::parse("2.3\n.*.\n.4.\n")?;
        assert_eq!(sum_gear_ratios(&three_neighbors)?, 0);

        let two_neighbors = Schematic::parse("2.3\n.*.\n...\n")?;
        assert_eq!(sum_gear_ratios(&two_neighbors)?, 6);
        Ok(())
    }

    #[test]
    fn one_number_can_serve_several_gears() -> DynamicResult<()> {
        let parsed = Schematic::parse("2*5*3\n")?;
        assert_eq!(sum_gear_ratios(&parsed)?, 10 + 15);
        assert_eq!(sum_part_numbers(&parsed)?, 10);
        Ok(())
    }

    #[test]
    fn only_star_symbols_are_gears() -> DynamicResult<()> {
        let parsed = Schematic::parse("2#3\n")?;
        assert_eq!(sum_gear_ratios(&parsed)?, 0);
        assert_eq!(sum_part_numbers(&parsed)?, 5);
        Ok(())
    }

    #[test]
    fn columns_count_chars_after_earlier_tokens() -> DynamicResult<()> {
        let components = parse_row(0, "é12.&..345")?;
        let starts: Vec<Column> = components
            .iter()
            .map(|component| component.columns.start)
            .collect();
        assert_eq!(starts, [-1, 1, 3, 7]);
        assert_eq!(components[3].kind, ComponentKind::Number(345));
        assert_eq!(components[3].columns.end, 10);
        Ok(())
    }

    #[test]
    fn blank_lines_keep_row_positions() -> DynamicResult<()> {
        assert_eq!(sum_part_numbers(&Schematic::parse("\n*..\n5..\n")?)?, 5);
        assert_eq!(sum_part_numbers(&Schematic::parse("\n\n5*.\n")?)?, 5);
        assert_eq!(sum_gear_ratios(&Schematic::parse("...\n\n2..\n*..\n3..\n")?)?, 6);
        Ok(())
    }

    #[test]
    fn blank_lines_do_not_join_distant_rows() -> DynamicResult<()> {
        let parsed = Schematic::parse("5..\n\n*..\n")?;
        assert_eq!(sum_part_numbers(&parsed)?, 0);
        Ok(())
    }

    #[test]
    fn mismatched_line_lengths_are_errors() {
        assert!(Schematic::parse("123\n45\n").is_err());
    }
}
