use crate::domain::day01::{sum_calibration_values, DigitSequence, ScanMode};
use crate::domain::day02::{sum_of_powers, sum_possible_game_ids, BagLimit, Game};
use crate::domain::model::{Answer, MalformedPolicy, Part};
use crate::utils::error::{PuzzleError, Result};

/// Records parsed from the input, plus how many malformed lines were left out.
#[derive(Debug)]
pub struct Collected<T> {
    pub records: Vec<T>,
    pub skipped: usize,
}

/// Parses every non-blank line. Line numbers in errors and warnings are 1-based.
pub fn collect_records<T, E: std::fmt::Display>(
    lines: &[String],
    policy: MalformedPolicy,
    mut parse: impl FnMut(&str) -> std::result::Result<T, E>,
) -> Result<Collected<T>> {
    let mut records = Vec::with_capacity(lines.len());
    let mut skipped = 0;

    for (index, line) in lines.iter().enumerate() {
        let line_number = index + 1;
        if line.trim().is_empty() {
            tracing::debug!("Ignoring blank line {}", line_number);
            continue;
        }

        match parse(line) {
            Ok(record) => records.push(record),
            Err(e) => match policy {
                MalformedPolicy::Abort => {
                    return Err(PuzzleError::MalformedLine {
                        line_number,
                        content: line.clone(),
                        reason: e.to_string(),
                    });
                }
                MalformedPolicy::Skip => {
                    tracing::warn!("⚠️ Skipping malformed line {}: {}", line_number, e);
                    skipped += 1;
                }
            },
        }
    }

    Ok(Collected { records, skipped })
}

pub fn scan_mode(part: Part) -> ScanMode {
    match part {
        Part::One => ScanMode::Digits,
        Part::Two => ScanMode::DigitsAndWords,
    }
}

/// Day 1: sum of calibration values. Part 2 also reads spelled-out digits, so the lines are
/// scanned once per part.
pub fn solve_calibration(lines: &[String], part: Part, policy: MalformedPolicy) -> Result<Answer> {
    let mode = scan_mode(part);
    let collected = collect_records(lines, policy, |line| DigitSequence::scan(line, mode))?;
    tracing::debug!(
        "Scanned {} calibration lines with {:?}",
        collected.records.len(),
        mode
    );

    Ok(Answer {
        part,
        value: sum_calibration_values(&collected.records),
        skipped_lines: collected.skipped,
    })
}

pub fn parse_games(lines: &[String], policy: MalformedPolicy) -> Result<Collected<Game>> {
    let collected = collect_records(lines, policy, Game::parse)?;
    tracing::debug!("Parsed {} games", collected.records.len());
    Ok(collected)
}

/// Day 2: part 1 sums the ids of games possible with the standard bag, part 2 sums the powers.
pub fn solve_cube_game(games: &Collected<Game>, part: Part) -> Answer {
    let value = match part {
        Part::One => sum_possible_game_ids(&games.records, &BagLimit::STANDARD),
        Part::Two => sum_of_powers(&games.records),
    };

    Answer {
        part,
        value,
        skipped_lines: games.skipped,
    }
}
