use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Day {
    Calibration,
    CubeGame,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Part {
    One,
    Two,
}

impl Part {
    pub const ALL: [Part; 2] = [Part::One, Part::Two];
}

impl TryFrom<u8> for Day {
    type Error = String;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        match value {
            1 => Ok(Day::Calibration),
            2 => Ok(Day::CubeGame),
            other => Err(format!("no solution for day {}", other)),
        }
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        match day {
            Day::Calibration => 1,
            Day::CubeGame => 2,
        }
    }
}

impl TryFrom<u8> for Part {
    type Error = String;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        match value {
            1 => Ok(Part::One),
            2 => Ok(Part::Two),
            other => Err(format!("puzzles only have parts 1 and 2, got {}", other)),
        }
    }
}

impl From<Part> for u8 {
    fn from(part: Part) -> Self {
        match part {
            Part::One => 1,
            Part::Two => 2,
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "day {}", u8::from(*self))
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Part {}", u8::from(*self))
    }
}

/// What to do with a line that does not match its day's grammar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum MalformedPolicy {
    #[default]
    Abort,
    Skip,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub part: Part,
    pub value: u64,
    pub skipped_lines: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub day: Day,
    pub input: String,
    pub answers: Vec<Answer>,
}

impl Report {
    pub fn answer(&self, part: Part) -> Option<u64> {
        self.answers
            .iter()
            .find(|answer| answer.part == part)
            .map(|answer| answer.value)
    }
}
