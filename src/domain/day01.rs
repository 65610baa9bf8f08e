//! Trebuchet calibration: every line hides a first and a last digit.

use thiserror::Error;

const NUMBER_WORDS: [(&str, u8); 9] = [
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
];

const MIN_WORD_LEN: usize = 3;
const MAX_WORD_LEN: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanMode {
    /// Only ASCII digits count.
    Digits,
    /// ASCII digits and the spelled-out words `one` to `nine`.
    DigitsAndWords,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CalibrationError {
    #[error("no digits found in {0:?}")]
    NoDigits(String),
}

/// Non-empty, ordered digits of one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitSequence(Vec<u8>);

impl DigitSequence {
    pub fn scan(line: &str, mode: ScanMode) -> Result<Self, CalibrationError> {
        let digits = scan_digits(line, mode);
        if digits.is_empty() {
            return Err(CalibrationError::NoDigits(line.to_string()));
        }
        Ok(Self(digits))
    }

    pub fn digits(&self) -> &[u8] {
        &self.0
    }

    pub fn first(&self) -> u8 {
        self.0[0]
    }

    pub fn last(&self) -> u8 {
        self.0[self.0.len() - 1]
    }

    pub fn calibration_value(&self) -> u32 {
        10 * u32::from(self.first()) + u32::from(self.last())
    }
}

/// Digits of `line` from left to right. Words may overlap (`oneight` gives 1 then 8),
/// so the scan only ever advances by one byte.
pub fn scan_digits(line: &str, mode: ScanMode) -> Vec<u8> {
    let bytes = line.as_bytes();
    let mut digits = Vec::new();

    for start in 0..bytes.len() {
        let byte = bytes[start];
        if byte.is_ascii_digit() {
            digits.push(byte - b'0');
        } else if mode == ScanMode::DigitsAndWords {
            if let Some(value) = word_at(bytes, start) {
                digits.push(value);
            }
        }
    }

    digits
}

fn word_at(bytes: &[u8], start: usize) -> Option<u8> {
    (MIN_WORD_LEN..=MAX_WORD_LEN)
        .filter_map(|len| bytes.get(start..start + len))
        .find_map(|window| {
            NUMBER_WORDS
                .iter()
                .find(|(word, _)| word.as_bytes() == window)
                .map(|&(_, value)| value)
        })
}

pub fn sum_calibration_values<'a>(sequences: impl IntoIterator<Item = &'a DigitSequence>) -> u64 {
    sequences
        .into_iter()
        .map(|sequence| u64::from(sequence.calibration_value()))
        .sum()
}
