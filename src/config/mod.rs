#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

pub use toml_config::TomlConfig;

use crate::domain::model::{Day, MalformedPolicy, OutputFormat, Part};
use crate::utils::error::{PuzzleError, Result};
use crate::utils::validation::{validate_path, Validate};
use serde::{Deserialize, Serialize};

/// The puzzle input is looked up in the working directory unless told otherwise.
pub const DEFAULT_INPUT_PATH: &str = "input.txt";

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    pub day: Day,
    pub parts: Vec<Part>,
    pub input_path: String,
    pub on_malformed: MalformedPolicy,
    pub format: OutputFormat,
    pub verbose: bool,
    pub json_logs: bool,
}

impl RunConfig {
    pub fn new(day: Day, input_path: impl Into<String>) -> Self {
        Self {
            day,
            parts: Part::ALL.to_vec(),
            input_path: input_path.into(),
            on_malformed: MalformedPolicy::default(),
            format: OutputFormat::default(),
            verbose: false,
            json_logs: false,
        }
    }

    pub fn with_parts(mut self, parts: &[Part]) -> Self {
        self.parts = parts.to_vec();
        self
    }

    pub fn with_policy(mut self, on_malformed: MalformedPolicy) -> Self {
        self.on_malformed = on_malformed;
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }
}

impl Validate for RunConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input.path", &self.input_path)?;
        if self.parts.is_empty() {
            return Err(PuzzleError::ConfigValidationError {
                field: "run.parts".to_string(),
                message: "at least one part must be selected".to_string(),
            });
        }
        Ok(())
    }
}

pub(crate) fn parse_day(value: u8) -> Result<Day> {
    Day::try_from(value).map_err(|reason| PuzzleError::InvalidConfigValueError {
        field: "run.day".to_string(),
        value: value.to_string(),
        reason,
    })
}

/// Sorted, without duplicates.
pub(crate) fn parse_parts(values: &[u8]) -> Result<Vec<Part>> {
    let mut parts = values
        .iter()
        .map(|&value| {
            Part::try_from(value).map_err(|reason| PuzzleError::InvalidConfigValueError {
                field: "run.parts".to_string(),
                value: value.to_string(),
                reason,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    parts.sort();
    parts.dedup();
    Ok(parts)
}
