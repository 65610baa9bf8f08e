use crate::config::{RunConfig, TomlConfig};
use crate::domain::model::{MalformedPolicy, OutputFormat};
use crate::utils::error::Result;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "puzzle-etl")]
#[command(about = "Solves the trebuchet calibration (day 1) and cube game (day 2) puzzles")]
pub struct CliConfig {
    /// Puzzle day to solve
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub day: Option<u8>,

    /// Puzzle input file [default: input.txt]
    #[arg(short, long)]
    pub input: Option<String>,

    /// Solve only this part (both parts when omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Answer output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Abort on the first malformed line, or skip it with a warning
    #[arg(long, value_enum)]
    pub on_malformed: Option<MalformedPolicy>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long)]
    pub json_logs: bool,
}

impl CliConfig {
    /// Loads `--config` if given, then lets command line flags override it.
    pub fn resolve(&self) -> Result<RunConfig> {
        let mut config = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };
        self.apply_overrides(&mut config);
        config.run_config()
    }

    fn apply_overrides(&self, config: &mut TomlConfig) {
        if let Some(day) = self.day {
            config.run.day = Some(day);
        }
        if let Some(part) = self.part {
            config.run.parts = Some(vec![part]);
        }
        if let Some(input) = &self.input {
            config.input.path = Some(input.clone());
        }
        if let Some(format) = self.format {
            config.output.format = Some(format);
        }
        if let Some(policy) = self.on_malformed {
            config.errors.on_malformed = Some(policy);
        }
        if self.verbose {
            config.logging.verbose = Some(true);
        }
        if self.json_logs {
            config.logging.json = Some(true);
        }
    }
}
