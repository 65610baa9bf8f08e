use crate::adapters::input::read_lines;
use crate::config::RunConfig;
use crate::core::pipeline::{parse_games, solve_calibration, solve_cube_game};
use crate::domain::model::{Answer, Day, Report};
use crate::utils::error::Result;

pub struct PuzzleEngine {
    config: RunConfig,
}

impl PuzzleEngine {
    pub fn new(config: RunConfig) -> Self {
        Self { config }
    }

    /// Reads the input, parses it for the configured day and reduces it to one answer per part.
    pub fn run(&self) -> Result<Report> {
        tracing::info!(
            "Starting {} with input {}",
            self.config.day,
            self.config.input_path
        );

        // Extract
        let lines = read_lines(&self.config.input_path)?;
        tracing::info!("Extracted {} lines", lines.len());

        // Transform + aggregate
        let answers = match self.config.day {
            Day::Calibration => self.solve_calibration(&lines)?,
            Day::CubeGame => self.solve_cube_game(&lines)?,
        };

        for answer in &answers {
            if answer.skipped_lines > 0 {
                tracing::warn!(
                    "{} skipped {} malformed lines",
                    answer.part,
                    answer.skipped_lines
                );
            }
            tracing::info!("{}: {}", answer.part, answer.value);
        }

        Ok(Report {
            day: self.config.day,
            input: self.config.input_path.clone(),
            answers,
        })
    }

    fn solve_calibration(&self, lines: &[String]) -> Result<Vec<Answer>> {
        self.config
            .parts
            .iter()
            .map(|&part| solve_calibration(lines, part, self.config.on_malformed))
            .collect()
    }

    fn solve_cube_game(&self, lines: &[String]) -> Result<Vec<Answer>> {
        let games = parse_games(lines, self.config.on_malformed)?;
        Ok(self
            .config
            .parts
            .iter()
            .map(|&part| solve_cube_game(&games, part))
            .collect())
    }
}
