use crate::domain::model::{OutputFormat, Report};
use crate::utils::error::Result;

pub fn render(report: &Report, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(report
            .answers
            .iter()
            .map(|answer| format!("{}: {}", answer.part, answer.value))
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
    }
}
